//! Header Component
//!
//! Sticky top bar with branding, contact link and category navigation.

use leptos::prelude::*;

use crate::components::CategoryNav;
use crate::context::use_portfolio;
use crate::models::Category;

#[component]
pub fn Header(
    #[prop(into)] active_category: Signal<Category>,
    #[prop(into)] on_select: Callback<Category>,
) -> impl IntoView {
    let ctx = use_portfolio();
    let brand = ctx.site.with_value(|site| site.brand.clone());
    let (menu_open, set_menu_open) = signal(false);

    // Picking from the mobile menu also closes it
    let on_mobile_select = Callback::new(move |category: Category| {
        on_select.run(category);
        set_menu_open.set(false);
    });

    let mailto = format!("mailto:{}", brand.contact_email);

    view! {
        <header class="site-header">
            <div class="header-brand">
                <img class="header-logo" src=brand.logo.clone() alt="Logo" />
                <p class="header-tagline">{brand.tagline.clone()}</p>
            </div>

            <div class="header-title">
                <h2>{brand.portfolio_title.clone()}</h2>
                <a class="header-contact" href=mailto>{brand.contact_email.clone()}</a>
            </div>

            // Desktop navigation
            <div class="header-nav-desktop">
                <CategoryNav active=active_category on_select=on_select />
            </div>

            // Mobile hamburger + dropdown
            <button
                class="menu-toggle"
                aria-label="Toggle menu"
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                {move || if menu_open.get() { "✕" } else { "☰" }}
            </button>
            <div class=move || if menu_open.get() { "header-nav-mobile open" } else { "header-nav-mobile" }>
                <CategoryNav active=active_category on_select=on_mobile_select vertical=true />
            </div>
        </header>
    }
}
