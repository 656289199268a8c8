//! Category Nav Component
//!
//! Pill buttons for jumping between category sections.

use leptos::prelude::*;

use crate::models::Category;

/// Category nav
///
/// # Arguments
/// * `active` - Currently active category; its button gets the category gradient
/// * `on_select` - Called with the clicked category
/// * `vertical` - Stack buttons (mobile menu)
#[component]
pub fn CategoryNav(
    #[prop(into)] active: Signal<Category>,
    #[prop(into)] on_select: Callback<Category>,
    #[prop(optional)] vertical: bool,
) -> impl IntoView {
    let nav_class = if vertical { "category-nav vertical" } else { "category-nav" };

    view! {
        <nav class=nav_class>
            {Category::ALL
                .into_iter()
                .map(|category| {
                    let btn_class = move || {
                        if active.get() == category {
                            format!("category-nav-btn active gradient-{}", category.slug())
                        } else {
                            "category-nav-btn".to_string()
                        }
                    };
                    view! {
                        <button class=btn_class on:click=move |_| on_select.run(category)>
                            {category.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
