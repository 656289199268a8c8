//! Footer Component

use leptos::prelude::*;

use crate::context::use_portfolio;

#[component]
pub fn Footer() -> impl IntoView {
    let footer = use_portfolio().site.with_value(|site| site.footer.clone());

    view! {
        <footer class="site-footer">
            <div class="footer-text">
                <h3>{footer.title}</h3>
                <p>{footer.subtitle}</p>
            </div>
            <div class="footer-links">
                {footer
                    .links
                    .into_iter()
                    .map(|link| view! { <a href=link.href>{link.label}</a> })
                    .collect_view()}
            </div>
        </footer>
    }
}
