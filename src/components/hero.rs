//! Hero Component

use leptos::prelude::*;

use crate::context::use_portfolio;

/// Landing banner; the call-to-action links to `cta_href`
#[component]
pub fn Hero(#[prop(into)] cta_href: String) -> impl IntoView {
    let hero = use_portfolio().site.with_value(|site| site.hero.clone());

    view! {
        <section class="hero">
            <div class="hero-text">
                <h1>
                    {hero
                        .headline
                        .iter()
                        .map(|line| view! { <span class="hero-line">{line.clone()}</span> })
                        .collect_view()}
                </h1>
                <p class="hero-subheadline">{hero.subheadline.clone()}</p>
                <a class="hero-cta" href=cta_href>{hero.cta_label.clone()}</a>
            </div>
            <div class="hero-image">
                <img src=hero.image.clone() alt="hero-right" width="600" height="600" />
            </div>
        </section>
    }
}
