//! Portfolio Card Component
//!
//! One catalog item: image, keyword badge, text and technology tags.

use leptos::prelude::*;

use crate::context::use_portfolio;
use crate::models::Item;

/// Technology tags shown before collapsing into "+N more"
const TECH_PREVIEW_LIMIT: usize = 3;

#[component]
pub fn PortfolioCard(item: Item) -> impl IntoView {
    let ctx = use_portfolio();
    let show_links = ctx.site.with_value(|site| site.show_project_links);

    let id = item.id.clone();
    let card_class = move || {
        if ctx.is_highlighted(&id) {
            "portfolio-card highlighted"
        } else {
            "portfolio-card"
        }
    };

    let (shown_tech, more_tech) = item.tech_preview(TECH_PREVIEW_LIMIT);
    let tech_tags = shown_tech
        .iter()
        .map(|tech| view! { <span class="tech-tag">{tech.clone()}</span> })
        .collect_view();
    let more_tag = (more_tech > 0).then(|| view! { <span class="tech-tag">{format!("+{} more", more_tech)}</span> });

    let badge = item.highlight_keyword.clone().map(|keyword| {
        view! { <span class=format!("card-badge accent-{}", item.category.slug())>{keyword}</span> }
    });

    let links = show_links.then(|| {
        let demo = item.demo_url.clone().map(|href| {
            view! { <a class="card-link" href=href target="_blank" rel="noopener noreferrer">"Live Demo"</a> }
        });
        let source = item.github_url.clone().map(|href| {
            view! { <a class="card-link" href=href target="_blank" rel="noopener noreferrer">"Source Code"</a> }
        });
        view! { <div class="card-links">{demo}{source}</div> }
    });

    view! {
        <div class=card_class>
            <div class="card-media">
                <img src=item.image_src().to_string() alt=item.title.clone() width="600" height="400" />
                {badge}
            </div>
            <div class="card-body">
                <h3 class="card-title">{item.title.clone()}</h3>
                <p class="card-description">{item.description.clone()}</p>
                <div class="card-tech">
                    {tech_tags}
                    {more_tag}
                </div>
            </div>
            {links}
        </div>
    }
}
