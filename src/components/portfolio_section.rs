//! Portfolio Section Component
//!
//! Heading plus card grid for one category. The section id is the scroll target.

use leptos::prelude::*;

use crate::catalog::CategoryGroup;
use crate::components::PortfolioCard;
use crate::context::use_portfolio;

#[component]
pub fn PortfolioSection(group: CategoryGroup) -> impl IntoView {
    let heading = use_portfolio()
        .catalog
        .with_value(|catalog| catalog.section_heading(group.category));

    view! {
        <section class="portfolio-section" id=group.category.section_id()>
            <div class="section-heading">
                <h2>{heading.title}</h2>
                <p>{heading.description}</p>
            </div>
            <div class="card-grid">
                {group
                    .items
                    .into_iter()
                    .map(|item| view! { <PortfolioCard item=item /> })
                    .collect_view()}
            </div>
        </section>
    }
}
