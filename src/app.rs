//! Portfolio App
//!
//! Root component: header, hero, one section per category, footer.

use leptos::prelude::*;

use crate::catalog::Catalog;
use crate::components::{Footer, Header, Hero, PortfolioSection};
use crate::config::SiteConfig;
use crate::context::PortfolioContext;
use crate::models::Category;
use crate::query::current_query_param;
use crate::view_state::{ViewState, HIGHLIGHT_PARAM};

#[component]
pub fn App(catalog: Catalog, site: SiteConfig) -> impl IntoView {
    let groups = catalog.group_by_category();
    // Call-to-action jumps to the first rendered section
    let cta_href = groups
        .first()
        .map(|group| format!("#{}", group.category.section_id()))
        .unwrap_or_else(|| "#".to_string());

    // State
    let view_state = signal(ViewState::new(site.default_category));
    let ctx = PortfolioContext::new(catalog, site, view_state);

    // Provide context to all children
    provide_context(ctx);

    // Highlight from ?id=... once the sections are mounted
    Effect::new(move |_| {
        let param = current_query_param(HIGHLIGHT_PARAM);
        log::info!("page load, {}={:?}", HIGHLIGHT_PARAM, param);
        ctx.apply_highlight_param(param.as_deref());
    });

    // Never scroll after teardown
    on_cleanup(move || ctx.cancel_pending_scroll());

    let active_category = Memo::new(move |_| ctx.active_category());
    let on_select = Callback::new(move |category: Category| {
        log::debug!("category selected: {}", category.slug());
        ctx.select_category(category);
    });

    view! {
        <main class="portfolio-page">
            <Header active_category=active_category on_select=on_select />

            <Hero cta_href=cta_href />

            // Portfolio sections, one per category with items
            {groups
                .into_iter()
                .map(|group| view! { <PortfolioSection group=group /> })
                .collect_view()}

            <Footer />
        </main>
    }
}
