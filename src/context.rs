//! Portfolio Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::models::Category;
use crate::scroll::ScrollScheduler;
use crate::view_state::{ScrollRequest, ViewState};

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct PortfolioContext {
    pub catalog: StoredValue<Catalog>,
    pub site: StoredValue<SiteConfig>,
    /// Active category and highlight set - read
    pub view_state: ReadSignal<ViewState>,
    /// Active category and highlight set - write
    set_view_state: WriteSignal<ViewState>,
    /// Pending section scroll, owned by the page
    scroller: StoredValue<ScrollScheduler, LocalStorage>,
}

impl PortfolioContext {
    pub fn new(
        catalog: Catalog,
        site: SiteConfig,
        view_state: (ReadSignal<ViewState>, WriteSignal<ViewState>),
    ) -> Self {
        Self {
            catalog: StoredValue::new(catalog),
            site: StoredValue::new(site),
            view_state: view_state.0,
            set_view_state: view_state.1,
            scroller: StoredValue::new_local(ScrollScheduler::default()),
        }
    }

    /// User picked a category in the nav
    pub fn select_category(&self, category: Category) {
        if let Some(request) = self.set_view_state.try_update(|state| state.select_category(category)) {
            self.schedule_scroll(request);
        }
    }

    /// Apply the `id` query parameter read at page load
    pub fn apply_highlight_param(&self, raw: Option<&str>) {
        let delay_ms = self.site.with_value(|site| site.highlight_scroll_delay_ms);
        let request = self.catalog.with_value(|catalog| {
            self.set_view_state
                .try_update(|state| state.apply_highlight_param(raw, catalog, delay_ms))
                .flatten()
        });
        let highlighted = self.view_state.with_untracked(|state| state.highlighted_ids().len());
        log::debug!("{} highlighted items", highlighted);
        if let Some(request) = request {
            self.schedule_scroll(request);
        }
    }

    pub fn is_highlighted(&self, id: &str) -> bool {
        self.view_state.with(|state| state.is_highlighted(id))
    }

    pub fn active_category(&self) -> Category {
        self.view_state.with(|state| state.active_category())
    }

    /// Drop any scroll that has not fired yet
    pub fn cancel_pending_scroll(&self) {
        self.scroller.try_update_value(|scroller| scroller.cancel());
    }

    fn schedule_scroll(&self, request: ScrollRequest) {
        self.scroller.update_value(|scroller| scroller.schedule(request));
    }
}

/// Get the portfolio context
pub fn use_portfolio() -> PortfolioContext {
    expect_context::<PortfolioContext>()
}
