//! View State
//!
//! Active category and highlighted items, plus the scroll each change asks for.

use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::models::Category;

/// Query parameter carrying comma-separated item ids to highlight
pub const HIGHLIGHT_PARAM: &str = "id";

/// When a scroll should run relative to the state change that caused it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTiming {
    /// Next tick, once the update has rendered
    AfterRender,
    /// Fixed delay so the target section exists in the layout
    Delayed(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub category: Category,
    pub timing: ScrollTiming,
}

impl ScrollRequest {
    pub fn delay_ms(&self) -> u32 {
        match self.timing {
            ScrollTiming::AfterRender => 0,
            ScrollTiming::Delayed(ms) => ms,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    active_category: Category,
    highlighted_ids: HashSet<String>,
}

impl ViewState {
    pub fn new(default_category: Category) -> Self {
        Self {
            active_category: default_category,
            highlighted_ids: HashSet::new(),
        }
    }

    pub fn active_category(&self) -> Category {
        self.active_category
    }

    pub fn highlighted_ids(&self) -> &HashSet<String> {
        &self.highlighted_ids
    }

    pub fn is_highlighted(&self, id: &str) -> bool {
        self.highlighted_ids.contains(id)
    }

    /// Direct category selection. Highlights are left alone.
    pub fn select_category(&mut self, category: Category) -> ScrollRequest {
        self.active_category = category;
        ScrollRequest {
            category,
            timing: ScrollTiming::AfterRender,
        }
    }

    /// Apply the raw `id` parameter read at page load.
    ///
    /// The category of the first comma segment, taken verbatim, becomes active
    /// and a delayed scroll is requested. An unknown first segment still
    /// highlights but changes nothing else.
    pub fn apply_highlight_param(
        &mut self,
        raw: Option<&str>,
        catalog: &Catalog,
        delay_ms: u32,
    ) -> Option<ScrollRequest> {
        let raw = raw.filter(|raw| !raw.is_empty())?;
        self.highlighted_ids = parse_highlight_ids(raw).into_iter().collect();

        // Lookup key is not trimmed: ",a" and " a" do not match item "a"
        let first = raw.split(',').next().unwrap_or(raw);
        let Some(item) = catalog.find(first) else {
            log::debug!("highlight target \"{}\" is not in the catalog", first);
            return None;
        };

        self.active_category = item.category;
        Some(ScrollRequest {
            category: item.category,
            timing: ScrollTiming::Delayed(delay_ms),
        })
    }
}

/// Split a comma-separated id list, dropping blanks and repeats
pub fn parse_highlight_ids(raw: &str) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    for id in raw.split(',').map(str::trim).filter(|id| !id.is_empty()) {
        if !ids.iter().any(|seen| seen == id) {
            ids.push(id.to_string());
        }
    }
    ids
}
