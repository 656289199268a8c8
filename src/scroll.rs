//! Section Scrolling
//!
//! Smooth-scrolls category sections into view on a cancellable timer.

use gloo_timers::callback::Timeout;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::models::Category;
use crate::view_state::ScrollRequest;

/// Holds at most one pending scroll; a new request replaces the old one.
///
/// `H` is the armed timer handle. Dropping it must clear the timer.
pub struct ScrollScheduler<H = Timeout> {
    pending: Option<H>,
    arm: fn(ScrollRequest) -> H,
}

impl Default for ScrollScheduler<Timeout> {
    fn default() -> Self {
        Self::new(arm_timeout)
    }
}

impl<H> ScrollScheduler<H> {
    pub fn new(arm: fn(ScrollRequest) -> H) -> Self {
        Self { pending: None, arm }
    }

    pub fn schedule(&mut self, request: ScrollRequest) {
        self.cancel();
        log::debug!("scroll to {} in {}ms", request.category.slug(), request.delay_ms());
        self.pending = Some((self.arm)(request));
    }

    pub fn cancel(&mut self) {
        // Dropping the handle clears the timer
        self.pending = None;
    }

    pub fn pending(&self) -> Option<&H> {
        self.pending.as_ref()
    }
}

fn arm_timeout(request: ScrollRequest) -> Timeout {
    Timeout::new(request.delay_ms(), move || {
        scroll_to_section(request.category);
    })
}

/// Bring the rendered section for `category` into view
pub fn scroll_to_section(category: Category) {
    let section = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(&category.section_id()));

    match section {
        Some(el) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => log::debug!("no rendered section for {}", category.slug()),
    }
}
