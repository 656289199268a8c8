//! Load Failure Component
//!
//! Shown in place of the page when embedded data fails to parse.

use leptos::prelude::*;

#[component]
pub fn LoadFailure(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="load-failure">
            <h1>"Portfolio unavailable"</h1>
            <p>{message}</p>
        </div>
    }
}
