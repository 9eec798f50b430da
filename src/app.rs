//! Property Form App
//!
//! Root component: owns the form store and wires the submit boundary to
//! console logging.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::PropertiesForm;
use crate::models::Property;
use crate::store::FormState;

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(FormState::default());

    // Provide the store to all children
    provide_context(store);

    let on_valid = Callback::new(move |properties: Vec<Property>| {
        web_sys::console::log_1(
            &format!("[SUBMIT] Accepted {} properties", properties.len()).into(),
        );
        if let Ok(payload) = serde_json::to_string_pretty(&properties) {
            web_sys::console::log_1(&payload.into());
        }
    });

    let on_invalid = Callback::new(move |errors: serde_json::Value| {
        web_sys::console::log_1(&format!("[SUBMIT] Rejected: {errors}").into());
    });

    view! {
        <main class="app-layout">
            <h1>"Properties"</h1>

            <PropertiesForm on_valid=on_valid on_invalid=on_invalid />
        </main>
    }
}
