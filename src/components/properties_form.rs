//! Properties Form Component
//!
//! The dynamic list form: keyed rows, add/submit actions, and the submit
//! boundary routing to the valid/invalid callbacks.

use leptos::prelude::*;

use crate::components::PropertyRow;
use crate::models::Property;
use crate::store::{
    store_append_row, store_clear_errors, store_set_errors, use_form_store, FormStateStoreFields,
};
use crate::validate::validate_properties;

/// The property list form
///
/// `on_valid` and `on_invalid` are the two mutually exclusive submission
/// outcomes; exactly one runs per submit. This pair is the integration
/// seam for a real backend.
#[component]
pub fn PropertiesForm(
    #[prop(into)] on_valid: Callback<Vec<Property>>,
    #[prop(into)] on_invalid: Callback<serde_json::Value>,
) -> impl IntoView {
    let store = use_form_store();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let rows = store.properties().get();
        web_sys::console::log_1(&format!("[FORM] Submitting {} rows", rows.len()).into());

        match validate_properties(&rows) {
            Ok(valid) => {
                store_clear_errors(&store);
                on_valid.run(valid);
            }
            Err(errors) => {
                store_set_errors(&store, errors.clone());
                on_invalid.run(errors);
            }
        }
    };

    let rows_each = move || store.properties().get().into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <form class="properties-form" on:submit=on_submit>
            <For
                each=rows_each
                key=|(index, row)| (*index, row.id.clone())
                children=move |(index, row)| {
                    view! { <PropertyRow index=index row=row /> }
                }
            />

            <div class="form-actions">
                <button type="button" class="add-btn" on:click=move |_| store_append_row(&store)>
                    "Add"
                </button>
                <button type="submit" class="submit-btn">"Submit"</button>
            </div>
        </form>
    }
}
