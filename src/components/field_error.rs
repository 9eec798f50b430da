//! Field Error Wrapper Component
//!
//! Wraps one labelled field, flags the wrapper when the error tree holds
//! an entry at the field's dotted path, and keeps a fixed-height message
//! area below so errors never shift the layout.

use dotted_path::{has_path, lookup};
use leptos::prelude::*;

use crate::store::{use_form_store, FormStateStoreFields};

/// Wrapper for one field addressed by a dotted path
///
/// # Arguments
/// * `name` - Dotted path of the wrapped field, e.g. `properties.0.name`
#[component]
pub fn FieldWithError(#[prop(into)] name: String, children: Children) -> impl IntoView {
    let store = use_form_store();
    let path = StoredValue::new(name);

    let wrapper_class = move || {
        let errors = store.errors().read();
        if has_path(&errors, &path.read_value()) {
            "field has-error"
        } else {
            "field"
        }
    };

    let message = move || {
        let errors = store.errors().read();
        lookup(&errors, &format!("{}.message", path.read_value()))
            .and_then(|leaf| leaf.as_str())
            .map(str::to_string)
            .unwrap_or_default()
    };

    view! {
        <div class=wrapper_class>
            {children()}
            <div class="error-message">{message}</div>
        </div>
    }
}
