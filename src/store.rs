//! Form State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Mutations go
//! through the helper functions below, which delegate to the pure list
//! operations in `form`.

use leptos::prelude::*;
use reactive_stores::Store;
use serde_json::Value;

use crate::form;
use crate::models::{PropertyDraft, PropertyField};

/// Form session state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct FormState {
    /// Ordered rows being edited
    pub properties: Vec<PropertyDraft>,
    /// Error tree from the last failed submit, `Null` when clean
    pub errors: Value,
}

/// Type alias for the store
pub type FormStore = Store<FormState>;

/// Get the form store from context
pub fn use_form_store() -> FormStore {
    expect_context::<FormStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a blank row at the end of the list
pub fn store_append_row(store: &FormStore) {
    form::append(&mut store.properties().write(), PropertyDraft::blank());
}

/// Insert a field-value copy of the row at `index` directly after it
pub fn store_duplicate_row(store: &FormStore, index: usize) {
    form::duplicate(&mut store.properties().write(), index);
}

/// Remove the row at `index`
pub fn store_remove_row(store: &FormStore, index: usize) {
    form::remove(&mut store.properties().write(), index);
}

/// Replace one field of the row at `index` with its raw input value
pub fn store_set_field(store: &FormStore, index: usize, field: PropertyField, raw: &str) {
    form::set_field(&mut store.properties().write(), index, field, raw);
}

/// Record the error tree from a failed submit
pub fn store_set_errors(store: &FormStore, errors: Value) {
    store.errors().set(errors);
}

/// Clear the recorded error tree
pub fn store_clear_errors(store: &FormStore) {
    store.errors().set(Value::Null);
}
