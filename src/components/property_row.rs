//! Property Row Component
//!
//! One row of the list: the four bound fields plus duplicate/remove
//! actions. All edits are forwarded to the store helpers; no validation
//! happens here.

use leptos::prelude::*;

use crate::components::{FieldWithError, TypeSelect};
use crate::models::{PropertyDraft, PropertyField};
use crate::store::{store_duplicate_row, store_remove_row, store_set_field, use_form_store};

/// A single editable row
#[component]
pub fn PropertyRow(index: usize, row: PropertyDraft) -> impl IntoView {
    let store = use_form_store();

    let type_id = format!("properties.{index}.type");
    let name_id = format!("properties.{index}.name");
    let value_id = format!("properties.{index}.value");
    let note_id = format!("properties.{index}.note");

    view! {
        <div class="property-row">
            <FieldWithError name=type_id.clone()>
                <label for=type_id.clone()>"Property type"</label>
                <TypeSelect index=index value=row.property_type id=type_id />
            </FieldWithError>

            <FieldWithError name=name_id.clone()>
                <label for=name_id.clone()>"Name"</label>
                <input
                    type="text"
                    id=name_id
                    prop:value=row.name.clone()
                    on:input=move |ev| {
                        store_set_field(&store, index, PropertyField::Name, &event_target_value(&ev))
                    }
                />
            </FieldWithError>

            <FieldWithError name=value_id.clone()>
                <label for=value_id.clone()>"Value"</label>
                <input
                    type="text"
                    id=value_id
                    prop:value=row.value.clone()
                    on:input=move |ev| {
                        store_set_field(&store, index, PropertyField::Value, &event_target_value(&ev))
                    }
                />
            </FieldWithError>

            <FieldWithError name=note_id.clone()>
                <label for=note_id.clone()>"Note"</label>
                <input
                    type="text"
                    id=note_id
                    prop:value=row.note.clone()
                    on:input=move |ev| {
                        store_set_field(&store, index, PropertyField::Note, &event_target_value(&ev))
                    }
                />
            </FieldWithError>

            <button
                type="button"
                class="row-btn"
                on:click=move |_| store_duplicate_row(&store, index)
            >
                "Duplicate"
            </button>

            <button
                type="button"
                class="row-btn"
                on:click=move |_| store_remove_row(&store, index)
            >
                "Remove"
            </button>
        </div>
    }
}
