//! Type Select Component
//!
//! Property kind selector with a placeholder option for the unchosen
//! state.

use leptos::prelude::*;

use crate::models::{PropertyField, PropertyType};
use crate::store::{store_set_field, use_form_store};

/// Select element bound to the type field of the row at `index`
#[component]
pub fn TypeSelect(
    index: usize,
    value: Option<PropertyType>,
    #[prop(into)] id: String,
) -> impl IntoView {
    let store = use_form_store();

    view! {
        <select
            class="type-select"
            id=id
            on:change=move |ev| {
                store_set_field(&store, index, PropertyField::Type, &event_target_value(&ev))
            }
        >
            <option value="" selected=value.is_none()>"Select property type"</option>
            {PropertyType::ALL
                .iter()
                .map(|kind| {
                    let kind = *kind;
                    view! {
                        <option value=kind.as_str() selected=(value == Some(kind))>
                            {kind.label()}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
