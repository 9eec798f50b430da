//! Row Validation
//!
//! Pure schema checks for one row and for the whole list. Failures come
//! back as data; nothing here touches the DOM or the store.

use serde_json::{json, Map, Value};

use crate::models::{Property, PropertyDraft, PropertyField};

pub const TYPE_REQUIRED: &str = "Property type is required.";
pub const NAME_REQUIRED: &str = "Property name is required.";
pub const VALUE_REQUIRED: &str = "Property value is required.";
pub const VALUE_NOT_A_NUMBER: &str = "Property value must be a number.";
// TODO: copy says "name" but flags the note field; confirm the wording
// with design before changing user-facing text.
pub const NOTE_REQUIRED: &str = "Property name is required.";

/// Per-row failures: one message per failing field, in field order
pub type RowErrors = Vec<(PropertyField, &'static str)>;

/// Check one row against the schema.
///
/// Each field carries at most one message; the required check runs before
/// the numeric check on `value`. A passing row comes back with its field
/// values untouched and the type sentinel resolved away.
pub fn validate_property(draft: &PropertyDraft) -> Result<Property, RowErrors> {
    let mut errors = RowErrors::new();

    if draft.property_type.is_none() {
        errors.push((PropertyField::Type, TYPE_REQUIRED));
    }
    if draft.name.is_empty() {
        errors.push((PropertyField::Name, NAME_REQUIRED));
    }
    if draft.value.is_empty() {
        errors.push((PropertyField::Value, VALUE_REQUIRED));
    } else if !is_numeric(&draft.value) {
        errors.push((PropertyField::Value, VALUE_NOT_A_NUMBER));
    }
    if draft.note.is_empty() {
        errors.push((PropertyField::Note, NOTE_REQUIRED));
    }

    match (errors.is_empty(), draft.property_type) {
        (true, Some(property_type)) => Ok(Property {
            id: draft.id.clone(),
            property_type,
            name: draft.name.clone(),
            value: draft.value.clone(),
            note: draft.note.clone(),
        }),
        _ => Err(errors),
    }
}

/// Check every row in order.
///
/// Succeeds only when every row succeeds; an empty list trivially does.
/// Failures aggregate into a tree addressable as
/// `properties.<index>.<field>.message`, which is what the field wrappers
/// resolve dotted paths against.
pub fn validate_properties(drafts: &[PropertyDraft]) -> Result<Vec<Property>, Value> {
    let mut valid = Vec::with_capacity(drafts.len());
    let mut failed = Map::new();

    for (index, draft) in drafts.iter().enumerate() {
        match validate_property(draft) {
            Ok(property) => valid.push(property),
            Err(row_errors) => {
                let mut fields = Map::new();
                for (field, message) in row_errors {
                    fields.insert(field.key().to_string(), json!({ "message": message }));
                }
                failed.insert(index.to_string(), Value::Object(fields));
            }
        }
    }

    if failed.is_empty() {
        Ok(valid)
    } else {
        Err(json!({ "properties": failed }))
    }
}

fn is_numeric(value: &str) -> bool {
    value.trim().parse::<f64>().is_ok()
}
