//! UI Components
//!
//! Reusable Leptos components.

mod field_error;
mod properties_form;
mod property_row;
mod type_select;

pub use field_error::FieldWithError;
pub use properties_form::PropertiesForm;
pub use property_row::PropertyRow;
pub use type_select::TypeSelect;
