//! Form Models
//!
//! Data structures for the property list form.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of financial asset a row describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyType {
    BankAccount,
    Deposit,
    MutualFunds,
    Bond,
    LandOrHouse,
}

impl PropertyType {
    /// All kinds, in display order
    pub const ALL: [PropertyType; 5] = [
        PropertyType::BankAccount,
        PropertyType::Deposit,
        PropertyType::MutualFunds,
        PropertyType::Bond,
        PropertyType::LandOrHouse,
    ];

    /// Wire name used as the select option value
    pub fn as_str(self) -> &'static str {
        match self {
            PropertyType::BankAccount => "BANK_ACCOUNT",
            PropertyType::Deposit => "DEPOSIT",
            PropertyType::MutualFunds => "MUTUAL_FUNDS",
            PropertyType::Bond => "BOND",
            PropertyType::LandOrHouse => "LAND_OR_HOUSE",
        }
    }

    /// Human label shown in the select
    pub fn label(self) -> &'static str {
        match self {
            PropertyType::BankAccount => "Bank account",
            PropertyType::Deposit => "Deposit",
            PropertyType::MutualFunds => "Mutual funds",
            PropertyType::Bond => "Bond",
            PropertyType::LandOrHouse => "Land or house",
        }
    }

    /// Parse a select option value. The empty string is the "not yet
    /// chosen" placeholder and maps to `None`, as does any unknown value.
    pub fn parse(raw: &str) -> Option<PropertyType> {
        PropertyType::ALL.into_iter().find(|t| t.as_str() == raw)
    }
}

/// One editable row of the form
///
/// `property_type` is `None` until the user picks a kind; every other
/// field starts empty. Field values stay exactly as typed until submit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDraft {
    pub id: String,
    #[serde(rename = "type")]
    pub property_type: Option<PropertyType>,
    pub name: String,
    pub value: String,
    pub note: String,
}

impl PropertyDraft {
    /// Fresh row with all fields blank, as created by the Add action
    pub fn blank() -> Self {
        Self {
            id: new_row_id(),
            property_type: None,
            name: String::new(),
            value: String::new(),
            note: String::new(),
        }
    }

    /// Copy of this row's field values under a fresh id
    pub fn duplicate(&self) -> Self {
        Self {
            id: new_row_id(),
            ..self.clone()
        }
    }
}

/// A row that passed validation
///
/// `value` stays a string; submission hands values over verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub name: String,
    pub value: String,
    pub note: String,
}

/// Addresses of the editable fields of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyField {
    Type,
    Name,
    Value,
    Note,
}

impl PropertyField {
    /// Segment used in dotted field paths like `properties.2.name`
    pub fn key(self) -> &'static str {
        match self {
            PropertyField::Type => "type",
            PropertyField::Name => "name",
            PropertyField::Value => "value",
            PropertyField::Note => "note",
        }
    }
}

/// Generate a list-identity id for a new row
pub fn new_row_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_wire_names_round_trip() {
        for t in PropertyType::ALL {
            assert_eq!(PropertyType::parse(t.as_str()), Some(t));
        }
        assert_eq!(PropertyType::parse(""), None);
        assert_eq!(PropertyType::parse("CRYPTO"), None);
    }

    #[test]
    fn test_duplicate_copies_fields_with_fresh_id() {
        let mut row = PropertyDraft::blank();
        row.property_type = Some(PropertyType::Bond);
        row.name = "Retirement".into();
        row.value = "1000".into();
        row.note = "x".into();

        let copy = row.duplicate();
        assert_ne!(copy.id, row.id);
        assert_eq!(copy.property_type, row.property_type);
        assert_eq!(copy.name, row.name);
        assert_eq!(copy.value, row.value);
        assert_eq!(copy.note, row.note);
    }
}
