#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Shared types for US postal address parsing.
//!
//! This crate contains only data types and simple conversions. It has no
//! heavyweight dependencies (no regex, no lookup tables).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A semantic slot in a parsed postal address.
///
/// The set is closed: every parser output is keyed by one of these.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum AddressComponent {
    /// Organization or person name preceding the street address.
    Name,
    /// House number, verbatim (`"2462"`, `"11131/2"`, `"TBD"`).
    Number,
    /// Pre-directional (`"N"`, `"North"`, `"SW"`).
    Predir,
    /// Core street name.
    Street,
    /// Street suffix abbreviation (`"RD"`, `"BLVD"`).
    Type,
    /// Secondary unit designator (`"APT 200"`, `"Unit: 903"`).
    #[serde(rename = "LINE2")]
    #[strum(serialize = "LINE2")]
    Line2,
    /// City or place name.
    City,
    /// State name or two-letter code.
    State,
    /// Five digit ZIP code, optionally with the `-NNNN` extension.
    Zip,
}

impl AddressComponent {
    /// Every component in the order it appears in a written address.
    pub const ALL: [Self; 9] = [
        Self::Name,
        Self::Number,
        Self::Predir,
        Self::Street,
        Self::Type,
        Self::Line2,
        Self::City,
        Self::State,
        Self::Zip,
    ];
}

/// Components extracted from a free-text address.
///
/// Absent components have no entry. Every present entry is a non-empty,
/// trimmed string; [`ParsedAddress::insert`] enforces that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParsedAddress {
    components: BTreeMap<AddressComponent, String>,
}

impl ParsedAddress {
    /// Creates an empty address.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            components: BTreeMap::new(),
        }
    }

    /// Returns the value of `component`, if present.
    #[must_use]
    pub fn get(&self, component: AddressComponent) -> Option<&str> {
        self.components.get(&component).map(String::as_str)
    }

    /// Whether `component` has a value.
    #[must_use]
    pub fn contains(&self, component: AddressComponent) -> bool {
        self.components.contains_key(&component)
    }

    /// Stores `value` under `component`, replacing any previous value.
    ///
    /// The value is trimmed. Blank values are not stored, and any
    /// previous value for `component` is left untouched in that case.
    pub fn insert(&mut self, component: AddressComponent, value: impl AsRef<str>) {
        let value = value.as_ref().trim();
        if value.is_empty() {
            return;
        }
        self.components.insert(component, value.to_string());
    }

    /// Removes and returns the value of `component`.
    pub fn remove(&mut self, component: AddressComponent) -> Option<String> {
        self.components.remove(&component)
    }

    /// Iterates over present components in address order.
    pub fn iter(&self) -> impl Iterator<Item = (AddressComponent, &str)> {
        self.components.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Number of present components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether no component was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl<V: AsRef<str>> FromIterator<(AddressComponent, V)> for ParsedAddress {
    fn from_iter<T: IntoIterator<Item = (AddressComponent, V)>>(iter: T) -> Self {
        let mut parsed = Self::new();
        for (component, value) in iter {
            parsed.insert(component, value);
        }
        parsed
    }
}

/// Flat address record in the shape line-of-business systems persist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalAddress {
    /// Number, pre-directional, street and type joined by spaces.
    pub line1: Option<String>,
    /// Secondary unit designator.
    pub line2: Option<String>,
    /// City.
    pub city: Option<String>,
    /// State.
    pub state: Option<String>,
    /// ZIP code.
    pub postal_code: Option<String>,
}

impl From<&ParsedAddress> for PostalAddress {
    fn from(parsed: &ParsedAddress) -> Self {
        let line1_parts: Vec<&str> = [
            AddressComponent::Number,
            AddressComponent::Predir,
            AddressComponent::Street,
            AddressComponent::Type,
        ]
        .into_iter()
        .filter_map(|c| parsed.get(c))
        .collect();

        let owned = |c: AddressComponent| parsed.get(c).map(str::to_string);

        Self {
            line1: (!line1_parts.is_empty()).then(|| line1_parts.join(" ")),
            line2: owned(AddressComponent::Line2),
            city: owned(AddressComponent::City),
            state: owned(AddressComponent::State),
            postal_code: owned(AddressComponent::Zip),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    #[test]
    fn component_tags_round_trip_through_strings() {
        assert_eq!(AddressComponent::Line2.to_string(), "LINE2");
        assert_eq!(AddressComponent::Predir.as_ref(), "PREDIR");
        assert_eq!(AddressComponent::Zip.to_string(), "ZIP");
        assert_eq!(
            AddressComponent::from_str("line2").ok(),
            Some(AddressComponent::Line2)
        );
        assert_eq!(
            AddressComponent::from_str("CITY").ok(),
            Some(AddressComponent::City)
        );
    }

    #[test]
    fn insert_trims_and_skips_blank_values() {
        let mut parsed = ParsedAddress::new();
        parsed.insert(AddressComponent::City, "  Philadelphia ");
        parsed.insert(AddressComponent::State, "   ");
        parsed.insert(AddressComponent::Zip, "");

        assert_eq!(parsed.get(AddressComponent::City), Some("Philadelphia"));
        assert!(!parsed.contains(AddressComponent::State));
        assert!(!parsed.contains(AddressComponent::Zip));
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn blank_insert_keeps_previous_value() {
        let mut parsed = ParsedAddress::new();
        parsed.insert(AddressComponent::Street, "Main");
        parsed.insert(AddressComponent::Street, " ");
        assert_eq!(parsed.get(AddressComponent::Street), Some("Main"));
    }

    #[test]
    fn iterates_in_address_order() {
        let parsed: ParsedAddress = [
            (AddressComponent::Zip, "12345".to_string()),
            (AddressComponent::Number, "123".to_string()),
            (AddressComponent::City, "philadelphia".to_string()),
        ]
        .into_iter()
        .collect();

        let order: Vec<AddressComponent> = parsed.iter().map(|(c, _)| c).collect();
        assert_eq!(
            order,
            vec![
                AddressComponent::Number,
                AddressComponent::City,
                AddressComponent::Zip
            ]
        );
    }

    #[test]
    fn serializes_as_tagged_object() {
        let mut parsed = ParsedAddress::new();
        parsed.insert(AddressComponent::Line2, "APT 4");
        parsed.insert(AddressComponent::Number, "10");

        let json = serde_json::to_string(&parsed).unwrap();
        assert_eq!(json, r#"{"NUMBER":"10","LINE2":"APT 4"}"#);
    }

    #[test]
    fn builds_postal_address() {
        let mut parsed = ParsedAddress::new();
        parsed.insert(AddressComponent::Name, "ACME");
        parsed.insert(AddressComponent::Number, "100");
        parsed.insert(AddressComponent::Predir, "N");
        parsed.insert(AddressComponent::Street, "STATE");
        parsed.insert(AddressComponent::Type, "ST");
        parsed.insert(AddressComponent::Line2, "STE 5");
        parsed.insert(AddressComponent::City, "CHICAGO");
        parsed.insert(AddressComponent::State, "IL");
        parsed.insert(AddressComponent::Zip, "60602");

        let postal = PostalAddress::from(&parsed);
        assert_eq!(postal.line1.as_deref(), Some("100 N STATE ST"));
        assert_eq!(postal.line2.as_deref(), Some("STE 5"));
        assert_eq!(postal.city.as_deref(), Some("CHICAGO"));
        assert_eq!(postal.state.as_deref(), Some("IL"));
        assert_eq!(postal.postal_code.as_deref(), Some("60602"));
    }

    #[test]
    fn postal_address_without_street_has_no_line1() {
        let mut parsed = ParsedAddress::new();
        parsed.insert(AddressComponent::City, "DENVER");
        let postal = PostalAddress::from(&parsed);
        assert_eq!(postal.line1, None);
        assert_eq!(postal.city.as_deref(), Some("DENVER"));
    }
}
