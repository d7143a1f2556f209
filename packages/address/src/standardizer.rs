//! Canonical rewriting of parsed components.
//!
//! Every value is upper-cased with whitespace collapsed. Beyond that each
//! component has its own rules:
//!
//! | Component | Rewrite                                                  |
//! |-----------|----------------------------------------------------------|
//! | `STATE`   | Full name or dotted code → two-letter code               |
//! | `CITY`    | `ST`/`STE`/`FT`/`MT` + word → `SAINT`/`SAINTE`/`FORT`/`MOUNT` |
//! | `STREET`  | `ST` + word → `SAINT`; ordinal words → `1ST`, `2ND`, ... |
//! | `TYPE`    | Any suffix spelling → USPS abbreviation                  |
//! | `PREDIR`  | Any directional spelling → abbreviation                  |
//! | `LINE2`   | Designators → abbreviation, trailing `:`/`.` dropped     |
//!
//! Standardizing an already standardized address returns it unchanged.

use postal_address_models::{AddressComponent, ParsedAddress};

use crate::lexicon::{Lexicon, lookup_key};

/// Rewrites a [`ParsedAddress`] into canonical form.
#[derive(Debug, Clone, Copy)]
pub struct AddressStandardizer<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> AddressStandardizer<'a> {
    /// Creates a standardizer backed by `lexicon`.
    #[must_use]
    pub const fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Returns the canonical form of `parsed`.
    ///
    /// Only components present in `parsed` appear in the result.
    #[must_use]
    pub fn standardize(&self, parsed: &ParsedAddress) -> ParsedAddress {
        parsed
            .iter()
            .map(|(component, value)| {
                let standardized = self.standardize_component(component, value);
                log::trace!("{component}: {value:?} -> {standardized:?}");
                (component, standardized)
            })
            .collect()
    }

    fn standardize_component(&self, component: AddressComponent, value: &str) -> String {
        let words: Vec<String> = value.split_whitespace().map(str::to_uppercase).collect();
        let joined = words.join(" ");

        match component {
            AddressComponent::State => self
                .lexicon
                .state_code(&joined)
                .map_or(joined, str::to_string),
            AddressComponent::Type => self
                .lexicon
                .street_type(&joined)
                .map_or(joined, str::to_string),
            AddressComponent::Predir => self
                .lexicon
                .directional(&joined)
                .map_or(joined, str::to_string),
            AddressComponent::City => expand_prefixes(&words, true).join(" "),
            AddressComponent::Street => expand_prefixes(&words, false)
                .into_iter()
                .map(|word| {
                    self.lexicon
                        .ordinal(&word)
                        .map_or(word, str::to_string)
                })
                .collect::<Vec<_>>()
                .join(" "),
            AddressComponent::Line2 => words
                .into_iter()
                .map(|word| {
                    self.lexicon
                        .designator(&word)
                        .map_or(word, str::to_string)
                })
                .collect::<Vec<_>>()
                .join(" "),
            AddressComponent::Name | AddressComponent::Number | AddressComponent::Zip => joined,
        }
    }
}

/// Expands abbreviated name prefixes. Only a token followed by another word
/// is expanded, so a bare `"ST"` stays as it is.
///
/// Streets expand `ST` only; cities also expand `STE`, `FT` and `MT`.
fn expand_prefixes(words: &[String], city: bool) -> Vec<String> {
    words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            if i + 1 >= words.len() {
                return word.clone();
            }
            let expanded = match (lookup_key(word).as_str(), city) {
                ("ST", _) => "SAINT",
                ("STE", true) => "SAINTE",
                ("FT", true) => "FORT",
                ("MT", true) => "MOUNT",
                _ => return word.clone(),
            };
            expanded.to_string()
        })
        .collect()
}
