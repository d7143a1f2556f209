//! Lookup tables shared by the parser and the standardizer.
//!
//! A [`Lexicon`] is built once (see [`Lexicon::standard`]) and then only
//! read. Every lookup normalizes its argument the same way: upper-case,
//! trailing `.`/`:`/`,` removed. That lets raw tokens such as `"Ave."` or
//! `"Unit:"` be looked up directly.

use std::collections::{BTreeMap, BTreeSet};

use crate::LexiconError;
use crate::config::LexiconOverlay;
use crate::tables;

/// Normalizes a single token for table lookup.
#[must_use]
pub fn lookup_key(token: &str) -> String {
    token
        .trim()
        .trim_end_matches(['.', ':', ','])
        .to_uppercase()
}

/// Immutable dictionaries used during parsing and standardization.
#[derive(Debug, Clone)]
pub struct Lexicon {
    /// Every accepted street suffix spelling → USPS abbreviation.
    street_types: BTreeMap<String, String>,
    /// Directional spelling → abbreviation.
    directionals: BTreeMap<String, String>,
    /// Full state name and two-letter code → two-letter code.
    states: BTreeMap<String, String>,
    /// Longest state name in words.
    max_state_words: usize,
    /// Ordinal word → numeric ordinal.
    ordinals: BTreeMap<String, String>,
    /// Secondary designator spelling → abbreviation.
    designators: BTreeMap<String, String>,
    placeholders: BTreeSet<String>,
    countries: BTreeSet<String>,
    max_country_words: usize,
    /// Tokenized designator-confusing cities, longest first.
    confusing_cities: Vec<Vec<String>>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::standard()
    }
}

impl Lexicon {
    /// Builds the built-in tables.
    #[must_use]
    pub fn standard() -> Self {
        let mut lexicon = Self {
            street_types: expand_variants(tables::STREET_TYPES),
            directionals: expand_variants(tables::DIRECTIONALS),
            states: BTreeMap::new(),
            max_state_words: 1,
            ordinals: tables::ORDINALS
                .iter()
                .map(|(word, ordinal)| ((*word).to_string(), (*ordinal).to_string()))
                .collect(),
            designators: expand_variants(tables::DESIGNATORS),
            placeholders: tables::NUMBER_PLACEHOLDERS
                .iter()
                .map(|p| (*p).to_string())
                .collect(),
            countries: BTreeSet::new(),
            max_country_words: 1,
            confusing_cities: Vec::new(),
        };

        for (code, name) in tables::STATES {
            lexicon.states.insert((*code).to_string(), (*code).to_string());
            lexicon.states.insert((*name).to_string(), (*code).to_string());
            lexicon.max_state_words = lexicon
                .max_state_words
                .max(name.split_whitespace().count());
        }

        for country in tables::COUNTRY_NAMES {
            let key = phrase_key(country);
            lexicon.max_country_words = lexicon
                .max_country_words
                .max(key.split(' ').count());
            lexicon.countries.insert(key);
        }

        for city in tables::CONFUSING_CITIES {
            lexicon.add_confusing_city(city);
        }

        lexicon
    }

    /// Returns a copy of this lexicon extended with `overlay`.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::InvalidEntry`] if an overlay entry is blank
    /// or maps to a blank abbreviation.
    pub fn with_overlay(&self, overlay: &LexiconOverlay) -> Result<Self, LexiconError> {
        let mut lexicon = self.clone();

        for city in &overlay.confusing_cities {
            if city.trim().is_empty() {
                return Err(LexiconError::InvalidEntry {
                    message: "confusing city name is empty".to_string(),
                });
            }
            lexicon.add_confusing_city(city);
        }

        for (variant, abbreviation) in &overlay.street_types {
            let (variant, abbreviation) = validated_pair("street type", variant, abbreviation)?;
            lexicon
                .street_types
                .insert(abbreviation.clone(), abbreviation.clone());
            lexicon.street_types.insert(variant, abbreviation);
        }

        for (variant, abbreviation) in &overlay.designators {
            let (variant, abbreviation) = validated_pair("designator", variant, abbreviation)?;
            lexicon
                .designators
                .insert(abbreviation.clone(), abbreviation.clone());
            lexicon.designators.insert(variant, abbreviation);
        }

        log::info!(
            "Applied lexicon overlay: {} cities, {} street types, {} designators",
            overlay.confusing_cities.len(),
            overlay.street_types.len(),
            overlay.designators.len(),
        );

        Ok(lexicon)
    }

    fn add_confusing_city(&mut self, city: &str) {
        let tokens: Vec<String> = city.split_whitespace().map(lookup_key).collect();
        if tokens.is_empty() || self.confusing_cities.contains(&tokens) {
            return;
        }
        self.confusing_cities.push(tokens);
        // Longest names first so "CAPE MAY COURT HOUSE" wins over "CAPE MAY".
        self.confusing_cities
            .sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    }

    /// Canonical abbreviation of a street suffix token.
    #[must_use]
    pub fn street_type(&self, token: &str) -> Option<&str> {
        self.street_types.get(&lookup_key(token)).map(String::as_str)
    }

    /// Whether `token` is a street suffix.
    #[must_use]
    pub fn is_street_type(&self, token: &str) -> bool {
        self.street_type(token).is_some()
    }

    /// Canonical abbreviation of a directional token.
    #[must_use]
    pub fn directional(&self, token: &str) -> Option<&str> {
        self.directionals.get(&lookup_key(token)).map(String::as_str)
    }

    /// Whether `token` is a directional.
    #[must_use]
    pub fn is_directional(&self, token: &str) -> bool {
        self.directional(token).is_some()
    }

    /// Two-letter code for a state name or code.
    ///
    /// Periods are ignored, so `"N.Y."` and `"Pa."` resolve.
    #[must_use]
    pub fn state_code(&self, phrase: &str) -> Option<&str> {
        self.states
            .get(&phrase_key(&phrase.replace('.', "")))
            .map(String::as_str)
    }

    /// Number of words in the longest state name.
    #[must_use]
    pub const fn max_state_words(&self) -> usize {
        self.max_state_words
    }

    /// Numeric form of an ordinal word (`"SECOND"` → `"2ND"`).
    #[must_use]
    pub fn ordinal(&self, token: &str) -> Option<&str> {
        self.ordinals.get(&lookup_key(token)).map(String::as_str)
    }

    /// Canonical abbreviation of a secondary unit designator.
    #[must_use]
    pub fn designator(&self, token: &str) -> Option<&str> {
        self.designators.get(&lookup_key(token)).map(String::as_str)
    }

    /// Whether `token` introduces a secondary unit (`"Apt"`, `"Unit:"`, `"#"`).
    #[must_use]
    pub fn is_designator(&self, token: &str) -> bool {
        self.designator(token).is_some()
    }

    /// Whether `token` is a placeholder house number such as `"TBD"`.
    #[must_use]
    pub fn is_placeholder(&self, token: &str) -> bool {
        self.placeholders.contains(&lookup_key(token))
    }

    /// Number of trailing tokens of `tokens` that spell a country name.
    #[must_use]
    pub fn country_suffix(&self, tokens: &[&str]) -> Option<usize> {
        (1..=self.max_country_words.min(tokens.len()))
            .rev()
            .find(|&n| {
                let phrase = tokens[tokens.len() - n..].join(" ");
                self.countries.contains(&phrase_key(&phrase))
            })
    }

    /// Number of trailing tokens of `tokens` that spell a
    /// designator-confusing city, preferring the longest match.
    #[must_use]
    pub fn confusing_city_suffix(&self, tokens: &[&str]) -> Option<usize> {
        self.confusing_cities.iter().find_map(|city| {
            if city.len() > tokens.len() {
                return None;
            }
            let tail = &tokens[tokens.len() - city.len()..];
            tail.iter()
                .zip(city)
                .all(|(token, expected)| lookup_key(token) == *expected)
                .then_some(city.len())
        })
    }
}

/// Normalizes a multi-word phrase: tokens keyed individually, joined by a
/// single space.
fn phrase_key(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(lookup_key)
        .collect::<Vec<_>>()
        .join(" ")
}

fn expand_variants(table: &[(&str, &[&str])]) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for (canonical, variants) in table {
        map.insert((*canonical).to_string(), (*canonical).to_string());
        for variant in *variants {
            map.insert((*variant).to_string(), (*canonical).to_string());
        }
    }
    map
}

fn validated_pair(
    kind: &str,
    variant: &str,
    abbreviation: &str,
) -> Result<(String, String), LexiconError> {
    let variant = lookup_key(variant);
    let abbreviation = lookup_key(abbreviation);
    if variant.is_empty() || abbreviation.is_empty() {
        return Err(LexiconError::InvalidEntry {
            message: format!("{kind} entry {variant:?} = {abbreviation:?} is empty"),
        });
    }
    Ok((variant, abbreviation))
}
