#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Heuristic US postal address parsing and standardization.
//!
//! Free-text addresses arrive in many shapes:
//! - Comma separated: `"123 Avenue of art, philadelphia pa 12345"`
//! - One line with no commas: `"123 main st cape may court house nj"`
//! - With an organization name: `"Google Inc., 1981 second street ..."`
//! - With unit designators: `"2462 Thunder Mountain Way, Unit: 903"`
//!
//! [`AddressParser`] labels the pieces with [`AddressComponent`] tags and
//! [`AddressStandardizer`] rewrites them into canonical upper-case form.
//! Both are pure functions over a shared, read-only [`Lexicon`]; neither
//! ever fails. Components that cannot be identified are simply absent.

pub mod config;
pub mod lexicon;
pub mod parser;
pub mod standardizer;
mod tables;

pub use config::LexiconOverlay;
pub use lexicon::Lexicon;
pub use parser::AddressParser;
pub use postal_address_models::{AddressComponent, ParsedAddress, PostalAddress};
pub use standardizer::AddressStandardizer;

use thiserror::Error;

/// Errors that can occur while loading lexicon configuration.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// Reading an overlay file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The overlay is not valid TOML or has the wrong shape.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// An overlay entry is unusable.
    #[error("Invalid lexicon entry: {message}")]
    InvalidEntry {
        /// Description of what went wrong.
        message: String,
    },
}

/// Parses and standardizes `raw` in one call.
#[must_use]
pub fn parse_and_standardize(lexicon: &Lexicon, raw: &str) -> ParsedAddress {
    let parsed = AddressParser::new(lexicon).parse(raw);
    AddressStandardizer::new(lexicon).standardize(&parsed)
}
