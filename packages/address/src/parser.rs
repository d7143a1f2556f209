//! Free-text address tokenizer and classifier.
//!
//! Parsing is greedy and positional:
//!
//! 1. The input is split into comma (or newline) separated segments.
//! 2. From the right: ZIP, then state, then city.
//! 3. The first segment led by a house number is the street line. Segments
//!    before it are the name; segments after it hold units and the city.
//! 4. The street line is classified left to right into number,
//!    pre-directional, street, type and secondary unit.
//!
//! The only lookahead beyond the next token is the designator-confusing
//! city check, which claims a known multi-word city at the end of the
//! street line before the street type classifier can split it.

use std::sync::LazyLock;

use postal_address_models::{AddressComponent, ParsedAddress};
use regex::Regex;

use crate::lexicon::{Lexicon, lookup_key};

/// Five digit ZIP, optionally ZIP+4.
static ZIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}(?:-\d{4})?$").expect("valid regex"));

/// Digit-led house number: `"123"`, `"11131/2"`, `"12B"`, `"100-102"`.
static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[\w/-]*$").expect("valid regex"));

/// Hyphenated parcel-style identifier used in place of a house number
/// (e.g. `"FP-F-1-68-1371"`). Must also contain a digit.
static CODED_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+(?:-[A-Za-z0-9]+)+$").expect("valid regex"));

/// Fractional house number suffix (`"1/2"`).
static FRACTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+/\d+$").expect("valid regex"));

/// Numeric ordinal street name (`"5th"`, `"21ST"`).
static NUMERIC_ORDINAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\d+(?:st|nd|rd|th)$").expect("valid regex"));

/// Classification of the street line segment.
#[derive(Debug, Default)]
struct StreetLine<'s> {
    name: Vec<&'s str>,
    number: Option<String>,
    predir: Option<&'s str>,
    street: Vec<&'s str>,
    street_type: Option<String>,
    line2: Vec<&'s str>,
    city: Vec<&'s str>,
}

/// Splits free-text addresses into [`AddressComponent`]s.
#[derive(Debug, Clone, Copy)]
pub struct AddressParser<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> AddressParser<'a> {
    /// Creates a parser backed by `lexicon`.
    #[must_use]
    pub const fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Parses a raw address.
    ///
    /// Never fails: components that cannot be identified are absent from
    /// the result, and empty or unrecognizable input yields an empty or
    /// partial [`ParsedAddress`].
    #[must_use]
    pub fn parse(&self, raw: &str) -> ParsedAddress {
        let mut parsed = ParsedAddress::new();

        let mut segments: Vec<Vec<&str>> = raw
            .split([',', '\n', '\r'])
            .map(|segment| segment.split_whitespace().collect::<Vec<_>>())
            .filter(|tokens| !tokens.is_empty())
            .collect();

        self.strip_country(&mut segments);
        if segments.is_empty() {
            return parsed;
        }

        let zip_segment = self.take_zip(&mut segments, &mut parsed);

        let Some(street) = self.street_segment_index(&segments) else {
            return parsed;
        };

        let state_segment = self.take_state(&mut segments, street, zip_segment.is_some(), &mut parsed);

        // The city shares the street line only when nothing follows it.
        let city_in_street = state_segment.map_or(zip_segment == Some(street), |s| s == street);

        // Segments after the street line: units first, the last plain
        // remainder is the city.
        let mut trailing_line2: Vec<String> = Vec::new();
        let mut city: Option<String> = None;
        for segment in segments.iter().skip(street + 1).filter(|s| !s.is_empty()) {
            let unit_len = self.unit_prefix_len(segment);
            let (unit, rest) = segment.split_at(unit_len);
            if !unit.is_empty() {
                trailing_line2.push(unit.join(" "));
            }
            if !rest.is_empty()
                && let Some(previous) = city.replace(rest.join(" "))
            {
                log::debug!("Dropping {previous:?}: a later segment is the city");
            }
        }

        let line = self.classify_street_line(&segments[street], city_in_street, city.is_none());

        let mut names: Vec<String> = segments[..street]
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| s.join(" "))
            .collect();
        if !line.name.is_empty() {
            names.push(line.name.join(" "));
        }
        parsed.insert(AddressComponent::Name, names.join(", "));

        if let Some(number) = &line.number {
            parsed.insert(AddressComponent::Number, number);
        }
        if let Some(predir) = line.predir {
            parsed.insert(AddressComponent::Predir, predir);
        }
        parsed.insert(AddressComponent::Street, line.street.join(" "));
        if let Some(street_type) = &line.street_type {
            parsed.insert(AddressComponent::Type, street_type);
        }

        let mut line2: Vec<String> = Vec::new();
        if !line.line2.is_empty() {
            line2.push(line.line2.join(" "));
        }
        line2.extend(trailing_line2);
        parsed.insert(AddressComponent::Line2, line2.join(" "));

        if !line.city.is_empty() {
            parsed.insert(AddressComponent::City, line.city.join(" "));
        } else if let Some(city) = city {
            parsed.insert(AddressComponent::City, city);
        }

        parsed
    }

    /// Whether `token` can stand as a house number.
    fn is_house_number(&self, token: &str) -> bool {
        NUMBER_RE.is_match(token)
            || self.lexicon.is_placeholder(token)
            || (CODED_NUMBER_RE.is_match(token) && token.chars().any(|c| c.is_ascii_digit()))
    }

    /// Drops a trailing country name, either as its own segment or after a
    /// state or ZIP.
    fn strip_country(&self, segments: &mut Vec<Vec<&str>>) {
        let Some(last) = segments.last_mut() else {
            return;
        };
        let Some(n) = self.lexicon.country_suffix(last) else {
            return;
        };

        if n == last.len() {
            if segments.len() > 1 {
                log::debug!("Dropping country segment");
                segments.pop();
            }
            return;
        }

        let before = last[last.len() - n - 1];
        if ZIP_RE.is_match(before) || self.lexicon.state_code(before).is_some() {
            log::debug!("Dropping trailing country after {before:?}");
            last.truncate(last.len() - n);
        }
    }

    /// Takes a ZIP from the end of the last segment.
    ///
    /// A lone token that would lead the street line is a house number,
    /// not a ZIP.
    fn take_zip(&self, segments: &mut [Vec<&str>], parsed: &mut ParsedAddress) -> Option<usize> {
        let last = segments.len().checked_sub(1)?;
        let token = *segments[last].last()?;
        if !ZIP_RE.is_match(token) {
            return None;
        }
        if segments[last].len() == 1
            && !segments[..last]
                .iter()
                .any(|s| s.first().is_some_and(|t| self.is_house_number(t)))
        {
            return None;
        }
        log::debug!("ZIP {token:?} found in segment {last}");
        parsed.insert(AddressComponent::Zip, token);
        segments[last].pop();
        Some(last)
    }

    /// Index of the street line: the first segment led by a house number,
    /// or else the first non-empty segment.
    fn street_segment_index(&self, segments: &[Vec<&str>]) -> Option<usize> {
        segments
            .iter()
            .position(|s| s.first().is_some_and(|t| self.is_house_number(t)))
            .or_else(|| segments.iter().position(|s| !s.is_empty()))
    }

    /// Takes a state from the end of the last non-empty segment.
    ///
    /// Returns the index of the segment it came from.
    fn take_state(
        &self,
        segments: &mut [Vec<&str>],
        street: usize,
        zip_found: bool,
        parsed: &mut ParsedAddress,
    ) -> Option<usize> {
        let last = segments.iter().rposition(|s| !s.is_empty())?;
        let tokens = &segments[last];

        let max_words = self.lexicon.max_state_words().min(tokens.len());
        let start = (1..=max_words).rev().find_map(|n| {
            let start = tokens.len() - n;
            let candidate = tokens[start..].join(" ");
            self.lexicon.state_code(&candidate)?;
            if last == street && !self.state_fits_street_line(&tokens[..start], &tokens[start..], zip_found) {
                log::trace!("Rejecting {candidate:?} as state on the street line");
                return None;
            }
            Some(start)
        })?;

        let state = tokens[start..].join(" ");
        log::debug!("State {state:?} found in segment {last}");
        parsed.insert(AddressComponent::State, state);
        segments[last].truncate(start);

        Some(last)
    }

    /// Decides whether a state candidate at the end of the street line is
    /// really a state, given the tokens before it.
    ///
    /// Without a ZIP the line must already read as a complete street
    /// (a street type after the street name), and a lone directional such
    /// as `"NE"` is never taken.
    fn state_fits_street_line(&self, before: &[&str], candidate: &[&str], zip_found: bool) -> bool {
        if before.len() < 2 {
            return false;
        }
        if zip_found {
            return true;
        }
        if candidate.len() == 1 && self.lexicon.is_directional(candidate[0]) {
            return false;
        }
        let street_start = if self.is_house_number(before[0]) { 2 } else { 1 };
        before
            .iter()
            .skip(street_start)
            .any(|t| self.lexicon.is_street_type(t))
    }

    /// Number of leading tokens that form secondary unit designators and
    /// their values (`"Apt 4"`, `"Unit: SW 1/4"`, `"#B1-104"`, `"3B"`).
    fn unit_prefix_len(&self, tokens: &[&str]) -> usize {
        let mut len = 0;
        while let Some(token) = tokens.get(len) {
            if self.lexicon.is_designator(token) {
                len += 1;
                if tokens.get(len).is_some_and(|t| *t == "#") {
                    len += 1;
                }
                if len < tokens.len() {
                    len += 1;
                }
            } else if token.starts_with('#') || is_unit_value(token) {
                len += 1;
            } else {
                break;
            }
        }
        len
    }

    /// Classifies the tokens of the street line.
    ///
    /// `city_in_street` means a state or ZIP was taken from this segment,
    /// so whatever follows the street and unit is the city. `city_open`
    /// means no later segment supplied a city.
    fn classify_street_line<'s>(
        &self,
        tokens: &[&'s str],
        city_in_street: bool,
        city_open: bool,
    ) -> StreetLine<'s> {
        let mut line = StreetLine::default();
        let mut tokens = tokens;

        // Organization name glued to the front: "Acme Widgets 42 Elm St".
        if let Some(first) = tokens.first()
            && !self.is_house_number(first)
            && let Some(pos) = tokens.iter().position(|t| self.is_house_number(t))
            && tokens.len() - pos >= 2
            && !tokens[..pos]
                .iter()
                .any(|t| self.lexicon.is_street_type(t) || self.lexicon.is_designator(t))
        {
            log::trace!("Name prefix {:?}", &tokens[..pos]);
            line.name = tokens[..pos].to_vec();
            tokens = &tokens[pos..];
        }

        if city_open
            && let Some(n) = self.lexicon.confusing_city_suffix(tokens)
            && tokens.len() - n >= 2
        {
            let before = &tokens[..tokens.len() - n];
            let street_start = usize::from(self.is_house_number(before[0])) + 1;
            let complete_street = before
                .iter()
                .skip(street_start)
                .any(|t| self.lexicon.is_street_type(t) || self.lexicon.is_designator(t));
            if city_in_street || complete_street {
                log::debug!("Designator-confusing city {:?}", &tokens[tokens.len() - n..]);
                line.city = tokens[tokens.len() - n..].to_vec();
                tokens = before;
            }
        }

        let Some(first) = tokens.first() else {
            return line;
        };

        let mut body = tokens;
        if self.is_house_number(first) {
            let mut number = (*first).to_string();
            body = &tokens[1..];
            if let Some(fraction) = body.first()
                && FRACTION_RE.is_match(fraction)
            {
                number.push_str(fraction);
                body = &body[1..];
            }
            log::trace!("Number {number:?}");
            line.number = Some(number);
        }

        if body.is_empty() {
            return line;
        }

        // The street name always gets the first body token, so designators
        // and types are only looked for after it.
        let unit_start = body
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, t)| self.lexicon.is_designator(t) || t.starts_with('#'))
            .map_or(body.len(), |(i, _)| i);

        // A type directly followed by another type is part of the street
        // name ("Park Ave", "Lane Rd"), unless the second one is the
        // "St." of a saint city sharing the line ("Main St St. Louis").
        let type_at = (1..unit_start).find(|&i| {
            self.lexicon.is_street_type(body[i])
                && (i + 1 >= unit_start
                    || !self.lexicon.is_street_type(body[i + 1])
                    || (city_in_street && self.starts_saint_name(&body[i + 1..unit_start])))
        });

        let mut street_end = type_at.unwrap_or(unit_start);
        let mut bare_unit = None;
        if type_at.is_none() && street_end >= 2 && is_bare_unit(body[street_end - 1]) {
            log::trace!("Bare unit {:?}", body[street_end - 1]);
            bare_unit = Some(body[street_end - 1]);
            street_end -= 1;
        }

        let mut street = &body[..street_end];
        if street.len() >= 2 && self.lexicon.is_directional(street[0]) {
            log::trace!("Pre-directional {:?}", street[0]);
            line.predir = Some(street[0]);
            street = &street[1..];
        }
        line.street = street.to_vec();

        if let Some(i) = type_at {
            line.street_type = self.lexicon.street_type(body[i]).map(str::to_string);
            log::trace!("Type {:?} from {:?}", line.street_type, body[i]);
        }

        line.line2.extend(bare_unit);
        let trailing = &body[type_at.map_or(unit_start, |i| i + 1)..];
        if city_in_street {
            let unit_len = self.unit_prefix_len(trailing);
            line.line2.extend_from_slice(&trailing[..unit_len]);
            if line.city.is_empty() {
                line.city = trailing[unit_len..].to_vec();
            } else {
                line.line2.extend_from_slice(&trailing[unit_len..]);
            }
        } else {
            line.line2.extend_from_slice(trailing);
        }

        line
    }

    /// Whether `tokens` open with a saint name: a bare `"St"`/`"St."`
    /// followed by a word that is not itself a street type.
    fn starts_saint_name(&self, tokens: &[&str]) -> bool {
        tokens.len() >= 2
            && lookup_key(tokens[0]) == "ST"
            && !self.lexicon.is_street_type(tokens[1])
    }
}

/// Whether a token left at the end of a street with no type is a unit:
/// mixed letters and digits (`"3B"`), a single letter (`"A"`) or a
/// `#` value. Plain numbers and numeric ordinals stay in the street name
/// ("Route 66", "W 5th").
fn is_bare_unit(token: &str) -> bool {
    let has_digit = token.chars().any(|c| c.is_ascii_digit());
    let has_letter = token.chars().any(|c| c.is_ascii_alphabetic());
    token.starts_with('#')
        || (token.len() == 1 && has_letter)
        || (has_digit && has_letter && !NUMERIC_ORDINAL_RE.is_match(token))
}

/// Whether `token` looks like the value of a unit: contains a digit
/// (`"3B"`, `"104"`) or is a single letter (`"A"`).
fn is_unit_value(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_digit())
        || (token.len() == 1 && token.chars().all(|c| c.is_ascii_alphabetic()))
}
