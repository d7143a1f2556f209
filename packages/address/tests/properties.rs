use postal_address::{
    AddressComponent, AddressParser, AddressStandardizer, Lexicon, LexiconOverlay, ParsedAddress,
    PostalAddress, parse_and_standardize,
};

const SAMPLES: &[&str] = &[
    "123 Avenue of art, philadelphia pa 12345",
    "2462 Thunder Mountain Way, Unit: 903",
    "2462 Thunder Mountain Way Unit: SW 1/4",
    "Google Inc., 1981 second street building K Mountain View CA 94043-0801",
    "123 main st cape may court house nj",
    "123 Main St Fort Duchesne UT 84026",
    "100 St Charles Ave, St. louis, Missouri 63101",
    "500 Grant St #B1-104, Pittsburgh, PA 15219",
    "1600 Pennsylvania Ave NW, Washington, DC 20500, USA",
    "TBD Pine Ridge Rd, Ely, NV 89301",
    "North Street",
    "North Fuller Placer",
    "123 Main St St. Louis MO 63101",
    "100 Broadway 3B, New York, NY 10001",
    "1113 1/2 Elm St",
    "",
];

fn lexicon() -> Lexicon {
    let _ = pretty_env_logger::try_init();
    Lexicon::standard()
}

fn parse(lexicon: &Lexicon, raw: &str) -> ParsedAddress {
    AddressParser::new(lexicon).parse(raw)
}

#[test]
fn standardization_is_idempotent() {
    let lexicon = lexicon();
    let standardizer = AddressStandardizer::new(&lexicon);

    for raw in SAMPLES {
        let once = standardizer.standardize(&parse(&lexicon, raw));
        let twice = standardizer.standardize(&once);
        assert_eq!(once, twice, "not idempotent for {raw:?}");
    }
}

#[test]
fn leading_number_token_is_kept_verbatim() {
    let lexicon = lexicon();

    for (raw, number) in [
        ("2462 Thunder Mountain Way, Unit: 903", "2462"),
        ("12B Elm St, Springfield, IL", "12B"),
        ("100-102 Main St", "100-102"),
        ("11131/2 Elm St Apt 2", "11131/2"),
        ("0 Ocean Blvd", "0"),
    ] {
        assert_eq!(
            parse(&lexicon, raw).get(AddressComponent::Number),
            Some(number),
            "{raw:?}"
        );
    }
}

#[test]
fn standardizes_states_to_codes() {
    let lexicon = lexicon();

    let standardized = parse_and_standardize(&lexicon, "1 Main St, Kansas City, Missouri 64105");
    assert_eq!(standardized.get(AddressComponent::State), Some("MO"));

    let standardized = parse_and_standardize(&lexicon, "123 Avenue of art, philadelphia pa 12345");
    assert_eq!(standardized.get(AddressComponent::State), Some("PA"));
}

#[test]
fn expands_saint_names() {
    let lexicon = lexicon();

    let standardized = parse_and_standardize(&lexicon, "100 St Charles Ave, St. louis, Missouri 63101");
    assert_eq!(standardized.get(AddressComponent::Street), Some("SAINT CHARLES"));
    assert_eq!(standardized.get(AddressComponent::Type), Some("AVE"));
    assert_eq!(standardized.get(AddressComponent::City), Some("SAINT LOUIS"));
    assert_eq!(standardized.get(AddressComponent::State), Some("MO"));

    for (raw, street, city) in [
        ("123 Main St St. Louis MO 63101", "MAIN", "SAINT LOUIS"),
        ("123 Main St Saint Louis MO 63101", "MAIN", "SAINT LOUIS"),
        ("40 Oak Ave St. Charles IL 60174", "OAK", "SAINT CHARLES"),
    ] {
        let standardized = parse_and_standardize(&lexicon, raw);
        assert_eq!(standardized.get(AddressComponent::Street), Some(street), "{raw:?}");
        assert!(standardized.get(AddressComponent::Type).is_some(), "{raw:?}");
        assert_eq!(standardized.get(AddressComponent::City), Some(city), "{raw:?}");
    }
}

#[test]
fn designator_confusing_cities_stay_whole() {
    let lexicon = lexicon();

    for (raw, city) in [
        ("123 main st cape may court house nj", "CAPE MAY COURT HOUSE"),
        ("123 Main St Fort Duchesne UT 84026", "FORT DUCHESNE"),
        ("10 Elm Ave Park City UT 84060", "PARK CITY"),
        ("10 Elm Ave Cape May NJ", "CAPE MAY"),
    ] {
        let standardized = parse_and_standardize(&lexicon, raw);
        assert_eq!(standardized.get(AddressComponent::City), Some(city), "{raw:?}");
        assert_eq!(standardized.get(AddressComponent::Line2), None, "{raw:?}");

        let street = standardized.get(AddressComponent::Street).unwrap_or_default();
        for word in city.split(' ') {
            assert!(!street.split(' ').any(|w| w == word), "{raw:?} leaked {word} into STREET");
        }
    }
}

#[test]
fn captures_unit_designators_verbatim() {
    let lexicon = lexicon();

    for (raw, line2) in [
        ("2462 Thunder Mountain Way Unit: SW 1/4", "Unit: SW 1/4"),
        ("2462 Thunder Mountain Way, Unit: 903", "Unit: 903"),
        ("100 Main St Apt 200", "Apt 200"),
        ("100 Main St # 5", "# 5"),
        ("100 Main St Bldg. 7, Springfield, IL", "Bldg. 7"),
        ("100 Broadway 3B, New York, NY 10001", "3B"),
        ("100 Broadway A", "A"),
    ] {
        assert_eq!(
            parse(&lexicon, raw).get(AddressComponent::Line2),
            Some(line2),
            "{raw:?}"
        );
    }
}

#[test]
fn parses_literal_scenarios() {
    let lexicon = lexicon();

    let parsed = parse(&lexicon, "123 Avenue of art, philadelphia pa 12345");
    let expected: ParsedAddress = [
        (AddressComponent::Number, "123"),
        (AddressComponent::Street, "Avenue of art"),
        (AddressComponent::City, "philadelphia"),
        (AddressComponent::State, "pa"),
        (AddressComponent::Zip, "12345"),
    ]
    .into_iter()
    .collect();
    assert_eq!(parsed, expected);

    let standardized = parse_and_standardize(
        &lexicon,
        "Google Inc., 1981 second street building K Mountain View CA 94043-0801",
    );
    assert_eq!(standardized.get(AddressComponent::Street), Some("2ND"));
    assert_eq!(standardized.get(AddressComponent::Line2), Some("BLDG K"));
    assert_eq!(standardized.get(AddressComponent::City), Some("MOUNTAIN VIEW"));
    assert_eq!(standardized.get(AddressComponent::State), Some("CA"));

    let standardized = parse_and_standardize(&lexicon, "123 main st cape may court house nj");
    assert_eq!(
        standardized.get(AddressComponent::City),
        Some("CAPE MAY COURT HOUSE")
    );
    assert_eq!(standardized.get(AddressComponent::State), Some("NJ"));
}

#[test]
fn directional_street_names() {
    let lexicon = lexicon();

    let parsed = parse(&lexicon, "North Street");
    assert_eq!(parsed.get(AddressComponent::Predir), None);
    assert_eq!(parsed.get(AddressComponent::Street), Some("North"));
    assert_eq!(parsed.get(AddressComponent::Type), Some("ST"));

    let parsed = parse(&lexicon, "North Fuller Placer");
    assert_eq!(parsed.get(AddressComponent::Predir), Some("North"));
    assert_eq!(parsed.get(AddressComponent::Street), Some("Fuller Placer"));
}

#[test]
fn builds_postal_lines() {
    let lexicon = lexicon();

    let standardized = parse_and_standardize(
        &lexicon,
        "1600 Pennsylvania Ave NW, Washington, DC 20500, USA",
    );
    let postal = PostalAddress::from(&standardized);
    assert_eq!(postal.line1.as_deref(), Some("1600 PENNSYLVANIA AVE"));
    assert_eq!(postal.line2.as_deref(), Some("NW"));
    assert_eq!(postal.city.as_deref(), Some("WASHINGTON"));
    assert_eq!(postal.state.as_deref(), Some("DC"));
    assert_eq!(postal.postal_code.as_deref(), Some("20500"));
}

#[test]
fn overlay_cities_are_kept_whole() {
    let overlay = LexiconOverlay::from_toml_str(r#"confusing_cities = ["Lake Wales"]"#).unwrap();
    let lexicon = lexicon().with_overlay(&overlay).unwrap();

    let parsed = parse(&lexicon, "100 Main St Lake Wales FL 33853");
    assert_eq!(parsed.get(AddressComponent::City), Some("Lake Wales"));
    assert_eq!(parsed.get(AddressComponent::Type), Some("ST"));
}
