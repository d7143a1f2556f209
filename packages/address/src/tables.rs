#![allow(clippy::too_many_lines)]
//! Built-in lookup data.
//!
//! Plain `const` slices; [`crate::lexicon::Lexicon::standard`] turns them
//! into ordered maps once at startup.

/// Street suffixes: canonical USPS Publication 28 abbreviation followed by
/// every spelling accepted for it. The abbreviation itself is always
/// accepted and is not repeated in the variant list.
pub const STREET_TYPES: &[(&str, &[&str])] = &[
    ("ALY", &["ALLEY", "ALLEE", "ALLY"]),
    ("ANX", &["ANNEX", "ANEX", "ANNX"]),
    ("ARC", &["ARCADE"]),
    ("AVE", &["AVENUE", "AV", "AVEN", "AVENU", "AVN", "AVNUE"]),
    ("BYU", &["BAYOU", "BAYOO"]),
    ("BCH", &["BEACH"]),
    ("BND", &["BEND"]),
    ("BLF", &["BLUFF", "BLUF"]),
    ("BLFS", &["BLUFFS"]),
    ("BTM", &["BOTTOM", "BOT", "BOTTM"]),
    ("BLVD", &["BOULEVARD", "BOUL", "BOULV", "BLV"]),
    ("BR", &["BRANCH", "BRNCH"]),
    ("BRG", &["BRIDGE", "BRDGE"]),
    ("BRK", &["BROOK"]),
    ("BRKS", &["BROOKS"]),
    ("BG", &["BURG"]),
    ("BGS", &["BURGS"]),
    ("BYP", &["BYPASS", "BYPA", "BYPAS", "BYPS"]),
    ("CP", &["CAMP", "CMP"]),
    ("CYN", &["CANYON", "CANYN", "CNYN"]),
    ("CPE", &["CAPE"]),
    ("CSWY", &["CAUSEWAY", "CAUSWA"]),
    ("CTR", &["CENTER", "CEN", "CENT", "CENTR", "CENTRE", "CNTER", "CNTR"]),
    ("CTRS", &["CENTERS"]),
    ("CIR", &["CIRCLE", "CIRC", "CIRCL", "CRCL", "CRCLE"]),
    ("CIRS", &["CIRCLES"]),
    ("CLF", &["CLIFF"]),
    ("CLFS", &["CLIFFS"]),
    ("CLB", &["CLUB"]),
    ("CMN", &["COMMON"]),
    ("CMNS", &["COMMONS"]),
    ("COR", &["CORNER"]),
    ("CORS", &["CORNERS"]),
    ("CRSE", &["COURSE"]),
    ("CT", &["COURT"]),
    ("CTS", &["COURTS"]),
    ("CV", &["COVE"]),
    ("CVS", &["COVES"]),
    ("CRK", &["CREEK"]),
    ("CRES", &["CRESCENT", "CRSENT", "CRSNT"]),
    ("CRST", &["CREST"]),
    ("XING", &["CROSSING", "CRSSNG"]),
    ("XRD", &["CROSSROAD"]),
    ("XRDS", &["CROSSROADS"]),
    ("CURV", &["CURVE"]),
    ("DL", &["DALE"]),
    ("DM", &["DAM"]),
    ("DV", &["DIVIDE", "DIV", "DVD"]),
    ("DR", &["DRIVE", "DRIV", "DRV"]),
    ("DRS", &["DRIVES"]),
    ("EST", &["ESTATE"]),
    ("ESTS", &["ESTATES"]),
    ("EXPY", &["EXPRESSWAY", "EXP", "EXPR", "EXPRESS", "EXPW"]),
    ("EXT", &["EXTENSION", "EXTN", "EXTNSN"]),
    ("EXTS", &["EXTENSIONS"]),
    ("FALL", &[]),
    ("FLS", &["FALLS"]),
    ("FRY", &["FERRY", "FRRY"]),
    ("FLD", &["FIELD"]),
    ("FLDS", &["FIELDS"]),
    ("FLT", &["FLAT"]),
    ("FLTS", &["FLATS"]),
    ("FRD", &["FORD"]),
    ("FRDS", &["FORDS"]),
    ("FRST", &["FOREST", "FORESTS"]),
    ("FRG", &["FORGE", "FORG"]),
    ("FRGS", &["FORGES"]),
    ("FRK", &["FORK"]),
    ("FRKS", &["FORKS"]),
    ("FT", &["FORT", "FRT"]),
    ("FWY", &["FREEWAY", "FREEWY", "FRWAY", "FRWY"]),
    ("GDN", &["GARDEN", "GARDN", "GRDEN", "GRDN"]),
    ("GDNS", &["GARDENS", "GRDNS"]),
    ("GTWY", &["GATEWAY", "GATEWY", "GATWAY", "GTWAY"]),
    ("GLN", &["GLEN"]),
    ("GLNS", &["GLENS"]),
    ("GRN", &["GREEN"]),
    ("GRNS", &["GREENS"]),
    ("GRV", &["GROVE", "GROV"]),
    ("GRVS", &["GROVES"]),
    ("HBR", &["HARBOR", "HARB", "HARBR", "HRBOR"]),
    ("HBRS", &["HARBORS"]),
    ("HVN", &["HAVEN"]),
    ("HTS", &["HEIGHTS", "HT"]),
    ("HWY", &["HIGHWAY", "HIGHWY", "HIWAY", "HIWY", "HWAY"]),
    ("HL", &["HILL"]),
    ("HLS", &["HILLS"]),
    ("HOLW", &["HOLLOW", "HLLW", "HOLLOWS", "HOLWS"]),
    ("INLT", &["INLET"]),
    ("IS", &["ISLAND", "ISLND"]),
    ("ISS", &["ISLANDS", "ISLNDS"]),
    ("ISLE", &["ISLES"]),
    ("JCT", &["JUNCTION", "JCTION", "JCTN", "JUNCTN", "JUNCTON"]),
    ("JCTS", &["JUNCTIONS", "JCTNS"]),
    ("KY", &["KEY"]),
    ("KYS", &["KEYS"]),
    ("KNL", &["KNOLL", "KNOL"]),
    ("KNLS", &["KNOLLS"]),
    ("LK", &["LAKE"]),
    ("LKS", &["LAKES"]),
    ("LAND", &[]),
    ("LNDG", &["LANDING", "LNDNG"]),
    ("LN", &["LANE"]),
    ("LGT", &["LIGHT"]),
    ("LGTS", &["LIGHTS"]),
    ("LF", &["LOAF"]),
    ("LCK", &["LOCK"]),
    ("LCKS", &["LOCKS"]),
    ("LDG", &["LODGE", "LDGE", "LODG"]),
    ("LOOP", &["LOOPS"]),
    ("MALL", &[]),
    ("MNR", &["MANOR"]),
    ("MNRS", &["MANORS"]),
    ("MDW", &["MEADOW"]),
    ("MDWS", &["MEADOWS", "MEDOWS"]),
    ("MEWS", &[]),
    ("ML", &["MILL"]),
    ("MLS", &["MILLS"]),
    ("MSN", &["MISSION", "MISSN", "MSSN"]),
    ("MTWY", &["MOTORWAY"]),
    ("MT", &["MOUNT", "MNT"]),
    ("MTN", &["MOUNTAIN", "MNTAIN", "MNTN", "MOUNTIN", "MTIN"]),
    ("MTNS", &["MOUNTAINS", "MNTNS"]),
    ("NCK", &["NECK"]),
    ("ORCH", &["ORCHARD", "ORCHRD"]),
    ("OVAL", &["OVL"]),
    ("OPAS", &["OVERPASS"]),
    ("PARK", &["PRK", "PARKS"]),
    ("PKWY", &["PARKWAY", "PARKWY", "PKWAY", "PKY", "PARKWAYS", "PKWYS"]),
    ("PASS", &[]),
    ("PSGE", &["PASSAGE"]),
    ("PATH", &["PATHS"]),
    ("PIKE", &["PIKES"]),
    ("PNE", &["PINE"]),
    ("PNES", &["PINES"]),
    ("PL", &["PLACE"]),
    ("PLN", &["PLAIN"]),
    ("PLNS", &["PLAINS"]),
    ("PLZ", &["PLAZA", "PLZA"]),
    ("PT", &["POINT"]),
    ("PTS", &["POINTS"]),
    ("PRT", &["PORT"]),
    ("PRTS", &["PORTS"]),
    ("PR", &["PRAIRIE", "PRR"]),
    ("RADL", &["RADIAL", "RAD", "RADIEL"]),
    ("RAMP", &[]),
    ("RNCH", &["RANCH", "RANCHES", "RNCHS"]),
    ("RPD", &["RAPID"]),
    ("RPDS", &["RAPIDS"]),
    ("RST", &["REST"]),
    ("RDG", &["RIDGE", "RDGE"]),
    ("RDGS", &["RIDGES"]),
    ("RIV", &["RIVER", "RVR", "RIVR"]),
    ("RD", &["ROAD"]),
    ("RDS", &["ROADS"]),
    ("RTE", &["ROUTE"]),
    ("ROW", &[]),
    ("RUE", &[]),
    ("RUN", &[]),
    ("SHL", &["SHOAL"]),
    ("SHLS", &["SHOALS"]),
    ("SHR", &["SHORE", "SHOAR"]),
    ("SHRS", &["SHORES", "SHOARS"]),
    ("SKWY", &["SKYWAY"]),
    ("SPG", &["SPRING", "SPNG", "SPRNG"]),
    ("SPGS", &["SPRINGS", "SPNGS", "SPRNGS"]),
    ("SPUR", &["SPURS"]),
    ("SQ", &["SQUARE", "SQR", "SQRE", "SQU"]),
    ("SQS", &["SQUARES", "SQRS"]),
    ("STA", &["STATION", "STATN", "STN"]),
    ("STRA", &["STRAVENUE", "STRAV", "STRAVEN", "STRAVN", "STRVN", "STRVNUE"]),
    ("STRM", &["STREAM", "STREME"]),
    ("ST", &["STREET", "STRT", "STR"]),
    ("STS", &["STREETS"]),
    ("SMT", &["SUMMIT", "SUMIT", "SUMITT"]),
    ("TER", &["TERRACE", "TERR"]),
    ("TRWY", &["THROUGHWAY"]),
    ("TRCE", &["TRACE", "TRACES"]),
    ("TRAK", &["TRACK", "TRACKS", "TRK", "TRKS"]),
    ("TRFY", &["TRAFFICWAY"]),
    ("TRL", &["TRAIL", "TRAILS", "TRLS"]),
    ("TUNL", &["TUNNEL", "TUNEL", "TUNLS", "TUNNELS", "TUNNL"]),
    ("TPKE", &["TURNPIKE", "TRNPK", "TURNPK"]),
    ("UPAS", &["UNDERPASS"]),
    ("UN", &["UNION"]),
    ("UNS", &["UNIONS"]),
    ("VLY", &["VALLEY", "VALLY", "VLLY"]),
    ("VLYS", &["VALLEYS"]),
    ("VIA", &["VIADUCT", "VDCT", "VIADCT"]),
    ("VW", &["VIEW"]),
    ("VWS", &["VIEWS"]),
    ("VLG", &["VILLAGE", "VILL", "VILLAG", "VILLG", "VILLIAGE"]),
    ("VLGS", &["VILLAGES"]),
    ("VL", &["VILLE"]),
    ("VIS", &["VISTA", "VIST", "VST", "VSTA"]),
    ("WALK", &["WALKS"]),
    ("WALL", &[]),
    ("WAY", &["WY"]),
    ("WAYS", &[]),
    ("WL", &["WELL"]),
    ("WLS", &["WELLS"]),
];

/// Directionals: canonical abbreviation followed by accepted spellings.
pub const DIRECTIONALS: &[(&str, &[&str])] = &[
    ("N", &["NORTH"]),
    ("S", &["SOUTH"]),
    ("E", &["EAST"]),
    ("W", &["WEST"]),
    ("NE", &["NORTHEAST", "NORTH-EAST"]),
    ("NW", &["NORTHWEST", "NORTH-WEST"]),
    ("SE", &["SOUTHEAST", "SOUTH-EAST"]),
    ("SW", &["SOUTHWEST", "SOUTH-WEST"]),
];

/// US states, DC and inhabited territories as `(code, full name)`.
pub const STATES: &[(&str, &str)] = &[
    ("AL", "ALABAMA"),
    ("AK", "ALASKA"),
    ("AZ", "ARIZONA"),
    ("AR", "ARKANSAS"),
    ("CA", "CALIFORNIA"),
    ("CO", "COLORADO"),
    ("CT", "CONNECTICUT"),
    ("DE", "DELAWARE"),
    ("DC", "DISTRICT OF COLUMBIA"),
    ("FL", "FLORIDA"),
    ("GA", "GEORGIA"),
    ("HI", "HAWAII"),
    ("ID", "IDAHO"),
    ("IL", "ILLINOIS"),
    ("IN", "INDIANA"),
    ("IA", "IOWA"),
    ("KS", "KANSAS"),
    ("KY", "KENTUCKY"),
    ("LA", "LOUISIANA"),
    ("ME", "MAINE"),
    ("MD", "MARYLAND"),
    ("MA", "MASSACHUSETTS"),
    ("MI", "MICHIGAN"),
    ("MN", "MINNESOTA"),
    ("MS", "MISSISSIPPI"),
    ("MO", "MISSOURI"),
    ("MT", "MONTANA"),
    ("NE", "NEBRASKA"),
    ("NV", "NEVADA"),
    ("NH", "NEW HAMPSHIRE"),
    ("NJ", "NEW JERSEY"),
    ("NM", "NEW MEXICO"),
    ("NY", "NEW YORK"),
    ("NC", "NORTH CAROLINA"),
    ("ND", "NORTH DAKOTA"),
    ("OH", "OHIO"),
    ("OK", "OKLAHOMA"),
    ("OR", "OREGON"),
    ("PA", "PENNSYLVANIA"),
    ("RI", "RHODE ISLAND"),
    ("SC", "SOUTH CAROLINA"),
    ("SD", "SOUTH DAKOTA"),
    ("TN", "TENNESSEE"),
    ("TX", "TEXAS"),
    ("UT", "UTAH"),
    ("VT", "VERMONT"),
    ("VA", "VIRGINIA"),
    ("WA", "WASHINGTON"),
    ("WV", "WEST VIRGINIA"),
    ("WI", "WISCONSIN"),
    ("WY", "WYOMING"),
    ("AS", "AMERICAN SAMOA"),
    ("GU", "GUAM"),
    ("MP", "NORTHERN MARIANA ISLANDS"),
    ("PR", "PUERTO RICO"),
    ("VI", "VIRGIN ISLANDS"),
];

/// Ordinal words and the numeric form they standardize to.
pub const ORDINALS: &[(&str, &str)] = &[
    ("FIRST", "1ST"),
    ("SECOND", "2ND"),
    ("THIRD", "3RD"),
    ("FOURTH", "4TH"),
    ("FIFTH", "5TH"),
    ("SIXTH", "6TH"),
    ("SEVENTH", "7TH"),
    ("EIGHTH", "8TH"),
    ("NINTH", "9TH"),
    ("TENTH", "10TH"),
    ("ELEVENTH", "11TH"),
    ("TWELFTH", "12TH"),
    ("THIRTEENTH", "13TH"),
    ("FOURTEENTH", "14TH"),
    ("FIFTEENTH", "15TH"),
    ("SIXTEENTH", "16TH"),
    ("SEVENTEENTH", "17TH"),
    ("EIGHTEENTH", "18TH"),
    ("NINETEENTH", "19TH"),
    ("TWENTIETH", "20TH"),
    ("THIRTIETH", "30TH"),
    ("FORTIETH", "40TH"),
    ("FIFTIETH", "50TH"),
    ("SIXTIETH", "60TH"),
    ("SEVENTIETH", "70TH"),
    ("EIGHTIETH", "80TH"),
    ("NINETIETH", "90TH"),
];

/// Secondary unit designators: canonical abbreviation followed by accepted
/// spellings.
pub const DESIGNATORS: &[(&str, &[&str])] = &[
    ("APT", &["APARTMENT"]),
    ("BLDG", &["BUILDING", "BLD"]),
    ("BSMT", &["BASEMENT"]),
    ("DEPT", &["DEPARTMENT"]),
    ("FL", &["FLOOR", "FLR"]),
    ("HNGR", &["HANGAR"]),
    ("LBBY", &["LOBBY"]),
    ("LOT", &[]),
    ("OFC", &["OFFICE"]),
    ("PH", &["PENTHOUSE"]),
    ("RM", &["ROOM"]),
    ("SLIP", &[]),
    ("SPC", &["SPACE"]),
    ("STE", &["SUITE"]),
    ("TRLR", &["TRAILER"]),
    ("UNIT", &[]),
    ("#", &[]),
];

/// Placeholder house numbers that stand in for a real number.
pub const NUMBER_PLACEHOLDERS: &[&str] = &["TBD", "TBA", "UNKNOWN"];

/// Trailing country designations that carry no address information.
pub const COUNTRY_NAMES: &[&str] = &[
    "USA",
    "US",
    "U.S.A.",
    "U.S.",
    "UNITED STATES",
    "UNITED STATES OF AMERICA",
];

/// Multi-word city names containing a token that is also a street type or
/// directional. Matched as a unit against the end of a street line.
pub const CONFUSING_CITIES: &[&str] = &[
    "BATTLE CREEK",
    "BAY HARBOR ISLANDS",
    "BOWLING GREEN",
    "CAPE CORAL",
    "CAPE GIRARDEAU",
    "CAPE MAY",
    "CAPE MAY COURT HOUSE",
    "CEDAR RAPIDS",
    "COLORADO SPRINGS",
    "CORAL SPRINGS",
    "CROWN POINT",
    "EAST LANSING",
    "EAST ORANGE",
    "EAST POINT",
    "EAST SAINT LOUIS",
    "FALLS CHURCH",
    "FOREST HILLS",
    "FOREST PARK",
    "FORT COLLINS",
    "FORT DUCHESNE",
    "FORT LAUDERDALE",
    "FORT LEE",
    "FORT MYERS",
    "FORT SMITH",
    "FORT WAYNE",
    "FORT WORTH",
    "GRAND JUNCTION",
    "GRAND PRAIRIE",
    "GRAND RAPIDS",
    "GREAT FALLS",
    "HIGHLAND PARK",
    "IDAHO FALLS",
    "JUNCTION CITY",
    "LAKE CITY",
    "LAKE FOREST",
    "LAKE HAVASU CITY",
    "LAKE JACKSON",
    "LAKE OSWEGO",
    "LAKE WORTH",
    "MENLO PARK",
    "MOUNT PLEASANT",
    "MOUNT PROSPECT",
    "MOUNT VERNON",
    "MOUNTAIN VIEW",
    "NORTH LAS VEGAS",
    "NORTH LITTLE ROCK",
    "OAK PARK",
    "PALM BEACH GARDENS",
    "PALM SPRINGS",
    "PARK CITY",
    "PARK RIDGE",
    "PLEASANT HILL",
    "PORT HURON",
    "PORT SAINT LUCIE",
    "PORT ST LUCIE",
    "ROCK HILL",
    "ROUND ROCK",
    "SAINT LOUIS",
    "SALT LAKE CITY",
    "SIOUX FALLS",
    "SOUTH BEND",
    "SOUTH GATE",
    "SOUTH LAKE TAHOE",
    "SOUTH SAN FRANCISCO",
    "TWIN FALLS",
    "VIRGINIA BEACH",
    "WEST COVINA",
    "WEST PALM BEACH",
    "WEST VALLEY CITY",
    "WICHITA FALLS",
    "WINTER PARK",
];
