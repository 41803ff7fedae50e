//! British English locale rules.

use crate::locale::{LocaleData, StreetTypeRule, TypePosition};

static RULES: &[StreetTypeRule] = &[
    StreetTypeRule {
        full: "Avenue",
        canonical: None,
        abbrev: Some("Ave."),
        variants: &["avenue", "ave"],
    },
    StreetTypeRule {
        full: "Close",
        canonical: None,
        abbrev: None,
        variants: &["close"],
    },
    StreetTypeRule {
        full: "Court",
        canonical: None,
        abbrev: None,
        variants: &["court"],
    },
    StreetTypeRule {
        full: "Crescent",
        canonical: None,
        abbrev: None,
        variants: &["crescent"],
    },
    StreetTypeRule {
        full: "Gardens",
        canonical: None,
        abbrev: None,
        variants: &["gardens"],
    },
    StreetTypeRule {
        full: "Grove",
        canonical: None,
        abbrev: None,
        variants: &["grove"],
    },
    StreetTypeRule {
        full: "Lane",
        canonical: None,
        abbrev: None,
        variants: &["lane"],
    },
    StreetTypeRule {
        full: "Mews",
        canonical: None,
        abbrev: None,
        variants: &["mews"],
    },
    StreetTypeRule {
        full: "Place",
        canonical: None,
        abbrev: None,
        variants: &["place"],
    },
    StreetTypeRule {
        full: "Road",
        canonical: None,
        abbrev: Some("Rd."),
        variants: &["road", "rd"],
    },
    StreetTypeRule {
        full: "Square",
        canonical: None,
        abbrev: Some("Sq."),
        variants: &["square", "sq"],
    },
    StreetTypeRule {
        full: "Street",
        canonical: None,
        abbrev: Some("St."),
        variants: &["street", "st"],
    },
    StreetTypeRule {
        full: "Terrace",
        canonical: None,
        abbrev: None,
        variants: &["terrace"],
    },
    StreetTypeRule {
        full: "Walk",
        canonical: None,
        abbrev: None,
        variants: &["walk"],
    },
    StreetTypeRule {
        full: "Way",
        canonical: None,
        abbrev: None,
        variants: &["way"],
    },
];

pub(crate) static DATA: LocaleData = LocaleData {
    identifier: "en_GB",
    rules: RULES,
    type_position: TypePosition::AfterName,
    char_folds: &[],
};
