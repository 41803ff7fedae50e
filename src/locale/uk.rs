//! Ukrainian locale rules.

use crate::locale::{LocaleData, StreetTypeRule, TypePosition};

static RULES: &[StreetTypeRule] = &[StreetTypeRule {
    full: "вулиця",
    canonical: None,
    abbrev: Some("вул."),
    variants: &["вулиця", "вул"],
}];

pub(crate) static DATA: LocaleData = LocaleData {
    identifier: "uk_UA",
    rules: RULES,
    type_position: TypePosition::BeforeName,
    char_folds: &[],
};
