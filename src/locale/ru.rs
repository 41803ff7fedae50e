//! Russian locale rules.

use crate::locale::{LocaleData, StreetTypeRule, TypePosition};

/* variants are used for detection, so no duplicates are allowed */
static RULES: &[StreetTypeRule] = &[
    StreetTypeRule {
        full: "улица",
        canonical: None,
        abbrev: Some("ул."),
        variants: &["улица", "ул"],
    },
    StreetTypeRule {
        full: "площадь",
        canonical: None,
        abbrev: Some("пл."),
        variants: &["площадь", "пл"],
    },
    StreetTypeRule {
        full: "переулок",
        canonical: None,
        abbrev: Some("пер."),
        variants: &["переулок", "пер", "пер-к"],
    },
    /* after переулок, i.e. "переулок Одесский проезд" */
    StreetTypeRule {
        full: "проезд",
        canonical: None,
        abbrev: Some("пр-д."),
        variants: &["проезд", "пр-д"],
    },
    StreetTypeRule {
        full: "шоссе",
        canonical: None,
        abbrev: Some("ш."),
        variants: &["шоссе", "ш"],
    },
    StreetTypeRule {
        full: "бульвар",
        canonical: None,
        abbrev: Some("бул."),
        variants: &["бульвар", "бул", "б-р"],
    },
    StreetTypeRule {
        full: "тупик",
        canonical: None,
        abbrev: Some("туп."),
        variants: &["тупик", "туп"],
    },
    StreetTypeRule {
        full: "набережная",
        canonical: None,
        abbrev: Some("наб."),
        variants: &["набережная", "наб"],
    },
    StreetTypeRule {
        full: "проспект",
        canonical: None,
        abbrev: Some("пр-т."),
        variants: &["проспект", "просп", "пр-кт", "пр-т"],
    },
    StreetTypeRule {
        full: "линия",
        canonical: None,
        abbrev: None,
        variants: &["линия"],
    },
    StreetTypeRule {
        full: "аллея",
        canonical: None,
        abbrev: None,
        variants: &["аллея"],
    },
    StreetTypeRule {
        full: "метромост",
        canonical: None,
        abbrev: None,
        variants: &["метромост"],
    },
    StreetTypeRule {
        full: "мост",
        canonical: None,
        abbrev: None,
        variants: &["мост"],
    },
    StreetTypeRule {
        full: "просек",
        canonical: None,
        abbrev: None,
        variants: &["просек"],
    },
    StreetTypeRule {
        full: "просека",
        canonical: None,
        abbrev: None,
        variants: &["просека"],
    },
    StreetTypeRule {
        full: "путепровод",
        canonical: None,
        abbrev: None,
        variants: &["путепровод"],
    },
    /* after шоссе, i.e. "шоссе Старый Тракт" */
    StreetTypeRule {
        full: "тракт",
        canonical: None,
        abbrev: None,
        variants: &["тракт", "тр-т", "тр"],
    },
    StreetTypeRule {
        full: "тропа",
        canonical: None,
        abbrev: None,
        variants: &["тропа"],
    },
    StreetTypeRule {
        full: "туннель",
        canonical: None,
        abbrev: None,
        variants: &["туннель"],
    },
    StreetTypeRule {
        full: "тоннель",
        canonical: None,
        abbrev: None,
        variants: &["тоннель"],
    },
    StreetTypeRule {
        full: "эстакада",
        canonical: None,
        abbrev: None,
        variants: &["эстакада", "эст"],
    },
    StreetTypeRule {
        full: "спуск",
        canonical: None,
        abbrev: None,
        variants: &["спуск"],
    },
    StreetTypeRule {
        full: "подход",
        canonical: None,
        abbrev: None,
        variants: &["подход"],
    },
    StreetTypeRule {
        full: "подъезд",
        canonical: None,
        abbrev: None,
        variants: &["подъезд"],
    },
    StreetTypeRule {
        full: "съезд",
        canonical: None,
        abbrev: None,
        variants: &["съезд"],
    },
    StreetTypeRule {
        full: "заезд",
        canonical: None,
        abbrev: None,
        variants: &["заезд"],
    },
    StreetTypeRule {
        full: "разъезд",
        canonical: None,
        abbrev: None,
        variants: &["разъезд"],
    },
    StreetTypeRule {
        full: "слобода",
        canonical: None,
        abbrev: None,
        variants: &["слобода"],
    },
    StreetTypeRule {
        full: "район",
        canonical: None,
        abbrev: None,
        variants: &["район", "р-н"],
    },
    StreetTypeRule {
        full: "микрорайон",
        canonical: None,
        abbrev: None,
        variants: &["микрорайон", "мкр-н", "мк-н", "мкр", "мкрн"],
    },
    StreetTypeRule {
        full: "посёлок",
        canonical: None,
        abbrev: None,
        variants: &["посёлок", "поселок", "пос"],
    },
    StreetTypeRule {
        full: "деревня",
        canonical: None,
        abbrev: None,
        variants: &["деревня", "дер", "д"],
    },
    StreetTypeRule {
        full: "квартал",
        canonical: None,
        abbrev: None,
        variants: &["квартал", "кв-л"],
    },
];

pub(crate) static DATA: LocaleData = LocaleData {
    identifier: "ru_RU",
    rules: RULES,
    type_position: TypePosition::BeforeName,
    char_folds: &[('ё', 'е')],
};
