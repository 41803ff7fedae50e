//! Integration tests for parsing: every surface form of one street must
//! collapse to one canonical key.

use odonym::{Locale, Name, Result};

#[test]
fn test_surface_form_matrix() -> Result<()> {
    let locale = Locale::new("ru_RU")?;

    let inputs = [
        "Ул Ленина",
        "ул Ленина",
        "ул.Ленина",
        "ул. Ленина",
        "ул.  Ленина",
        " ул.  Ленина ",
        "улица Ленина",
        "улица  Ленина",
        "  улица  Ленина  ",
        "Ленина ул",
        "Ленина ул.",
        "Ленина,ул",
        "Ленина,ул.",
        "Ленина,улица",
        "Ленина, ул",
        "Ленина, ул.",
        "Ленина, улица",
        "Ленина, УЛИЦА",
        "Ленина улица",
        "УЛИЦА Ленина",
        "   улица   Ленина   ",
        "   Ленина   улица   ",
        "\tулица\tЛенина\t",
        "\tЛенина\tулица\t",
    ];

    for raw in inputs {
        let name = Name::parse(raw, &locale)?;
        assert_eq!(
            name.canonical_key(),
            "улица ленина",
            "canonical key mismatch for {raw:?}"
        );
        assert_eq!(name.proper_tokens(), ["ленина"], "tokens mismatch for {raw:?}");
        assert_eq!(name.raw(), raw, "raw string must be preserved verbatim");
    }

    Ok(())
}

#[test]
fn test_numbered_and_hyphenated_names() -> Result<()> {
    let locale = Locale::new("ru_RU")?;

    let name = Name::parse("1-я улица Доватора", &locale)?;
    assert_eq!(name.street_type().unwrap().canonical(), "улица");
    assert_eq!(name.proper_tokens(), ["1-я", "доватора"]);
    assert_eq!(name.canonical_key(), "улица 1-я доватора");

    let name = Name::parse("пр-д Серебрякова", &locale)?;
    assert_eq!(name.street_type().unwrap().canonical(), "проезд");
    assert_eq!(name.canonical_key(), "проезд серебрякова");

    Ok(())
}

#[test]
fn test_second_type_token_stays_proper() -> Result<()> {
    let locale = Locale::new("ru_RU")?;

    // "проезд" is also a street type, but "переулок" sits in an earlier row
    let name = Name::parse("переулок Одесский проезд", &locale)?;
    assert_eq!(name.street_type().unwrap().canonical(), "переулок");
    assert_eq!(name.proper_tokens(), ["одесский", "проезд"]);

    // "шоссе Старый Тракт" keeps "тракт" as part of the proper name
    let name = Name::parse("шоссе Старый Тракт", &locale)?;
    assert_eq!(name.street_type().unwrap().canonical(), "шоссе");
    assert_eq!(name.proper_tokens(), ["старый", "тракт"]);

    Ok(())
}

#[test]
fn test_type_only_name() -> Result<()> {
    let locale = Locale::new("ru_RU")?;

    // degenerate but parseable: a name that is just a type token
    let name = Name::parse("улица", &locale)?;
    assert!(name.has_street_type());
    assert!(name.proper_tokens().is_empty());
    assert_eq!(name.canonical_key(), "улица");

    Ok(())
}
