//! Tokenization and case folding for street names.
//!
//! A street name is split into word tokens before any locale rules apply.
//! Splitting happens on whitespace and on the two punctuation characters
//! used around abbreviations (`.` and `,`), so `"ул.Ленина"` and
//! `"Ленина,улица"` both yield two tokens. Any other non-alphanumeric
//! characters are trimmed from token boundaries but preserved inside a
//! token, which keeps hyphenated forms like `"пр-д"` or `"1-я"` whole.
//!
//! # Examples
//!
//! ```
//! use odonym::analysis::tokenize;
//!
//! assert_eq!(tokenize("ул. Ленина"), vec!["ул", "Ленина"]);
//! assert_eq!(tokenize("Ленина,улица"), vec!["Ленина", "улица"]);
//! assert_eq!(tokenize("1-я Парковая улица"), vec!["1-я", "Парковая", "улица"]);
//! ```

/// Characters that separate tokens in addition to whitespace. These are the
/// characters written around abbreviated street types.
const SEPARATORS: [char; 2] = ['.', ','];

/// Split a raw street name into word tokens.
///
/// Tokens keep their original case; use [`fold`] before comparing or
/// indexing them. Empty input or input consisting only of separators yields
/// an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| c.is_whitespace() || SEPARATORS.contains(&c))
        .map(|piece| piece.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|piece| !piece.is_empty())
        .map(|piece| piece.to_string())
        .collect()
}

/// Case-fold a token for comparison and indexing.
///
/// Unicode lowercasing; locale rule tables store their variants in this
/// form.
pub fn fold(token: &str) -> String {
    token.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_whitespace() {
        assert_eq!(tokenize("улица Ленина"), vec!["улица", "Ленина"]);
        assert_eq!(tokenize("  улица  Ленина  "), vec!["улица", "Ленина"]);
        assert_eq!(tokenize("\tулица\tЛенина\t"), vec!["улица", "Ленина"]);
    }

    #[test]
    fn test_tokenize_punctuation() {
        assert_eq!(tokenize("ул.Ленина"), vec!["ул", "Ленина"]);
        assert_eq!(tokenize("ул. Ленина"), vec!["ул", "Ленина"]);
        assert_eq!(tokenize("Ленина, ул."), vec!["Ленина", "ул"]);
        assert_eq!(tokenize("Ленина,улица"), vec!["Ленина", "улица"]);
    }

    #[test]
    fn test_tokenize_preserves_internal_characters() {
        assert_eq!(tokenize("пр-д Серебрякова"), vec!["пр-д", "Серебрякова"]);
        assert_eq!(
            tokenize("1-я улица Доватора"),
            vec!["1-я", "улица", "Доватора"]
        );
    }

    #[test]
    fn test_tokenize_strips_boundary_characters() {
        assert_eq!(tokenize("«Правды» улица"), vec!["Правды", "улица"]);
        assert_eq!(
            tokenize(" . , \t улица., Ленина ., "),
            vec!["улица", "Ленина"]
        );
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t ").is_empty());
        assert!(tokenize(" . , ").is_empty());
    }

    #[test]
    fn test_fold() {
        assert_eq!(fold("УЛИЦА"), "улица");
        assert_eq!(fold("Baker"), "baker");
        assert_eq!(fold("Зелёная"), "зелёная");
    }
}
