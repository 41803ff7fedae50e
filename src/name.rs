//! Parsed street names.
//!
//! A [`Name`] is the immutable result of parsing one raw string under a
//! [`Locale`]: the verbatim raw string, the folded proper-name tokens, the
//! recognized street type (if any), and the canonical key composed from
//! them. Parsing is deterministic; the key is a pure function of the raw
//! string and the locale.
//!
//! Equality and hashing are defined over the canonical key, never over the
//! raw string, so surface-form variants of the same street compare equal:
//!
//! ```
//! use odonym::{Locale, Name};
//!
//! let locale = Locale::new("ru_RU")?;
//! let a = Name::parse("улица Ленина", &locale)?;
//! let b = Name::parse("Ленина, ул.", &locale)?;
//!
//! assert_eq!(a, b);
//! assert_eq!(a.canonical_key(), "улица ленина");
//! assert_ne!(a.raw(), b.raw());
//! # Ok::<(), odonym::error::OdonymError>(())
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::analysis;
use crate::error::{OdonymError, Result};
use crate::locale::{Locale, StreetType};

/// A street name parsed under a locale.
#[derive(Debug, Clone)]
pub struct Name {
    raw: String,
    locale: Locale,
    street_type: Option<StreetType>,
    proper: Vec<String>,
    key: String,
}

impl Name {
    /// Parse a raw street name.
    ///
    /// Fails with [`OdonymError::Parse`] when the input contains no tokens
    /// (empty or whitespace/punctuation only).
    pub fn parse(raw: &str, locale: &Locale) -> Result<Name> {
        let tokens = analysis::tokenize(raw);
        if tokens.is_empty() {
            return Err(OdonymError::parse(format!(
                "name contains no tokens: {raw:?}"
            )));
        }

        let (street_type, proper) = locale.normalize(&tokens);
        let key = locale.compose_key(street_type.as_ref(), &proper);

        Ok(Name {
            raw: raw.to_string(),
            locale: locale.clone(),
            street_type,
            proper,
            key,
        })
    }

    /// The raw string exactly as given.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The locale this name was parsed under.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// The canonical key: folded canonical type token and proper-name
    /// tokens joined in the locale's mandated order.
    pub fn canonical_key(&self) -> &str {
        &self.key
    }

    /// The recognized street type, or `None` when no token matched the
    /// locale's variant table.
    pub fn street_type(&self) -> Option<StreetType> {
        self.street_type
    }

    /// The folded proper-name tokens in their original relative order.
    ///
    /// This is the token-level view spelling comparison operates on; it is
    /// deliberately distinct from [`Name::canonical_key`].
    pub fn proper_tokens(&self) -> &[String] {
        &self.proper
    }

    /// True when a street-type token was recognized.
    pub fn has_street_type(&self) -> bool {
        self.street_type.is_some()
    }
}

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Name {}

impl Hash for Name {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
