//! Locale rule tables for street-type recognition and canonicalization.
//!
//! A [`Locale`] is an immutable rule table for one language: every written
//! variant of a street-type token (full form, abbreviation, alternate
//! spelling) maps to one canonical form, and the locale fixes where the
//! canonical type token sits relative to the proper-name tokens when a
//! canonical key is composed. All locale-specific behavior is data in the
//! table; the normalization algorithm itself is language-independent.
//!
//! Locales are cheap to clone and share; the rule table behind them is
//! built once per construction and never mutated.
//!
//! # Examples
//!
//! ```
//! use odonym::locale::Locale;
//!
//! let locale = Locale::new("ru_RU")?;
//!
//! let street_type = locale.find_street_type("ул").unwrap();
//! assert_eq!(street_type.canonical(), "улица");
//! assert_eq!(street_type.abbrev(), "ул.");
//!
//! assert!(locale.find_street_type("проталина").is_none());
//! # Ok::<(), odonym::error::OdonymError>(())
//! ```

use std::sync::Arc;

use ahash::AHashMap;

use crate::analysis;
use crate::error::{OdonymError, Result};

mod en;
mod ru;
mod uk;

/// Position of the canonical street-type token when composing a canonical
/// key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypePosition {
    /// Type token first: `"улица ленина"`.
    BeforeName,
    /// Type token last: `"baker street"`.
    AfterName,
}

/// One row of a locale rule table.
///
/// `canonical` and `abbrev` default along the chain full → canonical →
/// abbrev when absent. `variants` are the written forms recognized during
/// detection, stored case-folded; no duplicates are allowed across rows.
#[derive(Debug)]
pub(crate) struct StreetTypeRule {
    pub(crate) full: &'static str,
    pub(crate) canonical: Option<&'static str>,
    pub(crate) abbrev: Option<&'static str>,
    pub(crate) variants: &'static [&'static str],
}

/// Static description of one language's rules.
#[derive(Debug)]
pub(crate) struct LocaleData {
    pub(crate) identifier: &'static str,
    pub(crate) rules: &'static [StreetTypeRule],
    pub(crate) type_position: TypePosition,
    /// Character equivalences applied when names are compared with their
    /// street type stripped.
    pub(crate) char_folds: &'static [(char, char)],
}

/// Built-in locales. Adding a language means adding a data file here, not a
/// new type.
static REGISTRY: &[&LocaleData] = &[&ru::DATA, &en::DATA, &uk::DATA];

/// A recognized street type with its written forms.
///
/// Row order in the rule table doubles as priority: when a name contains
/// several recognizable type tokens, the one from the earliest row is the
/// street type and the rest stay proper-name tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreetType {
    priority: usize,
    full: &'static str,
    canonical: &'static str,
    abbrev: &'static str,
}

impl StreetType {
    /// The unabbreviated written form, e.g. `"улица"`.
    pub fn full(&self) -> &'static str {
        self.full
    }

    /// The canonical written form. Usually the full form, but a locale may
    /// canonicalize to an abbreviation.
    pub fn canonical(&self) -> &'static str {
        self.canonical
    }

    /// The abbreviated written form, e.g. `"ул."`.
    pub fn abbrev(&self) -> &'static str {
        self.abbrev
    }

    /// True when this row outranks `other` (earlier table rows win).
    pub fn is_prior(&self, other: &StreetType) -> bool {
        self.priority < other.priority
    }
}

#[derive(Debug)]
struct LocaleInner {
    data: &'static LocaleData,
    by_variant: AHashMap<&'static str, StreetType>,
}

/// An immutable rule table for one language.
#[derive(Debug, Clone)]
pub struct Locale {
    inner: Arc<LocaleInner>,
}

impl Locale {
    /// Build the locale for `identifier`.
    ///
    /// Fails with [`OdonymError::Configuration`] when the identifier is not
    /// one of [`Locale::available`].
    pub fn new(identifier: &str) -> Result<Locale> {
        let data = REGISTRY
            .iter()
            .copied()
            .find(|data| data.identifier == identifier)
            .ok_or_else(|| {
                OdonymError::configuration(format!("unknown locale: {identifier}"))
            })?;

        let mut by_variant = AHashMap::new();
        for (priority, rule) in data.rules.iter().enumerate() {
            let canonical = rule.canonical.unwrap_or(rule.full);
            let street_type = StreetType {
                priority,
                full: rule.full,
                canonical,
                abbrev: rule.abbrev.unwrap_or(canonical),
            };
            for variant in rule.variants {
                debug_assert!(
                    !by_variant.contains_key(variant),
                    "duplicate variant {variant:?} in locale {identifier}"
                );
                by_variant.insert(*variant, street_type);
            }
        }

        Ok(Locale {
            inner: Arc::new(LocaleInner { data, by_variant }),
        })
    }

    /// Identifiers of the built-in locales.
    pub fn available() -> Vec<&'static str> {
        REGISTRY.iter().map(|data| data.identifier).collect()
    }

    /// The identifier this locale was built from, e.g. `"ru_RU"`.
    pub fn identifier(&self) -> &'static str {
        self.inner.data.identifier
    }

    /// Where the canonical type token sits in a composed key.
    pub fn type_position(&self) -> TypePosition {
        self.inner.data.type_position
    }

    /// Look up a single token in the variant table.
    ///
    /// The token is case-folded first; matching against the table is exact
    /// string comparison, never fuzzy.
    pub fn find_street_type(&self, token: &str) -> Option<StreetType> {
        self.inner
            .by_variant
            .get(analysis::fold(token).as_str())
            .copied()
    }

    /// Split a token sequence into the street type (if any) and the folded
    /// proper-name tokens.
    ///
    /// Every token is case-folded. When several tokens match the variant
    /// table, the highest-priority row wins and the others remain
    /// proper-name tokens in their original relative order.
    pub fn normalize(&self, tokens: &[String]) -> (Option<StreetType>, Vec<String>) {
        let folded: Vec<String> = tokens.iter().map(|t| analysis::fold(t)).collect();

        let mut best: Option<(usize, StreetType)> = None;
        for (pos, token) in folded.iter().enumerate() {
            if let Some(street_type) = self.inner.by_variant.get(token.as_str()) {
                let better = match best {
                    Some((_, current)) => street_type.is_prior(&current),
                    None => true,
                };
                if better {
                    best = Some((pos, *street_type));
                }
            }
        }

        match best {
            Some((pos, street_type)) => {
                let proper = folded
                    .into_iter()
                    .enumerate()
                    .filter(|(i, _)| *i != pos)
                    .map(|(_, t)| t)
                    .collect();
                (Some(street_type), proper)
            }
            None => (None, folded),
        }
    }

    /// Compose the canonical key for a normalized name.
    ///
    /// Joins the folded canonical type token and the proper-name tokens with
    /// single spaces, type token in the locale's mandated position. This is
    /// the single source of truth for canonical equality; [`crate::Name`]
    /// and the database both go through it.
    pub fn compose_key(&self, street_type: Option<&StreetType>, proper: &[String]) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(proper.len() + 1);
        for token in proper {
            parts.push(token.as_str());
        }

        let folded_type;
        if let Some(street_type) = street_type {
            folded_type = analysis::fold(street_type.canonical());
            match self.type_position() {
                TypePosition::BeforeName => parts.insert(0, folded_type.as_str()),
                TypePosition::AfterName => parts.push(folded_type.as_str()),
            }
        }

        parts.join(" ")
    }

    /// Apply this locale's character equivalences, used when names are
    /// compared with their street type stripped (e.g. Russian `ё` → `е`).
    pub(crate) fn fold_chars(&self, s: &str) -> String {
        let folds = self.inner.data.char_folds;
        if folds.is_empty() {
            return s.to_string();
        }
        s.chars()
            .map(|c| folds.iter().find(|(from, _)| *from == c).map_or(c, |(_, to)| *to))
            .collect()
    }
}
