//! The reference-name database and its query operations.
//!
//! A [`Database`] holds every added street name in three query indexes: an
//! exact set of raw strings, a canonical map from canonical key to the
//! distinct raw strings that produced it, and a fuzzy index over
//! proper-name tokens partitioned by canonical street-type token. A fourth
//! index supports reporting names whose street-type token was dropped.
//!
//! The database grows monotonically through [`Database::add`]; queries
//! never mutate. All operations accept either a raw string or an
//! already-parsed [`Name`] through [`NameInput`]; a raw string is parsed
//! with the database's own locale first, so results are identical either
//! way.
//!
//! # Examples
//!
//! ```
//! use odonym::{Database, Locale};
//!
//! let locale = Locale::new("ru_RU")?;
//! let mut db = Database::new(locale);
//!
//! db.add("улица Ленина")?;
//!
//! assert!(db.check_exact_match("улица Ленина")?);
//! assert!(!db.check_exact_match("ул. Ленина")?);
//! assert_eq!(db.check_canonical_form("ул. Ленина")?, ["улица Ленина"]);
//! assert_eq!(db.check_spelling("улица Ленена")?, ["улица Ленина"]);
//! # Ok::<(), odonym::error::OdonymError>(())
//! ```

use std::borrow::Cow;

use ahash::{AHashMap, AHashSet};

use crate::analysis;
use crate::error::{OdonymError, Result};
use crate::locale::Locale;
use crate::name::Name;
use crate::spelling::{self, SpellingMatch};

/// Default bound on total character edits in spelling lookups.
pub const DEFAULT_MAX_EDITS: usize = 1;

/// Query input: a raw string or an already-parsed name.
///
/// A closed two-case type rather than generic dispatch; every operation
/// resolves it into a parsed [`Name`] up front.
#[derive(Debug, Clone, Copy)]
pub enum NameInput<'a> {
    /// A raw string, parsed with the database's locale.
    Raw(&'a str),
    /// A name already parsed by the caller.
    Parsed(&'a Name),
}

impl<'a> From<&'a str> for NameInput<'a> {
    fn from(raw: &'a str) -> Self {
        NameInput::Raw(raw)
    }
}

impl<'a> From<&'a String> for NameInput<'a> {
    fn from(raw: &'a String) -> Self {
        NameInput::Raw(raw)
    }
}

impl<'a> From<&'a Name> for NameInput<'a> {
    fn from(name: &'a Name) -> Self {
        NameInput::Parsed(name)
    }
}

/// One distinct canonical key in the fuzzy index.
#[derive(Debug)]
struct FuzzyEntry {
    key: String,
    proper: Vec<String>,
    sorted: Vec<String>,
}

/// A mutable collection of reference street names.
#[derive(Debug)]
pub struct Database {
    locale: Locale,
    /// Raw strings as added, for exact matching.
    exact: AHashSet<String>,
    /// Canonical key → distinct representatives in first-insertion order.
    canonical: AHashMap<String, Vec<String>>,
    /// Fuzzy index partitioned by folded canonical type token; entries in
    /// key first-insertion order.
    fuzzy: AHashMap<Option<String>, Vec<FuzzyEntry>>,
    /// Sorted non-type tokens → representatives, for names that carried a
    /// street type.
    stripped: AHashMap<String, Vec<String>>,
}

impl Database {
    /// Create an empty database over the given locale.
    pub fn new(locale: Locale) -> Self {
        Database {
            locale,
            exact: AHashSet::new(),
            canonical: AHashMap::new(),
            fuzzy: AHashMap::new(),
            stripped: AHashMap::new(),
        }
    }

    /// The locale every raw input is parsed with.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Number of distinct canonical keys added so far.
    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    /// True when nothing has been added.
    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }

    /// Resolve an input into a parsed name.
    ///
    /// A parsed name must have been parsed under this database's locale;
    /// its canonical key was composed under that locale's rules and keys
    /// from different locales are not comparable.
    fn resolve<'a>(&self, input: NameInput<'a>) -> Result<Cow<'a, Name>> {
        match input {
            NameInput::Raw(raw) => Ok(Cow::Owned(Name::parse(raw, &self.locale)?)),
            NameInput::Parsed(name) => {
                if name.locale().identifier() != self.locale.identifier() {
                    return Err(OdonymError::configuration(format!(
                        "name parsed under locale {} queried against a {} database",
                        name.locale().identifier(),
                        self.locale.identifier()
                    )));
                }
                Ok(Cow::Borrowed(name))
            }
        }
    }

    /// Fuzzy-index partition for a name: the folded canonical type token.
    fn partition_of(name: &Name) -> Option<String> {
        name.street_type().map(|st| analysis::fold(st.canonical()))
    }

    /// Stripped-type key: the name's non-type tokens, character-folded and
    /// sorted.
    fn stripped_key_of(&self, name: &Name) -> String {
        let mut tokens: Vec<String> = name
            .proper_tokens()
            .iter()
            .filter(|token| self.locale.find_street_type(token).is_none())
            .map(|token| self.locale.fold_chars(token))
            .collect();
        tokens.sort();
        tokens.join(" ")
    }

    /// Add a name to the database.
    ///
    /// Re-adding an identical raw string changes nothing observable. Fails
    /// only when parsing fails or when a parsed [`Name`] carries a foreign
    /// locale; a failed call leaves the database untouched.
    pub fn add<'a, I: Into<NameInput<'a>>>(&mut self, input: I) -> Result<()> {
        let name = self.resolve(input.into())?;
        let raw = name.raw().to_string();
        let key = name.canonical_key();

        self.exact.insert(raw.clone());

        let representatives = self.canonical.entry(key.to_string()).or_default();
        let first_sighting = representatives.is_empty();
        let new_representative = !representatives.contains(&raw);
        if new_representative {
            representatives.push(raw.clone());
        }

        if first_sighting {
            let mut sorted = name.proper_tokens().to_vec();
            sorted.sort();
            self.fuzzy
                .entry(Self::partition_of(&name))
                .or_default()
                .push(FuzzyEntry {
                    key: key.to_string(),
                    proper: name.proper_tokens().to_vec(),
                    sorted,
                });
        }

        if name.has_street_type() && new_representative {
            let stripped_key = self.stripped_key_of(&name);
            let entries = self.stripped.entry(stripped_key).or_default();
            if !entries.contains(&raw) {
                entries.push(raw);
            }
        }

        Ok(())
    }

    /// True iff the raw string was added verbatim.
    ///
    /// Comparison is character-for-character with no normalization: strings
    /// differing in case, spacing, abbreviation or word order are never
    /// exact matches of each other.
    pub fn check_exact_match<'a, I: Into<NameInput<'a>>>(&self, input: I) -> Result<bool> {
        let name = self.resolve(input.into())?;
        Ok(self.exact.contains(name.raw()))
    }

    /// Representatives recorded under the input's canonical key.
    ///
    /// Distinct raw strings in first-insertion order; empty when no added
    /// name shares the key.
    pub fn check_canonical_form<'a, I: Into<NameInput<'a>>>(
        &self,
        input: I,
    ) -> Result<Vec<String>> {
        let name = self.resolve(input.into())?;
        Ok(self
            .canonical
            .get(name.canonical_key())
            .cloned()
            .unwrap_or_default())
    }

    /// Representatives of every stored key within [`DEFAULT_MAX_EDITS`]
    /// character edits of the input's proper-name tokens.
    ///
    /// See [`Database::check_spelling_matches`] for the full contract.
    pub fn check_spelling<'a, I: Into<NameInput<'a>>>(&self, input: I) -> Result<Vec<String>> {
        self.check_spelling_within(input, DEFAULT_MAX_EDITS)
    }

    /// [`Database::check_spelling`] with an explicit edit bound.
    pub fn check_spelling_within<'a, I: Into<NameInput<'a>>>(
        &self,
        input: I,
        max_edits: usize,
    ) -> Result<Vec<String>> {
        Ok(self
            .check_spelling_matches(input, max_edits)?
            .into_iter()
            .map(|m| m.name)
            .collect())
    }

    /// Spelling suggestions with their distances.
    ///
    /// Candidates are the stored keys whose canonical type token equals the
    /// input's; a type mismatch is never a spelling variant. Distance is
    /// the token-aligned Damerau-Levenshtein sum over proper-name tokens,
    /// taking the sequence either in its stored order or sorted (so
    /// reordered proper-name tokens still suggest). Results are ordered by
    /// ascending distance, ties broken by key first-insertion order;
    /// distance 0 is included, so querying a name the database already
    /// contains returns that name as the nearest match.
    pub fn check_spelling_matches<'a, I: Into<NameInput<'a>>>(
        &self,
        input: I,
        max_edits: usize,
    ) -> Result<Vec<SpellingMatch>> {
        let name = self.resolve(input.into())?;

        let Some(entries) = self.fuzzy.get(&Self::partition_of(&name)) else {
            return Ok(Vec::new());
        };

        let mut query_sorted = name.proper_tokens().to_vec();
        query_sorted.sort();

        let mut hits: Vec<(usize, &FuzzyEntry)> = entries
            .iter()
            .filter_map(|entry| {
                let direct =
                    spelling::token_distance_within(name.proper_tokens(), &entry.proper, max_edits);
                let unordered =
                    spelling::token_distance_within(&query_sorted, &entry.sorted, max_edits);
                match (direct, unordered) {
                    (Some(a), Some(b)) => Some((a.min(b), entry)),
                    (Some(a), None) => Some((a, entry)),
                    (None, Some(b)) => Some((b, entry)),
                    (None, None) => None,
                }
            })
            .collect();

        // stable sort keeps first-insertion order within a distance class
        hits.sort_by_key(|(distance, _)| *distance);

        let mut matches = Vec::new();
        for (distance, entry) in hits {
            if let Some(representatives) = self.canonical.get(&entry.key) {
                for representative in representatives {
                    matches.push(SpellingMatch::new(representative.clone(), distance));
                }
            }
        }

        Ok(matches)
    }

    /// Stored names whose street-type token is missing from the query.
    ///
    /// A stored name participates when it carried a street type; it is
    /// reported when its remaining tokens, sorted and character-folded,
    /// equal the query's. A query that itself carries a street type reports
    /// nothing, as does a query matching only names that never had a type
    /// token.
    pub fn check_stripped_type<'a, I: Into<NameInput<'a>>>(
        &self,
        input: I,
    ) -> Result<Vec<String>> {
        let name = self.resolve(input.into())?;
        if name.has_street_type() {
            return Ok(Vec::new());
        }

        let key = self.stripped_key_of(&name);
        Ok(self.stripped.get(&key).cloned().unwrap_or_default())
    }
}
