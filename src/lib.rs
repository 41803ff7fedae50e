//! # Odonym
//!
//! A locale-aware street name validation and suggestion library for Rust.
//!
//! Odonym answers three questions about a street name against a reference
//! set: is it recorded verbatim, is it recorded under an equivalent surface
//! form (abbreviation, token order), and is it a likely misspelling of a
//! recorded name.
//!
//! ## Features
//!
//! - Locale rule tables as data: street-type variants, canonical forms and
//!   token-order conventions per language (Russian, British English,
//!   Ukrainian built in)
//! - Deterministic canonicalization: one canonical key per street,
//!   regardless of abbreviation or type-token position
//! - Exact, canonical-form and bounded-edit-distance spelling lookups
//! - Detection of names stored with a street type the query dropped
//!
//! ## Example
//!
//! ```
//! use odonym::{Database, Locale};
//!
//! let locale = Locale::new("ru_RU")?;
//! let mut db = Database::new(locale);
//!
//! db.add("улица Ленина")?;
//! db.add("Зелёная улица")?;
//!
//! assert!(db.check_exact_match("улица Ленина")?);
//! assert_eq!(db.check_canonical_form("Ленина, ул.")?, ["улица Ленина"]);
//! assert_eq!(db.check_spelling("улица Ленена")?, ["улица Ленина"]);
//! # Ok::<(), odonym::error::OdonymError>(())
//! ```

pub mod analysis;
pub mod database;
pub mod error;
pub mod locale;
pub mod name;
pub mod spelling;

pub use database::{Database, NameInput, DEFAULT_MAX_EDITS};
pub use error::{OdonymError, Result};
pub use locale::{Locale, StreetType, TypePosition};
pub use name::Name;
pub use spelling::SpellingMatch;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
