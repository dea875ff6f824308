use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;

use once_cell::sync::Lazy;
use serde::Serialize;

mod cards_en;

pub const CATALOG_SIZE: usize = 78;
pub const KEYWORD_RANGE: RangeInclusive<usize> = 3..=9;

#[derive(Debug, Clone, thiserror::Error, Eq, PartialEq)]
pub enum CatalogIntegrityError {
    #[error("catalog MUST contain exactly {expected} records, found {found}")]
    WrongLength { expected: usize, found: usize },
    #[error("record {index} field `{field}` MUST be non-empty")]
    EmptyField { index: usize, field: &'static str },
    #[error(
        "record {index} MUST carry between {} and {} keywords, found {found}",
        KEYWORD_RANGE.start(),
        KEYWORD_RANGE.end()
    )]
    KeywordCount { index: usize, found: usize },
    #[error("record {index} keyword at position {position} MUST be non-empty")]
    EmptyKeyword { index: usize, position: usize },
    #[error("record {index} crystal `{crystal}` MUST be lowercase words joined by underscores")]
    MalformedCrystal { index: usize, crystal: String },
    #[error("name `{name}` MUST be unique, found at index {first} and index {second}")]
    DuplicateName { name: String, first: usize, second: usize },
}

#[derive(Debug, Clone, Copy, thiserror::Error, Eq, PartialEq, Hash)]
#[error("record not found at index {index}")]
pub struct RecordNotFound {
    pub index: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Suit {
    Wands,
    Cups,
    Swords,
    Pentacles,
}

impl Suit {
    pub const ALL: [Self; 4] = [Self::Wands, Self::Cups, Self::Swords, Self::Pentacles];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wands => "wands",
            Self::Cups => "cups",
            Self::Swords => "swords",
            Self::Pentacles => "pentacles",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "wands" => Some(Self::Wands),
            "cups" => Some(Self::Cups),
            "swords" => Some(Self::Swords),
            "pentacles" => Some(Self::Pentacles),
            _ => None,
        }
    }
}

impl Display for Suit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Arcana {
    Major,
    Minor(Suit),
}

impl Arcana {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor(_) => "minor",
        }
    }

    #[must_use]
    pub fn suit(self) -> Option<Suit> {
        match self {
            Self::Major => None,
            Self::Minor(suit) => Some(suit),
        }
    }
}

/// One catalog entry.
///
/// Every field borrows from the compiled-in definition, so a `&CardRecord`
/// handed out by [`LookupService`] cannot be used to change the catalog.
/// Copies are plain values and never write back.
#[derive(Debug, Clone, Copy, Serialize, Eq, PartialEq, Hash)]
pub struct CardRecord {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub message: &'static str,
    pub crystal: &'static str,
    pub crystal_suggestion: &'static str,
}

impl CardRecord {
    /// Classify the record from its name. Minor arcana are named `<rank> of <Suit>`.
    #[must_use]
    pub fn arcana(&self) -> Arcana {
        self.name
            .rsplit_once(" of ")
            .and_then(|(_, suit)| Suit::parse(&suit.to_ascii_lowercase()))
            .map_or(Arcana::Major, Arcana::Minor)
    }

    /// `tiger_eye` becomes `Tiger Eye`.
    #[must_use]
    pub fn crystal_display_name(&self) -> String {
        self.crystal
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Check one record against the per-record catalog invariants.
    ///
    /// # Errors
    /// Returns the first [`CatalogIntegrityError`] found for the record at `index`.
    pub fn validate(&self, index: usize) -> Result<(), CatalogIntegrityError> {
        for (field, value) in [
            ("name", self.name),
            ("message", self.message),
            ("crystal", self.crystal),
            ("crystal_suggestion", self.crystal_suggestion),
        ] {
            if value.trim().is_empty() {
                return Err(CatalogIntegrityError::EmptyField { index, field });
            }
        }

        if !KEYWORD_RANGE.contains(&self.keywords.len()) {
            return Err(CatalogIntegrityError::KeywordCount { index, found: self.keywords.len() });
        }

        if let Some(position) = self.keywords.iter().position(|keyword| keyword.trim().is_empty()) {
            return Err(CatalogIntegrityError::EmptyKeyword { index, position });
        }

        if !is_crystal_identifier(self.crystal) {
            return Err(CatalogIntegrityError::MalformedCrystal {
                index,
                crystal: self.crystal.to_string(),
            });
        }

        Ok(())
    }
}

fn is_crystal_identifier(value: &str) -> bool {
    value
        .split('_')
        .all(|word| !word.is_empty() && word.chars().all(|ch| ch.is_ascii_lowercase()))
}

/// Validate a whole catalog definition: length, per-record completeness and
/// name uniqueness.
///
/// # Errors
/// Returns the first [`CatalogIntegrityError`] encountered, scanning in
/// catalog order.
pub fn validate_definition(records: &[CardRecord]) -> Result<(), CatalogIntegrityError> {
    if records.len() != CATALOG_SIZE {
        return Err(CatalogIntegrityError::WrongLength {
            expected: CATALOG_SIZE,
            found: records.len(),
        });
    }

    let mut seen_names: BTreeMap<&str, usize> = BTreeMap::new();
    for (index, record) in records.iter().enumerate() {
        record.validate(index)?;
        if let Some(first) = seen_names.insert(record.name, index) {
            return Err(CatalogIntegrityError::DuplicateName {
                name: record.name.to_string(),
                first,
                second: index,
            });
        }
    }

    Ok(())
}

static STANDARD: Lazy<Result<Catalog, CatalogIntegrityError>> = Lazy::new(|| {
    let catalog = Catalog::from_static(&cards_en::CARDS_EN);
    match &catalog {
        Ok(_) => tracing::debug!(size = CATALOG_SIZE, "standard catalog validated"),
        Err(err) => tracing::error!(error = %err, "standard catalog failed integrity check"),
    }
    catalog
});

/// The ordered, validated collection of records. Only positional reads are
/// possible and they go through [`LookupService`].
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    records: &'static [CardRecord],
}

impl Catalog {
    /// Build a catalog from a static definition, rejecting it unless every
    /// integrity rule holds.
    ///
    /// # Errors
    /// Returns [`CatalogIntegrityError`] for a malformed definition.
    pub fn from_static(records: &'static [CardRecord]) -> Result<Self, CatalogIntegrityError> {
        validate_definition(records)?;
        Ok(Self { records })
    }

    /// The compiled-in English catalog, validated once per process.
    ///
    /// # Errors
    /// Returns [`CatalogIntegrityError`] when the compiled-in definition is
    /// malformed. The same error is returned on every call.
    pub fn standard() -> Result<&'static Self, CatalogIntegrityError> {
        let standard: &'static Result<Self, CatalogIntegrityError> = &STANDARD;
        standard.as_ref().map_err(CatalogIntegrityError::clone)
    }

    fn record_at(&self, position: usize) -> Option<&'static CardRecord> {
        self.records.get(position)
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LookupService {
    catalog: Catalog,
}

impl LookupService {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Lookup over the compiled-in catalog. Call this at startup so a
    /// malformed definition stops the process before it serves anything.
    ///
    /// # Errors
    /// Returns [`CatalogIntegrityError`] when the compiled-in definition is
    /// malformed.
    pub fn standard() -> Result<Self, CatalogIntegrityError> {
        Catalog::standard().map(|catalog| Self::new(*catalog))
    }

    /// Resolve `index` to its record.
    ///
    /// # Errors
    /// Returns [`RecordNotFound`] carrying `index` when it is negative or past
    /// the last position.
    pub fn get_record(&self, index: i64) -> Result<&'static CardRecord, RecordNotFound> {
        let position = usize::try_from(index).ok();
        position.and_then(|position| self.catalog.record_at(position)).ok_or_else(|| {
            tracing::debug!(index, size = self.catalog.len(), "lookup index out of range");
            RecordNotFound { index }
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.catalog.len() == 0
    }

    /// Records with their positions, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &'static CardRecord)> {
        let catalog = self.catalog;
        (0..catalog.len()).filter_map(move |position| {
            catalog.record_at(position).map(|record| (position, record))
        })
    }

    /// Case-insensitive exact match on the record name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<(usize, &'static CardRecord)> {
        let needle = name.trim();
        self.iter().find(|(_, record)| record.name.eq_ignore_ascii_case(needle))
    }

    #[must_use]
    pub fn records_with_crystal(&self, crystal: &str) -> Vec<(usize, &'static CardRecord)> {
        self.iter().filter(|(_, record)| record.crystal == crystal).collect()
    }

    /// Distinct crystal identifiers in order of first appearance.
    #[must_use]
    pub fn crystals(&self) -> Vec<&'static str> {
        let mut seen = BTreeSet::new();
        self.iter()
            .map(|(_, record)| record.crystal)
            .filter(|crystal| seen.insert(*crystal))
            .collect()
    }
}
