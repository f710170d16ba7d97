//! The fixed context vocabulary.
//!
//! One constant table drives both filter validation and the administrative
//! seed that populates the `contexts` storage table, so the two can never
//! drift apart.
//!
//! Client filters carry a bare value with no dimension attached, so `value`
//! must be unique across all three dimensions — it is the sole join key.
//! That invariant is asserted by a test below and backed by a UNIQUE
//! constraint in the SQLite schema.

use crate::context::Dimension;

/// One row of the fixed vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
  pub dimension: Dimension,
  pub value:     &'static str,
  pub label:     &'static str,
}

const fn entry(
  dimension: Dimension,
  value: &'static str,
  label: &'static str,
) -> CatalogEntry {
  CatalogEntry { dimension, value, label }
}

/// Every recognized context tag, in seed order.
pub const ENTRIES: &[CatalogEntry] = &[
  // Stages
  entry(Dimension::Stage, "PRE_ARRIVAL", "Pre-Arrival"),
  entry(Dimension::Stage, "STUDYING", "Currently Studying"),
  entry(Dimension::Stage, "GRADUATING", "Graduating"),
  // Provinces and territories
  entry(Dimension::Province, "ON", "Ontario"),
  entry(Dimension::Province, "BC", "British Columbia"),
  entry(Dimension::Province, "AB", "Alberta"),
  entry(Dimension::Province, "QC", "Quebec"),
  entry(Dimension::Province, "MB", "Manitoba"),
  entry(Dimension::Province, "SK", "Saskatchewan"),
  entry(Dimension::Province, "NS", "Nova Scotia"),
  entry(Dimension::Province, "NB", "New Brunswick"),
  entry(Dimension::Province, "NL", "Newfoundland and Labrador"),
  entry(Dimension::Province, "PE", "Prince Edward Island"),
  entry(Dimension::Province, "NT", "Northwest Territories"),
  entry(Dimension::Province, "YT", "Yukon"),
  entry(Dimension::Province, "NU", "Nunavut"),
  // Programs
  entry(Dimension::Program, "COLLEGE_DIPLOMA", "College Diploma"),
  entry(Dimension::Program, "UNDERGRADUATE", "Undergraduate Degree"),
  entry(Dimension::Program, "MASTERS", "Master's Degree"),
  entry(Dimension::Program, "PHD", "PhD / Doctorate"),
  entry(Dimension::Program, "LANGUAGE_PROGRAM", "Language Program"),
];

/// Look up a value anywhere in the vocabulary.
pub fn lookup(value: &str) -> Option<&'static CatalogEntry> {
  ENTRIES.iter().find(|e| e.value == value)
}

/// Whether `value` is a recognized tag for `dimension`.
pub fn is_recognized(dimension: Dimension, value: &str) -> bool {
  lookup(value).is_some_and(|e| e.dimension == dimension)
}

/// All entries of one dimension, in seed order.
pub fn entries(dimension: Dimension) -> impl Iterator<Item = &'static CatalogEntry> {
  ENTRIES.iter().filter(move |e| e.dimension == dimension)
}
