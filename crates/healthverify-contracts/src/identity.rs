//! Identity document types.
//!
//! An `IdentityRecord` is what the identity validator derives from a South
//! African ID number.  It never carries the number itself; audit records
//! refer to a patient through a salted hash instead.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Gender encoded in digit 7 of the ID number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

/// Citizenship encoded in digit 8 of the ID number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Citizenship {
    Citizen,
    PermanentResident,
}

impl Citizenship {
    pub fn as_str(&self) -> &'static str {
        match self {
            Citizenship::Citizen => "citizen",
            Citizenship::PermanentResident => "permanent_resident",
        }
    }
}

impl fmt::Display for Citizenship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields derived from a successfully parsed ID number.
///
/// Constructed fresh on every validation call and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRecord {
    /// Date of birth, with the century resolved against the validation date.
    pub birth_date: NaiveDate,
    /// Validation year minus birth year; month and day are ignored.
    pub age: i32,
    pub gender: Gender,
    pub citizenship: Citizenship,
    /// Soft signal: `false` means the check digit did not match.
    pub checksum_valid: bool,
}

/// The kinds of identity document an intake clerk can capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    SouthAfricanId,
    Passport,
    AsylumPermit,
    WorkPermit,
}

impl DocumentKind {
    /// Parse the label shown on the intake form (case-insensitive).
    ///
    /// Accepts both display labels ("South African ID", "Work Permit") and
    /// snake_case names ("south_african_id").  Returns `None` for anything
    /// else.
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.trim().to_ascii_lowercase().replace('_', " ");
        match normalized.as_str() {
            "south african id" | "sa id" => Some(DocumentKind::SouthAfricanId),
            "passport" => Some(DocumentKind::Passport),
            "asylum permit" => Some(DocumentKind::AsylumPermit),
            "work permit" => Some(DocumentKind::WorkPermit),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::SouthAfricanId => "South African ID",
            DocumentKind::Passport => "Passport",
            DocumentKind::AsylumPermit => "Asylum Permit",
            DocumentKind::WorkPermit => "Work Permit",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
