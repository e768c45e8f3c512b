//! Pain triage rules.
//!
//! An assessment either escalates to emergency care or yields an ordered list
//! of comfort techniques.  Escalation always wins: no techniques are offered
//! to a patient who should be seen immediately.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use healthverify_contracts::error::{HealthVerifyError, HealthVerifyResult};

use crate::technique::Technique;

/// Level at or above which a patient is escalated regardless of symptoms.
pub const EMERGENCY_LEVEL: u8 = 8;

/// Level at or above which the plan carries a warning.
pub const WARNING_LEVEL: u8 = 7;

/// Symptom fragments that escalate to emergency care (matched on the
/// lower-cased symptom text).
pub const EMERGENCY_KEYWORDS: [&str; 7] = [
    "chest pain",
    "difficulty breathing",
    "severe headache",
    "stroke",
    "bleeding",
    "fever",
    "unconscious",
];

const PAIN_DESCRIPTIONS: [&str; 10] = [
    "No pain",
    "Mild pain",
    "Moderate pain",
    "Moderate-severe pain",
    "Severe pain",
    "Very severe pain",
    "Intense pain",
    "Extremely intense pain",
    "Excruciating pain",
    "Unbearable pain",
];

/// A self-reported pain score on the 1-10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct PainLevel(u8);

impl PainLevel {
    pub fn new(level: i64) -> HealthVerifyResult<Self> {
        match u8::try_from(level) {
            Ok(l @ 1..=10) => Ok(Self(l)),
            _ => Err(HealthVerifyError::InvalidPainLevel { level }),
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn description(&self) -> &'static str {
        PAIN_DESCRIPTIONS[usize::from(self.0 - 1)]
    }
}

impl TryFrom<i64> for PainLevel {
    type Error = HealthVerifyError;

    fn try_from(level: i64) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<PainLevel> for i64 {
    fn from(level: PainLevel) -> Self {
        i64::from(level.0)
    }
}

impl fmt::Display for PainLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/10", self.0)
    }
}

/// What a patient reports at the start of a wait.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PainAssessment {
    pub level: i64,
    /// Free text such as "aching" or "sharp".  Recorded, not used by the rules.
    #[serde(default)]
    pub pain_type: String,
    /// Body location, e.g. "back" or "chest".
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub symptoms: Vec<String>,
}

/// The triage result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReliefPlan {
    /// See a clinician now.  `reasons` names what triggered escalation.
    Emergency { level: PainLevel, reasons: Vec<String> },

    Recommendations {
        level: PainLevel,
        description: &'static str,
        techniques: Vec<Technique>,
        warning: bool,
    },
}

impl ReliefPlan {
    pub fn is_emergency(&self) -> bool {
        matches!(self, ReliefPlan::Emergency { .. })
    }
}

/// Triage one assessment.
///
/// Returns `HealthVerifyError::InvalidPainLevel` for a level outside 1-10.
pub fn assess(assessment: &PainAssessment) -> HealthVerifyResult<ReliefPlan> {
    let level = PainLevel::new(assessment.level)?;

    let reasons = emergency_reasons(level, &assessment.symptoms);
    if !reasons.is_empty() {
        warn!(level = level.value(), reasons = ?reasons, "pain assessment escalated to emergency");
        return Ok(ReliefPlan::Emergency { level, reasons });
    }

    let techniques = recommend(level, &assessment.location, &assessment.symptoms);
    info!(
        level = level.value(),
        techniques = techniques.len(),
        "relief techniques recommended"
    );

    Ok(ReliefPlan::Recommendations {
        level,
        description: level.description(),
        techniques,
        warning: level.value() >= WARNING_LEVEL,
    })
}

/// Everything that escalates this assessment; empty when none does.
pub fn emergency_reasons(level: PainLevel, symptoms: &[String]) -> Vec<String> {
    let mut reasons = Vec::new();

    if level.value() >= EMERGENCY_LEVEL {
        reasons.push(format!("pain level {} ({})", level, level.description()));
    }

    for symptom in symptoms {
        let lowered = symptom.to_lowercase();
        if let Some(keyword) = EMERGENCY_KEYWORDS.iter().find(|k| lowered.contains(*k)) {
            reasons.push(format!("symptom '{}' matches '{}'", symptom, keyword));
        }
    }

    reasons
}

/// Comfort techniques for a non-emergency level, in presentation order.
///
/// Movement is left out when the location is exactly `"chest"` or a symptom
/// is exactly `"shortness of breath"`.  Both comparisons are exact and
/// case-sensitive, unlike the emergency keyword scan.
pub fn recommend(level: PainLevel, location: &str, symptoms: &[String]) -> Vec<Technique> {
    let level = level.value();
    let mut techniques = Vec::with_capacity(4);

    if level >= 4 {
        techniques.push(Technique::Breathing);
    }

    techniques.push(Technique::Positioning);

    if level >= 3 {
        techniques.push(Technique::Distraction);
    }

    // Exact match; "Shortness of breath" or "some shortness of breath" do not count.
    let short_of_breath = symptoms.iter().any(|s| s == "shortness of breath");
    if level <= 6 && location != "chest" && !short_of_breath {
        techniques.push(Technique::Movement);
    }

    techniques
}
