//! # healthverify-relief
//!
//! Waiting-room pain triage.  A patient reports a 1-10 pain level, a location
//! and symptoms; [`assess`] either escalates to emergency care or recommends
//! comfort techniques from a fixed catalogue.  [`ProgressLog`] tracks how the
//! level changes while they wait.

pub mod progress;
pub mod technique;
pub mod triage;

pub use progress::{ProgressEntry, ProgressLog};
pub use technique::{Technique, TechniqueGuide};
pub use triage::{assess, emergency_reasons, recommend, PainAssessment, PainLevel, ReliefPlan};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use healthverify_contracts::error::HealthVerifyError;

    use super::*;

    fn assessment(level: i64, location: &str, symptoms: &[&str]) -> PainAssessment {
        PainAssessment {
            level,
            pain_type: "aching".to_string(),
            location: location.to_string(),
            symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn techniques(plan: &ReliefPlan) -> Vec<Technique> {
        match plan {
            ReliefPlan::Recommendations { techniques, .. } => techniques.clone(),
            other => panic!("expected recommendations, got {:?}", other),
        }
    }

    // ── Pain levels ───────────────────────────────────────────────────────────

    #[test]
    fn test_level_bounds() {
        for level in [0, 11, -3, 300] {
            match assess(&assessment(level, "back", &[])) {
                Err(HealthVerifyError::InvalidPainLevel { level: got }) => assert_eq!(got, level),
                other => panic!("expected InvalidPainLevel for {level}, got {:?}", other),
            }
        }
        assert!(assess(&assessment(1, "back", &[])).is_ok());
        assert!(assess(&assessment(10, "back", &[])).is_ok());
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(PainLevel::new(1).unwrap().description(), "No pain");
        assert_eq!(PainLevel::new(4).unwrap().description(), "Moderate-severe pain");
        assert_eq!(PainLevel::new(10).unwrap().description(), "Unbearable pain");
    }

    #[test]
    fn test_pain_level_serde() {
        let level: PainLevel = serde_json::from_str("6").unwrap();
        assert_eq!(level.value(), 6);
        assert_eq!(serde_json::to_string(&level).unwrap(), "6");
        assert!(serde_json::from_str::<PainLevel>("12").is_err());
    }

    // ── Emergency screening ───────────────────────────────────────────────────

    #[test]
    fn test_high_level_is_emergency() {
        let plan = assess(&assessment(8, "back", &[])).unwrap();
        assert!(plan.is_emergency());
    }

    #[test]
    fn test_keyword_match_is_case_insensitive_substring() {
        let plan = assess(&assessment(2, "head", &["Sudden SEVERE HEADACHE at night"])).unwrap();
        match plan {
            ReliefPlan::Emergency { reasons, .. } => {
                assert_eq!(reasons.len(), 1);
                assert!(reasons[0].contains("severe headache"));
            }
            other => panic!("expected emergency, got {:?}", other),
        }
    }

    #[test]
    fn test_emergency_lists_every_trigger() {
        let level = PainLevel::new(9).unwrap();
        let reasons = emergency_reasons(
            level,
            &["fever".to_string(), "bleeding gums".to_string(), "nausea".to_string()],
        );
        assert_eq!(reasons.len(), 3);
    }

    // ── Recommendations ───────────────────────────────────────────────────────

    #[test]
    fn test_mild_pain() {
        let plan = assess(&assessment(2, "knee", &[])).unwrap();
        assert_eq!(techniques(&plan), vec![Technique::Positioning, Technique::Movement]);
    }

    #[test]
    fn test_moderate_pain_gets_everything_in_order() {
        let plan = assess(&assessment(5, "back", &[])).unwrap();
        assert_eq!(
            techniques(&plan),
            vec![
                Technique::Breathing,
                Technique::Positioning,
                Technique::Distraction,
                Technique::Movement,
            ]
        );
    }

    #[test]
    fn test_movement_excluded() {
        // Chest pain location without an emergency keyword in the symptoms.
        let chest = assess(&assessment(3, "chest", &["tightness"])).unwrap();
        assert!(!techniques(&chest).contains(&Technique::Movement));

        let breathless = assess(&assessment(3, "back", &["shortness of breath"])).unwrap();
        assert!(!techniques(&breathless).contains(&Technique::Movement));

        let intense = assess(&assessment(7, "back", &[])).unwrap();
        assert!(!techniques(&intense).contains(&Technique::Movement));
    }

    /// The movement exclusions match the form values exactly.
    #[test]
    fn test_movement_exclusion_is_exact_match() {
        for symptom in ["Shortness of breath", "mild shortness of breath"] {
            let plan = assess(&assessment(3, "back", &[symptom])).unwrap();
            assert!(techniques(&plan).contains(&Technique::Movement), "{symptom}");
        }

        let upper = assess(&assessment(3, "Chest", &[])).unwrap();
        assert!(techniques(&upper).contains(&Technique::Movement));
    }

    #[test]
    fn test_warning_flag() {
        match assess(&assessment(7, "back", &[])).unwrap() {
            ReliefPlan::Recommendations { warning, description, .. } => {
                assert!(warning);
                assert_eq!(description, "Intense pain");
            }
            other => panic!("expected recommendations, got {:?}", other),
        }
        match assess(&assessment(6, "back", &[])).unwrap() {
            ReliefPlan::Recommendations { warning, .. } => assert!(!warning),
            other => panic!("expected recommendations, got {:?}", other),
        }
    }

    #[test]
    fn test_catalogue() {
        for technique in Technique::ALL {
            let guide = technique.guide();
            assert!(!guide.name.is_empty());
            assert!(!guide.steps.is_empty());
        }
        assert_eq!(
            Technique::Movement.guide().warning,
            Some("Stop if movement increases pain")
        );
        assert_eq!(Technique::Breathing.guide().warning, None);
    }

    // ── Progress ──────────────────────────────────────────────────────────────

    #[test]
    fn test_progress_log() {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
        let mut log = ProgressLog::new(PainLevel::new(7).unwrap());
        assert_eq!(log.latest_improvement(), None);

        assert_eq!(log.record(5, start + Duration::minutes(15)).unwrap().improvement, 2);
        assert_eq!(log.record(8, start + Duration::minutes(30)).unwrap().improvement, -1);

        assert_eq!(log.entries().len(), 2);
        assert_eq!(log.latest_improvement(), Some(-1));
        assert_eq!(log.best_improvement(), Some(2));
        assert_eq!(log.entries()[1].baseline, log.baseline());
    }

    #[test]
    fn test_progress_rejects_bad_reading() {
        let mut log = ProgressLog::new(PainLevel::new(4).unwrap());
        assert!(log.record(0, Utc::now()).is_err());
        assert!(log.entries().is_empty());
    }
}
