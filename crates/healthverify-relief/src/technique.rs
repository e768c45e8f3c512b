//! The comfort technique catalogue.
//!
//! Guides are static text shown to a patient while they wait.  They are
//! non-clinical comfort measures only.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A comfort technique the triage rules can recommend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Technique {
    Breathing,
    Positioning,
    Distraction,
    Movement,
}

/// Patient-facing instructions for one technique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TechniqueGuide {
    pub name: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub steps: &'static [&'static str],
    pub warning: Option<&'static str>,
}

const BREATHING: TechniqueGuide = TechniqueGuide {
    name: "Deep Breathing Exercise",
    description: "Slow, controlled breathing to reduce pain and anxiety",
    duration: "5-10 minutes",
    steps: &[
        "Sit or lie down in a comfortable position",
        "Place one hand on your chest, one on your belly",
        "Breathe in slowly through your nose for 4 counts",
        "Hold your breath for 4 counts",
        "Exhale slowly through your mouth for 6 counts",
        "Repeat 5-10 times",
    ],
    warning: None,
};

const POSITIONING: TechniqueGuide = TechniqueGuide {
    name: "Comfort Positioning",
    description: "Optimal positioning to reduce pressure and pain",
    duration: "Ongoing",
    steps: &[
        "Find a comfortable chair or lying position",
        "Use pillows to support painful areas",
        "Elevate legs if experiencing lower body pain",
        "Keep your spine neutral and supported",
        "Change positions every 15-20 minutes",
    ],
    warning: None,
};

const DISTRACTION: TechniqueGuide = TechniqueGuide {
    name: "Mental Distraction",
    description: "Redirect focus away from pain through mental exercises",
    duration: "10-15 minutes",
    steps: &[
        "Close your eyes and imagine a peaceful place",
        "Count backwards from 100 by 7s",
        "Name 5 things you can see, 4 you can hear, 3 you can touch",
        "Listen to calming music or sounds",
        "Focus on positive memories or experiences",
    ],
    warning: None,
};

const MOVEMENT: TechniqueGuide = TechniqueGuide {
    name: "Gentle Movement",
    description: "Light stretching and movement to improve circulation",
    duration: "5-10 minutes",
    steps: &[
        "Start with gentle neck rolls",
        "Slowly roll your shoulders",
        "Stretch your arms above your head",
        "Gently twist your spine left and right",
        "Do ankle circles if seated",
    ],
    warning: Some("Stop if movement increases pain"),
};

impl Technique {
    pub const ALL: [Technique; 4] = [
        Technique::Breathing,
        Technique::Positioning,
        Technique::Distraction,
        Technique::Movement,
    ];

    pub fn guide(&self) -> &'static TechniqueGuide {
        match self {
            Technique::Breathing => &BREATHING,
            Technique::Positioning => &POSITIONING,
            Technique::Distraction => &DISTRACTION,
            Technique::Movement => &MOVEMENT,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Technique::Breathing => "breathing",
            Technique::Positioning => "positioning",
            Technique::Distraction => "distraction",
            Technique::Movement => "movement",
        }
    }
}

impl fmt::Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
