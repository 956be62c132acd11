//! Step catalogues for the supported treatment protocols.
//!
//! A catalogue is a compile-time constant, ordered list of the named phases a
//! treatment cycle passes through. Ordering within a catalogue defines
//! temporal precedence; an identifier appears at most once per catalogue.
//!
//! The step identifiers are the backend's identifiers and are non-contiguous
//! (`step4_opu` follows `step1_stimulation` in the IVF catalogue); they must
//! not be renumbered.

use crate::{TreatmentError, TreatmentResult};
use serde::{Deserialize, Serialize};

/// Treatment protocols the clinic runs as multi-phase cycles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreatmentType {
    #[serde(rename = "IVF")]
    Ivf,
    #[serde(rename = "IUI")]
    Iui,
}

impl TreatmentType {
    /// Convert to the backend wire string.
    pub fn to_wire(self) -> &'static str {
        match self {
            TreatmentType::Ivf => "IVF",
            TreatmentType::Iui => "IUI",
        }
    }

    /// Parse from the backend wire string.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "IVF" => Some(TreatmentType::Ivf),
            "IUI" => Some(TreatmentType::Iui),
            _ => None,
        }
    }

    /// The ordered step catalogue for this protocol.
    pub fn catalog(self) -> &'static [StepCatalogEntry] {
        match self {
            TreatmentType::Ivf => &IVF_STEPS,
            TreatmentType::Iui => &IUI_STEPS,
        }
    }

    /// Position of a step id within this protocol's catalogue.
    pub fn step_position(self, step_id: &str) -> Option<usize> {
        self.catalog().iter().position(|entry| entry.id == step_id)
    }

    /// Look up a catalogue entry by step id.
    pub fn step(self, step_id: &str) -> TreatmentResult<&'static StepCatalogEntry> {
        self.catalog()
            .iter()
            .find(|entry| entry.id == step_id)
            .ok_or_else(|| TreatmentError::UnknownStep(step_id.to_owned()))
    }
}

impl std::fmt::Display for TreatmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_wire())
    }
}

impl std::str::FromStr for TreatmentType {
    type Err = TreatmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TreatmentType::from_wire(s).ok_or_else(|| TreatmentError::UnknownTreatmentType(s.to_owned()))
    }
}

/// One phase of a treatment protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepCatalogEntry {
    /// Backend identifier for the step.
    pub id: &'static str,
    /// Short display label.
    pub label: &'static str,
    /// One-sentence description shown on the timeline.
    pub description: &'static str,
}

pub const IVF_STEPS: [StepCatalogEntry; 6] = [
    StepCatalogEntry {
        id: "step0_pre_cycle_prep",
        label: "Pre-cycle preparation",
        description: "Baseline bloodwork, ultrasound and medication briefing before the cycle starts.",
    },
    StepCatalogEntry {
        id: "step1_stimulation",
        label: "Ovarian stimulation",
        description: "Daily gonadotropin injections with monitoring scans every two to three days.",
    },
    StepCatalogEntry {
        id: "step4_opu",
        label: "Oocyte pickup (OPU)",
        description: "Egg retrieval under sedation, roughly 36 hours after the trigger injection.",
    },
    StepCatalogEntry {
        id: "step5_fertilization_culture",
        label: "Fertilization and culture",
        description: "Insemination or ICSI followed by three to five days of embryo culture.",
    },
    StepCatalogEntry {
        id: "step6_embryo_transfer",
        label: "Embryo transfer",
        description: "Transfer of the selected embryo; remaining embryos may be cryopreserved.",
    },
    StepCatalogEntry {
        id: "step7_pregnancy_test",
        label: "Pregnancy test",
        description: "Serum beta-hCG test about two weeks after transfer.",
    },
];

pub const IUI_STEPS: [StepCatalogEntry; 4] = [
    StepCatalogEntry {
        id: "step0_pre_cycle_prep",
        label: "Pre-cycle preparation",
        description: "Baseline bloodwork, ultrasound and medication briefing before the cycle starts.",
    },
    StepCatalogEntry {
        id: "step1_stimulation",
        label: "Ovarian stimulation",
        description: "Oral or injectable stimulation with follicle tracking scans.",
    },
    StepCatalogEntry {
        id: "step2_insemination",
        label: "Insemination",
        description: "Washed sperm placed into the uterus at the time of ovulation.",
    },
    StepCatalogEntry {
        id: "step3_pregnancy_test",
        label: "Pregnancy test",
        description: "Serum beta-hCG test about two weeks after insemination.",
    },
];
