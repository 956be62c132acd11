//! Treatment plan phase generation.
//!
//! Expands a protocol's duration template into a dated phase sequence:
//! each phase's end = start + fixed duration, and the next phase starts the
//! day after the prior end. This is deterministic template expansion, not
//! scheduling — there is no resource contention and no backtracking.

use crate::catalog::TreatmentType;
use chrono::{Days, NaiveDate};
use serde::Serialize;

/// A suggested phase of a treatment plan, with computed dates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlannedPhase {
    /// Catalogue step id this phase corresponds to.
    pub step_id: &'static str,
    pub label: &'static str,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration_days: u64,
}

/// Fixed per-step durations, in days, aligned with the protocol catalogue.
fn duration_template(treatment: TreatmentType) -> &'static [u64] {
    match treatment {
        // prep, stimulation, OPU, fertilization/culture, transfer, test
        TreatmentType::Ivf => &[14, 10, 1, 5, 1, 14],
        // prep, stimulation, insemination, test
        TreatmentType::Iui => &[14, 10, 1, 14],
    }
}

/// Generate the suggested phase sequence for a treatment starting on
/// `start_date`.
///
/// The output is structurally deterministic: the same `(treatment,
/// start_date)` always yields the same count, order, dates and durations.
pub fn generate_phases(treatment: TreatmentType, start_date: NaiveDate) -> Vec<PlannedPhase> {
    let catalog = treatment.catalog();
    let durations = duration_template(treatment);
    debug_assert_eq!(catalog.len(), durations.len());

    let mut cursor = start_date;
    let mut phases = Vec::with_capacity(catalog.len());

    for (entry, duration_days) in catalog.iter().zip(durations.iter().copied()) {
        let end_date = cursor + Days::new(duration_days);
        phases.push(PlannedPhase {
            step_id: entry.id,
            label: entry.label,
            start_date: cursor,
            end_date,
            duration_days,
        });
        cursor = end_date + Days::new(1);
    }

    phases
}

#[cfg(test)]
mod tests {
    use super::*;

    fn march_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).expect("date should be valid")
    }

    #[test]
    fn generates_one_phase_per_catalogue_entry() {
        let phases = generate_phases(TreatmentType::Ivf, march_first());
        assert_eq!(phases.len(), TreatmentType::Ivf.catalog().len());

        let ids: Vec<&str> = phases.iter().map(|phase| phase.step_id).collect();
        assert_eq!(
            ids,
            vec![
                "step0_pre_cycle_prep",
                "step1_stimulation",
                "step4_opu",
                "step5_fertilization_culture",
                "step6_embryo_transfer",
                "step7_pregnancy_test",
            ]
        );
    }

    #[test]
    fn phases_chain_with_one_day_gaps() {
        let phases = generate_phases(TreatmentType::Iui, march_first());

        assert_eq!(phases[0].start_date, march_first());
        for pair in phases.windows(2) {
            assert_eq!(
                pair[1].start_date,
                pair[0].end_date + Days::new(1),
                "phase {} should start the day after {} ends",
                pair[1].step_id,
                pair[0].step_id
            );
        }
        for phase in &phases {
            assert_eq!(phase.end_date, phase.start_date + Days::new(phase.duration_days));
        }
    }

    #[test]
    fn generation_is_structurally_idempotent() {
        let first = generate_phases(TreatmentType::Ivf, march_first());
        let second = generate_phases(TreatmentType::Ivf, march_first());
        assert_eq!(first, second);
    }
}
