//! Step resolution for a treatment cycle.
//!
//! Several screens need to agree on which catalogue phase is current and
//! which are already done, from up to three sources of truth: a freshly
//! fetched numeric step index, the cycle's stored current-step field, and the
//! cycle's stored completed-step ids. This module is the single precedence
//! function that replaces per-screen fallback chains.

use crate::catalog::TreatmentType;

/// The reconciled step state of a treatment cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedSteps {
    /// The catalogue id of the phase the cycle is currently in, if any.
    pub current_step: Option<&'static str>,
    /// Completed catalogue ids, in catalogue order.
    pub completed_steps: Vec<&'static str>,
}

impl ResolvedSteps {
    /// Whether the given step id resolved as completed.
    pub fn is_completed(&self, step_id: &str) -> bool {
        self.completed_steps.iter().any(|id| *id == step_id)
    }
}

/// Reconcile a cycle's step state against its protocol catalogue.
///
/// Precedence for the current step, highest first:
///
/// 1. `live_index` — a numeric index from the backend's current-step
///    endpoint, mapped to a catalogue id by position. An out-of-range index
///    is treated as absent.
/// 2. `stored_current` — the cycle's own current-step field, when it names a
///    catalogue id. An unknown id is treated as absent.
/// 3. No current step.
///
/// When a current step resolves, every catalogue entry positioned before it
/// is implicitly completed, unioned with the stored completed ids. Stored ids
/// that are not in the catalogue are dropped. Absence of data yields a
/// neutral result; this function does not fail.
pub fn resolve_steps(
    treatment: TreatmentType,
    stored_current: Option<&str>,
    stored_completed: &[String],
    live_index: Option<u32>,
) -> ResolvedSteps {
    let catalog = treatment.catalog();

    let live_position = live_index
        .map(|index| index as usize)
        .filter(|index| *index < catalog.len());

    let current_position = live_position.or_else(|| {
        stored_current.and_then(|step_id| {
            let position = treatment.step_position(step_id);
            if position.is_none() {
                tracing::warn!("cycle names unknown step id {step_id} for {treatment}");
            }
            position
        })
    });

    let current_step = current_position.map(|position| catalog[position].id);

    let completed_steps = catalog
        .iter()
        .enumerate()
        .filter(|(position, entry)| {
            let before_current = current_position.is_some_and(|current| *position < current);
            before_current || stored_completed.iter().any(|id| id == entry.id)
        })
        .map(|(_, entry)| entry.id)
        .collect();

    ResolvedSteps {
        current_step,
        completed_steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_current_marks_prior_catalogue_entries_completed() {
        let resolved = resolve_steps(TreatmentType::Ivf, Some("step4_opu"), &[], None);

        assert_eq!(resolved.current_step, Some("step4_opu"));
        assert_eq!(
            resolved.completed_steps,
            vec!["step0_pre_cycle_prep", "step1_stimulation"]
        );
        assert!(!resolved.is_completed("step5_fertilization_culture"));
    }

    #[test]
    fn live_index_takes_precedence_over_stored_current() {
        let resolved = resolve_steps(TreatmentType::Ivf, Some("step1_stimulation"), &[], Some(3));

        assert_eq!(resolved.current_step, Some("step5_fertilization_culture"));
        assert_eq!(
            resolved.completed_steps,
            vec!["step0_pre_cycle_prep", "step1_stimulation", "step4_opu"]
        );
    }

    #[test]
    fn out_of_range_live_index_falls_back_to_stored_current() {
        let resolved = resolve_steps(TreatmentType::Iui, Some("step2_insemination"), &[], Some(9));

        assert_eq!(resolved.current_step, Some("step2_insemination"));
        assert_eq!(
            resolved.completed_steps,
            vec!["step0_pre_cycle_prep", "step1_stimulation"]
        );
    }

    #[test]
    fn unknown_stored_current_falls_back_to_completed_only() {
        let completed = vec!["step1_stimulation".to_owned()];
        let resolved = resolve_steps(TreatmentType::Iui, Some("step4_opu"), &completed, None);

        assert_eq!(resolved.current_step, None);
        assert_eq!(resolved.completed_steps, vec!["step1_stimulation"]);
    }

    #[test]
    fn output_completed_is_superset_of_stored_completed_in_catalogue() {
        let stored = vec![
            "step5_fertilization_culture".to_owned(),
            "not_a_real_step".to_owned(),
        ];
        let resolved = resolve_steps(TreatmentType::Ivf, Some("step1_stimulation"), &stored, None);

        // Stored ids in the catalogue survive, even ahead of the current step;
        // ids outside the catalogue are dropped.
        assert_eq!(
            resolved.completed_steps,
            vec!["step0_pre_cycle_prep", "step5_fertilization_culture"]
        );
        assert_eq!(resolved.current_step, Some("step1_stimulation"));
    }

    #[test]
    fn no_data_yields_neutral_state() {
        let resolved = resolve_steps(TreatmentType::Ivf, None, &[], None);
        assert_eq!(resolved.current_step, None);
        assert!(resolved.completed_steps.is_empty());
    }

    #[test]
    fn completed_steps_come_out_in_catalogue_order() {
        let stored = vec!["step4_opu".to_owned(), "step0_pre_cycle_prep".to_owned()];
        let resolved = resolve_steps(TreatmentType::Ivf, None, &stored, None);
        assert_eq!(resolved.completed_steps, vec!["step0_pre_cycle_prep", "step4_opu"]);
    }
}
