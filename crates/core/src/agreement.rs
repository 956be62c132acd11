//! Treatment agreement signature reconciliation.
//!
//! An agreement carries two independent signature flags, one per role, with a
//! derived both-signed terminal state. Cycle creation is gated on both flags
//! being set. Signing an already-signed role is a success no-op: concurrent
//! screens can race duplicate sign submissions and the second must not fail
//! or toggle the flag back.

use serde::{Deserialize, Serialize};

/// The party signing a treatment agreement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignerRole {
    Doctor,
    Patient,
}

impl std::fmt::Display for SignerRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignerRole::Doctor => write!(f, "doctor"),
            SignerRole::Patient => write!(f, "patient"),
        }
    }
}

impl std::str::FromStr for SignerRole {
    type Err = crate::TreatmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "doctor" => Ok(SignerRole::Doctor),
            "patient" => Ok(SignerRole::Patient),
            other => Err(crate::TreatmentError::InvalidInput(format!(
                "unknown signer role: {other}"
            ))),
        }
    }
}

/// Outcome of applying a sign request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignOutcome {
    /// The flag transitioned from unsigned to signed.
    Signed,
    /// The flag was already set; treated as success.
    AlreadySigned,
}

/// The signature state of one treatment agreement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AgreementSignatures {
    doctor_signed: bool,
    patient_signed: bool,
}

impl AgreementSignatures {
    pub fn new(doctor_signed: bool, patient_signed: bool) -> Self {
        Self {
            doctor_signed,
            patient_signed,
        }
    }

    pub fn is_signed(&self, role: SignerRole) -> bool {
        match role {
            SignerRole::Doctor => self.doctor_signed,
            SignerRole::Patient => self.patient_signed,
        }
    }

    /// Both parties have signed; the agreement no longer blocks cycle
    /// creation.
    pub fn is_fully_signed(&self) -> bool {
        self.doctor_signed && self.patient_signed
    }

    /// Apply a sign request for the given role. Idempotent.
    pub fn sign(&mut self, role: SignerRole) -> SignOutcome {
        let flag = match role {
            SignerRole::Doctor => &mut self.doctor_signed,
            SignerRole::Patient => &mut self.patient_signed,
        };

        if *flag {
            SignOutcome::AlreadySigned
        } else {
            *flag = true;
            SignOutcome::Signed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signing_both_roles_reaches_terminal_state() {
        let mut signatures = AgreementSignatures::default();
        assert!(!signatures.is_fully_signed());

        assert_eq!(signatures.sign(SignerRole::Doctor), SignOutcome::Signed);
        assert!(!signatures.is_fully_signed());

        assert_eq!(signatures.sign(SignerRole::Patient), SignOutcome::Signed);
        assert!(signatures.is_fully_signed());
    }

    #[test]
    fn double_sign_is_a_no_op_success() {
        let mut signatures = AgreementSignatures::default();
        assert_eq!(signatures.sign(SignerRole::Patient), SignOutcome::Signed);
        assert_eq!(
            signatures.sign(SignerRole::Patient),
            SignOutcome::AlreadySigned
        );
        assert!(signatures.is_signed(SignerRole::Patient));
        assert!(!signatures.is_signed(SignerRole::Doctor));
    }

    #[test]
    fn signer_role_parses_case_insensitively() {
        let role: SignerRole = " Doctor ".parse().expect("role should parse");
        assert_eq!(role, SignerRole::Doctor);
        assert!("nurse".parse::<SignerRole>().is_err());
    }
}
