#[derive(Debug, thiserror::Error)]
pub enum TreatmentError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("unknown treatment type: {0}")]
    UnknownTreatmentType(String),
    #[error("unknown step id: {0}")]
    UnknownStep(String),
}

pub type TreatmentResult<T> = std::result::Result<T, TreatmentError>;
