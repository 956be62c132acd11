//! Wire models for the clinic backend's entities.
//!
//! These structs mirror the backend's JSON shapes. The backend is not owned
//! by this client, so decoding is tolerant: optional fields default, unknown
//! fields are ignored, and status enums carry an `Other` variant so a new
//! backend value decodes instead of failing. Domain logic lives in
//! `ferticare-core`; these types only bridge to it.

pub mod agreement;
pub mod appointment;
pub mod billing;
pub mod orders;
pub mod patient;
pub mod records;
pub mod treatment;

pub use agreement::{Agreement, SignAgreementRequest};
pub use appointment::{
    Appointment, AppointmentStatus, CancelAppointmentRequest, CreateAppointmentRequest,
};
pub use billing::{
    CreateTransactionRequest, Transaction, TransactionFilter, TransactionStatus, TransactionType,
};
pub use orders::{CreateServiceRequestRequest, Medicine, ServiceItem, ServiceRequest};
pub use patient::Patient;
pub use records::{
    CreateMedicalRecordRequest, CreatePrescriptionRequest, MedicalRecord, Prescription,
    PrescriptionItemRequest,
};
pub use treatment::{
    CreateTreatmentPlanRequest, CycleStatus, PlannedPhaseRequest, Treatment, TreatmentCycle,
};
