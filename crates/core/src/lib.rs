//! # FertiCare Core
//!
//! Domain and view-model logic for the FertiCare clinic console.
//!
//! This crate contains pure treatment-protocol operations:
//! - Step catalogues for the supported treatment protocols (IVF, IUI)
//! - Step resolution from a cycle's recorded and live state
//! - Timeline projection, status badges, and plan phase generation
//! - Agreement signature reconciliation
//!
//! **No API concerns**: HTTP calls, response envelopes, and caching belong in
//! `api-client`; terminal output belongs in `ferticare-cli`.

pub mod agreement;
pub mod badge;
pub mod catalog;
pub mod config;
pub mod display;
pub mod error;
pub mod invoice;
pub mod phases;
pub mod steps;
pub mod timeline;

pub use catalog::{StepCatalogEntry, TreatmentType};
pub use config::CoreConfig;
pub use error::{TreatmentError, TreatmentResult};
pub use steps::ResolvedSteps;
