//! Domain models for the thyroid cancer pathway
//!
//! This module contains the patient record consumed by every rule, the closed
//! value sets its fields draw from, and the classification outputs that
//! rules pass to one another.

pub(crate) mod macros;

pub mod classification;
pub mod patient;
pub mod types;

// Re-export commonly used types
pub use classification::{ResponseType, RiskCategory};
pub use patient::{MolecularMarkers, PatientData};
pub use types::{
    Ete, Histology, ImagingResult, LnDissection, MStage, MarginStatus, NStage, RaiAvidity,
    RaiIndication, RaiScan, Sex, SurgeryType, TgAbStatus, VascularInvasion,
};
