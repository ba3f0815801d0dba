//! Patient record model
//!
//! `PatientData` is the single input of every rule in the engine. It is an
//! immutable value: edits consume a record and return a new one, matching the
//! whole-record replacement performed by the pathway.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::types::{
    Ete, Histology, ImagingResult, LnDissection, MStage, MarginStatus, NStage, RaiAvidity,
    RaiIndication, RaiScan, Sex, SurgeryType, TgAbStatus, VascularInvasion,
};

/// Molecular markers associated with aggressive behavior
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MolecularMarkers {
    /// BRAF V600E mutation detected
    pub braf: bool,
    /// TERT promoter mutation detected
    pub tert: bool,
}

/// Structured patient and tumor data for one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PatientData {
    // Demographics
    /// Age in years
    pub age: f64,
    pub sex: Sex,

    // Tumor pathology
    pub histology: Histology,
    /// Largest tumor dimension in centimetres
    pub tumor_size_cm: f64,
    pub multifocality: bool,
    pub capsular_invasion: bool,
    pub vascular_invasion: VascularInvasion,
    pub aggressive_subtype: bool,
    pub ete: Ete,

    // Lymph node status
    pub n_stage: NStage,
    pub involved_nodes: u32,
    /// Largest involved node in centimetres
    pub largest_node_cm: f64,
    pub extranodal_extension: bool,

    // Distant metastasis
    pub m_stage: MStage,
    pub metastasis_site: BTreeSet<String>,
    pub rai_avidity: RaiAvidity,

    // Surgery details
    pub surgery: SurgeryType,
    pub ln_dissection: LnDissection,
    pub margins: MarginStatus,

    // Post-operative biochemistry
    /// Thyroglobulin on TSH suppression, ng/mL
    pub suppressed_tg: f64,
    /// Stimulated thyroglobulin, ng/mL
    pub stimulated_tg: Option<f64>,
    pub tg_ab: TgAbStatus,
    /// TSH in mIU/L
    pub tsh: f64,

    // Imaging
    pub imaging: ImagingResult,
    pub rai_scan: RaiScan,

    // Radioiodine therapy
    pub rai_done: bool,
    pub rai_indication: RaiIndication,
    pub rai_dose_mci: f64,

    // Molecular
    pub molecular_markers: MolecularMarkers,
}

impl Default for PatientData {
    /// The record a new pathway starts from
    fn default() -> Self {
        Self {
            age: 45.0,
            sex: Sex::Female,
            histology: Histology::Papillary,
            tumor_size_cm: 1.5,
            multifocality: false,
            capsular_invasion: false,
            vascular_invasion: VascularInvasion::None,
            aggressive_subtype: false,
            ete: Ete::None,
            n_stage: NStage::N0,
            involved_nodes: 0,
            largest_node_cm: 0.0,
            extranodal_extension: false,
            m_stage: MStage::M0,
            metastasis_site: BTreeSet::new(),
            rai_avidity: RaiAvidity::Unknown,
            surgery: SurgeryType::Total,
            ln_dissection: LnDissection::None,
            margins: MarginStatus::R0,
            suppressed_tg: 0.1,
            stimulated_tg: None,
            tg_ab: TgAbStatus::Negative,
            tsh: 1.5,
            imaging: ImagingResult::Negative,
            rai_scan: RaiScan::NotDone,
            rai_done: false,
            rai_indication: RaiIndication::None,
            rai_dose_mci: 0.0,
            molecular_markers: MolecularMarkers::default(),
        }
    }
}

impl PatientData {
    /// Create a record with the pathway start defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the patient's age in years
    #[must_use]
    pub fn with_age(mut self, age: f64) -> Self {
        self.age = age;
        self
    }

    #[must_use]
    pub fn with_sex(mut self, sex: Sex) -> Self {
        self.sex = sex;
        self
    }

    #[must_use]
    pub fn with_histology(mut self, histology: Histology) -> Self {
        self.histology = histology;
        self
    }

    /// Set the largest tumor dimension in centimetres
    #[must_use]
    pub fn with_tumor_size(mut self, tumor_size_cm: f64) -> Self {
        self.tumor_size_cm = tumor_size_cm;
        self
    }

    #[must_use]
    pub fn with_multifocality(mut self, multifocality: bool) -> Self {
        self.multifocality = multifocality;
        self
    }

    #[must_use]
    pub fn with_capsular_invasion(mut self, capsular_invasion: bool) -> Self {
        self.capsular_invasion = capsular_invasion;
        self
    }

    #[must_use]
    pub fn with_vascular_invasion(mut self, vascular_invasion: VascularInvasion) -> Self {
        self.vascular_invasion = vascular_invasion;
        self
    }

    #[must_use]
    pub fn with_aggressive_subtype(mut self, aggressive_subtype: bool) -> Self {
        self.aggressive_subtype = aggressive_subtype;
        self
    }

    #[must_use]
    pub fn with_ete(mut self, ete: Ete) -> Self {
        self.ete = ete;
        self
    }

    #[must_use]
    pub fn with_n_stage(mut self, n_stage: NStage) -> Self {
        self.n_stage = n_stage;
        self
    }

    /// Set the nodal burden: involved node count and largest node size
    #[must_use]
    pub fn with_nodes(mut self, involved_nodes: u32, largest_node_cm: f64) -> Self {
        self.involved_nodes = involved_nodes;
        self.largest_node_cm = largest_node_cm;
        self
    }

    #[must_use]
    pub fn with_extranodal_extension(mut self, extranodal_extension: bool) -> Self {
        self.extranodal_extension = extranodal_extension;
        self
    }

    #[must_use]
    pub fn with_m_stage(mut self, m_stage: MStage) -> Self {
        self.m_stage = m_stage;
        self
    }

    /// Add a distant metastasis site
    #[must_use]
    pub fn with_metastasis_site(mut self, site: impl Into<String>) -> Self {
        self.metastasis_site.insert(site.into());
        self
    }

    #[must_use]
    pub fn with_rai_avidity(mut self, rai_avidity: RaiAvidity) -> Self {
        self.rai_avidity = rai_avidity;
        self
    }

    #[must_use]
    pub fn with_surgery(mut self, surgery: SurgeryType) -> Self {
        self.surgery = surgery;
        self
    }

    #[must_use]
    pub fn with_ln_dissection(mut self, ln_dissection: LnDissection) -> Self {
        self.ln_dissection = ln_dissection;
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: MarginStatus) -> Self {
        self.margins = margins;
        self
    }

    /// Set suppressed thyroglobulin in ng/mL
    #[must_use]
    pub fn with_suppressed_tg(mut self, suppressed_tg: f64) -> Self {
        self.suppressed_tg = suppressed_tg;
        self
    }

    #[must_use]
    pub fn with_stimulated_tg(mut self, stimulated_tg: Option<f64>) -> Self {
        self.stimulated_tg = stimulated_tg;
        self
    }

    #[must_use]
    pub fn with_tg_ab(mut self, tg_ab: TgAbStatus) -> Self {
        self.tg_ab = tg_ab;
        self
    }

    #[must_use]
    pub fn with_tsh(mut self, tsh: f64) -> Self {
        self.tsh = tsh;
        self
    }

    #[must_use]
    pub fn with_imaging(mut self, imaging: ImagingResult) -> Self {
        self.imaging = imaging;
        self
    }

    #[must_use]
    pub fn with_rai_scan(mut self, rai_scan: RaiScan) -> Self {
        self.rai_scan = rai_scan;
        self
    }

    /// Record a completed radioiodine treatment
    #[must_use]
    pub fn with_rai_therapy(mut self, indication: RaiIndication, dose_mci: f64) -> Self {
        self.rai_done = true;
        self.rai_indication = indication;
        self.rai_dose_mci = dose_mci;
        self
    }

    #[must_use]
    pub fn with_braf(mut self, braf: bool) -> Self {
        self.molecular_markers.braf = braf;
        self
    }

    #[must_use]
    pub fn with_tert(mut self, tert: bool) -> Self {
        self.molecular_markers.tert = tert;
        self
    }

    /// Whether distant metastasis is present
    #[must_use]
    pub fn is_metastatic(&self) -> bool {
        self.m_stage == MStage::M1
    }
}
