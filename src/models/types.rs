//! Common domain type definitions
//!
//! This module contains the closed value sets used by the patient record.
//! Canonical labels follow the wording used on the pathway forms; short
//! names are accepted as aliases.

use crate::models::macros::closed_value_set;

closed_value_set! {
    /// Sex of the patient
    pub enum Sex as "sex" {
        /// Male sex
        Male => "Male" | "M",
        /// Female sex
        Female => "Female" | "F",
    }
}

closed_value_set! {
    /// Tumor histology
    pub enum Histology as "histology" {
        /// Papillary thyroid carcinoma
        Papillary => "Papillary",
        /// Follicular thyroid carcinoma
        Follicular => "Follicular",
        /// Oncocytic (Hürthle cell) carcinoma
        Oncocytic => "Oncocytic (Hürthle)" | "Oncocytic" | "Hurthle",
        /// Aggressive variants (tall cell, columnar cell, hobnail, ...)
        Aggressive => "Aggressive Variant (Tall Cell, Columnar, etc.)" | "Aggressive",
    }
}

closed_value_set! {
    /// Extent of vascular invasion
    pub enum VascularInvasion as "vascularInvasion" {
        /// No vascular invasion
        None => "None",
        /// Fewer than four vessels involved
        Focal => "Focal (<4 vessels)" | "Focal",
        /// Four or more vessels involved
        Extensive => "Extensive (≥4 vessels)" | "Extensive",
    }
}

closed_value_set! {
    /// Extrathyroidal extension
    pub enum Ete as "ete" {
        /// Confined to the thyroid
        None => "None",
        /// Microscopic extension only
        Microscopic => "Microscopic",
        /// Gross extension into strap muscles or beyond (T3b/T4)
        Gross => "Gross (T3b/T4)" | "Gross",
    }
}

closed_value_set! {
    /// Regional lymph node stage
    pub enum NStage as "nStage" {
        /// No regional node metastasis
        N0 => "N0",
        /// Central compartment (level VI/VII) metastasis
        N1a => "N1a",
        /// Lateral compartment or retropharyngeal metastasis
        N1b => "N1b",
        /// Nodes not assessed
        Nx => "Nx",
    }
}

impl NStage {
    /// Whether regional nodal disease has been established
    #[must_use]
    pub const fn is_node_positive(self) -> bool {
        matches!(self, Self::N1a | Self::N1b)
    }
}

closed_value_set! {
    /// Distant metastasis stage
    pub enum MStage as "mStage" {
        /// No distant metastasis
        M0 => "M0",
        /// Distant metastasis present
        M1 => "M1",
    }
}

closed_value_set! {
    /// Radioiodine avidity of known metastatic disease
    pub enum RaiAvidity as "raiAvidity" {
        /// Avidity established
        Known => "Known",
        /// Avidity not yet assessed
        Unknown => "Unknown",
        /// Non-avid disease
        Negative => "Negative",
    }
}

closed_value_set! {
    /// Thyroid surgery performed
    pub enum SurgeryType as "surgery" {
        /// Hemithyroidectomy
        Lobectomy => "Lobectomy",
        /// Total thyroidectomy
        Total => "Total Thyroidectomy" | "Total",
        /// Completion thyroidectomy after a prior lobectomy
        Completion => "Completion Thyroidectomy" | "Completion",
    }
}

closed_value_set! {
    /// Lymph node dissection performed
    pub enum LnDissection as "lnDissection" {
        None => "None",
        Central => "Central",
        Lateral => "Lateral",
        Both => "Both",
    }
}

closed_value_set! {
    /// Resection margin status
    pub enum MarginStatus as "margins" {
        /// Negative margins
        R0 => "R0 (Negative)" | "R0",
        /// Microscopically positive margins
        R1 => "R1 (Microscopic Positive)" | "R1",
        /// Gross residual disease
        R2 => "R2 (Gross Residual)" | "R2",
    }
}

closed_value_set! {
    /// Thyroglobulin antibody status and trend
    pub enum TgAbStatus as "tgAb" {
        Negative => "Negative",
        PositiveStable => "Positive-Stable",
        PositiveRising => "Positive-Rising",
        PositiveFalling => "Positive-Falling",
    }
}

closed_value_set! {
    /// Neck imaging result at follow-up
    pub enum ImagingResult as "imaging" {
        /// No evidence of disease
        Negative => "Negative",
        /// Nonspecific findings
        Indeterminate => "Indeterminate",
        /// Structural evidence of disease
        Structural => "Structural",
    }
}

closed_value_set! {
    /// Diagnostic radioiodine scan result
    pub enum RaiScan as "raiScan" {
        NotDone => "Not Done" | "NotDone",
        Negative => "Negative",
        Positive => "Positive",
    }
}

closed_value_set! {
    /// Indication for radioiodine therapy already given
    pub enum RaiIndication as "raiIndication" {
        None => "None",
        /// Remnant ablation
        Ablation => "Ablation",
        /// Adjuvant therapy for suspected microscopic disease
        Adjuvant => "Adjuvant",
        /// Treatment of known persistent disease
        Therapeutic => "Therapeutic",
    }
}
