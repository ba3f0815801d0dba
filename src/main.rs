use anyhow::Context;
use clap::Parser;
use log::info;
use std::path::PathBuf;
use thyroid_pathway::{ClinicalReport, Pathway, PathwayConfig, PatientData, load_patient};

#[derive(Parser)]
#[command(name = "thyroid-pathway")]
#[command(about = "Evaluate a thyroid cancer patient record against the clinical pathway")]
struct Cli {
    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,
    /// Reject records with clinical contradictions, not just structural errors
    #[arg(long)]
    strict: bool,
    /// Skip record validation entirely (overrides --strict)
    #[arg(long)]
    no_validate: bool,
    /// Patient record in JSON; the default record is evaluated when omitted
    patient: Option<PathBuf>,
}

impl Cli {
    fn config(&self) -> PathwayConfig {
        let config = PathwayConfig::default();
        if self.no_validate {
            config.without_validation()
        } else if self.strict {
            config.strict()
        } else {
            config
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let patient = match &cli.patient {
        Some(path) => {
            info!("Loading patient record from: {}", path.display());
            load_patient(path)
                .with_context(|| format!("Failed to load patient record {}", path.display()))?
        }
        None => {
            info!("No patient record given, evaluating the default record");
            PatientData::default()
        }
    };

    let pathway = Pathway::with_patient(cli.config(), patient)
        .context("Patient record rejected by validation")?;
    let report: ClinicalReport = pathway.report();

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{report}");
    }

    Ok(())
}
