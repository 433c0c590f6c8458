//! TOML job-file deserialisation.
//!
//! A job file holds one `[survey]` table and an optional `[output]` table:
//!
//! ```toml
//! [survey]
//! component = "Bz"
//! source = "Dipole"
//! inclination = 90.0
//! depth = 10.0
//!
//! [output]
//! directory = "./output"
//! half_width = true
//! ```

use serde::Deserialize;

use terrella_core::types::{FieldComponent, ProfileDirection, SourceModel, SurveyParams};

/// Top-level job configuration.
#[derive(Debug, Deserialize)]
pub struct JobConfig {
    pub survey: SurveyConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Survey parameters from TOML. Every field defaults to the applet's
/// initial widget value, so a job file only names what it changes.
#[derive(Debug, Deserialize)]
pub struct SurveyConfig {
    #[serde(default = "default_component")]
    pub component: FieldComponent,
    #[serde(default = "default_source")]
    pub source: SourceModel,
    #[serde(default)]
    pub inclination: f64,
    #[serde(default)]
    pub declination: f64,
    #[serde(default = "default_length")]
    pub length: f64,
    #[serde(default = "default_spacing")]
    pub spacing: f64,
    #[serde(default = "default_moment")]
    pub moment: f64,
    #[serde(default = "default_depth")]
    pub depth: f64,
    #[serde(default = "default_profile")]
    pub profile: ProfileDirection,
}

fn default_component() -> FieldComponent {
    FieldComponent::Bt
}
fn default_source() -> SourceModel {
    SourceModel::Dipole
}
fn default_length() -> f64 {
    72.0
}
fn default_spacing() -> f64 {
    2.0
}
fn default_moment() -> f64 {
    30.0
}
fn default_depth() -> f64 {
    10.0
}
fn default_profile() -> ProfileDirection {
    ProfileDirection::North
}

impl SurveyConfig {
    /// Convert into the core parameter record.
    pub fn to_params(&self) -> SurveyParams {
        SurveyParams {
            component: self.component,
            source: self.source,
            inclination: self.inclination,
            declination: self.declination,
            length: self.length,
            spacing: self.spacing,
            moment: self.moment,
            depth: self.depth,
            profile: self.profile,
        }
    }
}

/// Output configuration.
#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Output directory (default: "./output").
    #[serde(default = "default_output_dir")]
    pub directory: String,
    /// Whether to save the anomaly map as CSV (default: true).
    #[serde(default = "default_true")]
    pub save_map: bool,
    /// Whether to save the profile as CSV (default: true).
    #[serde(default = "default_true")]
    pub save_profile: bool,
    /// Whether to also save the full result as JSON (default: false).
    #[serde(default)]
    pub save_json: bool,
    /// Whether to compute and report the profile half-width (default: false).
    #[serde(default)]
    pub half_width: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
            save_map: true,
            save_profile: true,
            save_json: false,
            half_width: false,
        }
    }
}

fn default_output_dir() -> String {
    "./output".into()
}
fn default_true() -> bool {
    true
}

/// Load and parse a TOML job file.
pub fn load_config(path: &std::path::Path) -> anyhow::Result<JobConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: JobConfig = toml::from_str(&content)?;
    Ok(config)
}
