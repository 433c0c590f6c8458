//! Core types shared across the Terrella applet.
//!
//! This module defines the fundamental data structures used throughout the
//! forward-modelling pipeline: survey parameters, anomaly maps, profiles,
//! and the half-width annotation.

use serde::{Deserialize, Serialize};

/// Which scalar component of the magnetic field is mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldComponent {
    /// Total field: projection onto the inducing (source) direction.
    Bt,
    /// Northing component.
    Bx,
    /// Easting component.
    By,
    /// Vertical component.
    Bz,
    /// Vertical gradient: finite difference of the total field between
    /// the survey height and one metre above it.
    Bg,
}

impl FieldComponent {
    /// Short label used in plots and CLI output.
    pub fn label(&self) -> &'static str {
        match self {
            FieldComponent::Bt => "Bt",
            FieldComponent::Bx => "Bx",
            FieldComponent::By => "By",
            FieldComponent::Bz => "Bz",
            FieldComponent::Bg => "Bg",
        }
    }
}

/// The idealised source model for the buried target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceModel {
    /// Point magnetic dipole in a whole space.
    Dipole,
    /// Single magnetic pole in a whole space.
    Monopole,
}

/// Direction of the survey line drawn through the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileDirection {
    /// Along the northing axis at zero easting.
    North,
    /// Along the easting axis at zero northing.
    East,
}

/// Parameters defining a single forward-model run.
///
/// Angles are in degrees, lengths in metres. The defaults match the
/// applet's initial widget state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyParams {
    /// Mapped field component.
    pub component: FieldComponent,
    /// Source model for the buried target.
    pub source: SourceModel,
    /// Inclination of the magnetisation (degrees, [-90, 90], positive down).
    pub inclination: f64,
    /// Declination of the magnetisation (degrees, [0, 180]).
    pub declination: f64,
    /// Side length of the square survey area (m).
    pub length: f64,
    /// Station spacing along both axes (m).
    pub spacing: f64,
    /// Source moment (A·m² for a dipole).
    pub moment: f64,
    /// Depth of the source below the origin (m).
    pub depth: f64,
    /// Direction of the extracted profile.
    pub profile: ProfileDirection,
}

impl Default for SurveyParams {
    fn default() -> Self {
        Self {
            component: FieldComponent::Bt,
            source: SourceModel::Dipole,
            inclination: 0.0,
            declination: 0.0,
            length: 72.0,
            spacing: 2.0,
            moment: 30.0,
            depth: 10.0,
            profile: ProfileDirection::North,
        }
    }
}

/// Scalar anomaly map over the survey grid (nT).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldMap {
    /// Anomaly values, one per cell, x varying fastest (index = iy·nx + ix).
    pub values: Vec<f64>,
    /// Number of cells along x.
    pub nx: usize,
    /// Number of cells along y.
    pub ny: usize,
    /// Spatial extent: [x_min, x_max, y_min, y_max] in m.
    pub extent: [f64; 4],
}

impl FieldMap {
    /// Minimum and maximum anomaly values, used for colour scaling.
    pub fn value_range(&self) -> (f64, f64) {
        let min = self.values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = self
            .values
            .iter()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max);
        (min, max)
    }
}

/// Anomaly profile along the survey line through the origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileData {
    /// Sample positions along the swept axis (m), ascending.
    pub positions: Vec<f64>,
    /// Anomaly values at each sample (nT).
    pub values: Vec<f64>,
    /// Ground track of the line as (x, y) pairs, for the map overlay.
    pub track: Vec<[f64; 2]>,
}

/// The half-width annotation extracted from a profile.
///
/// The two points bracket half of the signed peak amplitude and lie more
/// than one station spacing apart; their separation is a classic
/// rule-of-thumb depth estimator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HalfWidth {
    /// Positions of the two half-amplitude points (m).
    pub positions: [f64; 2],
    /// Interpolated anomaly values at those positions (nT).
    pub values: [f64; 2],
    /// Horizontal separation |positions[1] − positions[0]| (m).
    pub width: f64,
}

/// Immutable result record from a single forward-model run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyResult {
    /// Parameters the run was computed with.
    pub params: SurveyParams,
    /// Scalar anomaly map (nT).
    pub map: FieldMap,
    /// Profile through the origin.
    pub profile: ProfileData,
}
