//! The magnetic forward model.
//!
//! [`simulate`] evaluates the closed-form source field at every station of
//! the survey grid, projects it onto the receiver direction for the chosen
//! component, and extracts the profile through the origin. The result is a
//! plain immutable record; nothing is mutated across runs.

use thiserror::Error;

use crate::grid::SurveyGrid;
use crate::source::{direction_cosines, MagneticSource};
use crate::types::{
    FieldComponent, FieldMap, ProfileData, ProfileDirection, SurveyParams, SurveyResult,
};

/// Height of the survey plane above the origin (m).
pub const OBSERVATION_HEIGHT: f64 = 1.0;

/// Tesla to nanotesla.
pub const TESLA_TO_NANOTESLA: f64 = 1e9;

/// Errors from the forward model and profile analysis.
#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("Invalid survey grid: length={length}, spacing={spacing} (need at least one cell)")]
    InvalidGrid { length: f64, spacing: f64 },

    #[error("Profile too narrow for a half-width: no second crossing further than {spacing} m from the first")]
    DegenerateProfile { spacing: f64 },
}

/// Receiver orientation for a component, given the source orientation.
///
/// Total-field and gradient components measure along the inducing
/// direction; the cartesian components measure along the fixed axes. The
/// mapping is total over [`FieldComponent`].
fn receiver_orientation(component: FieldComponent, source_orientation: [f64; 3]) -> [f64; 3] {
    match component {
        FieldComponent::Bt | FieldComponent::Bg => source_orientation,
        FieldComponent::Bx => direction_cosines(0.0, 0.0),
        FieldComponent::By => direction_cosines(0.0, 90.0),
        FieldComponent::Bz => direction_cosines(90.0, 0.0),
    }
}

/// Run the forward model for one set of survey parameters.
pub fn simulate(params: &SurveyParams) -> Result<SurveyResult, ForwardError> {
    let grid = SurveyGrid::new(params.length, params.spacing)?;
    log::debug!(
        "simulate: {} {:?} grid {}x{} dx={}",
        params.component.label(),
        params.source,
        grid.n(),
        grid.n(),
        grid.spacing()
    );

    let orientation = direction_cosines(params.inclination, params.declination);
    let source = MagneticSource {
        location: [0.0, 0.0, -params.depth],
        orientation,
        moment: params.moment,
        model: params.source,
    };

    let points = grid.points_at_height(OBSERVATION_HEIGHT);
    let mut b_vec = source.flux_density(&points);

    // The gradient component is a vertical finite difference between the
    // survey height and one metre above it.
    if params.component == FieldComponent::Bg {
        let points_up = grid.points_at_height(OBSERVATION_HEIGHT + 1.0);
        b_vec -= &source.flux_density(&points_up);
    }

    let rx = receiver_orientation(params.component, orientation);
    let values: Vec<f64> = b_vec
        .outer_iter()
        .map(|row| (row[0] * rx[0] + row[1] * rx[1] + row[2] * rx[2]) * TESLA_TO_NANOTESLA)
        .collect();

    let map = FieldMap {
        values,
        nx: grid.n(),
        ny: grid.n(),
        extent: grid.extent(),
    };
    let profile = extract_profile(&grid, &map, params.profile);

    Ok(SurveyResult {
        params: params.clone(),
        map,
        profile,
    })
}

/// Sample the anomaly map along the survey line through the origin.
///
/// The line runs through the cells nearest x = 0 (North) or y = 0 (East);
/// sample positions are the cell centers along the swept axis.
fn extract_profile(grid: &SurveyGrid, map: &FieldMap, direction: ProfileDirection) -> ProfileData {
    let centers = grid.cell_centers();

    let track: Vec<[f64; 2]> = centers
        .iter()
        .map(|&t| match direction {
            ProfileDirection::North => [0.0, t],
            ProfileDirection::East => [t, 0.0],
        })
        .collect();

    let values: Vec<f64> = track
        .iter()
        .map(|xy| map.values[grid.nearest_cell(xy[0], xy[1])])
        .collect();

    ProfileData {
        positions: centers.to_vec(),
        values,
        track,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SourceModel;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_receiver_orientation_total_mapping() {
        let o = direction_cosines(45.0, 30.0);
        for component in [
            FieldComponent::Bt,
            FieldComponent::Bx,
            FieldComponent::By,
            FieldComponent::Bz,
            FieldComponent::Bg,
        ] {
            let rx = receiver_orientation(component, o);
            let len = (rx[0] * rx[0] + rx[1] * rx[1] + rx[2] * rx[2]).sqrt();
            assert_abs_diff_eq!(len, 1.0, epsilon = 1e-12);
        }
        assert_eq!(receiver_orientation(FieldComponent::Bt, o), o);
        assert_eq!(receiver_orientation(FieldComponent::Bg, o), o);
    }

    #[test]
    fn test_profile_track_through_origin() {
        let params = SurveyParams {
            profile: ProfileDirection::East,
            ..Default::default()
        };
        let result = simulate(&params).unwrap();
        for xy in &result.profile.track {
            assert_abs_diff_eq!(xy[1], 0.0, epsilon = 1e-12);
        }
        assert_eq!(result.profile.positions.len(), result.map.nx);
    }

    #[test]
    fn test_monopole_map_all_one_sign_for_bz() {
        // A pole below the grid produces a single-signed vertical anomaly.
        let params = SurveyParams {
            component: FieldComponent::Bz,
            source: SourceModel::Monopole,
            ..Default::default()
        };
        let result = simulate(&params).unwrap();
        // Field points away from the pole; projection onto (0, 0, -1) is
        // negative everywhere above it.
        assert!(result.map.values.iter().all(|&v| v < 0.0));
    }

    #[test]
    fn test_invalid_params_rejected() {
        let params = SurveyParams {
            spacing: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            simulate(&params),
            Err(ForwardError::InvalidGrid { .. })
        ));
    }
}
