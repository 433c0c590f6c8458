//! Integration tests: forward-model physics over the full pipeline.
//!
//! These exercise the public API end to end and check the physical
//! properties a magnetics instructor would sanity-check by eye: symmetry
//! of the vertical-dipole anomaly, consistency of the gradient component,
//! and the position of the peak above the source.

use approx::assert_abs_diff_eq;

use terrella_core::forward::{simulate, OBSERVATION_HEIGHT, TESLA_TO_NANOTESLA};
use terrella_core::grid::SurveyGrid;
use terrella_core::profile::half_width;
use terrella_core::source::{direction_cosines, MagneticSource};
use terrella_core::types::{FieldComponent, ProfileDirection, SourceModel, SurveyParams};

fn vertical_dipole_params(component: FieldComponent) -> SurveyParams {
    SurveyParams {
        component,
        source: SourceModel::Dipole,
        inclination: 90.0,
        declination: 0.0,
        length: 72.0,
        spacing: 2.0,
        moment: 30.0,
        depth: 10.0,
        profile: ProfileDirection::North,
    }
}

/// Bz of a vertically polarised dipole peaks at the station nearest the
/// origin and is positive there (field points up along the source axis).
#[test]
fn test_vertical_dipole_bz_peaks_above_source() {
    let result = simulate(&vertical_dipole_params(FieldComponent::Bz)).unwrap();
    let n = result.map.nx;

    let (peak_idx, &peak) = result
        .map
        .values
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .unwrap();
    assert!(peak > 0.0, "peak Bz should be positive, got {peak}");

    // The origin falls between cells; the peak must be within one spacing.
    let grid = SurveyGrid::new(72.0, 2.0).unwrap();
    let centers = grid.cell_centers();
    let (ix, iy) = (peak_idx % n, peak_idx / n);
    eprintln!(
        "peak {:.3} nT at ({:.1}, {:.1})",
        peak, centers[ix], centers[iy]
    );
    assert!(centers[ix].abs() <= 2.0);
    assert!(centers[iy].abs() <= 2.0);

    // And agree with the value at the station nearest the origin.
    let near_origin = result.map.values[grid.nearest_cell(0.0, 0.0)];
    assert_abs_diff_eq!(near_origin, peak, epsilon = 1e-9);
}

/// The vertical-dipole Bz map depends only on radial distance, so it is
/// invariant under transposition and axis flips of the (symmetric) grid.
#[test]
fn test_vertical_dipole_bz_radially_symmetric() {
    let result = simulate(&vertical_dipole_params(FieldComponent::Bz)).unwrap();
    let n = result.map.nx;
    let v = &result.map.values;

    for iy in 0..n {
        for ix in 0..n {
            let here = v[iy * n + ix];
            let transposed = v[ix * n + iy];
            let flipped_x = v[iy * n + (n - 1 - ix)];
            assert_abs_diff_eq!(here, transposed, epsilon = 1e-9);
            assert_abs_diff_eq!(here, flipped_x, epsilon = 1e-9);
        }
    }
}

/// Bg at every station equals Bt evaluated at the survey height minus Bt
/// one metre above it, with the same receiver projection and scaling.
#[test]
fn test_gradient_is_total_field_difference() {
    let params = SurveyParams {
        component: FieldComponent::Bg,
        inclination: 45.0,
        declination: 30.0,
        ..vertical_dipole_params(FieldComponent::Bg)
    };
    let result = simulate(&params).unwrap();

    let grid = SurveyGrid::new(params.length, params.spacing).unwrap();
    let orientation = direction_cosines(params.inclination, params.declination);
    let source = MagneticSource {
        location: [0.0, 0.0, -params.depth],
        orientation,
        moment: params.moment,
        model: params.source,
    };

    let lower = source.flux_density(&grid.points_at_height(OBSERVATION_HEIGHT));
    let upper = source.flux_density(&grid.points_at_height(OBSERVATION_HEIGHT + 1.0));

    for (i, &bg) in result.map.values.iter().enumerate() {
        let bt_low = (0..3).map(|a| lower[[i, a]] * orientation[a]).sum::<f64>();
        let bt_up = (0..3).map(|a| upper[[i, a]] * orientation[a]).sum::<f64>();
        let expected = (bt_low - bt_up) * TESLA_TO_NANOTESLA;
        assert_abs_diff_eq!(bg, expected, epsilon = 1e-9);
    }
}

/// The end-to-end scenario from the applet defaults: the half-width of the
/// vertical-dipole Bz profile grows with source depth.
#[test]
fn test_half_width_grows_with_depth() {
    let mut widths = Vec::new();
    for depth in [5.0, 10.0, 20.0] {
        let params = SurveyParams {
            depth,
            length: 150.0,
            ..vertical_dipole_params(FieldComponent::Bz)
        };
        let result = simulate(&params).unwrap();
        let hw = half_width(&result.profile, params.spacing).unwrap();
        eprintln!("depth {:>5.1} m -> half-width {:.2} m", depth, hw.width);
        widths.push(hw.width);
    }
    assert!(widths[0] < widths[1] && widths[1] < widths[2]);
}

/// North and East profiles of a radially symmetric anomaly coincide.
#[test]
fn test_profiles_match_for_symmetric_anomaly() {
    let north = simulate(&vertical_dipole_params(FieldComponent::Bz)).unwrap();
    let east = simulate(&SurveyParams {
        profile: ProfileDirection::East,
        ..vertical_dipole_params(FieldComponent::Bz)
    })
    .unwrap();

    for (&a, &b) in north.profile.values.iter().zip(east.profile.values.iter()) {
        assert_abs_diff_eq!(a, b, epsilon = 1e-9);
    }
}
