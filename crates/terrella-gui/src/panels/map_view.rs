//! Anomaly map and profile views.
//!
//! The map is rendered as binned coloured point layers in an `egui_plot`
//! with unit aspect, the survey line overlaid in white with A/B end
//! labels. The profile plot below shows the extracted anomaly curve, a
//! zero reference, and the half-width pair when requested.

use egui::{Color32, Ui};
use egui_plot::{Line, LineStyle, Plot, PlotPoint, PlotPoints, Points, Text};

use terrella_core::types::{FieldMap, HalfWidth, ProfileDirection, SurveyResult};

/// Number of colour levels used to bin the anomaly map.
const COLOUR_BINS: usize = 24;

/// State for the map and profile views.
#[derive(Debug, Default)]
pub struct MapView {
    /// Colour limits (min, max) in nT. Persist across runs while the
    /// fixed-scale checkbox is held.
    clim: Option<(f64, f64)>,
}

impl MapView {
    /// Refresh the colour limits from a new map unless they are pinned.
    pub fn update_colour_limits(&mut self, map: &FieldMap, fixed_scale: bool) {
        if self.clim.is_none() || !fixed_scale {
            self.clim = Some(map.value_range());
        }
    }

    pub fn ui(&self, ui: &mut Ui, result: &SurveyResult, half_width: Option<&HalfWidth>) {
        let (c_min, c_max) = self.clim.unwrap_or_else(|| result.map.value_range());

        ui.label(format!(
            "{} anomaly: [{:.3}, {:.3}] nT",
            result.params.component.label(),
            c_min,
            c_max
        ));
        ui.add_space(4.0);

        self.map_plot(ui, result, c_min, c_max);
        ui.add_space(8.0);
        self.profile_plot(ui, result, half_width, c_min, c_max);
    }

    fn map_plot(&self, ui: &mut Ui, result: &SurveyResult, c_min: f64, c_max: f64) {
        let map = &result.map;
        let range = (c_max - c_min).max(1e-30);

        // Bin stations into colour levels (one point layer per level).
        let mut bins: Vec<Vec<[f64; 2]>> = vec![Vec::new(); COLOUR_BINS];
        let half_dx = (map.extent[1] - map.extent[0]) / map.nx as f64 / 2.0;
        for iy in 0..map.ny {
            for ix in 0..map.nx {
                let value = map.values[iy * map.nx + ix];
                let frac = ((value - c_min) / range).clamp(0.0, 1.0);
                let bin = ((frac * (COLOUR_BINS - 1) as f64).round() as usize)
                    .min(COLOUR_BINS - 1);
                let x = map.extent[0] + (2.0 * ix as f64 + 1.0) * half_dx;
                let y = map.extent[2] + (2.0 * iy as f64 + 1.0) * half_dx;
                bins[bin].push([x, y]);
            }
        }

        // Keep markers roughly cell sized as the grid is refined.
        let radius = (160.0 / map.nx as f32).clamp(1.5, 6.0);

        let track: PlotPoints = result.profile.track.iter().copied().collect();
        let (a_pos, b_pos) = profile_end_labels(result);

        Plot::new("anomaly_map")
            .height(400.0)
            .data_aspect(1.0)
            .x_axis_label("Easting (m)")
            .y_axis_label("Northing (m)")
            .show(ui, |plot_ui| {
                for (bin_idx, bin_points) in bins.iter().enumerate() {
                    if bin_points.is_empty() {
                        continue;
                    }
                    let frac = bin_idx as f32 / (COLOUR_BINS - 1).max(1) as f32;
                    let plot_points: PlotPoints = bin_points.iter().copied().collect();
                    plot_ui.points(
                        Points::new(plot_points)
                            .radius(radius)
                            .color(jet_colour(frac)),
                    );
                }

                plot_ui.line(Line::new(track).color(Color32::WHITE).width(1.5));
                plot_ui.text(Text::new(a_pos, "A").color(Color32::WHITE));
                plot_ui.text(Text::new(b_pos, "B").color(Color32::WHITE));
            });
    }

    fn profile_plot(
        &self,
        ui: &mut Ui,
        result: &SurveyResult,
        half_width: Option<&HalfWidth>,
        c_min: f64,
        c_max: f64,
    ) {
        let profile = &result.profile;

        let curve: PlotPoints = profile
            .positions
            .iter()
            .zip(profile.values.iter())
            .map(|(&x, &v)| [x, v])
            .collect();
        let zero: PlotPoints = profile
            .positions
            .iter()
            .map(|&x| [x, 0.0])
            .collect();

        let label = match half_width {
            Some(hw) => format!("Profile A–B — half-width {:.1} m", hw.width),
            None => "Profile A–B".to_owned(),
        };
        ui.label(label);

        Plot::new("profile_plot")
            .height(160.0)
            .include_y(c_min)
            .include_y(c_max)
            .x_axis_label("Distance along profile (m)")
            .y_axis_label("nT")
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(zero)
                        .color(Color32::GRAY)
                        .style(LineStyle::dashed_loose())
                        .width(1.0),
                );
                plot_ui.line(Line::new(curve).color(Color32::BLACK).width(2.0));

                if let Some(hw) = half_width {
                    let pair: PlotPoints = hw
                        .positions
                        .iter()
                        .zip(hw.values.iter())
                        .map(|(&x, &v)| [x, v])
                        .collect();
                    plot_ui.line(
                        Line::new(pair)
                            .color(Color32::BLUE)
                            .style(LineStyle::dashed_dense())
                            .width(1.5),
                    );
                    let markers: PlotPoints = hw
                        .positions
                        .iter()
                        .zip(hw.values.iter())
                        .map(|(&x, &v)| [x, v])
                        .collect();
                    plot_ui.points(Points::new(markers).radius(4.0).color(Color32::BLUE));
                }
            });
    }
}

/// Positions for the A/B end labels, just inside the survey edge.
fn profile_end_labels(result: &SurveyResult) -> (PlotPoint, PlotPoint) {
    let half = result.params.length / 2.0;
    let inset = half * 0.9;
    match result.params.profile {
        ProfileDirection::North => (PlotPoint::new(1.0, -inset), PlotPoint::new(1.0, inset)),
        ProfileDirection::East => (PlotPoint::new(-inset, 1.0), PlotPoint::new(inset, 1.0)),
    }
}

/// Jet-style colour ramp: blue through cyan and yellow to red.
fn jet_colour(frac: f32) -> Color32 {
    let r = (1.5 - (4.0 * frac - 3.0).abs()).clamp(0.0, 1.0);
    let g = (1.5 - (4.0 * frac - 2.0).abs()).clamp(0.0, 1.0);
    let b = (1.5 - (4.0 * frac - 1.0).abs()).clamp(0.0, 1.0);
    Color32::from_rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}
