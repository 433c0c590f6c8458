//! Main application state and egui integration.
//!
//! Every control change re-runs the forward model synchronously before the
//! frame is drawn; the model is closed-form and cheap, so there is no
//! background work and no partial state.

use eframe::egui;

use terrella_core::forward::simulate;
use terrella_core::profile::half_width;
use terrella_core::types::{HalfWidth, SurveyResult};

use crate::panels;

/// The main Terrella application.
pub struct TerrellaApp {
    /// State for the survey control panel.
    pub controls: panels::controls::ControlsPanel,
    /// State for the map and profile views.
    pub map_view: panels::map_view::MapView,
    /// Result of the most recent forward-model run.
    result: Option<SurveyResult>,
    /// Half-width annotation for the current profile, when requested.
    half_width: Option<HalfWidth>,
    /// Error message from the last run, if any.
    error_message: Option<String>,
}

impl Default for TerrellaApp {
    fn default() -> Self {
        Self {
            controls: panels::controls::ControlsPanel::default(),
            map_view: panels::map_view::MapView::default(),
            result: None,
            half_width: None,
            error_message: None,
        }
    }
}

impl TerrellaApp {
    fn rerun(&mut self) {
        self.error_message = None;
        self.half_width = None;

        match simulate(&self.controls.params) {
            Ok(result) => {
                if self.controls.show_half_width {
                    match half_width(&result.profile, result.params.spacing) {
                        Ok(hw) => self.half_width = Some(hw),
                        Err(e) => self.error_message = Some(e.to_string()),
                    }
                }
                self.map_view
                    .update_colour_limits(&result.map, self.controls.fixed_scale);
                self.result = Some(result);
            }
            Err(e) => {
                log::warn!("forward model failed: {e}");
                self.error_message = Some(e.to_string());
            }
        }
    }
}

impl eframe::App for TerrellaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut changed = false;

        egui::SidePanel::left("controls_panel")
            .resizable(false)
            .default_width(240.0)
            .show(ctx, |ui| {
                changed = self.controls.ui(ui);
            });

        if changed || self.result.is_none() {
            self.rerun();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(err) = &self.error_message {
                ui.colored_label(egui::Color32::RED, format!("Error: {}", err));
                ui.add_space(4.0);
            }
            if let Some(result) = &self.result {
                self.map_view
                    .ui(ui, result, self.half_width.as_ref());
            }
        });
    }
}
