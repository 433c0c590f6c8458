//! Survey control panel: component/target/profile choices and parameter
//! sliders.
//!
//! Slider bounds mirror the classroom ranges; the forward model itself is
//! not asked to validate anything outside them.

use egui::Ui;

use terrella_core::types::{FieldComponent, ProfileDirection, SourceModel, SurveyParams};

/// State for the survey control panel.
#[derive(Debug)]
pub struct ControlsPanel {
    /// Forward-model parameters bound to the widgets.
    pub params: SurveyParams,
    /// Keep the colour limits of the previous run.
    pub fixed_scale: bool,
    /// Annotate the profile with its half-width pair.
    pub show_half_width: bool,
}

impl Default for ControlsPanel {
    fn default() -> Self {
        Self {
            params: SurveyParams::default(),
            fixed_scale: false,
            show_half_width: false,
        }
    }
}

impl ControlsPanel {
    /// Draw the panel. Returns true when any control changed this frame.
    pub fn ui(&mut self, ui: &mut Ui) -> bool {
        let mut changed = false;

        ui.heading("Terrella");
        ui.separator();

        ui.label("Field component:");
        ui.horizontal_wrapped(|ui| {
            for component in [
                FieldComponent::Bt,
                FieldComponent::Bx,
                FieldComponent::By,
                FieldComponent::Bz,
                FieldComponent::Bg,
            ] {
                changed |= ui
                    .selectable_value(&mut self.params.component, component, component.label())
                    .changed();
            }
        });

        ui.add_space(8.0);
        ui.label("Target:");
        ui.horizontal(|ui| {
            changed |= ui
                .selectable_value(&mut self.params.source, SourceModel::Dipole, "Dipole")
                .changed();
            changed |= ui
                .selectable_value(&mut self.params.source, SourceModel::Monopole, "Monopole")
                .changed();
        });

        ui.add_space(8.0);
        ui.label("Profile:");
        ui.horizontal(|ui| {
            changed |= ui
                .selectable_value(&mut self.params.profile, ProfileDirection::North, "North")
                .changed();
            changed |= ui
                .selectable_value(&mut self.params.profile, ProfileDirection::East, "East")
                .changed();
        });

        ui.add_space(12.0);
        ui.separator();

        changed |= ui
            .add(egui::Slider::new(&mut self.params.inclination, -90.0..=90.0).text("I (deg)"))
            .changed();
        changed |= ui
            .add(egui::Slider::new(&mut self.params.declination, 0.0..=180.0).text("D (deg)"))
            .changed();
        changed |= ui
            .add(egui::Slider::new(&mut self.params.length, 50.0..=200.0).text("Length (m)"))
            .changed();
        changed |= ui
            .add(
                egui::Slider::new(&mut self.params.spacing, 0.5..=15.0)
                    .step_by(0.5)
                    .text("Data spacing (m)"),
            )
            .changed();
        changed |= ui
            .add(egui::Slider::new(&mut self.params.moment, 1.0..=100.0).text("Moment"))
            .changed();
        changed |= ui
            .add(egui::Slider::new(&mut self.params.depth, 1.0..=50.0).text("Depth (m)"))
            .changed();

        ui.add_space(12.0);
        ui.separator();

        changed |= ui
            .checkbox(&mut self.fixed_scale, "Fixed colour scale")
            .changed();
        changed |= ui.checkbox(&mut self.show_half_width, "Half width").changed();

        changed
    }
}
