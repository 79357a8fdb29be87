use crate::SimulationState;
use crate::config::*;
use crate::population::CatRoster;
use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

/// System to keep the window background in step with the configured color
pub fn apply_background(config: Res<CatConfig>, mut clear_color: ResMut<ClearColor>) {
    if clear_color.0 != config.background_color {
        clear_color.0 = config.background_color;
    }
}

/// Control panel for the tunable parameters
pub fn panel_system(
    mut contexts: EguiContexts,
    mut config: ResMut<CatConfig>,
    mut simulation_state: ResMut<SimulationState>,
    roster: Res<CatRoster>,
) {
    egui::Window::new("Floating Cats")
        .default_pos(egui::pos2(10.0, 10.0))
        .show(contexts.ctx_mut(), |ui| {
            ui.horizontal(|ui| {
                let button_text = if *simulation_state == SimulationState::Running {
                    "⏸ Pause"
                } else {
                    "▶ Resume"
                };

                if ui.button(button_text).clicked() {
                    *simulation_state = if *simulation_state == SimulationState::Running {
                        SimulationState::Paused
                    } else {
                        SimulationState::Running
                    };
                }

                if ui.button("Reset defaults").clicked() {
                    *config = CatConfig::default();
                }
            });

            ui.label(format!("Cats: {} (target {})", roster.len(), roster.target()));

            ui.separator();
            ui.heading("Population");

            let mut min_cats = config.min_cats();
            if ui
                .add(egui::Slider::new(&mut min_cats, MIN_CATS_RANGE).text("Min cats"))
                .changed()
            {
                config.set_min_cats(min_cats);
            }

            let mut max_cats = config.max_cats();
            if ui
                .add(egui::Slider::new(&mut max_cats, MAX_CATS_RANGE).text("Max cats"))
                .changed()
            {
                config.set_max_cats(max_cats);
            }

            let mut min_scale = config.min_scale();
            if ui
                .add(
                    egui::Slider::new(&mut min_scale, MIN_SCALE_RANGE)
                        .step_by(0.1)
                        .text("Min scale"),
                )
                .changed()
            {
                config.set_min_scale(min_scale);
            }

            let mut max_scale = config.max_scale();
            if ui
                .add(
                    egui::Slider::new(&mut max_scale, MAX_SCALE_RANGE)
                        .step_by(0.1)
                        .text("Max scale"),
                )
                .changed()
            {
                config.set_max_scale(max_scale);
            }

            ui.add(
                egui::Slider::new(&mut config.base_speed, BASE_SPEED_RANGE)
                    .step_by(0.1)
                    .text("Base speed"),
            );

            ui.horizontal(|ui| {
                let srgba = config.background_color.to_srgba();
                let mut rgb = [srgba.red, srgba.green, srgba.blue];
                ui.label("Background");
                if ui.color_edit_button_rgb(&mut rgb).changed() {
                    config.background_color = Color::srgb(rgb[0], rgb[1], rgb[2]);
                }
            });

            ui.separator();
            ui.heading("Pointer");

            ui.add(
                egui::Slider::new(&mut config.attraction_force, ATTRACTION_FORCE_RANGE)
                    .step_by(0.001)
                    .text("Attraction"),
            );
            ui.add(
                egui::Slider::new(&mut config.orbit_distance, ORBIT_DISTANCE_RANGE)
                    .step_by(10.0)
                    .text("Orbit radius"),
            );
            ui.add(
                egui::Slider::new(&mut config.orbit_speed, ORBIT_SPEED_RANGE)
                    .step_by(0.001)
                    .text("Orbit speed"),
            );

            ui.separator();
            ui.heading("Physics");

            ui.add(
                egui::Slider::new(&mut config.bounciness, BOUNCINESS_RANGE)
                    .step_by(0.1)
                    .text("Bounciness"),
            );
            ui.add(
                egui::Slider::new(&mut config.collision_radius, COLLISION_RADIUS_RANGE)
                    .step_by(5.0)
                    .text("Collision size"),
            );
            ui.label("Collision size applies to newly spawned cats");
        });
}
