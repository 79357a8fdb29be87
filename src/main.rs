use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use floating_cats::SimulationPlugin;
use floating_cats::camera::setup_camera;
use floating_cats::cat::load_cat_images;
use floating_cats::config::default_background_color;
use floating_cats::panel::{apply_background, panel_system};

fn main() {
    App::new()
        .insert_resource(ClearColor(default_background_color()))
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Floating Cats".to_string(),
                        resolution: (1280.0, 720.0).into(),
                        fit_canvas_to_parent: true,
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    filter: "wgpu=error,naga=warn,floating_cats=info".to_string(),
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin)
        .add_plugins(SimulationPlugin)
        .add_systems(Startup, (setup_camera, load_cat_images))
        .add_systems(Update, (apply_background, panel_system))
        .run();
}
