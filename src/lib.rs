//! Sprite cats that float around the window, orbit the pointer, bounce off
//! the edges and off each other.

pub mod camera;
pub mod cat;
pub mod collision;
pub mod config;
pub mod fade;
pub mod panel;
pub mod population;
pub mod viewport;

use bevy::prelude::*;
use bevy::window::CursorMoved;
use cat::CatImages;
use config::CatConfig;
use fade::apply_fades;
use population::{CatRoster, RetargetTimer, collide_cats, retarget_population, step_cats};
use viewport::{PointerPosition, Viewport, center_pointer, sync_viewport, track_pointer};

/// Resource to control simulation state
#[derive(Resource, Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum SimulationState {
    #[default]
    Running,
    Paused,
}

/// Per-frame ordering of the simulation
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Pointer and viewport updates from the window
    Input,
    /// Retarget timer and spawn/despawn
    Population,
    /// Collision pass, then stepping every cat
    Physics,
    /// Opacity fades and delayed despawns
    Fade,
}

/// Headless core of the simulation: resources and per-frame systems.
///
/// Needs a `Time` source (`MinimalPlugins` or `DefaultPlugins`); rendering,
/// the control panel and asset loading are added by the binary.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<CursorMoved>()
            .init_resource::<CatConfig>()
            .init_resource::<Viewport>()
            .init_resource::<PointerPosition>()
            .init_resource::<CatImages>()
            .init_resource::<SimulationState>()
            .init_resource::<CatRoster>()
            .init_resource::<RetargetTimer>()
            .configure_sets(
                Update,
                (
                    SimulationSet::Input,
                    SimulationSet::Population,
                    SimulationSet::Physics,
                    SimulationSet::Fade,
                )
                    .chain(),
            )
            .add_systems(Startup, (sync_viewport, center_pointer).chain())
            .add_systems(
                Update,
                (track_pointer, sync_viewport).in_set(SimulationSet::Input),
            )
            .add_systems(
                Update,
                retarget_population
                    .in_set(SimulationSet::Population)
                    .run_if(is_running),
            )
            .add_systems(
                Update,
                (collide_cats, step_cats)
                    .chain()
                    .in_set(SimulationSet::Physics)
                    .run_if(is_running),
            )
            .add_systems(Update, apply_fades.in_set(SimulationSet::Fade));
    }
}

fn is_running(state: Res<SimulationState>) -> bool {
    *state == SimulationState::Running
}
