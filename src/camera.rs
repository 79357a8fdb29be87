use bevy::prelude::*;

#[derive(Component)]
pub struct MainCamera;

/// Camera at the origin, one world unit per logical pixel
pub fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        MainCamera,
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));
}
