use bevy::prelude::*;
use bevy::window::{CursorMoved, PrimaryWindow};

/// Logical size of the primary window, refreshed every frame
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub size: Vec2,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
        }
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.size / 2.0
    }
}

/// Last known pointer position in screen space (origin top-left, y down)
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerPosition(pub Vec2);

/// System to copy the primary window size into the viewport
pub fn sync_viewport(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut viewport: ResMut<Viewport>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    let size = Vec2::new(window.width(), window.height());
    if viewport.size != size {
        debug!("Viewport resized to {}x{}", size.x, size.y);
        viewport.size = size;
    }
}

/// Startup system placing the pointer in the middle of the viewport
pub fn center_pointer(viewport: Res<Viewport>, mut pointer: ResMut<PointerPosition>) {
    pointer.0 = viewport.center();
}

/// System to track the pointer; only the latest move of the frame matters
pub fn track_pointer(
    mut cursor_events: EventReader<CursorMoved>,
    mut pointer: ResMut<PointerPosition>,
) {
    if let Some(event) = cursor_events.read().last() {
        pointer.0 = event.position;
    }
}
