use crate::config::*;
use bevy::prelude::*;

/// Pending opacity change on a sprite, owned by its entity.
///
/// Inserting a new `Fade` replaces the pending one, and despawning the entity
/// drops it, so a fade can never fire for an entity that is gone.
#[derive(Component, Debug, Clone)]
pub struct Fade {
    /// Starting alpha; `None` picks up whatever the sprite shows on the first tick
    from: Option<f32>,
    to: f32,
    timer: Timer,
    despawn_when_done: bool,
}

impl Fade {
    pub fn fade_in() -> Self {
        Self {
            from: Some(0.0),
            to: 1.0,
            timer: Timer::from_seconds(FADE_IN_DURATION, TimerMode::Once),
            despawn_when_done: false,
        }
    }

    pub fn fade_out() -> Self {
        Self {
            from: None,
            to: 0.0,
            timer: Timer::from_seconds(FADE_OUT_DURATION, TimerMode::Once),
            despawn_when_done: true,
        }
    }

    pub fn despawns_when_done(&self) -> bool {
        self.despawn_when_done
    }

    /// Alpha at the current point of the fade
    pub fn alpha(&self, current: f32) -> f32 {
        let from = self.from.unwrap_or(current);
        from + (self.to - from) * self.timer.fraction()
    }
}

/// System to animate fades and finish them off
pub fn apply_fades(
    mut commands: Commands,
    time: Res<Time>,
    mut fades: Query<(Entity, &mut Fade, &mut Sprite)>,
) {
    for (entity, mut fade, mut sprite) in fades.iter_mut() {
        let current = sprite.color.alpha();
        if fade.from.is_none() {
            fade.from = Some(current);
        }

        fade.timer.tick(time.delta());
        sprite.color.set_alpha(fade.alpha(current));

        if fade.timer.finished() {
            if fade.despawn_when_done {
                commands.entity(entity).despawn();
            } else {
                commands.entity(entity).remove::<Fade>();
            }
        }
    }
}
