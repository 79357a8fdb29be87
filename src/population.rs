use crate::cat::{Cat, CatImages, despawn_cat, spawn_cat};
use crate::collision::resolve_collisions;
use crate::config::*;
use crate::viewport::{PointerPosition, Viewport};
use bevy::prelude::*;
use rand::Rng;

/// Live cats in insertion order, plus the population size being steered toward
#[derive(Resource, Debug)]
pub struct CatRoster {
    cats: Vec<Entity>,
    target: usize,
}

impl FromWorld for CatRoster {
    fn from_world(world: &mut World) -> Self {
        let target = world
            .get_resource::<CatConfig>()
            .map_or(DEFAULT_MIN_CATS, CatConfig::min_cats);
        Self::new(target)
    }
}

impl CatRoster {
    pub fn new(target: usize) -> Self {
        Self {
            cats: Vec::new(),
            target,
        }
    }

    pub fn cats(&self) -> &[Entity] {
        &self.cats
    }

    pub fn len(&self) -> usize {
        self.cats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cats.is_empty()
    }

    pub fn target(&self) -> usize {
        self.target
    }

    /// Nudge the target one step and keep it inside the configured bounds
    pub fn retarget(&mut self, grow: bool, config: &CatConfig) -> usize {
        self.target = next_target(self.target, grow, config.min_cats(), config.max_cats());
        self.target
    }

    /// Bring the live list to the target count.
    ///
    /// Surplus cats come off the end, newest first, and are returned in that
    /// order for the caller to despawn. Missing cats are created with `spawn`.
    pub fn reconcile(&mut self, mut spawn: impl FnMut() -> Entity) -> Vec<Entity> {
        let keep = self.target.min(self.cats.len());
        let mut removed = self.cats.split_off(keep);
        removed.reverse();

        while self.cats.len() < self.target {
            self.cats.push(spawn());
        }

        removed
    }
}

/// Next target count after one grow/shrink decision
pub fn next_target(current: usize, grow: bool, min: usize, max: usize) -> usize {
    let nudged = if grow {
        current + 1
    } else {
        current.saturating_sub(1)
    };
    nudged.max(min).min(max)
}

/// Timer resource for population retargeting
#[derive(Resource)]
pub struct RetargetTimer(pub Timer);

impl Default for RetargetTimer {
    fn default() -> Self {
        Self(Timer::from_seconds(RETARGET_INTERVAL, TimerMode::Repeating))
    }
}

/// System to periodically pick a new target count and spawn/despawn to match it
pub fn retarget_population(
    mut commands: Commands,
    time: Res<Time>,
    mut timer: ResMut<RetargetTimer>,
    config: Res<CatConfig>,
    viewport: Res<Viewport>,
    images: Res<CatImages>,
    mut roster: ResMut<CatRoster>,
) {
    if !timer.0.tick(time.delta()).just_finished() {
        return;
    }

    let mut rng = rand::thread_rng();
    let grow = rng.gen_bool(GROW_PROBABILITY);
    let previous = roster.target();
    let target = roster.retarget(grow, &config);

    let removed = roster.reconcile(|| {
        let cat = Cat::spawn(&mut rng, &viewport, &config);
        spawn_cat(&mut commands, &images, &viewport, cat, &mut rng)
    });
    for entity in removed {
        despawn_cat(&mut commands, entity);
    }

    info!(
        "Cat target {} -> {} ({}), {} live",
        previous,
        target,
        if grow { "grow" } else { "shrink" },
        roster.len()
    );
}

/// System to resolve cat-to-cat collisions; runs before the cats step
pub fn collide_cats(
    roster: Res<CatRoster>,
    config: Res<CatConfig>,
    mut cats: Query<&mut Cat>,
) {
    let contacts = resolve_collisions(roster.cats(), &mut cats, config.bounciness);
    if contacts > 0 {
        trace!("Resolved {} cat collisions", contacts);
    }
}

/// System to step every live cat toward the pointer and update its sprite
pub fn step_cats(
    roster: Res<CatRoster>,
    config: Res<CatConfig>,
    pointer: Res<PointerPosition>,
    viewport: Res<Viewport>,
    mut cats: Query<(&mut Cat, &mut Transform)>,
) {
    for &entity in roster.cats() {
        if let Ok((mut cat, mut transform)) = cats.get_mut(entity) {
            let stepped = cat.step(pointer.0, &viewport, &config);
            *transform = stepped.to_world(&viewport);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(index: u32) -> Entity {
        Entity::from_raw(index)
    }

    #[test]
    fn target_is_clamped_to_bounds() {
        assert_eq!(next_target(1, true, 1, 1), 1);
        assert_eq!(next_target(1, false, 1, 1), 1);
        assert_eq!(next_target(8, true, 1, 8), 8);
        assert_eq!(next_target(1, false, 1, 8), 1);
        assert_eq!(next_target(0, false, 2, 5), 2);
        assert_eq!(next_target(4, true, 1, 8), 5);
        assert_eq!(next_target(4, false, 1, 8), 3);
    }

    #[test]
    fn target_snaps_into_bounds_after_config_change() {
        let mut config = CatConfig::default();
        let mut roster = CatRoster::new(8);
        config.set_max_cats(3);

        assert_eq!(roster.retarget(true, &config), 3);
        assert_eq!(roster.retarget(false, &config), 2);
    }

    #[test]
    fn reconcile_removes_newest_first() {
        let mut roster = CatRoster::new(3);
        let mut next = 0;
        let removed = roster.reconcile(|| {
            next += 1;
            entity(next)
        });
        assert!(removed.is_empty());
        assert_eq!(roster.cats(), &[entity(1), entity(2), entity(3)]);

        roster.target = 1;
        let removed = roster.reconcile(|| unreachable!("nothing to spawn"));
        assert_eq!(removed, vec![entity(3), entity(2)]);
        assert_eq!(roster.cats(), &[entity(1)]);
    }

    #[test]
    fn reconcile_fills_up_to_target_exactly() {
        let mut roster = CatRoster::new(1);
        let mut spawned = 0;
        roster.reconcile(|| {
            spawned += 1;
            entity(spawned)
        });
        roster.target = 4;
        roster.reconcile(|| {
            spawned += 1;
            entity(spawned)
        });

        assert_eq!(spawned, 4);
        assert_eq!(roster.len(), 4);
    }
}
