use crate::config::*;
use crate::fade::Fade;
use crate::viewport::Viewport;
use bevy::prelude::*;
use rand::Rng;
use rand::seq::SliceRandom;

/// Kinematic state of one floating cat, in screen space (pixels per frame)
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Cat {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Degrees, clockwise on screen
    pub rotation: f32,
    pub rotation_speed: f32,
    pub scale: f32,
    /// Phase on the orbit circle around the pointer, in radians
    pub orbit_angle: f32,
    radius: f32,
}

/// Marker component for cat sprites
#[derive(Component)]
pub struct CatSprite;

/// Image handles a new cat picks its look from
#[derive(Resource, Default)]
pub struct CatImages(pub Vec<Handle<Image>>);

/// Visual transform produced by a step, in screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatTransform {
    pub translation: Vec2,
    pub rotation: f32,
    pub scale: f32,
}

impl CatTransform {
    /// Convert to a world transform for a camera centered on the viewport
    pub fn to_world(&self, viewport: &Viewport) -> Transform {
        let half = viewport.center();
        Transform::from_xyz(self.translation.x - half.x, half.y - self.translation.y, 0.0)
            .with_rotation(Quat::from_rotation_z(-self.rotation.to_radians()))
            .with_scale(Vec3::splat(self.scale))
    }
}

impl Cat {
    /// A cat at rest with neutral rotation and scale
    pub fn new(position: Vec2, velocity: Vec2, radius: f32) -> Self {
        Self {
            position,
            velocity,
            rotation: 0.0,
            rotation_speed: 0.0,
            scale: 1.0,
            orbit_angle: 0.0,
            radius,
        }
    }

    /// Roll a fresh cat somewhere inside the viewport
    pub fn spawn<R: Rng>(rng: &mut R, viewport: &Viewport, config: &CatConfig) -> Self {
        let speed = config.base_speed.abs();

        Self {
            position: Vec2::new(
                rng.r#gen::<f32>() * viewport.width(),
                rng.r#gen::<f32>() * viewport.height(),
            ),
            velocity: Vec2::new(
                rng.gen_range(-speed..=speed),
                rng.gen_range(-speed..=speed),
            ),
            rotation: rng.gen_range(0.0..360.0),
            rotation_speed: rng.gen_range(-MAX_ROTATION_SPEED..=MAX_ROTATION_SPEED),
            scale: config.min_scale()
                + rng.r#gen::<f32>() * (config.max_scale() - config.min_scale()),
            orbit_angle: rng.gen_range(0.0..std::f32::consts::TAU),
            radius: config.collision_radius,
        }
    }

    /// Collision radius captured at spawn; later config changes do not resize the cat
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Pull toward the pointer from afar, or circle it once inside orbit range
    pub fn steer(&mut self, pointer: Vec2, config: &CatConfig) {
        let offset = pointer - self.position;
        let distance = offset.length();

        if distance > config.orbit_distance {
            if distance > DISTANCE_EPSILON {
                self.velocity += offset / distance * config.attraction_force;
            }
        } else {
            self.orbit_angle += config.orbit_speed;
            let target = pointer + Vec2::from_angle(self.orbit_angle) * config.orbit_distance;
            // Replaces the velocity outright
            self.velocity = (target - self.position) * ORBIT_GAIN;
        }
    }

    pub fn damp(&mut self) {
        self.velocity *= DAMPING;
    }

    pub fn integrate(&mut self) {
        self.position += self.velocity;
        self.rotation += self.rotation_speed;
    }

    /// Clamp inside the viewport inset by the radius, bouncing off any edge touched
    pub fn contain(&mut self, viewport: &Viewport, bounciness: f32) {
        for axis in 0..2 {
            let extent = viewport.size[axis];

            if self.position[axis] < self.radius {
                self.position[axis] = self.radius;
                self.velocity[axis] = self.velocity[axis].abs() * bounciness;
            }
            if self.position[axis] > extent - self.radius {
                self.position[axis] = extent - self.radius;
                self.velocity[axis] = -self.velocity[axis].abs() * bounciness;
            }
        }
    }

    /// Advance one frame
    pub fn step(&mut self, pointer: Vec2, viewport: &Viewport, config: &CatConfig) -> CatTransform {
        self.steer(pointer, config);
        self.damp();
        self.integrate();
        self.contain(viewport, config.bounciness);
        self.transform()
    }

    pub fn transform(&self) -> CatTransform {
        CatTransform {
            translation: self.position,
            rotation: self.rotation,
            scale: self.scale,
        }
    }
}

/// Startup system to load the cat images
pub fn load_cat_images(asset_server: Res<AssetServer>, mut images: ResMut<CatImages>) {
    images.0 = CAT_IMAGES.iter().map(|path| asset_server.load(*path)).collect();
}

/// Spawn a transparent cat sprite that fades in
pub fn spawn_cat<R: Rng>(
    commands: &mut Commands,
    images: &CatImages,
    viewport: &Viewport,
    cat: Cat,
    rng: &mut R,
) -> Entity {
    let image = images.0.choose(rng).cloned().unwrap_or_default();
    let transform = cat.transform().to_world(viewport);

    let entity = commands
        .spawn((
            CatSprite,
            Sprite {
                image,
                color: Color::srgba(1.0, 1.0, 1.0, 0.0),
                custom_size: Some(Vec2::splat(CAT_SPRITE_SIZE)),
                ..default()
            },
            transform,
            Fade::fade_in(),
            cat,
        ))
        .id();

    debug!("Spawned cat {:?}", entity);
    entity
}

/// Fade a cat out; the fade system despawns it afterwards
pub fn despawn_cat(commands: &mut Commands, entity: Entity) {
    // Replaces any fade-in still pending
    commands.entity(entity).insert(Fade::fade_out());
    debug!("Despawning cat {:?}", entity);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn config() -> CatConfig {
        CatConfig::default()
    }

    #[test]
    fn spawn_stays_within_configured_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let viewport = Viewport::new(800.0, 600.0);
        let config = config();

        for _ in 0..200 {
            let cat = Cat::spawn(&mut rng, &viewport, &config);
            assert!((0.0..=800.0).contains(&cat.position.x));
            assert!((0.0..=600.0).contains(&cat.position.y));
            assert!(cat.scale >= config.min_scale() && cat.scale <= config.max_scale());
            assert!(cat.velocity.x.abs() <= config.base_speed);
            assert!(cat.velocity.y.abs() <= config.base_speed);
            assert!((0.0..360.0).contains(&cat.rotation));
            assert!(cat.rotation_speed.abs() <= MAX_ROTATION_SPEED);
            assert!((0.0..std::f32::consts::TAU).contains(&cat.orbit_angle));
            assert_eq!(cat.radius(), config.collision_radius);
        }
    }

    #[test]
    fn radius_is_fixed_at_spawn() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut config = config();
        let cat = Cat::spawn(&mut rng, &Viewport::default(), &config);

        config.collision_radius = 90.0;
        assert_eq!(cat.radius(), DEFAULT_COLLISION_RADIUS);
    }

    #[test]
    fn step_never_changes_scale() {
        let mut rng = StdRng::seed_from_u64(3);
        let viewport = Viewport::default();
        let config = config();
        let mut cat = Cat::spawn(&mut rng, &viewport, &config);
        let scale = cat.scale;

        for frame in 0..120 {
            let pointer = Vec2::new(frame as f32 * 7.0, 300.0);
            let transform = cat.step(pointer, &viewport, &config);
            assert_eq!(transform.scale, scale);
        }
        assert_eq!(cat.scale, scale);
    }

    #[test]
    fn far_cat_accelerates_toward_pointer() {
        let config = config();
        let mut cat = Cat::new(Vec2::new(100.0, 100.0), Vec2::ZERO, 50.0);

        cat.steer(Vec2::new(600.0, 100.0), &config);

        assert!((cat.velocity.x - config.attraction_force).abs() < 1e-6);
        assert_eq!(cat.velocity.y, 0.0);
    }

    #[test]
    fn orbit_velocity_ignores_previous_velocity() {
        let config = config();
        let viewport = Viewport::default();
        let pointer = viewport.center();
        let start = pointer + Vec2::new(40.0, 0.0);

        let mut slow = Cat::new(start, Vec2::new(0.1, 0.0), 50.0);
        let mut fast = Cat::new(start, Vec2::new(-30.0, 25.0), 50.0);

        slow.step(pointer, &viewport, &config);
        fast.step(pointer, &viewport, &config);

        assert_eq!(slow.velocity, fast.velocity);
        assert_eq!(slow.position, fast.position);
    }

    #[test]
    fn orbit_advances_phase_and_heads_for_circle_point() {
        let config = config();
        let pointer = Vec2::new(500.0, 400.0);
        let mut cat = Cat::new(pointer, Vec2::ZERO, 50.0);

        cat.steer(pointer, &config);

        assert!((cat.orbit_angle - config.orbit_speed).abs() < 1e-6);
        let expected = Vec2::from_angle(config.orbit_speed) * config.orbit_distance * ORBIT_GAIN;
        assert!((cat.velocity - expected).length() < 1e-4);
    }

    #[test]
    fn left_edge_bounce_reverses_and_scales_velocity() {
        let viewport = Viewport::new(800.0, 600.0);
        let mut cat = Cat::new(Vec2::new(10.0, 300.0), Vec2::new(-4.0, 0.0), 50.0);

        cat.contain(&viewport, 0.7);

        assert_eq!(cat.position.x, 50.0);
        assert!((cat.velocity.x - 2.8).abs() < 1e-5);
    }

    #[test]
    fn bottom_edge_bounce_pushes_back_up() {
        let viewport = Viewport::new(800.0, 600.0);
        let mut cat = Cat::new(Vec2::new(400.0, 590.0), Vec2::new(0.0, 3.0), 20.0);

        cat.contain(&viewport, 0.5);

        assert_eq!(cat.position.y, 580.0);
        assert!((cat.velocity.y + 1.5).abs() < 1e-5);
    }

    #[test]
    fn stepping_keeps_cats_inset_from_edges() {
        let mut rng = StdRng::seed_from_u64(11);
        let viewport = Viewport::new(640.0, 480.0);
        let mut config = config();
        config.attraction_force = 0.1;

        let mut cats: Vec<Cat> = (0..10)
            .map(|_| Cat::spawn(&mut rng, &viewport, &config))
            .collect();

        for _ in 0..300 {
            let pointer = Vec2::new(rng.gen_range(-200.0..840.0), rng.gen_range(-200.0..680.0));
            for cat in cats.iter_mut() {
                cat.step(pointer, &viewport, &config);
                let r = cat.radius();
                assert!(cat.position.x >= r && cat.position.x <= viewport.width() - r);
                assert!(cat.position.y >= r && cat.position.y <= viewport.height() - r);
            }
        }
    }

    #[test]
    fn world_transform_centers_screen_space() {
        let viewport = Viewport::new(1280.0, 720.0);
        let mut cat = Cat::new(Vec2::ZERO, Vec2::ZERO, 50.0);
        cat.scale = 0.5;

        let transform = cat.transform().to_world(&viewport);

        assert_eq!(transform.translation, Vec3::new(-640.0, 360.0, 0.0));
        assert_eq!(transform.scale, Vec3::splat(0.5));
    }
}
