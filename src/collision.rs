use crate::cat::Cat;
use crate::config::DISTANCE_EPSILON;
use bevy::prelude::*;

/// Resolve a single overlapping pair.
///
/// Velocities are split into normal and tangent parts along the line of
/// centers; the normal parts are swapped, each scaled by `bounciness`, and
/// the pair is pushed apart by half the overlap each. Coincident centers
/// separate along +x. Returns whether the pair overlapped.
pub fn collide(a: &mut Cat, b: &mut Cat, bounciness: f32) -> bool {
    let offset = b.position - a.position;
    let distance = offset.length();
    let reach = a.radius() + b.radius();

    if distance >= reach {
        return false;
    }

    let normal = if distance > DISTANCE_EPSILON {
        offset / distance
    } else {
        Vec2::X
    };
    let tangent = normal.perp();

    let (normal_a, tangent_a) = (a.velocity.dot(normal), a.velocity.dot(tangent));
    let (normal_b, tangent_b) = (b.velocity.dot(normal), b.velocity.dot(tangent));

    a.velocity = normal * (normal_b * bounciness) + tangent * tangent_a;
    b.velocity = normal * (normal_a * bounciness) + tangent * tangent_b;

    let push = normal * ((reach - distance) / 2.0);
    a.position -= push;
    b.position += push;

    true
}

/// Single pass over every unordered pair, in roster order. Returns the number of contacts.
pub fn resolve_collisions(order: &[Entity], cats: &mut Query<&mut Cat>, bounciness: f32) -> usize {
    let mut contacts = 0;

    for (i, &first) in order.iter().enumerate() {
        for &second in &order[i + 1..] {
            let Ok([mut a, mut b]) = cats.get_many_mut([first, second]) else {
                continue;
            };
            if collide(&mut a, &mut b, bounciness) {
                contacts += 1;
            }
        }
    }

    contacts
}
