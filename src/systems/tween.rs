//! Tween animation systems.
//!
//! [`tween_alpha_system`] fades the material alpha of entities carrying a
//! [`TweenAlpha`](crate::components::tween::TweenAlpha). The start delay is
//! consumed first, then the current alpha is captured and interpolated
//! towards the target with the tween's easing. Finished tweens are removed.
//!
//! The system reads delta time from [`WorldTime`](crate::resources::worldtime::WorldTime).

use crate::components::renderer::Renderer;
use crate::components::tween::{Easing, TweenAlpha};
use crate::resources::materials::Materials;
use crate::resources::worldtime::WorldTime;
use bevy_ecs::prelude::*;

/// Apply an easing function to a normalized time value.
///
/// The input `t` is clamped to [0.0, 1.0] and transformed according to the
/// easing curve.
pub(crate) fn ease(e: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match e {
        Easing::Linear => t,
        Easing::QuadIn => t * t,
        Easing::QuadOut => t * (2.0 - t),
        Easing::QuadInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                -1.0 + (4.0 - 2.0 * t) * t
            }
        }
        Easing::CubicIn => t * t * t,
        Easing::CubicOut => {
            let p = t - 1.0;
            p * p * p + 1.0
        }
        Easing::CubicInOut => {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                let p = 2.0 * t - 2.0;
                0.5 * p * p * p + 1.0
            }
        }
    }
}

/// Linearly interpolate between two floats.
pub(crate) fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Consume `dt` from the tween's delay and timeline.
///
/// Returns the time left over after the delay, or `None` while the delay is
/// still running.
pub(crate) fn advance_delay(delay: &mut f32, dt: f32) -> Option<f32> {
    if *delay > dt {
        *delay -= dt;
        return None;
    }
    let rest = dt - *delay;
    *delay = 0.0;
    Some(rest)
}

/// Animate material alpha based on [`TweenAlpha`] components.
pub fn tween_alpha_system(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &Renderer, &mut TweenAlpha)>,
    mut materials: ResMut<Materials>,
    mut commands: Commands,
) {
    let dt = world_time.delta.max(0.0);
    for (entity, renderer, mut tw) in query.iter_mut() {
        let Some(material) = materials.get_mut(renderer.material) else {
            commands.entity(entity).remove::<TweenAlpha>();
            continue;
        };
        let step = if tw.waiting() {
            let mut delay = tw.delay;
            let Some(rest) = advance_delay(&mut delay, dt) else {
                tw.delay = delay;
                continue;
            };
            tw.delay = 0.0;
            tw.from = Some(material.alpha());
            rest
        } else {
            dt
        };

        tw.time += step;
        let from = tw.from.unwrap_or(tw.to);
        let done = tw.duration <= 0.0 || tw.time >= tw.duration;
        let alpha = if done {
            tw.to
        } else {
            lerp_f32(from, tw.to, ease(tw.easing, tw.time / tw.duration))
        };
        material.set_alpha(alpha);

        if done {
            commands.entity(entity).remove::<TweenAlpha>();
        }
    }
}
