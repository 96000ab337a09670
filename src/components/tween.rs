//! Tween components for animated interpolation.
//!
//! [`TweenAlpha`] fades the alpha of an entity's material (through its
//! [`Renderer`](super::renderer::Renderer)) towards a target value, after an
//! optional start delay. The start value is read from the material when the
//! delay elapses, so a fade queued behind another one picks up wherever the
//! previous one left the material.
//!
//! Inserting a new `TweenAlpha` on an entity replaces the one in flight.
//! See [`crate::systems::tween`] for the update system.

use bevy_ecs::prelude::Component;

/// Easing functions for smooth interpolation.
///
/// These functions transform a linear `t` value (0.0 to 1.0) to create
/// different acceleration/deceleration curves.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Easing {
    /// Constant speed (no easing).
    Linear,
    /// Starts slow, accelerates (quadratic).
    QuadIn,
    /// Starts fast, decelerates (quadratic).
    QuadOut,
    /// Slow start and end (quadratic).
    QuadInOut,
    /// Starts slow, accelerates (cubic).
    CubicIn,
    /// Starts fast, decelerates (cubic).
    CubicOut,
    /// Slow start and end (cubic).
    CubicInOut,
}

/// Animates the alpha channel of an entity's material.
#[derive(Component, Clone, Debug)]
pub struct TweenAlpha {
    /// Alpha captured when the tween starts (after the delay).
    pub from: Option<f32>,
    /// Target alpha in [0, 1].
    pub to: f32,
    /// Duration in seconds.
    pub duration: f32,
    /// Seconds left before the tween starts.
    pub delay: f32,
    /// Easing function to use.
    pub easing: Easing,
    /// Time spent interpolating.
    pub time: f32,
}

impl TweenAlpha {
    pub fn new(to: f32, duration: f32) -> Self {
        TweenAlpha {
            from: None,
            to: to.clamp(0.0, 1.0),
            duration,
            delay: 0.0,
            easing: Easing::QuadOut,
            time: 0.0,
        }
    }
    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
    /// Whether the start delay is still running.
    pub fn waiting(&self) -> bool {
        self.from.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_tween_alpha_new() {
        let tw = TweenAlpha::new(1.0, 0.3);

        assert!(tw.from.is_none());
        assert!(approx_eq(tw.to, 1.0));
        assert!(approx_eq(tw.duration, 0.3));
        assert!(approx_eq(tw.delay, 0.0));
        assert!(matches!(tw.easing, Easing::QuadOut));
        assert!(approx_eq(tw.time, 0.0));
        assert!(tw.waiting());
    }

    #[test]
    fn test_tween_alpha_clamps_target() {
        assert!(approx_eq(TweenAlpha::new(2.0, 1.0).to, 1.0));
        assert!(approx_eq(TweenAlpha::new(-1.0, 1.0).to, 0.0));
    }

    #[test]
    fn test_tween_alpha_builder_chaining() {
        let tw = TweenAlpha::new(0.0, 0.3)
            .with_delay(0.12)
            .with_easing(Easing::Linear);

        assert!(approx_eq(tw.delay, 0.12));
        assert!(matches!(tw.easing, Easing::Linear));
    }

    #[test]
    fn test_negative_delay_is_zero() {
        let tw = TweenAlpha::new(1.0, 0.3).with_delay(-1.0);
        assert!(approx_eq(tw.delay, 0.0));
    }

    #[test]
    fn test_easing_is_copy() {
        let e1 = Easing::Linear;
        let e2 = e1; // copy
        assert!(matches!(e1, Easing::Linear));
        assert!(matches!(e2, Easing::Linear));
    }
}
