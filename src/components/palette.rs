//! Object palette widget state.
//!
//! The [`ObjectPalette`] component lives on the controller entity. It owns the
//! ordered prototypes and the parallel list of item entities parented under
//! a single container entity ([`PaletteContainer`]). The container's local X
//! is the scroll offset: item `i` sits at `spacing * i`, so the item centered
//! on the widget is the one at `round(-offset / spacing)`.
//!
//! The free functions in this module hold the palette arithmetic (index
//! selection, rubber-band damping, fade stagger) so it can be checked without
//! a world.
//!
//! # Related
//!
//! - [`crate::systems::palette`] – spawn, swipe system and event observers
//! - [`crate::resources::paletteconfig::PaletteConfig`] – INI-backed tunables

use bevy_ecs::prelude::{Component, Entity};
use raylib::math::Vector2;

use crate::components::timer::TaskHandle;
use crate::resources::materials::MaterialHandle;
use crate::resources::prototypes::Prototype;

/// Resistance applied once the container is scrolled past either end.
pub const RUBBER_BAND_STIFFNESS: f32 = 10.0;

/// Tunables copied into each palette when it is spawned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaletteSettings {
    /// Multiplier from touchpad movement to container movement, in [0, 1].
    pub swipe_sensitivity: f32,
    /// Distance between consecutive items along the container X axis.
    pub item_spacing: f32,
    /// Forward (Z) offset of the item row.
    pub item_depth: f32,
    /// Duration of a single item fade, in seconds.
    pub fade_duration: f32,
    /// Delay between consecutive item fades, in seconds.
    pub fade_stagger: f32,
    /// Grace period between releasing the pad and hiding the palette.
    pub hide_delay: f32,
    /// Uniform scale added to a placed item per growth tick.
    pub growth_step: f32,
    /// Seconds between growth ticks.
    pub growth_interval: f32,
    /// Factor applied to the base color to obtain the hover emission.
    pub highlight_factor: f32,
    /// Upper bound for the placed item's uniform scale. `None` grows without
    /// limit until the trigger is released.
    pub max_placement_scale: Option<f32>,
}

impl Default for PaletteSettings {
    fn default() -> Self {
        Self {
            swipe_sensitivity: 0.3,
            item_spacing: 0.2,
            item_depth: 0.1,
            fade_duration: 0.3,
            fade_stagger: 0.04,
            hide_delay: 1.0,
            growth_step: 0.001,
            growth_interval: 0.01,
            highlight_factor: 0.8,
            max_placement_scale: None,
        }
    }
}

impl PaletteSettings {
    /// Copy with every value forced into its valid range.
    pub fn sanitized(mut self) -> Self {
        self.swipe_sensitivity = self.swipe_sensitivity.clamp(0.0, 1.0);
        if self.item_spacing <= 0.0 {
            self.item_spacing = PaletteSettings::default().item_spacing;
        }
        self.fade_duration = self.fade_duration.max(0.0);
        self.fade_stagger = self.fade_stagger.max(0.0);
        self.hide_delay = self.hide_delay.max(0.0);
        if self.growth_interval <= 0.0 {
            self.growth_interval = PaletteSettings::default().growth_interval;
        }
        self.max_placement_scale = self.max_placement_scale.filter(|m| *m > 0.0);
        self
    }
}

/// The palette widget attached to a controller.
#[derive(Component, Debug)]
pub struct ObjectPalette {
    /// Templates, one per item, in display order.
    pub prototypes: Vec<Prototype>,
    /// Live item entities, `items[i]` instantiated from `prototypes[i]`.
    pub items: Vec<Entity>,
    /// Scrollable parent of the items.
    pub container: Entity,
    /// Shared material placed objects are copied from.
    pub placement_material: MaterialHandle,
    pub settings: PaletteSettings,
    /// Pad axis seen on the previous frame.
    pub last_pad: Vector2,
    pub hide_task: Option<TaskHandle>,
    pub growth_task: Option<TaskHandle>,
    /// Object being placed while the trigger is held.
    pub current_item: Option<Entity>,
    pub hovered: Option<Entity>,
    pub grabbed: Option<Entity>,
}

impl ObjectPalette {
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Index of the item centered for the given container offset.
    pub fn selected_index(&self, offset: f32) -> usize {
        selected_index(offset, self.settings.item_spacing, self.items.len())
    }
}

/// Marker for the scrollable parent of a palette's items.
#[derive(Component, Clone, Copy, Debug)]
pub struct PaletteContainer {
    /// Controller entity owning the palette.
    pub palette: Entity,
}

/// Marker for an item shown in a palette.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteItem {
    pub index: usize,
}

/// Marker for an object placed from a palette.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacedItem {
    /// Index of the prototype it was cloned from.
    pub prototype: usize,
}

/// `clamp(round(-offset / spacing), 0, count - 1)`.
///
/// Returns 0 for an empty palette.
pub fn selected_index(offset: f32, spacing: f32, count: usize) -> usize {
    if count == 0 || spacing <= 0.0 {
        return 0;
    }
    let raw = (-offset / spacing).round();
    raw.clamp(0.0, (count - 1) as f32) as usize
}

/// Most negative offset that still centers an item (the last one).
pub fn lower_bound(spacing: f32, count: usize) -> f32 {
    -(count.saturating_sub(1) as f32) * spacing
}

/// Apply rubber-band resistance to a container movement.
///
/// Inside `[lower_bound, 0]`, and when moving back towards the range, `dx`
/// is returned untouched. Moving further out past either end divides it by
/// `RUBBER_BAND_STIFFNESS * (1 + distance past the end)`.
pub fn damp_swipe(dx: f32, offset: f32, spacing: f32, count: usize) -> f32 {
    if offset > 0.0 && dx > 0.0 {
        return dx / (RUBBER_BAND_STIFFNESS * (1.0 + offset));
    }
    let lower = lower_bound(spacing, count);
    if offset < lower && dx < 0.0 {
        return dx / (RUBBER_BAND_STIFFNESS * (1.0 + (lower - offset)));
    }
    dx
}

/// Delay before item `index` starts fading in (first item first).
pub fn reveal_delay(index: usize, stagger: f32) -> f32 {
    index as f32 * stagger
}

/// Delay before item `index` starts fading out (last item first).
pub fn conceal_delay(index: usize, count: usize, stagger: f32) -> f32 {
    count.saturating_sub(index + 1) as f32 * stagger
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_selected_index_matches_times_five_rule() {
        let n = 5;
        for step in -40..=10 {
            let offset = step as f32 * 0.037;
            let expected = (-offset * 5.0).round().clamp(0.0, (n - 1) as f32) as usize;
            assert_eq!(selected_index(offset, 0.2, n), expected, "offset {}", offset);
        }
    }

    #[test]
    fn test_selected_index_boundaries() {
        assert_eq!(selected_index(0.0, 0.2, 4), 0);
        assert_eq!(selected_index(5.0, 0.2, 4), 0);
        assert_eq!(selected_index(-100.0, 0.2, 4), 3);
        assert_eq!(selected_index(f32::MAX, 0.2, 4), 0);
        assert_eq!(selected_index(-f32::MAX, 0.2, 4), 3);
        assert_eq!(selected_index(-0.6, 0.2, 4), 3);
    }

    #[test]
    fn test_selected_index_single_item() {
        assert_eq!(selected_index(-3.0, 0.2, 1), 0);
        assert_eq!(selected_index(3.0, 0.2, 1), 0);
    }

    #[test]
    fn test_selected_index_empty() {
        assert_eq!(selected_index(-0.4, 0.2, 0), 0);
    }

    #[test]
    fn test_damp_undamped_inside_range() {
        assert!(approx_eq(damp_swipe(0.05, -0.3, 0.2, 5), 0.05));
        assert!(approx_eq(damp_swipe(-0.05, -0.3, 0.2, 5), -0.05));
    }

    #[test]
    fn test_damp_undamped_at_boundaries() {
        assert!(approx_eq(damp_swipe(0.05, 0.0, 0.2, 5), 0.05));
        let lower = lower_bound(0.2, 5);
        assert!(approx_eq(damp_swipe(-0.05, lower, 0.2, 5), -0.05));
    }

    #[test]
    fn test_damp_undamped_when_returning() {
        assert!(approx_eq(damp_swipe(-0.05, 0.5, 0.2, 5), -0.05));
        assert!(approx_eq(damp_swipe(0.05, -2.0, 0.2, 5), 0.05));
    }

    #[test]
    fn test_damp_past_upper_end() {
        let d = damp_swipe(0.1, 0.5, 0.2, 5);
        assert!(approx_eq(d, 0.1 / (10.0 * 1.5)));
    }

    #[test]
    fn test_damp_past_lower_end() {
        // lower bound is -0.8, offset 0.2 past it
        let d = damp_swipe(-0.1, -1.0, 0.2, 5);
        assert!(approx_eq(d, -0.1 / (10.0 * 1.2)));
    }

    #[test]
    fn test_damp_factor_approaches_zero() {
        let mut previous = f32::MAX;
        for past in [0.1_f32, 1.0, 10.0, 100.0, 10_000.0] {
            let d = damp_swipe(1.0, past, 0.2, 3);
            assert!(d > 0.0 && d < previous);
            previous = d;
        }
        assert!(previous < 1e-4);
    }

    #[test]
    fn test_lower_bound() {
        assert!(approx_eq(lower_bound(0.2, 1), 0.0));
        assert!(approx_eq(lower_bound(0.2, 5), -0.8));
        assert!(approx_eq(lower_bound(0.2, 0), 0.0));
    }

    #[test]
    fn test_stagger_delays() {
        let n = 4;
        let reveal: Vec<f32> = (0..n).map(|i| reveal_delay(i, 0.04)).collect();
        assert!(reveal.windows(2).all(|w| w[1] > w[0]));
        assert!(approx_eq(reveal[0], 0.0));

        let conceal: Vec<f32> = (0..n).map(|i| conceal_delay(i, n, 0.04)).collect();
        assert!(conceal.windows(2).all(|w| w[1] < w[0]));
        assert!(approx_eq(conceal[n - 1], 0.0));
        assert!(approx_eq(conceal[0], 0.12));
    }

    #[test]
    fn test_settings_sanitized() {
        let s = PaletteSettings {
            swipe_sensitivity: 4.0,
            item_spacing: -1.0,
            growth_interval: 0.0,
            max_placement_scale: Some(-2.0),
            ..Default::default()
        }
        .sanitized();
        assert!(approx_eq(s.swipe_sensitivity, 1.0));
        assert!(approx_eq(s.item_spacing, 0.2));
        assert!(approx_eq(s.growth_interval, 0.01));
        assert!(s.max_placement_scale.is_none());
    }
}
