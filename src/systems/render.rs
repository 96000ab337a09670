//! Demo rendering.
//!
//! [`render_system`] draws every entity that has a [`Shape`], a
//! [`Renderer`] and a [`GlobalTransform3D`] inside raylib's 3D mode, using
//! the material's display color (base color plus emission). Primitives are
//! drawn axis-aligned and scaled by the world scale. Opaque shapes are drawn
//! before translucent ones; fully transparent ones are skipped.
//!
//! With [`DebugMode`] present, collider wireframes and a palette readout are
//! added on top.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::controller::{TouchSensor, TrackedController};
use crate::components::globaltransform3d::GlobalTransform3D;
use crate::components::palette::{ObjectPalette, PaletteContainer};
use crate::components::position::LocalPosition;
use crate::components::renderer::Renderer;
use crate::components::shape::Shape;
use crate::resources::camera3d::Camera3DRes;
use crate::resources::debugmode::DebugMode;
use crate::resources::materials::Materials;

fn draw_shape(d3: &mut impl RaylibDraw3D, shape: &Shape, gt: &GlobalTransform3D, color: Color) {
    match *shape {
        Shape::Cube { size } => d3.draw_cube(
            gt.position,
            size[0] * gt.scale.x,
            size[1] * gt.scale.y,
            size[2] * gt.scale.z,
            color,
        ),
        Shape::Sphere { radius } => {
            let s = gt.scale.x.max(gt.scale.y).max(gt.scale.z);
            d3.draw_sphere(gt.position, radius * s, color)
        }
    }
}

fn draw_collider(
    d3: &mut impl RaylibDraw3D,
    collider: &BoxCollider,
    gt: &GlobalTransform3D,
    color: Color,
) {
    let (min, max) = collider.aabb(gt.position, gt.scale);
    let center = Vector3::new(
        (min.x + max.x) * 0.5,
        (min.y + max.y) * 0.5,
        (min.z + max.z) * 0.5,
    );
    d3.draw_cube_wires(center, max.x - min.x, max.y - min.y, max.z - min.z, color);
}

/// Draw the scene and the HUD for one frame.
#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    camera: Res<Camera3DRes>,
    materials: Res<Materials>,
    drawables: Query<(&Shape, &GlobalTransform3D, &Renderer)>,
    colliders: Query<(&BoxCollider, &GlobalTransform3D, Has<TouchSensor>)>,
    palettes: Query<(&ObjectPalette, &TrackedController)>,
    containers: Query<&LocalPosition, With<PaletteContainer>>,
    debug: Option<Res<DebugMode>>,
) {
    let (mut opaque, mut translucent): (Vec<_>, Vec<_>) = drawables
        .iter()
        .filter_map(|(shape, gt, renderer)| {
            let color = materials.get(renderer.material)?.display_color();
            (color.a > 0).then_some((*shape, *gt, color))
        })
        .partition(|(_, _, color)| color.a == 255);
    opaque.append(&mut translucent);

    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::RAYWHITE);
    {
        let mut d3 = d.begin_mode3D(camera.0);
        d3.draw_grid(20, 0.1);
        for (shape, gt, color) in opaque.iter() {
            draw_shape(&mut d3, shape, gt, *color);
        }
        if debug.is_some() {
            for (collider, gt, sensor) in colliders.iter() {
                let color = if sensor { Color::ORANGE } else { Color::RED };
                draw_collider(&mut d3, collider, gt, color);
            }
        }
    }

    d.draw_text(
        "RMB: touch pad  LMB/Space: trigger  G: grip  WASDQE: move  F11: debug",
        10,
        10,
        16,
        Color::DARKGRAY,
    );
    let mut y = 34;
    for (palette, controller) in palettes.iter() {
        let offset = containers
            .get(palette.container)
            .map(|p| p.pos.x)
            .unwrap_or(0.0);
        let index = palette.selected_index(offset);
        let name = palette
            .prototypes
            .get(index)
            .map(|p| p.name.as_str())
            .unwrap_or("-");
        d.draw_text(&format!("selected: {}", name), 10, y, 16, Color::BLACK);
        y += 20;
        if debug.is_some() {
            let text = format!(
                "offset {:.3} pad {:.2} touched {} hovered {:?} grabbed {:?} placing {:?}",
                offset,
                controller.pad_axis.x,
                controller.pad_touched,
                palette.hovered,
                palette.grabbed,
                palette.current_item
            );
            d.draw_text(&text, 10, y, 10, Color::BLACK);
            y += 16;
        }
    }
    if debug.is_some() {
        let fps = d.get_fps();
        d.draw_text(&format!("FPS: {}", fps), 10, y, 10, Color::BLACK);
    }
}
