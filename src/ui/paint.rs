//! Scene painting with the egui painter: slope, stopper, object, and force
//! vectors with their incline-parallel/normal projections.

use egui::{Align2, Color32, FontId, Pos2, Stroke};
use glam::Vec2;

use crate::constants::{
    CIRCLE_RADIUS, COLOR_APPLIED, COLOR_GRAVITY, COLOR_INCLINE, COLOR_NORMAL, COLOR_OBJECT,
    COLOR_PARALLEL, COLOR_TEXT, GRAVITY_DISPLAY_SCALE,
};
use crate::physics::decompose::Decomposition;
use crate::scene::geometry;
use crate::scene::state::{ObjectShape, SceneState};

fn pos(v: Vec2) -> Pos2 {
    Pos2::new(v.x, v.y)
}

/// Paint the whole scene into the background layer. `drag_vector` is the
/// pointer offset from the object center while a drag is active.
pub fn scene(ctx: &egui::Context, state: &SceneState, drag_vector: Option<Vec2>) {
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Background,
        egui::Id::new("scene"),
    ));

    let angle = state.incline_angle_deg;

    let (slope_start, slope_end) = geometry::incline_endpoints(angle);
    painter.line_segment(
        [pos(slope_start), pos(slope_end)],
        Stroke::new(4.0, COLOR_INCLINE),
    );
    painter.line_segment(
        [pos(slope_start), pos(geometry::stopper_tip(angle))],
        Stroke::new(4.0, COLOR_INCLINE),
    );

    let center = geometry::object_center(angle, state.distance, state.shape);
    match state.shape {
        ObjectShape::Rectangle => {
            let corners = geometry::rectangle_corners(center, angle).map(pos).to_vec();
            painter.add(egui::Shape::convex_polygon(
                corners,
                COLOR_OBJECT,
                Stroke::NONE,
            ));
        }
        ObjectShape::Circle => {
            painter.circle_filled(pos(center), CIRCLE_RADIUS, COLOR_OBJECT);
        }
    }

    let gravity_vector = Vec2::new(0.0, state.gravity * GRAVITY_DISPLAY_SCALE);
    force_with_components(&painter, center, gravity_vector, angle, COLOR_GRAVITY, "Gravity");

    if let Some(drag) = drag_vector {
        force_with_components(&painter, center, drag, angle, COLOR_APPLIED, "Applied Force");
    }

    painter.text(
        Pos2::new(20.0, 20.0),
        Align2::LEFT_TOP,
        format!("Friction Coefficient: {:.2}", state.friction_coeff),
        FontId::proportional(16.0),
        COLOR_TEXT,
    );
}

/// Draw a force vector plus both projected components, each labelled at its
/// midpoint.
fn force_with_components(
    painter: &egui::Painter,
    origin: Vec2,
    vector: Vec2,
    angle_deg: f32,
    color: Color32,
    label: &str,
) {
    let end = origin + vector;
    painter.line_segment([pos(origin), pos(end)], Stroke::new(3.0, color));
    painter.circle_filled(pos(end), 4.0, color);

    let parts = Decomposition::of(vector, angle_deg);
    let parallel_end = origin + parts.parallel_vector(angle_deg);
    let normal_end = origin + parts.normal_vector(angle_deg);

    painter.line_segment(
        [pos(origin), pos(parallel_end)],
        Stroke::new(2.0, COLOR_PARALLEL),
    );
    painter.line_segment(
        [pos(origin), pos(normal_end)],
        Stroke::new(2.0, COLOR_NORMAL),
    );

    label_at_midpoint(painter, origin, end, label, color);
    label_at_midpoint(painter, origin, parallel_end, "Parallel", COLOR_PARALLEL);
    label_at_midpoint(painter, origin, normal_end, "Normal", COLOR_NORMAL);
}

fn label_at_midpoint(painter: &egui::Painter, a: Vec2, b: Vec2, text: &str, color: Color32) {
    let mid = (a + b) / 2.0;
    painter.text(
        pos(mid),
        Align2::LEFT_TOP,
        text,
        FontId::proportional(14.0),
        color,
    );
}
