pub mod layer;
pub mod paint;

use crate::constants::{ANGLE_MAX_DEG, ANGLE_MIN_DEG, GRAVITY_MAX, GRAVITY_MIN, WIDTH};
use crate::scene::state::{ObjectShape, SceneState};

/// Panel copy of the editable simulation values, refreshed from the scene
/// before the panel runs and written back after it (same clamps as the
/// keyboard).
#[derive(Clone, Debug)]
pub struct UiState {
    pub angle_deg: f32,
    pub friction: f32,
    pub gravity: f32,
    pub shape: ObjectShape,
    reset_requested: bool,
}

impl UiState {
    pub fn from_scene(scene: &SceneState) -> Self {
        Self {
            angle_deg: scene.incline_angle_deg,
            friction: scene.friction_coeff,
            gravity: scene.gravity,
            shape: scene.shape,
            reset_requested: false,
        }
    }

    pub fn refresh(&mut self, scene: &SceneState) {
        self.angle_deg = scene.incline_angle_deg;
        self.friction = scene.friction_coeff;
        self.gravity = scene.gravity;
        self.shape = scene.shape;
    }

    pub fn request_reset(&mut self) {
        self.reset_requested = true;
    }

    pub fn take_reset_request(&mut self) -> bool {
        let requested = self.reset_requested;
        self.reset_requested = false;
        requested
    }
}

/// Build the control panel window.
pub fn build_controls(ctx: &egui::Context, ui_state: &mut UiState, scene: &SceneState) {
    use egui::Slider;

    egui::Window::new("Scene Controls")
        .default_pos(egui::pos2(WIDTH - 280.0, 20.0))
        .default_width(240.0)
        .resizable(false)
        .show(ctx, |ui| {
            ui.add(
                Slider::new(&mut ui_state.angle_deg, ANGLE_MIN_DEG..=ANGLE_MAX_DEG)
                    .text("Incline angle"),
            );
            ui.add(Slider::new(&mut ui_state.friction, 0.0..=1.0).text("Friction"));
            ui.add(Slider::new(&mut ui_state.gravity, GRAVITY_MIN..=GRAVITY_MAX).text("Gravity"));

            ui.separator();

            ui.horizontal(|ui| {
                for shape in [ObjectShape::Rectangle, ObjectShape::Circle] {
                    if ui
                        .selectable_label(ui_state.shape == shape, shape.label())
                        .clicked()
                    {
                        ui_state.shape = shape;
                    }
                }
            });

            ui.separator();

            ui.label(format!("Velocity: {:+.1} px/s", scene.velocity));
            ui.label(format!("Applied force: {:+.1}", scene.applied_force));
            ui.label(format!("Distance: {:.0} px", scene.distance));

            if ui.button("Reset").clicked() {
                ui_state.request_reset();
            }
        });
}
