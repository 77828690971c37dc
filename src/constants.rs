use egui::Color32;

// Scene layout (logical points)
pub const WIDTH: f32 = 1000.0;
pub const HEIGHT: f32 = 700.0;
pub const ANCHOR_X: f32 = 100.0; // lower-left end of the slope
pub const ANCHOR_Y: f32 = HEIGHT - 100.0;
pub const SLOPE_RUN: f32 = WIDTH; // horizontal extent of the drawn slope
pub const STOPPER_LENGTH: f32 = 50.0;

// Object dimensions
pub const OBJECT_WIDTH: f32 = 80.0;
pub const OBJECT_HEIGHT: f32 = 50.0;
pub const CIRCLE_RADIUS: f32 = OBJECT_WIDTH;

// Simulation defaults
pub const DEFAULT_ANGLE_DEG: f32 = 30.0;
pub const DEFAULT_GRAVITY: f32 = 200.0; // pixels/s^2
pub const DEFAULT_FRICTION: f32 = 0.2;
pub const DEFAULT_DISTANCE: f32 = 200.0;

// Input steps and clamp bounds
pub const ANGLE_MIN_DEG: f32 = 0.0;
pub const ANGLE_MAX_DEG: f32 = 85.0;
pub const ANGLE_STEP_DEG: f32 = 5.0;
pub const DISTANCE_MIN: f32 = 50.0; // stopper boundary
pub const DISTANCE_MAX: f32 = WIDTH - 100.0;
pub const DISTANCE_STEP: f32 = 10.0;
pub const FRICTION_STEP: f32 = 0.05;
pub const GRAVITY_MIN: f32 = 50.0;
pub const GRAVITY_MAX: f32 = 400.0;

// Mouse drag projected onto the incline is scaled by this factor
pub const DRAG_FORCE_SCALE: f32 = 5.0;
// Display scale for the gravity vector
pub const GRAVITY_DISPLAY_SCALE: f32 = 0.5;
// Longest interval a single frame is allowed to integrate
pub const MAX_FRAME_DT: f32 = 0.1;

// Palette
pub const COLOR_BACKGROUND: wgpu::Color = wgpu::Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};
pub const COLOR_INCLINE: Color32 = Color32::BLACK;
pub const COLOR_OBJECT: Color32 = Color32::from_rgb(200, 200, 200);
pub const COLOR_APPLIED: Color32 = Color32::from_rgb(220, 50, 50);
pub const COLOR_PARALLEL: Color32 = Color32::from_rgb(50, 200, 50);
pub const COLOR_NORMAL: Color32 = Color32::from_rgb(50, 50, 220);
pub const COLOR_GRAVITY: Color32 = Color32::from_rgb(230, 200, 50);
pub const COLOR_TEXT: Color32 = Color32::BLACK;
