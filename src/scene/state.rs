use serde::{Deserialize, Serialize};

use crate::constants::{
    ANGLE_MAX_DEG, ANGLE_MIN_DEG, ANGLE_STEP_DEG, DEFAULT_ANGLE_DEG, DEFAULT_DISTANCE,
    DEFAULT_FRICTION, DEFAULT_GRAVITY, DISTANCE_MAX, DISTANCE_MIN, DISTANCE_STEP, FRICTION_STEP,
    GRAVITY_MAX, GRAVITY_MIN,
};
use crate::physics::motion;

/// Shape of the sliding object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectShape {
    Rectangle,
    Circle,
}

impl ObjectShape {
    pub fn toggled(self) -> Self {
        match self {
            ObjectShape::Rectangle => ObjectShape::Circle,
            ObjectShape::Circle => ObjectShape::Rectangle,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ObjectShape::Rectangle => "Rectangle",
            ObjectShape::Circle => "Circle",
        }
    }
}

/// All simulation variables. Mutated in place by the input handlers and by
/// `step`; every setter clamps at the mutation site, so the invariants
/// (angle in [0, 85], friction in [0, 1], distance on the rail) hold at all
/// times.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SceneState {
    pub incline_angle_deg: f32,
    pub shape: ObjectShape,
    pub gravity: f32,
    pub friction_coeff: f32,
    /// Distance of the object's contact point from the slope anchor,
    /// measured along the incline.
    pub distance: f32,
    /// Signed velocity along the incline, uphill positive.
    pub velocity: f32,
    /// Signed applied force along the incline, re-derived from the drag
    /// state every frame.
    pub applied_force: f32,
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneState {
    pub fn new() -> Self {
        Self {
            incline_angle_deg: DEFAULT_ANGLE_DEG,
            shape: ObjectShape::Rectangle,
            gravity: DEFAULT_GRAVITY,
            friction_coeff: DEFAULT_FRICTION,
            distance: DEFAULT_DISTANCE,
            velocity: 0.0,
            applied_force: 0.0,
        }
    }

    /// Advance the simulation by `dt` seconds. Hitting either end of the
    /// rail clamps the distance and zeroes the velocity.
    pub fn step(&mut self, dt: f32) {
        let acceleration = motion::net_acceleration(
            self.gravity,
            self.friction_coeff,
            self.incline_angle_deg,
            self.applied_force,
        );
        motion::integrate(&mut self.velocity, &mut self.distance, acceleration, dt);

        if self.distance < DISTANCE_MIN {
            self.distance = DISTANCE_MIN;
            self.velocity = 0.0;
        } else if self.distance > DISTANCE_MAX {
            self.distance = DISTANCE_MAX;
            self.velocity = 0.0;
        }
    }

    pub fn tilt_up(&mut self) {
        self.set_angle(self.incline_angle_deg + ANGLE_STEP_DEG);
    }

    pub fn tilt_down(&mut self) {
        self.set_angle(self.incline_angle_deg - ANGLE_STEP_DEG);
    }

    pub fn set_angle(&mut self, angle_deg: f32) {
        self.incline_angle_deg = angle_deg.clamp(ANGLE_MIN_DEG, ANGLE_MAX_DEG);
    }

    pub fn nudge_downhill(&mut self) {
        self.set_distance(self.distance - DISTANCE_STEP);
    }

    pub fn nudge_uphill(&mut self) {
        self.set_distance(self.distance + DISTANCE_STEP);
    }

    pub fn set_distance(&mut self, distance: f32) {
        self.distance = distance.clamp(DISTANCE_MIN, DISTANCE_MAX);
    }

    pub fn increase_friction(&mut self) {
        self.set_friction(self.friction_coeff + FRICTION_STEP);
    }

    pub fn decrease_friction(&mut self) {
        self.set_friction(self.friction_coeff - FRICTION_STEP);
    }

    pub fn set_friction(&mut self, coeff: f32) {
        self.friction_coeff = coeff.clamp(0.0, 1.0);
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        self.gravity = gravity.clamp(GRAVITY_MIN, GRAVITY_MAX);
    }

    pub fn toggle_shape(&mut self) {
        self.shape = self.shape.toggled();
    }

    pub fn set_applied_force(&mut self, force: f32) {
        self.applied_force = force;
    }

    pub fn clear_applied_force(&mut self) {
        self.applied_force = 0.0;
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn tilt_clamps_to_bounds() {
        let mut scene = SceneState::new();
        for _ in 0..100 {
            scene.tilt_up();
        }
        assert_eq!(scene.incline_angle_deg, ANGLE_MAX_DEG);
        for _ in 0..100 {
            scene.tilt_down();
        }
        assert_eq!(scene.incline_angle_deg, ANGLE_MIN_DEG);
    }

    #[test]
    fn friction_clamps_to_the_unit_interval() {
        let mut scene = SceneState::new();
        for _ in 0..100 {
            scene.increase_friction();
        }
        assert_eq!(scene.friction_coeff, 1.0);
        for _ in 0..100 {
            scene.decrease_friction();
        }
        assert_eq!(scene.friction_coeff, 0.0);
    }

    #[test]
    fn nudges_stay_on_the_rail() {
        let mut scene = SceneState::new();
        for _ in 0..200 {
            scene.nudge_downhill();
        }
        assert_eq!(scene.distance, DISTANCE_MIN);
        for _ in 0..200 {
            scene.nudge_uphill();
        }
        assert_eq!(scene.distance, DISTANCE_MAX);
    }

    #[test]
    fn shape_toggle_alternates() {
        let mut scene = SceneState::new();
        assert_eq!(scene.shape, ObjectShape::Rectangle);
        scene.toggle_shape();
        assert_eq!(scene.shape, ObjectShape::Circle);
        scene.toggle_shape();
        assert_eq!(scene.shape, ObjectShape::Rectangle);
    }

    #[test]
    fn flat_scene_stays_at_rest() {
        let mut scene = SceneState::new();
        scene.set_angle(0.0);
        for _ in 0..120 {
            scene.step(1.0 / 60.0);
        }
        assert_eq!(scene.velocity, 0.0);
        assert_relative_eq!(scene.distance, DEFAULT_DISTANCE);
    }

    #[test]
    fn default_scene_slides_down_into_the_stopper() {
        // 30 degrees with mu = 0.2 overcomes friction and slides downhill.
        let mut scene = SceneState::new();
        scene.step(1.0 / 60.0);
        assert!(scene.velocity < 0.0);

        for _ in 0..600 {
            scene.step(1.0 / 60.0);
        }
        assert_eq!(scene.distance, DISTANCE_MIN);
        assert_eq!(scene.velocity, 0.0);
    }

    #[test]
    fn strong_uphill_push_stops_at_the_rail_end() {
        let mut scene = SceneState::new();
        scene.set_applied_force(500.0);
        for _ in 0..3600 {
            scene.step(1.0 / 60.0);
        }
        assert_eq!(scene.distance, DISTANCE_MAX);
        assert_eq!(scene.velocity, 0.0);
    }

    #[test]
    fn stopper_zeroes_incoming_velocity() {
        let mut scene = SceneState::new();
        scene.set_distance(60.0);
        scene.velocity = -400.0;
        scene.step(0.1);
        assert_eq!(scene.distance, DISTANCE_MIN);
        assert_eq!(scene.velocity, 0.0);
    }

    #[test]
    fn reset_restores_the_defaults() {
        let mut scene = SceneState::new();
        scene.tilt_up();
        scene.toggle_shape();
        scene.set_applied_force(80.0);
        scene.step(0.5);
        scene.reset();
        assert_eq!(scene.incline_angle_deg, DEFAULT_ANGLE_DEG);
        assert_eq!(scene.shape, ObjectShape::Rectangle);
        assert_eq!(scene.distance, DEFAULT_DISTANCE);
        assert_eq!(scene.velocity, 0.0);
        assert_eq!(scene.applied_force, 0.0);
    }
}
