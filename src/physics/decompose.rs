//! Projection of display vectors onto the incline axes. Screen Y grows
//! downward, so the uphill direction has a negative Y component.

use glam::Vec2;

/// Unit vector along the slope surface, pointing uphill.
pub fn incline_direction(angle_deg: f32) -> Vec2 {
    let theta = angle_deg.to_radians();
    Vec2::new(theta.cos(), -theta.sin())
}

/// Unit vector perpendicular to the slope, pointing into the surface.
pub fn normal_direction(angle_deg: f32) -> Vec2 {
    let theta = angle_deg.to_radians();
    Vec2::new(theta.sin(), theta.cos())
}

/// A display vector split into its incline-parallel and normal magnitudes.
#[derive(Clone, Copy, Debug)]
pub struct Decomposition {
    pub parallel: f32,
    pub normal: f32,
}

impl Decomposition {
    pub fn of(vector: Vec2, angle_deg: f32) -> Self {
        Self {
            parallel: vector.dot(incline_direction(angle_deg)),
            normal: vector.dot(normal_direction(angle_deg)),
        }
    }

    /// The parallel component as a screen-space vector.
    pub fn parallel_vector(&self, angle_deg: f32) -> Vec2 {
        self.parallel * incline_direction(angle_deg)
    }

    /// The normal component as a screen-space vector.
    pub fn normal_vector(&self, angle_deg: f32) -> Vec2 {
        self.normal * normal_direction(angle_deg)
    }
}
