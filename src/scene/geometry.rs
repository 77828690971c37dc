//! Screen-space layout of the scene: where the slope, the stopper and the
//! object are drawn for a given state.

use glam::Vec2;

use crate::constants::{
    ANCHOR_X, ANCHOR_Y, CIRCLE_RADIUS, OBJECT_HEIGHT, OBJECT_WIDTH, SLOPE_RUN, STOPPER_LENGTH,
};
use crate::physics::decompose::{incline_direction, normal_direction};
use crate::scene::state::ObjectShape;

/// Lower-left end of the slope.
pub fn anchor() -> Vec2 {
    Vec2::new(ANCHOR_X, ANCHOR_Y)
}

/// Both ends of the drawn incline segment. The segment spans a fixed
/// horizontal run, so its far end leaves the window at steep angles.
pub fn incline_endpoints(angle_deg: f32) -> (Vec2, Vec2) {
    let start = anchor();
    let rise = angle_deg.to_radians().tan() * SLOPE_RUN;
    (start, start + Vec2::new(SLOPE_RUN, -rise))
}

/// Tip of the stopper segment, perpendicular to the slope at its base.
pub fn stopper_tip(angle_deg: f32) -> Vec2 {
    anchor() - STOPPER_LENGTH * normal_direction(angle_deg)
}

/// Point on the slope surface at `distance` from the anchor, measured along
/// the incline.
pub fn contact_point(angle_deg: f32, distance: f32) -> Vec2 {
    anchor() + distance * incline_direction(angle_deg)
}

/// Center of the object seated on the slope: the contact point pushed out
/// of the surface by half the height (rectangle) or the radius (circle).
pub fn object_center(angle_deg: f32, distance: f32, shape: ObjectShape) -> Vec2 {
    let offset = match shape {
        ObjectShape::Rectangle => OBJECT_HEIGHT / 2.0,
        ObjectShape::Circle => CIRCLE_RADIUS,
    };
    contact_point(angle_deg, distance) - offset * normal_direction(angle_deg)
}

/// Corners of the rectangle rotated to the incline angle, in drawing order.
pub fn rectangle_corners(center: Vec2, angle_deg: f32) -> [Vec2; 4] {
    let along = (OBJECT_WIDTH / 2.0) * incline_direction(angle_deg);
    let out = (OBJECT_HEIGHT / 2.0) * normal_direction(angle_deg);
    [
        center - along - out,
        center + along - out,
        center + along + out,
        center - along + out,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn contact_point_lies_on_the_slope() {
        for angle in [0.0f32, 30.0, 60.0] {
            let from_anchor = contact_point(angle, 200.0) - anchor();
            assert_relative_eq!(from_anchor.length(), 200.0, epsilon = 1e-3);
            assert_relative_eq!(
                -from_anchor.y,
                from_anchor.x * angle.to_radians().tan(),
                epsilon = 1e-3
            );
        }
    }

    #[test]
    fn incline_rises_to_the_right() {
        let (start, end) = incline_endpoints(30.0);
        assert_eq!(start, anchor());
        assert!(end.x > start.x);
        assert!(end.y < start.y);

        let (_, flat_end) = incline_endpoints(0.0);
        assert_relative_eq!(flat_end.y, anchor().y);
    }

    #[test]
    fn stopper_is_perpendicular_to_the_slope() {
        let angle = 40.0;
        let stopper = stopper_tip(angle) - anchor();
        assert_relative_eq!(stopper.dot(incline_direction(angle)), 0.0, epsilon = 1e-3);
        assert_relative_eq!(stopper.length(), STOPPER_LENGTH, epsilon = 1e-3);
    }

    #[test]
    fn object_center_is_offset_out_of_the_surface() {
        let angle = 30.0;
        let contact = contact_point(angle, 200.0);

        let rect_center = object_center(angle, 200.0, ObjectShape::Rectangle);
        assert_relative_eq!(
            (contact - rect_center).length(),
            OBJECT_HEIGHT / 2.0,
            epsilon = 1e-3
        );
        assert!(rect_center.y < contact.y);

        let circle_center = object_center(angle, 200.0, ObjectShape::Circle);
        assert_relative_eq!((contact - circle_center).length(), CIRCLE_RADIUS, epsilon = 1e-3);
    }

    #[test]
    fn rectangle_corners_agree_with_center_and_size() {
        let center = object_center(30.0, 200.0, ObjectShape::Rectangle);
        let corners = rectangle_corners(center, 30.0);

        let centroid = corners.iter().copied().sum::<Vec2>() / 4.0;
        assert_relative_eq!(centroid.x, center.x, epsilon = 1e-3);
        assert_relative_eq!(centroid.y, center.y, epsilon = 1e-3);

        assert_relative_eq!((corners[1] - corners[0]).length(), OBJECT_WIDTH, epsilon = 1e-3);
        assert_relative_eq!((corners[3] - corners[0]).length(), OBJECT_HEIGHT, epsilon = 1e-3);
    }
}
