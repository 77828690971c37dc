//! Scalar force and integration math along the incline axis. Uphill is
//! positive; mass is normalized to 1 so force and acceleration coincide.

/// Gravity component along the incline, negative for any raised slope.
pub fn gravity_parallel(gravity: f32, angle_deg: f32) -> f32 {
    -gravity * angle_deg.to_radians().sin()
}

/// Maximum Coulomb friction magnitude for the incline (same bound for the
/// static and the kinetic case).
pub fn friction_magnitude(gravity: f32, friction_coeff: f32, angle_deg: f32) -> f32 {
    friction_coeff * gravity * angle_deg.to_radians().cos()
}

/// Net acceleration along the incline after friction. Returns exactly 0.0
/// while the driving force cannot overcome the friction threshold.
pub fn net_acceleration(
    gravity: f32,
    friction_coeff: f32,
    angle_deg: f32,
    applied_force: f32,
) -> f32 {
    let driving = gravity_parallel(gravity, angle_deg) + applied_force;
    let friction = friction_magnitude(gravity, friction_coeff, angle_deg);
    if driving.abs() > friction {
        driving - friction.copysign(driving)
    } else {
        0.0
    }
}

/// One semi-implicit Euler step: velocity first, then position from the
/// updated velocity.
pub fn integrate(velocity: &mut f32, distance: &mut f32, acceleration: f32, dt: f32) {
    *velocity += acceleration * dt;
    *distance += *velocity * dt;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn gravity_component_on_a_thirty_degree_slope() {
        assert_relative_eq!(gravity_parallel(200.0, 30.0), -100.0, epsilon = 1e-3);
        assert_relative_eq!(friction_magnitude(200.0, 0.2, 30.0), 34.641, epsilon = 1e-3);
    }

    #[test]
    fn thirty_degree_slope_overcomes_friction() {
        let acc = net_acceleration(200.0, 0.2, 30.0, 0.0);
        assert_relative_eq!(acc, -100.0 + 34.641, epsilon = 1e-3);
        assert!(acc < 0.0);
    }

    #[test]
    fn flat_ground_stays_at_rest_for_any_friction() {
        for friction in [0.05, 0.2, 1.0] {
            assert_eq!(net_acceleration(200.0, friction, 0.0, 0.0), 0.0);
        }
    }

    #[test]
    fn friction_threshold_holds_across_angle_and_friction_ranges() {
        let g = 200.0;
        for angle in (0..=85).step_by(5) {
            let angle = angle as f32;
            for tenths in 0..=10 {
                let friction = tenths as f32 / 10.0;
                let balance = g * angle.to_radians().sin();
                let limit = friction_magnitude(g, friction, angle);
                assert_eq!(net_acceleration(g, friction, angle, balance + limit * 0.9), 0.0);
                assert_eq!(net_acceleration(g, friction, angle, balance - limit * 0.9), 0.0);
            }
        }
    }

    #[test]
    fn kinetic_friction_opposes_the_driving_force() {
        let acc = net_acceleration(200.0, 0.2, 30.0, 250.0);
        // driving = -100 + 250 = 150, friction ~ 34.641 against it
        assert_relative_eq!(acc, 150.0 - 34.641, epsilon = 1e-3);

        let acc = net_acceleration(200.0, 0.2, 30.0, -100.0);
        assert_relative_eq!(acc, -200.0 + 34.641, epsilon = 1e-3);
    }

    #[test]
    fn integration_is_semi_implicit() {
        let mut velocity = 0.0;
        let mut distance = 200.0;
        integrate(&mut velocity, &mut distance, 10.0, 0.5);
        assert_relative_eq!(velocity, 5.0);
        assert_relative_eq!(distance, 202.5);
    }
}
