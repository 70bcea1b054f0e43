use crate::constants::{
    EKMAN_LAYER_DEPTH, EKMAN_MAX_VEER_DEG, WIND_REFERENCE_HEIGHT, WIND_SHEAR_EXPONENT,
};
use crate::utils::vector2d::Vector2D;

/// Stateless altitude-dependent wind model: a 1/7 power-law shear profile
/// above the reference height and an Ekman-style direction veer that
/// saturates with altitude. Directions are compass bearings the wind blows
/// toward, in degrees.
#[derive(Debug, Clone)]
pub struct WindProfile {
    pub ground_speed: f64,     // m/s at the reference height
    pub ground_direction: f64, // degrees
    pub gust_factor: f64,      // multiplier on sustained speed, >= 1
}

impl WindProfile {
    pub fn new(ground_speed: f64, ground_direction: f64, gust_factor: f64) -> Self {
        WindProfile {
            ground_speed: ground_speed.max(0.0),
            ground_direction,
            gust_factor: gust_factor.max(1.0),
        }
    }

    pub fn calm() -> Self {
        WindProfile::new(0.0, 0.0, 1.0)
    }

    /// Sustained speed at altitude; constant below the reference height.
    pub fn speed_at(&self, altitude: f64) -> f64 {
        if self.ground_speed == 0.0 {
            return 0.0;
        }
        let height = altitude.max(WIND_REFERENCE_HEIGHT);
        self.ground_speed * (height / WIND_REFERENCE_HEIGHT).powf(WIND_SHEAR_EXPONENT)
    }

    /// Direction veers with altitude, saturating at the Ekman limit.
    pub fn direction_at(&self, altitude: f64) -> f64 {
        let veer = EKMAN_MAX_VEER_DEG * (1.0 - (-altitude.max(0.0) / EKMAN_LAYER_DEPTH).exp());
        self.ground_direction + veer
    }

    pub fn vector_at(&self, altitude: f64) -> Vector2D {
        let speed = self.speed_at(altitude);
        if speed == 0.0 {
            return Vector2D::zero();
        }
        let direction = self.direction_at(altitude).to_radians();
        Vector2D::new(speed * direction.sin(), speed * direction.cos())
    }

    /// Worst-case short-duration speed.
    pub fn gust_speed_at(&self, altitude: f64) -> f64 {
        self.speed_at(altitude) * self.gust_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_calm_profile_is_zero_everywhere() {
        let wind = WindProfile::calm();
        for altitude in [0.0, 10.0, 500.0, 3_000.0] {
            assert_eq!(wind.speed_at(altitude), 0.0);
            assert_eq!(wind.vector_at(altitude), Vector2D::zero());
        }
    }

    #[test]
    fn test_speed_grows_with_altitude() {
        let wind = WindProfile::new(5.0, 0.0, 1.4);
        assert_relative_eq!(wind.speed_at(0.0), 5.0, epsilon = 1e-12);
        assert_relative_eq!(wind.speed_at(WIND_REFERENCE_HEIGHT), 5.0, epsilon = 1e-12);
        assert!(wind.speed_at(100.0) > 5.0);
        assert!(wind.speed_at(1_000.0) > wind.speed_at(100.0));
    }

    #[test]
    fn test_speed_scales_with_ground_speed() {
        let light = WindProfile::new(3.0, 90.0, 1.0);
        let strong = WindProfile::new(9.0, 90.0, 1.0);
        for altitude in [0.0, 150.0, 800.0] {
            assert_relative_eq!(
                strong.speed_at(altitude),
                3.0 * light.speed_at(altitude),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_direction_veers_and_saturates() {
        let wind = WindProfile::new(5.0, 180.0, 1.0);
        assert_relative_eq!(wind.direction_at(0.0), 180.0, epsilon = 1e-9);
        let low = wind.direction_at(200.0);
        let high = wind.direction_at(2_000.0);
        assert!(low > 180.0);
        assert!(high > low);
        assert!(high <= 180.0 + EKMAN_MAX_VEER_DEG + 1e-9);
    }

    #[test]
    fn test_vector_matches_bearing() {
        let east = WindProfile::new(4.0, 90.0, 1.0);
        let vector = east.vector_at(0.0);
        assert_relative_eq!(vector.x, 4.0, epsilon = 1e-9);
        assert_relative_eq!(vector.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_gust_speed() {
        let wind = WindProfile::new(5.0, 0.0, 1.4);
        assert_relative_eq!(wind.gust_speed_at(0.0), 7.0, epsilon = 1e-9);
    }
}
