//! Angle conversions.
//!
//! Degrees are reduced modulo a full turn before conversion. The remainder keeps the sign of the input, so
//! `-450` degrees becomes `-90` degrees and not `270`.

use std::f64::consts::PI;

/// Converts degrees into radians.
pub fn degrees_to_radians(degrees: f64) -> f64 {
    (degrees % 360.0) * PI / 180.0
}

/// Converts radians into degrees.
pub fn radians_to_degrees(radians: f64) -> f64 {
    (radians % (2.0 * PI)) * 180.0 / PI
}

/// Converts any bearing into an azimuth in the range `[0, 360)`.
pub fn bearing_to_azimuth(bearing: f64) -> f64 {
    let angle = bearing % 360.0;
    if angle < 0.0 {
        angle + 360.0
    } else {
        angle
    }
}

/// Wraps a longitude into the range `(-180, 180]`.
pub fn normalize_longitude(lng: f64) -> f64 {
    let lng = lng % 360.0;
    if lng > 180.0 {
        lng - 360.0
    } else if lng <= -180.0 {
        lng + 360.0
    } else {
        lng
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn degrees_radians() {
        assert_eq!(degrees_to_radians(180.0), PI);
        assert_eq!(degrees_to_radians(360.0), 0.0);
        assert_abs_diff_eq!(degrees_to_radians(-450.0), -PI / 2.0, epsilon = 1e-15);
        assert_eq!(radians_to_degrees(PI), 180.0);
        assert_abs_diff_eq!(radians_to_degrees(-PI / 2.0), -90.0, epsilon = 1e-12);
    }

    #[test]
    fn azimuth() {
        assert_eq!(bearing_to_azimuth(40.0), 40.0);
        assert_eq!(bearing_to_azimuth(-105.0), 255.0);
        assert_eq!(bearing_to_azimuth(410.0), 50.0);
        assert_eq!(bearing_to_azimuth(-200.0), 160.0);
        assert_eq!(bearing_to_azimuth(-360.0), 0.0);
    }

    #[test]
    fn longitude_wrapping() {
        assert_eq!(normalize_longitude(10.0), 10.0);
        assert_eq!(normalize_longitude(180.0), 180.0);
        assert_eq!(normalize_longitude(-180.0), 180.0);
        assert_eq!(normalize_longitude(190.0), -170.0);
        assert_eq!(normalize_longitude(-190.0), 170.0);
        assert_eq!(normalize_longitude(540.0), 180.0);
    }
}
