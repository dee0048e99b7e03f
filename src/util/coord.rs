use crate::core::constants::{LATITUDE_OFFSET, LONGITUDE_OFFSET};
use crate::util::error::TripcodeError;
use geo_types::Point;

/// Trait for types that can provide x/y coordinates.
///
/// Implemented for `(f64, f64)` tuples and `geo_types::Point<f64>`.
/// For WGS84 input x is the longitude and y the latitude.
pub trait Coordinate {
    /// Returns the x-coordinate (longitude).
    fn x(&self) -> f64;
    /// Returns the y-coordinate (latitude).
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

/// Checks that a latitude/longitude pair lies within the encodable domain.
///
/// Both bounds are inclusive. NaN is rejected.
pub fn validate_wgs84(latitude: f64, longitude: f64) -> Result<(), TripcodeError> {
    if (-LATITUDE_OFFSET..=LATITUDE_OFFSET).contains(&latitude)
        && (-LONGITUDE_OFFSET..=LONGITUDE_OFFSET).contains(&longitude)
    {
        Ok(())
    } else {
        Err(TripcodeError::OutOfRangeInput {
            latitude,
            longitude,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_trait_tuple() {
        let tuple = (31.134202, 29.979235);
        assert_eq!(tuple.x(), 31.134202);
        assert_eq!(tuple.y(), 29.979235);
    }

    #[test]
    fn test_coordinate_trait_point() {
        let point = Point::new(31.134202, 29.979235);
        assert_eq!(point.x(), 31.134202);
        assert_eq!(point.y(), 29.979235);
    }

    #[test]
    fn test_validate_inclusive_bounds() -> Result<(), TripcodeError> {
        validate_wgs84(90.0, 180.0)?;
        validate_wgs84(-90.0, -180.0)?;
        validate_wgs84(0.0, 0.0)?;
        Ok(())
    }

    #[test]
    fn test_validate_rejects() {
        assert!(matches!(
            validate_wgs84(90.000001, 0.0),
            Err(TripcodeError::OutOfRangeInput { .. })
        ));
        assert!(validate_wgs84(0.0, -180.5).is_err());
        assert!(validate_wgs84(f64::NAN, 0.0).is_err());
        assert!(validate_wgs84(0.0, f64::INFINITY).is_err());
    }
}
