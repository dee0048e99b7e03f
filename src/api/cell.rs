use crate::api::codec::TripcodeCodec;
use crate::util::coord::Coordinate;
use crate::util::error::TripcodeError;
use geo_types::{Point, Polygon, Rect, coord};

/// A single quantization cell of the tripcode grid.
///
/// Every coordinate inside the cell encodes to the same `code`, and the code
/// decodes back to `center`.
///
/// # Example
///
/// ```
/// use tripcode_rs::TripcodeCell;
///
/// # fn main() -> Result<(), tripcode_rs::TripcodeError> {
/// let cell = TripcodeCell::from_wgs84(&(2.294481, 48.858370))?;
/// assert_eq!(cell.code, "RJJ-5GG-5BFN");
///
/// let polygon = cell.to_polygon();
/// assert_eq!(polygon.exterior().coords().count(), 5);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TripcodeCell {
    /// Canonical tripcode (`XXX-XXX-XXXX`)
    pub code: String,
    /// Decoded center, x = longitude, y = latitude
    pub center: Point<f64>,
    /// Scaled latitude, in latitude steps from -90
    pub lat_steps: u64,
    /// Scaled longitude, in longitude steps from -180
    pub lng_steps: u64,
}

impl TripcodeCell {
    fn from_scaled(codec: &TripcodeCodec, scaled: (u64, u64)) -> Result<Self, TripcodeError> {
        let code = codec.format_scaled(scaled)?;
        let (latitude, longitude) = codec.from_scaled(scaled);

        Ok(Self {
            code,
            center: Point::new(longitude, latitude),
            lat_steps: scaled.0,
            lng_steps: scaled.1,
        })
    }

    /// Create the cell containing a WGS84 (lon/lat) coordinate.
    pub fn from_wgs84(coord: &impl Coordinate) -> Result<Self, TripcodeError> {
        let codec = TripcodeCodec::shared();
        let scaled = codec.to_scaled(coord.y(), coord.x())?;
        Self::from_scaled(codec, scaled)
    }

    /// Create a cell from any accepted tripcode.
    ///
    /// The stored `code` is the canonical form, so short, lowercase or
    /// re-dashed input comes back normalized.
    ///
    /// ```
    /// use tripcode_rs::TripcodeCell;
    ///
    /// # fn main() -> Result<(), tripcode_rs::TripcodeError> {
    /// let cell = TripcodeCell::from_code("nllcjzqzns")?;
    /// assert_eq!(cell.code, "NLL-CJZ-QZNS");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_code(code: &str) -> Result<Self, TripcodeError> {
        let codec = TripcodeCodec::shared();
        let scaled = codec.scaled(code)?;
        Self::from_scaled(codec, scaled)
    }

    pub fn latitude(&self) -> f64 {
        self.center.y()
    }

    pub fn longitude(&self) -> f64 {
        self.center.x()
    }

    /// The cell `offset` steps away on both axes.
    pub fn offset(&self, offset: i64) -> Result<Self, TripcodeError> {
        let codec = TripcodeCodec::shared();
        let code = codec.shift(&self.code, offset)?;
        Self::from_scaled(codec, codec.scaled(&code)?)
    }

    /// The 8-digit short code of this cell.
    pub fn short_code(&self) -> Result<String, TripcodeError> {
        TripcodeCodec::shared().shorten(&self.code)
    }

    /// Footprint of the cell: half a step either side of the center on each axis.
    ///
    /// Cells on the domain edges extend past ±90 / ±180.
    pub fn to_rect(&self) -> Rect<f64> {
        let codec = TripcodeCodec::shared();
        let half_lat = codec.tables().latitude_step() / 2.0;
        let half_lng = codec.tables().longitude_step() / 2.0;

        Rect::new(
            coord! { x: self.longitude() - half_lng, y: self.latitude() - half_lat },
            coord! { x: self.longitude() + half_lng, y: self.latitude() + half_lat },
        )
    }

    /// Converts the cell footprint to a closed polygon.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.to_rect().to_polygon()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_wgs84_tuple_and_point() -> Result<(), TripcodeError> {
        let from_tuple = TripcodeCell::from_wgs84(&(31.134202, 29.979235))?;
        let from_point = TripcodeCell::from_wgs84(&Point::new(31.134202, 29.979235))?;

        assert_eq!(from_tuple, from_point);
        assert_eq!(from_tuple.code, "NLL-CJZ-QZNS");
        assert_eq!(from_tuple.lat_steps, 11_426_594);
        assert_eq!(from_tuple.lng_steps, 10_054_010);
        Ok(())
    }

    #[test]
    fn test_from_code_matches_from_wgs84() -> Result<(), TripcodeError> {
        let cell = TripcodeCell::from_wgs84(&(0.0, 0.0))?;
        let restored = TripcodeCell::from_code(&cell.code)?;
        assert_eq!(cell, restored);
        Ok(())
    }

    #[test]
    fn test_nearby_points_share_cell() -> Result<(), TripcodeError> {
        let cell = TripcodeCell::from_wgs84(&(-0.075949, 51.508112))?;
        let nudged = TripcodeCell::from_wgs84(&(cell.longitude() + 0.000001, cell.latitude()))?;
        assert_eq!(cell.code, nudged.code);
        Ok(())
    }

    #[test]
    fn test_center_inside_footprint() -> Result<(), TripcodeError> {
        let cell = TripcodeCell::from_wgs84(&(-122.478255, 37.819929))?;
        let rect = cell.to_rect();

        assert!(rect.min().x < cell.longitude() && cell.longitude() < rect.max().x);
        assert!(rect.min().y < cell.latitude() && cell.latitude() < rect.max().y);
        assert!((rect.width() - 0.000021).abs() < 1e-12);
        assert!((rect.height() - 0.0000105).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_offset() -> Result<(), TripcodeError> {
        let cell = TripcodeCell::from_code("HHX-XGG-XXHH")?;
        let next = cell.offset(1)?;

        assert_eq!(next.code, "HHX-XGG-XXJJ");
        assert_eq!(next.lat_steps, cell.lat_steps + 1);
        assert_eq!(next.lng_steps, cell.lng_steps + 1);
        assert!(cell.offset(-(cell.lat_steps as i64) - 1).is_err());
        Ok(())
    }

    #[test]
    fn test_short_code() -> Result<(), TripcodeError> {
        let cell = TripcodeCell::from_code("NLL-CJZ-QZNS")?;
        assert_eq!(cell.short_code()?, "NLLD-J2R2");
        Ok(())
    }
}
