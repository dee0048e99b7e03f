//! # tripcode-rs
//!
//! Encodes a WGS84 latitude/longitude into a 12-character tripcode such as
//! `NLL-CJZ-QZNS`, and back. Codes use a 28-symbol alphabet with no vowels and
//! no easily confused digits, and resolve to about 0.000021° of longitude and
//! half that of latitude.
//!
//! There are currently three main entry points.
//!
//! ### 1. `TripcodeCodec` - Encode, Decode, Shift
//!
//! ```
//! use tripcode_rs::TripcodeCodec;
//!
//! # fn main() -> Result<(), tripcode_rs::TripcodeError> {
//! let codec = TripcodeCodec::shared();
//! let code = codec.encode(48.858370, 2.294481)?;
//! assert_eq!(code, "RJJ-5GG-5BFN");
//!
//! let (lat, lng) = codec.decode("rjj5gg5bfn")?;
//! let neighbour = codec.shift(&code, 1)?;
//! let short = codec.shorten(&code)?;
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `TripcodeCell` / `Tripcode` - Typed Codes
//!
//! ```
//! use tripcode_rs::{Tripcode, TripcodeCell};
//! use geo_types::point;
//!
//! # fn main() -> Result<(), tripcode_rs::TripcodeError> {
//! let cell = TripcodeCell::from_wgs84(&point! { x: 31.134202, y: 29.979235 })?;
//! let footprint = cell.to_polygon();
//!
//! let code: Tripcode = cell.code.parse()?;
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `CsvToTripcode` - CSV File Conversion
//!
//! ```no_run
//! use tripcode_rs::{CsvToTripcode, CsvTripcodeConfig, GeometryFormat};
//!
//! let config = CsvTripcodeConfig::from_coords("Longitude", "Latitude")
//!     .with_center_geometry(GeometryFormat::GeoJson);
//!
//! "input.csv".to_tripcode_csv("output.csv", &config).unwrap();
//! ```

pub mod api;
pub mod core;
pub mod geom;
pub mod io;
pub mod util;

pub use api::{Tripcode, TripcodeCell, TripcodeCodec, decode, encode, encode_short, shift};
pub use crate::core::{
    ALPHABET, BASE, CODE_DIGITS, CODE_LEN, CodecTables, MAX_SCALED, SEPARATOR, SHORT_CODE_DIGITS,
};
pub use geom::{GeometryFormat, parse_point};
pub use io::{CoordinateSource, CsvToTripcode, CsvTripcodeConfig, csv_to_tripcode_csv};
pub use util::{Coordinate, TripcodeError, validate_wgs84};

pub use geo_types;

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::point;

    const LANDMARKS: [(&str, f64, f64); 10] = [
        ("Pyramids of Giza", 29.979235, 31.134202),
        ("Eiffel Tower", 48.858370, 2.294481),
        ("Tower of London", 51.508112, -0.075949),
        ("Golden Gate Bridge", 37.819929, -122.478255),
        ("Acropolis of Athens", 37.971532, 23.725749),
        ("Hermitage Museum", 59.939832, 30.314560),
        ("The Louvre", 48.860611, 2.337644),
        ("Washington Monument", 38.889484, -77.035279),
        ("Grand Canyon", 36.106965, -112.112997),
        ("Machu Picchu", -13.163141, -72.544963),
    ];

    #[test]
    fn test_end_to_end_workflow() -> Result<(), TripcodeError> {
        let codec = TripcodeCodec::shared();
        assert_eq!(codec.accuracy(), 0.000021);

        for (name, lat, lng) in LANDMARKS {
            let code = encode(lat, lng)?;
            assert_eq!(code.len(), CODE_LEN, "{}", name);
            assert_eq!(&code[3..4], "-");
            assert_eq!(&code[7..8], "-");

            let (dlat, dlng) = decode(&code)?;
            assert!((dlat - lat).abs() < codec.accuracy(), "{}", name);
            assert!((dlng - lng).abs() < codec.accuracy(), "{}", name);

            let cell = TripcodeCell::from_code(&code)?;
            assert_eq!(cell.code, code);
        }
        Ok(())
    }

    #[test]
    fn test_landmark_codes_are_distinct() -> Result<(), TripcodeError> {
        let mut codes = std::collections::HashSet::new();
        for (_, lat, lng) in LANDMARKS {
            assert!(codes.insert(encode(lat, lng)?));
        }
        Ok(())
    }

    #[test]
    fn test_typed_entry_points_agree() -> Result<(), TripcodeError> {
        let pt = point! { x: 2.337644, y: 48.860611 };

        let code = TripcodeCodec::shared().encode_point(&pt)?;
        let cell = TripcodeCell::from_wgs84(&pt)?;
        let typed = Tripcode::from_wgs84(&pt)?;

        assert_eq!(cell.code, code);
        assert_eq!(typed.as_str(), code);
        Ok(())
    }

    #[test]
    fn test_shared_codec_is_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TripcodeCodec>();
        assert_send_sync::<Tripcode>();
    }

    #[test]
    fn test_short_code_round_trip() -> Result<(), TripcodeError> {
        let short = encode_short(59.939832, 30.314560)?;
        assert_eq!(short.len(), SHORT_CODE_DIGITS + 1);
        assert_eq!(&short[4..5], "-");

        let long = TripcodeCell::from_code(&short)?;
        assert_eq!(long.short_code()?, short);
        Ok(())
    }

    #[test]
    fn test_shift_walks_the_grid() -> Result<(), TripcodeError> {
        let start = encode(38.889484, -77.035279)?;
        let mut code = start.clone();
        for _ in 0..5 {
            code = shift(&code, 1)?;
        }
        assert_eq!(shift(&start, 5)?, code);
        Ok(())
    }
}
