use crate::util::error::TripcodeError;
use geo_types::{Geometry, Point};
use geojson::GeoJson;
use std::str::FromStr;
use wkt::{ToWkt, Wkt};

/// Output format for geometry columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryFormat {
    /// Well-Known Text format (e.g., "POINT(2.29 48.85)")
    Wkt,
    /// GeoJSON format
    GeoJson,
}

/// Parses a geometry string into a point, auto-detecting WKT or GeoJSON.
///
/// GeoJSON is detected by a leading `{`, everything else is tried as WKT.
/// Anything other than a single point is rejected.
pub fn parse_point(s: &str) -> Result<Point<f64>, TripcodeError> {
    let trimmed = s.trim();
    let geom = if trimmed.starts_with('{') {
        parse_geojson(trimmed)?
    } else {
        parse_wkt(trimmed)?
    };

    match geom {
        Geometry::Point(pt) => Ok(pt),
        other => Err(TripcodeError::GeometryParseError(format!(
            "Expected a point, found {}",
            geometry_name(&other)
        ))),
    }
}

/// Parses a GeoJSON string into a `geo_types::Geometry`.
pub fn parse_geojson(s: &str) -> Result<Geometry<f64>, TripcodeError> {
    let geojson: GeoJson = s
        .parse()
        .map_err(|e: geojson::Error| TripcodeError::GeometryParseError(e.to_string()))?;

    match geojson {
        GeoJson::Geometry(geom) => {
            Geometry::try_from(geom).map_err(|e| TripcodeError::GeometryParseError(e.to_string()))
        }
        GeoJson::Feature(feat) => feat
            .geometry
            .ok_or_else(|| TripcodeError::GeometryParseError("Feature has no geometry".to_string()))
            .and_then(|g| {
                Geometry::try_from(g).map_err(|e| TripcodeError::GeometryParseError(e.to_string()))
            }),
        GeoJson::FeatureCollection(_) => Err(TripcodeError::GeometryParseError(
            "FeatureCollection not supported, use individual geometries".to_string(),
        )),
    }
}

/// Parses a WKT string into a `geo_types::Geometry`.
pub fn parse_wkt(s: &str) -> Result<Geometry<f64>, TripcodeError> {
    let wkt: Wkt<f64> =
        Wkt::from_str(s).map_err(|e| TripcodeError::GeometryParseError(e.to_string()))?;

    wkt.try_into().map_err(|_| {
        TripcodeError::GeometryParseError("Failed to convert WKT to geometry".to_string())
    })
}

/// Writes a point in the requested format.
pub fn format_point(point: &Point<f64>, format: GeometryFormat) -> String {
    match format {
        GeometryFormat::Wkt => point.wkt_string(),
        GeometryFormat::GeoJson => {
            geojson::Geometry::new(geojson::Value::from(point)).to_string()
        }
    }
}

fn geometry_name(geom: &Geometry<f64>) -> &'static str {
    match geom {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}
