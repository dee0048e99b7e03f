mod parse;

pub use parse::{GeometryFormat, format_point, parse_geojson, parse_point, parse_wkt};
