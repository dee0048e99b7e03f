use crate::api::cell::TripcodeCell;
use crate::geom::{GeometryFormat, format_point, parse_point};
use crate::util::error::TripcodeError;
use log::debug;
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

enum SourceIndices {
    Geometry(usize),
    Coordinates { lng_idx: usize, lat_idx: usize },
}

#[derive(Debug, Clone)]
pub enum CoordinateSource {
    /// A single column containing a WKT or GeoJSON point
    GeometryColumn(String),
    /// Separate longitude and latitude columns
    CoordinateColumns {
        lng_column: String,
        lat_column: String,
    },
}

#[derive(Debug, Clone)]
pub struct CsvTripcodeConfig {
    pub source: CoordinateSource,
    pub exclude_columns: Vec<String>,
    pub include_center: Option<GeometryFormat>,
}

impl CsvTripcodeConfig {
    /// Create config for a CSV with a point geometry column (WKT or GeoJSON).
    ///
    /// # Example
    /// ```
    /// use tripcode_rs::CsvTripcodeConfig;
    ///
    /// let config = CsvTripcodeConfig::new("geometry");
    /// ```
    pub fn new(geometry_column: impl Into<String>) -> Self {
        Self {
            source: CoordinateSource::GeometryColumn(geometry_column.into()),
            exclude_columns: Vec::new(),
            include_center: None,
        }
    }

    /// Create config for a CSV with separate longitude/latitude columns.
    ///
    /// # Example
    /// ```
    /// use tripcode_rs::CsvTripcodeConfig;
    ///
    /// let config = CsvTripcodeConfig::from_coords("Longitude", "Latitude");
    /// ```
    pub fn from_coords(lng_column: impl Into<String>, lat_column: impl Into<String>) -> Self {
        Self {
            source: CoordinateSource::CoordinateColumns {
                lng_column: lng_column.into(),
                lat_column: lat_column.into(),
            },
            exclude_columns: Vec::new(),
            include_center: None,
        }
    }

    pub fn exclude(mut self, columns: Vec<String>) -> Self {
        self.exclude_columns = columns;
        self
    }

    // Include the decoded cell center in output.
    pub fn with_center_geometry(mut self, format: GeometryFormat) -> Self {
        self.include_center = Some(format);
        self
    }
}

pub trait CsvToTripcode {
    fn to_tripcode_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvTripcodeConfig,
    ) -> Result<(), TripcodeError>;
}

impl<P: AsRef<Path>> CsvToTripcode for P {
    fn to_tripcode_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvTripcodeConfig,
    ) -> Result<(), TripcodeError> {
        csv_to_tripcode_csv(self, output_path, config)
    }
}

fn find_column(headers: &csv::StringRecord, name: &str, role: &str) -> Result<usize, TripcodeError> {
    if name.is_empty() {
        return Err(TripcodeError::CsvError(format!(
            "{} column name cannot be empty",
            role
        )));
    }
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| TripcodeError::CsvError(format!("{} column '{}' not found", role, name)))
}

fn parse_field(record: &csv::StringRecord, idx: usize, role: &str) -> Result<f64, TripcodeError> {
    let field = record
        .get(idx)
        .ok_or_else(|| TripcodeError::CsvError(format!("Missing {} column at index {}", role, idx)))?
        .trim();
    field
        .parse()
        .map_err(|_| TripcodeError::CsvError(format!("Invalid {}: '{}'", role, field)))
}

/// Converts a CSV file with point geometry or lon/lat columns to a CSV with tripcodes.
///
/// The output starts with a `tripcode` column, then `tripcode_center` when
/// requested, then every input column that is neither a source column nor
/// excluded. Rows are streamed, and the first bad row aborts the conversion.
///
/// # Example
///
/// ```no_run
/// use tripcode_rs::{csv_to_tripcode_csv, CsvTripcodeConfig, GeometryFormat};
///
/// let config = CsvTripcodeConfig::from_coords("Longitude", "Latitude")
///     .exclude(vec!["Geo Point".into()])
///     .with_center_geometry(GeometryFormat::Wkt);
///
/// csv_to_tripcode_csv("landmarks.csv", "output.csv", &config).unwrap();
/// ```
pub fn csv_to_tripcode_csv(
    csv_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &CsvTripcodeConfig,
) -> Result<(), TripcodeError> {
    let file = File::open(csv_path).map_err(|e| TripcodeError::IoError(e.to_string()))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| TripcodeError::CsvError(e.to_string()))?
        .clone();

    // Source columns never appear in the output
    let (source_indices, mut exclude_indices) = match &config.source {
        CoordinateSource::GeometryColumn(col) => {
            let idx = find_column(&headers, col, "Geometry")?;
            (SourceIndices::Geometry(idx), HashSet::from([idx]))
        }
        CoordinateSource::CoordinateColumns {
            lng_column,
            lat_column,
        } => {
            let lng_idx = find_column(&headers, lng_column, "Longitude")?;
            let lat_idx = find_column(&headers, lat_column, "Latitude")?;
            (
                SourceIndices::Coordinates { lng_idx, lat_idx },
                HashSet::from([lng_idx, lat_idx]),
            )
        }
    };

    for col_name in &config.exclude_columns {
        if let Some(idx) = headers.iter().position(|h| h == col_name) {
            exclude_indices.insert(idx);
        }
    }

    let out_file = File::create(output_path).map_err(|e| TripcodeError::IoError(e.to_string()))?;
    let mut writer = csv::Writer::from_writer(out_file);

    let mut header_row: Vec<&str> = vec!["tripcode"];
    if config.include_center.is_some() {
        header_row.push("tripcode_center");
    }
    for (i, h) in headers.iter().enumerate() {
        if !exclude_indices.contains(&i) {
            header_row.push(h);
        }
    }
    writer
        .write_record(&header_row)
        .map_err(|e| TripcodeError::CsvError(e.to_string()))?;

    let mut rows = 0usize;
    for result in reader.records() {
        let record = result.map_err(|e| TripcodeError::CsvError(e.to_string()))?;

        let cell = match &source_indices {
            SourceIndices::Geometry(idx) => {
                let geom_str = record.get(*idx).ok_or_else(|| {
                    TripcodeError::CsvError(format!("Missing geometry column at index {}", idx))
                })?;
                TripcodeCell::from_wgs84(&parse_point(geom_str)?)?
            }
            SourceIndices::Coordinates { lng_idx, lat_idx } => {
                let lng = parse_field(&record, *lng_idx, "longitude")?;
                let lat = parse_field(&record, *lat_idx, "latitude")?;
                TripcodeCell::from_wgs84(&(lng, lat))?
            }
        };

        let mut row: Vec<String> = vec![cell.code.clone()];
        if let Some(format) = config.include_center {
            row.push(format_point(&cell.center, format));
        }
        for (i, field) in record.iter().enumerate() {
            if !exclude_indices.contains(&i) {
                row.push(field.to_string());
            }
        }
        writer
            .write_record(&row)
            .map_err(|e| TripcodeError::CsvError(e.to_string()))?;
        rows += 1;
    }

    writer
        .flush()
        .map_err(|e| TripcodeError::CsvError(e.to_string()))?;

    debug!("wrote {} tripcode rows", rows);
    Ok(())
}
