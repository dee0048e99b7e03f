pub mod csv;

pub use self::csv::{CoordinateSource, CsvToTripcode, CsvTripcodeConfig, csv_to_tripcode_csv};
