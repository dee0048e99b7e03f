use tripcode_rs::{TripcodeCell, TripcodeError};

fn main() -> Result<(), TripcodeError> {
    env_logger::init();

    let lon = 31.134202;
    let lat = 29.979235;

    let cell = TripcodeCell::from_wgs84(&(lon, lat))?;

    println!("Tripcode: {}", cell.code);
    println!("Short code: {}", cell.short_code()?);
    println!("Center: ({}, {})", cell.latitude(), cell.longitude());
    println!("Steps: lat {}, lng {}", cell.lat_steps, cell.lng_steps);

    let polygon = cell.to_polygon();
    println!("Footprint: {:?}", polygon);

    Ok(())
}
