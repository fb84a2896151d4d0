use mgrs_grid_rs::{
    GeoPoint, GridEngine, GridError, GridInterval, ViewportBounds, encode, forward,
};

fn main() -> Result<(), GridError> {
    let lat = 38.8894838;
    let lon = -77.0352515;

    let utm = forward(&GeoPoint::new(lat, lon))?;
    println!("UTM: {}{} {:.0}E {:.0}N", utm.zone_number, utm.zone_letter, utm.easting, utm.northing);
    println!("MGRS: {}", encode(&utm, 5)?);

    let viewport = ViewportBounds::new(39.2, 38.6, -76.6, -77.4, 9);
    let frame = GridEngine::new(GridInterval::Square100Km).run(&viewport)?;

    for cell in &frame.cells {
        println!("Zone: {}", cell.designator());
    }
    println!("Grid lines: {}", frame.grid.lines.len());
    println!("Square labels: {}", frame.grid.labels.len());

    Ok(())
}
