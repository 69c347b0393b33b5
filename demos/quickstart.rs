use chrono::Utc;
use duskline::{format_zone_display, resolve, JulianDate, SolarCoordinates, TerminatorCalculator};

fn main() {
    let now = Utc::now();
    let jd = JulianDate::from_utc(now);
    let sun = SolarCoordinates::at(jd);

    println!("{jd}");
    println!("GMST: {:.4} h", sun.gmst_hours);
    println!("Declination: {:.3}°", sun.declination_degrees());

    let polygon = TerminatorCalculator::default().calculate(now);
    println!(
        "Terminator at {}: {} vertices, dark cap {:?}",
        polygon.datetime(),
        polygon.vertices().len(),
        polygon.dark_cap()
    );

    for zone in ["Asia/Tokyo", "America/New_York", "Asia/Kathmandu", "bogus/zone"] {
        let info = resolve(zone, now);
        let display = format_zone_display(&info.zone_id);
        println!(
            "{:<20} {} (UTC{:+}) dst={}",
            display.full, info.local_time, info.utc_offset_hours, info.is_daylight_saving
        );
    }
}
