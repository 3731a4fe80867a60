use mmc3316::{open_mag_port, Axis, Reading};


fn main() {
    env_logger::init();

    let mut mag = match open_mag_port() {
        Ok(mag) => mag,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = mag.configure() {
        eprintln!("{}", e);
        return;
    }
    let raw = match mag.read_raw() {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };

    println!("raw {:02x?}", raw);
    match Reading::from_bytes(&raw) {
        Ok(reading) => {
            for axis in Axis::ALL.iter() {
                println!("{}: {:>6}", axis, reading.axis(*axis));
            }
        }
        Err(e) => eprintln!("{}", e),
    }
}
