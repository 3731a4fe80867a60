use std::io;
use std::process;

use log::{debug, error};
use mmc3316::{open_mag_port, registers, report, report_open_failure};


fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn")).init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let code = match open_mag_port() {
        Ok(mut mag) => {
            debug!("bound to {:#04x} on {}", mag.address(), registers::BUS_PATH);
            report(mag.measure(), &mut out)
        }
        Err(e) => report_open_failure(&e, &mut out),
    };

    match code {
        Ok(0) => {}
        Ok(code) => process::exit(code),
        Err(e) => {
            error!("stdout: {}", e);
            process::exit(1);
        }
    }
}
