//! Console output of the single-shot binary. Each function writes its lines and
//! returns the exit code the process should end with.

use core::fmt::Debug;
use std::io;

use log::error;

use crate::error::{Error, OpenError};
use crate::Reading;

pub const OPEN_FAILED: &str = "Failed to open the bus.";
pub const IO_ERROR: &str = "Error : Input/output Error";

/// Print the three axis lines, or the I/O error line and nothing else.
/// A bad sample is not a failed run, so the exit code is always 0.
pub fn report<E, W>(res: Result<Reading, Error<E>>, out: &mut W) -> io::Result<i32>
where
    E: Debug,
    W: io::Write,
{
    match res {
        Ok(reading) => writeln!(out, "{}", reading)?,
        Err(e) => {
            error!("{}", e);
            writeln!(out, "{}", IO_ERROR)?;
        }
    }
    Ok(0)
}

/// Print the bus open failure. Exit code 1.
pub fn report_open_failure<W: io::Write>(err: &OpenError, out: &mut W) -> io::Result<i32> {
    error!("{}: {:?}", err, err.source);
    writeln!(out, "{}", OPEN_FAILED)?;
    Ok(1)
}
