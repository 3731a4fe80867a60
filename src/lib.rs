//! # MMC3316 (MEMSIC MMC3316xMT 3-axis magnetic sensor)
//!
//! Single-shot reader for the MMC3316xMT on a Linux I2C bus. One call to
//! [`Mmc3316::measure`] runs the whole datasheet sequence:
//! - coil SET, coil off, coil RESET on Internal Control 0
//! - wait for the output block to settle
//! - select the X low register and read the six output bytes
//!
//! The output registers hold 14-bit two's-complement counts, low byte first. The
//! top two bits of every high byte are unused. No unit conversion is done here,
//! the values are raw counts.
//!
//! ## Wiring it up
//! ```no_run
//! let mut mag = mmc3316::open_mag_port().unwrap();
//! println!("{}", mag.measure().unwrap());
//! ```

extern crate linux_embedded_hal as hal;

pub mod error;
pub mod mmc3316;
pub mod registers;
pub mod report;

use core::fmt;

use hal::{Delay, I2cdev};

pub use crate::error::{Error, OpenError, ShortRead};
pub use crate::mmc3316::Mmc3316;
pub use crate::report::{report, report_open_failure};
use crate::registers::{BUS_PATH, OUTPUT_LEN, XOUT_LOW, YOUT_LOW, ZOUT_LOW};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        };
        f.write_str(label)
    }
}

/// One magnetometer sample in raw counts, each axis in [-8192, 8191].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reading {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

/// Sign-extend a 14-bit field packed as (lo, hi). Bits 6 and 7 of `hi` are ignored.
pub fn decode(lo: u8, hi: u8) -> i16 {
    let raw = (i16::from(hi & 0x3F) << 8) | i16::from(lo);
    if raw > 8191 {
        raw - 16384
    } else {
        raw
    }
}

impl Reading {
    /// Decode a complete output block.
    pub fn from_block(block: &[u8; OUTPUT_LEN]) -> Self {
        Self::decode_block(block)
    }

    /// Decode the output block. Bytes past the sixth are ignored.
    pub fn from_bytes(data: &[u8]) -> Result<Self, ShortRead> {
        if data.len() < OUTPUT_LEN {
            return Err(ShortRead {
                expected: OUTPUT_LEN,
                got: data.len(),
            });
        }
        Ok(Self::decode_block(data))
    }

    // caller guarantees at least OUTPUT_LEN bytes
    fn decode_block(data: &[u8]) -> Self {
        // the block starts at XOUT_LOW, so register numbers double as offsets
        let pair = |reg: u8| {
            let i = usize::from(reg - XOUT_LOW);
            decode(data[i], data[i + 1])
        };
        Reading {
            x: pair(XOUT_LOW),
            y: pair(YOUT_LOW),
            z: pair(ZOUT_LOW),
        }
    }

    pub fn axis(&self, axis: Axis) -> i16 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, axis) in Axis::ALL.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "Magnetic field in {}-Axis : {}", axis, self.axis(*axis))?;
        }
        Ok(())
    }
}

/// Open an I2C character device.
pub fn open_bus(path: &str) -> Result<I2cdev, OpenError> {
    I2cdev::new(path).map_err(|source| OpenError {
        path: path.to_string(),
        source,
    })
}

/// Open the fixed bus and bind a driver to the sensor's fixed address.
pub fn open_mag_port() -> Result<Mmc3316<I2cdev, Delay>, OpenError> {
    let i2c = open_bus(BUS_PATH)?;
    Ok(Mmc3316::new(i2c, Delay))
}
