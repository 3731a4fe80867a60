//! # MMC3316xMT register map
//! Only the registers the single-shot read touches are listed here.
//!
//! Datasheet: MEMSIC MMC3316xMT, "Internal Control 0" and "Xout/Yout/Zout".

/// I2C character device the sensor hangs off.
pub const BUS_PATH: &str = "/dev/i2c-1";

/// 7-bit address of the MMC3316xMT.
pub const DEFAULT_ADDRESS: u8 = 0x30;

/// Internal Control 0
pub const CONTROL0: u8 = 0x07;

pub const XOUT_LOW: u8 = 0x00;
pub const YOUT_LOW: u8 = 0x02;
pub const ZOUT_LOW: u8 = 0x04;

// Control 0 values: take measurement, continuous mode, CM frequency 50 Hz
pub const CTRL0_SET: u8 = 0x23;
pub const CTRL0_NO_SET: u8 = 0x00;
pub const CTRL0_RESET: u8 = 0x43;

/// Settle time after the coil RESET before the output block is valid.
pub const SETTLE_MS: u16 = 1000;

/// xMag lsb, xMag msb, yMag lsb, yMag msb, zMag lsb, zMag msb
pub const OUTPUT_LEN: usize = 6;

/// Configuration writes, in the order the datasheet requires.
pub const CONFIG_SEQUENCE: [[u8; 2]; 3] = [
    [CONTROL0, CTRL0_SET],
    [CONTROL0, CTRL0_NO_SET],
    [CONTROL0, CTRL0_RESET],
];
