//! # MMC3316xMT driver
//! Blocking, single-shot. Generic over the embedded-hal 0.2 blocking I2C and delay
//! traits so the wire sequence can be driven by a fake bus in tests.

use core::fmt::Debug;

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::i2c::{Read, Write};
use log::debug;

use crate::error::Error;
use crate::registers::{CONFIG_SEQUENCE, DEFAULT_ADDRESS, OUTPUT_LEN, SETTLE_MS, XOUT_LOW};
use crate::Reading;

pub struct Mmc3316<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
}

impl<I2C, D> Mmc3316<I2C, D> {
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self::with_address(i2c, delay, DEFAULT_ADDRESS)
    }

    pub fn with_address(i2c: I2C, delay: D, address: u8) -> Self {
        Mmc3316 { i2c, delay, address }
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Hand back the bus and delay.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }
}

impl<I2C, D, E> Mmc3316<I2C, D>
where
    I2C: Write<Error = E> + Read<Error = E>,
    D: DelayMs<u16>,
    E: Debug,
{
    /// Coil SET, coil off, coil RESET, then wait for the output block to settle.
    pub fn configure(&mut self) -> Result<(), Error<E>> {
        for cmd in CONFIG_SEQUENCE.iter() {
            debug!("write_reg {:#04X} = {:#04x}", cmd[0], cmd[1]);
            self.i2c.write(self.address, cmd).map_err(Error::Write)?;
        }
        debug!("settle {} ms", SETTLE_MS);
        self.delay.delay_ms(SETTLE_MS);
        Ok(())
    }

    /// Select the X low register and read the whole output block.
    pub fn read_raw(&mut self) -> Result<[u8; OUTPUT_LEN], Error<E>> {
        self.i2c
            .write(self.address, &[XOUT_LOW])
            .map_err(Error::Write)?;

        let mut buf = [0u8; OUTPUT_LEN];
        self.i2c
            .read(self.address, &mut buf)
            .map_err(Error::Read)?;
        debug!("output block {:02x?}", buf);
        Ok(buf)
    }

    /// Full single-shot sequence: configure, settle, read, decode.
    pub fn measure(&mut self) -> Result<Reading, Error<E>> {
        self.configure()?;
        let raw = self.read_raw()?;
        Ok(Reading::from_block(&raw))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Debug, PartialEq)]
    enum Op {
        Write(u8, Vec<u8>),
        Read(u8, usize),
        Delay(u16),
    }

    type Log = Rc<RefCell<Vec<Op>>>;

    struct FakeI2cPort {
        log: Log,
        output: [u8; OUTPUT_LEN],
        fail_read: bool,
        fail_write_at: Option<usize>,
        writes: usize,
    }

    impl FakeI2cPort {
        fn new(log: Log, output: [u8; OUTPUT_LEN]) -> Self {
            FakeI2cPort {
                log,
                output,
                fail_read: false,
                fail_write_at: None,
                writes: 0,
            }
        }
    }

    impl Write for FakeI2cPort {
        type Error = ();

        fn write(&mut self, addr: u8, bytes: &[u8]) -> Result<(), Self::Error> {
            let n = self.writes;
            self.writes += 1;
            if self.fail_write_at == Some(n) {
                return Err(());
            }
            self.log.borrow_mut().push(Op::Write(addr, bytes.to_vec()));
            Ok(())
        }
    }

    impl Read for FakeI2cPort {
        type Error = ();

        fn read(&mut self, addr: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
            if self.fail_read {
                return Err(());
            }
            self.log.borrow_mut().push(Op::Read(addr, buffer.len()));
            buffer.copy_from_slice(&self.output[..buffer.len()]);
            Ok(())
        }
    }

    struct FakeDelay {
        log: Log,
    }

    impl DelayMs<u16> for FakeDelay {
        fn delay_ms(&mut self, ms: u16) {
            self.log.borrow_mut().push(Op::Delay(ms));
        }
    }

    fn fake(output: [u8; OUTPUT_LEN]) -> (Log, Mmc3316<FakeI2cPort, FakeDelay>) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let i2c = FakeI2cPort::new(log.clone(), output);
        let delay = FakeDelay { log: log.clone() };
        (log, Mmc3316::new(i2c, delay))
    }

    #[test]
    fn wire_sequence() {
        let (log, mut mag) = fake([0; OUTPUT_LEN]);
        mag.measure().unwrap();

        let expected = vec![
            Op::Write(0x30, vec![0x07, 0x23]),
            Op::Write(0x30, vec![0x07, 0x00]),
            Op::Write(0x30, vec![0x07, 0x43]),
            Op::Delay(1000),
            Op::Write(0x30, vec![0x00]),
            Op::Read(0x30, 6),
        ];
        assert_eq!(*log.borrow(), expected);
    }

    #[test]
    fn measure_decodes_block() {
        let (_log, mut mag) = fake([0x2C, 0x01, 0xD4, 0x3E, 0x00, 0x60]);
        let reading = mag.measure().unwrap();
        assert_eq!(reading, Reading { x: 300, y: -300, z: -8192 });
    }

    #[test]
    fn configure_only_delays_after_last_write() {
        let (log, mut mag) = fake([0; OUTPUT_LEN]);
        mag.configure().unwrap();

        let ops = log.borrow();
        assert_eq!(ops.len(), 4);
        assert_eq!(ops[3], Op::Delay(SETTLE_MS));
        assert!(ops[..3].iter().all(|op| matches!(op, Op::Write(_, _))));
    }

    #[test]
    fn failed_read_yields_no_reading() {
        let (log, mut mag) = fake([0x01; OUTPUT_LEN]);
        mag.i2c.fail_read = true;

        match mag.measure() {
            Err(Error::Read(())) => {}
            other => panic!("expected read error, got {:?}", other),
        }
        // everything up to the register select went out, the read did not
        let expected = vec![
            Op::Write(0x30, vec![0x07, 0x23]),
            Op::Write(0x30, vec![0x07, 0x00]),
            Op::Write(0x30, vec![0x07, 0x43]),
            Op::Delay(1000),
            Op::Write(0x30, vec![0x00]),
        ];
        assert_eq!(*log.borrow(), expected);
    }

    #[test]
    fn failed_write_stops_sequence() {
        let (log, mut mag) = fake([0; OUTPUT_LEN]);
        mag.i2c.fail_write_at = Some(1);

        assert!(matches!(mag.measure(), Err(Error::Write(()))));
        assert_eq!(*log.borrow(), vec![Op::Write(0x30, vec![0x07, 0x23])]);
    }

    #[test]
    fn custom_address() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let i2c = FakeI2cPort::new(log.clone(), [0; OUTPUT_LEN]);
        let mut mag = Mmc3316::with_address(i2c, FakeDelay { log: log.clone() }, 0x31);
        assert_eq!(mag.address(), 0x31);

        mag.read_raw().unwrap();
        assert_eq!(
            *log.borrow(),
            vec![Op::Write(0x31, vec![0x00]), Op::Read(0x31, 6)]
        );
    }

    #[test]
    fn release_returns_bus() {
        let (_log, mag) = fake([7; OUTPUT_LEN]);
        let (i2c, _delay) = mag.release();
        assert_eq!(i2c.output, [7; OUTPUT_LEN]);
    }
}
