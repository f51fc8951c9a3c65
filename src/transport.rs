//! Byte links to the module.
//!
//! The driver only ever needs one capability from the hardware: deliver an
//! ordered run of bytes. Pacing, chip select and addressing are the link's
//! business and stay out of the command encoding.

use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::blocking::i2c;
use embedded_hal::blocking::spi;
use embedded_hal::digital::v2::OutputPin;
use embedded_hal::serial;

/// Delay between consecutive SPI bytes, in microseconds. The module's
/// synchronous serial interface drops bytes when they arrive back to back
/// at full clock.
const SPI_INTER_BYTE_DELAY_US: u16 = 10;

/// A write-only byte channel to the module.
pub trait Transport {
    /// Deliver every byte of `message`, in order, as one transfer.
    fn write(&mut self, message: &[u8]) -> Result<(), ()>;
}

/// SPI link with software chip select and inter-byte pacing.
pub struct SpiTransport<SPI, CS, D> {
    spi: SPI,
    cs: CS,
    delay: D,
}

impl<SPI, CS, D> SpiTransport<SPI, CS, D>
where
    SPI: spi::Write<u8>,
    CS: OutputPin,
    D: DelayUs<u16>,
{
    pub fn new(spi: SPI, cs: CS, delay: D) -> Self {
        SpiTransport { spi, cs, delay }
    }

    /// Consume the link and release the underlying peripherals.
    pub fn release(self) -> (SPI, CS, D) {
        (self.spi, self.cs, self.delay)
    }
}

impl<SPI, CS, D> Transport for SpiTransport<SPI, CS, D>
where
    SPI: spi::Write<u8>,
    CS: OutputPin,
    D: DelayUs<u16>,
{
    fn write(&mut self, message: &[u8]) -> Result<(), ()> {
        self.cs.set_low().map_err(|_| ())?;
        for &byte in message {
            self.spi.write(&[byte]).map_err(|_| ())?;
            self.delay.delay_us(SPI_INTER_BYTE_DELAY_US);
        }
        self.cs.set_high().map_err(|_| ())
    }
}

/// I2C link. The module listens on a single fixed address.
pub struct I2cTransport<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cTransport<I2C>
where
    I2C: i2c::Write,
{
    pub fn new(i2c: I2C, address: u8) -> Self {
        I2cTransport { i2c, address }
    }

    /// Consume the link and release the underlying bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> Transport for I2cTransport<I2C>
where
    I2C: i2c::Write,
{
    fn write(&mut self, message: &[u8]) -> Result<(), ()> {
        self.i2c.write(self.address, message).map_err(|_| ())
    }
}

/// RS232 link over an asynchronous serial transmitter.
pub struct Rs232Transport<TX> {
    tx: TX,
}

impl<TX> Rs232Transport<TX>
where
    TX: serial::Write<u8>,
{
    pub fn new(tx: TX) -> Self {
        Rs232Transport { tx }
    }

    /// Consume the link and release the underlying transmitter.
    pub fn release(self) -> TX {
        self.tx
    }
}

impl<TX> Transport for Rs232Transport<TX>
where
    TX: serial::Write<u8>,
{
    fn write(&mut self, message: &[u8]) -> Result<(), ()> {
        for &byte in message {
            nb::block!(self.tx.write(byte)).map_err(|_| ())?;
        }
        nb::block!(self.tx.flush()).map_err(|_| ())
    }
}
