//! Bus interface implementations for the LIS331
//!
//! This module provides implementations of the `device-driver` traits for
//! I2C and SPI communication with the LIS331.
//!
//! Both buses need a flag in the sub-address byte before the chip will
//! auto-increment across registers during a burst. The interfaces set it
//! whenever more than one byte is transferred.

use crate::I2C_ADDRESS_SA0_LOW;

use crate::Error;
use device_driver::RegisterInterface;

/// I2C sub-address flag requesting address auto-increment
const I2C_AUTO_INCREMENT: u8 = 0x80;

/// SPI address flag marking a read transfer
const SPI_READ: u8 = 0x80;

/// SPI address flag requesting address auto-increment
const SPI_AUTO_INCREMENT: u8 = 0x40;

/// Largest burst write supported by the interfaces
const MAX_WRITE_LEN: usize = 8;

const fn i2c_sub_address(address: u8, len: usize) -> u8 {
    if len > 1 {
        address | I2C_AUTO_INCREMENT
    } else {
        address & !I2C_AUTO_INCREMENT
    }
}

const fn spi_address(address: u8, len: usize, read: bool) -> u8 {
    let mut byte = address & 0x3F;
    if read {
        byte |= SPI_READ;
    }
    if len > 1 {
        byte |= SPI_AUTO_INCREMENT;
    }
    byte
}

/// Build an `address + data` frame, truncating data to [`MAX_WRITE_LEN`]
fn write_frame(address: u8, write_data: &[u8]) -> ([u8; MAX_WRITE_LEN + 1], usize) {
    let mut buffer = [0u8; MAX_WRITE_LEN + 1];
    buffer[0] = address;
    let len = write_data.len().min(MAX_WRITE_LEN);
    buffer[1..=len].copy_from_slice(&write_data[..len]);
    (buffer, len)
}

/// I2C interface for the LIS331
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Create a new I2C interface with the default address (0x18, SA0 pin LOW)
    ///
    /// # Arguments
    /// * `i2c` - The I2C peripheral
    ///
    /// # Example
    /// ```ignore
    /// let interface = I2cInterface::default(i2c);
    /// let mut accel = Lis331Driver::new(interface, Lis331hh)?;
    /// ```
    pub const fn default(i2c: I2C) -> Self {
        Self {
            i2c,
            address: I2C_ADDRESS_SA0_LOW,
        }
    }

    /// Create a new I2C interface with the alternative address (0x19, SA0 pin HIGH)
    ///
    /// Only for boards with SA0/SDO tied high.
    ///
    /// # Arguments
    /// * `i2c` - The I2C peripheral
    pub const fn alternative(i2c: I2C) -> Self {
        Self {
            i2c,
            address: crate::I2C_ADDRESS_SA0_HIGH,
        }
    }

    /// Create a new I2C interface with a custom device address
    ///
    /// # Arguments
    /// * `i2c` - The I2C peripheral
    /// * `address` - The 7-bit I2C device address
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// The 7-bit device address this interface talks to
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Consume the interface and return the I2C peripheral
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C, E> RegisterInterface for I2cInterface<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let sub_address = i2c_sub_address(address, read_data.len());
        self.i2c.write_read(self.address, &[sub_address], read_data)
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let sub_address = i2c_sub_address(address, write_data.len());
        let (buffer, len) = write_frame(sub_address, write_data);
        self.i2c.write(self.address, &buffer[..=len])
    }
}

#[cfg(feature = "async")]
impl<I2C, E> device_driver::AsyncRegisterInterface for I2cInterface<I2C>
where
    I2C: embedded_hal_async::i2c::I2c<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    async fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let sub_address = i2c_sub_address(address, read_data.len());
        self.i2c
            .write_read(self.address, &[sub_address], read_data)
            .await
    }

    async fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let sub_address = i2c_sub_address(address, write_data.len());
        let (buffer, len) = write_frame(sub_address, write_data);
        self.i2c.write(self.address, &buffer[..=len]).await
    }
}

/// SPI interface for the LIS331
///
/// # Note on Chip Select
///
/// This interface uses the `SpiDevice` trait from `embedded-hal`, which manages
/// the chip select (CS) pin automatically.
///
/// ```ignore
/// let spi_device = embedded_hal_bus::spi::ExclusiveDevice::new(spi_bus, cs_pin, delay);
/// let interface = SpiInterface::new(spi_device);
/// ```
///
/// The chip must be wired for 4-wire SPI (`SIM = 0`, the power-on default).
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI> SpiInterface<SPI> {
    /// Create a new SPI interface with the given SPI device
    pub const fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Consume the interface and return the SPI device
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI, E> RegisterInterface for SpiInterface<SPI>
where
    SPI: embedded_hal::spi::SpiDevice<Error = E>,
{
    type Error = Error<E>;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let read_address = spi_address(address, read_data.len(), true);

        let mut operations = [
            embedded_hal::spi::Operation::Write(&[read_address]),
            embedded_hal::spi::Operation::Read(read_data),
        ];

        self.spi.transaction(&mut operations).map_err(Error::Bus)
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let write_address = spi_address(address, write_data.len(), false);
        let (buffer, len) = write_frame(write_address, write_data);
        self.spi.write(&buffer[..=len]).map_err(Error::Bus)
    }
}

#[cfg(feature = "async")]
impl<SPI, E> device_driver::AsyncRegisterInterface for SpiInterface<SPI>
where
    SPI: embedded_hal_async::spi::SpiDevice<Error = E>,
{
    type Error = Error<E>;
    type AddressType = u8;

    async fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let read_address = spi_address(address, read_data.len(), true);

        let mut operations = [
            embedded_hal_async::spi::Operation::Write(&[read_address]),
            embedded_hal_async::spi::Operation::Read(read_data),
        ];

        self.spi
            .transaction(&mut operations)
            .await
            .map_err(Error::Bus)
    }

    async fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let write_address = spi_address(address, write_data.len(), false);
        let (buffer, len) = write_frame(write_address, write_data);
        self.spi.write(&buffer[..=len]).await.map_err(Error::Bus)
    }
}
