//! Display interface using SPI
//!
//! Chip-select belongs to the [`SpiDevice`]: every `write` below is one
//! chip-select-bracketed transaction, so a whole frame streamed through
//! [`DisplayInterface::data`] never re-asserts CS between bytes.
use crate::ssd1680::config::Config;
use crate::ssd1680::error::{DisplayError, Error};
use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

/// The four-wire connection to the panel plus its reset and busy lines
pub struct DisplayInterface<SPI, BSY, DC, RST, DELAY> {
    /// SPI device, owns chip-select
    spi: SPI,
    /// High while the panel is refreshing or resetting
    busy: BSY,
    /// Data/Command Control Pin (High for data, Low for command)
    dc: DC,
    /// Pin for Reseting, active low
    rst: RST,
    /// Millisecond delay provider
    pub(crate) delay: DELAY,
}

impl<SPI, BSY, DC, RST, DELAY> DisplayInterface<SPI, BSY, DC, RST, DELAY> {
    /// Bundle the bus, pins and delay
    pub fn new(spi: SPI, busy: BSY, dc: DC, rst: RST, delay: DELAY) -> Self {
        DisplayInterface {
            spi,
            busy,
            dc,
            rst,
            delay,
        }
    }

    /// Give the peripherals back
    pub fn release(self) -> (SPI, BSY, DC, RST, DELAY) {
        (self.spi, self.busy, self.dc, self.rst, self.delay)
    }
}

impl<SPI, BSY, DC, RST, DELAY> DisplayInterface<SPI, BSY, DC, RST, DELAY>
where
    SPI: SpiDevice,
    RST: OutputPin,
    DC: OutputPin,
    BSY: InputPin,
    DELAY: DelayNs,
{
    /// Basic function for sending commands
    pub(crate) fn cmd(&mut self, command: u8) -> Result<(), Error> {
        // low for commands
        self.dc.set_low().map_err(|_| DisplayError::DCError)?;

        let sent = self.spi.write(&[command]);

        // back to data mode whatever happened on the bus
        self.dc.set_high().map_err(|_| DisplayError::DCError)?;

        if let Err(e) = sent {
            log::error!("SPI write error for command 0x{:02X}: {:?}", command, e);
            return Err(DisplayError::BusWriteError.into());
        }
        Ok(())
    }

    /// Basic function for sending an array of u8-values of data over spi
    pub(crate) fn data(&mut self, data: &[u8]) -> Result<(), Error> {
        // high for data
        self.dc.set_high().map_err(|_| DisplayError::DCError)?;
        self.spi.write(data).map_err(|e| {
            log::error!("SPI write error after {} data bytes: {:?}", data.len(), e);
            Error::from(DisplayError::BusWriteError)
        })
    }

    /// Basic function for sending a command and the data belonging to it.
    pub(crate) fn cmd_with_data(&mut self, command: u8, data: &[u8]) -> Result<(), Error> {
        self.cmd(command)?;
        self.data(data)
    }

    /// Wait for the BUSY pin to go LOW, sampling at most `busy_poll_limit` times
    pub(crate) fn wait_busy_low(&mut self, config: &Config) -> Result<(), Error> {
        let mut polls = 0u32;

        loop {
            match self.busy.is_high() {
                Ok(false) => return Ok(()),
                Ok(true) => {
                    polls += 1;
                    if polls > config.busy_poll_limit {
                        log::error!("BUSY pin still HIGH after {} polls", config.busy_poll_limit);
                        return Err(Error::BusyTimeout {
                            polls: config.busy_poll_limit,
                        });
                    }
                    self.delay.delay_ms(config.busy_poll_interval_ms);
                }
                Err(_) => {
                    log::error!("Error reading BUSY pin state");
                    return Err(DisplayError::DCError.into());
                }
            }
        }
    }

    /// Strobe the reset line: LOW, settle, HIGH, settle
    pub(crate) fn reset(&mut self, config: &Config) -> Result<(), Error> {
        self.rst.set_low().map_err(|_| DisplayError::RSError)?;
        self.delay.delay_ms(config.reset_settle_ms);
        self.rst.set_high().map_err(|_| DisplayError::RSError)?;
        self.delay.delay_ms(config.reset_settle_ms);
        Ok(())
    }

    /// Read busy pin state directly for hardware testing
    pub fn busy_pin_state(&mut self) -> Result<bool, Error> {
        // No busy variant in DisplayError, same mapping as wait_busy_low
        self.busy
            .is_high()
            .map_err(|_| DisplayError::DCError.into())
    }
}
