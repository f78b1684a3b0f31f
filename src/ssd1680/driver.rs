//! SSD1680 Display Driver Implementation
//!
//! This module contains the controller state machine for the 128×296 SSD1680
//! panel: reset, initialisation, RAM addressing, frame upload and refresh,
//! and deep sleep.
//!
//! ## Architecture
//!
//! ### Lifecycle
//! - `reset()` - Strobe the reset line
//! - `init_full()` - Software reset and panel configuration
//! - `init_partial()` - `init_full()` plus the partial refresh waveform table
//! - Every transmitting call wakes a sleeping panel first, in the mode it was
//!   last initialised for
//! - `sleep()` - Enter deep sleep, a reset is needed afterwards
//!
//! ### Frame upload
//! - `display_full()` / `display_partial()` - Push a framebuffer and refresh
//! - `display_both()` - Black/white plane plus red plane
//! - `display_red()` - Red plane only
//! - `push_and_refresh()` - The single path that writes RAM `0x24` and refreshes
//!
//! ## Critical Implementation Details
//!
//! ### Y inversion
//!
//! The panel's RAM Y axis runs opposite to logical rows, so the Y address
//! counter is always programmed with `295 - y`.
//!
//! ### Partial refresh base
//!
//! After a partial refresh the same frame is written to RAM `0x26`; the next
//! partial refresh diffs against it.
//!
//! ### BUSY Pin Wait
//!
//! Every reset, software reset and refresh is followed by a bounded BUSY wait.
//! A timeout is returned to the caller and the driver marks itself as needing
//! a reset before the next frame.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::spi::SpiDevice;

use crate::ssd1680::config::Config;
use crate::ssd1680::error::Error;
use crate::ssd1680::interface::DisplayInterface;
use crate::ssd1680::{cmd::Cmd, flag::Flag, BUFFER_SIZE, HEIGHT, WIDTH};

/// Power and sequencing state of the panel controller
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelState {
    /// Powered down in deep sleep, or never initialised
    Hibernating,
    /// Reset strobed, configuration pending
    Resetting,
    /// Configuration in progress
    Initializing,
    /// Configured and idle
    Ready,
    /// A frame upload or refresh is in progress
    RefreshPending,
}

/// Waveform used when refreshing the panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RefreshMode {
    /// Full waveform, clears ghosting, flashes the panel
    #[default]
    Full,
    /// Partial waveform, needs [`Ssd1680::init_partial`] first
    Partial,
}

impl RefreshMode {
    /// Display Update Control 2 byte for this mode
    pub fn update_sequence(self) -> u8 {
        match self {
            RefreshMode::Full => Flag::DISPLAY_UPDATE_FULL,
            RefreshMode::Partial => Flag::DISPLAY_UPDATE_PARTIAL,
        }
    }
}

/// SSD1680 E-Paper Display Driver
///
/// Owns the panel session: the bus, the control lines and the controller
/// state. Framebuffers are owned by the caller and only borrowed for the
/// duration of an upload.
///
/// ## Type Parameters
///
/// - `SPI` - SPI device for communication, owns chip-select
/// - `BSY` - BUSY input pin (HIGH when display is busy)
/// - `DC` - Data/Command output pin
/// - `RST` - Reset output pin
/// - `DELAY` - Delay provider for timing
pub struct Ssd1680<SPI, BSY, DC, RST, DELAY> {
    /// The display interface
    pub interface: DisplayInterface<SPI, BSY, DC, RST, DELAY>,
    config: Config,
    state: PanelState,
    /// Waveform the panel was last configured for, restored on wake
    mode: RefreshMode,
}

impl<SPI, BSY, DC, RST, DELAY> Ssd1680<SPI, BSY, DC, RST, DELAY>
where
    SPI: SpiDevice,
    BSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    /// Create the driver. Nothing is sent until [`init_full`](Self::init_full).
    pub fn new(spi: SPI, busy: BSY, dc: DC, rst: RST, delay: DELAY, config: Config) -> Self {
        Self::from_interface(DisplayInterface::new(spi, busy, dc, rst, delay), config)
    }

    /// Create the driver from an existing interface without touching the panel
    pub fn from_interface(
        interface: DisplayInterface<SPI, BSY, DC, RST, DELAY>,
        config: Config,
    ) -> Self {
        Ssd1680 {
            interface,
            config,
            state: PanelState::Hibernating,
            mode: RefreshMode::Full,
        }
    }

    /// Current controller state
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Tear down the driver and hand back the interface
    pub fn release(self) -> DisplayInterface<SPI, BSY, DC, RST, DELAY> {
        self.interface
    }

    // ==================== Lifecycle ====================

    /// Hardware reset: reset line LOW, settle, HIGH, settle
    pub fn reset(&mut self) -> Result<(), Error> {
        log::info!("Resetting panel");
        self.state = PanelState::Resetting;
        self.interface.reset(&self.config)
    }

    /// Bring the controller up for full refreshes
    ///
    /// Resets first when hibernating. Fails with [`Error::BusyTimeout`] if
    /// any of the three BUSY waits runs out.
    pub fn init_full(&mut self) -> Result<(), Error> {
        self.mode = RefreshMode::Full;
        self.configure()
    }

    /// [`init_full`](Self::init_full) followed by loading the partial refresh waveform
    ///
    /// The panel stays in partial mode across [`sleep`](Self::sleep): the
    /// automatic wake loads the waveform again.
    pub fn init_partial(&mut self) -> Result<(), Error> {
        self.mode = RefreshMode::Partial;
        self.configure()?;

        log::info!("Loading partial refresh LUT ({} bytes)", self.config.partial_lut.len());
        self.interface
            .cmd_with_data(Cmd::WRITE_LUT_REGISTER, self.config.partial_lut)
            .inspect_err(|_| self.state = PanelState::Initializing)
    }

    /// Waveform the panel is configured for
    pub fn refresh_mode(&self) -> RefreshMode {
        self.mode
    }

    /// Software reset and register setup shared by both init paths
    fn configure(&mut self) -> Result<(), Error> {
        if self.state == PanelState::Hibernating {
            self.reset()?;
        }
        log::info!("Initializing panel");
        self.state = PanelState::Initializing;

        self.wait_busy()?;

        self.interface.cmd(Cmd::SW_RESET)?;
        self.wait_busy()?;

        self.interface
            .cmd_with_data(Cmd::DRIVER_CONTROL, &Flag::DRIVER_OUTPUT)?;
        self.interface
            .cmd_with_data(Cmd::DATA_ENTRY_MODE, &[Flag::DATA_ENTRY_DECRY_INCRX])?;
        self.set_full_ram_window()?;
        self.interface
            .cmd_with_data(Cmd::BORDER_WAVEFORM_CONTROL, &[self.config.border_waveform])?;
        self.interface
            .cmd_with_data(Cmd::DISPLAY_UPDATE_CTRL1, &Flag::DISPLAY_UPDATE_CTRL1)?;
        self.interface
            .cmd_with_data(Cmd::TEMP_CONTROL, &[Flag::INTERNAL_TEMP_SENSOR])?;
        self.reset_ram_counters()?;

        self.wait_busy()?;

        self.state = PanelState::Ready;
        log::info!("Panel ready");
        Ok(())
    }

    /// Select the internal temperature sensor and preload the temperature register
    pub fn init_internal_temp_sensor(&mut self) -> Result<(), Error> {
        self.ensure_awake()?;
        self.interface
            .cmd_with_data(Cmd::TEMP_CONTROL, &[Flag::INTERNAL_TEMP_SENSOR])?;
        self.interface
            .cmd_with_data(Cmd::TEMP_CONTROL_WRITE, &Flag::TEMP_REGISTER)
    }

    /// Enter deep sleep with the given mode byte (see `Flag::DEEP_SLEEP_*`)
    ///
    /// The next transmitting call resets and re-initialises the panel. A panel
    /// that is already asleep is woken first so the mode byte is accepted.
    pub fn sleep(&mut self, mode: u8) -> Result<(), Error> {
        self.ensure_awake()?;
        log::info!("Putting display into deep sleep mode 0x{:02X}", mode);
        let sent = self.interface.cmd_with_data(Cmd::DEEP_SLEEP_MODE, &[mode]);
        self.state = PanelState::Hibernating;
        sent
    }

    // ==================== Addressing ====================

    /// Point the RAM address counters at logical pixel `(x, y)`
    ///
    /// X is programmed in bytes (`x / 8`), Y as `295 - y`.
    pub fn set_address_window(&mut self, x: u16, y: u16) -> Result<(), Error> {
        if x >= WIDTH || y >= HEIGHT {
            return Err(Error::AddressOutOfRange { x, y });
        }
        self.ensure_awake()?;
        self.program_ram_counters(x, y)
    }

    fn program_ram_counters(&mut self, x: u16, y: u16) -> Result<(), Error> {
        let ram_x = (x / 8) as u8;
        let ram_y = HEIGHT - 1 - y;
        log::debug!("RAM counters x={} y={}", ram_x, ram_y);

        self.interface.cmd_with_data(Cmd::SET_RAMX_COUNTER, &[ram_x])?;
        self.interface.cmd_with_data(
            Cmd::SET_RAMY_COUNTER,
            &[(ram_y & 0xFF) as u8, ((ram_y >> 8) & 0x01) as u8],
        )
    }

    // ==================== Frame upload ====================

    /// Write a frame to RAM `0x24` and refresh with the given waveform
    ///
    /// Blocks until BUSY drops or the poll ceiling is hit. Re-initialises the
    /// panel first if it is hibernating or a previous operation failed.
    pub fn push_and_refresh(&mut self, buffer: &[u8], mode: RefreshMode) -> Result<(), Error> {
        let frame = frame_slice(buffer)?;
        self.ensure_awake()?;
        self.upload_and_refresh(frame, mode)
    }

    /// Full refresh: both RAM planes get the frame, then `0xF7`
    pub fn display_full(&mut self, image: &[u8]) -> Result<(), Error> {
        let frame = frame_slice(image)?;
        self.ensure_awake()?;

        self.state = PanelState::RefreshPending;
        self.write_ram(Cmd::WRITE_RED_DATA, frame)?;
        self.upload_and_refresh(frame, RefreshMode::Full)
    }

    /// Partial refresh with `0xCC`, then store the frame as the next diff base
    pub fn display_partial(&mut self, image: &[u8]) -> Result<(), Error> {
        let frame = frame_slice(image)?;
        self.push_and_refresh(frame, RefreshMode::Partial)?;

        self.state = PanelState::RefreshPending;
        self.write_ram(Cmd::WRITE_RED_DATA, frame)?;
        self.state = PanelState::Ready;
        Ok(())
    }

    /// Push a frame with the chosen mode
    pub fn display(&mut self, image: &[u8], mode: RefreshMode) -> Result<(), Error> {
        match mode {
            RefreshMode::Full => self.display_full(image),
            RefreshMode::Partial => self.display_partial(image),
        }
    }

    /// Black/white plane to RAM `0x24`, inverted `red` plane to RAM `0x26`, full refresh
    ///
    /// `red` is inverted in place for the transfer and restored before
    /// returning, also on error.
    pub fn display_both(&mut self, black: &[u8], red: &mut [u8]) -> Result<(), Error> {
        let black = frame_slice(black)?;
        if red.len() < BUFFER_SIZE {
            return Err(Error::BufferTooSmall {
                required: BUFFER_SIZE,
                provided: red.len(),
            });
        }
        self.ensure_awake()?;

        self.state = PanelState::RefreshPending;
        self.write_ram(Cmd::WRITE_BW_DATA, black)?;

        let red = &mut red[..BUFFER_SIZE];
        invert(red);
        let written = self.write_ram(Cmd::WRITE_RED_DATA, red);
        invert(red);
        written?;

        self.refresh(RefreshMode::Full)?;
        self.state = PanelState::Ready;
        Ok(())
    }

    /// Red plane only, full refresh
    pub fn display_red(&mut self, image: &[u8]) -> Result<(), Error> {
        let frame = frame_slice(image)?;
        self.ensure_awake()?;

        self.state = PanelState::RefreshPending;
        self.write_ram(Cmd::WRITE_RED_DATA, frame)?;
        self.refresh(RefreshMode::Full)?;
        self.state = PanelState::Ready;
        Ok(())
    }

    // ==================== Helper Functions ====================

    fn wait_busy(&mut self) -> Result<(), Error> {
        self.interface.wait_busy_low(&self.config)
    }

    /// Re-initialise when hibernating or after an interrupted sequence,
    /// restoring the partial waveform if that was the active mode
    fn ensure_awake(&mut self) -> Result<(), Error> {
        match self.state {
            PanelState::Ready => return Ok(()),
            PanelState::Hibernating => {
                log::warn!("Panel hibernating, re-initializing before transmit");
            }
            state => {
                log::warn!("Panel left in {:?}, resetting before transmit", state);
                self.reset()?;
            }
        }
        match self.mode {
            RefreshMode::Full => self.init_full(),
            RefreshMode::Partial => self.init_partial(),
        }
    }

    /// Set RAM window to full frame (0-15 for X, 295-0 for Y)
    fn set_full_ram_window(&mut self) -> Result<(), Error> {
        self.interface
            .cmd_with_data(Cmd::SET_RAMX_START_END, &Flag::RAM_X_WINDOW)?;
        self.interface
            .cmd_with_data(Cmd::SET_RAMY_START_END, &Flag::RAM_Y_WINDOW)
    }

    /// Set RAM X and Y counters to the first byte of the frame
    fn reset_ram_counters(&mut self) -> Result<(), Error> {
        self.program_ram_counters(0, 0)
    }

    /// Stream a frame into one RAM plane starting at the origin
    fn write_ram(&mut self, register: u8, frame: &[u8]) -> Result<(), Error> {
        log::debug!("Writing {} bytes to RAM 0x{:02X}", frame.len(), register);
        self.program_ram_counters(0, 0)?;
        self.interface.cmd_with_data(register, frame)
    }

    /// RAM `0x24` upload plus refresh, state already checked
    fn upload_and_refresh(&mut self, frame: &[u8], mode: RefreshMode) -> Result<(), Error> {
        self.state = PanelState::RefreshPending;
        self.write_ram(Cmd::WRITE_BW_DATA, frame)?;
        self.refresh(mode)?;
        self.state = PanelState::Ready;
        Ok(())
    }

    /// Trigger display update with the mode's sequence and wait for completion
    fn refresh(&mut self, mode: RefreshMode) -> Result<(), Error> {
        log::info!("Refreshing panel ({:?})", mode);
        self.interface
            .cmd_with_data(Cmd::DISPLAY_UPDATE_CTRL2, &[mode.update_sequence()])?;
        self.interface.cmd(Cmd::MASTER_ACTIVATE)?;
        self.wait_busy()
    }
}

/// The panel-sized prefix of `buffer`
fn frame_slice(buffer: &[u8]) -> Result<&[u8], Error> {
    buffer.get(..BUFFER_SIZE).ok_or(Error::BufferTooSmall {
        required: BUFFER_SIZE,
        provided: buffer.len(),
    })
}

fn invert(bytes: &mut [u8]) {
    for b in bytes.iter_mut() {
        *b = !*b;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ssd1680::lut::PARTIAL_REFRESH_LUT;
    use crate::ssd1680::testing::{Event, Recorder, TestInterface};

    type TestDriver = Ssd1680<
        crate::ssd1680::testing::FakeSpi,
        crate::ssd1680::testing::FakeBusy,
        crate::ssd1680::testing::FakePin,
        crate::ssd1680::testing::FakePin,
        crate::ssd1680::testing::FakeDelay,
    >;

    fn driver() -> (Recorder, TestDriver) {
        let recorder = Recorder::default();
        let interface: TestInterface = recorder.interface();
        (recorder.clone(), Ssd1680::from_interface(interface, Config::default()))
    }

    fn ready_driver() -> (Recorder, TestDriver) {
        let (recorder, mut epd) = driver();
        epd.init_full().unwrap();
        recorder.clear();
        (recorder, epd)
    }

    fn init_sequence() -> Vec<(u8, Vec<u8>)> {
        vec![
            (0x12, vec![]),
            (0x01, vec![0x27, 0x01, 0x01]),
            (0x11, vec![0x01]),
            (0x44, vec![0x00, 0x0F]),
            (0x45, vec![0x27, 0x01, 0x00, 0x00]),
            (0x3C, vec![0x05]),
            (0x21, vec![0x00, 0x80]),
            (0x18, vec![0x80]),
            (0x4E, vec![0x00]),
            (0x4F, vec![0x27, 0x01]),
        ]
    }

    fn origin() -> Vec<(u8, Vec<u8>)> {
        vec![(0x4E, vec![0x00]), (0x4F, vec![0x27, 0x01])]
    }

    #[test]
    fn starts_hibernating_and_init_resets_first() {
        let (recorder, mut epd) = driver();
        assert_eq!(epd.state(), PanelState::Hibernating);

        epd.init_full().unwrap();

        assert_eq!(epd.state(), PanelState::Ready);
        let events = recorder.events();
        assert_eq!(&events[..2], &[Event::RstLow, Event::Delay(50)]);
        assert_eq!(recorder.commands(), init_sequence());
    }

    #[test]
    fn init_while_awake_skips_hardware_reset() {
        let (recorder, mut epd) = ready_driver();
        epd.init_full().unwrap();

        assert!(!recorder.events().contains(&Event::RstLow));
        assert_eq!(recorder.commands(), init_sequence());
    }

    #[test]
    fn init_propagates_busy_timeout() {
        let (recorder, mut epd) = driver();
        recorder.set_busy_polls(u32::MAX);

        let err = epd.init_full().unwrap_err();

        assert!(matches!(err, Error::BusyTimeout { polls: 4000 }));
        assert_eq!(epd.state(), PanelState::Initializing);
        assert!(recorder.commands().is_empty());
    }

    #[test]
    fn partial_init_loads_lut_verbatim_in_one_write() {
        let (recorder, mut epd) = driver();
        epd.init_partial().unwrap();

        let commands = recorder.commands();
        let (last_cmd, last_data) = commands.last().unwrap();
        assert_eq!(*last_cmd, 0x32);
        assert_eq!(last_data.as_slice(), &PARTIAL_REFRESH_LUT[..]);
        assert!(recorder
            .events()
            .contains(&Event::Write(PARTIAL_REFRESH_LUT.to_vec())));
    }

    #[test]
    fn address_window_origin_programs_y_295() {
        let (recorder, mut epd) = ready_driver();
        epd.set_address_window(0, 0).unwrap();

        assert_eq!(recorder.commands(), origin());
    }

    #[test]
    fn address_window_inverts_y_and_packs_x_in_bytes() {
        let (recorder, mut epd) = ready_driver();
        epd.set_address_window(17, 10).unwrap();

        assert_eq!(
            recorder.commands(),
            vec![(0x4E, vec![0x02]), (0x4F, vec![0x1D, 0x01])]
        );
    }

    #[test]
    fn address_window_rejects_coordinates_off_panel() {
        let (_, mut epd) = ready_driver();

        assert!(matches!(
            epd.set_address_window(0, 296),
            Err(Error::AddressOutOfRange { x: 0, y: 296 })
        ));
        assert!(matches!(
            epd.set_address_window(128, 0),
            Err(Error::AddressOutOfRange { x: 128, y: 0 })
        ));
    }

    #[test]
    fn push_and_refresh_partial_uses_cc() {
        let (recorder, mut epd) = ready_driver();
        let frame = vec![0x5A; BUFFER_SIZE];

        epd.push_and_refresh(&frame, RefreshMode::Partial).unwrap();

        let mut expected = origin();
        expected.push((0x24, frame.clone()));
        expected.push((0x22, vec![0xCC]));
        expected.push((0x20, vec![]));
        assert_eq!(recorder.commands(), expected);
        assert_eq!(epd.state(), PanelState::Ready);
    }

    #[test]
    fn display_full_writes_both_planes_then_f7() {
        let (recorder, mut epd) = ready_driver();
        let frame = vec![0xF0; BUFFER_SIZE];

        epd.display_full(&frame).unwrap();

        let mut expected = origin();
        expected.push((0x26, frame.clone()));
        expected.extend(origin());
        expected.push((0x24, frame.clone()));
        expected.push((0x22, vec![0xF7]));
        expected.push((0x20, vec![]));
        assert_eq!(recorder.commands(), expected);
    }

    #[test]
    fn display_partial_stores_frame_as_next_base() {
        let (recorder, mut epd) = ready_driver();
        let frame = vec![0x0F; BUFFER_SIZE];

        epd.display(&frame, RefreshMode::Partial).unwrap();

        let mut expected = origin();
        expected.push((0x24, frame.clone()));
        expected.push((0x22, vec![0xCC]));
        expected.push((0x20, vec![]));
        expected.extend(origin());
        expected.push((0x26, frame.clone()));
        assert_eq!(recorder.commands(), expected);
        assert_eq!(epd.state(), PanelState::Ready);
    }

    #[test]
    fn display_both_inverts_red_plane_and_restores_it() {
        let (recorder, mut epd) = ready_driver();
        let black = vec![0xFF; BUFFER_SIZE];
        let mut red = vec![0x0F; BUFFER_SIZE];

        epd.display_both(&black, &mut red).unwrap();

        let commands = recorder.commands();
        assert_eq!(commands[2], (0x24, black));
        assert_eq!(commands[5], (0x26, vec![0xF0; BUFFER_SIZE]));
        assert_eq!(commands[6], (0x22, vec![0xF7]));
        assert_eq!(red, vec![0x0F; BUFFER_SIZE]);
    }

    #[test]
    fn display_red_only_touches_red_ram() {
        let (recorder, mut epd) = ready_driver();
        let frame = vec![0x00; BUFFER_SIZE];

        epd.display_red(&frame).unwrap();

        let registers: Vec<u8> = recorder.commands().iter().map(|(c, _)| *c).collect();
        assert_eq!(registers, vec![0x4E, 0x4F, 0x26, 0x22, 0x20]);
    }

    #[test]
    fn short_frame_is_rejected_before_any_traffic() {
        let (recorder, mut epd) = ready_driver();

        let err = epd.display_full(&[0u8; 16]).unwrap_err();

        assert!(matches!(
            err,
            Error::BufferTooSmall {
                required: BUFFER_SIZE,
                provided: 16
            }
        ));
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn sleep_sends_mode_and_next_upload_reinitializes() {
        let (recorder, mut epd) = ready_driver();
        epd.sleep(Flag::DEEP_SLEEP_MODE_1).unwrap();

        assert_eq!(recorder.commands(), vec![(0x10, vec![0x01])]);
        assert_eq!(epd.state(), PanelState::Hibernating);

        recorder.clear();
        epd.push_and_refresh(&[0xFF; BUFFER_SIZE], RefreshMode::Full)
            .unwrap();

        assert_eq!(recorder.events()[0], Event::RstLow);
        assert_eq!(recorder.commands()[0], (0x12, vec![]));
        assert_eq!(epd.state(), PanelState::Ready);
    }

    #[test]
    fn refresh_timeout_forces_reset_on_next_upload() {
        let (recorder, mut epd) = ready_driver();
        let frame = vec![0xFF; BUFFER_SIZE];

        recorder.set_busy_polls(u32::MAX);
        let err = epd.push_and_refresh(&frame, RefreshMode::Full).unwrap_err();
        assert!(matches!(err, Error::BusyTimeout { .. }));
        assert_eq!(epd.state(), PanelState::RefreshPending);

        recorder.set_busy_polls(0);
        recorder.clear();
        epd.push_and_refresh(&frame, RefreshMode::Full).unwrap();

        assert_eq!(recorder.events()[0], Event::RstLow);
        assert_eq!(epd.state(), PanelState::Ready);
    }

    fn asleep_driver() -> (Recorder, TestDriver) {
        let (recorder, mut epd) = ready_driver();
        epd.sleep(Flag::DEEP_SLEEP_MODE_1).unwrap();
        recorder.clear();
        (recorder, epd)
    }

    fn assert_reset_before_first_write(recorder: &Recorder) {
        let events = recorder.events();
        let reset = events.iter().position(|e| *e == Event::RstLow);
        let first_write = events.iter().position(|e| matches!(e, Event::Write(_)));
        assert!(reset.is_some(), "no reset strobe in {events:?}");
        assert!(reset < first_write);
    }

    #[test]
    fn address_window_wakes_a_sleeping_panel() {
        let (recorder, mut epd) = asleep_driver();
        epd.set_address_window(0, 0).unwrap();

        assert_reset_before_first_write(&recorder);
        let mut expected = init_sequence();
        expected.extend(origin());
        assert_eq!(recorder.commands(), expected);
        assert_eq!(epd.state(), PanelState::Ready);
    }

    #[test]
    fn address_window_out_of_range_stays_silent_while_asleep() {
        let (recorder, mut epd) = asleep_driver();

        assert!(epd.set_address_window(200, 0).is_err());
        assert!(recorder.events().is_empty());
        assert_eq!(epd.state(), PanelState::Hibernating);
    }

    #[test]
    fn temperature_sensor_setup_wakes_a_sleeping_panel() {
        let (recorder, mut epd) = asleep_driver();
        epd.init_internal_temp_sensor().unwrap();

        assert_reset_before_first_write(&recorder);
        let commands = recorder.commands();
        assert_eq!(commands[0], (0x12, vec![]));
        assert_eq!(
            &commands[commands.len() - 2..],
            &[(0x18, vec![0x80]), (0x1A, vec![0x7F, 0xF0])]
        );
        assert_eq!(epd.state(), PanelState::Ready);
    }

    #[test]
    fn sleeping_again_wakes_before_sending_the_mode() {
        let (recorder, mut epd) = asleep_driver();
        epd.sleep(Flag::DEEP_SLEEP_MODE_2).unwrap();

        assert_reset_before_first_write(&recorder);
        let commands = recorder.commands();
        assert_eq!(commands.last(), Some(&(0x10, vec![0x03])));
        assert_eq!(epd.state(), PanelState::Hibernating);
    }

    #[test]
    fn wake_restores_partial_waveform_before_cc_refresh() {
        let (recorder, mut epd) = driver();
        epd.init_partial().unwrap();
        epd.sleep(Flag::DEEP_SLEEP_MODE_1).unwrap();
        recorder.clear();

        epd.display_partial(&[0x3C; BUFFER_SIZE]).unwrap();

        assert_reset_before_first_write(&recorder);
        let commands = recorder.commands();
        let lut = commands.iter().position(|(c, _)| *c == 0x32).unwrap();
        let refresh = commands
            .iter()
            .position(|c| *c == (0x22, vec![0xCC]))
            .unwrap();
        assert!(lut < refresh);
        assert_eq!(commands[lut].1.as_slice(), &PARTIAL_REFRESH_LUT[..]);
        assert_eq!(epd.refresh_mode(), RefreshMode::Partial);
    }

    #[test]
    fn init_full_leaves_partial_mode() {
        let (recorder, mut epd) = driver();
        epd.init_partial().unwrap();
        epd.init_full().unwrap();
        epd.sleep(Flag::DEEP_SLEEP_MODE_1).unwrap();
        recorder.clear();

        epd.display_full(&[0xFF; BUFFER_SIZE]).unwrap();

        assert!(recorder.commands().iter().all(|(c, _)| *c != 0x32));
        assert_eq!(epd.refresh_mode(), RefreshMode::Full);
    }

    #[test]
    fn temperature_sensor_setup_bytes() {
        let (recorder, mut epd) = ready_driver();
        epd.init_internal_temp_sensor().unwrap();

        assert_eq!(
            recorder.commands(),
            vec![(0x18, vec![0x80]), (0x1A, vec![0x7F, 0xF0])]
        );
    }
}
