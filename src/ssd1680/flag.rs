/// Parameter bytes for the SSD1680 commands in [`Cmd`](super::cmd::Cmd).
///
/// Every value here goes out on the wire exactly as written; the panel is
/// calibrated against these sequences.
pub struct Flag;
#[allow(missing_docs)]
impl Flag {
    // Driver Output Control (0x01): MUX = 0x127 + 1 = 296 gate lines, GS = 1
    pub const DRIVER_OUTPUT: [u8; 3] = [0x27, 0x01, 0x01];

    // Data Entry Mode (0x11) flags
    pub const DATA_ENTRY_DECRY_INCRX: u8 = 0x01; // Y decrement, X increment

    // RAM windows (0x44 / 0x45) covering the whole panel
    pub const RAM_X_WINDOW: [u8; 2] = [0x00, 0x0F]; // (15 + 1) * 8 = 128
    pub const RAM_Y_WINDOW: [u8; 4] = [0x27, 0x01, 0x00, 0x00]; // 0x127 + 1 = 296

    // Border Waveform Control (0x3C)
    pub const BORDER_WAVEFORM_FLOATING: u8 = 0x05;

    // Display Update Control 1 (0x21): normal B/W RAM, bypass red as 0
    pub const DISPLAY_UPDATE_CTRL1: [u8; 2] = [0x00, 0x80];

    // Temperature Sensor Control (0x18)
    pub const INTERNAL_TEMP_SENSOR: u8 = 0x80;
    // Temperature register write (0x1A)
    pub const TEMP_REGISTER: [u8; 2] = [0x7F, 0xF0];

    // Display Update Control 2 (0x22) sequences
    pub const DISPLAY_UPDATE_FULL: u8 = 0xF7;
    pub const DISPLAY_UPDATE_PARTIAL: u8 = 0xCC;

    // Deep Sleep Mode (0x10) flags
    pub const DEEP_SLEEP_NORMAL_MODE: u8 = 0x00;
    pub const DEEP_SLEEP_MODE_1: u8 = 0x01; // Retain RAM
    pub const DEEP_SLEEP_MODE_2: u8 = 0x03; // RAM lost
}
