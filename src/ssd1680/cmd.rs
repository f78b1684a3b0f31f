/// SSD1680 command bytes, sent with the data/command line low.
pub struct Cmd;
impl Cmd {
    // Init
    pub const SW_RESET: u8 = 0x12;
    pub const DRIVER_CONTROL: u8 = 0x01;
    pub const DATA_ENTRY_MODE: u8 = 0x11;
    pub const TEMP_CONTROL: u8 = 0x18;
    pub const TEMP_CONTROL_WRITE: u8 = 0x1A;
    pub const BORDER_WAVEFORM_CONTROL: u8 = 0x3C;
    pub const DISPLAY_UPDATE_CTRL1: u8 = 0x21;
    pub const SET_RAMX_START_END: u8 = 0x44;
    pub const SET_RAMY_START_END: u8 = 0x45;
    pub const WRITE_LUT_REGISTER: u8 = 0x32;
    pub const DEEP_SLEEP_MODE: u8 = 0x10;

    // Update
    pub const SET_RAMX_COUNTER: u8 = 0x4E;
    pub const SET_RAMY_COUNTER: u8 = 0x4F;
    pub const WRITE_BW_DATA: u8 = 0x24;
    pub const WRITE_RED_DATA: u8 = 0x26;
    pub const DISPLAY_UPDATE_CTRL2: u8 = 0x22;
    pub const MASTER_ACTIVATE: u8 = 0x20;
}

/*
Panel init sequence uses, in order:
0x12 - Software Reset
0x01 - Driver Output Control (0x27 0x01 0x01)
0x11 - Data Entry Mode (Y decrement, X increment)
0x44 - Set RAM X Address Start/End (0..15)
0x45 - Set RAM Y Address Start/End (295..0)
0x3C - Border Waveform Control
0x21 - Display Update Control 1
0x18 - Temperature Sensor Control
0x4E - Set RAM X Address Counter
0x4F - Set RAM Y Address Counter
*/
