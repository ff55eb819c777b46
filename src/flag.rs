pub struct Flag;
#[allow(dead_code)]
impl Flag {
    pub const VCOM_OTP_DEFAULT: [u8; 2] = [0x00, 0x06];
    pub const OSC_ENABLE: [u8; 2] = [0x00, 0x01];
    pub const SLEEP_OFF: [u8; 2] = [0x00, 0x00];
    pub const DRIVER_OUTPUT_320X240: [u8; 2] = [0x32, 0xEF];
    pub const LCD_DRIVE_AC_LINE_INVERSION: [u8; 2] = [0x06, 0x00];
    pub const POWER_CTRL_1_DEFAULT: [u8; 2] = [0x6A, 0x38];
    pub const ENTRY_MODE_65K_INCRX_INCRY: [u8; 2] = [0x68, 0x70];
    pub const GATE_SCAN_FROM_G0: [u8; 2] = [0x00, 0x00];
    pub const FRAME_CYCLE_DEFAULT: [u8; 2] = [0x53, 0x08];
    pub const POWER_CTRL_2_DEFAULT: [u8; 2] = [0x00, 0x03];
    pub const POWER_CTRL_3_DEFAULT: [u8; 2] = [0x00, 0x0A];
    pub const POWER_CTRL_4_DEFAULT: [u8; 2] = [0x2E, 0x00];
    pub const POWER_CTRL_5_DEFAULT: [u8; 2] = [0x00, 0xBE];
    pub const FRAME_FREQ_DEFAULT: [u8; 2] = [0x80, 0x00];
    pub const ANALOG_SETTING_DEFAULT: [u8; 2] = [0x78, 0x00];
    pub const SLEEP_MODE_2_DEFAULT: [u8; 2] = [0x08, 0xD9];
    pub const DISPLAY_ON: [u8; 2] = [0x00, 0x33];
}
