pub struct Cmd;
#[allow(dead_code)]
impl Cmd {
    pub const OSC_START: u16 = 0x0000;
    pub const DRIVER_OUTPUT_CTRL: u16 = 0x0001;
    pub const LCD_DRIVE_AC_CTRL: u16 = 0x0002;
    pub const POWER_CTRL_1: u16 = 0x0003;
    pub const DISPLAY_CTRL: u16 = 0x0007;
    pub const FRAME_CYCLE_CTRL: u16 = 0x000B;
    pub const POWER_CTRL_2: u16 = 0x000C;
    pub const POWER_CTRL_3: u16 = 0x000D;
    pub const POWER_CTRL_4: u16 = 0x000E;
    pub const GATE_SCAN_START: u16 = 0x000F;
    pub const SLEEP_MODE_1: u16 = 0x0010;
    pub const ENTRY_MODE: u16 = 0x0011;
    pub const SLEEP_MODE_2: u16 = 0x0012;
    pub const POWER_CTRL_5: u16 = 0x001E;
    pub const RAM_DATA: u16 = 0x0022;
    pub const FRAME_FREQ_CTRL: u16 = 0x0025;
    pub const ANALOG_SETTING: u16 = 0x0026;
    pub const VCOM_OTP: u16 = 0x0028;
    pub const GAMMA_CTRL_1: u16 = 0x0030;
    pub const GAMMA_CTRL_2: u16 = 0x0031;
    pub const GAMMA_CTRL_3: u16 = 0x0032;
    pub const GAMMA_CTRL_4: u16 = 0x0033;
    pub const GAMMA_CTRL_5: u16 = 0x0034;
    pub const GAMMA_CTRL_6: u16 = 0x0035;
    pub const GAMMA_CTRL_7: u16 = 0x0036;
    pub const GAMMA_CTRL_8: u16 = 0x0037;
    pub const GAMMA_CTRL_9: u16 = 0x003A;
    pub const GAMMA_CTRL_10: u16 = 0x003B;
    pub const PAGE_SET: u16 = 0x004E;
    pub const COLUMN_SET: u16 = 0x004F;
    // shares its index with GAMMA_CTRL_8, see DESIGN.md
    pub const VERTICAL_SCROLL: u16 = 0x0037;
}
