pub struct Config;

impl Config {
    pub const FRAME_MARGIN: f32 = 12.;
    pub const CONTROL_PANEL_WIDTH: f32 = 220.;
    pub const TEXT_SIZE: f32 = 14.;

    pub const MIN_FPS: u32 = 1;
    pub const MAX_FPS: u32 = 240;
}
