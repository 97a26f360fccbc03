use ratatui::style::Color;

/// Colors used by the demo view (Gruvbox Material dark)
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,
    pub fg0: Color,
    pub grey1: Color,
    pub grey2: Color,

    /// Shading of idle edge zones
    pub zone: Color,
    /// Shading of the zone currently scrolling
    pub zone_active: Color,
    /// Border while the controller is active
    pub accent: Color,
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg1: Color::Rgb(0x32, 0x30, 0x2f),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            grey1: Color::Rgb(0x92, 0x83, 0x74),
            grey2: Color::Rgb(0xa8, 0x99, 0x84),
            zone: Color::Rgb(0x3c, 0x38, 0x36),
            zone_active: Color::Rgb(0x4f, 0x42, 0x2e),
            accent: Color::Rgb(0xa9, 0xb6, 0x65),
            warning: Color::Rgb(0xd8, 0xa6, 0x57),
        }
    }
}
