use ratatui::style::Color;

/// Terminal palette matching the site's dark theme
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey: Color,

    // Palette colors
    pub blood_red: Color,
    pub blue: Color,
    pub cyan: Color,

    // Semantic colors
    pub accent: Color,
    pub hidden: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg0: Color::Rgb(0x0a, 0x0a, 0x0a),
            bg1: Color::Rgb(0x1a, 0x1a, 0x1a),
            bg2: Color::Rgb(0x22, 0x22, 0x22),
            fg0: Color::Rgb(0xf5, 0xf5, 0xf5),
            fg1: Color::Rgb(0xd1, 0xd5, 0xdb),
            grey: Color::Rgb(0x9c, 0xa3, 0xaf),
            // tailwind extend color the site defines
            blood_red: Color::Rgb(0xb9, 0x00, 0x00),
            blue: Color::Rgb(0x3b, 0x82, 0xf6),
            cyan: Color::Rgb(0x22, 0xd3, 0xee),
            accent: Color::Rgb(0x3b, 0x82, 0xf6),
            hidden: Color::Rgb(0x3a, 0x3a, 0x3a),
        }
    }
}
