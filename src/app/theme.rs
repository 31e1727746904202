//! UI theme: the portfolio's color tokens in one place, with hex parsing,
//! settings-file overrides and degradation for terminals without truecolor.

use ratatui::style::Color;

use crate::services::settings::ThemeSettings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiTheme {
    /// Page background (dark navy).
    pub bg: Color,
    /// Card/panel background (light navy).
    pub panel_bg: Color,
    pub panel_border: Color,
    pub focus_border: Color,
    pub header_fg: Color,
    /// Primary accent (neon blue): headings, active tab, links.
    pub accent_fg: Color,
    /// Secondary accent (neon green): featured badge, scores.
    pub accent_alt_fg: Color,
    /// Tertiary accent (fuchsia): third constellation orb.
    pub highlight_fg: Color,
    pub text_fg: Color,
    pub text_bright_fg: Color,
    pub text_muted_fg: Color,
    pub badge_bg: Color,
    pub badge_fg: Color,
    /// Constellation dots.
    pub star_fg: Color,
    pub modal_border: Color,
    pub hint_fg: Color,
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            bg: Color::Rgb(0x0A, 0x19, 0x2F),
            panel_bg: Color::Rgb(0x11, 0x22, 0x40),
            panel_border: Color::Rgb(0x23, 0x35, 0x54),
            focus_border: Color::Rgb(0x64, 0xD9, 0xFF),
            header_fg: Color::Rgb(0xCC, 0xD6, 0xF6),
            accent_fg: Color::Rgb(0x64, 0xD9, 0xFF),
            accent_alt_fg: Color::Rgb(0x64, 0xFF, 0xDA),
            highlight_fg: Color::Rgb(0xE8, 0x79, 0xF9),
            text_fg: Color::Rgb(0xA8, 0xB2, 0xD1),
            text_bright_fg: Color::Rgb(0xCC, 0xD6, 0xF6),
            text_muted_fg: Color::Rgb(0x88, 0x92, 0xB0),
            badge_bg: Color::Rgb(0x23, 0x35, 0x54),
            badge_fg: Color::Rgb(0xA8, 0xB2, 0xD1),
            star_fg: Color::Rgb(0xE6, 0xF1, 0xFF),
            modal_border: Color::Rgb(0x64, 0xD9, 0xFF),
            hint_fg: Color::Rgb(0x88, 0x92, 0xB0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalColorSupport {
    TrueColor,
    Ansi256,
    Ansi16,
}

pub fn detect_terminal_color_support() -> TerminalColorSupport {
    if let Ok(value) = std::env::var("FOLIO_COLOR_SUPPORT") {
        match value.trim().to_ascii_lowercase().as_str() {
            "truecolor" | "24bit" | "rgb" => return TerminalColorSupport::TrueColor,
            "256" | "ansi256" => return TerminalColorSupport::Ansi256,
            "16" | "ansi16" | "basic" => return TerminalColorSupport::Ansi16,
            _ => {}
        }
    }

    let colorterm = std::env::var("COLORTERM").unwrap_or_default().to_ascii_lowercase();
    if colorterm.contains("truecolor") || colorterm.contains("24bit") {
        return TerminalColorSupport::TrueColor;
    }

    let term = std::env::var("TERM").unwrap_or_default().to_ascii_lowercase();
    if term.contains("truecolor") || term.contains("direct") {
        return TerminalColorSupport::TrueColor;
    }
    if term.contains("256color") {
        return TerminalColorSupport::Ansi256;
    }

    TerminalColorSupport::Ansi16
}

impl UiTheme {
    pub fn adapt_to_terminal_capabilities(&mut self) {
        self.apply_color_support(detect_terminal_color_support());
    }

    pub fn apply_color_support(&mut self, support: TerminalColorSupport) {
        if support == TerminalColorSupport::TrueColor {
            return;
        }
        for color in self.tokens_mut() {
            *color = map_color_for_support(*color, support);
        }
    }

    /// Optional overrides from the settings file; unknown or malformed
    /// values leave the token untouched.
    pub fn apply_settings(&mut self, settings: &ThemeSettings) {
        let overrides = [
            (&settings.bg, 0usize),
            (&settings.panel_bg, 1),
            (&settings.panel_border, 2),
            (&settings.focus_border, 3),
            (&settings.header_fg, 4),
            (&settings.accent_fg, 5),
            (&settings.accent_alt_fg, 6),
            (&settings.highlight_fg, 7),
            (&settings.text_fg, 8),
            (&settings.text_bright_fg, 9),
            (&settings.text_muted_fg, 10),
            (&settings.badge_bg, 11),
            (&settings.badge_fg, 12),
            (&settings.star_fg, 13),
            (&settings.modal_border, 14),
            (&settings.hint_fg, 15),
        ];

        let parsed: Vec<(usize, Color)> = overrides
            .iter()
            .filter_map(|(value, slot)| {
                value.as_deref().and_then(parse_color).map(|c| (*slot, c))
            })
            .collect();

        let mut tokens = self.tokens_mut();
        for (slot, color) in parsed {
            *tokens[slot] = color;
        }
    }

    fn tokens_mut(&mut self) -> [&mut Color; 16] {
        [
            &mut self.bg,
            &mut self.panel_bg,
            &mut self.panel_border,
            &mut self.focus_border,
            &mut self.header_fg,
            &mut self.accent_fg,
            &mut self.accent_alt_fg,
            &mut self.highlight_fg,
            &mut self.text_fg,
            &mut self.text_bright_fg,
            &mut self.text_muted_fg,
            &mut self.badge_bg,
            &mut self.badge_fg,
            &mut self.star_fg,
            &mut self.modal_border,
            &mut self.hint_fg,
        ]
    }
}

fn map_color_for_support(color: Color, support: TerminalColorSupport) -> Color {
    match (support, color) {
        (TerminalColorSupport::TrueColor, value) => value,
        (TerminalColorSupport::Ansi256, Color::Rgb(r, g, b)) => {
            Color::Indexed(rgb_to_ansi256(r, g, b))
        }
        (TerminalColorSupport::Ansi16, Color::Rgb(r, g, b)) => {
            Color::Indexed(rgb_to_ansi16(r, g, b))
        }
        (TerminalColorSupport::Ansi16, Color::Indexed(i)) if i > 15 => {
            // 256-palette indices have no meaning on a 16-color terminal.
            Color::Indexed(i % 16)
        }
        (_, value) => value,
    }
}

/// Xterm cube approximation: grayscale ramp for near-gray values, else the
/// closest cell of the 6x6x6 color cube.
fn rgb_to_ansi256(r: u8, g: u8, b: u8) -> u8 {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    if max - min < 12 {
        let v = (u16::from(r) + u16::from(g) + u16::from(b)) / 3;
        if v < 8 {
            return 16; // cube black
        }
        if v > 238 {
            return 231; // cube white
        }
        return 232 + ((v - 8) / 10) as u8;
    }
    16 + 36 * cube_channel(r) + 6 * cube_channel(g) + cube_channel(b)
}

fn cube_channel(v: u8) -> u8 {
    match v {
        0..=47 => 0,
        48..=114 => 1,
        _ => ((v - 35) / 40).min(5),
    }
}

/// Coarse mapping onto the basic 16: one bit per channel plus a bright bit.
fn rgb_to_ansi16(r: u8, g: u8, b: u8) -> u8 {
    let index = u8::from(r > 127) | (u8::from(g > 127) << 1) | (u8::from(b > 127) << 2);
    let bright = r.max(g).max(b) > 192;
    if bright {
        index + 8
    } else {
        index
    }
}

/// Parses `#RRGGBB` or a small set of color names. Returns `None` for
/// anything else; callers treat that as "no override".
pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    if let Some(hex) = v.strip_prefix('#') {
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }

    let c = match v.to_ascii_lowercase().as_str() {
        "reset" => Color::Reset,
        "black" => Color::Indexed(0),
        "red" => Color::Indexed(1),
        "green" => Color::Indexed(2),
        "yellow" => Color::Indexed(3),
        "blue" => Color::Indexed(4),
        "magenta" => Color::Indexed(5),
        "cyan" => Color::Indexed(6),
        "gray" | "grey" => Color::Indexed(7),
        "dark_gray" | "darkgrey" => Color::Indexed(8),
        "white" => Color::Indexed(15),
        _ => return None,
    };
    Some(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_color("#64D9FF"), Some(Color::Rgb(0x64, 0xD9, 0xFF)));
        assert_eq!(parse_color("  #000000 "), Some(Color::Rgb(0, 0, 0)));
        assert_eq!(parse_color("#FFF"), None);
        assert_eq!(parse_color("#GGGGGG"), None);
        assert_eq!(parse_color(""), None);
    }

    #[test]
    fn test_parse_named_color() {
        assert_eq!(parse_color("cyan"), Some(Color::Indexed(6)));
        assert_eq!(parse_color("White"), Some(Color::Indexed(15)));
        assert_eq!(parse_color("chartreuse"), None);
    }

    #[test]
    fn test_ansi256_fallback_leaves_no_rgb_tokens() {
        let mut theme = UiTheme::default();
        theme.apply_color_support(TerminalColorSupport::Ansi256);
        assert!(matches!(theme.accent_fg, Color::Indexed(_)));
        assert!(matches!(theme.bg, Color::Indexed(_)));
    }

    #[test]
    fn test_ansi256_grayscale_and_cube() {
        assert_eq!(rgb_to_ansi256(0, 0, 0), 16);
        assert_eq!(rgb_to_ansi256(255, 255, 255), 231);
        // Pure red lands in the cube's red column.
        let red = rgb_to_ansi256(255, 0, 0);
        assert_eq!(red, 16 + 36 * 5);
    }

    #[test]
    fn test_ansi16_fallback() {
        assert_eq!(rgb_to_ansi16(0, 0, 0), 0);
        assert_eq!(rgb_to_ansi16(255, 255, 255), 15);
        assert_eq!(rgb_to_ansi16(200, 40, 40), 9); // bright red
    }

    #[test]
    fn test_truecolor_is_untouched() {
        let mut theme = UiTheme::default();
        let before = theme.clone();
        theme.apply_color_support(TerminalColorSupport::TrueColor);
        assert_eq!(theme, before);
    }

    #[test]
    fn test_apply_settings_overrides_only_valid_values() {
        let mut theme = UiTheme::default();
        let settings = ThemeSettings {
            accent_fg: Some("#FF0000".to_string()),
            text_fg: Some("not-a-color".to_string()),
            ..ThemeSettings::default()
        };
        theme.apply_settings(&settings);
        assert_eq!(theme.accent_fg, Color::Rgb(255, 0, 0));
        assert_eq!(theme.text_fg, UiTheme::default().text_fg);
    }
}
