use std::collections::HashMap;

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Deserializer};

/// Named styles, e.g. `"nav_active": "bold black on light magenta"`
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl Styles {
    /// The style registered under `name`, or the terminal default
    pub fn style(&self, name: &str) -> Style {
        self.get(name).copied().unwrap_or_default()
    }
}

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(name, style)| (name, parse_style(&style)))
            .collect();

        Ok(Styles(styles))
    }
}

/// Parses `[modifiers] [fg] [on [modifiers] bg]`.
///
/// Modifiers are `bold`, `dim`, `italic`, `underline` and `inverse`.
/// Colors are named (`light magenta`, `grey`), `#rrggbb`, `colorN` or
/// `rgbRGB` (each digit 0-5). Unknown words are ignored.
pub fn parse_style(line: &str) -> Style {
    let lower = line.to_lowercase();
    let (foreground, background) = match lower.split_once(" on ") {
        Some((fg, bg)) => (fg.to_string(), Some(bg.to_string())),
        None => match lower.strip_prefix("on ") {
            Some(bg) => (String::new(), Some(bg.to_string())),
            None => (lower.clone(), None),
        },
    };

    let (fg, fg_modifiers) = process_color_string(&foreground);
    let mut style = Style::default().add_modifier(fg_modifiers);
    if let Some(color) = parse_color(&fg) {
        style = style.fg(color);
    }
    if let Some(background) = background {
        let (bg, bg_modifiers) = process_color_string(&background);
        style = style.add_modifier(bg_modifiers);
        if let Some(color) = parse_color(&bg) {
            style = style.bg(color);
        }
    }
    style
}

fn process_color_string(color_str: &str) -> (String, Modifier) {
    let mut modifiers = Modifier::empty();
    let mut words = Vec::new();
    for word in color_str.split_whitespace() {
        match word {
            "bold" => modifiers |= Modifier::BOLD,
            "dim" => modifiers |= Modifier::DIM,
            "italic" => modifiers |= Modifier::ITALIC,
            "underline" => modifiers |= Modifier::UNDERLINED,
            "inverse" => modifiers |= Modifier::REVERSED,
            other => words.push(other.replace("grey", "gray")),
        }
    }
    (words.join(" "), modifiers)
}

fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }
    if let Some(n) = s.strip_prefix("color") {
        return n.trim().parse::<u8>().ok().map(Color::Indexed);
    }
    if let Some(rgb) = s.strip_prefix("rgb") {
        let digits: Vec<u8> = rgb
            .chars()
            .map(|c| c.to_digit(6).and_then(|d| u8::try_from(d).ok()))
            .collect::<Option<_>>()?;
        if let [r, g, b] = digits[..] {
            // 6x6x6 cube of the 256-color palette
            return Some(Color::Indexed(16 + r * 36 + g * 6 + b));
        }
        return None;
    }

    let color = match s {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" => Color::Gray,
        "dark gray" => Color::DarkGray,
        "light red" => Color::LightRed,
        "light green" => Color::LightGreen,
        "light yellow" => Color::LightYellow,
        "light blue" => Color::LightBlue,
        "light magenta" => Color::LightMagenta,
        "light cyan" => Color::LightCyan,
        "white" => Color::White,
        _ => return None,
    };
    Some(color)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case("red", Style::default().fg(Color::Red))]
    #[case("bold white on blue", Style::default().fg(Color::White).bg(Color::Blue).add_modifier(Modifier::BOLD))]
    #[case("on dark grey", Style::default().bg(Color::DarkGray))]
    #[case("italic light magenta", Style::default().fg(Color::LightMagenta).add_modifier(Modifier::ITALIC))]
    #[case("#ff8800", Style::default().fg(Color::Rgb(255, 136, 0)))]
    #[case("color208", Style::default().fg(Color::Indexed(208)))]
    #[case("rgb123", Style::default().fg(Color::Indexed(16 + 36 + 12 + 3)))]
    #[case("inverse", Style::default().add_modifier(Modifier::REVERSED))]
    #[case("unknown", Style::default())]
    fn test_parse_style(#[case] raw: &str, #[case] expected: Style) {
        assert_eq!(parse_style(raw), expected);
    }

    #[test]
    fn test_deserialize_styles() -> Result<(), json5::Error> {
        let styles: Styles = json5::from_str(r#"{ brand: "bold magenta" }"#)?;
        assert_eq!(
            styles.style("brand"),
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
        );
        assert_eq!(styles.style("missing"), Style::default());
        Ok(())
    }
}
