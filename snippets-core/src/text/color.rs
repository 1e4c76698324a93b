use colored::{ColoredString, Colorize};
use serde::{
    de::{value::StrDeserializer, Error as _, IntoDeserializer},
    Deserialize, Deserializer, Serialize,
};

/// Color of a text component.
///
/// Serialized as `"reset"`, a `#RRGGBB` string or a snake_case color name.
#[derive(Default, Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum Color {
    /// Whatever the client renders by default in that place.
    #[default]
    Reset,
    Rgb(RGBColor),
    Named(NamedColor),
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        if value == "reset" {
            return Ok(Color::Reset);
        }
        match value.strip_prefix('#') {
            Some(hex) => RGBColor::from_hex(hex)
                .map(Color::Rgb)
                .ok_or_else(|| D::Error::custom(format!("'{value}' is not a #RRGGBB color"))),
            None => {
                let name: StrDeserializer<'_, D::Error> = value.as_str().into_deserializer();
                NamedColor::deserialize(name).map(Color::Named)
            }
        }
    }
}

impl Color {
    /// Paints `text` for an ANSI terminal.
    pub fn console_color(&self, text: &str) -> ColoredString {
        match *self {
            Color::Reset => text.clear(),
            Color::Rgb(rgb) => text.truecolor(rgb.red(), rgb.green(), rgb.blue()),
            Color::Named(named) => named.console_color(text),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, Eq, Hash, PartialEq)]
pub struct RGBColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl RGBColor {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        RGBColor { red, green, blue }
    }

    /// Parses `RRGGBB` (no leading `#`), either case.
    pub fn from_hex(hex: &str) -> Option<Self> {
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let red = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let green = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let blue = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self::new(red, green, blue))
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }
}

impl Serialize for RGBColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&format!(
            "#{:02X}{:02X}{:02X}",
            self.red, self.green, self.blue
        ))
    }
}

/// The sixteen chat colors, in legacy code order.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedColor {
    Black = 0,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl NamedColor {
    const ALL: [NamedColor; 16] = [
        NamedColor::Black,
        NamedColor::DarkBlue,
        NamedColor::DarkGreen,
        NamedColor::DarkAqua,
        NamedColor::DarkRed,
        NamedColor::DarkPurple,
        NamedColor::Gold,
        NamedColor::Gray,
        NamedColor::DarkGray,
        NamedColor::Blue,
        NamedColor::Green,
        NamedColor::Aqua,
        NamedColor::Red,
        NamedColor::LightPurple,
        NamedColor::Yellow,
        NamedColor::White,
    ];

    /// Case-insensitive lookup of a legacy formatting code.
    pub fn from_code(code: char) -> Option<Self> {
        let index = code.to_digit(16)?;
        Self::ALL.get(index as usize).copied()
    }

    fn console_color(self, text: &str) -> ColoredString {
        // dark variants get the normal ANSI colors, light ones the bright colors
        match self {
            NamedColor::Black => text.black(),
            NamedColor::DarkBlue => text.blue(),
            NamedColor::DarkGreen => text.green(),
            NamedColor::DarkAqua => text.cyan(),
            NamedColor::DarkRed => text.red(),
            NamedColor::DarkPurple => text.purple(),
            NamedColor::Gold => text.yellow(),
            NamedColor::Gray => text.white(),
            NamedColor::DarkGray => text.bright_black(),
            NamedColor::Blue => text.bright_blue(),
            NamedColor::Green => text.bright_green(),
            NamedColor::Aqua => text.bright_cyan(),
            NamedColor::Red => text.bright_red(),
            NamedColor::LightPurple => text.bright_purple(),
            NamedColor::Yellow => text.bright_yellow(),
            NamedColor::White => text.bright_white(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Color, NamedColor, RGBColor};

    #[test]
    fn named_codes() {
        assert_eq!(NamedColor::from_code('0'), Some(NamedColor::Black));
        assert_eq!(NamedColor::from_code('6'), Some(NamedColor::Gold));
        assert_eq!(NamedColor::from_code('f'), Some(NamedColor::White));
        assert_eq!(NamedColor::from_code('B'), Some(NamedColor::Aqua));
        assert_eq!(NamedColor::from_code('g'), None);
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(RGBColor::from_hex("ff8000"), Some(RGBColor::new(255, 128, 0)));
        assert_eq!(RGBColor::from_hex("FF80"), None);
        assert_eq!(RGBColor::from_hex("GG0000"), None);
    }

    #[test]
    fn deserialize_color() {
        let color: Color = serde_json::from_str("\"#00FF00\"").unwrap();
        assert_eq!(color, Color::Rgb(RGBColor::new(0, 255, 0)));
        let color: Color = serde_json::from_str("\"dark_red\"").unwrap();
        assert_eq!(color, Color::Named(NamedColor::DarkRed));
        assert!(serde_json::from_str::<Color>("\"#00FF0\"").is_err());
        assert!(serde_json::from_str::<Color>("\"pink\"").is_err());
        let color: Color = serde_json::from_str("\"reset\"").unwrap();
        assert_eq!(color, Color::Reset);
    }
}
