use serde::{Deserialize, Serialize};

use super::color::{Color, NamedColor};

/// Formatting of a single component. `None` leaves the field to the parent.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underlined: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,
    /// Rendered as randomly cycling glyphs by the client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obfuscated: Option<bool>,
}

impl Style {
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn color_named(self, color: NamedColor) -> Self {
        self.color(Color::Named(color))
    }

    pub fn bold(mut self) -> Self {
        self.bold = Some(true);
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = Some(true);
        self
    }

    pub fn underlined(mut self) -> Self {
        self.underlined = Some(true);
        self
    }

    pub fn strikethrough(mut self) -> Self {
        self.strikethrough = Some(true);
        self
    }

    pub fn obfuscated(mut self) -> Self {
        self.obfuscated = Some(true);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod test {
    use super::Style;
    use crate::text::color::{Color, NamedColor};

    #[test]
    fn builders_set_flags() {
        let style = Style::default().bold().color_named(NamedColor::Red);
        assert_eq!(style.bold, Some(true));
        assert_eq!(style.color, Some(Color::Named(NamedColor::Red)));
        assert_eq!(style.italic, None);
        assert!(!style.is_empty());
        assert!(Style::default().is_empty());
    }
}
