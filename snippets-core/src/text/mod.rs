use std::borrow::Cow;

use color::{Color, NamedColor, RGBColor};
use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};
use style::Style;

pub mod color;
pub mod legacy;
pub mod style;

/// A piece of chat text with its formatting and any children appended after it.
///
/// Serializes to the JSON chat format.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct TextComponent<'a> {
    pub text: Cow<'a, str>,
    #[serde(flatten)]
    pub style: Style,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<TextComponent<'a>>,
}

impl<'a> TextComponent<'a> {
    pub fn text(text: &'a str) -> Self {
        Self::from_cow(Cow::Borrowed(text))
    }

    pub fn text_string(text: String) -> Self {
        Self::from_cow(Cow::Owned(text))
    }

    fn from_cow(text: Cow<'a, str>) -> Self {
        Self {
            text,
            ..Default::default()
        }
    }

    pub fn add_child(mut self, child: TextComponent<'a>) -> Self {
        self.extra.push(child);
        self
    }

    /// The text without any styling, children included.
    pub fn to_plain(&self) -> String {
        let mut text = self.text.to_string();
        for child in &self.extra {
            text += &child.to_plain();
        }
        text
    }

    /// Renders the component with ANSI escapes for the server console.
    /// Obfuscation has no terminal equivalent and is ignored.
    pub fn to_pretty_console(&self) -> String {
        let style = &self.style;
        let mut text: ColoredString = match style.color {
            Some(color) => color.console_color(&self.text),
            None => self.text.normal(),
        };
        if style.bold == Some(true) {
            text = text.bold();
        }
        if style.italic == Some(true) {
            text = text.italic();
        }
        if style.underlined == Some(true) {
            text = text.underline();
        }
        if style.strikethrough == Some(true) {
            text = text.strikethrough();
        }
        let mut text = text.to_string();
        for child in &self.extra {
            text += &child.to_pretty_console();
        }
        text
    }

    fn styled(mut self, apply: impl FnOnce(Style) -> Style) -> Self {
        self.style = apply(std::mem::take(&mut self.style));
        self
    }

    pub fn color(self, color: Color) -> Self {
        self.styled(|style| style.color(color))
    }

    pub fn color_named(self, color: NamedColor) -> Self {
        self.color(Color::Named(color))
    }

    pub fn color_rgb(self, color: RGBColor) -> Self {
        self.color(Color::Rgb(color))
    }

    pub fn bold(self) -> Self {
        self.styled(Style::bold)
    }

    pub fn italic(self) -> Self {
        self.styled(Style::italic)
    }

    pub fn underlined(self) -> Self {
        self.styled(Style::underlined)
    }

    pub fn strikethrough(self) -> Self {
        self.styled(Style::strikethrough)
    }

    pub fn obfuscated(self) -> Self {
        self.styled(Style::obfuscated)
    }
}

#[cfg(test)]
mod test {
    use super::color::NamedColor;
    use super::TextComponent;

    #[test]
    fn json_shape() {
        let component = TextComponent::text("Hello")
            .color_named(NamedColor::Gold)
            .bold()
            .add_child(TextComponent::text(" world"));
        let json = serde_json::to_value(&component).unwrap();
        assert_eq!(json["text"], "Hello");
        assert_eq!(json["color"], "gold");
        assert_eq!(json["bold"], true);
        assert_eq!(json["extra"][0]["text"], " world");
        assert!(json["extra"][0].get("color").is_none());
    }

    #[test]
    fn plain_text_flattens_children() {
        let component = TextComponent::text("a")
            .add_child(TextComponent::text("b").add_child(TextComponent::text("c")));
        assert_eq!(component.to_plain(), "abc");
    }
}
