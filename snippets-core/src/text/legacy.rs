//! Legacy `§` formatting codes.
//!
//! Chat and item names on the server side are still plain strings carrying
//! section-sign codes. Plugin authors write them with `&` instead and hex
//! colors as `<#RRGGBB>`; [`colorize`] turns that into the server form.

use super::{
    color::{Color, NamedColor, RGBColor},
    style::Style,
    TextComponent,
};

pub const SECTION_SIGN: char = '§';

/// Every char that may follow a section sign.
const FORMAT_CODES: &str = "0123456789AaBbCcDdEeFfKkLlMmNnOoRrXx";

fn is_format_code(c: char) -> bool {
    FORMAT_CODES.contains(c)
}

/// Colorizes a string which may contain `&` codes or `<#RRGGBB>` hex markers.
pub fn colorize(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find("<#") {
        let after = &rest[start + 2..];
        match after.get(..7) {
            Some(marker) if marker.ends_with('>') && RGBColor::from_hex(&marker[..6]).is_some() => {
                output.push_str(&rest[..start]);
                push_hex_sequence(&mut output, &marker[..6]);
                rest = &after[7..];
            }
            _ => {
                output.push_str(&rest[..start + 2]);
                rest = after;
            }
        }
    }
    output.push_str(rest);
    translate_alternate_color_codes('&', &output)
}

/// `§x§R§R§G§G§B§B`, keeping the case of the digits.
fn push_hex_sequence(output: &mut String, hex: &str) {
    output.push(SECTION_SIGN);
    output.push('x');
    for digit in hex.chars() {
        output.push(SECTION_SIGN);
        output.push(digit);
    }
}

/// Replaces `alt` with a section sign wherever it is directly followed by a
/// valid formatting code. The code char is lowercased.
pub fn translate_alternate_color_codes(alt: char, input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(&code) if c == alt && is_format_code(code) => {
                output.push(SECTION_SIGN);
                output.push(code.to_ascii_lowercase());
                chars.next();
            }
            _ => output.push(c),
        }
    }
    output
}

/// Removes every section sign code pair.
pub fn strip_colors(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(&code) if c == SECTION_SIGN && is_format_code(code) => {
                chars.next();
            }
            _ => output.push(c),
        }
    }
    output
}

/// Parses a section-sign colorized string into a component tree.
///
/// A color code resets the formatting flags, `§r` resets everything. Broken
/// hex sequences and unknown codes are kept as literal text.
pub fn to_component(input: &str) -> TextComponent<'static> {
    let mut root = TextComponent::default();
    let mut style = Style::default();
    let mut buffer = String::new();

    let mut rest = input;
    while let Some(index) = rest.find(SECTION_SIGN) {
        buffer.push_str(&rest[..index]);
        let after = &rest[index + SECTION_SIGN.len_utf8()..];
        let Some(code) = after.chars().next() else {
            buffer.push(SECTION_SIGN);
            rest = after;
            break;
        };
        let next_style = match code.to_ascii_lowercase() {
            'x' => parse_hex_sequence(&after[1..]).map(|(color, consumed)| {
                (Style::default().color(Color::Rgb(color)), 1 + consumed)
            }),
            'r' => Some((Style::default(), 1)),
            'k' => Some((style.clone().obfuscated(), 1)),
            'l' => Some((style.clone().bold(), 1)),
            'm' => Some((style.clone().strikethrough(), 1)),
            'n' => Some((style.clone().underlined(), 1)),
            'o' => Some((style.clone().italic(), 1)),
            c => NamedColor::from_code(c).map(|named| (Style::default().color_named(named), 1)),
        };
        match next_style {
            Some((next, consumed)) => {
                flush(&mut root, &mut buffer, &style);
                style = next;
                rest = &after[consumed..];
            }
            None => {
                buffer.push(SECTION_SIGN);
                rest = after;
            }
        }
    }
    buffer.push_str(rest);
    flush(&mut root, &mut buffer, &style);
    root
}

/// Reads `§R§R§G§G§B§B` after an `x` code; returns the color and the bytes used.
fn parse_hex_sequence(input: &str) -> Option<(RGBColor, usize)> {
    let mut hex = String::with_capacity(6);
    let mut chars = input.chars();
    let mut consumed = 0;
    for _ in 0..6 {
        if chars.next()? != SECTION_SIGN {
            return None;
        }
        let digit = chars.next()?;
        hex.push(digit);
        consumed += SECTION_SIGN.len_utf8() + digit.len_utf8();
    }
    RGBColor::from_hex(&hex).map(|color| (color, consumed))
}

fn flush(root: &mut TextComponent<'static>, buffer: &mut String, style: &Style) {
    if buffer.is_empty() {
        return;
    }
    root.extra.push(TextComponent {
        text: std::mem::take(buffer).into(),
        style: style.clone(),
        extra: vec![],
    });
}

#[cfg(test)]
mod test {
    use super::{colorize, strip_colors, to_component, translate_alternate_color_codes};
    use crate::text::color::{Color, NamedColor, RGBColor};

    #[test]
    fn ampersand_codes() {
        assert_eq!(colorize("&aHello &lWorld"), "§aHello §lWorld");
        assert_eq!(colorize("&AUpper"), "§aUpper");
    }

    #[test]
    fn ampersand_without_code_is_kept() {
        assert_eq!(colorize("Tom & Jerry"), "Tom & Jerry");
        assert_eq!(colorize("trailing &"), "trailing &");
        assert_eq!(colorize("&&c"), "&§c");
        assert_eq!(colorize("&zNope"), "&zNope");
    }

    #[test]
    fn hex_marker() {
        assert_eq!(colorize("<#FF0000>Red"), "§x§F§F§0§0§0§0Red");
        assert_eq!(colorize("a<#00ff7f>b<#123456>c"), "a§x§0§0§f§f§7§fb§x§1§2§3§4§5§6c");
    }

    #[test]
    fn broken_hex_markers_are_kept() {
        assert_eq!(colorize("<#FF00>x"), "<#FF00>x");
        assert_eq!(colorize("<#FF00GG>x"), "<#FF00GG>x");
        assert_eq!(colorize("<#FF00000>x"), "<#FF00000>x");
        assert_eq!(colorize("<#<#ABCDEF>"), "<#§x§A§B§C§D§E§F");
        assert_eq!(colorize("<#FF€000>"), "<#FF€000>");
    }

    #[test]
    fn hex_and_ampersand_together() {
        assert_eq!(
            colorize("&7[<#AABBCC>Shop&7] &fWelcome"),
            "§7[§x§A§A§B§B§C§CShop§7] §fWelcome"
        );
    }

    #[test]
    fn idempotent() {
        for input in [
            "&7[&bTest&3Plugin&7] hi",
            "<#FF0000>Red &lbold",
            "&&c & <#12345> <#ABCDEF>",
            "plain",
            "",
        ] {
            let once = colorize(input);
            assert_eq!(colorize(&once), once, "input: {input}");
        }
    }

    #[test]
    fn alternate_char() {
        assert_eq!(translate_alternate_color_codes('%', "%cHi &c"), "§cHi &c");
    }

    #[test]
    fn strip() {
        assert_eq!(strip_colors(&colorize("&7[<#AABBCC>Shop&7]")), "[Shop]");
        assert_eq!(strip_colors("§ lonely"), "§ lonely");
    }

    #[test]
    fn component_from_legacy() {
        let component = to_component(&colorize("plain &cred &lbold&rreset"));
        let parts: Vec<_> = component.extra.iter().map(|c| c.text.as_ref()).collect();
        assert_eq!(parts, ["plain ", "red ", "bold", "reset"]);
        assert_eq!(component.extra[0].style.color, None);
        assert_eq!(
            component.extra[1].style.color,
            Some(Color::Named(NamedColor::Red))
        );
        assert_eq!(component.extra[2].style.bold, Some(true));
        assert_eq!(
            component.extra[2].style.color,
            Some(Color::Named(NamedColor::Red))
        );
        assert!(component.extra[3].style.is_empty());
    }

    #[test]
    fn component_hex_color() {
        let component = to_component(&colorize("<#1020FF>blue"));
        assert_eq!(component.extra.len(), 1);
        assert_eq!(
            component.extra[0].style.color,
            Some(Color::Rgb(RGBColor::new(0x10, 0x20, 0xFF)))
        );
    }

    #[test]
    fn component_keeps_broken_sequences() {
        assert_eq!(to_component("§x§F§Fbad").to_plain(), "§xbad");
        assert_eq!(to_component("end§").to_plain(), "end§");
        assert_eq!(to_component("§zq").to_plain(), "§zq");
    }
}
