//! Legacy colour-code formatting for titles, item names and lore.
//!
//! `&` codes are translated to the `§` section sign the client renders, and
//! `&#RRGGBB` hex colours to the `§x§R§R§G§G§B§B` form.

/// Section sign used by the client for formatting codes
pub const SECTION_SIGN: char = '§';
/// Alternate colour code character accepted in markup
pub const ALT_COLOR_CHAR: char = '&';
/// Longest title a menu grid may carry
pub const MAX_TITLE_LENGTH: usize = 32;

const LEGACY_CODES: &str = "0123456789AaBbCcDdEeFfKkLlMmNnOoRrXx";

/// Converts markup text into display-ready text
pub trait TextFormatter: Send + Sync {
    fn format(&self, text: &str) -> String;
}

/// Formatter for `&` colour codes and `&#RRGGBB` hex colours
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyColorFormatter;

impl TextFormatter for LegacyColorFormatter {
    fn format(&self, text: &str) -> String {
        colorize(text)
    }
}

/// Translate `&` colour codes into section-sign codes
pub fn colorize(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 8);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == ALT_COLOR_CHAR {
            if let Some(hex) = hex_color_at(&chars, i + 1) {
                out.push(SECTION_SIGN);
                out.push('x');
                for digit in hex.chars() {
                    out.push(SECTION_SIGN);
                    out.push(digit.to_ascii_lowercase());
                }
                i += 8;
                continue;
            }
            if let Some(code) = chars.get(i + 1).filter(|n| LEGACY_CODES.contains(**n)) {
                out.push(SECTION_SIGN);
                out.push(code.to_ascii_lowercase());
                i += 2;
                continue;
            }
        }
        out.push(c);
        i += 1;
    }

    out
}

/// `#RRGGBB` starting at `start`, without the `#`
fn hex_color_at(chars: &[char], start: usize) -> Option<String> {
    if chars.get(start) != Some(&'#') {
        return None;
    }
    let digits = chars.get(start + 1..start + 7)?;
    if digits.iter().all(|d| d.is_ascii_hexdigit()) {
        Some(digits.iter().collect())
    } else {
        None
    }
}

/// Colourize every line of `lines`
pub fn colorize_all<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines.iter().map(|line| colorize(line.as_ref())).collect()
}

/// Remove section-sign formatting codes
pub fn strip_color(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == SECTION_SIGN {
            chars.next();
        } else {
            out.push(c);
        }
    }
    out
}

/// Upper-case the first letter of every word and lower-case the rest
pub fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Left-pad `text` so its visible part sits in the middle of `width` columns
pub fn center_text(text: &str, width: usize) -> String {
    let visible = strip_color(text).chars().count();
    let padding = width.saturating_sub(visible) / 2;
    format!("{}{}", " ".repeat(padding), text)
}

/// Keep at most [`MAX_TITLE_LENGTH`] characters
pub fn truncate_title(title: &str) -> String {
    title.chars().take(MAX_TITLE_LENGTH).collect()
}
