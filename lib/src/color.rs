use std::io::{self, Write};

use crate::pos::PartOfSpeech;

/// ANSI SGR foreground codes understood by the terminal.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    Reset,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Default,
    Err,
}

impl Color {
    pub fn code(&self) -> &'static str {
        match self {
            Color::Reset => "0",
            Color::Black => "30",
            Color::Red => "31",
            Color::Green => "32",
            Color::Yellow => "33",
            Color::Blue => "34",
            Color::Magenta => "35",
            Color::Cyan => "36",
            Color::White => "37",
            Color::Default => "39",
            Color::Err => "91",
        }
    }
}

/// Wraps `text` in the escape sequence selecting `color`, then resets.
pub fn paint(text: &str, color: Color) -> String {
    format!("\x1b[{}m{}\x1b[0m", color.code(), text)
}

/// Fixed category-to-color table plus the legend block that documents it.
#[derive(Clone, Copy, Debug, Default)]
pub struct Palette;

impl Palette {
    pub fn new() -> Self {
        Self
    }

    pub fn color_of(&self, pos: PartOfSpeech) -> Color {
        match pos {
            PartOfSpeech::Noun => Color::Yellow,
            PartOfSpeech::Pronoun => Color::Green,
            PartOfSpeech::Verb => Color::Blue,
            PartOfSpeech::Adverb => Color::Cyan,
            PartOfSpeech::Adjective => Color::Magenta,
            PartOfSpeech::Preposition => Color::Red,
            PartOfSpeech::Conjunction => Color::White,
        }
    }

    /// Color for words no category claimed.
    pub fn fallback(&self) -> Color {
        Color::White
    }

    /// Renders one word in its category color, or the fallback color.
    pub fn render(&self, word: &str, pos: Option<PartOfSpeech>) -> String {
        let color = match pos {
            Some(pos) => self.color_of(pos),
            None => self.fallback(),
        };
        paint(word, color)
    }

    /// One line per category, each name printed in its own color, so a
    /// reader can map colors back to categories.
    pub fn write_legend<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "=== color key ===")?;
        for pos in PartOfSpeech::ALL {
            writeln!(out, "{}", paint(pos.name(), self.color_of(pos)))?;
        }
        writeln!(out, "=================")?;
        writeln!(out)
    }
}
