//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark, Word};
use clap::ValueEnum;
use colored::{ColoredString, Colorize};

/// Color palette for rendered result tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Dracula,
}

/// RGB colors used by a theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub hit: (u8, u8, u8),
    pub present: (u8, u8, u8),
    pub miss: (u8, u8, u8),
    pub text: (u8, u8, u8),
}

impl Theme {
    #[must_use]
    pub const fn palette(self) -> Palette {
        match self {
            Self::Light => Palette {
                hit: (106, 170, 100),
                present: (201, 180, 88),
                miss: (120, 124, 126),
                text: (255, 255, 255),
            },
            Self::Dark => Palette {
                hit: (83, 141, 78),
                present: (181, 159, 59),
                miss: (58, 58, 60),
                text: (248, 248, 248),
            },
            Self::Dracula => Palette {
                hit: (80, 250, 123),
                present: (241, 250, 140),
                miss: (98, 114, 164),
                text: (40, 42, 54),
            },
        }
    }
}

impl Palette {
    const fn background(&self, mark: Mark) -> (u8, u8, u8) {
        match mark {
            Mark::Hit => self.hit,
            Mark::Present => self.present,
            Mark::Miss => self.miss,
        }
    }
}

/// How a guess result is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultStyle {
    /// Raw `b`/`y`/`g` string
    Letters,
    /// ⬛🟨🟩 squares
    Emoji,
    /// The guess letters on colored backgrounds
    Tiles(Theme),
}

impl ResultStyle {
    /// Pick a style from the display flags
    #[must_use]
    pub const fn from_flags(color: bool, emoji: bool, theme: Theme) -> Self {
        match (color, emoji) {
            (true, _) => Self::Tiles(theme),
            (false, true) => Self::Emoji,
            (false, false) => Self::Letters,
        }
    }
}

/// Format feedback as emoji squares
#[must_use]
pub fn feedback_to_emoji(feedback: Feedback) -> String {
    feedback
        .marks()
        .into_iter()
        .map(|mark| match mark {
            Mark::Miss => '⬛',
            Mark::Present => '🟨',
            Mark::Hit => '🟩',
        })
        .collect()
}

/// One ` x ` tile per letter, colored by its mark
#[must_use]
pub fn feedback_tiles(guess: &Word, feedback: Feedback, theme: Theme) -> Vec<ColoredString> {
    let palette = theme.palette();
    let (tr, tg, tb) = palette.text;

    guess
        .chars()
        .iter()
        .zip(feedback.marks())
        .map(|(&letter, mark)| {
            let (r, g, b) = palette.background(mark);
            format!(" {} ", char::from(letter))
                .truecolor(tr, tg, tb)
                .on_truecolor(r, g, b)
                .bold()
        })
        .collect()
}

/// Render a guess record's result in the given style
#[must_use]
pub fn format_result(guess: &Word, feedback: Feedback, style: ResultStyle) -> String {
    match style {
        ResultStyle::Letters => feedback.to_string(),
        ResultStyle::Emoji => feedback_to_emoji(feedback),
        ResultStyle::Tiles(theme) => feedback_tiles(guess, feedback, theme)
            .iter()
            .map(ToString::to_string)
            .collect(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
