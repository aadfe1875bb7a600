//! Splits SVG path data into commands and numeric parameters.

use regex::Regex;
use std::sync::LazyLock;

static COMMAND_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[MLHVZCSQTAmlhvzcsqta][^MLHVZCSQTAmlhvzcsqta]*").expect("invalid command regex")
});

static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("invalid number regex")
});

/// One drawing command with its parameters
#[derive(Debug, Clone, PartialEq)]
pub struct PathCommand {
    /// Command letter; uppercase is absolute, lowercase relative
    pub letter: char,
    /// Every numeric literal found between this letter and the next one
    pub params: Vec<f64>,
    /// Non-separator text the number matcher skipped, if any
    pub dropped: Option<String>,
}

impl PathCommand {
    pub fn is_relative(&self) -> bool {
        self.letter.is_ascii_lowercase()
    }

    /// Number of parameters one repetition of this command consumes.
    ///
    /// `None` for close-path, which takes no parameters.
    pub fn group_size(&self) -> Option<usize> {
        match self.letter.to_ascii_uppercase() {
            'M' | 'L' | 'T' => Some(2),
            'H' | 'V' => Some(1),
            'S' | 'Q' => Some(4),
            'C' => Some(6),
            'A' => Some(7),
            _ => None,
        }
    }

    /// Number of complete parameter groups carried by this command
    pub fn complete_groups(&self) -> usize {
        match self.group_size() {
            Some(size) => self.params.len() / size,
            None => 0,
        }
    }
}

/// Tokenize path data into commands.
///
/// Text before the first command letter is ignored. Inside a command only
/// substrings matching a signed decimal or scientific literal are kept;
/// anything else is skipped and recorded in [`PathCommand::dropped`].
pub fn tokenize(path_data: &str) -> Vec<PathCommand> {
    COMMAND_RUN
        .find_iter(path_data)
        .filter_map(|run| {
            let mut chars = run.as_str().chars();
            let letter = chars.next()?;
            let body = chars.as_str();

            let params: Vec<f64> = NUMBER
                .find_iter(body)
                .filter_map(|m| m.as_str().parse::<f64>().ok())
                .collect();

            let leftover: String = NUMBER
                .replace_all(body, " ")
                .chars()
                .filter(|c| !c.is_whitespace() && *c != ',')
                .collect();

            Some(PathCommand {
                letter,
                params,
                dropped: (!leftover.is_empty()).then_some(leftover),
            })
        })
        .collect()
}

/// Text preceding the first command letter, trimmed, if any
pub fn leading_text(path_data: &str) -> Option<&str> {
    let end = COMMAND_RUN
        .find(path_data)
        .map_or(path_data.len(), |m| m.start());
    let leading = path_data[..end].trim();
    (!leading.is_empty()).then_some(leading)
}
