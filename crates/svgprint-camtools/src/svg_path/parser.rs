//! Interprets tokenized path commands into waypoints.
//!
//! Curves and arcs are chorded: only the endpoint of each segment is kept,
//! so `C`, `S`, `Q` and `A` all become straight `Line` waypoints.

use super::tokenizer::{leading_text, tokenize, PathCommand};
use crate::error::{PathDataError, PathDataResult};
use svgprint_core::{Path, Point, Waypoint};

/// Pen state while interpreting one path
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cursor {
    /// Absolute position after the last command
    pub current: Point,
    /// Position of the most recent moveto, used by close-path
    pub path_start: Point,
}

impl Cursor {
    fn resolve(&self, x: f64, y: f64, relative: bool) -> Point {
        if relative {
            self.current.offset(x, y)
        } else {
            Point::new(x, y)
        }
    }

    /// Apply one command, appending its waypoints to `out`.
    ///
    /// Parameters are consumed in whole groups; a trailing partial group is
    /// ignored. `T`/`t` leave the cursor untouched.
    pub fn apply(self, cmd: &PathCommand, out: &mut Vec<Waypoint>) -> Cursor {
        let relative = cmd.is_relative();
        let mut cursor = self;

        match cmd.letter.to_ascii_uppercase() {
            'M' => {
                let mut pairs = cmd.params.chunks_exact(2);
                if let Some(first) = pairs.next() {
                    let p = cursor.resolve(first[0], first[1], relative);
                    out.push(Waypoint::move_to(p.x, p.y));
                    cursor = Cursor {
                        current: p,
                        path_start: p,
                    };
                    // Extra pairs after a moveto are implicit linetos.
                    for pair in pairs {
                        cursor.current = cursor.resolve(pair[0], pair[1], relative);
                        out.push(Waypoint::line_to(cursor.current.x, cursor.current.y));
                    }
                }
            }
            'H' => {
                for &x in &cmd.params {
                    cursor.current.x = if relative { cursor.current.x + x } else { x };
                    out.push(Waypoint::line_to(cursor.current.x, cursor.current.y));
                }
            }
            'V' => {
                for &y in &cmd.params {
                    cursor.current.y = if relative { cursor.current.y + y } else { y };
                    out.push(Waypoint::line_to(cursor.current.x, cursor.current.y));
                }
            }
            'L' | 'C' | 'S' | 'Q' | 'A' => {
                let size = cmd.group_size().unwrap_or(2);
                for group in cmd.params.chunks_exact(size) {
                    let (x, y) = (group[size - 2], group[size - 1]);
                    cursor.current = cursor.resolve(x, y, relative);
                    out.push(Waypoint::line_to(cursor.current.x, cursor.current.y));
                }
            }
            'Z' => {
                if cursor.current != cursor.path_start {
                    out.push(Waypoint::line_to(cursor.path_start.x, cursor.path_start.y));
                }
                cursor.current = cursor.path_start;
            }
            other => {
                tracing::trace!(command = %other, "Ignoring unsupported path command");
            }
        }

        cursor
    }
}

/// Interpret tokenized commands, starting from the origin.
pub fn interpret(commands: &[PathCommand]) -> Path {
    let (_, waypoints) = commands.iter().fold(
        (Cursor::default(), Vec::new()),
        |(cursor, mut waypoints), cmd| {
            let cursor = cursor.apply(cmd, &mut waypoints);
            (cursor, waypoints)
        },
    );
    Path::from(waypoints)
}

/// Parse path data leniently.
///
/// Never fails: unrecognized fragments and truncated parameter groups are
/// dropped without affecting later commands.
pub fn parse(path_data: &str) -> Path {
    let commands = tokenize(path_data);
    let path = interpret(&commands);
    tracing::debug!(
        commands = commands.len(),
        waypoints = path.len(),
        "Parsed path data"
    );
    path
}

/// Parse path data, rejecting anything the lenient parser would drop.
pub fn parse_strict(path_data: &str) -> PathDataResult<Path> {
    if let Some(text) = leading_text(path_data) {
        return Err(PathDataError::LeadingText(text.to_string()));
    }

    let commands = tokenize(path_data);
    for cmd in &commands {
        validate(cmd)?;
    }
    Ok(interpret(&commands))
}

fn validate(cmd: &PathCommand) -> PathDataResult<()> {
    if let Some(fragment) = &cmd.dropped {
        return Err(PathDataError::MalformedNumber {
            command: cmd.letter,
            fragment: fragment.clone(),
        });
    }

    if matches!(cmd.letter, 'T' | 't') {
        return Err(PathDataError::UnsupportedCommand(cmd.letter));
    }

    match cmd.group_size() {
        None if !cmd.params.is_empty() => Err(PathDataError::UnexpectedParameters(cmd.letter)),
        None => Ok(()),
        Some(_) if cmd.params.is_empty() => Err(PathDataError::MissingParameters(cmd.letter)),
        Some(size) if cmd.params.len() % size != 0 => Err(PathDataError::IncompleteGroup {
            command: cmd.letter,
            group_size: size,
            leftover: cmd.params.len() % size,
        }),
        Some(_) => Ok(()),
    }
}
