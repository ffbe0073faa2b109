//! Pipe-delimited save format.
//!
//! ```text
//! Settings
//! <rows>|<cols>|<movesTotal>|<target>
//! Moves left
//! <movesRemaining>
//! Buttons
//! <v00>|<v01>|...            row-major
//! Next operators
//! <op0>|<op1>|...            + - * /
//! ```
//!
//! Decoding is all-or-nothing: it builds a fresh [`GameState`] and never
//! touches a live one.

use log::debug;

use crate::core::{GameState, Grid, Operator, OperatorQueue, Settings};
use crate::error::{GameError, Result};

pub const SETTINGS_HEADER: &str = "Settings";
pub const MOVES_HEADER: &str = "Moves left";
pub const BUTTONS_HEADER: &str = "Buttons";
pub const OPERATORS_HEADER: &str = "Next operators";

const SEPARATOR: char = '|';
const RECORD_LINES: usize = 8;

/// Encoder/decoder for the save text.
#[derive(Clone, Copy, Debug, Default)]
pub struct PersistenceCodec;

impl PersistenceCodec {
    /// Serialize a state.
    ///
    /// Writes up to `moves_remaining` operators; call
    /// [`GameState::materialize_operators`] first to write exactly that many.
    #[must_use]
    pub fn encode(state: &GameState) -> String {
        let settings = state.settings();
        let moves = state.moves_remaining();
        let lines = [
            SETTINGS_HEADER.to_string(),
            encode_settings(settings),
            MOVES_HEADER.to_string(),
            moves.to_string(),
            BUTTONS_HEADER.to_string(),
            join(state.grid().values()),
            OPERATORS_HEADER.to_string(),
            join(state.operators().iter().take(moves as usize)),
        ];
        lines.join("\n")
    }

    /// Parse save text into a new state.
    pub fn decode(text: &str) -> Result<GameState> {
        let mut lines: Vec<&str> = text.lines().collect();
        while lines.last().is_some_and(|line| line.trim().is_empty()) {
            lines.pop();
        }
        if lines.len() != RECORD_LINES {
            return Err(GameError::corrupt(
                lines.len().min(RECORD_LINES) + 1,
                format!("expected {RECORD_LINES} lines, found {}", lines.len()),
            ));
        }
        let mut reader = Reader { lines, next: 0 };

        reader.header(SETTINGS_HEADER)?;
        let (line, record) = reader.record()?;
        let settings = decode_settings(line, record)?;

        reader.header(MOVES_HEADER)?;
        let (line, record) = reader.record()?;
        let moves = parse_field::<u32>(line, record, "moves left")?;
        if moves == 0 || moves > settings.moves_total {
            return Err(GameError::corrupt(
                line,
                format!("moves left {moves} outside 1..={}", settings.moves_total),
            ));
        }

        reader.header(BUTTONS_HEADER)?;
        let (line, record) = reader.record()?;
        let values = split(record)
            .map(|field| parse_field::<u8>(line, field, "cell value"))
            .collect::<Result<Vec<_>>>()?;
        if values.len() != settings.cell_count() {
            return Err(GameError::corrupt(
                line,
                format!("expected {} cell values, found {}", settings.cell_count(), values.len()),
            ));
        }
        let grid = Grid::from_values(settings.rows, settings.cols, &values)
            .map_err(|err| GameError::corrupt(line, err.to_string()))?;

        reader.header(OPERATORS_HEADER)?;
        let (line, record) = reader.record()?;
        let operators = split(record)
            .map(|field| {
                field
                    .parse::<Operator>()
                    .map_err(|err| GameError::corrupt(line, err.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;
        let window = (moves as usize).min(settings.operator_capacity());
        if operators.len() < window || operators.len() > moves as usize {
            return Err(GameError::corrupt(
                line,
                format!("expected {window}..={moves} operators, found {}", operators.len()),
            ));
        }
        let queue = OperatorQueue::from_operators(settings.operator_capacity(), operators);

        let state = GameState::from_parts(settings, grid, queue, moves)
            .map_err(|err| GameError::corrupt(line, err.to_string()))?;
        debug!(
            "decoded {}x{} save with {moves} moves left",
            settings.rows, settings.cols
        );
        Ok(state)
    }

    /// Structural check without building anything the caller keeps.
    pub fn validate(text: &str) -> Result<()> {
        Self::decode(text).map(|_| ())
    }

    /// True if `text` would load.
    #[must_use]
    pub fn can_load(text: &str) -> bool {
        Self::validate(text).is_ok()
    }
}

/// Sequential line cursor with 1-based line numbers for errors.
struct Reader<'a> {
    lines: Vec<&'a str>,
    next: usize,
}

impl<'a> Reader<'a> {
    fn record(&mut self) -> Result<(usize, &'a str)> {
        let line = self.next + 1;
        let text = self
            .lines
            .get(self.next)
            .copied()
            .ok_or_else(|| GameError::corrupt(line, "unexpected end of file"))?;
        self.next += 1;
        Ok((line, text))
    }

    fn header(&mut self, expected: &str) -> Result<()> {
        let (line, text) = self.record()?;
        if text != expected {
            return Err(GameError::corrupt(
                line,
                format!("expected header {expected:?}, found {text:?}"),
            ));
        }
        Ok(())
    }
}

fn encode_settings(settings: &Settings) -> String {
    format!(
        "{rows}{SEPARATOR}{cols}{SEPARATOR}{moves}{SEPARATOR}{target}",
        rows = settings.rows,
        cols = settings.cols,
        moves = settings.moves_total,
        target = settings.target,
    )
}

fn decode_settings(line: usize, record: &str) -> Result<Settings> {
    let fields: Vec<&str> = split(record).collect();
    let [rows, cols, moves, target] = fields.as_slice() else {
        return Err(GameError::corrupt(
            line,
            format!("expected 4 settings fields, found {}", fields.len()),
        ));
    };
    let settings = Settings::new(
        parse_field(line, rows, "rows")?,
        parse_field(line, cols, "columns")?,
        parse_field(line, moves, "total moves")?,
        parse_field(line, target, "target")?,
    );
    settings
        .validate()
        .map_err(|err| GameError::corrupt(line, err.to_string()))?;
    Ok(settings)
}

fn parse_field<T: std::str::FromStr>(line: usize, field: &str, what: &str) -> Result<T> {
    field
        .parse()
        .map_err(|_| GameError::corrupt(line, format!("{what} {field:?} is not a valid number")))
}

fn split(record: &str) -> impl Iterator<Item = &str> {
    // An empty record has no fields, not one empty field.
    record.split(SEPARATOR).filter(move |_| !record.is_empty())
}

fn join<T: ToString>(items: impl Iterator<Item = T>) -> String {
    items
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(&SEPARATOR.to_string())
}
