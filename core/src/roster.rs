//! Roster grid: scheduled agents per (interval row × shift column).
//!
//! Cells arrive from an editable grid as numbers, strings or blanks.
//! Anything that does not start with a digit (after an optional `+`)
//! counts as zero. Counts too large for a cell saturate at u32::MAX.

use crate::{
    interval::Interval,
    types::{DEFAULT_SHIFT_COLUMNS, INTERVALS_PER_DAY},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Vec<Option<RawCell>>>", into = "Vec<Vec<u32>>")]
pub struct RosterGrid {
    rows: Vec<Vec<u32>>,
}

/// A grid cell as it appears on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawCell {
    Number(f64),
    Text(String),
}

impl RawCell {
    fn agents(&self) -> u32 {
        match self {
            RawCell::Number(n) if n.is_finite() && *n >= 0.0 => n.trunc().min(u32::MAX as f64) as u32,
            RawCell::Number(_) => 0,
            RawCell::Text(s) => parse_cell(s),
        }
    }
}

/// Leading-digit parse of a grid cell. "12", " 7 ", "+5", "3 agents"
/// parse; "", "abc" and "-2" give 0.
pub fn parse_cell(cell: &str) -> u32 {
    let trimmed = cell.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    unsigned
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u32, |acc, digit| {
            acc.saturating_mul(10).saturating_add(u32::from(digit - b'0'))
        })
}

impl From<Vec<Vec<Option<RawCell>>>> for RosterGrid {
    fn from(cells: Vec<Vec<Option<RawCell>>>) -> Self {
        let rows = cells
            .into_iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.as_ref().map_or(0, RawCell::agents))
                    .collect()
            })
            .collect();
        Self { rows }
    }
}

impl From<RosterGrid> for Vec<Vec<u32>> {
    fn from(grid: RosterGrid) -> Self {
        grid.rows
    }
}

impl RosterGrid {
    /// An all-blank 48 × `columns` grid.
    pub fn empty(columns: usize) -> Self {
        Self { rows: vec![vec![0; columns]; INTERVALS_PER_DAY] }
    }

    pub fn from_rows(rows: Vec<Vec<u32>>) -> Self {
        Self { rows }
    }

    /// Parse string cells as typed into the grid editor.
    pub fn from_cells(cells: Vec<Vec<String>>) -> Self {
        let rows = cells
            .iter()
            .map(|row| row.iter().map(|c| parse_cell(c)).collect())
            .collect();
        Self { rows }
    }

    /// Every cell of a 48 × 17 grid set to `count`.
    pub fn fill_uniform(count: u32) -> Self {
        Self { rows: vec![vec![count; DEFAULT_SHIFT_COLUMNS]; INTERVALS_PER_DAY] }
    }

    pub fn rows(&self) -> &[Vec<u32>] {
        &self.rows
    }

    pub fn columns(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Raw scheduled headcount for one interval: the row sum.
    /// Missing rows count as zero.
    pub fn headcount(&self, interval: Interval) -> u64 {
        self.rows
            .get(interval.index())
            .map(|row| row.iter().map(|&n| u64::from(n)).sum())
            .unwrap_or(0)
    }

    /// Grand total over every interval row.
    pub fn total(&self) -> u64 {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .map(|&n| u64::from(n))
            .sum()
    }

    /// Place `agents` into shift column `column` for `shift_length`
    /// consecutive intervals starting at row `column`, wrapping past
    /// midnight. The column is cleared first; zero agents only clears.
    pub fn fill_shift(&mut self, column: usize, agents: u32, shift_length: usize) {
        self.ensure_shape(column + 1);
        for row in &mut self.rows {
            row[column] = 0;
        }
        if agents == 0 {
            return;
        }
        for offset in 0..shift_length.min(INTERVALS_PER_DAY) {
            let row = (column + offset) % INTERVALS_PER_DAY;
            self.rows[row][column] = agents;
        }
    }

    fn ensure_shape(&mut self, columns: usize) {
        if self.rows.len() < INTERVALS_PER_DAY {
            self.rows.resize(INTERVALS_PER_DAY, Vec::new());
        }
        for row in &mut self.rows {
            if row.len() < columns {
                row.resize(columns, 0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_parse_leading_digits() {
        assert_eq!(parse_cell("12"), 12);
        assert_eq!(parse_cell(" 7"), 7);
        assert_eq!(parse_cell("3 agents"), 3);
        assert_eq!(parse_cell(""), 0);
        assert_eq!(parse_cell("abc"), 0);
        assert_eq!(parse_cell("-2"), 0);
        assert_eq!(parse_cell("+5"), 5);
        assert_eq!(parse_cell("+-5"), 0);
        assert_eq!(parse_cell("99999999999"), u32::MAX);
    }

    #[test]
    fn wire_cells_accept_numbers_strings_and_blanks() {
        let grid: RosterGrid = serde_json::from_str(r#"[[1, "2", "", null, "x"], [4.9]]"#).unwrap();
        assert_eq!(grid.rows(), &[vec![1, 2, 0, 0, 0], vec![4]]);
    }
}
