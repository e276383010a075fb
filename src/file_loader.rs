//! File loading and validation utilities for maze description files.
//!
//! A maze file holds three header lines (`width height`, `startX startY`, `endX endY`) followed by
//! one line per grid row. Row tokens are separated by single spaces and a token equal to `1` marks
//! a wall at (token index, row index).

use std::{collections::HashSet, fs, iter, path::Path};

use color_eyre::eyre::{bail, ensure, eyre, Result, WrapErr as _};
use log::debug;

use crate::{maze::Maze, types::Coordinate};

/// Strictness applied when checking a maze file against its own header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Validation {
    /// Trust the declared dimensions and only use them to size the output.
    #[default]
    Lenient,
    /// Reject files whose grid or endpoints disagree with the declared dimensions.
    Strict,
}

/// Reads and parses the maze file at `path`.
///
/// # Errors
///
/// This function may return errors if:
/// - The file cannot be read
/// - Its contents fail to [`parse`]
pub fn load(path: &Path, validation: Validation) -> Result<Maze> {
    let contents = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read maze file {}", path.display()))?;

    parse(&contents, validation)
        .wrap_err_with(|| format!("failed to parse maze file {}", path.display()))
}

/// Parses the textual maze description held in `contents`.
///
/// Rows that follow the header are scanned for wall tokens; any token other than `1` is open space.
/// With [`Validation::Lenient`] the declared dimensions are stored as they are, with
/// [`Validation::Strict`] they must match the grid that follows.
///
/// # Errors
///
/// This function may return errors if:
/// - One of the three header lines is missing or holds fewer than two values
/// - A header value is not a valid integer
/// - Strict validation is requested and the file disagrees with its header
pub fn parse(contents: &str, validation: Validation) -> Result<Maze> {
    let mut lines = split_lines(contents);

    let (width, height) = parse_pair(lines.next(), "dimensions")?;
    let (start_x, start_y) = parse_pair(lines.next(), "start")?;
    let (end_x, end_y) = parse_pair(lines.next(), "end")?;

    let mut walls = HashSet::new();
    let mut row_widths = Vec::new();
    for (row, line) in lines.enumerate() {
        let y = i32::try_from(row).wrap_err("maze has too many rows")?;
        for (column, token) in line.split(' ').enumerate() {
            if token == "1" {
                let x = i32::try_from(column).wrap_err("maze row has too many columns")?;
                let _ = walls.insert(Coordinate::new(x, y));
            }
        }
        row_widths.push(line.split(' ').count());
    }

    debug!(
        "parsed maze header {width}x{height}, {} rows, {} walls",
        row_widths.len(),
        walls.len()
    );

    let maze = Maze::new(
        Coordinate::new(start_x, start_y),
        Coordinate::new(end_x, end_y),
        walls,
        width,
        height,
    );

    if validation == Validation::Strict {
        check_dimensions(&maze, &row_widths)?;
    }

    Ok(maze)
}

/// Splits `contents` into lines ended by `\n`, `\r\n` or a lone `\r`.
///
/// A terminator at the very end of the text does not start an extra empty line.
fn split_lines(contents: &str) -> impl Iterator<Item = &str> + '_ {
    let mut rest = contents;
    iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }

        let Some(end) = rest.find(['\n', '\r']) else {
            let line = rest;
            rest = "";
            return Some(line);
        };

        let (line, tail) = rest.split_at(end);
        rest = tail
            .strip_prefix("\r\n")
            .unwrap_or_else(|| tail.get(1..).unwrap_or_default());
        Some(line)
    })
}

/// Parses a header line made of two space-separated integers.
///
/// Values past the second one are ignored.
fn parse_pair(line: Option<&str>, name: &str) -> Result<(i32, i32)> {
    let line = line.ok_or_else(|| eyre!("missing {name} line"))?;
    let (first, rest) = line
        .split_once(' ')
        .ok_or_else(|| eyre!("{name} line `{line}` holds a single value"))?;
    let second = rest.split_once(' ').map_or(rest, |(second, _)| second);

    Ok((parse_value(first, name)?, parse_value(second, name)?))
}

/// Parses one header value.
fn parse_value(token: &str, name: &str) -> Result<i32> {
    token
        .parse()
        .wrap_err_with(|| format!("invalid {name} value `{token}`"))
}

/// Checks a parsed maze against the rows that were read for it.
///
/// This function ensures the declared dimensions are non-negative, that exactly `height` rows of
/// `width` tokens follow the header, and that both endpoints lie inside the grid.
fn check_dimensions(maze: &Maze, row_widths: &[usize]) -> Result<()> {
    let width = usize::try_from(maze.width())
        .wrap_err_with(|| format!("declared width {} is negative", maze.width()))?;
    let height = usize::try_from(maze.height())
        .wrap_err_with(|| format!("declared height {} is negative", maze.height()))?;

    ensure!(
        row_widths.len() == height,
        "declared height {height} but found {} rows",
        row_widths.len()
    );

    if let Some((row, found)) = row_widths
        .iter()
        .enumerate()
        .find(|&(_, &found)| found != width)
    {
        bail!("declared width {width} but row {row} holds {found} values");
    }

    ensure!(
        maze.contains(maze.start()),
        "start {:?} lies outside the declared grid",
        maze.start()
    );
    ensure!(
        maze.contains(maze.end()),
        "end {:?} lies outside the declared grid",
        maze.end()
    );

    Ok(())
}
