//! Board files for the grid puzzles.
//!
//! Two encodings are accepted for each puzzle: the whitespace-separated text
//! format the boards are distributed in, and a JSON document. Files ending
//! in `.json` are decoded as JSON, anything else as text.
//!
//! Tip-over text:
//! ```text
//! rows cols actor_row actor_col goal_row goal_col
//! <rows lines of cols heights>
//! ```
//!
//! Lunar landing text:
//! ```text
//! rows cols goal_row goal_col
//! name row col
//! ...
//! ```
//! Figure lines run until a blank line or the end of the file. The figure
//! named `E` is the explorer.
//!
//! The configurations trust their inputs, so every check on coordinates and
//! shapes happens here.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::coordinates::Coordinates;
use crate::error::PuzzleError;
use crate::grid::Grid;
use crate::puzzles::lunar::DEFAULT_EXPLORER;
use crate::puzzles::{LunarConfig, LunarPuzzle, TipOverConfig, TipOverPuzzle};

/// JSON form of a tip-over board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipOverFile {
    pub heights: Vec<Vec<u32>>,
    pub start: Coordinates,
    pub goal: Coordinates,
}

/// JSON form of a lunar landing board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LunarFile {
    pub rows: usize,
    pub cols: usize,
    pub goal: Coordinates,
    #[serde(default = "default_explorer")]
    pub explorer: String,
    pub figures: BTreeMap<String, Coordinates>,
}

fn default_explorer() -> String {
    DEFAULT_EXPLORER.to_string()
}

fn read(path: &Path) -> Result<String, PuzzleError> {
    fs::read_to_string(path).map_err(|source| PuzzleError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("json"))
}

/// Load a tip-over board, choosing the encoding from the file extension.
pub fn load_tipover(path: &Path) -> Result<TipOverConfig, PuzzleError> {
    let content = read(path)?;
    let config = if is_json(path) {
        tipover_from_json(&content)?
    } else {
        parse_tipover(&content)?
    };
    info!(
        "loaded tip-over board {:?}: {}x{} actor={} goal={}",
        path,
        config.heights().rows(),
        config.heights().cols(),
        config.actor(),
        config.goal()
    );
    Ok(config)
}

/// Load a lunar landing board, choosing the encoding from the file extension.
pub fn load_lunar(path: &Path) -> Result<LunarConfig, PuzzleError> {
    let content = read(path)?;
    let config = if is_json(path) {
        lunar_from_json(&content)?
    } else {
        parse_lunar(&content)?
    };
    info!(
        "loaded lunar landing board {:?}: {}x{} figures={} goal={}",
        path,
        config.puzzle().rows,
        config.puzzle().cols,
        config.figures().len(),
        config.puzzle().goal
    );
    Ok(config)
}

pub fn tipover_from_json(json: &str) -> Result<TipOverConfig, PuzzleError> {
    let file: TipOverFile = serde_json::from_str(json)?;
    build_tipover(file)
}

pub fn lunar_from_json(json: &str) -> Result<LunarConfig, PuzzleError> {
    let file: LunarFile = serde_json::from_str(json)?;
    build_lunar(file)
}

/// Parse the whitespace-separated integers on one line.
fn numbers<T: std::str::FromStr>(line_no: usize, fields: &[&str]) -> Result<Vec<T>, PuzzleError> {
    fields
        .iter()
        .map(|field| {
            field
                .parse()
                .map_err(|_| PuzzleError::parse(line_no, format!("'{}' is not a number", field)))
        })
        .collect()
}

pub fn parse_tipover(text: &str) -> Result<TipOverConfig, PuzzleError> {
    let mut lines = text.lines().enumerate().map(|(i, line)| (i + 1, line));

    let (line_no, header) = lines
        .next()
        .ok_or_else(|| PuzzleError::parse(1, "missing header line"))?;
    let fields: Vec<&str> = header.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(PuzzleError::parse(
            line_no,
            format!("expected 6 header fields, found {}", fields.len()),
        ));
    }
    let header: Vec<i32> = numbers(line_no, &fields)?;
    let (rows, cols) = (header[0], header[1]);
    if rows <= 0 || cols <= 0 {
        return Err(PuzzleError::parse(line_no, "board dimensions must be positive"));
    }

    let mut heights = Vec::with_capacity(rows as usize);
    for _ in 0..rows {
        let (line_no, line) = lines
            .next()
            .ok_or_else(|| PuzzleError::parse(line_no + heights.len() + 1, "missing board row"))?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != cols as usize {
            return Err(PuzzleError::parse(
                line_no,
                format!("expected {} heights, found {}", cols, fields.len()),
            ));
        }
        heights.push(numbers::<u32>(line_no, &fields)?);
    }

    build_tipover(TipOverFile {
        heights,
        start: Coordinates::new(header[2], header[3]),
        goal: Coordinates::new(header[4], header[5]),
    })
}

pub fn parse_lunar(text: &str) -> Result<LunarConfig, PuzzleError> {
    let mut lines = text.lines().enumerate().map(|(i, line)| (i + 1, line));

    let (line_no, header) = lines
        .next()
        .ok_or_else(|| PuzzleError::parse(1, "missing header line"))?;
    let fields: Vec<&str> = header.split_whitespace().collect();
    if fields.len() != 4 {
        return Err(PuzzleError::parse(
            line_no,
            format!("expected 4 header fields, found {}", fields.len()),
        ));
    }
    let header: Vec<i32> = numbers(line_no, &fields)?;
    if header[0] <= 0 || header[1] <= 0 {
        return Err(PuzzleError::parse(line_no, "board dimensions must be positive"));
    }

    let mut figures = BTreeMap::new();
    for (line_no, line) in lines {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            break;
        }
        if fields.len() != 3 {
            return Err(PuzzleError::parse(
                line_no,
                format!("expected 'name row col', found {} fields", fields.len()),
            ));
        }
        let pos: Vec<i32> = numbers(line_no, &fields[1..])?;
        let name = fields[0].to_string();
        if figures.contains_key(&name) {
            return Err(PuzzleError::parse(line_no, format!("figure '{}' listed twice", name)));
        }
        figures.insert(name, Coordinates::new(pos[0], pos[1]));
    }

    build_lunar(LunarFile {
        rows: header[0] as usize,
        cols: header[1] as usize,
        goal: Coordinates::new(header[2], header[3]),
        explorer: default_explorer(),
        figures,
    })
}

fn build_tipover(file: TipOverFile) -> Result<TipOverConfig, PuzzleError> {
    let heights = Grid::from_rows(file.heights)?;
    if heights.rows() == 0 || heights.cols() == 0 {
        return Err(PuzzleError::invalid("tip-over board is empty"));
    }
    if !heights.contains(file.goal) {
        return Err(PuzzleError::invalid(format!("goal {} is off the board", file.goal)));
    }
    match heights.get(file.start) {
        None => {
            return Err(PuzzleError::invalid(format!(
                "tipper {} is off the board",
                file.start
            )))
        }
        Some(0) => {
            return Err(PuzzleError::invalid(format!(
                "tipper {} is not standing on a crate",
                file.start
            )))
        }
        Some(_) => {}
    }
    if heights.get(file.goal) == Some(&0) {
        warn!("goal {} is an empty cell", file.goal);
    }

    let puzzle = Arc::new(TipOverPuzzle { goal: file.goal });
    Ok(TipOverConfig::new(puzzle, heights, file.start))
}

fn build_lunar(file: LunarFile) -> Result<LunarConfig, PuzzleError> {
    let puzzle = LunarPuzzle {
        rows: file.rows,
        cols: file.cols,
        goal: file.goal,
        explorer: file.explorer,
    };
    let bounds: Grid<()> = Grid::new((), puzzle.rows, puzzle.cols);
    if !bounds.contains(puzzle.goal) {
        return Err(PuzzleError::invalid(format!(
            "landing pad {} is off the board",
            puzzle.goal
        )));
    }
    if !file.figures.contains_key(&puzzle.explorer) {
        return Err(PuzzleError::invalid(format!(
            "no explorer named '{}'",
            puzzle.explorer
        )));
    }

    let mut occupied = HashSet::new();
    for (name, &pos) in &file.figures {
        if !bounds.contains(pos) {
            return Err(PuzzleError::invalid(format!(
                "figure '{}' at {} is off the board",
                name, pos
            )));
        }
        if !occupied.insert(pos) {
            return Err(PuzzleError::invalid(format!(
                "figure '{}' shares cell {} with another figure",
                name, pos
            )));
        }
    }

    Ok(LunarConfig::new(Arc::new(puzzle), file.figures))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::Configuration;
    use crate::solver::solve;

    const TIPOVER_BOARD: &str = "\
3 4 2 0 0 3
0 0 0 1
0 0 0 1
1 2 0 0
";

    const LUNAR_BOARD: &str = "\
5 5 2 2
E 0 2
H 3 0
B 3 3

trailing notes are ignored
";

    #[test]
    fn test_parse_tipover_text() {
        let config = parse_tipover(TIPOVER_BOARD).unwrap();
        assert_eq!(config.actor(), Coordinates::new(2, 0));
        assert_eq!(config.goal(), Coordinates::new(0, 3));
        assert_eq!(config.height(), 1);
        assert_eq!(config.heights().get(Coordinates::new(2, 1)), Some(&2));
    }

    #[test]
    fn test_parsed_tipover_solves() {
        let config = parse_tipover(TIPOVER_BOARD).unwrap();
        let path = solve(&config);
        assert_eq!(path.len(), 6);
        assert!(path.last().unwrap().is_solution());
        assert!(path.iter().any(TipOverConfig::tipped));
    }

    #[test]
    fn test_tipover_json_matches_text() {
        let json = r#"{
            "heights": [[0, 0, 0, 1], [0, 0, 0, 1], [1, 2, 0, 0]],
            "start": {"row": 2, "col": 0},
            "goal": {"row": 0, "col": 3}
        }"#;
        assert_eq!(tipover_from_json(json).unwrap(), parse_tipover(TIPOVER_BOARD).unwrap());
    }

    #[test]
    fn test_tipover_errors() {
        assert!(matches!(parse_tipover(""), Err(PuzzleError::Parse { line: 1, .. })));
        assert!(matches!(
            parse_tipover("2 2 0 0 1 1\n1 x\n1 1\n"),
            Err(PuzzleError::Parse { line: 2, .. })
        ));
        assert!(matches!(
            parse_tipover("2 2 0 0 1 1\n1 1\n"),
            Err(PuzzleError::Parse { line: 3, .. })
        ));
        assert!(matches!(
            parse_tipover("2 2 0 0 1 1\n1 1 1\n1 1\n"),
            Err(PuzzleError::Parse { line: 2, .. })
        ));
        assert!(matches!(
            parse_tipover("2 2 0 1 1 1\n1 0\n1 1\n"),
            Err(PuzzleError::InvalidDefinition(_))
        ));
        assert!(matches!(
            parse_tipover("2 2 0 0 5 1\n1 0\n1 1\n"),
            Err(PuzzleError::InvalidDefinition(_))
        ));
    }

    #[test]
    fn test_parse_lunar_text() {
        let config = parse_lunar(LUNAR_BOARD).unwrap();
        assert_eq!(config.figures().len(), 3);
        assert_eq!(config.explorer(), Some(Coordinates::new(0, 2)));
        assert_eq!(solve(&config).len(), 3);
    }

    #[test]
    fn test_lunar_json_with_custom_explorer() {
        let json = r#"{
            "rows": 3, "cols": 3,
            "goal": {"row": 0, "col": 1},
            "explorer": "X",
            "figures": {"X": {"row": 0, "col": 2}, "B": {"row": 0, "col": 0}}
        }"#;
        let config = lunar_from_json(json).unwrap();
        assert_eq!(config.explorer(), Some(Coordinates::new(0, 2)));
        let path = solve(&config);
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn test_lunar_errors() {
        assert!(matches!(
            parse_lunar("3 3 1 1\nB 0 0\n"),
            Err(PuzzleError::InvalidDefinition(_))
        ));
        assert!(matches!(
            parse_lunar("3 3 1 1\nE 0 0\nB 0 0\n"),
            Err(PuzzleError::InvalidDefinition(_))
        ));
        assert!(matches!(
            parse_lunar("3 3 1 1\nE 0 0\nE 1 0\n"),
            Err(PuzzleError::Parse { line: 3, .. })
        ));
        assert!(matches!(
            parse_lunar("3 3 1 1\nE 0 3\n"),
            Err(PuzzleError::InvalidDefinition(_))
        ));
        assert!(matches!(
            parse_lunar("3 3 1\nE 0 0\n"),
            Err(PuzzleError::Parse { line: 1, .. })
        ));
        assert!(matches!(lunar_from_json("{"), Err(PuzzleError::Json(_))));
    }

    #[test]
    fn test_load_sample_boards() {
        let boards = Path::new(env!("CARGO_MANIFEST_DIR")).join("boards");

        let tipover = load_tipover(&boards.join("tipover-1.txt")).unwrap();
        assert_eq!(tipover, parse_tipover(TIPOVER_BOARD).unwrap());

        let lunar = load_lunar(&boards.join("lunar-1.txt")).unwrap();
        assert_eq!(lunar, parse_lunar(LUNAR_BOARD).unwrap());

        let lunar_json = load_lunar(&boards.join("lunar-2.json")).unwrap();
        let path = solve(&lunar_json);
        assert_eq!(path.len(), 3);
        assert_eq!(path[2].explorer(), Some(Coordinates::new(1, 1)));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_tipover(Path::new("no/such/board.txt")).unwrap_err();
        assert!(matches!(err, PuzzleError::Io { .. }));
        assert!(err.to_string().contains("board.txt"));
    }
}
