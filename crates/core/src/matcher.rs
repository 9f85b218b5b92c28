//! Match detector - finds runs and L/T crossings
//!
//! A run is a maximal line of at least [`MIN_RUN_LENGTH`] identical non-empty
//! tiles in one row or one column. Rows and columns are scanned independently;
//! a cell can belong to one horizontal and one vertical run at once.
//!
//! Where a horizontal and a vertical run of the same value share a cell, that
//! cell is the junction of a [`Shape`]:
//! - **T** when the junction lies strictly inside the horizontal run
//! - **L** otherwise (junction at either end of the horizontal run)

use log::trace;

use crate::board::BoardView;
use crate::types::{Axis, Position, ShapeKind, TileValue, MIN_RUN_LENGTH};

/// A maximal straight run of one tile value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    pub axis: Axis,
    /// Leftmost cell (horizontal) or bottom cell (vertical)
    pub start: Position,
    pub len: usize,
    pub value: TileValue,
}

impl Run {
    fn step(&self) -> (i32, i32) {
        match self.axis {
            Axis::Horizontal => (1, 0),
            Axis::Vertical => (0, 1),
        }
    }

    /// Rightmost cell (horizontal) or topmost cell (vertical)
    pub fn end(&self) -> Position {
        let (dx, dy) = self.step();
        let n = self.len as i32 - 1;
        self.start.offset(dx * n, dy * n)
    }

    /// Cell that receives a special tile created by this run
    pub fn anchor(&self) -> Position {
        self.end()
    }

    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        let (dx, dy) = self.step();
        (0..self.len as i32).map(move |i| self.start.offset(dx * i, dy * i))
    }

    pub fn contains(&self, p: Position) -> bool {
        let end = self.end();
        match self.axis {
            Axis::Horizontal => p.y == self.start.y && p.x >= self.start.x && p.x <= end.x,
            Axis::Vertical => p.x == self.start.x && p.y >= self.start.y && p.y <= end.y,
        }
    }
}

/// Junction of a horizontal and a vertical run of the same value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub junction: Position,
    pub value: TileValue,
    pub kind: ShapeKind,
    /// Index into [`MatchSet::runs`] of the horizontal run
    pub horizontal: usize,
    /// Index into [`MatchSet::runs`] of the vertical run
    pub vertical: usize,
}

/// Everything matched on a board in one scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet {
    /// Horizontal runs (bottom row first, left to right), then vertical runs
    /// (left column first, bottom to top)
    pub runs: Vec<Run>,
    pub shapes: Vec<Shape>,
    /// Every matched cell once, row-major
    cells: Vec<Position>,
}

impl MatchSet {
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Matched cells, deduplicated, row-major
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    pub fn contains(&self, p: Position) -> bool {
        self.runs.iter().any(|r| r.contains(p))
    }
}

/// Scan one line of `len` cells starting at `origin`, pushing runs into `out`
fn scan_line<V: BoardView + ?Sized>(
    view: &V,
    origin: Position,
    axis: Axis,
    len: usize,
    out: &mut Vec<Run>,
) {
    let (dx, dy) = match axis {
        Axis::Horizontal => (1, 0),
        Axis::Vertical => (0, 1),
    };
    let at = |i: usize| view.tile_at(origin.offset(dx * i as i32, dy * i as i32));

    let mut i = 0usize;
    while i < len {
        let Some(value) = at(i) else {
            i += 1;
            continue;
        };
        let mut end = i + 1;
        while end < len && at(end) == Some(value) {
            end += 1;
        }
        if end - i >= MIN_RUN_LENGTH {
            let run = Run {
                axis,
                start: origin.offset(dx * i as i32, dy * i as i32),
                len: end - i,
                value,
            };
            trace!(
                "run {:?} value={} start={} len={}",
                run.axis,
                run.value,
                run.start,
                run.len
            );
            out.push(run);
        }
        i = end;
    }
}

/// All runs on the board: horizontal runs first, then vertical
pub fn find_runs<V: BoardView + ?Sized>(view: &V) -> Vec<Run> {
    let (w, h) = (view.width(), view.height());
    let mut runs = Vec::new();
    for y in 0..h as i32 {
        scan_line(view, Position::new(0, y), Axis::Horizontal, w, &mut runs);
    }
    for x in 0..w as i32 {
        scan_line(view, Position::new(x, 0), Axis::Vertical, h, &mut runs);
    }
    runs
}

/// Runs, crossings and matched cells on the board
pub fn find_matches<V: BoardView + ?Sized>(view: &V) -> MatchSet {
    let runs = find_runs(view);
    if runs.is_empty() {
        return MatchSet::default();
    }

    let split = runs
        .iter()
        .position(|r| r.axis == Axis::Vertical)
        .unwrap_or(runs.len());

    let mut shapes = Vec::new();
    for (hi, hrun) in runs[..split].iter().enumerate() {
        for (vi, vrun) in runs[split..].iter().enumerate() {
            if hrun.value != vrun.value {
                continue;
            }
            let junction = Position::new(vrun.start.x, hrun.start.y);
            if !hrun.contains(junction) || !vrun.contains(junction) {
                continue;
            }
            let kind = if junction.x > hrun.start.x && junction.x < hrun.end().x {
                ShapeKind::T
            } else {
                ShapeKind::L
            };
            shapes.push(Shape {
                junction,
                value: hrun.value,
                kind,
                horizontal: hi,
                vertical: split + vi,
            });
        }
    }

    let w = view.width();
    let mut marked = vec![false; w * view.height()];
    for run in &runs {
        for p in run.cells() {
            marked[p.y as usize * w + p.x as usize] = true;
        }
    }
    let cells = marked
        .iter()
        .enumerate()
        .filter(|&(_, &m)| m)
        .map(|(i, _)| Position::new((i % w) as i32, (i / w) as i32))
        .collect();

    MatchSet {
        runs,
        shapes,
        cells,
    }
}

/// True if at least one run exists. Stops at the first one found.
pub fn has_match<V: BoardView + ?Sized>(view: &V) -> bool {
    let (w, h) = (view.width() as i32, view.height() as i32);
    for y in 0..h {
        for x in 0..w {
            let Some(v) = view.get_tile(x, y) else {
                continue;
            };
            let horizontal = view.get_tile(x + 1, y) == Some(v) && view.get_tile(x + 2, y) == Some(v);
            let vertical = view.get_tile(x, y + 1) == Some(v) && view.get_tile(x, y + 2) == Some(v);
            if horizontal || vertical {
                return true;
            }
        }
    }
    false
}

/// True if `p` is part of a run
pub fn has_match_at<V: BoardView + ?Sized>(view: &V, p: Position) -> bool {
    let Some(v) = view.tile_at(p) else {
        return false;
    };
    let same = |dx: i32, dy: i32| view.tile_at(p.offset(dx, dy)) == Some(v);

    let count_dir = |dx: i32, dy: i32| {
        let mut n = 0;
        while same(dx * (n + 1), dy * (n + 1)) {
            n += 1;
        }
        n as usize
    };

    let horizontal = 1 + count_dir(-1, 0) + count_dir(1, 0);
    let vertical = 1 + count_dir(0, -1) + count_dir(0, 1);
    horizontal >= MIN_RUN_LENGTH || vertical >= MIN_RUN_LENGTH
}
