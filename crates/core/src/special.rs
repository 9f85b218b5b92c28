//! Special tile engine - creation rules and activation effects
//!
//! Creation: every run longer than the minimum and every L/T crossing proposes
//! one special tile on a fixed anchor cell (rightmost cell of a horizontal run,
//! topmost cell of a vertical run, junction of a crossing). Proposals landing on
//! the same cell keep only the highest-priority kind.
//!
//! Activation: each kind clears a fixed area around its cell. Special tiles
//! caught inside another special's area activate too, each once per pass.

use crate::board::BoardView;
use crate::matcher::MatchSet;
use crate::types::{Position, SpecialKind, SpecialTile};

/// A special tile to stamp onto the board after a pass's matches are found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Creation {
    pub position: Position,
    pub special: SpecialTile,
}

/// Special tiles earned by `matches`, at most one per anchor cell, row-major.
pub fn plan_creations(matches: &MatchSet) -> Vec<Creation> {
    let mut candidates: Vec<Creation> = Vec::new();

    for run in &matches.runs {
        if let Some(kind) = SpecialKind::for_run(run.axis, run.len) {
            candidates.push(Creation {
                position: run.anchor(),
                special: SpecialTile::new(run.value, kind),
            });
        }
    }
    for shape in &matches.shapes {
        candidates.push(Creation {
            position: shape.junction,
            special: SpecialTile::new(shape.value, SpecialKind::for_shape(shape.kind)),
        });
    }

    // Row-major by anchor, strongest kind first within a cell; keep the first.
    candidates.sort_by(|a, b| {
        (a.position.y, a.position.x)
            .cmp(&(b.position.y, b.position.x))
            .then(b.special.kind.priority().cmp(&a.special.kind.priority()))
    });
    candidates.dedup_by_key(|c| c.position);
    candidates
}

/// Cells cleared when `special` at `origin` activates, clipped to the board.
///
/// - Bomb: square of Chebyshev radius `1 + power` around `origin`
/// - Lightning, Star: the whole row and whole column through `origin`
/// - Rainbow: every cell whose tile equals `base_value`
pub fn activation_area<V: BoardView + ?Sized>(
    view: &V,
    origin: Position,
    special: SpecialTile,
) -> Vec<Position> {
    let (w, h) = (view.width() as i32, view.height() as i32);
    let mut area = Vec::new();

    match special.kind {
        SpecialKind::Bomb => {
            let r = 1 + special.power as i32;
            for y in (origin.y - r).max(0)..=(origin.y + r).min(h - 1) {
                for x in (origin.x - r).max(0)..=(origin.x + r).min(w - 1) {
                    area.push(Position::new(x, y));
                }
            }
        }
        SpecialKind::Lightning | SpecialKind::Star => {
            if view.in_bounds(origin) {
                area.extend((0..w).map(|x| Position::new(x, origin.y)));
                area.extend(
                    (0..h)
                        .filter(|&y| y != origin.y)
                        .map(|y| Position::new(origin.x, y)),
                );
            }
        }
        SpecialKind::Rainbow => {
            for y in 0..h {
                for x in 0..w {
                    if view.get_tile(x, y) == Some(special.base_value) {
                        area.push(Position::new(x, y));
                    }
                }
            }
        }
    }

    area
}

/// Activate every special tile under a marked cell, following chains.
///
/// `marked` is a row-major flag per cell (`true` = will be cleared). It is
/// extended in place with every activation area. Returns the positions of the
/// specials that fired, in firing order.
pub fn activate_marked<V: BoardView + ?Sized>(view: &V, marked: &mut [bool]) -> Vec<Position> {
    let w = view.width();
    debug_assert_eq!(marked.len(), w * view.height());
    let to_pos = |i: usize| Position::new((i % w) as i32, (i / w) as i32);

    let mut fired = vec![false; marked.len()];
    let mut pending: Vec<usize> = (0..marked.len())
        .filter(|&i| marked[i] && view.special_at(to_pos(i)).is_some())
        .collect();
    // Pop from the back; reverse so the first marked special fires first.
    pending.reverse();

    let mut order = Vec::new();
    while let Some(i) = pending.pop() {
        if fired[i] {
            continue;
        }
        let origin = to_pos(i);
        let Some(special) = view.special_at(origin) else {
            continue;
        };
        fired[i] = true;
        order.push(origin);

        for p in activation_area(view, origin, special) {
            let j = p.y as usize * w + p.x as usize;
            marked[j] = true;
            if !fired[j] && view.special_at(p).is_some() {
                pending.push(j);
            }
        }
    }

    order
}
