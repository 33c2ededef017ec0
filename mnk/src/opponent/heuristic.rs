use std::iter::successors;

use crate::{Coord, Grid, Mark, DIRECTIONS};

/// Score of a decided game. Heuristic scores always stay well below this.
pub const WIN_SCORE: i64 = 1 << 50;

// Windows with more marks than this all weigh the same.
const MAX_WEIGHT_EXPONENT: usize = 10;

/// Scores an undecided position from the point of view of the automated player.
///
/// Every run of `k` consecutive cells (a "window") in which only one side has
/// placed marks is an opportunity for that side. It adds `4^count` for the
/// automated player, or subtracts that for the human. Windows that both sides
/// have marked can no longer be won and score 0.
pub fn heuristic_score(grid: &Grid) -> i64 {
    bounded(window_total(grid))
}

/// The unclamped sum over all windows. Reads every cell once per direction.
pub(crate) fn window_total(grid: &Grid) -> i64 {
    let k = grid.k();
    if k == 0 {
        return 0;
    }
    let mut total = 0;
    for (dx, dy) in DIRECTIONS {
        for y in 0..grid.n() {
            for x in 0..grid.m() {
                let start = Coord::new(x, y);
                // Each line is walked once, starting from its first cell
                if grid.step(start, (-dx, -dy)).is_some() {
                    continue;
                }
                let line: Vec<Mark> = successors(Some(start), |&cell| grid.step(cell, (dx, dy)))
                    .map(|cell| grid.at(cell))
                    .collect();
                total += line_total(&line, k);
            }
        }
    }
    total
}

/// How much [`window_total()`] changes when `mark` is placed on the empty cell `cell`.
///
/// Only the windows through `cell` are read. The current content of `cell` is
/// ignored, so this can be called before or after the mark is placed.
pub(crate) fn placement_delta(grid: &Grid, cell: Coord, mark: Mark) -> i64 {
    let k = grid.k();
    if k == 0 || mark == Mark::Empty {
        return 0;
    }
    let mut delta = 0;
    for (dx, dy) in DIRECTIONS {
        // Go back at most k - 1 cells, every window through `cell` starts there or later
        let mut start = cell;
        let mut before = 0;
        while before + 1 < k {
            match grid.step(start, (-dx, -dy)) {
                Some(prev) => {
                    start = prev;
                    before += 1;
                }
                None => break,
            }
        }
        let mut segment: Vec<Mark> = successors(Some(start), |&c| grid.step(c, (dx, dy)))
            .take(before + k)
            .map(|c| grid.at(c))
            .collect();
        segment[before] = Mark::Empty;
        let without = line_total(&segment, k);
        segment[before] = mark;
        delta += line_total(&segment, k) - without;
    }
    delta
}

/// Upper bound on the cells read by one [`placement_delta()`] call.
pub(crate) fn placement_cost(grid: &Grid) -> u64 {
    let segment = grid
        .k()
        .saturating_mul(2)
        .min(grid.m().max(grid.n()));
    (DIRECTIONS.len() * segment) as u64
}

/// Clamps a window total into the range of heuristic scores.
pub(crate) fn bounded(total: i64) -> i64 {
    total.clamp(-WIN_SCORE / 2, WIN_SCORE / 2)
}

/// Sum of the values of all windows of length `k` within `line`.
fn line_total(line: &[Mark], k: usize) -> i64 {
    let (mut ai, mut player) = (0, 0);
    let mut total = 0;
    for (i, &mark) in line.iter().enumerate() {
        match mark {
            Mark::Ai => ai += 1,
            Mark::Player => player += 1,
            Mark::Empty => {}
        }
        if i >= k {
            match line[i - k] {
                Mark::Ai => ai -= 1,
                Mark::Player => player -= 1,
                Mark::Empty => {}
            }
        }
        if i + 1 >= k {
            total += window_value(ai, player);
        }
    }
    total
}

fn window_value(ai: usize, player: usize) -> i64 {
    match (ai, player) {
        (0, 0) => 0,
        (ai, 0) => weight(ai),
        (0, player) => -weight(player),
        _ => 0,
    }
}

fn weight(count: usize) -> i64 {
    4i64.pow(count.min(MAX_WEIGHT_EXPONENT) as u32)
}
