use quickcheck::{Arbitrary, Gen};

use crate::{EngineConfig, Grid, Mark, Strategy};

/// A small board with marks scattered over it.
///
/// The marks do not have to come from a real game, e.g. the board may
/// contain several winning lines.
#[derive(Clone, Debug)]
pub struct GridInput {
    pub grid: Grid,
}

impl Arbitrary for GridInput {
    fn arbitrary(g: &mut Gen) -> Self {
        let m = usize::from(u8::arbitrary(g) % 4) + 1;
        let n = usize::from(u8::arbitrary(g) % 4) + 1;
        let k = usize::from(u8::arbitrary(g) % 4) + 1;
        let mut grid = Grid::create(m, n, k).unwrap();

        // Out of 8 cells, roughly this many hold a mark
        let density = *g.choose(&[0u8, 1, 2, 4]).unwrap();
        for y in 0..n {
            for x in 0..m {
                if u8::arbitrary(g) % 8 < density {
                    let mark = if bool::arbitrary(g) {
                        Mark::Player
                    } else {
                        Mark::Ai
                    };
                    grid.set(x, y, mark).unwrap();
                }
            }
        }
        GridInput { grid }
    }
}

/// A game configuration plus a list of moves for the human side.
///
/// Some moves are off the board or on occupied cells.
#[derive(Clone, Debug)]
pub struct GameInput {
    pub config: EngineConfig,
    pub moves: Vec<(usize, usize)>,
}

impl Arbitrary for GameInput {
    fn arbitrary(g: &mut Gen) -> Self {
        let m = usize::from(u8::arbitrary(g) % 4) + 1;
        let n = usize::from(u8::arbitrary(g) % 4) + 1;
        let k = usize::from(u8::arbitrary(g) % 4) + 1;
        let strategy = *g
            .choose(&[Strategy::FirstEmpty, Strategy::Minimax, Strategy::AlphaBeta])
            .unwrap();
        // Keeps the search quick on the larger boards
        let max_depth = Some(usize::from(u8::arbitrary(g) % 2) + 1);

        let num_moves = usize::from(u8::arbitrary(g) % 12);
        let moves = (0..num_moves)
            .map(|_| {
                // One past the edge, to get some invalid moves
                let x = usize::from(u8::arbitrary(g)) % (m + 1);
                let y = usize::from(u8::arbitrary(g)) % (n + 1);
                (x, y)
            })
            .collect();

        GameInput {
            config: EngineConfig {
                m,
                n,
                k,
                strategy,
                max_depth,
            },
            moves,
        }
    }
}
