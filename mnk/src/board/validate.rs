use crate::{Coord, Grid, InvalidMove, Mark};

/// Checks that `(x, y)` is on the board and empty. Never modifies the board.
pub fn validate(grid: &Grid, x: usize, y: usize) -> Result<Coord, InvalidMove> {
    match grid.get(x, y).map_err(InvalidMove::OutOfRange)? {
        Mark::Empty => Ok(Coord::new(x, y)),
        mark => Err(InvalidMove::Occupied {
            coord: Coord::new(x, y),
            mark,
        }),
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::GridInput;

    quickcheck! {
        fn accepts_exactly_the_empty_cells(input: GridInput, x: u8, y: u8) -> bool {
            let grid = input.grid;
            let before = grid.clone();
            let (x, y) = (usize::from(x % 8), usize::from(y % 8));
            let expected_ok = grid.get(x, y) == Ok(Mark::Empty);
            validate(&grid, x, y).is_ok() == expected_ok && grid == before
        }
    }

    #[test]
    fn reports_why_a_move_is_invalid() {
        let mut grid = Grid::create(3, 3, 3).unwrap();
        grid.set(1, 2, Mark::Ai).unwrap();
        assert_eq!(validate(&grid, 0, 2), Ok(Coord::new(0, 2)));
        assert_eq!(
            validate(&grid, 1, 2),
            Err(InvalidMove::Occupied {
                coord: Coord::new(1, 2),
                mark: Mark::Ai
            })
        );
        assert!(matches!(
            validate(&grid, 4, 1),
            Err(InvalidMove::OutOfRange(_))
        ));
    }
}
