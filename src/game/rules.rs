//! Line detection. [`winner`] scans the whole board and is the reference;
//! [`line_through`] only looks at lines passing through one cell and is what
//! the engine runs after each drop. Both agree on every position reachable
//! by play.
//!
//! `match_length` must be at least 1.

use super::{Cell, Color, Grid};

/// The eight non-zero unit steps.
const DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

/// One step per undirected axis: horizontal, vertical and both diagonals.
const AXES: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Full-board scan: for every occupied cell and every direction, check
/// whether the `match_length` cells starting there share its color. Returns
/// the first color found, scanning columns left to right and rows bottom to
/// top.
pub fn winner(grid: &Grid, match_length: usize) -> Option<Color> {
    for column in 0..grid.width() as isize {
        for row in 0..grid.height() as isize {
            let Some(color) = grid.occupant(column, row).color() else {
                continue;
            };
            let found = DIRECTIONS.iter().any(|&(dx, dy)| {
                (0..match_length as isize).all(|step| {
                    grid.occupant(column + dx * step, row + dy * step) == Cell::Token(color)
                })
            });
            if found {
                return Some(color);
            }
        }
    }
    None
}

/// Check the four axes through `(column, row)` and return the cells of the
/// first one holding at least `match_length` tokens of that cell's color in
/// an unbroken run. The cells come back sorted by `(column, row)`.
pub fn line_through(
    grid: &Grid,
    column: usize,
    row: usize,
    match_length: usize,
) -> Option<Vec<(usize, usize)>> {
    let (x, y) = (column as isize, row as isize);
    let color = grid.occupant(x, y).color()?;
    let reach = match_length.saturating_sub(1);

    for &(dx, dy) in &AXES {
        let mut line = vec![(column, row)];
        extend_run(grid, &mut line, (x, y), (dx, dy), color, reach);
        extend_run(grid, &mut line, (x, y), (-dx, -dy), color, reach);

        if line.len() >= match_length {
            line.sort_unstable();
            return Some(line);
        }
    }
    None
}

/// Walk at most `reach` steps from `origin` (exclusive), pushing cells while
/// they hold `color`.
fn extend_run(
    grid: &Grid,
    line: &mut Vec<(usize, usize)>,
    origin: (isize, isize),
    step: (isize, isize),
    color: Color,
    reach: usize,
) {
    let (mut x, mut y) = origin;
    for _ in 0..reach {
        x += step.0;
        y += step.1;
        if grid.occupant(x, y) != Cell::Token(color) {
            break;
        }
        line.push((x as usize, y as usize));
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;

    fn grid_from(width: usize, height: usize, drops: &[(usize, Color)]) -> Grid {
        let mut grid = Grid::new(width, height);
        for &(column, color) in drops {
            grid.place(column, color).unwrap();
        }
        grid
    }

    quickcheck! {
        fn full_scan_agrees_with_last_move_scan(w: u8, h: u8, n: u8, moves: Vec<u8>) -> bool {
            let width = (w % 8) as usize + 1;
            let height = (h % 7) as usize + 1;
            let match_length = (n as usize) % width.min(height) + 1;

            let mut grid = Grid::new(width, height);
            let mut color = Color::Yellow;
            for m in moves {
                let column = m as usize % width;
                let Ok(row) = grid.place(column, color) else {
                    continue;
                };
                let by_last_move = line_through(&grid, column, row, match_length);
                let by_full_scan = winner(&grid, match_length);
                if by_last_move.is_some() != by_full_scan.is_some() {
                    return false;
                }
                if by_full_scan.is_some() {
                    // The position before this drop had no line, so the new
                    // line must belong to the mover.
                    return by_full_scan == Some(color);
                }
                color = color.other();
            }
            true
        }
    }

    #[test]
    fn test_horizontal_line() {
        let grid = grid_from(
            7,
            6,
            &[(0, Color::Red), (1, Color::Red), (2, Color::Red), (3, Color::Red)],
        );
        assert_eq!(winner(&grid, 4), Some(Color::Red));
        assert_eq!(
            line_through(&grid, 1, 0, 4),
            Some(vec![(0, 0), (1, 0), (2, 0), (3, 0)])
        );
    }

    #[test]
    fn test_vertical_line() {
        let grid = grid_from(7, 6, &[(3, Color::Yellow); 4]);
        assert_eq!(winner(&grid, 4), Some(Color::Yellow));
        assert_eq!(
            line_through(&grid, 3, 3, 4),
            Some(vec![(3, 0), (3, 1), (3, 2), (3, 3)])
        );
    }

    #[test]
    fn test_rising_diagonal() {
        let grid = grid_from(
            7,
            6,
            &[
                (0, Color::Red),
                (1, Color::Yellow),
                (1, Color::Red),
                (2, Color::Yellow),
                (2, Color::Yellow),
                (2, Color::Red),
                (3, Color::Yellow),
                (3, Color::Yellow),
                (3, Color::Yellow),
                (3, Color::Red),
            ],
        );
        assert_eq!(winner(&grid, 4), Some(Color::Red));
        assert_eq!(
            line_through(&grid, 3, 3, 4),
            Some(vec![(0, 0), (1, 1), (2, 2), (3, 3)])
        );
    }

    #[test]
    fn test_falling_diagonal() {
        let grid = grid_from(
            7,
            6,
            &[
                (6, Color::Red),
                (5, Color::Yellow),
                (5, Color::Red),
                (4, Color::Yellow),
                (4, Color::Yellow),
                (4, Color::Red),
                (3, Color::Yellow),
                (3, Color::Yellow),
                (3, Color::Yellow),
                (3, Color::Red),
            ],
        );
        assert_eq!(winner(&grid, 4), Some(Color::Red));
        assert_eq!(
            line_through(&grid, 3, 3, 4),
            Some(vec![(3, 3), (4, 2), (5, 1), (6, 0)])
        );
    }

    #[test]
    fn test_no_line_with_three() {
        let grid = grid_from(7, 6, &[(0, Color::Red), (1, Color::Red), (2, Color::Red)]);
        assert_eq!(winner(&grid, 4), None);
        assert_eq!(line_through(&grid, 1, 0, 4), None);
        assert_eq!(winner(&grid, 3), Some(Color::Red));
    }

    #[test]
    fn test_run_bridging_the_origin() {
        // Filling the gap in R R . R joins both sides into one line.
        let grid = grid_from(
            7,
            6,
            &[(0, Color::Red), (1, Color::Red), (3, Color::Red), (2, Color::Red)],
        );
        assert_eq!(
            line_through(&grid, 2, 0, 4),
            Some(vec![(0, 0), (1, 0), (2, 0), (3, 0)])
        );
    }

    #[test]
    fn test_broken_run_is_not_a_line() {
        let grid = grid_from(
            7,
            6,
            &[(0, Color::Red), (1, Color::Red), (2, Color::Yellow), (3, Color::Red), (4, Color::Red)],
        );
        assert_eq!(winner(&grid, 3), None);
        assert_eq!(line_through(&grid, 3, 0, 3), None);
    }

    #[test]
    fn test_match_length_one() {
        let grid = grid_from(3, 3, &[(1, Color::Yellow)]);
        assert_eq!(winner(&grid, 1), Some(Color::Yellow));
        assert_eq!(line_through(&grid, 1, 0, 1), Some(vec![(1, 0)]));
    }

    #[test]
    fn test_match_length_is_not_fixed_at_four() {
        let drops = [(0, Color::Red), (1, Color::Red), (2, Color::Red), (3, Color::Red), (4, Color::Red)];
        let grid = grid_from(8, 8, &drops[..4]);
        assert_eq!(winner(&grid, 5), None);
        assert_eq!(line_through(&grid, 3, 0, 5), None);

        let grid = grid_from(8, 8, &drops);
        assert_eq!(winner(&grid, 5), Some(Color::Red));
        assert!(line_through(&grid, 4, 0, 5).is_some());
    }

    #[test]
    fn test_empty_cell_has_no_line() {
        let grid = Grid::new(4, 4);
        assert_eq!(line_through(&grid, 0, 0, 1), None);
        assert_eq!(winner(&grid, 1), None);
    }
}
