use aoc_core::parser::parse_single_integer;
use aoc_core::Result;

pub const GRID_SIZE: usize = 300;

pub fn parse_input(input: &str) -> Result<i64> {
    parse_single_integer(input, "grid serial number")
}

/// Power level of the fuel cell at 1-based `(x, y)`.
pub fn power_level(x: i64, y: i64, serial: i64) -> i64 {
    let rack_id = x + 10;
    let power = (rack_id * y + serial) * rack_id;
    (power / 100) % 10 - 5
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Square {
    pub x: usize,
    pub y: usize,
    pub size: usize,
    pub power: i64,
}

/// Summed-area table: `sums[y][x]` is the total power of cells `1..=x` by `1..=y`.
pub struct PowerGrid {
    sums: Vec<Vec<i64>>,
}

impl PowerGrid {
    pub fn new(serial: i64) -> PowerGrid {
        let mut sums = vec![vec![0; GRID_SIZE + 1]; GRID_SIZE + 1];
        for y in 1..=GRID_SIZE {
            for x in 1..=GRID_SIZE {
                sums[y][x] = power_level(x as i64, y as i64, serial) + sums[y - 1][x]
                    + sums[y][x - 1]
                    - sums[y - 1][x - 1];
            }
        }
        PowerGrid { sums }
    }

    /// Total power of the `size`-square with top-left cell `(x, y)`.
    pub fn square_power(&self, x: usize, y: usize, size: usize) -> i64 {
        let (x0, y0) = (x - 1, y - 1);
        let (x1, y1) = (x0 + size, y0 + size);
        self.sums[y1][x1] - self.sums[y0][x1] - self.sums[y1][x0] + self.sums[y0][x0]
    }

    /// Best square of the given size; the smallest x, then the smallest y, wins ties.
    pub fn best_square(&self, size: usize) -> Option<Square> {
        let mut best: Option<Square> = None;
        if size == 0 || size > GRID_SIZE {
            return None;
        }
        for x in 1..=(GRID_SIZE - size + 1) {
            for y in 1..=(GRID_SIZE - size + 1) {
                let power = self.square_power(x, y, size);
                if best.map_or(true, |b| power > b.power) {
                    best = Some(Square { x, y, size, power });
                }
            }
        }
        best
    }

    pub fn best_square_any_size(&self) -> Option<Square> {
        let mut best: Option<Square> = None;
        for size in 1..=GRID_SIZE {
            if let Some(s) = self.best_square(size) {
                if best.map_or(true, |b| s.power > b.power) {
                    best = Some(s);
                }
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day11_power_level() {
        assert_eq!(power_level(3, 5, 8), 4);
        assert_eq!(power_level(122, 79, 57), -5);
        assert_eq!(power_level(217, 196, 39), 0);
        assert_eq!(power_level(101, 153, 71), 4);
    }

    #[test]
    fn test_day11_serial_18() {
        let grid = PowerGrid::new(parse_input("18\n").unwrap());
        assert_eq!(
            grid.best_square(3),
            Some(Square {
                x: 33,
                y: 45,
                size: 3,
                power: 29
            })
        );
        assert_eq!(
            grid.best_square_any_size(),
            Some(Square {
                x: 90,
                y: 269,
                size: 16,
                power: 113
            })
        );
    }

    #[test]
    fn test_day11_serial_42() {
        let grid = PowerGrid::new(42);
        let best = grid.best_square(3).unwrap();
        assert_eq!((best.x, best.y, best.power), (21, 61, 30));
        let best = grid.best_square_any_size().unwrap();
        assert_eq!((best.x, best.y, best.size, best.power), (232, 251, 12, 119));
    }
}
