use std::ops::{Index, IndexMut};

use crate::error::{Error, Result};

/// Dense row-major grid addressed by `(y, x)`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Grid<T> {
    height: usize,
    width: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    pub fn new(height: usize, width: usize, value: T) -> Grid<T> {
        Grid {
            height,
            width,
            cells: vec![value; height * width],
        }
    }

    /// Builds a grid from text lines. Short lines are padded with `fill`, so
    /// inputs with trailing spaces stripped still give a rectangular grid.
    pub fn from_lines<F>(input: &str, fill: T, mut cell: F) -> Result<Grid<T>>
    where
        F: FnMut(char) -> Option<T>,
    {
        let lines = input
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .collect::<Vec<_>>();
        let lines = match lines.iter().rposition(|line| !line.trim().is_empty()) {
            Some(last) => &lines[..=last],
            None => return Err(Error::parse("grid", "empty input")),
        };
        let height = lines.len();
        let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);

        let mut grid = Grid::new(height, width, fill);
        for (y, line) in lines.iter().enumerate() {
            for (x, c) in line.chars().enumerate() {
                grid[(y, x)] = cell(c).ok_or_else(|| {
                    Error::parse("grid", format!("unexpected character {:?} at ({}, {})", c, y, x))
                })?;
            }
        }
        Ok(grid)
    }
}

impl<T> Grid<T> {
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn get(&self, y: usize, x: usize) -> Option<&T> {
        if y < self.height && x < self.width {
            Some(&self.cells[y * self.width + x])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, y: usize, x: usize) -> Option<&mut T> {
        if y < self.height && x < self.width {
            Some(&mut self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// Orthogonal neighbours in reading order (up, left, right, down).
    pub fn neighbors4(&self, y: usize, x: usize) -> impl Iterator<Item = (usize, usize)> {
        let (h, w) = self.shape();
        let mut ret = Vec::with_capacity(4);
        if y > 0 {
            ret.push((y - 1, x));
        }
        if x > 0 {
            ret.push((y, x - 1));
        }
        if x + 1 < w {
            ret.push((y, x + 1));
        }
        if y + 1 < h {
            ret.push((y + 1, x));
        }
        ret.into_iter()
    }

    /// All eight surrounding cells inside the grid.
    pub fn neighbors8(&self, y: usize, x: usize) -> impl Iterator<Item = (usize, usize)> {
        let (h, w) = self.shape();
        let ylo = y.saturating_sub(1);
        let yhi = (y + 1).min(h - 1);
        let xlo = x.saturating_sub(1);
        let xhi = (x + 1).min(w - 1);
        (ylo..=yhi)
            .flat_map(move |ny| (xlo..=xhi).map(move |nx| (ny, nx)))
            .filter(move |&p| p != (y, x))
    }

    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> {
        let (h, w) = self.shape();
        (0..h).flat_map(move |y| (0..w).map(move |x| (y, x)))
    }

    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> {
        let w = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, v)| ((i / w, i % w), v))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    pub fn render<F>(&self, mut cell: F) -> String
    where
        F: FnMut(&T) -> char,
    {
        let mut ret = String::with_capacity((self.width + 1) * self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                ret.push(cell(&self[(y, x)]));
            }
            ret.push('\n');
        }
        ret
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let (y, x) = index;
        assert!(y < self.height && x < self.width);
        &self.cells[y * self.width + x]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let (y, x) = index;
        assert!(y < self.height && x < self.width);
        &mut self.cells[y * self.width + x]
    }
}

pub fn manhattan2(a: (i64, i64), b: (i64, i64)) -> i64 {
    (a.0 - b.0).abs() + (a.1 - b.1).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_from_lines_pads_short_rows() {
        let grid = Grid::from_lines("#.#\n.\n\n", ' ', Some).unwrap();
        assert_eq!(grid.shape(), (2, 3));
        assert_eq!(grid[(0, 2)], '#');
        assert_eq!(grid[(1, 0)], '.');
        assert_eq!(grid[(1, 2)], ' ');
        assert_eq!(grid.render(|&c| c), "#.#\n.  \n");
    }

    #[test]
    fn test_grid_from_lines_rejects_unknown_cells() {
        let res = Grid::from_lines("ab", false, |c| match c {
            'a' => Some(true),
            _ => None,
        });
        assert!(res.is_err());
        assert!(Grid::from_lines("\n\n", 0, |_| Some(1)).is_err());
    }

    #[test]
    fn test_grid_neighbors() {
        let grid = Grid::new(3, 3, 0);
        assert_eq!(
            grid.neighbors4(1, 1).collect::<Vec<_>>(),
            vec![(0, 1), (1, 0), (1, 2), (2, 1)]
        );
        assert_eq!(grid.neighbors4(0, 0).collect::<Vec<_>>(), vec![(0, 1), (1, 0)]);
        assert_eq!(grid.neighbors8(1, 1).count(), 8);
        assert_eq!(grid.neighbors8(0, 0).count(), 3);
        assert_eq!(grid.neighbors8(2, 1).count(), 5);
    }

    #[test]
    fn test_manhattan() {
        assert_eq!(manhattan2((1, 1), (8, 3)), 9);
        assert_eq!(manhattan2((-2, 5), (2, -5)), 14);
    }
}
