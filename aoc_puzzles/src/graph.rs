use std::cmp::Reverse;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap, VecDeque};
use std::hash::Hash;

use aoc_core::util::Grid;

/// Breadth-first distances from `start` over cells accepted by `passable`.
/// Unreachable cells are `None`.
pub fn bfs_distances<T, F>(grid: &Grid<T>, start: (usize, usize), passable: F) -> Grid<Option<usize>>
where
    F: Fn((usize, usize)) -> bool,
{
    let (h, w) = grid.shape();
    let mut dist = Grid::new(h, w, None);
    let mut queue = VecDeque::new();
    dist[start] = Some(0);
    queue.push_back(start);

    while let Some(p) = queue.pop_front() {
        let d = dist[p].unwrap_or(0);
        for q in grid.neighbors4(p.0, p.1) {
            if dist[q].is_none() && passable(q) {
                dist[q] = Some(d + 1);
                queue.push_back(q);
            }
        }
    }
    dist
}

/// Shortest distance from `start` to the first state satisfying `is_goal`.
/// `next` enumerates `(state, cost)` transitions.
pub fn dijkstra<S, N, I, G>(start: S, mut next: N, mut is_goal: G) -> Option<(S, u64)>
where
    S: Clone + Eq + Hash + Ord,
    N: FnMut(&S) -> I,
    I: IntoIterator<Item = (S, u64)>,
    G: FnMut(&S) -> bool,
{
    let mut best = HashMap::new();
    let mut heap = BinaryHeap::new();
    best.insert(start.clone(), 0);
    heap.push(Reverse((0u64, start)));

    while let Some(Reverse((cost, state))) = heap.pop() {
        if best.get(&state).map_or(false, |&c| c < cost) {
            continue;
        }
        if is_goal(&state) {
            return Some((state, cost));
        }
        for (to, step) in next(&state) {
            let c = cost + step;
            match best.entry(to.clone()) {
                Entry::Occupied(mut e) => {
                    if c < *e.get() {
                        e.insert(c);
                        heap.push(Reverse((c, to)));
                    }
                }
                Entry::Vacant(e) => {
                    e.insert(c);
                    heap.push(Reverse((c, to)));
                }
            }
        }
    }
    None
}

/// Union-find with path halving and union by size.
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    n_components: usize,
}

impl DisjointSet {
    pub fn new(n: usize) -> DisjointSet {
        DisjointSet {
            parent: (0..n).collect(),
            size: vec![1; n],
            n_components: n,
        }
    }

    pub fn root(&mut self, mut p: usize) -> usize {
        while self.parent[p] != p {
            self.parent[p] = self.parent[self.parent[p]];
            p = self.parent[p];
        }
        p
    }

    /// Returns `true` if `p` and `q` were in different components.
    pub fn union(&mut self, p: usize, q: usize) -> bool {
        let mut p = self.root(p);
        let mut q = self.root(q);
        if p == q {
            return false;
        }
        if self.size[p] < self.size[q] {
            std::mem::swap(&mut p, &mut q);
        }
        self.parent[q] = p;
        self.size[p] += self.size[q];
        self.n_components -= 1;
        true
    }

    pub fn n_components(&self) -> usize {
        self.n_components
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bfs_distances() {
        let grid = Grid::from_lines("..#\n.##\n...", false, |c| Some(c == '#')).unwrap();
        let dist = bfs_distances(&grid, (0, 0), |p| !grid[p]);
        assert_eq!(dist[(0, 1)], Some(1));
        assert_eq!(dist[(2, 2)], Some(4));
        assert_eq!(dist[(0, 2)], None);
    }

    #[test]
    fn test_dijkstra() {
        // 0 -> 1 (cost 5), 0 -> 2 (cost 1), 2 -> 1 (cost 1), 1 -> 3 (cost 1)
        let edges: HashMap<u32, Vec<(u32, u64)>> = [
            (0, vec![(1, 5), (2, 1)]),
            (1, vec![(3, 1)]),
            (2, vec![(1, 1)]),
            (3, vec![]),
        ]
        .into_iter()
        .collect();
        let res = dijkstra(0u32, |s| edges[s].clone(), |&s| s == 3);
        assert_eq!(res, Some((3, 3)));
        assert_eq!(dijkstra(0u32, |s| edges[s].clone(), |&s| s == 7), None);
    }

    #[test]
    fn test_disjoint_set() {
        let mut set = DisjointSet::new(5);
        assert!(set.union(0, 1));
        assert!(set.union(3, 4));
        assert!(!set.union(1, 0));
        assert_eq!(set.n_components(), 3);
        assert!(set.union(1, 4));
        assert_eq!(set.root(0), set.root(3));
        assert_eq!(set.n_components(), 2);
    }
}
