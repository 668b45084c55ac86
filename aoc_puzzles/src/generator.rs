use rand::seq::SliceRandom;
use rand::Rng;

use crate::items::Point3;

/// Random polymer over the first `n_types` letters, with both polarities.
pub fn random_polymer<R: Rng>(rng: &mut R, len: usize, n_types: u8) -> String {
    assert!((1..=26).contains(&n_types));
    (0..len)
        .map(|_| {
            let c = (b'a' + rng.gen_range(0..n_types)) as char;
            if rng.gen_bool(0.5) {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

/// `n` distinct points in `[0, size)^2`, as `(x, y)`.
pub fn random_points<R: Rng>(rng: &mut R, n: usize, size: i64) -> Vec<(i64, i64)> {
    assert!((n as i64) <= size * size);
    let mut all = (0..size)
        .flat_map(|x| (0..size).map(move |y| (x, y)))
        .collect::<Vec<_>>();
    all.shuffle(rng);
    all.truncate(n);
    all
}

pub fn random_points4<R: Rng>(rng: &mut R, n: usize, range: i64) -> Vec<[i64; 4]> {
    (0..n)
        .map(|_| {
            let mut p = [0; 4];
            for v in &mut p {
                *v = rng.gen_range(-range..=range);
            }
            p
        })
        .collect()
}

/// `n` bots with coordinates in `[-range, range]` and radius at most `max_radius`.
pub fn random_bots<R: Rng>(rng: &mut R, n: usize, range: i64, max_radius: i64) -> Vec<(Point3, i64)> {
    (0..n)
        .map(|_| {
            let mut coord = || rng.gen_range(-range..=range);
            let pos = Point3::new(coord(), coord(), coord());
            (pos, rng.gen_range(0..=max_radius))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_points_are_distinct() {
        let mut rng = rand::thread_rng();
        let mut points = random_points(&mut rng, 30, 8);
        assert_eq!(points.len(), 30);
        points.sort();
        points.dedup();
        assert_eq!(points.len(), 30);
        assert!(points.iter().all(|&(x, y)| (0..8).contains(&x) && (0..8).contains(&y)));
    }

    #[test]
    fn test_random_polymer_alphabet() {
        let mut rng = rand::thread_rng();
        let polymer = random_polymer(&mut rng, 100, 3);
        assert_eq!(polymer.len(), 100);
        assert!(polymer
            .chars()
            .all(|c| matches!(c.to_ascii_lowercase(), 'a'..='c')));
    }
}
