/// Bounding box `(min_x, min_y, max_x, max_y)` of a point set, `None` if empty.
pub fn bounding_box<I>(points: I) -> Option<(i64, i64, i64, i64)>
where
    I: IntoIterator<Item = (i64, i64)>,
{
    points.into_iter().fold(None, |acc, (x, y)| match acc {
        None => Some((x, y, x, y)),
        Some((x0, y0, x1, y1)) => Some((x0.min(x), y0.min(y), x1.max(x), y1.max(y))),
    })
}
