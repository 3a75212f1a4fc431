//! Only included in test

use kurbo::{BezPath, PathEl, Point, Rect};

/// The rectangles of a path made only of four point closed contours.
pub(crate) fn rects(path: &BezPath) -> Vec<Rect> {
    let mut result = Vec::new();
    let mut points: Vec<Point> = Vec::new();
    for el in path.elements() {
        match el {
            PathEl::MoveTo(p) | PathEl::LineTo(p) => points.push(*p),
            PathEl::ClosePath => {
                assert_eq!(4, points.len(), "Not a rectangle: {points:?}");
                let rect = points
                    .iter()
                    .skip(1)
                    .fold(Rect::from_points(points[0], points[0]), |acc, p| {
                        acc.union_pt(*p)
                    });
                result.push(rect);
                points.clear();
            }
            other => panic!("Unexpected {other:?} in a path of rectangles"),
        }
    }
    assert!(points.is_empty(), "Unclosed contour {points:?}");
    result
}
