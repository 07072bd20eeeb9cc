//! Geometry for drawing the crop overlay.
//!
//! The overlay dims the part of the image outside the crop rect and draws a
//! rule-of-thirds grid inside it. These helpers only compute shapes; drawing
//! is up to the host.

use crate::geometry::{Point, Rect};

/// A straight line between two points in container space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
}

/// Bands of `image_rect` not covered by `crop_rect`.
///
/// Returns up to four non-overlapping rectangles (top, bottom, left, right)
/// which together with the crop rect tile the image rect exactly. Empty bands
/// are omitted. `crop_rect` is expected to lie inside `image_rect`.
pub fn dimming_regions(image_rect: Rect, crop_rect: Rect) -> Vec<Rect> {
    let top = Rect::new(
        image_rect.min_x(),
        image_rect.min_y(),
        image_rect.width,
        crop_rect.min_y() - image_rect.min_y(),
    );
    let bottom = Rect::new(
        image_rect.min_x(),
        crop_rect.max_y(),
        image_rect.width,
        image_rect.max_y() - crop_rect.max_y(),
    );
    let left = Rect::new(
        image_rect.min_x(),
        crop_rect.min_y(),
        crop_rect.min_x() - image_rect.min_x(),
        crop_rect.height,
    );
    let right = Rect::new(
        crop_rect.max_x(),
        crop_rect.min_y(),
        image_rect.max_x() - crop_rect.max_x(),
        crop_rect.height,
    );

    [top, bottom, left, right]
        .into_iter()
        .filter(|band| !band.is_empty())
        .collect()
}

/// Rule-of-thirds grid lines inside `rect`: two vertical, then two horizontal.
pub fn grid_lines(rect: Rect) -> [LineSegment; 4] {
    let third_w = rect.width / 3.0;
    let third_h = rect.height / 3.0;

    let vertical = |i: f64| {
        let x = rect.min_x() + third_w * i;
        LineSegment {
            start: Point::new(x, rect.min_y()),
            end: Point::new(x, rect.max_y()),
        }
    };
    let horizontal = |i: f64| {
        let y = rect.min_y() + third_h * i;
        LineSegment {
            start: Point::new(rect.min_x(), y),
            end: Point::new(rect.max_x(), y),
        }
    };

    [vertical(1.0), vertical(2.0), horizontal(1.0), horizontal(2.0)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(r: &Rect) -> f64 {
        r.width * r.height
    }

    #[test]
    fn test_dimming_centered_crop_has_four_bands() {
        let image = Rect::new(0.0, 0.0, 100.0, 100.0);
        let crop = Rect::new(25.0, 25.0, 50.0, 50.0);
        let bands = dimming_regions(image, crop);

        assert_eq!(bands.len(), 4);
        assert_eq!(bands[0], Rect::new(0.0, 0.0, 100.0, 25.0));
        assert_eq!(bands[1], Rect::new(0.0, 75.0, 100.0, 25.0));
        assert_eq!(bands[2], Rect::new(0.0, 25.0, 25.0, 50.0));
        assert_eq!(bands[3], Rect::new(75.0, 25.0, 25.0, 50.0));
    }

    #[test]
    fn test_dimming_tiles_image() {
        let image = Rect::new(50.0, 10.0, 300.0, 200.0);
        let crop = Rect::new(120.0, 40.0, 90.0, 120.0);
        let bands = dimming_regions(image, crop);

        let covered: f64 = bands.iter().map(area).sum::<f64>() + area(&crop);
        assert!((covered - area(&image)).abs() < 1e-9);
        for band in &bands {
            assert!(image.contains_rect(band, 1e-9));
        }
    }

    #[test]
    fn test_dimming_full_crop_has_no_bands() {
        let image = Rect::new(0.0, 0.0, 80.0, 60.0);
        assert!(dimming_regions(image, image).is_empty());
    }

    #[test]
    fn test_dimming_edge_crop_omits_empty_bands() {
        let image = Rect::new(0.0, 0.0, 100.0, 100.0);
        let crop = Rect::new(0.0, 0.0, 100.0, 40.0);
        let bands = dimming_regions(image, crop);
        assert_eq!(bands, vec![Rect::new(0.0, 40.0, 100.0, 60.0)]);
    }

    #[test]
    fn test_grid_lines_thirds() {
        let lines = grid_lines(Rect::new(0.0, 0.0, 90.0, 60.0));

        assert_eq!(lines[0].start, Point::new(30.0, 0.0));
        assert_eq!(lines[0].end, Point::new(30.0, 60.0));
        assert_eq!(lines[1].start.x, 60.0);
        assert_eq!(lines[2].start, Point::new(0.0, 20.0));
        assert_eq!(lines[2].end, Point::new(90.0, 20.0));
        assert_eq!(lines[3].start.y, 40.0);
    }
}
