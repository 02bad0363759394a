use rand::Rng;

/// A position on the play field, in field units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    /// Fold the point back onto a `width` x `height` torus
    pub fn wrapped(&self, width: f64, height: f64) -> Point {
        Point::new(wrap_coordinate(self.x, width), wrap_coordinate(self.y, height))
    }
}

/// Returns `value` wrapped into `[0, extent)`
pub fn wrap_coordinate(value: f64, extent: f64) -> f64 {
    let wrapped = value.rem_euclid(extent);
    // rem_euclid rounds up to `extent` for tiny negative values
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

pub fn circles_overlap(a: Point, a_radius: f64, b: Point, b_radius: f64) -> bool {
    a.distance_to(b) < a_radius + b_radius
}

/// Uniformly random integer-valued point in `[margin, width - margin] x [margin, height - margin]`
pub fn random_in_bounds<R: Rng + ?Sized>(rng: &mut R, width: u32, height: u32, margin: u32) -> Point {
    let x = rng.random_range(margin..=width.saturating_sub(margin).max(margin));
    let y = rng.random_range(margin..=height.saturating_sub(margin).max(margin));
    Point::new(f64::from(x), f64::from(y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_distance() {
        let a = Point::new(400.0, 300.0);
        let b = Point::new(405.0, 300.0);
        assert_eq!(a.distance_to(b), 5.0);
        assert_eq!(Point::new(0.0, 0.0).distance_to(Point::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn test_wrap_inside_field_is_untouched() {
        assert_eq!(wrap_coordinate(123.5, 800.0), 123.5);
        assert_eq!(wrap_coordinate(0.0, 800.0), 0.0);
    }

    #[test]
    fn test_wrap_crosses_edges() {
        assert_eq!(wrap_coordinate(801.0, 800.0), 1.0);
        assert_eq!(wrap_coordinate(-1.0, 800.0), 799.0);
        assert_eq!(wrap_coordinate(800.0, 800.0), 0.0);
        assert_eq!(wrap_coordinate(-2400.0, 800.0), 0.0);
    }

    #[test]
    fn test_wrap_always_in_range() {
        let samples = [
            -1e-17,
            -1e-300,
            -799.999999,
            1e12 + 0.5,
            -1e12 - 0.25,
            799.9999999999999,
            f64::MIN_POSITIVE,
        ];
        for x in samples {
            let wrapped = wrap_coordinate(x, 800.0);
            assert!((0.0..800.0).contains(&wrapped), "{x} wrapped to {wrapped}");
        }
    }

    #[test]
    fn test_wrapped_point() {
        let p = Point::new(-5.0, 605.0).wrapped(800.0, 600.0);
        assert_eq!(p, Point::new(795.0, 5.0));
    }

    #[test]
    fn test_circles_overlap() {
        let head = Point::new(100.0, 100.0);
        assert!(circles_overlap(head, 10.0, Point::new(110.0, 100.0), 30.0));
        // touching circles do not overlap
        assert!(!circles_overlap(head, 10.0, Point::new(140.0, 100.0), 30.0));
    }

    #[test]
    fn test_random_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let p = random_in_bounds(&mut rng, 800, 600, 50);
            assert!((50.0..=750.0).contains(&p.x));
            assert!((50.0..=550.0).contains(&p.y));
            assert_eq!(p.x.fract(), 0.0);
            assert_eq!(p.y.fract(), 0.0);
        }
    }
}
