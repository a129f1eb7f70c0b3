use crate::math::Vec2;

/// Axis-aligned bounding box over planar points.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb2 {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

impl Aabb2 {
    pub fn new(min: [f64; 2], max: [f64; 2]) -> Self {
        Aabb2 { min, max }
    }

    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let first = points.first()?;
        let mut min = [first.x, first.y];
        let mut max = [first.x, first.y];
        for p in points.iter().skip(1) {
            min[0] = min[0].min(p.x);
            min[1] = min[1].min(p.y);
            max[0] = max[0].max(p.x);
            max[1] = max[1].max(p.y);
        }
        Some(Aabb2::new(min, max))
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.min[0] + self.max[0]) * 0.5,
            (self.min[1] + self.max[1]) * 0.5,
        )
    }

    pub fn span(&self) -> [f64; 2] {
        [self.max[0] - self.min[0], self.max[1] - self.min[1]]
    }
}

#[cfg(test)]
mod tests {
    use super::Aabb2;
    use crate::math::Vec2;

    #[test]
    fn bounds_from_points() {
        let pts = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, -5.0),
            Vec2::new(-2.0, 3.0),
        ];
        let b = Aabb2::from_points(&pts).unwrap();
        assert_eq!(b.min, [-2.0, -5.0]);
        assert_eq!(b.max, [10.0, 3.0]);
        assert_eq!(b.center(), Vec2::new(4.0, -1.0));
        assert_eq!(b.span(), [12.0, 8.0]);
    }

    #[test]
    fn empty_input_has_no_bounds() {
        assert_eq!(Aabb2::from_points(&[]), None);
    }

    #[test]
    fn single_point_has_zero_span() {
        let b = Aabb2::from_points(&[Vec2::new(5.0, 5.0)]).unwrap();
        assert_eq!(b.span(), [0.0, 0.0]);
    }
}
