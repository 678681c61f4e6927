use glam::Vec3;

/// Axis-aligned bounds accumulated over a point set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds3 {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds3 {
    /// Empty bounds; any update makes them valid.
    pub fn new() -> Self {
        Self {
            min: Vec3::INFINITY,
            max: Vec3::NEG_INFINITY,
        }
    }

    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Vec3>,
    {
        let mut bounds = Self::new();
        for point in points {
            bounds.update(point);
        }
        bounds
    }

    pub fn update(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    pub fn is_empty(&self) -> bool {
        self.min.cmpgt(self.max).any()
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        (self.max - self.min).max(Vec3::ZERO)
    }

    pub fn max_dimension(&self) -> f32 {
        self.size().max_element()
    }

    /// Axis of greatest extent, 0..2. Ties resolve towards X then Y.
    pub fn dominant_axis(&self) -> usize {
        let size = self.size();
        if size.x >= size.y && size.x >= size.z {
            0
        } else if size.y >= size.z {
            1
        } else {
            2
        }
    }

    pub fn contains(&self, point: Vec3, margin: f32) -> bool {
        point.cmpge(self.min - Vec3::splat(margin)).all()
            && point.cmple(self.max + Vec3::splat(margin)).all()
    }

    pub fn expanded(&self, margin: f32) -> Self {
        Self {
            min: self.min - Vec3::splat(margin),
            max: self.max + Vec3::splat(margin),
        }
    }
}

impl Default for Bounds3 {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_tracks_extremes() {
        let mut bounds = Bounds3::new();
        bounds.update(Vec3::new(-1.0, 2.0, 0.5));
        bounds.update(Vec3::new(3.0, -2.0, 0.0));
        assert_eq!(bounds.min, Vec3::new(-1.0, -2.0, 0.0));
        assert_eq!(bounds.max, Vec3::new(3.0, 2.0, 0.5));
        assert_eq!(bounds.center(), Vec3::new(1.0, 0.0, 0.25));
        assert_eq!(bounds.size(), Vec3::new(4.0, 4.0, 0.5));
    }

    #[test]
    fn test_new_bounds_are_empty() {
        let bounds = Bounds3::new();
        assert!(bounds.is_empty());
        assert!(!bounds.contains(Vec3::ZERO, 0.0));
    }

    #[test]
    fn test_dominant_axis_prefers_x_on_ties() {
        let cube = Bounds3::from_points([Vec3::splat(-0.5), Vec3::splat(0.5)]);
        assert_eq!(cube.dominant_axis(), 0);

        let tall = Bounds3::from_points([Vec3::ZERO, Vec3::new(1.0, 5.0, 2.0)]);
        assert_eq!(tall.dominant_axis(), 1);

        let deep = Bounds3::from_points([Vec3::ZERO, Vec3::new(1.0, 2.0, 5.0)]);
        assert_eq!(deep.dominant_axis(), 2);
    }

    #[test]
    fn test_expanded_contains_margin_band() {
        let bounds = Bounds3::from_points([Vec3::ZERO, Vec3::ONE]);
        let expanded = bounds.expanded(0.1);
        assert!(expanded.contains(Vec3::new(-0.05, 0.5, 1.05), 0.0));
        assert!(!expanded.contains(Vec3::new(-0.2, 0.5, 0.5), 0.0));
    }
}
