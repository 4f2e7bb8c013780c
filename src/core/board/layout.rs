use bevy::math::Vec2;

/// Axis-aligned region balls are laid out in (world units, y up).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayArea {
    pub min: Vec2,
    pub max: Vec2,
}

impl PlayArea {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Window centered on the origin with a HUD band reserved along the bottom edge.
    pub fn from_window(width: f32, height: f32, hud_band: f32) -> Self {
        let half = Vec2::new(width, height) * 0.5;
        let band = hud_band.clamp(0.0, height.max(0.0));
        Self {
            min: Vec2::new(-half.x, -half.y + band),
            max: half,
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Grid cell centers, spaced one diameter apart, row by row from the bottom.
pub fn grid_positions(area: &PlayArea, radius: f32) -> Vec<Vec2> {
    if !radius.is_finite() || radius <= 0.0 {
        return Vec::new();
    }
    let step = radius * 2.0;
    let mut out = Vec::new();
    let mut y = area.min.y + radius;
    while y < area.max.y - radius {
        let mut x = area.min.x + radius;
        while x < area.max.x - radius {
            out.push(Vec2::new(x, y));
            x += step;
        }
        y += step;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_excludes_last_partial_column() {
        let area = PlayArea::new(Vec2::ZERO, Vec2::new(200.0, 120.0));
        let pts = grid_positions(&area, 20.0);
        // x: 20, 60, 100, 140 (180 is not < 180); y: 20, 60 (100 is not < 100)
        assert_eq!(pts.len(), 8);
        assert_eq!(pts[0], Vec2::new(20.0, 20.0));
        assert_eq!(pts[3], Vec2::new(140.0, 20.0));
        assert_eq!(pts[4], Vec2::new(20.0, 60.0));
    }

    #[test]
    fn degenerate_radius_yields_nothing() {
        let area = PlayArea::new(Vec2::ZERO, Vec2::splat(100.0));
        assert!(grid_positions(&area, 0.0).is_empty());
        assert!(grid_positions(&area, -5.0).is_empty());
        assert!(grid_positions(&area, f32::NAN).is_empty());
    }

    #[test]
    fn from_window_reserves_bottom_band() {
        let area = PlayArea::from_window(400.0, 800.0, 100.0);
        assert_eq!(area.min, Vec2::new(-200.0, -300.0));
        assert_eq!(area.max, Vec2::new(200.0, 400.0));
        assert!(area.contains(Vec2::new(0.0, -250.0)));
        assert!(!area.contains(Vec2::new(0.0, -350.0)));
    }
}
