/// Fixed logical resolution everything is drawn in
pub const LOGICAL_WIDTH: f32 = 960.0;
pub const LOGICAL_HEIGHT: f32 = 540.0;

/// Layout maps the fixed logical surface onto the window.
///
/// The surface keeps its 16:9 aspect ratio and is centered, leaving bars
/// on the sides or top/bottom when the window shape differs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub offset_x: f32,
    pub offset_y: f32,
    pub scale: f32, // 1.0 = one logical pixel per window pixel
}

impl Layout {
    /// Fit the surface into a `screen_width` x `screen_height` window,
    /// never scaling beyond `max_scale`
    pub fn fit(screen_width: f32, screen_height: f32, max_scale: f32) -> Self {
        let scale = (screen_width / LOGICAL_WIDTH)
            .min(screen_height / LOGICAL_HEIGHT)
            .min(max_scale)
            .max(f32::EPSILON);
        Self {
            offset_x: (screen_width - LOGICAL_WIDTH * scale) / 2.0,
            offset_y: (screen_height - LOGICAL_HEIGHT * scale) / 2.0,
            scale,
        }
    }

    /// Displayed size of the surface in window pixels
    pub fn display_size(&self) -> (f32, f32) {
        (LOGICAL_WIDTH * self.scale, LOGICAL_HEIGHT * self.scale)
    }

    /// Convert window coordinates to logical coordinates.
    /// Points outside the displayed surface give `None`.
    pub fn to_logical(&self, screen_x: f32, screen_y: f32) -> Option<(f32, f32)> {
        let x = (screen_x - self.offset_x) / self.scale;
        let y = (screen_y - self.offset_y) / self.scale;
        ((0.0..LOGICAL_WIDTH).contains(&x) && (0.0..LOGICAL_HEIGHT).contains(&y)).then_some((x, y))
    }

    /// Convert logical coordinates to window coordinates
    pub fn to_screen(&self, x: f32, y: f32) -> (f32, f32) {
        (x * self.scale + self.offset_x, y * self.scale + self.offset_y)
    }

    /// Scale a logical length (line width, font size, radius)
    pub fn scaled(&self, logical: f32) -> f32 {
        logical * self.scale
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::fit(LOGICAL_WIDTH, LOGICAL_HEIGHT, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_size_is_identity() {
        let layout = Layout::default();
        assert_eq!(layout.scale, 1.0);
        assert_eq!(layout.to_logical(100.0, 200.0), Some((100.0, 200.0)));
        assert_eq!(layout.to_screen(100.0, 200.0), (100.0, 200.0));
    }

    #[test]
    fn test_narrow_window_scales_down_and_letterboxes() {
        let layout = Layout::fit(480.0, 600.0, 1.0);
        assert_eq!(layout.scale, 0.5);
        assert_eq!(layout.display_size(), (480.0, 270.0));
        assert_eq!(layout.offset_x, 0.0);
        assert_eq!(layout.offset_y, 165.0);
        // center of the window is center of the surface
        assert_eq!(layout.to_logical(240.0, 300.0), Some((480.0, 270.0)));
        // bars above the surface are outside it
        assert_eq!(layout.to_logical(240.0, 100.0), None);
    }

    #[test]
    fn test_max_scale_caps_growth() {
        let layout = Layout::fit(1920.0, 1080.0, 1.0);
        assert_eq!(layout.scale, 1.0);
        assert_eq!(layout.offset_x, 480.0);
        assert_eq!(layout.offset_y, 270.0);

        let layout = Layout::fit(1920.0, 1080.0, 4.0);
        assert_eq!(layout.scale, 2.0);
        assert_eq!(layout.offset_x, 0.0);
    }

    #[test]
    fn test_to_screen_inverts_to_logical() {
        let layout = Layout::fit(1280.0, 1024.0, 2.0);
        let (sx, sy) = layout.to_screen(310.0, 90.0);
        let (lx, ly) = layout.to_logical(sx, sy).unwrap();
        assert!((lx - 310.0).abs() < 1e-3);
        assert!((ly - 90.0).abs() < 1e-3);
    }
}
