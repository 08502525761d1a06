use gpui::{Hsla, Rgba, hsla};

/// Create a [`Hsla`] color from a hue in degrees (0..360) and saturation and
/// lightness percentages (0..100).
pub fn hsl(h: f32, s: f32, l: f32) -> Hsla {
    hsla(h / 360., s / 100., l / 100., 1.)
}

/// Extension methods for [`Hsla`].
pub trait Colorize: Sized {
    /// Linearly interpolate towards `other` in RGB space.
    ///
    /// A `factor` of 0.0 returns `self`, 1.0 returns `other`.
    fn mix(&self, other: Hsla, factor: f32) -> Hsla;
}

impl Colorize for Hsla {
    fn mix(&self, other: Hsla, factor: f32) -> Hsla {
        let t = factor.clamp(0., 1.);
        let a = Rgba::from(*self);
        let b = Rgba::from(other);

        Rgba {
            r: a.r + (b.r - a.r) * t,
            g: a.g + (b.g - a.g) * t,
            b: a.b + (b.b - a.b) * t,
            a: a.a + (b.a - a.a) * t,
        }
        .into()
    }
}

/// The colors used by the components.
#[derive(Debug, Clone, Copy)]
pub struct ThemeColor {
    pub background: Hsla,
    pub foreground: Hsla,
    pub border: Hsla,
    pub muted: Hsla,
    pub muted_foreground: Hsla,
    pub primary: Hsla,
    pub primary_hover: Hsla,
    pub primary_active: Hsla,
    pub primary_foreground: Hsla,
    pub secondary: Hsla,
    pub secondary_hover: Hsla,
    pub secondary_active: Hsla,
    pub secondary_foreground: Hsla,
    /// Fill of completed step markers and passed separators.
    pub steps_complete: Hsla,
    /// Fill of pending step markers and separators.
    pub steps_pending: Hsla,
}

impl ThemeColor {
    pub fn light() -> Self {
        Self {
            background: hsl(0., 0., 100.),
            foreground: hsl(240., 10., 3.9),
            border: hsl(240., 5.9, 90.),
            muted: hsl(240., 4.8, 95.9),
            muted_foreground: hsl(240., 3.8, 46.1),
            primary: hsl(240., 5.9, 10.),
            primary_hover: hsl(240., 5.9, 15.),
            primary_active: hsl(240., 5.9, 20.),
            primary_foreground: hsl(0., 0., 98.),
            secondary: hsl(240., 4.8, 95.9),
            secondary_hover: hsl(240., 5., 92.),
            secondary_active: hsl(240., 5., 88.),
            secondary_foreground: hsl(240., 5.9, 10.),
            steps_complete: hsl(142., 76., 36.),
            steps_pending: hsl(240., 3.8, 46.1),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: hsl(0., 0., 8.),
            foreground: hsl(0., 0., 98.),
            border: hsl(240., 3.7, 16.9),
            muted: hsl(240., 3.7, 16.9),
            muted_foreground: hsl(240., 5., 64.9),
            primary: hsl(0., 0., 98.),
            primary_hover: hsl(0., 0., 90.),
            primary_active: hsl(0., 0., 85.),
            primary_foreground: hsl(240., 5.9, 10.),
            secondary: hsl(240., 3.7, 16.9),
            secondary_hover: hsl(240., 3.7, 20.),
            secondary_active: hsl(240., 3.7, 24.),
            secondary_foreground: hsl(0., 0., 98.),
            steps_complete: hsl(142., 70., 45.),
            steps_pending: hsl(240., 5., 64.9),
        }
    }
}

#[cfg(test)]
mod tests {
    use gpui::{Rgba, black, white};

    use super::Colorize;

    #[test]
    fn test_mix() {
        let mid = Rgba::from(black().mix(white(), 0.5));
        assert!((mid.r - 0.5).abs() < 1e-6);
        assert!((mid.g - 0.5).abs() < 1e-6);
        assert!((mid.b - 0.5).abs() < 1e-6);
        assert!((mid.a - 1.0).abs() < 1e-6);

        let start = Rgba::from(black().mix(white(), 0.));
        assert!(start.r < 1e-6);

        let end = Rgba::from(black().mix(white(), 1.));
        assert!((end.r - 1.0).abs() < 1e-6);

        // Out of range factors clamp.
        let clamped = Rgba::from(black().mix(white(), 2.));
        assert!((clamped.r - 1.0).abs() < 1e-6);
    }
}
