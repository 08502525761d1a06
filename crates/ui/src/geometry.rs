use gpui::Axis;

/// Helper methods for [`Axis`].
pub trait AxisExt {
    fn is_horizontal(self) -> bool;
    fn is_vertical(self) -> bool;
}

impl AxisExt for Axis {
    #[inline]
    fn is_horizontal(self) -> bool {
        self == Axis::Horizontal
    }

    #[inline]
    fn is_vertical(self) -> bool {
        self == Axis::Vertical
    }
}

#[cfg(test)]
mod tests {
    use gpui::Axis;

    use super::AxisExt;

    #[test]
    fn test_axis_ext() {
        assert!(Axis::Horizontal.is_horizontal());
        assert!(!Axis::Horizontal.is_vertical());

        assert!(Axis::Vertical.is_vertical());
        assert!(!Axis::Vertical.is_horizontal());
    }
}
