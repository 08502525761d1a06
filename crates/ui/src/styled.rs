use gpui::{Div, Refineable as _, StyleRefinement, Styled, div};

/// Extension methods for [`Styled`] elements.
pub trait StyledExt: Styled + Sized {
    /// Apply a horizontal flex layout with centered items.
    fn h_flex(self) -> Self {
        self.flex().flex_row().items_center()
    }

    /// Apply a vertical flex layout.
    fn v_flex(self) -> Self {
        self.flex().flex_col()
    }

    /// Merge a [`StyleRefinement`] into this element's style.
    fn refine_style(mut self, style: &StyleRefinement) -> Self {
        self.style().refine(style);
        self
    }
}

impl<E: Styled> StyledExt for E {}

/// A horizontal flex container with centered items.
pub fn h_flex() -> Div {
    div().h_flex()
}

/// A vertical flex container.
pub fn v_flex() -> Div {
    div().v_flex()
}
