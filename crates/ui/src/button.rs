use std::rc::Rc;

use gpui::{
    App, ClickEvent, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement as _, StyleRefinement, Styled, Window, div,
    prelude::FluentBuilder as _,
};

use crate::{StyledExt, theme::ActiveTheme};

/// The display variant of a [`Button`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Solid background with the secondary colors (default).
    #[default]
    Secondary,
    /// Solid background with the primary colors.
    Primary,
    /// Plain background with a border.
    Outline,
}

/// A simple push button element.
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    style: StyleRefinement,
    label: Option<SharedString>,
    variant: ButtonVariant,
    disabled: bool,
    on_click: Option<Rc<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button with the given ID.
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            style: StyleRefinement::default(),
            label: None,
            variant: ButtonVariant::default(),
            disabled: false,
            on_click: None,
        }
    }

    /// Set the label of the button.
    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Use the primary variant.
    pub fn primary(mut self) -> Self {
        self.variant = ButtonVariant::Primary;
        self
    }

    /// Use the outline variant.
    pub fn outline(mut self) -> Self {
        self.variant = ButtonVariant::Outline;
        self
    }

    /// Set the disabled state of the button, default is false.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Add an on_click handler for the button.
    pub fn on_click<F>(mut self, f: F) -> Self
    where
        F: Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    {
        self.on_click = Some(Rc::new(f));
        self
    }
}

impl Styled for Button {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

impl RenderOnce for Button {
    fn render(self, _: &mut Window, cx: &mut App) -> impl IntoElement {
        let (bg, fg) = match self.variant {
            ButtonVariant::Secondary => (cx.theme().secondary, cx.theme().secondary_foreground),
            ButtonVariant::Primary => (cx.theme().primary, cx.theme().primary_foreground),
            ButtonVariant::Outline => (cx.theme().background, cx.theme().foreground),
        };
        let (hover_bg, active_bg) = match self.variant {
            ButtonVariant::Primary => (cx.theme().primary_hover, cx.theme().primary_active),
            _ => (cx.theme().secondary_hover, cx.theme().secondary_active),
        };

        div()
            .id(self.id)
            .h_flex()
            .justify_center()
            .flex_shrink_0()
            .px_3()
            .py_1()
            .text_sm()
            .rounded(cx.theme().radius)
            .bg(bg)
            .text_color(fg)
            .when(self.variant == ButtonVariant::Outline, |this| {
                this.border_1().border_color(cx.theme().border)
            })
            .refine_style(&self.style)
            .map(|this| {
                if self.disabled {
                    this.opacity(0.5)
                } else {
                    this.cursor_pointer()
                        .hover(move |this| this.bg(hover_bg))
                        .active(move |this| this.bg(active_bg))
                }
            })
            .when_some(self.label, |this, label| this.child(label))
            .when_some(
                self.on_click.filter(|_| !self.disabled),
                |this, on_click| {
                    this.on_click(move |event, window, cx| on_click(event, window, cx))
                },
            )
    }
}
