use gpui::{
    App, Axis, Context, Entity, Focusable, IntoElement, ParentElement, Render, Styled,
    Subscription, Window, div,
};
use gpui_steps_progress::{
    ActiveTheme, AxisExt, Button, StepsProgress, StepsProgressState, h_flex, v_flex,
};

use crate::section;

pub struct StepsProgressStory {
    focus_handle: gpui::FocusHandle,
    store: Entity<StepsProgressState>,
    overflow_store: Entity<StepsProgressState>,
    custom_store: Entity<StepsProgressState>,
    _subscriptions: Vec<Subscription>,
}

impl StepsProgressStory {
    pub fn view(window: &mut Window, cx: &mut App) -> Entity<Self> {
        cx.new(|cx| Self::new(window, cx))
    }

    fn new(_: &mut Window, cx: &mut Context<Self>) -> Self {
        let store = cx.new(|_| StepsProgressState::new(4).default_current(3));
        // A store whose current step ran past the end, the last marker
        // keeps pulsing and every separator reads as passed.
        let overflow_store =
            cx.new(|_| StepsProgressState::new(4).default_current(5).vertical());
        let custom_store = cx.new(|_| StepsProgressState::new(3).default_current(2));

        let _subscriptions = vec![
            cx.observe(&store, |_, _, cx| cx.notify()),
            cx.observe(&overflow_store, |_, _, cx| cx.notify()),
        ];

        Self {
            focus_handle: cx.focus_handle(),
            store,
            overflow_store,
            custom_store,
            _subscriptions,
        }
    }
}

impl Focusable for StepsProgressStory {
    fn focus_handle(&self, _: &gpui::App) -> gpui::FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for StepsProgressStory {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let (steps, current, axis) = {
            let store = self.store.read(cx);
            (store.steps(), store.current(), store.axis())
        };

        v_flex()
            .gap_y_3()
            .child(
                h_flex()
                    .gap_2()
                    .flex_wrap()
                    .child(Button::new("back").label("Back").on_click(cx.listener(
                        |this, _, _, cx| {
                            this.store.update(cx, |store, cx| {
                                let current = store.current();
                                store.set_current(current.saturating_sub(1), cx);
                            });
                        },
                    )))
                    .child(Button::new("next").primary().label("Next").on_click(
                        cx.listener(|this, _, _, cx| {
                            this.store.update(cx, |store, cx| {
                                // Deliberately allowed to run past the last
                                // step to show the clamped pulse.
                                let current = store.current();
                                store.set_current(current + 1, cx);
                            });
                        }),
                    ))
                    .child(Button::new("add-step").outline().label("Add step").on_click(
                        cx.listener(|this, _, _, cx| {
                            this.store.update(cx, |store, cx| {
                                let steps = store.steps();
                                store.set_steps(steps + 1, cx);
                            });
                        }),
                    ))
                    .child(
                        Button::new("remove-step")
                            .outline()
                            .label("Remove step")
                            .disabled(steps <= 1)
                            .on_click(cx.listener(|this, _, _, cx| {
                                this.store.update(cx, |store, cx| {
                                    let steps = store.steps();
                                    store.set_steps(steps - 1, cx);
                                });
                            })),
                    )
                    .child(
                        Button::new("toggle-axis")
                            .outline()
                            .label(if axis.is_horizontal() {
                                "Vertical"
                            } else {
                                "Horizontal"
                            })
                            .on_click(cx.listener(|this, _, _, cx| {
                                this.store.update(cx, |store, cx| {
                                    let axis = if store.axis().is_horizontal() {
                                        Axis::Vertical
                                    } else {
                                        Axis::Horizontal
                                    };
                                    store.set_axis(axis, cx);
                                });
                            })),
                    ),
            )
            .child(
                section("Steps Progress").max_w_md().child(
                    v_flex()
                        .gap_3()
                        .items_center()
                        .child(StepsProgress::new(&self.store))
                        .child(
                            div()
                                .text_sm()
                                .text_color(cx.theme().muted_foreground)
                                .child(format!("Step {} of {}", current, steps)),
                        ),
                ),
            )
            .child(
                section("Current step past the end")
                    .max_w_md()
                    .child(StepsProgress::new(&self.overflow_store)),
            )
            .child(
                section("Custom color").max_w_md().child(
                    StepsProgress::new(&self.custom_store).color(cx.theme().primary),
                ),
            )
    }
}
