use std::time::Duration;

use gpui::{
    Animation, AnimationExt as _, AnyElement, App, Axis, Context, ElementId, Entity, Hsla,
    InteractiveElement as _, IntoElement, ParentElement, Pixels, RenderOnce, Size,
    StyleRefinement, Styled, Window, div, prelude::FluentBuilder as _, px, size,
};
use smallvec::SmallVec;

use crate::{AxisExt, Colorize as _, StyledExt, theme::ActiveTheme};

/// Observable state for a [`StepsProgress`] element.
///
/// The host application owns this in an [`Entity`] and mutates it through
/// the setters, which notify every observer. A view embedding the element
/// re-renders on changes by observing the entity:
///
/// ```ignore
/// let store = cx.new(|_| StepsProgressState::new(4));
/// cx.observe(&store, |_, _, cx| cx.notify()).detach();
///
/// // Later, in render:
/// StepsProgress::new(&store)
/// ```
pub struct StepsProgressState {
    steps: usize,
    current: usize,
    axis: Axis,
}

impl StepsProgressState {
    /// Create a state with the given number of steps, on step 1, laid out
    /// horizontally.
    pub fn new(steps: usize) -> Self {
        Self {
            steps,
            current: 1,
            axis: Axis::Horizontal,
        }
    }

    /// Lay the steps out vertically, default is horizontal.
    pub fn vertical(mut self) -> Self {
        self.axis = Axis::Vertical;
        self
    }

    /// Set the initial current step, default is 1.
    pub fn default_current(mut self, current: usize) -> Self {
        self.current = current;
        self
    }

    /// Total number of steps.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// The current step, 1-based.
    ///
    /// May run past [`steps`](Self::steps), see [`active_step`](Self::active_step).
    pub fn current(&self) -> usize {
        self.current
    }

    /// The layout axis.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Set the total number of steps.
    pub fn set_steps(&mut self, steps: usize, cx: &mut Context<Self>) {
        tracing::debug!(steps, "steps changed");
        self.steps = steps;
        cx.notify();
    }

    /// Set the current step.
    pub fn set_current(&mut self, current: usize, cx: &mut Context<Self>) {
        tracing::debug!(current, "current step changed");
        self.current = current;
        cx.notify();
    }

    /// Set the layout axis.
    pub fn set_axis(&mut self, axis: Axis, cx: &mut Context<Self>) {
        self.axis = axis;
        cx.notify();
    }

    /// The step showing the pulse ring.
    ///
    /// When `current` runs past the last step, the last marker stays active.
    pub fn active_step(&self) -> usize {
        self.current.min(self.steps)
    }
}

/// A marker is complete once the current step has reached it.
fn is_complete(step: usize, current: usize) -> bool {
    step <= current
}

/// A separator is passed once the current step has moved beyond it.
fn is_passed(step: usize, current: usize) -> bool {
    step < current
}

/// Size of a separator between two markers for the given layout axis.
fn separator_size(axis: Axis) -> Size<Pixels> {
    if axis.is_horizontal() {
        size(px(20.), px(2.))
    } else {
        size(px(2.), px(20.))
    }
}

/// Keyed element state for the color transition on current step changes.
struct TransitionState {
    step: usize,
}

/// A multi-step progress indicator.
///
/// Renders one 20 px circular marker per step, connected by separators and
/// stacked without gaps along the axis of the bound [`StepsProgressState`].
/// Markers up to the current step are filled with the complete color, the
/// rest with the pending color, and the active marker shows a ring that
/// repeatedly grows and fades out. Changes of the current step cross-fade
/// the affected colors instead of snapping.
#[derive(IntoElement)]
pub struct StepsProgress {
    id: ElementId,
    state: Entity<StepsProgressState>,
    style: StyleRefinement,
    color: Option<Hsla>,
}

impl StepsProgress {
    /// Create a steps progress bound to the given state.
    pub fn new(state: &Entity<StepsProgressState>) -> Self {
        Self {
            id: ElementId::NamedInteger("steps-progress".into(), state.entity_id().as_u64()),
            state: state.clone(),
            style: StyleRefinement::default(),
            color: None,
        }
    }

    /// Set the color of completed markers and passed separators.
    ///
    /// Default is the theme `steps_complete` color.
    pub fn color(mut self, color: impl Into<Hsla>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl Styled for StepsProgress {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

impl RenderOnce for StepsProgress {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let (steps, current, axis) = {
            let state = self.state.read(cx);
            (state.steps(), state.current(), state.axis())
        };

        let complete = self.color.unwrap_or(cx.theme().steps_complete);
        let pending = cx.theme().steps_pending;

        let transition =
            window.use_keyed_state(self.id.clone(), cx, |_, _| TransitionState { step: current });
        let prev_step = transition.read(cx).step;

        let stack = div()
            .id(self.id)
            .when(axis.is_horizontal(), |this| this.h_flex())
            .when(axis.is_vertical(), |this| this.v_flex())
            .refine_style(&self.style);

        if prev_step != current {
            // Cross-fade from the previous step's colors, then commit so
            // later renders paint the final colors directly.
            let duration = Duration::from_secs_f64(0.3);
            cx.spawn({
                let transition = transition.clone();
                async move |cx| {
                    cx.background_executor().timer(duration).await;
                    _ = transition.update(cx, |this, _| this.step = current);
                }
            })
            .detach();

            stack
                .with_animation(
                    ElementId::NamedInteger("transition".into(), current as u64),
                    Animation::new(duration),
                    move |this, delta| {
                        this.children(render_steps(
                            steps, prev_step, current, axis, complete, pending, delta,
                        ))
                    },
                )
                .into_any_element()
        } else {
            stack
                .children(render_steps(
                    steps, current, current, axis, complete, pending, 1.,
                ))
                .into_any_element()
        }
    }
}

/// Build the marker/separator sequence, cross-faded between the colors for
/// the `from` and `to` current steps by `delta`.
fn render_steps(
    steps: usize,
    from: usize,
    to: usize,
    axis: Axis,
    complete: Hsla,
    pending: Hsla,
    delta: f32,
) -> SmallVec<[AnyElement; 8]> {
    let marker_size = px(20.);
    let separator = separator_size(axis);
    let active_step = to.min(steps);

    let mut items: SmallVec<[AnyElement; 8]> = SmallVec::new();
    for step in 1..=steps {
        let from_color = if is_complete(step, from) { complete } else { pending };
        let to_color = if is_complete(step, to) { complete } else { pending };

        items.push(
            div()
                .relative()
                .size(marker_size)
                .flex_shrink_0()
                .when(step == active_step, |this| {
                    this.child(pulse_ring(step, marker_size, complete))
                })
                .child(
                    div()
                        .size_full()
                        .rounded_full()
                        .bg(from_color.mix(to_color, delta)),
                )
                .into_any_element(),
        );

        if step < steps {
            let from_color = if is_passed(step, from) { complete } else { pending };
            let to_color = if is_passed(step, to) { complete } else { pending };

            items.push(
                div()
                    .flex_shrink_0()
                    .w(separator.width)
                    .h(separator.height)
                    .bg(from_color.mix(to_color, delta))
                    .into_any_element(),
            );
        }
    }

    items
}

/// The ring overlay on the active marker.
///
/// Grows from the marker's edge to 1.5x its size while fading from half
/// opacity to none, on an endless 1 second linear loop.
fn pulse_ring(step: usize, marker_size: Pixels, color: Hsla) -> impl IntoElement {
    div()
        .absolute()
        .top_0()
        .left_0()
        .size(marker_size)
        .rounded_full()
        .border_2()
        .border_color(color)
        .with_animation(
            ElementId::NamedInteger("pulse".into(), step as u64),
            Animation::new(Duration::from_secs(1)).repeat(),
            move |this, delta| {
                let scaled = marker_size * (1. + 0.5 * delta);
                let offset = (marker_size - scaled) / 2.;
                this.size(scaled)
                    .top(offset)
                    .left(offset)
                    .opacity(0.5 * (1. - delta))
            },
        )
}

#[cfg(test)]
mod tests {
    use gpui::{Axis, px};

    use super::*;
    use crate::theme::hsl;

    #[test]
    fn test_active_step_clamps_to_last() {
        let mut state = StepsProgressState::new(4).default_current(3);
        assert_eq!(state.active_step(), 3);

        state.current = 4;
        assert_eq!(state.active_step(), 4);

        state.current = 5;
        assert_eq!(state.active_step(), 4);
    }

    #[test]
    fn test_no_lower_clamp() {
        // A current below 1 is left alone, nothing is active.
        let state = StepsProgressState::new(4).default_current(0);
        assert_eq!(state.active_step(), 0);
        assert!(!(1..=4).contains(&state.active_step()));
    }

    #[test]
    fn test_exactly_one_active_marker() {
        for steps in 1..=6 {
            for current in 1..=steps + 2 {
                let state = StepsProgressState::new(steps).default_current(current);
                let active = (1..=steps)
                    .filter(|step| *step == state.active_step())
                    .count();
                assert_eq!(active, 1, "steps={steps} current={current}");
            }
        }
    }

    #[test]
    fn test_marker_and_separator_states() {
        // 4 steps on step 3: markers 1..=3 complete, 4 pending; separators
        // 1-2 and 2-3 passed, 3-4 not.
        assert!(is_complete(1, 3));
        assert!(is_complete(2, 3));
        assert!(is_complete(3, 3));
        assert!(!is_complete(4, 3));

        assert!(is_passed(1, 3));
        assert!(is_passed(2, 3));
        assert!(!is_passed(3, 3));
    }

    #[test]
    fn test_overflowed_current_completes_everything() {
        // 4 steps on step 5: everything complete, every separator passed.
        assert!((1..=4).all(|step| is_complete(step, 5)));
        assert!((1..=3).all(|step| is_passed(step, 5)));
    }

    #[test]
    fn test_separator_size_follows_axis() {
        let horizontal = separator_size(Axis::Horizontal);
        assert_eq!(horizontal.width, px(20.));
        assert_eq!(horizontal.height, px(2.));

        let vertical = separator_size(Axis::Vertical);
        assert_eq!(vertical.width, px(2.));
        assert_eq!(vertical.height, px(20.));
    }

    #[test]
    fn test_marker_and_separator_count() {
        let complete = hsl(142., 76., 36.);
        let pending = hsl(240., 3.8, 46.1);

        for steps in 1..=5 {
            let items = render_steps(steps, 1, 1, Axis::Horizontal, complete, pending, 1.);
            assert_eq!(items.len(), steps + steps - 1);
        }
    }
}
