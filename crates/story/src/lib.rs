//! Demo stories for the steps progress component.

mod steps_progress_story;

use gpui::{
    AnyElement, AnyView, App, Bounds, Context, Div, IntoElement, ParentElement, Render, RenderOnce,
    SharedString, StyleRefinement, Styled, Window, WindowBounds, WindowKind, WindowOptions, div,
    px, rems, size,
};
use gpui_steps_progress::{ActiveTheme, h_flex, v_flex};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

pub use steps_progress_story::StepsProgressStory;

/// Initialize logging and the component library.
pub fn init(cx: &mut App) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    gpui_steps_progress::init(cx);
    tracing::info!("steps progress story starting");
}

/// Root view wrapping a story with the themed page chrome.
pub struct StoryRoot {
    title: SharedString,
    view: AnyView,
}

impl StoryRoot {
    pub fn new(title: impl Into<SharedString>, view: impl Into<AnyView>) -> Self {
        Self {
            title: title.into(),
            view: view.into(),
        }
    }
}

impl Render for StoryRoot {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .size_full()
            .font_family(cx.theme().font_family.clone())
            .text_size(cx.theme().font_size)
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .child(
                h_flex()
                    .px_4()
                    .h_10()
                    .flex_shrink_0()
                    .border_b_1()
                    .border_color(cx.theme().border)
                    .text_sm()
                    .child(self.title.clone()),
            )
            .child(
                div()
                    .flex_1()
                    .overflow_hidden()
                    .p_4()
                    .child(self.view.clone()),
            )
    }
}

/// Open a centered window showing the view built by `view_fn`.
pub fn create_new_window<F, E>(title: &str, view_fn: F, cx: &mut App)
where
    E: Into<AnyView>,
    F: FnOnce(&mut Window, &mut App) -> E + Send + 'static,
{
    let mut window_size = size(px(960.), px(720.));
    if let Some(display) = cx.primary_display() {
        let display_size = display.bounds().size;
        window_size.width = window_size.width.min(display_size.width * 0.85);
        window_size.height = window_size.height.min(display_size.height * 0.85);
    }

    let window_bounds = Bounds::centered(None, window_size, cx);
    let title = SharedString::from(title.to_string());

    cx.spawn(async move |cx| {
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(window_bounds)),
            window_min_size: Some(size(px(480.), px(360.))),
            kind: WindowKind::Normal,
            ..Default::default()
        };

        let window = cx.open_window(options, |window, cx| {
            let view = view_fn(window, cx).into();
            cx.new(|_| StoryRoot::new(title.clone(), view))
        })?;

        window.update(cx, |_, window, _| {
            window.activate_window();
            window.set_window_title(&title);
        })?;

        Ok::<_, anyhow::Error>(())
    })
    .detach();
}

/// A titled, bordered section wrapping one example.
#[derive(IntoElement)]
pub struct StorySection {
    title: SharedString,
    base: Div,
    children: Vec<AnyElement>,
}

/// Create a new story section.
pub(crate) fn section(title: impl Into<SharedString>) -> StorySection {
    StorySection {
        title: title.into(),
        base: h_flex()
            .flex_wrap()
            .justify_center()
            .items_center()
            .w_full()
            .gap_4(),
        children: vec![],
    }
}

impl StorySection {
    /// Constrain the section content width.
    pub fn max_w_md(mut self) -> Self {
        self.base = self.base.max_w(rems(28.));
        self
    }
}

impl ParentElement for StorySection {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl Styled for StorySection {
    fn style(&mut self) -> &mut StyleRefinement {
        self.base.style()
    }
}

impl RenderOnce for StorySection {
    fn render(self, _: &mut Window, cx: &mut App) -> impl IntoElement {
        v_flex()
            .gap_2()
            .mb_5()
            .w_full()
            .child(
                h_flex()
                    .justify_between()
                    .w_full()
                    .gap_4()
                    .text_sm()
                    .text_color(cx.theme().muted_foreground)
                    .child(self.title),
            )
            .child(
                v_flex()
                    .p_4()
                    .overflow_x_hidden()
                    .border_1()
                    .border_color(cx.theme().border)
                    .rounded_lg()
                    .items_center()
                    .justify_center()
                    .child(self.base.children(self.children)),
            )
    }
}
