use gpui::Application;
use steps_progress_story::{StepsProgressStory, create_new_window, init};

fn main() {
    let app = Application::new();

    app.run(move |cx| {
        init(cx);
        cx.activate(true);

        create_new_window(
            "Steps Progress",
            |window, cx| StepsProgressStory::view(window, cx),
            cx,
        );
    });
}
