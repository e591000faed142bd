use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{LandingPage, MessageList, TitleBar};

/// Draws one frame: title bar, (landing header +) conversation, input box.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    let input_height = tui.input_box.calculate_height(frame.area().width);
    let [title_area, main_area, input_area] =
        Layout::vertical([Length(1), Min(0), Length(input_height)]).areas(frame.area());

    let chat_area = if app.has_user_messages() {
        main_area
    } else {
        let [landing_area, chat_area] =
            Layout::vertical([Length(LandingPage::HEIGHT), Min(0)]).areas(main_area);
        LandingPage::new(spinner_frame).render(frame, landing_area);
        chat_area
    };

    MessageList::new(&mut tui.message_list, &app.messages, spinner_frame).render(frame, chat_area);

    TitleBar {
        connectivity: app.connectivity,
        backend_url: &app.backend_url,
        agent_id: app.agent_id.as_deref(),
        status_message: &app.status_message,
        has_unseen_content: tui.message_list.has_unseen_content(),
    }
    .render(frame, title_area);

    tui.input_box.busy = app.is_loading();
    tui.input_box.render(frame, input_area);
}
