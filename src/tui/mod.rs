//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into `core::action::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! The loop runs on the main thread. Effects returned by `update()` are
//! spawned as tokio tasks that call `effects::perform` and send the
//! resulting action back over a channel, which the loop drains every
//! iteration.
//!
//! - **Animating** (landing caret, loading placeholder): draws every ~80ms.
//! - **Idle**: sleeps up to 500ms and only redraws on events or new actions.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::api::{Backend, HttpBackend};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::effects::perform;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, MessageListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core chat logic)
pub struct TuiState {
    pub message_list: MessageListState,
    pub input_box: InputBox,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            message_list: MessageListState::new(),
            input_box: InputBox::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol lets us tell Shift+Enter from Enter;
        // terminals that don't support it ignore the request
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let backend: Arc<dyn Backend> = Arc::new(
        HttpBackend::new(&config.base_url, config.request_timeout).map_err(std::io::Error::other)?,
    );
    let mut app = App::new(config.base_url.clone(), &config.greeting);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let result = match TerminalModeGuard::new() {
        Ok(_guard) => event_loop(&mut terminal, &mut app, &mut tui, backend),
        Err(e) => {
            warn!("Failed to enable terminal modes: {}", e);
            event_loop(&mut terminal, &mut app, &mut tui, backend)
        }
    };
    ratatui::restore();

    info!("Xolak shutting down ({} messages in log)", app.messages.len());
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    backend: Arc<dyn Backend>,
) -> std::io::Result<()> {
    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    if dispatch(app, Action::Mount, &backend, &tx) {
        return Ok(());
    }

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = app.is_loading() || !app.has_user_messages();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 8.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, app, tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };

        // Process first event + drain everything pending before the next draw
        let mut pending = Vec::new();
        if let Some(first) = poll_event_timeout(timeout)? {
            pending.push(first);
            while let Some(next) = poll_event_immediate()? {
                pending.push(next);
            }
        }
        if !pending.is_empty() {
            needs_redraw = true;
        }

        for event in pending {
            if handle_event(app, tui, event, &backend, &tx) {
                return Ok(());
            }
        }

        // Results from spawned effects
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if dispatch(app, action, &backend, &tx) {
                return Ok(());
            }
        }
    }
}

/// Routes one terminal event. Returns true when the app should quit.
fn handle_event(
    app: &mut App,
    tui: &mut TuiState,
    event: TuiEvent,
    backend: &Arc<dyn Backend>,
    tx: &mpsc::Sender<Action>,
) -> bool {
    match event {
        TuiEvent::Resize => false,
        TuiEvent::Quit => dispatch(app, Action::Quit, backend, tx),
        TuiEvent::RecheckHealth => dispatch(app, Action::RecheckHealth, backend, tx),
        TuiEvent::ScrollUp | TuiEvent::ScrollDown | TuiEvent::ScrollPageUp | TuiEvent::ScrollPageDown => {
            tui.message_list.handle_event(&event);
            false
        }
        _ => match tui.input_box.handle_event(&event) {
            Some(InputEvent::Submit(text)) => {
                let effect = update(app, Action::Submit(text));
                if matches!(effect, Effect::Query(_)) {
                    tui.input_box.clear();
                    tui.message_list.stick_to_bottom = true;
                }
                run_effect(effect, backend, tx)
            }
            Some(InputEvent::ContentChanged) | None => false,
        },
    }
}

/// Applies an action and starts whatever effect it produces.
/// Returns true when the app should quit.
fn dispatch(
    app: &mut App,
    action: Action,
    backend: &Arc<dyn Backend>,
    tx: &mpsc::Sender<Action>,
) -> bool {
    let effect = update(app, action);
    run_effect(effect, backend, tx)
}

fn run_effect(effect: Effect, backend: &Arc<dyn Backend>, tx: &mpsc::Sender<Action>) -> bool {
    match effect {
        Effect::Quit => true,
        Effect::None => false,
        effect => {
            spawn_effect(effect, backend.clone(), tx.clone());
            false
        }
    }
}

fn spawn_effect(effect: Effect, backend: Arc<dyn Backend>, tx: mpsc::Sender<Action>) {
    info!("Spawning effect: {:?}", effect);
    tokio::spawn(async move {
        if let Some(action) = perform(backend.as_ref(), effect).await
            && tx.send(action).is_err()
        {
            warn!("Failed to deliver effect result: receiver dropped");
        }
    });
}
