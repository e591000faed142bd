//! # TUI Components
//!
//! ## Stateless (props only, rebuilt every frame)
//! - `TitleBar`: connectivity, agent id and status text
//! - `LandingPage`: header shown before the first query
//! - `Message`: one chat message, with its card grid
//! - `RepoCard` / `CardGrid`: repository recommendations
//!
//! ## Stateful (persist in `TuiState`, handle events)
//! - `InputBox`: multi-line query editor
//! - `MessageList`: scrollable conversation (state in `MessageListState`)
//!
//! Components receive their data as props rather than reading `App`
//! directly, so each can be rendered against a `TestBackend` in isolation.

pub mod input_box;
pub mod landing;
pub mod message;
pub mod message_list;
pub mod repo_card;
pub mod title_bar;

pub use input_box::{InputBox, InputEvent};
pub use landing::LandingPage;
pub use message_list::{MessageList, MessageListState};
pub use title_bar::TitleBar;
