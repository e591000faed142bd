//! # Core Application Logic
//!
//! The chat controller. It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (chat data)    │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • perform() (I/O)      │
//!                    └───────────┬─────────────┘
//!                                │
//!                 ┌──────────────┴──────────────┐
//!                 ▼                             ▼
//!          ┌────────────┐                ┌────────────┐
//!          │    TUI     │                │    API     │
//!          │  Adapter   │                │  Backend   │
//!          │ (ratatui)  │                │ (reqwest)  │
//!          └────────────┘                └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all chat state in one place
//! - [`message`]: The message log and its id ordering
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`effects`]: `perform()`, which runs an `Effect` against a `Backend`
//! - [`config`]: Layered configuration

pub mod action;
pub mod config;
pub mod effects;
pub mod message;
pub mod state;
