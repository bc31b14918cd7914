// TaskList - In-memory task list with pending/completed views

pub mod config;
pub mod confirm;
pub mod filter;
pub mod input;
pub mod render;
pub mod session;
pub mod store;
pub mod task;

// Re-export main types for convenience
pub use config::{ColorMode, Config};
pub use confirm::{AlwaysConfirm, Confirm, NeverConfirm, PromptConfirm};
pub use filter::Filter;
pub use input::SharedInput;
pub use render::Renderer;
pub use session::{Command, Outcome, Session};
pub use store::{Summary, TaskList};
pub use task::{Task, TaskId};
