pub mod admin;
pub mod app;
pub mod archive;
pub mod event;
pub mod form;
pub mod mode;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use app::App;
pub use event::{AppEvent, InputKey, WordFilterField};
pub use mode::{AppMode, View};
