pub mod config;
pub mod error;
pub mod markup;
pub mod matcher;
pub mod palette;
pub mod record;
pub mod renderer;

pub use config::Config;
pub use error::RenderError;
pub use record::{Category, PromptRecord, WordSlots};
pub use renderer::{segment_prompt, Presentation, PromptRenderer, RenderedPrompt, Segment};
