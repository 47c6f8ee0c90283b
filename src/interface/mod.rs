pub mod prompts;
pub mod render;

pub use prompts::{parse_count, prompt_count, prompt_save, prompt_text};
pub use render::{display_distribution, display_preview, render_order};
