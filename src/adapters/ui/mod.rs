pub mod banner;
pub mod card;
pub mod memory;
pub mod progress;
pub mod tui;

pub use card::TerminalCard;
pub use memory::{MemorySurface, SurfaceWrite};
pub use tui::TuiInputPort;

/// Prints the welcome banner and applies the neon theme for all subsequent inquire prompts.
/// Call once at startup (e.g. in main after tracing init).
pub fn init_ui() {
    banner::print_welcome();
    tui::apply_theme();
}
