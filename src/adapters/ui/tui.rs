//! Implements InputPort. Inquire-based interactive prompt.
//!
//! The text prompt is the city input; Enter is the search action. Each
//! submitted line runs one full search cycle before the prompt returns.

use crate::adapters::ui::card::TerminalCard;
use crate::adapters::ui::progress::spinner;
use crate::domain::DomainError;
use crate::ports::InputPort;
use crate::usecases::SearchService;
use async_trait::async_trait;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::{InquireError, Text};
use std::io::stdout;
use std::sync::Arc;
use tracing::debug;

/// Neon prompt theme applied to every inquire prompt.
pub fn apply_theme() {
    let mut config = RenderConfig::default_colored();
    config.prompt_prefix = Styled::new("›").with_fg(Color::LightMagenta);
    config.answered_prompt_prefix = Styled::new("✓").with_fg(Color::LightCyan);
    inquire::set_global_render_config(config);
}

/// Spinner text for a submitted line. Blank input makes no request, so it gets no spinner.
fn spinner_message(input: &str) -> Option<String> {
    let place = input.trim();
    (!place.is_empty()).then(|| format!("Looking up weather for {}...", place))
}

/// TUI adapter. One text prompt plus the terminal card.
pub struct TuiInputPort {
    search: Arc<SearchService>,
    card: Arc<TerminalCard>,
}

impl TuiInputPort {
    pub fn new(search: Arc<SearchService>, card: Arc<TerminalCard>) -> Self {
        Self { search, card }
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let input = match Text::new("City:")
                .with_help_message("Enter to search, Esc to quit")
                .prompt()
            {
                Ok(input) => input,
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                    debug!("prompt closed by user");
                    return Ok(());
                }
                Err(e) => return Err(DomainError::Ui(e.to_string())),
            };

            let pb = spinner_message(&input).map(spinner);
            let outcome = self.search.search(&input).await;
            if let Some(pb) = pb {
                pb.finish_and_clear();
            }
            debug!(?outcome, "search returned to prompt");

            self.card
                .draw_to(&mut stdout())
                .map_err(|e| DomainError::Ui(e.to_string()))?;
        }
    }
}
