//! Terminal weather card. Implements PresentationPort.
//!
//! Writes only update state; `draw_to` prints pending alerts and, if anything
//! changed since the last draw, the boxed card. This keeps output from
//! interleaving with the spinner while a search is in flight.

use crate::ports::{LIST_ITEM_COUNT, PresentationPort};
use crossterm::QueueableCommand;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use parking_lot::Mutex;
use std::io::{self, Write};

const TITLE_COLOR: Color = Color::Rgb {
    r: 0x0f,
    g: 0xf0,
    b: 0xfc,
};
const ALERT_COLOR: Color = Color::Rgb {
    r: 0xff,
    g: 0xb3,
    b: 0x00,
};
const BORDER_COLOR: Color = Color::Rgb {
    r: 0xbc,
    g: 0x13,
    b: 0xfe,
};

#[derive(Debug)]
struct CardState {
    title: String,
    temperature: String,
    rows: [String; LIST_ITEM_COUNT],
    pending_alerts: Vec<String>,
    dirty: bool,
}

impl Default for CardState {
    fn default() -> Self {
        Self {
            title: "Weather".to_string(),
            temperature: "Temperature: --".to_string(),
            rows: [
                "Humidity: --".to_string(),
                "Wind Speed: --".to_string(),
                "Condition: --".to_string(),
            ],
            pending_alerts: Vec::new(),
            dirty: false,
        }
    }
}

#[derive(Debug, Default)]
pub struct TerminalCard {
    state: Mutex<CardState>,
}

impl TerminalCard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current card text: title, temperature, then the list rows.
    pub fn lines(&self) -> Vec<String> {
        let state = self.state.lock();
        let mut lines = vec![state.title.clone(), state.temperature.clone()];
        lines.extend(state.rows.iter().cloned());
        lines
    }

    /// Print pending alerts, then the card if it changed since the last draw.
    pub fn draw_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let (alerts, card) = {
            let mut state = self.state.lock();
            let alerts = std::mem::take(&mut state.pending_alerts);
            let card = if state.dirty {
                state.dirty = false;
                let mut body = vec![state.temperature.clone()];
                body.extend(state.rows.iter().cloned());
                Some((state.title.clone(), body))
            } else {
                None
            };
            (alerts, card)
        };

        for alert in &alerts {
            out.queue(SetForegroundColor(ALERT_COLOR))?
                .queue(Print(format!("! {}\n", alert)))?
                .queue(ResetColor)?;
        }

        if let Some((title, body)) = card {
            draw_box(out, &title, &body)?;
        }

        out.flush()
    }
}

fn draw_box<W: Write>(out: &mut W, title: &str, body: &[String]) -> io::Result<()> {
    let width = body
        .iter()
        .map(|l| l.chars().count())
        .chain(std::iter::once(title.chars().count()))
        .max()
        .unwrap_or(0);
    let rule = "─".repeat(width + 2);
    let pad = |text: &str| " ".repeat(width - text.chars().count());

    border(out, &format!("┌{}┐\n", rule))?;
    border(out, "│ ")?;
    out.queue(SetForegroundColor(TITLE_COLOR))?
        .queue(SetAttribute(Attribute::Bold))?
        .queue(Print(title))?
        .queue(SetAttribute(Attribute::Reset))?
        .queue(ResetColor)?
        .queue(Print(pad(title)))?;
    border(out, " │\n")?;
    border(out, &format!("├{}┤\n", rule))?;
    for line in body {
        border(out, "│ ")?;
        out.queue(Print(line))?.queue(Print(pad(line)))?;
        border(out, " │\n")?;
    }
    border(out, &format!("└{}┘\n", rule))?;
    Ok(())
}

fn border<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    out.queue(SetForegroundColor(BORDER_COLOR))?
        .queue(Print(text))?
        .queue(ResetColor)?;
    Ok(())
}

impl PresentationPort for TerminalCard {
    fn set_title(&self, text: &str) {
        let mut state = self.state.lock();
        state.title = text.to_string();
        state.dirty = true;
    }

    fn set_temperature(&self, text: &str) {
        let mut state = self.state.lock();
        state.temperature = text.to_string();
        state.dirty = true;
    }

    fn set_list_item(&self, index: usize, text: &str) {
        let mut state = self.state.lock();
        if let Some(row) = state.rows.get_mut(index) {
            *row = text.to_string();
            state.dirty = true;
        } else {
            tracing::warn!(index, "list row out of range, ignored");
        }
    }

    fn alert(&self, message: &str) {
        self.state.lock().pending_alerts.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(card: &TerminalCard) -> String {
        let mut buf = Vec::new();
        card.draw_to(&mut buf).unwrap();
        String::from_utf8_lossy(&buf).into_owned()
    }

    #[test]
    fn test_untouched_card_draws_nothing() {
        let card = TerminalCard::new();
        assert!(draw(&card).is_empty());
        assert_eq!(card.lines()[0], "Weather");
        assert_eq!(card.lines().len(), 2 + LIST_ITEM_COUNT);
    }

    #[test]
    fn test_card_draws_once_after_update() {
        let card = TerminalCard::new();
        card.set_title("Weather in Paris");
        card.set_temperature("Temperature: 15°C");
        card.set_list_item(0, "Humidity: 70%");
        card.set_list_item(1, "Wind Speed: 4.2 m/s");
        card.set_list_item(2, "Condition: Overcast");

        let first = draw(&card);
        for expected in [
            "Weather in Paris",
            "Temperature: 15°C",
            "Humidity: 70%",
            "Wind Speed: 4.2 m/s",
            "Condition: Overcast",
            "┌",
            "└",
        ] {
            assert!(first.contains(expected), "missing {expected:?}");
        }
        assert!(draw(&card).is_empty());
    }

    #[test]
    fn test_alert_is_printed_once_and_card_untouched() {
        let card = TerminalCard::new();
        card.alert("City not found. Please try again.");

        let out = draw(&card);
        assert!(out.contains("City not found. Please try again."));
        assert!(!out.contains("┌"));
        assert!(draw(&card).is_empty());
    }

    #[test]
    fn test_out_of_range_row_is_ignored() {
        let card = TerminalCard::new();
        card.set_list_item(LIST_ITEM_COUNT, "nope");
        assert!(draw(&card).is_empty());
        assert!(!card.lines().iter().any(|l| l == "nope"));
    }
}
