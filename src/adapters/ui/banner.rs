//! Startup banner: "WEATHER" in figlet's standard font, shaded top to bottom.

use crossterm::QueueableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{self, Write, stdout};

/// Neon Purple (#bc13fe).
const NEON_PURPLE: (u8, u8, u8) = (0xbc, 0x13, 0xfe);
/// Cyber Green (#0ff0fc).
const CYBER_GREEN: (u8, u8, u8) = (0x0f, 0xf0, 0xfc);

const USAGE_HINT: &str = "Type a city and press Enter. Esc to quit.";

/// Colour at fraction `t` (0.0..=1.0) of the way from `a` to `b`.
fn shade(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> Color {
    let mix = |x: u8, y: u8| (f64::from(x) * (1.0 - t) + f64::from(y) * t).round() as u8;
    Color::Rgb {
        r: mix(a.0, b.0),
        g: mix(a.1, b.1),
        b: mix(a.2, b.2),
    }
}

/// Figlet rendering of "WEATHER"; plain text if the font cannot be loaded.
fn banner_art() -> String {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert("WEATHER").map(|figure| figure.to_string()))
        .unwrap_or_else(|| "WEATHER".to_string())
}

/// Write the banner, version line and usage hint to `out`.
pub fn write_welcome<W: Write>(out: &mut W) -> io::Result<()> {
    let art = banner_art();
    let lines: Vec<&str> = art.lines().collect();
    let last = lines.len().saturating_sub(1).max(1) as f64;

    for (i, line) in lines.iter().enumerate() {
        out.queue(SetForegroundColor(shade(NEON_PURPLE, CYBER_GREEN, i as f64 / last)))?
            .queue(Print(line))?
            .queue(Print("\r\n"))?;
    }
    out.queue(SetForegroundColor(shade(NEON_PURPLE, CYBER_GREEN, 1.0)))?
        .queue(Print(format!("v{}\r\n", env!("CARGO_PKG_VERSION"))))?
        .queue(Print(USAGE_HINT))?
        .queue(Print("\r\n"))?
        .queue(ResetColor)?;
    out.flush()
}

/// Print the banner to stdout. A terminal that rejects the escape codes just gets no banner.
pub fn print_welcome() {
    if let Err(e) = write_welcome(&mut stdout()) {
        tracing::debug!(error = %e, "banner not printed");
    }
}
