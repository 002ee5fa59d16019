//! Common helper functions for output formatting.

use owo_colors::OwoColorize;
use portfolio_model::models::ProjectStatus;

/// Truncates a string to at most `max_len` characters, ending in "..." when cut.
///
/// Counts characters, not bytes, so multi-byte names are never split.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}

/// Pads `s` with spaces on the right to `width` characters.
///
/// Applied before colorizing; ANSI escapes would otherwise count toward the width.
pub fn pad(s: &str, width: usize) -> String {
    format!("{s:<width$}")
}

/// Formats a status for display, padded to `width`.
pub fn format_status(status: ProjectStatus, width: usize, use_colors: bool) -> String {
    let label = pad(status.as_str(), width);

    if !use_colors {
        return label;
    }

    match status {
        ProjectStatus::Planning => label.blue().to_string(),
        ProjectStatus::Active => label.green().to_string(),
        ProjectStatus::OnHold => label.yellow().to_string(),
        ProjectStatus::Done => label.dimmed().to_string(),
        ProjectStatus::Cancelled => label.red().to_string(),
    }
}

/// Parses a `#rrggbb` (or `rrggbb`) color token.
///
/// Returns `None` for anything else; department colors are opaque tokens and
/// need not be hex at all.
pub fn parse_hex_color(token: &str) -> Option<(u8, u8, u8)> {
    let hex = token.strip_prefix('#').unwrap_or(token);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Paints already-padded `text` in the department's color when it is a hex token.
pub fn paint_department(text: &str, color: Option<&str>, use_colors: bool) -> String {
    if !use_colors {
        return text.to_string();
    }

    match color.and_then(parse_hex_color) {
        Some((r, g, b)) => text.truecolor(r, g, b).to_string(),
        None => text.to_string(),
    }
}
