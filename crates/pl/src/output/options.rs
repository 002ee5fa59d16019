//! Filter choice output formatting.

use owo_colors::OwoColorize;
use portfolio_view::filter::{FilterChoice, FilterOptions};

/// Formats the selector choices as JSON.
pub fn format_options_json(options: &FilterOptions) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(options)
}

/// Formats the selector choices as three titled lists.
pub fn format_options_table(options: &FilterOptions, use_colors: bool) -> String {
    let sections: [(&str, &str, &[FilterChoice]); 3] = [
        ("Status", "--status", &options.statuses),
        ("Department", "--department", &options.departments),
        ("Lead", "--lead", &options.personnel),
    ];

    let mut output = String::new();

    for (index, (title, flag, choices)) in sections.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }

        let heading = format!("{title} ({flag})");
        if use_colors {
            output.push_str(&format!("{}\n", heading.bold()));
        } else {
            output.push_str(&heading);
            output.push('\n');
        }

        let width = choices.iter().map(|c| c.value.chars().count()).max().unwrap_or(0);
        for choice in choices.iter() {
            let line = if choice.value == choice.label {
                format!("  {}", choice.value)
            } else {
                let label = if use_colors {
                    choice.label.dimmed().to_string()
                } else {
                    choice.label.clone()
                };
                format!("  {:<width$}  {label}", choice.value)
            };
            let line = if choice.is_all() {
                format!("{line} (default)")
            } else {
                line
            };
            output.push_str(&line);
            output.push('\n');
        }
    }

    output
}
