//! Formatting helpers for the text output
//!
//! Summary line, footer note, settings listing and the flat event listing.
//! None of these touch storage; they format what the controller hands them.

use chrono::NaiveDate;

use crate::cycle::{EventIndex, to_iso};
use crate::i18n::Strings;
use crate::settings::CycleSettings;

/// Summary line for the current settings
///
/// # Arguments
/// * `settings` - Loaded settings, `None` when nothing is configured
/// * `strings` - Locale table to take the labels from
///
/// # Returns
/// The echoed inputs, or the localized "please set" message
pub fn format_summary(settings: Option<&CycleSettings>, strings: &Strings) -> String {
    let Some(settings) = settings else {
        return strings.please_set.to_string();
    };

    format!(
        "{}: {} | {}: {} | {}: {}",
        strings.last_period,
        echo_date(settings),
        strings.cycle_length,
        settings.cycle_length,
        strings.period_length,
        settings.period_length
    )
}

/// Footer note such as "Prediction based on: 2025-01-01 | 28 days (cycle)"
///
/// Empty when nothing is configured.
pub fn format_footer(settings: Option<&CycleSettings>, strings: &Strings) -> String {
    match settings {
        Some(settings) => strings.prediction_based(&echo_date(settings), settings.cycle_length),
        None => String::new(),
    }
}

/// Settings block headed by the configuration title, one field per line
pub fn format_settings(settings: Option<&CycleSettings>, strings: &Strings) -> String {
    let mut result = format!("{}\n", strings.config_title);
    match settings {
        Some(settings) => {
            result.push_str(&format!("  {}: {}\n", strings.last_period, echo_date(settings)));
            result.push_str(&format!("  {}: {}\n", strings.cycle_length, settings.cycle_length));
            result.push_str(&format!("  {}: {}\n", strings.period_length, settings.period_length));
        }
        None => {
            result.push_str(&format!("  {}\n", strings.please_set));
        }
    }
    result
}

/// List labeled days between `from` and `to`, one per line
///
/// # Arguments
/// * `index` - The event index to read from
/// * `from` - First day to include
/// * `to` - Last day to include
/// * `strings` - Locale table for the empty-listing message
///
/// # Returns
/// Lines of the form `YYYY-MM-DD  menstruation, fertile`
pub fn format_events(
    index: &EventIndex,
    from: NaiveDate,
    to: NaiveDate,
    strings: &Strings,
) -> String {
    if from > to {
        return strings.no_events.to_string();
    }

    let lines: Vec<String> = index
        .range(from..=to)
        .map(|(day, labels)| format!("{}  {}", to_iso(day), labels))
        .collect();

    if lines.is_empty() {
        return strings.no_events.to_string();
    }
    lines.join("\n")
}

// Stored dates are normalised to zero-padded ISO when they parse
fn echo_date(settings: &CycleSettings) -> String {
    settings
        .last_period_date()
        .map(to_iso)
        .unwrap_or_else(|_| settings.last_period.clone())
}
