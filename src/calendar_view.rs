//! Text month grid
//!
//! Renders one month as a Sunday-first grid, marking each day with the
//! highest-precedence label from an [`EventIndex`]. The month being shown is
//! always passed in explicitly as a [`MonthCursor`].

use chrono::{Datelike, NaiveDate};

use crate::cycle::{EventIndex, Label, is_same_day};
use crate::i18n::{Locale, Strings};
use crate::settings::Theme;

const CELL_WIDTH: usize = 4;
const GRID_WIDTH: usize = CELL_WIDTH * 7;

const RESET: &str = "\x1b[0m";
const TODAY_STYLE: &str = "\x1b[1;4m";
const TODAY_MARKER: char = '>';

/// A (year, month) position in the calendar, month is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

impl MonthCursor {
    /// Returns `None` if `month` is not in 1..=12 or the year is outside
    /// chrono's range.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)?;
        Some(Self { year, month })
    }

    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    /// Following month, rolling December over into January.
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self::new(self.year + 1, 1).unwrap_or(self)
        } else {
            Self {
                month: self.month + 1,
                ..self
            }
        }
    }

    /// Preceding month, rolling January back into December.
    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self::new(self.year - 1, 12).unwrap_or(self)
        } else {
            Self {
                month: self.month - 1,
                ..self
            }
        }
    }

    pub fn first_day(self) -> NaiveDate {
        // Checked on construction
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn days_in_month(self) -> u32 {
        let first = self.first_day();
        let next = self.next().first_day();
        if next > first {
            (next - first).num_days() as u32
        } else {
            31
        }
    }

    /// Every day of the month in order.
    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        let first = self.first_day();
        (0..self.days_in_month()).filter_map(move |offset| first.with_day(offset + 1))
    }
}

/// How a grid is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub locale: Locale,
    pub theme: Theme,
    /// Emit ANSI colour sequences
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            theme: Theme::default(),
            color: true,
        }
    }
}

/// Plain-text marker for a label, shown after the day number.
pub fn label_symbol(label: Label) -> char {
    match label {
        Label::Menstruation => '*',
        Label::Ovulation => 'o',
        Label::Fertile => '+',
    }
}

fn label_style(label: Label, theme: Theme) -> &'static str {
    match (theme, label) {
        (Theme::Light, Label::Menstruation) => "\x1b[41;97m",
        (Theme::Light, Label::Ovulation) => "\x1b[45;97m",
        (Theme::Light, Label::Fertile) => "\x1b[42;30m",
        (Theme::Dark, Label::Menstruation) => "\x1b[91m",
        (Theme::Dark, Label::Ovulation) => "\x1b[95m",
        (Theme::Dark, Label::Fertile) => "\x1b[92m",
    }
}

fn label_name(label: Label, strings: &Strings) -> &'static str {
    match label {
        Label::Menstruation => strings.menstruation,
        Label::Ovulation => strings.ovulation,
        Label::Fertile => strings.fertile,
    }
}

fn render_cell(
    date: NaiveDate,
    index: &EventIndex,
    today: NaiveDate,
    options: &RenderOptions,
) -> String {
    let is_today = is_same_day(&date, &today);
    let primary = index.primary_on(date);

    let cell = format!(
        "{}{:>2}{}",
        if is_today { TODAY_MARKER } else { ' ' },
        date.day(),
        primary.map(label_symbol).unwrap_or(' '),
    );

    if !options.color || (primary.is_none() && !is_today) {
        return cell;
    }

    let mut styled = String::new();
    if let Some(label) = primary {
        styled.push_str(label_style(label, options.theme));
    }
    if is_today {
        styled.push_str(TODAY_STYLE);
    }
    styled.push_str(&cell);
    styled.push_str(RESET);
    styled
}

/// Render one month: centered header, weekday row and up to six week rows.
pub fn render_month(
    cursor: MonthCursor,
    index: &EventIndex,
    today: NaiveDate,
    options: &RenderOptions,
) -> String {
    let strings = options.locale.strings();
    let mut out = String::new();

    let header = strings.month_label(cursor.year(), cursor.month());
    let padding = GRID_WIDTH.saturating_sub(header.chars().count()) / 2;
    out.push_str(&" ".repeat(padding));
    out.push_str(&header);
    out.push('\n');

    let weekdays: Vec<String> = strings
        .weekdays
        .iter()
        .map(|w| format!("{:>3} ", w))
        .collect();
    out.push_str(weekdays.concat().trim_end());
    out.push('\n');

    let leading = cursor.first_day().weekday().num_days_from_sunday() as usize;
    let mut row: Vec<String> = vec![" ".repeat(CELL_WIDTH); leading];

    for date in cursor.days() {
        row.push(render_cell(date, index, today, options));
        if row.len() == 7 {
            out.push_str(row.concat().trim_end());
            out.push('\n');
            row.clear();
        }
    }
    if !row.is_empty() {
        out.push_str(row.concat().trim_end());
        out.push('\n');
    }

    out
}

/// Render `count` consecutive months starting at `start`, separated by a
/// blank line.
pub fn render_months(
    start: MonthCursor,
    count: usize,
    index: &EventIndex,
    today: NaiveDate,
    options: &RenderOptions,
) -> String {
    let mut months = Vec::with_capacity(count);
    let mut cursor = start;
    for _ in 0..count {
        months.push(render_month(cursor, index, today, options));
        cursor = cursor.next();
    }
    months.join("\n")
}

/// One-line legend in the locale's language.
pub fn render_legend(options: &RenderOptions) -> String {
    let strings = options.locale.strings();
    let mut parts: Vec<String> = [Label::Menstruation, Label::Fertile, Label::Ovulation]
        .into_iter()
        .map(|label| {
            let symbol = label_symbol(label);
            if options.color {
                format!(
                    "{}{}{} {}",
                    label_style(label, options.theme),
                    symbol,
                    RESET,
                    label_name(label, strings)
                )
            } else {
                format!("{} {}", symbol, label_name(label, strings))
            }
        })
        .collect();
    parts.push(format!("{} {}", TODAY_MARKER, strings.today));
    parts.join("   ")
}
