//! Cycle Calendar Library
//!
//! Predicts menstruation, fertile window and ovulation days from one known
//! period start date plus average cycle and period lengths, and renders the
//! predictions on a text month calendar.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Core**: `cycle` module - pure date math, cycle projection and the
//!   date → labels index
//! - **Presentation**: `calendar_view`, `formatting` and `i18n` - month grids,
//!   summaries and the locale table
//! - **Persistence**: `storage` module - file-based TOML storage
//!
//! `CycleCalendar` ties the layers together and owns all mutable state: the
//! loaded settings, the month being displayed and the cached index.
//!
//! # Example
//!
//! ```no_run
//! use cycle_calendar::{CycleCalendar, CycleSettings};
//! use chrono::NaiveDate;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let today = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
//!     let mut calendar = CycleCalendar::open("cycle-calendar.toml", today)?;
//!     calendar.save_settings(CycleSettings::new(today, 28, 5))?;
//!     println!("{}", calendar.render_month(false));
//!     Ok(())
//! }
//! ```

pub mod calendar_view;
pub mod cycle;
pub mod formatting;
pub mod i18n;
pub mod settings;
mod storage;

use anyhow::{Result, bail};
use chrono::NaiveDate;
use tracing::{info, warn};

pub use calendar_view::{MonthCursor, RenderOptions};
pub use cycle::{
    CycleInputs, CycleProjection, EventIndex, Label, LabelSet, ParseError, from_iso, project,
    to_iso,
};
pub use i18n::Locale;
pub use settings::{CycleSettings, MAX_LENGTH_DAYS, Preferences, Theme};
pub use storage::{Storage, StoredState};

/// Controller for the calendar
///
/// Owns the storage handle, the current settings and preferences, the month
/// being displayed and the event index built from the settings. The index is
/// rebuilt from scratch whenever the settings change.
pub struct CycleCalendar {
    storage: Storage,
    settings: Option<CycleSettings>,
    preferences: Preferences,
    today: NaiveDate,
    cursor: MonthCursor,
    horizon_days: u32,
    index: EventIndex,
}

impl CycleCalendar {
    /// Open a calendar backed by a settings file
    ///
    /// # Arguments
    /// * `storage_path` - Path to the settings file (TOML format)
    /// * `today` - The day treated as "today" for projection and display
    ///
    /// # Returns
    /// Result containing the calendar, positioned on the current month
    pub fn open(storage_path: impl AsRef<std::path::Path>, today: NaiveDate) -> Result<Self> {
        let storage = Storage::new(storage_path);
        let state = storage.load()?;
        let mut calendar = Self {
            storage,
            settings: state.settings,
            preferences: state.preferences,
            today,
            cursor: MonthCursor::containing(today),
            horizon_days: cycle::horizon_days(cycle::DEFAULT_MONTHS_RANGE),
            index: EventIndex::new(),
        };
        calendar.refresh();
        Ok(calendar)
    }

    /// Change the projection window to `months_range` months each side of
    /// today, at most [`cycle::MAX_MONTHS_RANGE`]
    pub fn with_horizon_months(mut self, months_range: u32) -> Self {
        self.horizon_days = cycle::horizon_days(months_range);
        self.refresh();
        self
    }

    fn refresh(&mut self) {
        let Some(settings) = &self.settings else {
            self.index = EventIndex::new();
            return;
        };

        self.index = match settings.to_inputs() {
            Ok(inputs) => {
                let projections = project(&inputs, self.horizon_days, self.today);
                EventIndex::build(&projections)
            }
            Err(e) => {
                warn!(error = %e, "settings are unusable, showing no predictions");
                EventIndex::new()
            }
        };
        info!(
            labeled_days = self.index.len(),
            horizon_days = self.horizon_days,
            "event index rebuilt"
        );
    }

    fn persist(&self) -> Result<()> {
        self.storage.save(&StoredState {
            settings: self.settings.clone(),
            preferences: self.preferences,
        })
    }

    /// Validate, store and apply new settings
    ///
    /// Both lengths must be between one day and a year and the date must
    /// parse.
    pub fn save_settings(&mut self, settings: CycleSettings) -> Result<()> {
        if let Err(e) = settings.last_period_date() {
            bail!("{}", e);
        }
        if !(1..=MAX_LENGTH_DAYS).contains(&settings.cycle_length) {
            bail!(
                "Cycle length must be between 1 and {} days (got {})",
                MAX_LENGTH_DAYS,
                settings.cycle_length
            );
        }
        if !(1..=MAX_LENGTH_DAYS).contains(&settings.period_length) {
            bail!(
                "Period length must be between 1 and {} days (got {})",
                MAX_LENGTH_DAYS,
                settings.period_length
            );
        }
        if settings.period_length >= settings.cycle_length {
            warn!(
                cycle_length = settings.cycle_length,
                period_length = settings.period_length,
                "period length is not shorter than the cycle, predictions will overlap"
            );
        }

        self.settings = Some(settings);
        self.persist()?;
        self.refresh();
        Ok(())
    }

    /// Forget the cycle settings; preferences are kept
    pub fn reset(&mut self) -> Result<()> {
        self.settings = None;
        self.persist()?;
        self.refresh();
        Ok(())
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.preferences.theme = theme;
        self.persist()
    }

    pub fn set_language(&mut self, lang: Locale) -> Result<()> {
        self.preferences.lang = lang;
        self.persist()
    }

    pub fn next_month(&mut self) {
        self.cursor = self.cursor.next();
    }

    pub fn previous_month(&mut self) {
        self.cursor = self.cursor.previous();
    }

    pub fn go_to_today(&mut self) {
        self.cursor = MonthCursor::containing(self.today);
    }

    pub fn go_to(&mut self, cursor: MonthCursor) {
        self.cursor = cursor;
    }

    pub fn settings(&self) -> Option<&CycleSettings> {
        self.settings.as_ref()
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn horizon_days(&self) -> u32 {
        self.horizon_days
    }

    pub fn index(&self) -> &EventIndex {
        &self.index
    }

    pub fn render_options(&self, color: bool) -> RenderOptions {
        RenderOptions {
            locale: self.preferences.lang,
            theme: self.preferences.theme,
            color,
        }
    }

    /// Grid for the month under the cursor
    pub fn render_month(&self, color: bool) -> String {
        calendar_view::render_month(
            self.cursor,
            &self.index,
            self.today,
            &self.render_options(color),
        )
    }

    /// `count` grids starting at the cursor; the cursor itself does not move
    pub fn render_months(&self, count: usize, color: bool) -> String {
        calendar_view::render_months(
            self.cursor,
            count,
            &self.index,
            self.today,
            &self.render_options(color),
        )
    }

    pub fn legend(&self, color: bool) -> String {
        calendar_view::render_legend(&self.render_options(color))
    }

    /// Title and tagline for the current locale
    pub fn banner(&self) -> String {
        let strings = self.preferences.lang.strings();
        format!("{}\n{}", strings.app_title, strings.tagline)
    }

    pub fn summary(&self) -> String {
        formatting::format_summary(self.settings(), self.preferences.lang.strings())
    }

    pub fn footer_note(&self) -> String {
        formatting::format_footer(self.settings(), self.preferences.lang.strings())
    }

    pub fn settings_block(&self) -> String {
        formatting::format_settings(self.settings(), self.preferences.lang.strings())
    }

    /// Labeled days between `from` and `to`, both inclusive
    pub fn events(&self, from: NaiveDate, to: NaiveDate) -> String {
        formatting::format_events(&self.index, from, to, self.preferences.lang.strings())
    }
}
