//! Cycle projection
//!
//! Given one known cycle start and the average cycle length, walks backward
//! and forward in whole cycles to cover a window around "today", then derives
//! the menstruation, ovulation and fertile ranges for every projected cycle.
//!
//! Heuristic:
//! - ovulation = cycle start + (cycle length - 14)
//! - fertile window = ovulation - 5 ..= ovulation + 1

use super::date_math::{add_days, try_add_days};
use chrono::NaiveDate;
use tracing::debug;

/// Days between ovulation and the next cycle start.
pub const LUTEAL_PHASE_DAYS: i64 = 14;

/// Fertile window starts this many days before ovulation.
pub const FERTILE_DAYS_BEFORE_OVULATION: i64 = 5;

/// Fertile window ends this many days after ovulation.
pub const FERTILE_DAYS_AFTER_OVULATION: i64 = 1;

/// Default projection window, in months each direction from today.
pub const DEFAULT_MONTHS_RANGE: u32 = 6;

/// Largest projection window in months; larger requests are clamped.
pub const MAX_MONTHS_RANGE: u32 = 24;

/// Largest horizon in days, `MAX_MONTHS_RANGE` thirty-day months.
pub const MAX_HORIZON_DAYS: u32 = MAX_MONTHS_RANGE * 30;

/// Days kept past each side of the window when derived ranges are clipped.
pub const RANGE_SPILL_DAYS: i64 = 366;

/// Convert a range in months to the horizon in days (30 days per month).
pub fn horizon_days(months_range: u32) -> u32 {
    months_range.min(MAX_MONTHS_RANGE) * 30
}

/// `today ± horizon_days`, the range cycle starts are projected over.
pub fn projection_window(today: NaiveDate, horizon_days: u32) -> DateRange {
    let horizon = i64::from(horizon_days.min(MAX_HORIZON_DAYS));
    DateRange::new(add_days(today, -horizon), add_days(today, horizon))
}

/// The window widened by [`RANGE_SPILL_DAYS`] on both sides. Derived ranges
/// never extend past it.
pub fn projection_bounds(today: NaiveDate, horizon_days: u32) -> DateRange {
    let window = projection_window(today, horizon_days);
    DateRange::new(
        add_days(window.start, -RANGE_SPILL_DAYS),
        add_days(window.end, RANGE_SPILL_DAYS),
    )
}

/// The three raw inputs a projection is computed from.
///
/// Lengths are signed because they come straight from user input; anything
/// non-positive, or a missing anchor, means "not configured" and yields an
/// empty projection rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleInputs {
    /// First day of a known period
    pub anchor_date: Option<NaiveDate>,
    pub cycle_length_days: i64,
    pub period_length_days: i64,
}

impl CycleInputs {
    pub fn new(anchor_date: NaiveDate, cycle_length_days: i64, period_length_days: i64) -> Self {
        Self {
            anchor_date: Some(anchor_date),
            cycle_length_days,
            period_length_days,
        }
    }

    /// True when all three fields are usable for projection.
    pub fn is_configured(&self) -> bool {
        self.anchor_date.is_some() && self.cycle_length_days > 0 && self.period_length_days > 0
    }
}

/// Inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// The part of this range inside `bounds`. Inverted, and so empty, when
    /// the two do not overlap.
    pub fn clamp_to(self, bounds: DateRange) -> Self {
        Self {
            start: self.start.max(bounds.start),
            end: self.end.min(bounds.end),
        }
    }

    /// Every day from `start` to `end`, both inclusive. Empty if `end < start`.
    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        std::iter::successors(Some(self.start), |day| try_add_days(*day, 1))
            .take_while(move |day| *day <= end)
    }
}

/// One projected cycle and the ranges derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CycleProjection {
    pub cycle_start: NaiveDate,
    pub menstruation: DateRange,
    pub ovulation_day: NaiveDate,
    pub fertile: DateRange,
}

impl CycleProjection {
    /// Derive all ranges for a cycle starting on `cycle_start`.
    ///
    /// `cycle_length_days < 14` puts ovulation before the cycle start; that is
    /// passed through as-is.
    pub fn derive(cycle_start: NaiveDate, cycle_length_days: i64, period_length_days: i64) -> Self {
        let menstruation = DateRange::new(
            cycle_start,
            add_days(cycle_start, period_length_days.saturating_sub(1)),
        );
        let ovulation_day = add_days(
            cycle_start,
            cycle_length_days.saturating_sub(LUTEAL_PHASE_DAYS),
        );
        let fertile = DateRange::new(
            add_days(ovulation_day, -FERTILE_DAYS_BEFORE_OVULATION),
            add_days(ovulation_day, FERTILE_DAYS_AFTER_OVULATION),
        );

        Self {
            cycle_start,
            menstruation,
            ovulation_day,
            fertile,
        }
    }

    /// Clip the menstruation and fertile ranges to `bounds`.
    pub fn clamp_to(self, bounds: DateRange) -> Self {
        Self {
            menstruation: self.menstruation.clamp_to(bounds),
            fertile: self.fertile.clamp_to(bounds),
            ..self
        }
    }
}

/// Cycle start dates covering `today ± horizon_days`.
///
/// The backward walk starts at the anchor and continues while the current
/// date is strictly after the window start. The forward walk starts one cycle
/// after the anchor and continues while the current date is on or before the
/// window end. The two bounds are intentionally not symmetric.
///
/// Starts that cannot label any day within [`projection_bounds`] are skipped
/// in whole cycles instead of being walked one by one, so an anchor far from
/// today costs nothing extra.
///
/// Returns an empty vector for unconfigured inputs.
pub fn cycle_starts(inputs: &CycleInputs, horizon_days: u32, today: NaiveDate) -> Vec<NaiveDate> {
    let Some(anchor) = inputs.anchor_date else {
        return Vec::new();
    };
    if !inputs.is_configured() {
        return Vec::new();
    }

    let step = inputs.cycle_length_days;
    let window = projection_window(today, horizon_days);
    let bounds = projection_bounds(today, horizon_days);

    let mut starts = Vec::new();

    // Nothing a cycle labels lies more than this many days before its start
    let reach_back = LUTEAL_PHASE_DAYS + FERTILE_DAYS_BEFORE_OVULATION;
    let mut current = skip_back(anchor, step, add_days(bounds.end, reach_back));
    while let Some(date) = current {
        if date <= window.start {
            break;
        }
        starts.push(date);
        current = try_add_days(date, -step);
    }

    // Of the starts before the bounds only the latest one reaches into them
    let mut current =
        try_add_days(anchor, step).and_then(|first| skip_forward(first, step, bounds.start));
    while let Some(date) = current {
        if date > window.end {
            break;
        }
        starts.push(date);
        current = try_add_days(date, step);
    }

    starts
}

/// Latest `date - k * step` (k >= 0) that is on or before `limit`.
fn skip_back(date: NaiveDate, step: i64, limit: NaiveDate) -> Option<NaiveDate> {
    if date <= limit {
        return Some(date);
    }
    let gap = (date - limit).num_days();
    let cycles = gap / step + i64::from(gap % step != 0);
    try_add_days(date, -cycles.checked_mul(step)?)
}

/// Latest `date + k * step` (k >= 0) that is on or before `limit`, or `date`
/// itself when it is already past `limit`.
fn skip_forward(date: NaiveDate, step: i64, limit: NaiveDate) -> Option<NaiveDate> {
    if date >= limit {
        return Some(date);
    }
    let cycles = (limit - date).num_days() / step;
    try_add_days(date, cycles.checked_mul(step)?)
}

/// Project every cycle covering `today ± horizon_days`.
///
/// Order of the returned cycles is not meaningful: backward-walked cycles
/// come first, newest to oldest, followed by forward-walked ones. Ranges are
/// clipped to [`projection_bounds`].
pub fn project(inputs: &CycleInputs, horizon_days: u32, today: NaiveDate) -> Vec<CycleProjection> {
    let starts = cycle_starts(inputs, horizon_days, today);
    let bounds = projection_bounds(today, horizon_days);
    debug!(
        cycles = starts.len(),
        horizon_days,
        %today,
        "projected cycle starts"
    );

    starts
        .into_iter()
        .map(|start| {
            CycleProjection::derive(start, inputs.cycle_length_days, inputs.period_length_days)
                .clamp_to(bounds)
        })
        .collect()
}
