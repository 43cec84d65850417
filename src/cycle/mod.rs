//! Cycle prediction core
//!
//! Pure, synchronous logic with no I/O:
//! - `date_math`: day-granularity arithmetic and ISO formatting/parsing
//! - `label`: the closed label set and its display precedence
//! - `projection`: cycle-start projection and per-cycle ranges
//! - `event_index`: flattening projections into a date → labels lookup

mod date_math;
mod event_index;
mod label;
mod projection;

pub use date_math::{ParseError, add_days, from_iso, is_same_day, to_iso, try_add_days};
pub use event_index::EventIndex;
pub use label::{Label, LabelSet, primary_label};
pub use projection::{
    CycleInputs, CycleProjection, DEFAULT_MONTHS_RANGE, DateRange, FERTILE_DAYS_AFTER_OVULATION,
    FERTILE_DAYS_BEFORE_OVULATION, LUTEAL_PHASE_DAYS, MAX_HORIZON_DAYS, MAX_MONTHS_RANGE,
    RANGE_SPILL_DAYS, cycle_starts, horizon_days, project, projection_bounds, projection_window,
};
