//! Flattened date → labels lookup
//!
//! The index is rebuilt from scratch on every recompute and owns its own
//! label data; it keeps no reference back to the projections it was built
//! from.

use super::date_math::from_iso;
use super::label::{Label, LabelSet};
use super::projection::CycleProjection;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

/// Every labeled day across a set of projected cycles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventIndex {
    days: BTreeMap<NaiveDate, LabelSet>,
}

impl EventIndex {
    /// An index with no labeled days.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten all ranges of all projections into one index.
    ///
    /// A day can collect labels from several phases or from neighbouring
    /// cycles; labels accumulate and are never removed.
    pub fn build(projections: &[CycleProjection]) -> Self {
        let mut index = Self::new();
        for projection in projections {
            for day in projection.menstruation.days() {
                index.add(day, Label::Menstruation);
            }
            index.add(projection.ovulation_day, Label::Ovulation);
            for day in projection.fertile.days() {
                index.add(day, Label::Fertile);
            }
        }
        index
    }

    fn add(&mut self, day: NaiveDate, label: Label) {
        self.days.entry(day).or_default().insert(label);
    }

    /// Labels on `day`; empty if nothing is predicted.
    pub fn labels_on(&self, day: NaiveDate) -> LabelSet {
        self.days.get(&day).copied().unwrap_or_default()
    }

    /// Labels for an ISO `YYYY-MM-DD` key, or `None` if the key is not a
    /// date or the day has no labels.
    pub fn get_iso(&self, key: &str) -> Option<LabelSet> {
        let day = from_iso(key).ok()?;
        self.days.get(&day).copied()
    }

    /// Display label for `day`, resolved by precedence.
    pub fn primary_on(&self, day: NaiveDate) -> Option<Label> {
        self.labels_on(day).primary()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// All labeled days in date order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, LabelSet)> + '_ {
        self.days.iter().map(|(day, labels)| (*day, *labels))
    }

    /// Labeled days within `range`, in date order.
    pub fn range(
        &self,
        range: RangeInclusive<NaiveDate>,
    ) -> impl Iterator<Item = (NaiveDate, LabelSet)> + '_ {
        self.days.range(range).map(|(day, labels)| (*day, *labels))
    }
}
