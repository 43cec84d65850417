//! Day labels and the fixed-size set that holds them

use std::fmt;
use std::str::FromStr;

/// A predicted event on a calendar day.
///
/// Variants are declared in display precedence order: when a day carries
/// more than one label, the earliest variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Label {
    /// Predicted bleeding days at the start of a cycle
    Menstruation,
    /// Predicted ovulation day
    Ovulation,
    /// The 7-day window around ovulation
    Fertile,
}

impl Label {
    /// All labels, highest display precedence first.
    pub const ALL: [Label; 3] = [Label::Menstruation, Label::Ovulation, Label::Fertile];

    fn bit(self) -> u8 {
        match self {
            Label::Menstruation => 0b001,
            Label::Ovulation => 0b010,
            Label::Fertile => 0b100,
        }
    }

    /// Stable lowercase name, used in listings.
    pub fn as_str(self) -> &'static str {
        match self {
            Label::Menstruation => "menstruation",
            Label::Ovulation => "ovulation",
            Label::Fertile => "fertile",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "menstruation" => Ok(Label::Menstruation),
            "ovulation" => Ok(Label::Ovulation),
            "fertile" => Ok(Label::Fertile),
            _ => Err(format!(
                "Invalid label '{}'. Valid options are: menstruation, ovulation, fertile",
                s
            )),
        }
    }
}

/// Set of [`Label`]s present on one day, stored as a 3-bit mask.
///
/// Labels only accumulate; there is no removal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LabelSet(u8);

impl LabelSet {
    /// The empty set.
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a label. Adding one that is already present is a no-op.
    pub fn insert(&mut self, label: Label) {
        self.0 |= label.bit();
    }

    pub fn contains(self, label: Label) -> bool {
        self.0 & label.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Labels in the set, highest display precedence first.
    pub fn iter(self) -> impl Iterator<Item = Label> {
        Label::ALL.into_iter().filter(move |label| self.contains(*label))
    }

    /// The single label to display for a day:
    /// Menstruation > Ovulation > Fertile.
    pub fn primary(self) -> Option<Label> {
        self.iter().next()
    }
}

impl FromIterator<Label> for LabelSet {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        let mut set = LabelSet::new();
        for label in iter {
            set.insert(label);
        }
        set
    }
}

impl fmt::Display for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(Label::as_str).collect();
        f.write_str(&names.join(", "))
    }
}

/// Resolve the display label for a set, see [`LabelSet::primary`].
pub fn primary_label(set: LabelSet) -> Option<Label> {
    set.primary()
}
