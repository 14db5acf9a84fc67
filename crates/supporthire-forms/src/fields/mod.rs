//! Field keys and closed option sets.
//!
//! Every form names its fields with a small `Copy` enum implementing
//! [`FormField`], and every selection field draws its value from an enum
//! implementing [`Choice`]. Wire names and values are the strings stored in
//! submission documents.

mod choices;

pub use choices::{HiringRole, JobType, MonthlyVolume, ShiftPreference, WillingToPay};

/// A field key of a form.
pub trait FormField: Copy + Ord + std::fmt::Debug + Send + Sync + 'static {
    /// All fields of the form, in display order.
    const ALL: &'static [Self];

    /// Returns the wire name of the field (as used in documents).
    fn name(self) -> &'static str;

    /// Resolves a field from its wire name.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.name() == name)
    }
}

/// A value drawn from a closed option set.
pub trait Choice: Copy + Eq + std::fmt::Debug + Send + Sync + 'static {
    /// All options, in display order.
    const ALL: &'static [Self];

    /// Returns the stored value of the option.
    fn value(self) -> &'static str;

    /// Returns the human-readable label of the option.
    fn label(self) -> &'static str;

    /// Parses an option from its stored value.
    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|opt| opt.value() == value)
    }

    /// Returns `(value, label)` pairs for rendering a selector.
    fn options() -> Vec<(&'static str, &'static str)> {
        Self::ALL.iter().map(|opt| (opt.value(), opt.label())).collect()
    }
}
