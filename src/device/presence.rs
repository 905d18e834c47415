/// `Presence` captures a directive whose *existence* is configured separately from its value --
/// for example `service timestamps log` is turned on by having a timestamps block at all, the
/// mode inside of that block only customizes the directive. Collapsing this to an `Option<bool>`
/// or a plain `Option<T>` loses the "present but left at its default" case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence<T> {
    /// The directive was not configured at all.
    Absent,
    /// The directive was configured but its value was left to the device default.
    Defaulted,
    /// The directive was configured with an explicit value.
    Valued(T),
}

impl<T> Default for Presence<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> Presence<T> {
    /// Builds a `Presence` from whether the directive is present and its (optional) value. A value
    /// without presence is ignored.
    #[must_use]
    pub fn from_parts(
        present: bool,
        value: Option<T>,
    ) -> Self {
        match (present, value) {
            (false, _) => Self::Absent,
            (true, None) => Self::Defaulted,
            (true, Some(v)) => Self::Valued(v),
        }
    }

    /// True for both `Defaulted` and `Valued`.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        !matches!(self, Self::Absent)
    }

    /// Returns the configured value, or `default` when there is none.
    #[must_use]
    pub fn value_or(
        self,
        default: T,
    ) -> T {
        match self {
            Self::Valued(v) => v,
            Self::Absent | Self::Defaulted => default,
        }
    }

    /// Returns a reference to the configured value, if there is one.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Valued(v) => Some(v),
            Self::Absent | Self::Defaulted => None,
        }
    }
}
