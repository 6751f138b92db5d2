//! Strongly typed, zero-cost number wrappers.
//!
//! Profiles, sections and teams are all numbered from 1, matching how they
//! are reported to users ("profile 1, section 3").  The inner integer is
//! `pub`; [`from_position`][ProfileNumber::from_position] numbers the
//! entries of a zero-based `Vec`.

use std::fmt;

/// Generate a typed 1-based number wrapper around a primitive integer.
macro_rules! typed_number {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Build the number for the zero-based `position` in a list.
            ///
            /// Returns `None` if `position + 1` does not fit the inner type.
            #[inline]
            pub fn from_position(position: usize) -> Option<$name> {
                <$inner>::try_from(position)
                    .ok()
                    .and_then(|n| n.checked_add(1))
                    .map($name)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

typed_number! {
    /// 1-based number of a profile (a line of the input file).
    pub struct ProfileNumber(u32);
}

typed_number! {
    /// 1-based number of a section within its profile.
    pub struct SectionNumber(u32);
}

typed_number! {
    /// 1-based identity of a work team, assigned by the engine per run.
    pub struct TeamId(u32);
}
