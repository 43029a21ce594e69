//! Output-mode flags.

use std::ops::{BitOr, BitOrAssign};

/// Flags selecting which declaration kinds are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutputMode(u8);

impl OutputMode {
    /// Render nothing.
    pub const NONE: Self = Self(0x00);
    /// Render property members of classes.
    pub const PROPERTIES: Self = Self(0x01);
    /// Render field members of classes.
    pub const FIELDS: Self = Self(0x02);
    /// Render constant members of classes.
    pub const CONSTANTS: Self = Self(0x04);
    /// Render enumerations.
    pub const ENUMS: Self = Self(0x08);
    /// The default mode: properties and enums.
    pub const DEFAULT: Self = Self(Self::PROPERTIES.0 | Self::ENUMS.0);

    /// Returns true if all flags of `other` are set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns true if any flag of `other` is set.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Returns true if class declaration blocks are requested.
    #[must_use]
    pub const fn classes_requested(self) -> bool {
        self.intersects(Self(Self::PROPERTIES.0 | Self::FIELDS.0))
    }

    /// Returns true if the combination is contradictory: constants carry
    /// initializers and cannot share a declaration-only block with
    /// properties or fields.
    #[must_use]
    pub const fn conflicts(self) -> bool {
        self.contains(Self::CONSTANTS) && self.classes_requested()
    }
}

impl Default for OutputMode {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl BitOr for OutputMode {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for OutputMode {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
