use core::fmt;

/// Weight class of a grocery item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GroceryItemWeight {
    Light,
    Medium,
    Heavy,
    VeryHeavy,
}

impl GroceryItemWeight {
    /// Every weight class, lightest first.
    pub const ALL: [GroceryItemWeight; 4] =
        [Self::Light, Self::Medium, Self::Heavy, Self::VeryHeavy];

    /// Name suitable for display.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Medium => "Medium",
            Self::Heavy => "Heavy",
            Self::VeryHeavy => "Very Heavy",
        }
    }

    /// Numeric weight counted against a bag's weight limit.
    pub fn weight_value(self) -> u32 {
        match self {
            Self::Light => 1,
            Self::Medium => 3,
            Self::Heavy => 5,
            Self::VeryHeavy => 7,
        }
    }

    /// Interprets a free-form description by its first character.
    ///
    /// Unrecognized or empty descriptions are treated as [`Self::Medium`].
    pub fn interpret_description(description: &str) -> Self {
        match description.chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('l') => Self::Light,
            Some('h') => Self::Heavy,
            Some('v') => Self::VeryHeavy,
            _ => Self::Medium,
        }
    }
}

impl fmt::Display for GroceryItemWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
