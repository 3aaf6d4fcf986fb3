use core::fmt;

/// How easily a grocery item is crushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GroceryItemFirmness {
    Soft,
    Firm,
    Hard,
}

impl GroceryItemFirmness {
    /// Every firmness, softest first.
    pub const ALL: [GroceryItemFirmness; 3] = [Self::Soft, Self::Firm, Self::Hard];

    /// Name suitable for display.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Soft => "Soft",
            Self::Firm => "Firm",
            Self::Hard => "Hard",
        }
    }

    /// Interprets a free-form description by its first character.
    ///
    /// Unrecognized or empty descriptions are treated as [`Self::Firm`].
    ///
    /// ```
    /// use grocery::GroceryItemFirmness;
    ///
    /// assert_eq!(GroceryItemFirmness::interpret_description("squishy"), GroceryItemFirmness::Soft);
    /// assert_eq!(GroceryItemFirmness::interpret_description("HARD"), GroceryItemFirmness::Hard);
    /// assert_eq!(GroceryItemFirmness::interpret_description("?"), GroceryItemFirmness::Firm);
    /// ```
    pub fn interpret_description(description: &str) -> Self {
        match description.chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('s') => Self::Soft,
            Some('h') => Self::Hard,
            _ => Self::Firm,
        }
    }
}

impl fmt::Display for GroceryItemFirmness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
