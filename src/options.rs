//! Game configuration options.

/// Configuration options for a table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use unors::GameOptions;
///
/// let options = GameOptions::default()
///     .with_starting_hand(5)
///     .with_table_capacity(3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Cards dealt to each player at round start.
    pub starting_hand: u8,
    /// Maximum number of seats at the table.
    pub table_capacity: u8,
    /// Bet amount a driver may fall back to when none was chosen.
    pub default_bet: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_hand: 7,
            table_capacity: 4,
            default_bet: 50,
        }
    }
}

impl GameOptions {
    /// Sets the number of cards dealt to each player at round start.
    ///
    /// # Example
    ///
    /// ```
    /// use unors::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_hand(5);
    /// assert_eq!(options.starting_hand, 5);
    /// ```
    #[must_use]
    pub const fn with_starting_hand(mut self, cards: u8) -> Self {
        self.starting_hand = cards;
        self
    }

    /// Sets the maximum number of seats at the table.
    ///
    /// # Example
    ///
    /// ```
    /// use unors::GameOptions;
    ///
    /// let options = GameOptions::default().with_table_capacity(2);
    /// assert_eq!(options.table_capacity, 2);
    /// ```
    #[must_use]
    pub const fn with_table_capacity(mut self, seats: u8) -> Self {
        self.table_capacity = seats;
        self
    }

    /// Sets the fallback bet amount.
    ///
    /// # Example
    ///
    /// ```
    /// use unors::GameOptions;
    ///
    /// let options = GameOptions::default().with_default_bet(100);
    /// assert_eq!(options.default_bet, 100);
    /// ```
    #[must_use]
    pub const fn with_default_bet(mut self, amount: usize) -> Self {
        self.default_bet = amount;
        self
    }
}
