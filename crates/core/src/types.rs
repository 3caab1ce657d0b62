/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Prices are whole currency units, stored as PostgreSQL INTEGER.
pub type Price = i32;

/// Margins are widened so that any pair of prices can be subtracted.
pub type Margin = i64;
