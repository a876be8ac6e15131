/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Prices are fixed-point decimals (`NUMERIC(18,2)` in the store).
pub type Price = rust_decimal::Decimal;
