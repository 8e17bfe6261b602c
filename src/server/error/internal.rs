use thiserror::Error;

/// Internal issues with stored data indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored enumerated column holds a value outside its allowed set.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Invalid {column} value '{value}' in table {table}")]
    InvalidEnumValue {
        table: &'static str,
        column: &'static str,
        value: String,
    },

    /// A stored count is negative.
    #[error("Negative {column} value {value} in table {table}")]
    NegativeCount {
        table: &'static str,
        column: &'static str,
        value: i64,
    },
}
