use thiserror::Error;

/// Schema violation in a single feed entry. Indicates an upstream contract
/// change rather than bad user input, so the message names the exact field.
#[derive(Debug, Error)]
pub enum MalformedRecord {
    #[error("invalid date key: {0}")]
    InvalidDate(String),
    #[error("{name}: missing estimated diameter bounds")]
    MissingDiameter { name: String },
    #[error("{name}: no close approach data")]
    NoCloseApproach { name: String },
    #[error("{name}: missing {field}")]
    MissingField { name: String, field: &'static str },
    #[error("{name}: non-numeric {field}: {value:?}")]
    NonNumeric {
        name: String,
        field: &'static str,
        value: String,
    },
}
