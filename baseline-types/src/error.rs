use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Baseline '{id}' of '{font}' is at both {first} and {second}")]
    InconsistentBaselineValue {
        font: String,
        id: String,
        first: i16,
        second: i16,
    },
}
