use thiserror::Error;

pub type NfResult<T> = Result<T, NfError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NfError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Negative value for {what}: {value}")]
    Negative { what: &'static str, value: f64 },
}
