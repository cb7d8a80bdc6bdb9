use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WorkError {
    #[error("nonce search exhausted its budget of {attempts} attempts")]
    AttemptsExhausted { attempts: u64 },
}
