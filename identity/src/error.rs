use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("voter {voter} has already cast a vote")]
    AlreadyVoted { voter: String },
}
