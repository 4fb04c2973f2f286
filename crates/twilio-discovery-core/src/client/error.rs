//! Client construction errors

use thiserror::Error;

/// Errors raised while constructing a [`Client`](super::Client)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("username is required")]
    MissingUsername,

    #[error("password is required")]
    MissingPassword,

    #[error("accountSid must start with AC")]
    InvalidAccountSid { account_sid: String },
}

pub type ClientResult<T> = Result<T, ClientError>;
