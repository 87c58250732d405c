pub mod error;
pub mod token_dto;

pub use error::{ErrorResponse, ErrorResponseExt};
pub use token_dto::{
    IssueTokenRequest, IssueTokenResponse, ValidateTokenRequest, ValidateTokenResponse,
};
