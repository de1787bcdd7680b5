//! Error types for `alfox-core`.

/// Reasons a lead submission is rejected.
///
/// The `Display` text of each variant is the exact message returned to the
/// submitter in the `error` field of a 400 response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeadError {
    /// One of name, email, company or services is missing or empty.
    #[error("Missing required fields")]
    MissingFields,

    /// The email address does not look like `local@domain.tld`.
    #[error("Invalid email address")]
    InvalidEmail { email: String },
}
