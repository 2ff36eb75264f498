//! Storage error taxonomy.
//!
//! The HTTP layer maps [`StorageError::Unavailable`] to 503,
//! [`StorageError::Timeout`] to 504, and everything else to 500.

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The storage endpoint could not be reached (DNS, connect, TLS).
    #[error("Object storage unreachable: {0}")]
    Unavailable(String),

    /// The storage request exceeded its deadline.
    #[error("Object storage timed out: {0}")]
    Timeout(String),

    /// Any other provider-side failure.
    #[error("Object storage error: {0}")]
    Upstream(String),
}

/// Classify an AWS SDK error into the storage taxonomy.
///
/// Connect-level failures surface as `Unavailable`; operation and connect
/// timeouts as `Timeout`; service responses and everything else as
/// `Upstream`.
pub(crate) fn classify_sdk_error<E>(
    context: &'static str,
    err: aws_sdk_s3::error::SdkError<E>,
) -> StorageError
where
    E: std::error::Error + Send + Sync + 'static,
{
    use aws_sdk_s3::error::SdkError;

    match &err {
        SdkError::TimeoutError(_) => StorageError::Timeout(context.to_string()),
        SdkError::DispatchFailure(failure) => {
            if failure.as_connector_error().is_some_and(|c| c.is_timeout()) {
                StorageError::Timeout(format!("{context}: connection timed out"))
            } else {
                StorageError::Unavailable(format!("{context}: {err}"))
            }
        }
        _ => StorageError::Upstream(format!("{context}: {err}")),
    }
}
