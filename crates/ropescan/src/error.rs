use thiserror::Error;

/// The search pattern is not a valid regular expression.
///
/// Raised by [`RegexpCursor::new`](crate::RegexpCursor::new); construction
/// fails and no partially-usable cursor exists. This is the crate's only
/// error condition.
#[derive(Debug, Clone, Error)]
#[error("invalid search pattern: {0}")]
pub struct PatternError(#[from] regex::Error);
