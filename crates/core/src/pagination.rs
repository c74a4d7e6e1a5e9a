//! Offset/limit clamping for list endpoints.

/// Page size used when the caller does not pass `limit`.
pub const DEFAULT_LIMIT: i64 = 100;

/// Largest page a single list call may return.
pub const MAX_LIMIT: i64 = 1_000;

/// Clamp a user-provided limit into `0..=max`, defaulting when absent.
///
/// A limit of zero is allowed and yields an empty page.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).clamp(0, max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
