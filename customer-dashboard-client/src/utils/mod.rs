//! Utility modules.

/// Date/time serialization helpers for `updatedAt`.
pub mod datetime;

/// Log sanitization utilities to prevent personal data exposure.
pub mod log_sanitizer;
