//! Shared constraint constants.
//!
//! Client-side and server-side checks both read from here so the two can
//! never drift apart. Change a bound here and every consumer follows.

// ── User constraints ─────────────────────────────────────────────────────────

/// Email addresses must match this shape: `local@domain.tld`.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Storage limit for an email column. Not enforced by the validator.
pub const EMAIL_MAX_LENGTH: usize = 255;

/// Minimum first/last name length, counted after trimming.
pub const NAME_MIN_LENGTH: usize = 2;

/// Maximum first/last name length, counted after trimming.
pub const NAME_MAX_LENGTH: usize = 50;

/// Maximum bio length.
pub const BIO_MAX_LENGTH: usize = 500;

// ── Other patterns ───────────────────────────────────────────────────────────

/// Version-4 UUID, case-insensitive.
pub const UUID_PATTERN: &str =
    r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$";

/// Letters, spaces, apostrophes and hyphens. Exported for form hints only;
/// the validator checks name length, not name characters.
pub const NAME_PATTERN: &str = r"^[a-zA-Z\s'-]{2,50}$";

// ── Pagination ───────────────────────────────────────────────────────────────

/// First page number.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size when none is requested.
pub const DEFAULT_LIMIT: u32 = 10;

/// Largest page size a caller may request.
pub const MAX_LIMIT: u32 = 100;
