//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_BLOCK_PROPERTIES: &str = "style.block_properties";

// Codes: policy violations
pub const CODE_PROPERTY_BLOCKED: &str = "property_blocked";
pub const CODE_DETAILED_PROPERTY_BLOCKED: &str = "detailed_property_blocked";

// Codes: configuration diagnostics
pub const CODE_INVALID_MODE: &str = "invalid_mode";
pub const CODE_MISSING_BLOCKLIST: &str = "missing_blocklist";
pub const CODE_MISSING_EXCEPTIONS: &str = "missing_exceptions";
