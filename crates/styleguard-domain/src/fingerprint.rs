use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a declaration finding.
///
/// Identity fields:
/// - check_id
/// - code
/// - stylesheet path
/// - property name
/// - enclosing selector list (joined, order-sensitive)
pub fn fingerprint_for_declaration(
    check_id: &str,
    code: &str,
    source_path: &str,
    property: &str,
    selectors: &[String],
) -> String {
    let joined = selectors.join(",");
    let parts = [check_id, code, source_path, property, joined.as_str()];
    let canonical = parts.join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
