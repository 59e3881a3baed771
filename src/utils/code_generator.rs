//! Short code generation.
//!
//! Codes are not unique by construction; uniqueness is enforced by the
//! store's unique constraint at insert time.

use base64::Engine as _;
use rand::Rng;

/// Length of a generated short code.
pub const CODE_LENGTH: usize = 6;

/// Random bytes drawn per code. Six bytes encode to exactly eight base64
/// characters with no padding, of which the first [`CODE_LENGTH`] are kept.
const CODE_LENGTH_BYTES: usize = 6;

/// Generates a random 6-character short code.
///
/// Each character is an independent uniform draw from the URL-safe base64
/// alphabet (`A-Z`, `a-z`, `0-9`, `-`, `_`).
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
/// ```
pub fn generate_code() -> String {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];
    rand::rng().fill(&mut buffer);

    let mut code = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer);
    code.truncate(CODE_LENGTH);
    code
}
