//! Numeric-to-token helpers and boundary markers

/// Prefix marking an exclusive score or lex boundary
pub const EXCLUSIVE_PREFIX: &str = "(";

/// Prefix marking an inclusive lex boundary
pub const INCLUSIVE_LEX_PREFIX: &str = "[";

/// Suffix appended to an infinity sign for score boundaries (`+inf`, `-inf`)
pub const INFINITY_SUFFIX: &str = "inf";

/// Render a signed integer as a base-10 token
#[must_use]
pub fn int_to_token(value: i64) -> String {
    value.to_string()
}

/// Render an unsigned integer as a base-10 token
#[must_use]
pub fn uint_to_token(value: u64) -> String {
    value.to_string()
}

/// Render a float as the shortest token that parses back to the same value.
///
/// Infinities use the server's `+inf`/`-inf` spelling.
#[must_use]
pub fn float_to_token(value: f64) -> String {
    if value.is_infinite() {
        let sign = if value.is_sign_positive() { "+" } else { "-" };
        return format!("{sign}{INFINITY_SUFFIX}");
    }
    // Display for f64 is the shortest round-trip form and never uses exponents
    value.to_string()
}
