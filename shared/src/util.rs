//! Formatting and normalization helpers
//!
//! CPF and phone numbers are shown formatted but sent to the backend as
//! bare digits. Formatting is progressive so it can run on every
//! keystroke of a partially typed value.

/// Strip everything that is not an ASCII digit.
pub fn digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Format a CPF progressively: `52998224725` -> `529.982.247-25`.
/// Input beyond 11 digits is truncated.
pub fn format_cpf(input: &str) -> String {
    let mut d = digits(input);
    d.truncate(11);
    match d.len() {
        0..=3 => d,
        4..=6 => format!("{}.{}", &d[..3], &d[3..]),
        7..=9 => format!("{}.{}.{}", &d[..3], &d[3..6], &d[6..]),
        _ => format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..]),
    }
}

/// Format a Brazilian phone progressively: `11987654321` -> `(11)98765-4321`.
/// Input beyond 11 digits is truncated.
pub fn format_phone(input: &str) -> String {
    let mut d = digits(input);
    d.truncate(11);
    match d.len() {
        0..=2 => d,
        3..=7 => format!("({}){}", &d[..2], &d[2..]),
        _ => format!("({}){}-{}", &d[..2], &d[2..7], &d[7..]),
    }
}

/// A CPF is accepted when it resolves to exactly 11 digits.
pub fn is_valid_cpf(input: &str) -> bool {
    digits(input).len() == 11
}

/// Current UTC timestamp in milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
