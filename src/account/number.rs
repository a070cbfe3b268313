//! Account number generation

use rand::Rng;

/// Number of digits in an account number
pub const ACCOUNT_NUMBER_LEN: usize = 20;

/// Generate a random 20-digit account number.
///
/// Leading zeros are allowed, so the result is a string rather than an integer.
/// Uniqueness is enforced by the store, not here.
pub fn generate_account_number() -> String {
    let mut rng = rand::thread_rng();
    (0..ACCOUNT_NUMBER_LEN)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

/// Check the shape of an account number (20 ASCII digits)
pub fn is_valid_account_number(s: &str) -> bool {
    s.len() == ACCOUNT_NUMBER_LEN && s.bytes().all(|b| b.is_ascii_digit())
}
