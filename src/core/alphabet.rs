/// Characters a join code may contain: `A-Z`, `a-z`, `0-9` and `-`.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-";

/// Check if a single character belongs to the join code alphabet
pub fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}
