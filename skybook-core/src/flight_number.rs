use rand::Rng;

/// Samples a candidate flight number: two random uppercase letters, a dash,
/// then three digits in [100, 999]. Uniqueness is not guaranteed here; the
/// registry relies on the store's unique index and retries on collision.
pub fn generate() -> String {
    let mut rng = rand::thread_rng();
    let a = rng.gen_range(b'A'..=b'Z') as char;
    let b = rng.gen_range(b'A'..=b'Z') as char;
    let digits: u32 = rng.gen_range(100..=999);
    format!("{}{}-{}", a, b, digits)
}

/// True when the value matches `^[A-Z]{2}-[0-9]{3}$`.
pub fn is_valid_format(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 6
        && bytes[0].is_ascii_uppercase()
        && bytes[1].is_ascii_uppercase()
        && bytes[2] == b'-'
        && bytes[3..].iter().all(|b| b.is_ascii_digit())
}
