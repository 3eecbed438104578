/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Length of a record key: a UUID v4 in simple (hyphen-less) form.
pub const RECORD_KEY_LEN: usize = 32;

/// Generate a globally unique record key.
///
/// 32 lowercase hex chars, e.g. `"9f1c2a0e5b7d4c1f8a3e6b2d0c9f7e15"`.
pub fn new_record_key() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Whether `key` has the shape produced by [`new_record_key`].
///
/// Anything else reaching an `{id}` path segment is a malformed identifier.
pub fn is_record_key(key: &str) -> bool {
    key.len() == RECORD_KEY_LEN
        && key
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_keys_are_well_formed_and_unique() {
        let a = new_record_key();
        let b = new_record_key();
        assert!(is_record_key(&a));
        assert!(is_record_key(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn rejects_malformed_keys() {
        assert!(!is_record_key(""));
        assert!(!is_record_key("invalid-id"));
        assert!(!is_record_key("507f1f77bcf86cd799439011"));
        // Uppercase hex is not what the store hands out
        assert!(!is_record_key("9F1C2A0E5B7D4C1F8A3E6B2D0C9F7E15"));
        assert!(!is_record_key("9f1c2a0e-5b7d-4c1f-8a3e-6b2d0c9f7e15"));
    }

    #[test]
    fn accepts_absent_but_well_formed_key() {
        assert!(is_record_key("00000000000000000000000000000000"));
    }
}
