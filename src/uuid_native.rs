use uuid::Uuid;

/// Returns a freshly generated random UUID in its canonical 36-character
/// hyphenated form.
///
/// This delegates to the platform's random source via [`Uuid::new_v4`] and
/// carries no ordering or uniqueness state of its own.
pub fn native_uuid() -> String {
    Uuid::new_v4().hyphenated().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_hyphenated_form() {
        let s = native_uuid();
        assert_eq!(s.len(), 36);
        for (i, c) in s.chars().enumerate() {
            match i {
                8 | 13 | 18 | 23 => assert_eq!(c, '-'),
                _ => assert!(c.is_ascii_hexdigit()),
            }
        }
        // Version nibble of a random UUID.
        assert_eq!(s.as_bytes()[14], b'4');
    }

    #[test]
    fn successive_uuids_differ() {
        assert_ne!(native_uuid(), native_uuid());
    }
}
