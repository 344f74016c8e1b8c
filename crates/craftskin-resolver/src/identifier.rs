//! Identifier classification and UUID normalization

/// A classified player identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    /// Input already looks like a UUID (32 or 36 characters)
    Uuid(String),
    /// Anything else is a username that needs resolving
    Username(String),
}

/// Classify an identifier by length.
///
/// Length 32 matches the compact hex form and 36 the hyphenated form;
/// everything else resolves as a username. No hex-digit or hyphen-position
/// check happens here, so a 33-character string is a username, never a
/// malformed UUID.
pub fn classify(input: &str) -> Identifier {
    if input.len() == 32 || input.len() == 36 {
        Identifier::Uuid(input.to_string())
    } else {
        Identifier::Username(input.to_string())
    }
}

/// Normalize a UUID-shaped string to the hyphenated form.
///
/// Hyphens are stripped first, so canonical input passes through unchanged.
/// Separators land at offsets 8, 12, 16 and 20; inputs that do not strip
/// down to 32 ASCII characters are returned as stripped.
pub fn hyphenate(uuid: &str) -> String {
    let compact: String = uuid.chars().filter(|c| *c != '-').collect();
    if compact.len() != 32 || !compact.is_ascii() {
        return compact;
    }

    format!(
        "{}-{}-{}-{}-{}",
        &compact[..8],
        &compact[8..12],
        &compact[12..16],
        &compact[16..20],
        &compact[20..],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPACT: &str = "069a79f444e94726a5befca90e38aaf5";
    const HYPHENATED: &str = "069a79f4-44e9-4726-a5be-fca90e38aaf5";

    #[test]
    fn test_classify_compact_uuid() {
        assert_eq!(classify(COMPACT), Identifier::Uuid(COMPACT.to_string()));
    }

    #[test]
    fn test_classify_hyphenated_uuid() {
        assert_eq!(
            classify(HYPHENATED),
            Identifier::Uuid(HYPHENATED.to_string())
        );
    }

    #[test]
    fn test_classify_username() {
        assert_eq!(classify("Notch"), Identifier::Username("Notch".to_string()));
    }

    #[test]
    fn test_classify_33_chars_is_username() {
        // One char past the compact form: resolved as a name, not rejected
        let input = format!("{COMPACT}x");
        assert_eq!(classify(&input), Identifier::Username(input.clone()));
    }

    #[test]
    fn test_classify_empty_string_is_username() {
        assert_eq!(classify(""), Identifier::Username(String::new()));
    }

    #[test]
    fn test_hyphenate_compact() {
        assert_eq!(hyphenate(COMPACT), HYPHENATED);
    }

    #[test]
    fn test_hyphenate_is_idempotent() {
        assert_eq!(hyphenate(HYPHENATED), HYPHENATED);
    }

    #[test]
    fn test_hyphenate_leaves_odd_lengths_stripped() {
        assert_eq!(hyphenate("abc-def"), "abcdef");
    }
}
