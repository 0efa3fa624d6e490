use crate::error::Failure;

/// Shortest trimmed text, in characters, accepted as a real extraction
pub const MIN_TEXT_CHARS: usize = 10;

/// Accept `raw` if it carries meaningful text. The text is returned as
/// extracted; only the length check looks at a trimmed view.
pub fn validate(raw: String) -> Result<String, Failure> {
    if raw.trim().chars().count() < MIN_TEXT_CHARS {
        return Err(Failure::EmptyExtraction);
    }
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn ten_trimmed_chars_is_enough() {
        let raw = "   0123456789 \n".to_string();
        assert_eq!(validate(raw.clone()).unwrap(), raw);
    }

    #[test]
    fn nine_trimmed_chars_is_rejected() {
        let err = validate("  012345678  ".to_string()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyExtraction);
    }

    #[test]
    fn empty_and_whitespace_are_rejected() {
        assert!(validate(String::new()).is_err());
        assert!(validate(" \n\t\n   ".to_string()).is_err());
    }

    #[test]
    fn counts_characters_not_bytes() {
        // nine characters, well over ten bytes
        assert!(validate("ééééééééé".to_string()).is_err());
        assert!(validate("éééééééééé".to_string()).is_ok());
    }
}
