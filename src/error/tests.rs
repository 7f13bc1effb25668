//! Tests for error types.

#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn test_decode_error_display() {
        let err = Error::decode("missing or invalid connection URL");
        assert_eq!(
            err.to_string(),
            "decode error: missing or invalid connection URL"
        );
    }

    #[test]
    fn test_decode_error_variant() {
        let err = Error::decode("bad url");
        assert!(matches!(err, Error::Decode(_)));
    }
}
