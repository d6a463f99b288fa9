/// Opaque bearer token obtained from the OAuth token endpoint.
///
/// Wraps the raw token string so it never appears in `Debug` output
/// or log lines by accident.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Token(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_roundtrip() {
        let token = Token::from("1000.abcdef.123456");
        assert_eq!(token.as_str(), "1000.abcdef.123456");
    }

    #[test]
    fn test_token_debug_is_redacted() {
        let token = Token::from("super-secret");
        let debug = format!("{token:?}");
        assert!(!debug.contains("super-secret"));
    }
}
