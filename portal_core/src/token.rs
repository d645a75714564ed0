/// Name of the meta tag that carries the anti-forgery token.
pub const CSRF_META_NAME: &str = "csrf-token";

/// Name of the hidden form field the token is copied into.
pub const TOKEN_FIELD: &str = "_token";

/// Something that can supply the anti-forgery token issued by the server.
/// The token is read-only here; generating and validating it is the job of
/// the authentication backend.
pub trait TokenProvider {
    fn csrf_token(&self) -> Option<String>;
}

/// A token that is already known, or known to be absent.
impl TokenProvider for Option<String> {
    fn csrf_token(&self) -> Option<String> {
        self.clone()
    }
}

impl TokenProvider for str {
    fn csrf_token(&self) -> Option<String> {
        Some(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_tokens() {
        assert_eq!(Some("abc".to_string()).csrf_token().as_deref(), Some("abc"));
        assert_eq!(None::<String>.csrf_token(), None);
        assert_eq!("xyz".csrf_token().as_deref(), Some("xyz"));
    }
}
