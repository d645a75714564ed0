use anyhow::{Context, Result};
use axum::http::{HeaderMap, HeaderName};
use portal_core::{app::App, shell::ShellDocument};

use crate::{args::Args, asset::STYLESHEET};

/// Everything the request handlers need, built once from the command line.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    pub title: String,
    pub app: App,
    pub csrf_header: HeaderName,
    pub identity_header: Option<HeaderName>,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            title: "Portal".to_string(),
            app: App::default(),
            csrf_header: HeaderName::from_static("x-csrf-token"),
            identity_header: None,
        }
    }
}

impl TryFrom<&Args> for PortalConfig {
    type Error = anyhow::Error;

    fn try_from(args: &Args) -> Result<Self> {
        let app = App::new(args.mount_id.as_str())?;
        let csrf_header = parse_header_name(&args.csrf_header)?;
        let identity_header = args
            .identity_header
            .as_deref()
            .map(parse_header_name)
            .transpose()?;

        Ok(Self {
            title: args.title.clone(),
            app,
            csrf_header,
            identity_header,
        })
    }
}

impl PortalConfig {
    /// Builds an empty shell with a single mount point. The `csrf-token` meta
    /// tag is only present if the backend supplied a token.
    pub fn shell(&self, csrf_token: Option<&str>) -> ShellDocument {
        ShellDocument::new(self.title.as_str())
            .with_csrf_token(csrf_token)
            .with_stylesheet(STYLESHEET)
            .with_mount_point(self.app.mount_id())
    }

    /// The CSRF token passed by the backend, if it is present, valid UTF-8
    /// and not blank.
    pub fn request_token<'a>(&self, headers: &'a HeaderMap) -> Option<&'a str> {
        headers
            .get(&self.csrf_header)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }

    /// Whether the backend vouched for the request. A blank identity header
    /// does not count.
    pub fn has_identity(&self, headers: &HeaderMap) -> bool {
        match &self.identity_header {
            Some(name) => headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .is_some_and(|v| !v.trim().is_empty()),
            None => true,
        }
    }
}

fn parse_header_name(name: &str) -> Result<HeaderName> {
    HeaderName::try_from(name.trim()).with_context(|| format!("{name:?} is not a valid header name"))
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;
    use clap::Parser;

    use super::*;

    #[test]
    fn config_from_args() {
        let args = Args::parse_from([
            "portalweb",
            "--title",
            "Customers",
            "--csrf-header",
            "X-XSRF-TOKEN",
            "--identity-header",
            "X-Auth-User",
        ]);
        let config = PortalConfig::try_from(&args).unwrap();
        assert_eq!(config.title, "Customers");
        assert_eq!(config.csrf_header, "x-xsrf-token");
        assert_eq!(config.identity_header.unwrap(), "x-auth-user");
        assert_eq!(config.app.mount_id(), "app");
    }

    #[test]
    fn bad_header_name_is_an_error() {
        let args = Args::parse_from(["portalweb", "--csrf-header", "not a header"]);
        assert!(PortalConfig::try_from(&args).is_err());
    }

    #[test]
    fn empty_mount_id_is_an_error() {
        let args = Args::parse_from(["portalweb", "--mount-id", ""]);
        assert!(PortalConfig::try_from(&args).is_err());
    }

    #[test]
    fn request_token() {
        let config = PortalConfig::default();
        let mut headers = HeaderMap::new();
        assert_eq!(config.request_token(&headers), None);

        headers.insert("x-csrf-token", HeaderValue::from_static("  "));
        assert_eq!(config.request_token(&headers), None);

        headers.insert("x-csrf-token", HeaderValue::from_static("abc"));
        assert_eq!(config.request_token(&headers), Some("abc"));
    }

    #[test]
    fn identity_is_assumed_when_no_header_is_configured() {
        let config = PortalConfig::default();
        assert!(config.has_identity(&HeaderMap::new()));
    }

    #[test]
    fn blank_identity_header_does_not_count() {
        let config = PortalConfig {
            identity_header: Some(HeaderName::from_static("x-auth-user")),
            ..Default::default()
        };
        let mut headers = HeaderMap::new();
        assert!(!config.has_identity(&headers));

        headers.insert("x-auth-user", HeaderValue::from_static(""));
        assert!(!config.has_identity(&headers));

        headers.insert("x-auth-user", HeaderValue::from_static("42"));
        assert!(config.has_identity(&headers));
    }

    #[test]
    fn shell_has_mount_point_and_token() {
        let config = PortalConfig::default();
        let doc = config.shell(Some("tok"));
        assert_eq!(doc.meta("csrf-token"), Some("tok"));
        assert!(doc.container("app").is_some());
        assert!(doc.render().into_string().contains("<title>Portal</title>"));
    }
}
