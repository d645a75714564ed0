use clap::Parser;
use portal_core::route::Page;

pub fn parse_args() -> Args {
    Args::parse()
}

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(
        short,
        long,
        default_value = "127.0.0.1",
        help = "Address to bind the server to."
    )]
    pub bind: String,

    #[arg(
        short,
        long,
        help = "Specify a port to serve the site on. If not specified, a random unused port is chosen."
    )]
    pub port: Option<u16>,

    #[arg(
        short,
        long,
        default_value = "false",
        help = "Whether to automatically open the login page in the browser."
    )]
    pub auto_open: bool,

    #[arg(
        long,
        default_value = "login",
        help = "Page to open when --auto-open is given: 'login', 'register' or 'dashboard'."
    )]
    pub open_page: Page,

    #[arg(long, default_value = "Portal", help = "Title of the shell page.")]
    pub title: String,

    #[arg(
        long,
        default_value = portal_core::app::DEFAULT_MOUNT_ID,
        help = "Id of the element the pages are mounted into."
    )]
    pub mount_id: String,

    #[arg(
        long,
        default_value = "x-csrf-token",
        help = "Request header the authentication backend uses to pass the session's CSRF token. \
        The token is copied into the shell's 'csrf-token' meta tag and from there into every form."
    )]
    pub csrf_header: String,

    #[arg(
        long,
        help = "Request header set by the authentication backend for signed-in users. If specified, \
        requests for /dashboard without it are redirected to /login. If not specified, gating \
        /dashboard is left entirely to the backend."
    )]
    pub identity_header: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["portalweb"]);
        assert_eq!(args.bind, "127.0.0.1");
        assert_eq!(args.port, None);
        assert!(!args.auto_open);
        assert_eq!(args.mount_id, "app");
        assert_eq!(args.csrf_header, "x-csrf-token");
        assert_eq!(args.identity_header, None);
        assert_eq!(args.open_page, Page::Login);
    }

    #[test]
    fn open_page() {
        let args = Args::parse_from(["portalweb", "-a", "--open-page", "Register"]);
        assert!(args.auto_open);
        assert_eq!(args.open_page, Page::Register);
    }

    #[test]
    fn unknown_open_page_is_rejected() {
        let result = Args::try_parse_from(["portalweb", "--open-page", "logout"]);
        assert!(result.is_err());
    }

    #[test]
    fn identity_header() {
        let args = Args::parse_from(["portalweb", "--identity-header", "x-user", "-p", "8080"]);
        assert_eq!(args.identity_header.as_deref(), Some("x-user"));
        assert_eq!(args.port, Some(8080));
    }
}
