use std::{fmt::Display, str::FromStr};

use log::debug;
use maud::Markup;

use crate::{error::PortalError, pages, token::TokenProvider};

/// The pages the view router can choose between.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Login,
    Register,
    Dashboard,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Login, Page::Register, Page::Dashboard];

    /// Maps a request path onto a page. Only exact matches select Register or
    /// Dashboard, everything else (including "/", "" and "/dashboard/") falls
    /// back to Login.
    pub fn from_path(path: &str) -> Self {
        match path {
            "/register" => Page::Register,
            "/dashboard" => Page::Dashboard,
            _ => Page::Login,
        }
    }

    /// The GET path the page is served on.
    pub fn path(self) -> &'static str {
        match self {
            Page::Login => "/login",
            Page::Register => "/register",
            Page::Dashboard => "/dashboard",
        }
    }

    /// The path the page's form posts to.
    pub fn action(self) -> &'static str {
        match self {
            Page::Login => "/login",
            Page::Register => "/register",
            Page::Dashboard => "/logout",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Page::Login => "Customer Login",
            Page::Register => "Register",
            Page::Dashboard => "Dashboard",
        }
    }

    /// Renders the page component, taking the anti-forgery token from `tokens`.
    pub fn render<T: TokenProvider + ?Sized>(self, tokens: &T) -> Markup {
        match self {
            Page::Login => pages::login::login(tokens),
            Page::Register => pages::registration::registration(tokens),
            Page::Dashboard => pages::dashboard::dashboard(tokens),
        }
    }
}

impl Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Page::Login => write!(f, "login"),
            Page::Register => write!(f, "register"),
            Page::Dashboard => write!(f, "dashboard"),
        }
    }
}

impl FromStr for Page {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "login" => Ok(Page::Login),
            "register" => Ok(Page::Register),
            "dashboard" => Ok(Page::Dashboard),
            _ => Err(PortalError::InvalidPageName(s.to_string())),
        }
    }
}

/// Chooses which page to render for the current path. The path is injected
/// rather than read from the request so that selection is a pure function.
#[derive(Debug, Clone)]
pub struct ViewRouter {
    current_path: String,
}

impl ViewRouter {
    pub fn new<S: Into<String>>(current_path: S) -> Self {
        Self {
            current_path: current_path.into(),
        }
    }

    pub fn select(&self) -> Page {
        let page = Page::from_path(&self.current_path);
        debug!("Path {:?} routed to {page}", self.current_path);
        page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_path_selects_registration() {
        assert_eq!(ViewRouter::new("/register").select(), Page::Register);
    }

    #[test]
    fn dashboard_path_selects_dashboard() {
        assert_eq!(ViewRouter::new("/dashboard").select(), Page::Dashboard);
    }

    #[test]
    fn everything_else_selects_login() {
        for path in ["/login", "/", "", "/foo", "register", "/Register", "/dashboard/", "/register/extra"] {
            assert_eq!(ViewRouter::new(path).select(), Page::Login, "path = {path:?}");
        }
    }

    #[test]
    fn query_string_is_not_part_of_the_path() {
        // Callers pass the path component only; a raw query string is not stripped.
        assert_eq!(Page::from_path("/dashboard?tab=1"), Page::Login);
    }

    #[test]
    fn actions_point_at_the_collaborator_endpoints() {
        assert_eq!(Page::Login.action(), "/login");
        assert_eq!(Page::Register.action(), "/register");
        assert_eq!(Page::Dashboard.action(), "/logout");
    }

    #[test]
    fn page_paths_route_back_to_themselves() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), page);
        }
    }

    #[test]
    fn parse_page_names() {
        assert_eq!("login".parse::<Page>(), Ok(Page::Login));
        assert_eq!(" Dashboard ".parse::<Page>(), Ok(Page::Dashboard));
        assert_eq!(Page::Register.to_string().parse::<Page>(), Ok(Page::Register));
        match "logout".parse::<Page>() {
            Err(PortalError::InvalidPageName(name)) => assert_eq!(name, "logout"),
            x => panic!("Unexpected result from parse(): {:?}", x),
        }
    }
}
