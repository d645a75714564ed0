//! The views module contains the handlers that return complete pages. Each
//! GET route serves the same shell and lets the view router decide which
//! page component ends up in it.
//!
//! Page components themselves live in `portal_core::pages`.

pub(crate) mod page;
