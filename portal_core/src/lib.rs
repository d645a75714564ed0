#![forbid(unsafe_code)]

pub mod app;
mod error;
pub mod form;
pub mod pages;
pub mod route;
pub mod shell;
pub mod token;

pub use error::PortalError;
