use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PortalError {
    #[error("{0} is not a valid page name. Valid values are 'login', 'register', 'dashboard'")]
    InvalidPageName(String),
    #[error("The mount point id must not be empty")]
    EmptyMountId,
}
