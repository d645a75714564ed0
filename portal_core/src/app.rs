use log::{debug, warn};

use crate::{
    error::PortalError,
    route::{Page, ViewRouter},
    shell::ShellDocument,
    token::TokenProvider,
};

pub const DEFAULT_MOUNT_ID: &str = "app";

/// Mounts the routed page into a shell document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    mount_id: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            mount_id: DEFAULT_MOUNT_ID.to_string(),
        }
    }
}

impl App {
    pub fn new<S: Into<String>>(mount_id: S) -> Result<Self, PortalError> {
        let mount_id = mount_id.into();
        if mount_id.trim().is_empty() {
            return Err(PortalError::EmptyMountId);
        }

        Ok(Self { mount_id })
    }

    pub fn mount_id(&self) -> &str {
        &self.mount_id
    }

    /// Renders the page chosen by `router` into the document's mount point,
    /// reading the anti-forgery token from the document's meta tag. Returns
    /// the page that was mounted, or None (and leaves the document alone) if
    /// the document has no mount point with our id.
    pub fn mount(&self, document: &mut ShellDocument, router: &ViewRouter) -> Option<Page> {
        let token = document.csrf_token();

        let Some(container) = document.container_mut(&self.mount_id) else {
            warn!("No mount point with id {:?}, nothing rendered", self.mount_id);
            return None;
        };

        let page = router.select();
        container.render(page.render(&token));
        debug!("Mounted {page} into #{}", container.id());
        Some(page)
    }
}
