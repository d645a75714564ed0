use maud::{html, Markup, DOCTYPE};

use crate::token::{TokenProvider, CSRF_META_NAME};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub name: String,
    pub content: String,
}

/// An element that a page component can be mounted into.
#[derive(Debug, Clone)]
pub struct MountPoint {
    id: String,
    content: Option<Markup>,
}

impl MountPoint {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn content(&self) -> Option<&Markup> {
        self.content.as_ref()
    }

    /// Replaces whatever is currently mounted with `markup`.
    pub fn render(&mut self, markup: Markup) {
        self.content = Some(markup);
    }
}

/// The server-rendered document a page is mounted into. It carries the
/// anti-forgery token as a meta tag and one or more empty mount points.
#[derive(Debug, Clone, Default)]
pub struct ShellDocument {
    title: String,
    metas: Vec<MetaTag>,
    stylesheets: Vec<String>,
    mount_points: Vec<MountPoint>,
}

impl ShellDocument {
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_meta<N: Into<String>, C: Into<String>>(mut self, name: N, content: C) -> Self {
        self.metas.push(MetaTag {
            name: name.into(),
            content: content.into(),
        });
        self
    }

    /// Adds the `csrf-token` meta tag, but only if there is a token.
    pub fn with_csrf_token(self, token: Option<&str>) -> Self {
        match token {
            Some(token) => self.with_meta(CSRF_META_NAME, token),
            None => self,
        }
    }

    pub fn with_stylesheet<S: Into<String>>(mut self, href: S) -> Self {
        self.stylesheets.push(href.into());
        self
    }

    pub fn with_mount_point<S: Into<String>>(mut self, id: S) -> Self {
        self.mount_points.push(MountPoint {
            id: id.into(),
            content: None,
        });
        self
    }

    /// Returns the content of the first meta tag called `name`.
    pub fn meta(&self, name: &str) -> Option<&str> {
        self.metas
            .iter()
            .find(|m| m.name == name)
            .map(|m| m.content.as_str())
    }

    pub fn container(&self, id: &str) -> Option<&MountPoint> {
        self.mount_points.iter().find(|m| m.id == id)
    }

    pub fn container_mut(&mut self, id: &str) -> Option<&mut MountPoint> {
        self.mount_points.iter_mut().find(|m| m.id == id)
    }

    pub fn render(&self) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    @for tag in &self.metas {
                        meta name=(tag.name) content=(tag.content);
                    }
                    title { (self.title) }
                    @for href in &self.stylesheets {
                        link href=(href) rel="stylesheet" type="text/css";
                    }
                }
                body {
                    @for mount_point in &self.mount_points {
                        div id=(mount_point.id) {
                            @if let Some(content) = &mount_point.content {
                                (content)
                            }
                        }
                    }
                }
            }
        }
    }
}

impl TokenProvider for ShellDocument {
    fn csrf_token(&self) -> Option<String> {
        self.meta(CSRF_META_NAME).map(str::to_string)
    }
}
