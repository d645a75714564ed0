//! A small model of the HTML forms the pages render. Pages build a `Form`
//! and render it, which lets callers inspect the fields without having to
//! pick apart markup.

use maud::{html, Markup, Render};

use crate::token::{TokenProvider, TOKEN_FIELD};

const INPUT_CLASS: &str = "w-full px-4 py-2 border rounded-lg";

/// The `type` attribute of an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Password,
    Hidden,
}

impl InputKind {
    pub fn as_str(self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Email => "email",
            InputKind::Password => "password",
            InputKind::Hidden => "hidden",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub kind: InputKind,
    pub placeholder: Option<&'static str>,
    pub required: bool,
    pub value: Option<String>,
}

impl Field {
    /// A required, user-editable input.
    pub fn input(name: &'static str, kind: InputKind, placeholder: &'static str) -> Self {
        Self {
            name,
            kind,
            placeholder: Some(placeholder),
            required: true,
            value: None,
        }
    }

    /// The hidden anti-forgery field. If there is no token the field is
    /// rendered without a value.
    pub fn token<T: TokenProvider + ?Sized>(tokens: &T) -> Self {
        Self {
            name: TOKEN_FIELD,
            kind: InputKind::Hidden,
            placeholder: None,
            required: false,
            value: tokens.csrf_token(),
        }
    }

    pub fn is_user_editable(&self) -> bool {
        self.kind != InputKind::Hidden
    }
}

impl Render for Field {
    fn render(&self) -> Markup {
        if self.is_user_editable() {
            html! {
                input class=(INPUT_CLASS) type=(self.kind.as_str()) name=(self.name)
                    placeholder=[self.placeholder] value=[self.value.as_deref()] required[self.required];
            }
        } else {
            html! {
                input type="hidden" name=(self.name) value=[self.value.as_deref()];
            }
        }
    }
}

/// A form that posts to `action`. Submission is a plain browser navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub action: &'static str,
    pub fields: Vec<Field>,
    pub submit_label: &'static str,
    pub submit_class: &'static str,
    pub class: Option<&'static str>,
}

impl Form {
    pub fn method(&self) -> &'static str {
        "POST"
    }

    pub fn user_editable_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.is_user_editable())
    }

    pub fn hidden_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| !f.is_user_editable())
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

impl Render for Form {
    fn render(&self) -> Markup {
        html! {
            form method=(self.method()) action=(self.action) class=[self.class] {
                @for field in &self.fields {
                    (field)
                }
                button class=(self.submit_class) { (self.submit_label) }
            }
        }
    }
}
