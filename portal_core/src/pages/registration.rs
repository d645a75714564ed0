use maud::{html, Markup};

use crate::{
    form::{Field, Form, InputKind},
    route::Page,
    token::TokenProvider,
};

use super::{card::card, PRIMARY_BUTTON};

/// The registration form, posted to `/register`. Whether the password and its
/// confirmation match is left to the server.
pub fn registration_form<T: TokenProvider + ?Sized>(tokens: &T) -> Form {
    Form {
        action: Page::Register.action(),
        fields: vec![
            Field::token(tokens),
            Field::input("name", InputKind::Text, "Name"),
            Field::input("email", InputKind::Email, "Email"),
            Field::input("password", InputKind::Password, "Password"),
            Field::input("password_confirmation", InputKind::Password, "Confirm Password"),
        ],
        submit_label: "Register",
        submit_class: PRIMARY_BUTTON,
        class: Some("space-y-4"),
    }
}

pub fn registration<T: TokenProvider + ?Sized>(tokens: &T) -> Markup {
    card(Page::Register.heading(), html! { (registration_form(tokens)) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_has_four_editable_fields_and_a_token() {
        let form = registration_form("tok");
        let names: Vec<_> = form.user_editable_fields().map(|f| f.name).collect();
        assert_eq!(names, ["name", "email", "password", "password_confirmation"]);
        assert!(form.user_editable_fields().all(|f| f.required));
        assert_eq!(form.field("name").unwrap().kind, InputKind::Text);
        assert_eq!(form.field("email").unwrap().kind, InputKind::Email);
        assert_eq!(form.field("password").unwrap().kind, InputKind::Password);
        assert_eq!(form.hidden_fields().count(), 1);
        assert_eq!(form.field("_token").unwrap().value.as_deref(), Some("tok"));
    }

    #[test]
    fn confirmation_is_a_password_input() {
        let form = registration_form(&None::<String>);
        let confirm = form.field("password_confirmation").unwrap();
        assert_eq!(confirm.kind, InputKind::Password);
        assert_eq!(confirm.placeholder, Some("Confirm Password"));
    }

    #[test]
    fn registration_posts_to_register() {
        let html = registration("tok").into_string();
        assert!(html.contains(r#"action="/register""#), "{html}");
        assert!(html.contains(r#"name="password_confirmation""#));
        assert!(html.contains(">Register</button>"));
    }
}
