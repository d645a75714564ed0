use maud::{html, Markup};

use crate::{
    form::{Field, Form, InputKind},
    route::Page,
    token::TokenProvider,
};

use super::{card::card, PRIMARY_BUTTON};

/// The login form: email and password, posted to `/login`.
pub fn login_form<T: TokenProvider + ?Sized>(tokens: &T) -> Form {
    Form {
        action: Page::Login.action(),
        fields: vec![
            Field::token(tokens),
            Field::input("email", InputKind::Email, "Email"),
            Field::input("password", InputKind::Password, "Password"),
        ],
        submit_label: "Login",
        submit_class: PRIMARY_BUTTON,
        class: Some("space-y-4"),
    }
}

pub fn login<T: TokenProvider + ?Sized>(tokens: &T) -> Markup {
    card(Page::Login.heading(), html! { (login_form(tokens)) })
}
