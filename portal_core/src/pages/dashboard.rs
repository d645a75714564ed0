use maud::{html, Markup};

use crate::{form::{Field, Form}, route::Page, token::TokenProvider};

/// The dashboard's only form is the logout button.
pub fn logout_form<T: TokenProvider + ?Sized>(tokens: &T) -> Form {
    Form {
        action: Page::Dashboard.action(),
        fields: vec![Field::token(tokens)],
        submit_label: "Logout",
        submit_class: "bg-red-500 text-white px-6 py-2 rounded-lg",
        class: None,
    }
}

pub fn dashboard<T: TokenProvider + ?Sized>(tokens: &T) -> Markup {
    html! {
        div class="min-h-screen flex items-center justify-center bg-gray-100" {
            div class="bg-white p-8 rounded-xl shadow-lg text-center" {
                h2 class="text-2xl font-bold mb-4" { (Page::Dashboard.heading()) }
                p class="mb-6" { "Welcome to your dashboard!" }
                (logout_form(tokens))
            }
        }
    }
}
