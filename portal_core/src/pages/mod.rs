//! The pages module contains the three page components the view router can
//! mount. Each is a card wrapped around a single form, built by its `*_form`
//! function so the form can be inspected on its own.
//!
//! The shared card layout lives in the 'card' module.

pub(crate) mod card;
pub mod dashboard;
pub mod login;
pub mod registration;

const PRIMARY_BUTTON: &str = "w-full bg-indigo-600 text-white py-2 rounded-lg";
