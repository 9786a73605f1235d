//! Name submission form.
//!
//! A one-field form that accepts a person's name, rejects anything that is
//! not made of ASCII letters and whitespace, and on success shows
//! `Name: {name}` to the user and records the same line in the
//! `assignment` log channel.

pub mod api;
pub mod config;
pub mod form;
pub mod models;
pub mod services;
