#![allow(warnings)]
//! Property Form Frontend Entry Point

mod app;
mod components;
mod form;
mod models;
mod store;
mod validate;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
