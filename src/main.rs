#![allow(warnings)]
//! Vibetrack Entry Point

mod app;
mod components;
mod context;
mod download;
mod ids;
mod journal;
mod models;
mod plot;
mod storage;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
