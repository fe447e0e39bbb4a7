mod animation;
mod app;
mod catalog;
mod color;
mod components;
mod transition;
mod viewport;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
