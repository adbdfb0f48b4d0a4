#[cfg(feature = "web")]
use leptos::mount::mount_to_body;
#[cfg(feature = "web")]
use leptos::prelude::*;
#[cfg(feature = "web")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "web")]
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(|| view! { <App/> });
}

pub mod app;
pub mod components;
pub mod greeting;
pub mod pages;
pub mod scroll;

pub use crate::app::App;
