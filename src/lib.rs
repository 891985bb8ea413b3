#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod navigation;
pub mod profile;
pub mod reveal;
pub mod scroll;
#[cfg(feature = "ssr")]
pub mod server;
#[cfg(test)]
mod testing;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // already set when the module is re-initialised by the dev reloader
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
