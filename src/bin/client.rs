//! Browser entry point. Build for wasm32 with the `client` feature.

fn main() {
    console_error_panic_hook::set_once();
    litterview::client::console(log::LevelFilter::Info).expect("initialize logger");
    leptos::mount::mount_to_body(litterview::client::App);
}
