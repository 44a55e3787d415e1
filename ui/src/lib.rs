use formgen::config::Settings;
use leptos::prelude::*;

mod components;

use components::form_generator::FormGenerator;

#[component]
pub fn App() -> impl IntoView {
    let settings = Settings::new().unwrap_or_else(|e| {
        log::warn!("Falling back to default settings: {}", e);
        Settings::default()
    });

    view! {
        <div class="min-h-screen bg-gray-100 p-4">
            <h1 class="text-center text-2xl font-bold my-4">"Dynamic Form Generator"</h1>
            <FormGenerator settings=settings />
        </div>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(App);
}
