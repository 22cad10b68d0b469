use storefront_pwa::config::CONFIG;
use storefront_pwa::App;

fn main() {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::default());
    }
    log::info!("🍕 La Carta - arrancando ({})", CONFIG.environment);
    log::info!("🌐 Backend: {}", CONFIG.backend_url());

    yew::Renderer::<App>::new().render();
}
