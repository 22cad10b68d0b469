// ============================================================================
// STOREFRONT PWA - CARTA DIGITAL (RUST PURO)
// ============================================================================
// - Components: página única + modales (Yew)
// - Services: SOLO comunicación API
// - Models: carta, carrito y tipos de wire
// - Config: URL del backend inyectada en tiempo de compilación
// ============================================================================

pub mod components;
pub mod config;
pub mod models;
pub mod services;

pub use components::App;
