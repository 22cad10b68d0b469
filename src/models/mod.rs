pub mod auth;
pub mod cart;
pub mod menu;

pub use auth::{CheckoutOutcome, CheckoutRequest, LoginOutcome, LoginRequest, ServerMessage};
pub use cart::{Cart, CartItem};
pub use menu::MenuItem;
