pub mod app;
pub mod cart_drawer;
pub mod login_modal;
pub mod menu_card;
pub mod menu_list;

pub use app::App;
pub use cart_drawer::CartDrawer;
pub use login_modal::LoginModal;
pub use menu_card::MenuCard;
pub use menu_list::MenuList;
