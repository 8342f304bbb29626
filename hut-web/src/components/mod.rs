pub mod copy_button;
pub mod footer;
pub mod header;
pub mod side_menu;
pub mod ui;
