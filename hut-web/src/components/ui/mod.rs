pub mod gift_box;
pub mod menu_tabs;
pub mod mission_card;
pub mod nutrition_sheet;
pub mod product_card;
pub mod progress_bar;
pub mod skeleton;
pub mod spinner_panel;
