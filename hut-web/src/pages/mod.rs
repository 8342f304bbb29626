pub mod games;
pub mod home;
pub mod menu;
pub mod mission;
pub mod not_found;
pub mod offers;
pub mod spinner;
