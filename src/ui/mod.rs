pub mod dialogs;
pub mod grid;
pub mod notice;
pub mod panels;
pub mod splash;
