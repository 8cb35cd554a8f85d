pub mod popup;
pub mod scene;
pub mod tables;
