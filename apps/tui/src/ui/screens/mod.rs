pub mod compare;
pub mod countries;
pub mod country_detail;
pub mod heatmap;
pub mod help;
pub mod network;
pub mod search;
pub mod timeline;
