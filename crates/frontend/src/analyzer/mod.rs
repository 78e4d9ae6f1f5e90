pub mod api;
pub mod segmentation;
pub mod ui;
