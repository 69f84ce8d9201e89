pub mod app;
pub mod catalog;
pub mod error;
pub mod fs_utils;
pub mod image_utils;
pub mod navigator;
pub mod session;
pub mod timer;
pub mod ui;
