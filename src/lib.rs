pub mod activity;
pub mod cli;
pub mod config;
pub mod feed;
pub mod format;
pub mod logging;
pub mod render;
