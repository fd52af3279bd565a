pub mod app;
pub mod components;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;
pub mod theme;
