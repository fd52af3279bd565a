pub mod action;
pub mod command;
pub mod debounce;
pub mod features;
pub mod input;
pub mod r#loop;
pub mod reducer;
pub mod region;
pub mod runtime;
pub mod state;
pub mod ui;
