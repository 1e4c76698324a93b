pub mod command;
pub mod entity;
pub mod error;
pub mod gui;
pub mod logging;
pub mod plugin;
pub mod server;
pub mod util;
