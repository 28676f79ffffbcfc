pub mod commands;
pub mod icon;
pub mod utils;
