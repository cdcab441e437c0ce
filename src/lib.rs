pub mod combo;
pub mod config;
pub mod game;
pub mod input;
pub mod util;
