pub mod config;
pub mod error;
pub mod game;
pub mod model;
pub mod score_store;
pub mod server;
