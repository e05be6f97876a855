pub mod config;
pub mod dto;
pub mod middleware;
pub mod routes {
    pub mod health;
    pub mod hello;

    mod app;
    pub use app::{configure_app, not_found};
}

pub mod utils;
