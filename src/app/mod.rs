pub mod api;
pub mod cli;
pub mod config;
mod context;
pub mod navigator;
pub mod query_loop;

pub use context::AppContext;
