//! JSON API that generates graphs and runs k shortest path queries off the
//! async runtime's worker threads.

pub mod api;
pub mod models;
pub mod server;
