//! Client-side state synchronization for the soundscore review platform.
//!
//! [`store`] holds the client's copy of server data, [`operations`] keeps it
//! in step with the API, and [`infra`] provides endpoints, transport and
//! config.

pub mod domain;
pub mod infra;
pub mod operations;
pub mod store;

pub use operations::Client;
pub use store::Store;
