//! Infrastructure layer (adapters/implementations).
//!
//! This module contains the IO-facing pieces: endpoint paths, the HTTP
//! transport and the on-disk config.

pub mod app_config;
pub mod endpoints;
pub mod http;
