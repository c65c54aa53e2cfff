//! Declarative configuration client for the Kong gateway admin API.
//!
//! The crate is organised around one generic request/response protocol
//! ([`engine::executor`]) driven by operation descriptors
//! ([`engine::descriptor`]). Resource payload shapes live in [`resources`],
//! the capability-scoped operation traits in [`client`], and rendering of
//! responses in [`output`].

pub mod cli;
pub mod client;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod logging;
pub mod output;
pub mod resources;
