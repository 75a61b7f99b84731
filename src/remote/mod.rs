// src/remote/mod.rs
pub mod client;
pub mod models;

#[allow(unused_imports)]
pub use client::{normalize, RemoteClient, RemoteOutcome, REMOTE_TIMEOUT};
