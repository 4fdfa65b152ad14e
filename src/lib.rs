// src/lib.rs

//! Committee Search Library

pub mod error;
pub mod models;
pub mod pipeline;
pub mod search;
pub mod server;
pub mod services;
pub mod storage;
pub mod utils;
