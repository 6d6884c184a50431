//! oneshotd - One-Shot HTTP Responder
//!
//! Core library for parsing a single HTTP/1.x request from a byte stream and
//! writing exactly one file-backed response.

pub mod config;
pub mod files;
pub mod http;
