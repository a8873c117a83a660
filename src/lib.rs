// src/lib.rs

pub mod api;
pub mod app;
pub mod assessment;
pub mod breathing;
pub mod community;
pub mod config;
pub mod conversation;
pub mod llm;
pub mod persona;
pub mod relay;
pub mod sos;
