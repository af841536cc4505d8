//! Google Gemini API client.
//!
//! Implements the `AiClient` trait for Gemini models via the
//! Generative Language API `generateContent` method.

mod api;
mod client;
mod config;
mod models;

pub use client::GeminiClient;
pub use config::GeminiConfig;
pub use models::ModelInfo;
