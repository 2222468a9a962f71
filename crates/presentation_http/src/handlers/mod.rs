//! Request handlers

pub mod diagnostics;
pub mod health;
pub mod voice_chat;
