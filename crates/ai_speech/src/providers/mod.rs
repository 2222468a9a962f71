//! Concrete speech provider implementations

pub mod openai;
