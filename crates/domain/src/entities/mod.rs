//! Domain entities

mod audio;
mod voice_exchange;

pub use audio::AudioFormat;
pub use voice_exchange::{Reply, ReplySource, VoiceExchange};
