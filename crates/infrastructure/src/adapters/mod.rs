//! Adapters binding application ports to concrete providers

mod inference_adapter;
mod speech_adapter;

pub use inference_adapter::ChatInferenceAdapter;
pub use speech_adapter::SpeechAdapter;
