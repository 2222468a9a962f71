//! Ports the application layer depends on
//!
//! Infrastructure adapters implement these traits; services only see the
//! trait objects.

mod inference_port;
mod speech_port;

pub use inference_port::{InferencePort, InferenceResult};
pub use speech_port::{SpeechPort, SynthesisResult, TranscriptionResult};

#[cfg(any(test, feature = "test-mocks"))]
pub use inference_port::MockInferencePort;
#[cfg(any(test, feature = "test-mocks"))]
pub use speech_port::MockSpeechPort;
