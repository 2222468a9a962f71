//! Application services

mod reply_service;
mod voice_chat_service;

pub use reply_service::ReplyService;
pub use voice_chat_service::VoiceChatService;
