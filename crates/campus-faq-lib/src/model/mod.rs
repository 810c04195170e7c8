//! Value types shared between the core pipeline and the presentation shell.

pub mod conversation_turn;
pub mod knowledge_entry;
