//! Shared utility modules.

pub mod char_buffer;
