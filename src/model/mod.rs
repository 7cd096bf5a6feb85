//! Wire-level DTOs shared by the HTTP controllers.
//!
//! These types mirror the JSON bodies exchanged with callers: the generic error
//! body returned on failure and the Discord interaction payloads received on the
//! webhook and sent back as responses.

pub mod api;
pub mod interaction;
