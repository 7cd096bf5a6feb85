pub mod interaction;
pub mod whitelist;
