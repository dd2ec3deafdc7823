//! Request handlers, one module per endpoint family

pub mod applications;
pub mod chat;
pub mod complaints;
pub mod voice;
