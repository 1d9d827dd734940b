//! Infrastructure layer - ports and adapters.

pub mod clock;
pub mod config;
pub mod events;
pub mod locks;
pub mod memory;
pub mod ports;
