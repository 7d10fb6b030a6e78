//! Command implementations.

pub mod kubernetes;
pub mod network;
pub mod size;
pub mod template;
