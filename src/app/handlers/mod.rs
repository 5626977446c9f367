//! Feature-Handler für mutierende Commands.

pub mod construction;
pub mod session;
pub mod tooling;
