//! Use-case services for presentation collaborators.
//!
//! # Responsibility
//! - Give console and GUI front ends one entry point for "line in, text out".
//! - Keep parsing, execution and persistence behind that entry point.

pub mod session;
