//! Frame parsing and verdict engine for the shrike XDP filter.
//!
//! The crate is `no_std`, allocation-free, and panic-free on any input:
//! every header reader proves the bytes it is about to touch are inside the
//! frame before touching them, and the engine fails open. A frame the
//! parser cannot make sense of is passed, never dropped.

#![no_std]

pub mod cursor;
pub mod engine;
pub mod err;
pub mod eth;
pub mod icmp;
pub mod ip;
pub mod tcp;
pub mod udp;

pub use cursor::Cursor;
pub use engine::{evaluate, Verdict};
pub use err::ParseError;
