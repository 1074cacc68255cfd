// ## src/codec/mod.rs

//! codec/mod.rs
//! CEF encoder, decoder and extension tokenizer.
//!
//! Format notes:
//! - `CEF:0|vendor|product|version|classId|name|severity|k1=v1 k2=v2`
//! - Version 0 only; the version segment is not stored on the event.
//! - The codec is stateless: no I/O, no shared state, safe to call from any thread.

pub mod types;
pub mod encode;
pub mod decode;
pub mod tokenizer;

pub use types::*;
pub use encode::*;
pub use decode::*;
pub use tokenizer::*;
