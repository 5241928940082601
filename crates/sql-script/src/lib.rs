//! Script lifecycle and the host boundary.
//!
//! A [`Script`] owns the text rope and the staged pipeline outputs
//! (scan, parse, analyze); the [`ScriptRegistry`] exposes the whole engine
//! behind opaque handles and serialized [`ResultBuffer`]s, which is the
//! surface a foreign-language bridge forwards to editors.
//!
//! The pipeline is single-threaded and cooperative: no operation
//! suspends, every stage either completes or reports a [`StatusCode`].
//! Stage outputs are immutable `Arc`s; re-running a stage swaps the
//! pointer, it never mutates in place.

mod api;
mod cursor;
mod script;
mod status;

pub use api::{
    AnalyzePayload, CompletionPayload, ParsePayload, ResultBuffer, ScanPayload, ScriptHandle,
    ScriptRegistry,
};
pub use cursor::ScriptCursor;
pub use script::Script;
pub use status::StatusCode;
