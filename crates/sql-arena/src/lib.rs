//! Append-only bulk storage for the SQL script engine.
//!
//! The pipeline stages allocate in bursts and read back by index: the parser
//! appends AST nodes while reducing, the scanner interns names, completion
//! keeps a bounded candidate set. This crate provides the three storage
//! primitives behind that:
//!
//! - [`ChunkBuffer`] - an append-only sequence stored as geometrically
//!   growing chunks. Appending never moves prior elements, so indexes stay
//!   stable for the lifetime of the buffer.
//! - [`StringPool`] - interned copies of scanned text, addressed by id.
//! - [`TopKHeap`] - a fixed-capacity bounded min-heap for top-k selection.

mod chunk_buffer;
mod string_pool;
mod topk;

pub use chunk_buffer::ChunkBuffer;
pub use string_pool::{PooledString, StringPool};
pub use topk::{TopKEntry, TopKHeap};
