//! Console client for k-in-a-row.
//!
//! Thin I/O layer around [`kinarow_core`]: a command loop, strict
//! point parsing, and text rendering over any `BufRead`/`Write` pair.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod console;
