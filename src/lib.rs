//! cat implementation in Rust
//!
//! This crate provides a line-oriented concatenation utility: it reads a
//! sequence of named inputs (or standard input) and writes their contents to
//! the output stream, applying line-numbering, blank-line-squashing, and
//! end-of-line-marking transformations selected by flags.

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]

pub mod error;
pub mod options;

// Core transcoding implementation
pub mod sources;
pub mod transcode;

// Re-export commonly used types
pub use error::{CatError, CatResult};
pub use options::CatOptions;
pub use sources::Source;

use std::io::{BufRead, Write};

/// Process exit codes: success, invalid flag, file access failure
pub const EXIT_SUCCESS: i32 = 0;
pub const USAGE_FAILURE: i32 = 1;
pub const ACCESS_FAILURE: i32 = 2;

/// Concatenate the given sources onto `out` in order, formatted per
/// `options`, and return the process exit code.
///
/// Sources are opened immediately before they are transcoded and released
/// as soon as they finish. A failure to open a source aborts the whole run;
/// everything emitted for earlier sources is flushed to `out` before the
/// error returns. An I/O failure mid-stream is reported on stderr and skips
/// to the next source, turning the final exit code into an access failure.
pub fn cat<W: Write>(options: &CatOptions, sources: &[Source], out: &mut W) -> CatResult<i32> {
    let streams = sources
        .iter()
        .map(|source| (source.to_string(), source.open()));
    cat_streams(options, streams, out)
}

/// Inner driver loop over already-resolved streams.
///
/// The iterator is consumed lazily, so each source is opened only when its
/// turn comes and sources after a failed open are never touched.
fn cat_streams<W, I>(options: &CatOptions, streams: I, out: &mut W) -> CatResult<i32>
where
    W: Write,
    I: Iterator<Item = (String, CatResult<Box<dyn BufRead>>)>,
{
    let mut status = EXIT_SUCCESS;

    for (name, opened) in streams {
        let reader = match opened {
            Ok(reader) => reader,
            Err(err) => {
                // Keep what earlier sources produced even though the run
                // aborts here.
                out.flush()?;
                return Err(err);
            }
        };
        if let Err(err) = transcode::transcode(reader, out, options) {
            eprintln!("mycat: {}: {}", name, err);
            status = ACCESS_FAILURE;
        }
    }

    out.flush()?;
    Ok(status)
}
