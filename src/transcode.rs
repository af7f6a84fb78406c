//! Core line-transform engine
//!
//! Streams one input source to the output, one line at a time, applying the
//! numbering, end-marker, and blank-squashing transformations selected in
//! [`CatOptions`]. The line counter and the previous-line-was-blank flag are
//! local to a single call, so every source starts with fresh state.

use crate::error::CatResult;
use crate::options::CatOptions;
use std::io::{BufRead, Write};

/// Stream-transform one input source into formatted output lines.
///
/// Lines are read with a growable buffer, so there is no upper bound on line
/// length and long lines are never split. A final line without a terminator
/// is written with one. Read and write failures propagate to the caller;
/// clean end-of-stream ends the loop normally.
pub fn transcode<R: BufRead, W: Write>(
    mut reader: R,
    out: &mut W,
    options: &CatOptions,
) -> CatResult<()> {
    let mut buf: Vec<u8> = Vec::new();
    let mut counter: u64 = 0;
    let mut prev_blank = false;

    loop {
        buf.clear();
        let n = reader.read_until(b'\n', &mut buf)?;
        if n == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        let blank = buf.is_empty();

        // A blank line directly after another blank line produces nothing
        // and does not advance the counter.
        if options.squash_blank && blank && prev_blank {
            continue;
        }
        prev_blank = blank;

        // -n numbers every emitted line; -b only nonempty ones. When both
        // are set, -n wins and blank lines are numbered too.
        if options.number_all || (options.number_nonblank && !blank) {
            counter += 1;
        }

        if options.numbering() {
            out.write_all(b"\t")?;
            if options.number_all || (options.number_nonblank && !blank) {
                write!(out, "{}\t", counter)?;
            } else {
                // Unnumbered blank line under -b keeps the column width
                out.write_all(b"\t")?;
            }
        }

        out.write_all(&buf)?;
        if options.show_end {
            out.write_all(b"$")?;
        }
        out.write_all(b"\n")?;
    }

    Ok(())
}
