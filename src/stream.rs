//! Line-by-line stream processing

use std::io::{BufRead, Write};

use tracing::warn;

use crate::error::Result;
use crate::highlight::colorize_line;
use crate::style::StyleTable;

/// Split a raw line into its body and its `\n` or `\r\n` terminator
fn split_terminator(line: &[u8]) -> (&[u8], &[u8]) {
    let body_len = match line {
        [.., b'\r', b'\n'] => line.len() - 2,
        [.., b'\n'] => line.len() - 1,
        _ => line.len(),
    };
    line.split_at(body_len)
}

/// Colorize every line of `input` into `output`
///
/// Patterns are matched against the line without its terminator, so `$`
/// anchors at the end of the text; the terminator is written back unchanged
/// after the rendered body. Input bytes are never re-encoded. A read error
/// ends the stream; write errors are returned. Returns the number of lines
/// processed.
pub fn colorize_stream<R: BufRead, W: Write>(
    table: &StyleTable,
    mut input: R,
    mut output: W,
) -> Result<usize> {
    let mut buf = Vec::new();
    let mut count = 0;

    loop {
        buf.clear();
        match input.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                warn!(error = %e, "input read failed, stopping");
                break;
            }
        }

        let (body, terminator) = split_terminator(&buf);
        output.write_all(&colorize_line(table, body))?;
        output.write_all(terminator)?;
        count += 1;
    }

    output.flush()?;
    Ok(count)
}
