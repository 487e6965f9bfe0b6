//! Line rendering
//!
//! Append-only buffer that interleaves slices of the input line with the
//! codes chosen by the resolver. Input bytes are copied verbatim, so text
//! outside any match is never altered, whatever its encoding.

/// Output buffer for one rendered line
pub struct LineRenderer<'a> {
    line: &'a [u8],
    /// Byte offset of the first input byte not yet copied
    cursor: usize,
    out: Vec<u8>,
}

impl<'a> LineRenderer<'a> {
    pub fn new(line: &'a [u8]) -> Self {
        Self {
            line,
            cursor: 0,
            out: Vec::with_capacity(line.len()),
        }
    }

    /// Copy input bytes up to `position`
    pub fn advance_to(&mut self, position: usize) {
        if position > self.cursor {
            self.out.extend_from_slice(&self.line[self.cursor..position]);
            self.cursor = position;
        }
    }

    /// Append a control code at the current position
    pub fn push_code(&mut self, code: &str) {
        self.out.extend_from_slice(code.as_bytes());
    }

    /// Copy the rest of the line and return the result
    pub fn finish(mut self) -> Vec<u8> {
        self.advance_to(self.line.len());
        self.out
    }
}
