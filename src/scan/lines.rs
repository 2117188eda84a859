//! Line reading with single-byte decoding.
//!
//! Every byte is mapped to the `char` with the same code point (ISO-8859-1),
//! so any file, binary ones included, splits into lines without a decode
//! error. `\n`, `\r\n` and a lone `\r` all end a line; the terminator is not
//! part of the returned text.

use std::io::{self, BufRead};

/// Decode bytes as ISO-8859-1.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Iterator over the decoded lines of a reader.
#[derive(Debug)]
pub struct Latin1Lines<R> {
    reader:   R,
    line:     Vec<u8>,
    skip_lf:  bool,
    finished: bool
}

/// Read `reader` as ISO-8859-1 lines.
pub fn latin1_lines<R: BufRead>(reader: R) -> Latin1Lines<R> {
    Latin1Lines {
        reader,
        line: Vec::new(),
        skip_lf: false,
        finished: false
    }
}

impl<R: BufRead> Iterator for Latin1Lines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        self.line.clear();
        loop {
            let available = match self.reader.fill_buf() {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            };
            if available.is_empty() {
                self.finished = true;
                return (!self.line.is_empty()).then(|| Ok(decode_latin1(&self.line)));
            }
            // `\n` following a `\r` that ended the previous line
            if self.skip_lf {
                self.skip_lf = false;
                if available[0] == b'\n' {
                    self.reader.consume(1);
                    continue;
                }
            }
            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(pos) => {
                    self.skip_lf = available[pos] == b'\r';
                    self.line.extend_from_slice(&available[..pos]);
                    self.reader.consume(pos + 1);
                    return Some(Ok(decode_latin1(&self.line)));
                }
                None => {
                    let len = available.len();
                    self.line.extend_from_slice(available);
                    self.reader.consume(len);
                }
            }
        }
    }
}
