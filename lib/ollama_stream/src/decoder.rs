use std::io::BufRead;

/// Splits a newline-delimited response body into raw records.
///
/// Reads one record at a time from the underlying reader, so memory stays bounded by the
/// longest line instead of the whole body. Empty lines are skipped, a trailing `\r` is
/// stripped, and a final line without a terminator is still yielded once the reader is
/// exhausted. The iterator ends when the stream closes and can't be restarted.
#[derive(Debug)]
pub struct LineDecoder<R> {
    reader: R,
    done: bool,
}

impl<R: BufRead> LineDecoder<R> {
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for LineDecoder<R> {
    type Item = std::io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let mut line = Vec::new();

            match self.reader.read_until(b'\n', &mut line) {
                Ok(0) => self.done = true,
                Ok(_) => {
                    if line.last() == Some(&b'\n') {
                        line.pop();
                    }
                    if line.last() == Some(&b'\r') {
                        line.pop();
                    }

                    if line.iter().all(u8::is_ascii_whitespace) {
                        continue;
                    }

                    return Some(Ok(line));
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }

        None
    }
}
