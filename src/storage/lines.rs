use std::io;
use std::io::BufRead;

/// Splits a byte stream into UTF-8 lines ended by `\n`, `\r\n` or a lone `\r`.
///
/// Terminators are not part of the yielded line. A final line without a
/// terminator is still yielded; an empty stream yields nothing.
pub struct InputLines<R: BufRead> {
    reader: R,
    skip_line_feed: bool
}

impl<R: BufRead> InputLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            skip_line_feed: false
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut bytes = Vec::new();
        let mut has_content = false;

        loop {
            let (consumed, terminated) = {
                let available = self.reader.fill_buf()?;

                if available.is_empty() {
                    break;
                }

                //NOTE: The `\n` of a `\r\n` pair may arrive in the next buffer.
                if self.skip_line_feed {
                    self.skip_line_feed = false;

                    if available[0] == b'\n' {
                        (1, false)
                    } else {
                        (0, false)
                    }
                } else {
                    match available.iter().position(|&byte| byte == b'\n' || byte == b'\r') {
                        Some(index) => {
                            bytes.extend_from_slice(&available[..index]);
                            self.skip_line_feed = available[index] == b'\r';
                            (index + 1, true)
                        }
                        None => {
                            bytes.extend_from_slice(available);
                            has_content = true;
                            (available.len(), false)
                        }
                    }
                }
            };

            self.reader.consume(consumed);

            if terminated {
                return decode(bytes).map(Some);
            }
        }

        if has_content {
            decode(bytes).map(Some)
        } else {
            Ok(None)
        }
    }
}

impl<R: BufRead> Iterator for InputLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_line().transpose()
    }
}

fn decode(bytes: Vec<u8>) -> io::Result<String> {
    String::from_utf8(bytes).map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))
}
