use anyhow::Context;
use derive_new::new;
use minus::Pager;
use std::io::{self, Write};

/// Output collected into the minus pager and shown once the command is done.
///
/// The minus pager doesn't implement `std::io::Write`, so `writer` hands out a
/// sink feeding a clone of the pager while the original is kept around to
/// display the result.
///
/// ```ignore
/// let output = PagedOutput::new(Pager::new());
/// let toolbox = Toolbox::new(output.writer());
/// toolbox.diff(&args)?;
/// output.show()?;
/// ```
#[derive(new)]
pub struct PagedOutput {
    pager: Pager,
}

impl PagedOutput {
    pub fn writer(&self) -> Box<dyn Write> {
        Box::new(PagedSink {
            pager: self.pager.clone(),
            pending: Vec::new(),
        })
    }

    pub fn show(self) -> anyhow::Result<()> {
        minus::page_all(self.pager).context("Unable to display paged output")
    }
}

// A diff line can be split across writes anywhere, including inside a
// multi-byte character, so an incomplete trailing sequence waits for the
// next write.
struct PagedSink {
    pager: Pager,
    pending: Vec<u8>,
}

/// Drains the longest valid UTF-8 prefix of `pending`, leaving an incomplete
/// trailing character behind. Bytes that can never become UTF-8 are an error.
fn take_text(pending: &mut Vec<u8>) -> io::Result<String> {
    let complete = match std::str::from_utf8(pending) {
        Ok(_) => pending.len(),
        Err(e) if e.error_len().is_none() => e.valid_up_to(),
        Err(e) => return Err(io::Error::new(io::ErrorKind::InvalidData, e)),
    };
    let rest = pending.split_off(complete);
    let bytes = std::mem::replace(pending, rest);

    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

impl PagedSink {
    fn push(&mut self, text: &str) -> io::Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        self.pager.push_str(text).map_err(io::Error::other)
    }
}

impl Write for PagedSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);
        let text = take_text(&mut self.pending)?;
        self.push(&text)?;

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let tail = String::from_utf8_lossy(&self.pending).into_owned();
        self.pending.clear();
        self.push(&tail)
    }
}

#[cfg(test)]
mod tests {
    use super::take_text;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::plain(b"- old\n".to_vec(), "- old\n", 0)]
    #[case::split_character("+ caf\u{e9}".as_bytes()[..6].to_vec(), "+ caf", 1)]
    #[case::empty(Vec::new(), "", 0)]
    fn drains_complete_characters(
        #[case] mut pending: Vec<u8>,
        #[case] expected: &str,
        #[case] left_over: usize,
    ) {
        let text = take_text(&mut pending).unwrap();

        assert_eq!(text, expected);
        assert_eq!(pending.len(), left_over);
    }

    #[test]
    fn completes_a_character_across_writes() {
        let bytes = "\u{e9}".as_bytes();
        let mut pending = bytes[..1].to_vec();
        assert_eq!(take_text(&mut pending).unwrap(), "");

        pending.extend_from_slice(&bytes[1..]);

        assert_eq!(take_text(&mut pending).unwrap(), "\u{e9}");
        assert!(pending.is_empty());
    }

    #[test]
    fn rejects_bytes_that_are_never_utf8() {
        let mut pending = vec![b'a', 0xff, b'b'];

        assert!(take_text(&mut pending).is_err());
    }
}
