use std::io::Write;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Where usage text goes.
pub(crate) trait UserInterface {
    fn print(&mut self, message: String);
}

/// Sends each message to an [`std::io::Write`] in a single `write_all`.
pub(crate) struct WriterInterface<W: Write> {
    writer: W,
}

impl<W: Write> WriterInterface<W> {
    pub(crate) fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> UserInterface for WriterInterface<W> {
    fn print(&mut self, message: String) {
        // Usage output is best effort: a broken sink is not a parse outcome.
        let result = self
            .writer
            .write_all(message.as_bytes())
            .and_then(|_| self.writer.flush());

        #[cfg(feature = "tracing_debug")]
        {
            if let Err(error) = &result {
                debug!("Failed to write usage: {error}.");
            }
        }
        #[cfg(not(feature = "tracing_debug"))]
        {
            let _ = result;
        }
    }
}

/// Break a paragraph into lines of at most `width` characters, hyphenating words longer than a line.
pub(crate) fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    assert!(width >= 2, "internal error - chunk width must allow hyphenation");
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ') {
        if word.is_empty() {
            continue;
        }

        if current.is_empty() {
            hyphenate(width, &mut lines, &mut current, word);
        } else if current.chars().count() + word.chars().count() + 1 <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            hyphenate(width, &mut lines, &mut current, word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let increment = width - 1;
    let characters: Vec<char> = word.chars().collect();
    let mut left = 0;

    while left + width < characters.len() {
        let part: String = characters[left..left + increment].iter().collect();
        lines.push(format!("{part}-"));
        left += increment;
    }

    current.extend(&characters[left..]);
}

#[cfg(test)]
pub(crate) mod util {
    use std::io::Write;
    use std::sync::mpsc;

    pub(crate) fn channel_interface() -> (SenderInterface, ReceiverInterface) {
        let (message_tx, message_rx) = mpsc::channel();
        (
            SenderInterface { message_tx },
            ReceiverInterface { message_rx },
        )
    }

    /// A sink that forwards every write, so output can be inspected while the parser is still alive.
    pub(crate) struct SenderInterface {
        message_tx: mpsc::Sender<String>,
    }

    impl Write for SenderInterface {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.message_tx
                .send(String::from_utf8_lossy(buf).into_owned())
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::BrokenPipe, e))?;
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    pub(crate) struct ReceiverInterface {
        message_rx: mpsc::Receiver<String>,
    }

    impl ReceiverInterface {
        /// Everything written so far, concatenated.
        pub(crate) fn consume(&self) -> String {
            self.message_rx.try_iter().collect::<Vec<String>>().concat()
        }
    }

    /// A sink that always fails.
    pub(crate) struct BrokenInterface;

    impl Write for BrokenInterface {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }
}
