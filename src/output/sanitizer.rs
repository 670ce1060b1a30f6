//! ANSI escape stripping for raw terminal captures.

use vte::{Params, Parser, Perform};

/// Removes terminal control sequences from captured output.
pub struct OutputSanitizer;

impl OutputSanitizer {
    /// Strip ANSI escape codes from raw bytes.
    ///
    /// Printable text survives along with `\n`, `\r` and `\t`.
    pub fn strip_ansi(input: &[u8]) -> String {
        let mut collector = TextCollector::with_capacity(input.len());
        let mut parser = Parser::new();

        parser.advance(&mut collector, input);

        collector.text
    }

    /// Strip ANSI codes from a string.
    pub fn strip_ansi_str(input: &str) -> String {
        Self::strip_ansi(input.as_bytes())
    }
}

/// Keeps what a terminal would print, drops everything else.
struct TextCollector {
    text: String,
}

impl TextCollector {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            text: String::with_capacity(capacity),
        }
    }
}

impl Perform for TextCollector {
    fn print(&mut self, c: char) {
        self.text.push(c);
    }

    fn execute(&mut self, byte: u8) {
        if matches!(byte, b'\n' | b'\r' | b'\t') {
            self.text.push(char::from(byte));
        }
    }

    fn hook(&mut self, _params: &Params, _intermediates: &[u8], _ignore: bool, _action: char) {}

    fn put(&mut self, _byte: u8) {}

    fn unhook(&mut self) {}

    fn osc_dispatch(&mut self, _params: &[&[u8]], _bell_terminated: bool) {}

    fn csi_dispatch(
        &mut self,
        _params: &Params,
        _intermediates: &[u8],
        _ignore: bool,
        _action: char,
    ) {
    }

    fn esc_dispatch(&mut self, _intermediates: &[u8], _ignore: bool, _byte: u8) {}
}
