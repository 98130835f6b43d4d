//! Framing for the chat reply stream.
//!
//! Every event is a single `data: ...` line followed by a blank line. Token
//! fragments are JSON-encoded strings so that newlines inside a fragment never
//! break the framing; the two control events are sent bare.

const DATA_PREFIX: &str = "data: ";
const DONE_MARKER: &str = "[DONE]";
const ERROR_MARKER: &str = "[ERROR]";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StreamEvent {
    Token(String),
    Error(String),
    Done,
}

impl StreamEvent {
    pub fn to_frame(&self) -> String {
        match self {
            StreamEvent::Token(text) => {
                let encoded = serde_json::to_string(text)
                    .unwrap_or_else(|_| format!("\"{}\"", text.replace('"', "\\\"")));
                format!("{DATA_PREFIX}{encoded}\n\n")
            }
            StreamEvent::Error(message) => {
                let flat = message.replace(['\r', '\n'], " ");
                format!("{DATA_PREFIX}{ERROR_MARKER} {flat}\n\n")
            }
            StreamEvent::Done => format!("{DATA_PREFIX}{DONE_MARKER}\n\n"),
        }
    }

    /// Parse one line of the stream. Blank lines and non-data lines yield `None`.
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\n', '\r']);
        let data = line.strip_prefix(DATA_PREFIX)?;

        if data == DONE_MARKER {
            return Some(StreamEvent::Done);
        }
        if let Some(message) = data.strip_prefix(ERROR_MARKER) {
            return Some(StreamEvent::Error(message.trim().to_string()));
        }
        match serde_json::from_str::<String>(data) {
            Ok(text) => Some(StreamEvent::Token(text)),
            Err(_) => Some(StreamEvent::Token(data.to_string())),
        }
    }
}

/// Incremental decoder fed with raw body chunks.
///
/// Chunk boundaries can fall anywhere, including inside a multi-byte UTF-8
/// sequence, so bytes are held until a full line is available.
#[derive(Default, Debug)]
pub struct StreamDecoder {
    buffer: Vec<u8>,
}

impl StreamDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, chunk: &[u8]) -> Vec<StreamEvent> {
        self.buffer.extend_from_slice(chunk);

        let mut events = Vec::new();
        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let line_bytes = self.buffer.drain(..pos + 1).collect::<Vec<u8>>();
            let line = String::from_utf8_lossy(&line_bytes);
            if let Some(event) = StreamEvent::parse_line(&line) {
                events.push(event);
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_with_newline_stays_on_one_line() {
        let frame = StreamEvent::Token("line one\nline two".into()).to_frame();
        assert_eq!(frame, "data: \"line one\\nline two\"\n\n");
        assert_eq!(frame.matches('\n').count(), 2);
    }

    #[test]
    fn control_events_are_bare() {
        assert_eq!(StreamEvent::Done.to_frame(), "data: [DONE]\n\n");
        assert_eq!(
            StreamEvent::Error("upstream\nclosed".into()).to_frame(),
            "data: [ERROR] upstream closed\n\n"
        );
    }

    #[test]
    fn parse_line_ignores_blank_and_foreign_lines() {
        assert_eq!(StreamEvent::parse_line(""), None);
        assert_eq!(StreamEvent::parse_line(": keep-alive"), None);
        assert_eq!(
            StreamEvent::parse_line("data: [ERROR] rate limited\r\n"),
            Some(StreamEvent::Error("rate limited".into()))
        );
    }

    #[test]
    fn decoder_reassembles_split_frames() {
        let frames = [
            StreamEvent::Token("Hel".into()).to_frame(),
            StreamEvent::Token("lo, ☕".into()).to_frame(),
            StreamEvent::Done.to_frame(),
        ]
        .concat();
        let bytes = frames.as_bytes();

        let mut decoder = StreamDecoder::new();
        let mut events = Vec::new();
        // Split in many small pieces, some inside the multi-byte cup
        for chunk in bytes.chunks(3) {
            events.extend(decoder.push(chunk));
        }

        assert_eq!(
            events,
            vec![
                StreamEvent::Token("Hel".into()),
                StreamEvent::Token("lo, ☕".into()),
                StreamEvent::Done,
            ]
        );
    }
}
