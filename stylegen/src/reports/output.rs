//! Where reports are written.

/// Which terminal stream a line belongs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Sink for report lines.
///
/// Implementors only decide where a finished line goes; the provided
/// methods fix the layout, so every output renders a report the same way.
pub trait Output {
    fn write_line(&mut self, stream: Stream, line: &str);

    fn title(&mut self, text: &str) {
        self.write_line(Stream::Stdout, text);
        self.write_line(Stream::Stdout, &"=".repeat(text.chars().count()));
    }

    fn section(&mut self, name: &str) {
        self.write_line(Stream::Stdout, &format!("{}:", name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.write_line(Stream::Stdout, &format!("{}: {}", key, value));
    }

    fn key_value_indented(&mut self, key: &str, value: &str) {
        self.write_line(Stream::Stdout, &format!("  {}: {}", key, value));
    }

    fn numbered_item(&mut self, index: usize, text: &str) {
        self.write_line(Stream::Stdout, &format!("  {}. {}", index, text));
    }

    fn list_item(&mut self, text: &str) {
        self.write_line(Stream::Stdout, &format!("  - {}", text));
    }

    /// A file that was created or changed.
    fn added_item(&mut self, text: &str) {
        self.write_line(Stream::Stdout, &format!("  + {}", text));
    }

    fn error(&mut self, msg: &str) {
        self.write_line(Stream::Stderr, &format!("error: {}", msg));
    }

    fn warning(&mut self, msg: &str) {
        self.write_line(Stream::Stderr, &format!("warning: {}", msg));
    }

    fn divider(&mut self, label: &str) {
        self.write_line(Stream::Stdout, &format!("── {} ──", label));
    }

    /// Multi-line text written as-is, e.g. a generated unit.
    fn preformatted(&mut self, text: &str) {
        for line in text.lines() {
            self.write_line(Stream::Stdout, line);
        }
    }

    fn newline(&mut self) {
        self.write_line(Stream::Stdout, "");
    }
}

pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

#[derive(Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn write_line(&mut self, stream: Stream, line: &str) {
        match stream {
            Stream::Stdout => println!("{}", line),
            Stream::Stderr => eprintln!("{}", line),
        }
    }
}

/// Collects lines from both streams in order, for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct BufferOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl BufferOutput {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
impl Output for BufferOutput {
    fn write_line(&mut self, _stream: Stream, line: &str) {
        self.lines.push(line.to_string());
    }
}
