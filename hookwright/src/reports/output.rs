//! Where command reports get printed.

/// Sink for report lines. `check` prints to the terminal; tests record lines.
pub trait Output {
    fn title(&mut self, text: &str);
    fn section(&mut self, name: &str);
    fn key_value(&mut self, key: &str, value: &str);
    fn numbered_item(&mut self, index: usize, text: &str);
    fn list_item(&mut self, text: &str);
    /// Printed to stderr.
    fn warning(&mut self, msg: &str);
    fn preformatted(&mut self, text: &str);
    fn newline(&mut self);
}

pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Plain stdout/stderr rendering.
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn title(&mut self, text: &str) {
        println!("{}", text);
        println!("{}", "=".repeat(text.len()));
    }

    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}: {}", key, value);
    }

    fn numbered_item(&mut self, index: usize, text: &str) {
        println!("  {}. {}", index, text);
    }

    fn list_item(&mut self, text: &str) {
        println!("  - {}", text);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {}", msg);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}
