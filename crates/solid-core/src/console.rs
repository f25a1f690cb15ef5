//! Console sinks: where examples print their lines
use std::cell::RefCell;

/// Line-oriented output sink handed to every coordinator and provider.
pub trait Console {
    fn emit(&self, line: &str);
}

/// Records every emitted line in memory.
#[derive(Debug, Default)]
pub struct Transcript {
    lines: RefCell<Vec<String>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines.into_inner()
    }
}

impl Console for Transcript {
    fn emit(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_keeps_order() {
        let transcript = Transcript::new();
        assert!(transcript.is_empty());

        transcript.emit("first");
        transcript.emit("second");

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.into_lines(), vec!["first", "second"]);
    }

    #[test]
    fn test_transcript_through_trait_object() {
        let transcript = Transcript::new();
        let console: &dyn Console = &transcript;
        console.emit("via dyn");
        assert_eq!(transcript.lines(), vec!["via dyn".to_string()]);
    }
}
