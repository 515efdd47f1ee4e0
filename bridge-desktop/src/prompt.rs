//! Terminal Operator Prompt

use bridge_traits::{
    error::{BridgeError, Result},
    prompt::OperatorPrompt,
};
use std::io::{self, BufRead, BufReader, Write};
use std::sync::Mutex;
use tracing::debug;

type DynReader = Box<dyn BufRead + Send>;
type DynWriter = Box<dyn Write + Send>;

/// Line-oriented yes/no prompt
///
/// Writes `Max retry limit reached. Retry {budget} more time/s? ` and reads a
/// single line. Only `Y` (case-insensitive, surrounding whitespace ignored)
/// continues; any other answer, including end of input, stops.
pub struct ConsolePrompt {
    input: Mutex<DynReader>,
    output: Mutex<DynWriter>,
}

impl ConsolePrompt {
    /// Prompt bound to the process standard input and output
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }

    /// Prompt over arbitrary reader/writer handles
    pub fn new<R, W>(input: R, output: W) -> Self
    where
        R: BufRead + Send + 'static,
        W: Write + Send + 'static,
    {
        Self {
            input: Mutex::new(Box::new(input)),
            output: Mutex::new(Box::new(output)),
        }
    }

    fn ask(&self, question: &str) -> Result<Option<String>> {
        {
            let mut output = self
                .output
                .lock()
                .map_err(|_| BridgeError::OperationFailed("Prompt output lock poisoned".into()))?;
            output.write_all(question.as_bytes())?;
            output.flush()?;
        }

        let mut input = self
            .input
            .lock()
            .map_err(|_| BridgeError::OperationFailed("Prompt input lock poisoned".into()))?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

impl OperatorPrompt for ConsolePrompt {
    fn should_continue(&self, budget: u32) -> Result<bool> {
        let question = format!("Max retry limit reached. Retry {} more time/s? ", budget);

        let Some(answer) = self.ask(&question)? else {
            debug!("Prompt input closed, treating as a negative answer");
            return Ok(false);
        };

        let accepted = is_affirmative(&answer);
        debug!(budget, accepted, "Operator answered retry prompt");
        Ok(accepted)
    }
}

fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::Arc;

    /// Writer that keeps everything written so the prompt text can be inspected
    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn prompt_with_input(input: &str) -> (ConsolePrompt, SharedBuffer) {
        let output = SharedBuffer::default();
        let prompt = ConsolePrompt::new(Cursor::new(input.as_bytes().to_vec()), output.clone());
        (prompt, output)
    }

    #[test]
    fn test_affirmative_answers() {
        assert!(is_affirmative("Y"));
        assert!(is_affirmative("y\n"));
        assert!(is_affirmative("  y \r\n"));
    }

    #[test]
    fn test_negative_answers() {
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("yes"));
        assert!(!is_affirmative("YY"));
    }

    #[test]
    fn test_prompt_writes_question_with_budget() {
        let (prompt, output) = prompt_with_input("y\n");

        assert!(prompt.should_continue(3).unwrap());
        assert_eq!(
            output.contents(),
            "Max retry limit reached. Retry 3 more time/s? "
        );
    }

    #[test]
    fn test_prompt_reads_one_line_per_question() {
        let (prompt, _output) = prompt_with_input("Y\nn\n");

        assert!(prompt.should_continue(2).unwrap());
        assert!(!prompt.should_continue(2).unwrap());
    }

    #[test]
    fn test_prompt_end_of_input_stops() {
        let (prompt, _output) = prompt_with_input("");

        assert!(!prompt.should_continue(5).unwrap());
    }
}
