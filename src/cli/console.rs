use colored::*;
use std::io::{self, BufRead, BufReader, Write};

use crate::core::TutorState;

/// Console handles all terminal I/O with colored formatting
pub struct Console {
    input: Box<dyn BufRead + Send>,
    output: Box<dyn Write + Send>,
    user_color: Color,
    educator_color: Color,
}

impl Console {
    /// Console over arbitrary input and output streams
    pub fn new(input: impl BufRead + Send + 'static, output: impl Write + Send + 'static) -> Self {
        Self {
            input: Box::new(input),
            output: Box::new(output),
            user_color: Color::Cyan,
            educator_color: Color::Green,
        }
    }

    /// Console over the process's standard input and output
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }

    /// Print the welcome banner
    pub fn print_banner(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "{}",
            "Starting your financial education session. I'll guide you through learning about stocks and personal finance."
                .bright_blue()
                .bold()
        )?;
        writeln!(self.output, "Type 'bye' or 'exit' to end the session.")?;
        self.print_rule()
    }

    /// Print a separator line
    pub fn print_rule(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", "=".repeat(50).bright_blue())
    }

    /// Prompt for and read one trimmed line. `None` at end of input.
    pub fn read_input(&mut self) -> io::Result<Option<String>> {
        write!(self.output, "\n{} ", "You:".color(self.user_color).bold())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Print the tutor's reply
    pub fn print_educator(&mut self, message: &str) -> io::Result<()> {
        writeln!(
            self.output,
            "\n{} {}",
            "Educator:".color(self.educator_color).bold(),
            message
        )?;
        self.output.flush()
    }

    /// Print the end-of-session summary
    pub fn print_summary(&mut self, state: &TutorState) -> io::Result<()> {
        let goodbye = format!(
            "Goodbye! Great session today. You asked {} questions and covered {} topics.",
            state.questions_asked,
            state.topics_covered.len()
        );
        writeln!(self.output, "\n{}", goodbye.yellow().bold())?;
        writeln!(self.output, "Learning progress: {}%", state.learning_progress)?;
        writeln!(self.output, "Topics covered: {}", state.topics_covered.join(", "))?;
        self.print_rule()?;
        writeln!(self.output, "Session ended.")?;
        self.output.flush()
    }
}
