// src/adapter/prompt.rs
// Interactive menu used when no run mode was configured

use std::io::{self, BufRead, Write};

use crate::config::RunMode;

pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Show the mode menu. Returns `None` after telling the user the choice
    /// was not understood.
    pub fn choose_mode(&mut self, target: &str) -> io::Result<Option<RunMode>> {
        writeln!(self.output, "Select {} latency test:", target)?;
        writeln!(self.output, "1. Single request latency")?;
        writeln!(self.output, "2. Batch of requests")?;

        let mode = match self.read_line()?.as_deref().map(str::trim) {
            Some("1") => Some(RunMode::Single),
            Some("2") => Some(RunMode::Batch),
            _ => None,
        };

        if mode.is_none() {
            writeln!(self.output, "Invalid choice!")?;
        }
        Ok(mode)
    }

    pub fn ask_count(&mut self) -> io::Result<Option<u32>> {
        self.ask_number("Enter the number of requests to send:")
    }

    pub fn ask_interval_ms(&mut self) -> io::Result<Option<u64>> {
        self.ask_number("Enter the delay between requests (ms):")
    }

    fn ask_number<T: std::str::FromStr>(&mut self, question: &str) -> io::Result<Option<T>> {
        writeln!(self.output, "{}", question)?;

        let value = self
            .read_line()?
            .and_then(|line| line.trim().parse::<T>().ok());

        if value.is_none() {
            writeln!(self.output, "Invalid number!")?;
        }
        Ok(value)
    }

    // None on end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt(input: &str) -> Prompt<&[u8], Vec<u8>> {
        Prompt::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn menu_choices_map_to_modes() {
        assert_eq!(prompt("1\n").choose_mode("swap").unwrap(), Some(RunMode::Single));
        assert_eq!(prompt(" 2 \n").choose_mode("swap").unwrap(), Some(RunMode::Batch));
    }

    #[test]
    fn invalid_choice_is_reported() {
        let mut prompt = prompt("7\n");

        assert_eq!(prompt.choose_mode("pump").unwrap(), None);

        let shown = String::from_utf8(prompt.output).unwrap();
        assert!(shown.starts_with("Select pump latency test:"));
        assert!(shown.ends_with("Invalid choice!\n"));
    }

    #[test]
    fn end_of_input_is_an_invalid_choice() {
        assert_eq!(prompt("").choose_mode("swap").unwrap(), None);
    }

    #[test]
    fn count_and_interval_are_read_in_order() {
        let mut prompt = prompt("4\n250\n");

        assert_eq!(prompt.ask_count().unwrap(), Some(4));
        assert_eq!(prompt.ask_interval_ms().unwrap(), Some(250));
    }

    #[test]
    fn non_numeric_count_is_rejected() {
        let mut prompt = prompt("lots\n");

        assert_eq!(prompt.ask_count().unwrap(), None);
        assert!(String::from_utf8(prompt.output).unwrap().contains("Invalid number!"));
    }
}
