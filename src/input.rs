use std::io::{BufRead, Write};

use anyhow::{bail, Context};

use crate::models::{Assignment, Category};

/// Prompt/response surface over any line-oriented input and output pair.
/// `main` hands it locked stdin/stdout; tests hand it cursors.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    pub fn line(&mut self, text: &str) -> anyhow::Result<()> {
        writeln!(self.output, "{text}").context("failed to write to console")?;
        Ok(())
    }

    /// Prints the prompt without a newline, then reads and trims one line.
    /// End of input is fatal, not a retry.
    fn prompt(&mut self, prompt: &str) -> anyhow::Result<String> {
        write!(self.output, "{prompt}").context("failed to write to console")?;
        self.output.flush().context("failed to flush console")?;

        let mut line = String::new();
        let bytes = self
            .input
            .read_line(&mut line)
            .context("failed to read from console")?;
        if bytes == 0 {
            bail!("input ended unexpectedly");
        }
        Ok(line.trim().to_string())
    }

    /// Free text: anything goes, including the empty string.
    pub fn read_text(&mut self, prompt: &str) -> anyhow::Result<String> {
        self.prompt(prompt)
    }

    pub fn read_category(&mut self, prompt: &str) -> anyhow::Result<Category> {
        loop {
            let answer = self.prompt(prompt)?;
            match Category::parse(&answer) {
                Some(category) => return Ok(category),
                None => self.line("Error: Category must be 'FA' or 'SA'")?,
            }
        }
    }

    pub fn read_number(&mut self, prompt: &str, low: f64, high: f64) -> anyhow::Result<f64> {
        loop {
            let answer = self.prompt(prompt)?;
            match answer.parse::<f64>() {
                Ok(number) if number < low || number > high => {
                    self.line(&format!("Error: Number must be between {low} and {high}"))?;
                }
                Ok(number) => return Ok(number),
                Err(_) => self.line("Error: Please enter a valid input")?,
            }
        }
    }

    /// True only for a trimmed, lowercased answer of exactly "y".
    pub fn confirm(&mut self, prompt: &str) -> anyhow::Result<bool> {
        let answer = self.prompt(prompt)?;
        Ok(answer.to_lowercase() == "y")
    }
}

/// Gathers assignments one at a time until the user declines to continue.
/// Always yields at least one record.
pub fn collect_assignments<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> anyhow::Result<Vec<Assignment>> {
    let mut assignments = Vec::new();

    loop {
        console.line(&format!("Assignment #{}", assignments.len() + 1))?;
        console.line(&"-".repeat(20))?;

        let name = console.read_text("Assignment Name: ")?;
        let category = console.read_category("Category (FA/SA): ")?;
        let grade = console.read_number("Grade (0-100): ", 0.0, 100.0)?;
        let weight = console.read_number("Weight: ", 0.0, 100.0)?;

        assignments.push(Assignment::new(name, category, grade, weight));

        if !console.confirm("Add another assignment? (y/n): ")? {
            break;
        }
        console.line("")?;
    }

    Ok(assignments)
}
