use std::io::{self, BufRead, Stdout, Write};
use std::str::FromStr;

use crate::error::AppError;

const YES_ANSWERS: [&str; 4] = ["s", "si", "y", "yes"];

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, line: impl AsRef<str>) -> Result<(), AppError> {
        writeln!(self.output, "{}", line.as_ref())?;
        Ok(())
    }

    pub fn ask(&mut self, prompt: &str) -> Result<String, AppError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    pub fn ask_parsed<T>(&mut self, prompt: &str) -> Result<T, AppError>
    where
        T: FromStr,
    {
        let answer = self.ask(prompt)?;
        answer
            .parse()
            .map_err(|_| AppError::InvalidInput(format!("'{}' is not a valid answer", answer)))
    }

    // Anything other than an explicit yes counts as no
    pub fn confirm(&mut self, prompt: &str) -> Result<bool, AppError> {
        let answer = self.ask(&format!("{} (s/n): ", prompt))?.to_lowercase();
        Ok(YES_ANSWERS.contains(&answer.as_str()))
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}
