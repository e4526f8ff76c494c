//! Interactive driver: prompt, read, evaluate, print.
//!
//! Input is three whitespace-separated real numbers `x y z` followed by one
//! text token. Tokens may be spread across any number of lines.
//!
//! Every evaluation or input failure is written to the output as a single
//! diagnostic line and the call still returns `Ok`. Only failures writing to
//! the output escape as [`io::Error`].

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::config::{Config, OutputFormat, Policy};
use crate::error::DriverError;
use crate::formula::{Engine, Evaluation, Inputs};

/// Prompt printed before the three numbers.
pub const NUMBERS_PROMPT: &str = "Enter x, y, z: ";

/// Prompt printed before the text token.
pub const TEXT_PROMPT: &str = "Enter a text token (e.g. 'wet'): ";

/// Whitespace-delimited token reader over a buffered input.
///
/// Reads one line at a time, only when more tokens are needed.
pub struct TokenReader<R> {
    inner: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    /// Wraps `inner`.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input.
    ///
    /// # Errors
    ///
    /// Propagates read failures from the underlying input.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.inner.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }

    /// Next token parsed as a finite real number.
    ///
    /// # Errors
    ///
    /// [`DriverError::MissingInput`] at end of input,
    /// [`DriverError::InvalidNumber`] for unparsable tokens,
    /// [`DriverError::NonFinite`] for NaN or infinities.
    pub fn next_number(&mut self, what: &'static str) -> Result<f64, DriverError> {
        let token = self
            .next_token()?
            .ok_or(DriverError::MissingInput { what })?;
        let value: f64 = token
            .parse()
            .map_err(|_| DriverError::InvalidNumber { what, token })?;
        if !value.is_finite() {
            return Err(DriverError::NonFinite { what, value });
        }
        Ok(value)
    }
}

/// What a [`run`] call produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Results were computed and printed.
    Computed(Evaluation),
    /// A diagnostic line was printed instead of results.
    Reported(String),
}

impl Outcome {
    /// Returns true if results were printed.
    pub fn is_computed(&self) -> bool {
        matches!(self, Self::Computed(_))
    }
}

fn read_numbers<R: BufRead>(
    tokens: &mut TokenReader<R>,
) -> Result<(f64, f64, f64), DriverError> {
    let x = tokens.next_number("x")?;
    let y = tokens.next_number("y")?;
    let z = tokens.next_number("z")?;
    Ok((x, y, z))
}

fn read_text<R: BufRead>(
    tokens: &mut TokenReader<R>,
    policy: Policy,
) -> Result<String, DriverError> {
    match tokens.next_token()? {
        Some(text) => Ok(text),
        None if policy == Policy::Lenient => Ok(String::new()),
        None => Err(DriverError::MissingInput { what: "text token" }),
    }
}

fn write_results<W: Write>(output: &mut W, eval: &Evaluation, config: &Config) -> io::Result<()> {
    match config.format {
        OutputFormat::Text => {
            let p = usize::from(config.precision);
            writeln!(output)?;
            writeln!(output, "Results:")?;
            writeln!(output, "r = {:.p$}", eval.r)?;
            writeln!(output, "k = {:.p$}", eval.k)?;
            writeln!(output, "Variant(r, k) = {:.p$}", eval.variant)?;
        }
        OutputFormat::Json => {
            writeln!(output)?;
            serde_json::to_writer(&mut *output, eval).map_err(io::Error::from)?;
            writeln!(output)?;
        }
    }
    Ok(())
}

fn report<W: Write>(output: &mut W, message: String) -> io::Result<Outcome> {
    log::info!("evaluation aborted: {message}");
    writeln!(output)?;
    writeln!(output, "{message}")?;
    Ok(Outcome::Reported(message))
}

/// Runs one prompt–evaluate–print cycle.
///
/// # Errors
///
/// Only failures writing to `output`. Input and evaluation failures are
/// printed as diagnostics and returned as [`Outcome::Reported`].
pub fn run<R: BufRead, W: Write>(input: R, output: &mut W, config: &Config) -> io::Result<Outcome> {
    log::info!("lookup policy: {}", config.policy);
    let mut tokens = TokenReader::new(input);

    write!(output, "{NUMBERS_PROMPT}")?;
    output.flush()?;
    let (x, y, z) = match read_numbers(&mut tokens) {
        Ok(numbers) => numbers,
        Err(err) => return report(output, err.to_string()),
    };

    write!(output, "{TEXT_PROMPT}")?;
    output.flush()?;
    let text = match read_text(&mut tokens, config.policy) {
        Ok(text) => text,
        Err(err) => return report(output, err.to_string()),
    };

    let inputs = Inputs::new(x, y, z, text);
    let engine = Engine::new(config.policy);
    match engine.evaluate(&inputs) {
        Ok(eval) => {
            write_results(output, &eval, config)?;
            Ok(Outcome::Computed(eval))
        }
        Err(err) => report(output, err.to_string()),
    }
}
