use std::{
    collections::VecDeque,
    io::{self, BufRead, Write},
};

use crate::common::money::Money;

/// The external collaborator the session talks to.
///
/// Implementations own all rendering; the core hands over plain messages and
/// dispensed amounts and receives one raw line per request.
pub trait Terminal {
    /// Shows `prompt` and reads one line. `Ok(None)` means the input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    fn show(&mut self, message: &str) -> io::Result<()>;

    fn deliver_cash(&mut self, amount: Money) -> io::Result<()>;
}

/// A line-oriented terminal over any reader/writer pair, e.g. stdin/stdout.
#[derive(Debug)]
pub struct ConsoleTerminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleTerminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Terminal for ConsoleTerminal<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt} ")?;
        self.output.flush()?;

        // Undecodable bytes become U+FFFD and fail parsing like any other typo.
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }

    fn show(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    fn deliver_cash(&mut self, amount: Money) -> io::Result<()> {
        writeln!(self.output, "Dispensing {amount}")
    }
}

/// Something the core asked a [`ScriptedTerminal`] to present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Message(String),
    Cash(Money),
}

/// A terminal fed from a fixed list of input lines that records everything
/// presented to it. Used to drive sessions without interactive I/O.
#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    inputs: VecDeque<String>,
    prompts: Vec<String>,
    outputs: Vec<Output>,
}

impl ScriptedTerminal {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// Input lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn outputs(&self) -> &[Output] {
        &self.outputs
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.outputs.iter().filter_map(|o| match o {
            Output::Message(m) => Some(m.as_str()),
            Output::Cash(_) => None,
        })
    }

    pub fn cash(&self) -> impl Iterator<Item = Money> + '_ {
        self.outputs.iter().filter_map(|o| match o {
            Output::Cash(amount) => Some(*amount),
            Output::Message(_) => None,
        })
    }
}

impl Terminal for ScriptedTerminal {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_owned());
        Ok(self.inputs.pop_front())
    }

    fn show(&mut self, message: &str) -> io::Result<()> {
        self.outputs.push(Output::Message(message.to_owned()));
        Ok(())
    }

    fn deliver_cash(&mut self, amount: Money) -> io::Result<()> {
        self.outputs.push(Output::Cash(amount));
        Ok(())
    }
}
