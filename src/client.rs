#![cfg(feature = "std")]

//! Line-oriented player input.
//!
//! An [`InputSource`] is a cloneable handle over one reader; every clone
//! reads from the same stream, so two clients built from clones of a single
//! source consume its lines in call order.

use std::cell::RefCell;
use std::fmt;
use std::io::{self, BufRead};
use std::rc::Rc;
use std::string::String;
use std::vec::Vec;

use crate::common::ClientError;

/// Shared handle to a line-oriented reader.
#[derive(Clone)]
pub struct InputSource {
    reader: Rc<RefCell<dyn BufRead>>,
}

impl InputSource {
    pub fn new<R: BufRead + 'static>(reader: R) -> Self {
        Self {
            reader: Rc::new(RefCell::new(reader)),
        }
    }

    /// Source backed by the process's standard input.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }

    /// Block until one line is available and return it without its line ending.
    pub fn read_line(&self) -> Result<String, ClientError> {
        let mut line = String::new();
        let n = self.reader.borrow_mut().read_line(&mut line)?;
        if n == 0 {
            return Err(ClientError::EndOfInput);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

impl fmt::Debug for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputSource")
            .field("handles", &Rc::strong_count(&self.reader))
            .finish()
    }
}

/// Captures one line per request and keeps every line it has read.
#[derive(Debug)]
pub struct Client {
    input: InputSource,
    name: Option<String>,
    inputs: Vec<String>,
}

impl Client {
    pub fn new(input: InputSource) -> Self {
        Self {
            input,
            name: None,
            inputs: Vec::new(),
        }
    }

    fn capture(&mut self) -> Result<(), ClientError> {
        let line = self.input.read_line()?;
        log::trace!("captured input {:?}", line);
        self.inputs.push(line);
        Ok(())
    }

    /// Read where the player wants to place a piece.
    pub fn ask_to_place(&mut self) -> Result<(), ClientError> {
        self.capture()
    }

    /// Read where the player wants to move a piece from and to.
    pub fn ask_to_move(&mut self) -> Result<(), ClientError> {
        self.capture()
    }

    /// Read the player's name and remember it.
    pub fn ask_for_name(&mut self) -> Result<(), ClientError> {
        self.capture()?;
        let name = self.last_input()?.to_owned();
        log::debug!("player name set to {:?}", name);
        self.name = Some(name);
        Ok(())
    }

    /// Most recently captured line.
    pub fn last_input(&self) -> Result<&str, ClientError> {
        self.inputs
            .last()
            .map(String::as_str)
            .ok_or(ClientError::NoInput)
    }

    /// `None` until `ask_for_name` succeeds.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }
}
