#![cfg(feature = "std")]

use std::io::{self, Write};
use std::string::String;
use std::vec::Vec;

use crate::client::{Client, InputSource};
use crate::common::GameError;
use crate::config::{FIRST_MOVE_PROMPT, PLAYER_1_NAME_PROMPT, PLAYER_2_NAME_PROMPT};

/// Drives the opening sequence for two players reading from one input.
///
/// Every prompt is recorded in the transcript and written to the sink.
#[derive(Debug)]
pub struct Game<W: Write = io::Stdout> {
    output: Vec<String>,
    sink: W,
    player_1: Client,
    player_2: Client,
}

impl Game<io::Stdout> {
    /// Game that prints its prompts to standard output.
    pub fn new(input: InputSource) -> Self {
        Self::with_output(input, io::stdout())
    }
}

impl<W: Write> Game<W> {
    pub fn with_output(input: InputSource, sink: W) -> Self {
        Self {
            output: Vec::new(),
            sink,
            player_1: Client::new(input.clone()),
            player_2: Client::new(input),
        }
    }

    /// Ask both players for their names, then announce who goes first.
    pub fn start(&mut self) -> Result<(), GameError> {
        log::info!("starting game");
        self.say(PLAYER_1_NAME_PROMPT)?;
        self.player_1.ask_for_name()?;
        self.say(PLAYER_2_NAME_PROMPT)?;
        self.player_2.ask_for_name()?;
        // player 1's latest capture is the name it just gave
        let prompt = format!("{}{}", self.player_1.last_input()?, FIRST_MOVE_PROMPT);
        self.say(&prompt)?;
        log::info!("opening sequence finished");
        Ok(())
    }

    fn say(&mut self, text: &str) -> Result<(), GameError> {
        self.output.push(String::from(text));
        self.sink.write_all(text.as_bytes())?;
        self.sink.flush()?;
        Ok(())
    }

    /// Every prompt emitted so far, in order.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    pub fn player_1(&self) -> &Client {
        &self.player_1
    }

    pub fn player_2(&self) -> &Client {
        &self.player_2
    }
}
