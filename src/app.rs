use crate::engine::{Config, Result};
use crate::input::read_text;
use crate::keywords::Keywords;
use crate::output::write_json_line;
use crate::segment::{word_tokenize, Segmenter, WordcutSegmenter};
use std::io::{Read, Write};
use tracing::debug;

/// One tokenizer invocation: configuration plus the engine it drives.
pub struct App {
    config: Config,
    segmenter: Box<dyn Segmenter>,
}

impl App {
    pub fn new(config: Config, segmenter: Box<dyn Segmenter>) -> Self {
        Self { config, segmenter }
    }

    /// Load the wordcut engine using the configured data home.
    pub fn from_config(config: Config) -> Result<Self> {
        let segmenter = WordcutSegmenter::load(&config.tokenizer)?;
        Ok(Self::new(config, Box::new(segmenter)))
    }

    /// Segment `text` and reduce the tokens to the keyword list.
    pub fn tokenize(&self, text: &str) -> Result<Keywords> {
        let tokens = word_tokenize(
            self.segmenter.as_ref(),
            text,
            self.config.tokenizer.keep_whitespace,
        )?;
        let keywords = Keywords::collect(tokens, self.config.output.max_tokens);
        debug!(keywords = keywords.len(), "selected keywords");
        Ok(keywords)
    }

    /// Full pipeline: read `input` to the end, write one JSON line to `output`.
    pub fn run<R: Read, W: Write>(&self, input: R, output: W) -> Result<Keywords> {
        let text = read_text(input)?;
        let keywords = self.tokenize(&text)?;
        write_json_line(output, &keywords)?;
        Ok(keywords)
    }
}
