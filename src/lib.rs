pub mod app;
pub mod engine;
pub mod input;
pub mod keywords;
pub mod output;
pub mod segment;

pub use app::App;
pub use engine::{Config, Result, TokenizeError};
pub use keywords::Keywords;
pub use segment::{Segmenter, WordcutSegmenter};
