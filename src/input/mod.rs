pub mod stdin;

pub use stdin::{decode_lossy, read_text};
