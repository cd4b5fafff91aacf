pub mod json;

pub use json::{to_json_line, write_json_line};
