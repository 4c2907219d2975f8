pub mod pdf;

pub use pdf::{extract_text, ExtractError};
