pub mod cli;
pub mod document;
pub mod error;
pub mod logging;
pub mod path;
pub mod value;

pub use document::{Document, Source};
pub use error::MergeError;
pub use path::{Path, escape};
pub use value::{Map, Value};
