//! Wrapper to perform file system operations

mod io;
pub use io::{read_source, write_output};
mod path;
pub use path::*;
