//! Status verbs displayed by the progress reporter

pub const FLATTENING: &str = "Flattening";
pub const EXPANDED: &str = "Expanded";
pub const WARNING: &str = "Warning";
pub const WRITING: &str = "Writing";
pub const DONE: &str = "Done";
pub const FAILED: &str = "Failed";
