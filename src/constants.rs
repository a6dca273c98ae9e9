/// Default extension appended to include targets without one
pub const TEX_EXT: &str = ".tex";
/// Reserved environment name backing the line-level ignore markers
pub const FORCE_IGNORE_ENV: &str = "tex-flatten-force-ignore";
/// Comment form of the region markers, rewritten before comment stripping
pub const IGNORE_BEGIN_COMMENT: &str = "% tex-flatten:ignore-begin";
pub const IGNORE_END_COMMENT: &str = "% tex-flatten:ignore-end";
/// Environments excluded from output when the user specifies none
pub const DEFAULT_IGNORE_ENVS: &[&str] = &["comment", "error"];
