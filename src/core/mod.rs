mod bib;
use bib::*;
mod comment;
mod directive;
mod expand;
use expand::*;
mod region;

mod string;
pub use string::*;

mod execute;
pub use execute::*;
mod util;
use util::Progress;
pub mod verbs;
