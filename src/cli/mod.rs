/// CLI layer: argument scanning and output writing.
pub mod args;
pub mod output;

pub use args::{Cli, Flag, debug_requested, scan};
pub use output::{OutputCtx, write_error};
