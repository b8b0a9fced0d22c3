/// Command pipeline: scanned flags → options → encoded payload → output.
pub mod build;

pub use build::run;
