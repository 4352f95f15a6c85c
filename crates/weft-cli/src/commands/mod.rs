pub mod check;
pub mod dump;
pub mod run_common;
pub mod source_loader;
pub mod trace;
