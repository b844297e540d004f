mod usage;
mod vm;

pub use usage::*;
pub use vm::*;
