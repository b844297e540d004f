pub mod console;
pub mod libvirt;

pub use console::*;
pub use libvirt::*;
