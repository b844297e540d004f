//! The VM list and everything it is composed of.
//!
//! Every function here is a pure render over an immutable snapshot; user
//! interaction only flows back out through [`Dispatcher`](crate::Dispatcher).

pub mod disks;
pub mod dropdown;
pub mod host_vms_list;
pub mod overview;
pub mod state_icon;
pub mod usage;
pub mod vm_actions;
pub mod vm_row;

pub use disks::vm_disks_tab;
pub use dropdown::{DropdownButton, DropdownButtons};
pub use host_vms_list::{host_vms_list, no_vm, sorted_vms};
pub use overview::{overview_record, vm_boot_order, vm_last_message, vm_overview_tab};
pub use state_icon::{default_state_icon, state_icon};
pub use usage::vm_usage_tab;
pub use vm_actions::{vm_actions, VmCallbacks};
pub use vm_row::vm_row;
