pub mod actions;
pub mod collate;
pub mod components;
pub mod dispatch;
pub mod error;
pub mod format;
pub mod models;
pub mod provider;
pub mod view;

pub use actions::{Action, VmRef};
pub use components::{host_vms_list, VmCallbacks};
pub use dispatch::{Dispatch, Dispatcher};
pub use error::ViewError;
pub use models::*;
pub use provider::{ConsoleConfig, Provider, ProviderState, ProviderTab, StateIconSpec, StateMap};
pub use view::{Callback, Element, ListingState, Node};
