//! Action creators for VM lifecycle requests.
//!
//! Components never act on a VM themselves; they build one of these and hand it
//! to a [`Dispatcher`](crate::Dispatcher).

use crate::models::Vm;
use serde::{Deserialize, Serialize};

/// Identifies the VM an action targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VmRef {
    pub name: String,
    pub connection_name: String,
}

impl From<&Vm> for VmRef {
    fn from(vm: &Vm) -> Self {
        Self {
            name: vm.name.clone(),
            connection_name: vm.connection_name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    StartVm(VmRef),
    RebootVm(VmRef),
    ForceRebootVm(VmRef),
    ShutdownVm(VmRef),
    #[serde(rename = "FORCEOFF_VM")]
    ForceVmOff(VmRef),
    /// Emitted by provider panels; the payload is only meaningful to the provider.
    ProviderAction {
        provider: String,
        payload: serde_json::Value,
    },
}

impl Action {
    /// The VM this action targets, if it is a lifecycle action.
    pub fn vm(&self) -> Option<&VmRef> {
        match self {
            Action::StartVm(vm)
            | Action::RebootVm(vm)
            | Action::ForceRebootVm(vm)
            | Action::ShutdownVm(vm)
            | Action::ForceVmOff(vm) => Some(vm),
            Action::ProviderAction { .. } => None,
        }
    }
}

pub fn start_vm(vm: &Vm) -> Action {
    Action::StartVm(vm.into())
}

pub fn reboot_vm(vm: &Vm) -> Action {
    Action::RebootVm(vm.into())
}

pub fn force_reboot_vm(vm: &Vm) -> Action {
    Action::ForceRebootVm(vm.into())
}

pub fn shutdown_vm(vm: &Vm) -> Action {
    Action::ShutdownVm(vm.into())
}

pub fn force_vm_off(vm: &Vm) -> Action {
    Action::ForceVmOff(vm.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_action_wire_shape() {
        let vm = Vm::new("fedora", "system");

        assert_eq!(
            serde_json::to_value(force_vm_off(&vm)).unwrap(),
            json!({"type": "FORCEOFF_VM", "payload": {"name": "fedora", "connectionName": "system"}})
        );
        assert_eq!(
            serde_json::to_value(force_reboot_vm(&vm)).unwrap()["type"],
            "FORCE_REBOOT_VM"
        );
        assert_eq!(serde_json::to_value(start_vm(&vm)).unwrap()["type"], "START_VM");
    }

    #[test]
    fn test_action_target() {
        let vm = Vm::new("fedora", "session");
        assert_eq!(shutdown_vm(&vm).vm().map(|r| r.name.as_str()), Some("fedora"));

        let custom = Action::ProviderAction {
            provider: "ovirt".to_string(),
            payload: json!({"migrate": "host2"}),
        };
        assert!(custom.vm().is_none());
    }
}
