use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a VM as reported by the backend.
///
/// Providers may report states outside the built-in vocabulary; those are kept
/// verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VmState {
    Running,
    Idle,
    Paused,
    Shutdown,
    ShutOff,
    Crashed,
    Dying,
    PmSuspended,
    Other(String),
}

impl VmState {
    pub fn as_str(&self) -> &str {
        match self {
            VmState::Running => "running",
            VmState::Idle => "idle",
            VmState::Paused => "paused",
            VmState::Shutdown => "shutdown",
            VmState::ShutOff => "shut off",
            VmState::Crashed => "crashed",
            VmState::Dying => "dying",
            VmState::PmSuspended => "pmsuspended",
            VmState::Other(s) => s,
        }
    }
}

impl From<&str> for VmState {
    fn from(s: &str) -> Self {
        match s {
            "running" => VmState::Running,
            "idle" => VmState::Idle,
            "paused" => VmState::Paused,
            "shutdown" => VmState::Shutdown,
            "shut off" => VmState::ShutOff,
            "crashed" => VmState::Crashed,
            "dying" => VmState::Dying,
            "pmsuspended" => VmState::PmSuspended,
            other => VmState::Other(other.to_string()),
        }
    }
}

impl From<String> for VmState {
    fn from(s: String) -> Self {
        VmState::from(s.as_str())
    }
}

impl From<VmState> for String {
    fn from(state: VmState) -> Self {
        state.as_str().to_string()
    }
}

impl fmt::Display for VmState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootDevice {
    #[serde(rename = "type")]
    pub device_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootOrder {
    pub devices: Vec<BootDevice>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LastMessageDetail {
    pub exception: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Disk {
    pub target: String,
    pub bus: String,
    pub device: String,
    pub source: Option<String>,
    /// Bytes
    pub capacity: Option<u64>,
    /// Bytes
    pub allocation: Option<u64>,
    pub readonly: bool,
}

/// Metric fields read leniently: null, negative or non-numeric input reads as 0
/// instead of rejecting the whole snapshot.
mod metric {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let number = match Value::deserialize(deserializer)? {
            Value::Number(n) => n.as_f64().unwrap_or(0.0),
            Value::String(s) => s.trim().parse().unwrap_or(0.0),
            _ => 0.0,
        };
        Ok(if number.is_finite() { number } else { 0.0 })
    }

    pub fn kib<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        Ok(number(deserializer)?.max(0.0) as u64)
    }

    pub fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        Ok(number(deserializer)?.max(0.0) as u32)
    }

    pub fn percent<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        number(deserializer)
    }
}

/// Snapshot of one VM, owned by whoever feeds the view layer.
///
/// Memory figures are in KiB. Every optional metric has an explicit default so
/// rendering code never has to guess.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Vm {
    pub name: String,
    pub state: Option<VmState>,
    pub connection_name: String,
    #[serde(deserialize_with = "metric::kib")]
    pub current_memory: u64,
    #[serde(deserialize_with = "metric::kib")]
    pub rss_memory: u64,
    #[serde(deserialize_with = "metric::count")]
    pub vcpus: u32,
    /// Percent over all vCPUs, so 4 vCPUs can report up to 400.
    #[serde(deserialize_with = "metric::percent")]
    pub cpu_usage: f64,
    pub cpu_model: String,
    pub emulated_machine: String,
    pub autostart: bool,
    pub boot_order: Option<BootOrder>,
    pub last_message: Option<String>,
    pub last_message_detail: Option<LastMessageDetail>,
    pub disks: Vec<Disk>,
}

impl Vm {
    pub fn new(name: impl Into<String>, connection_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            connection_name: connection_name.into(),
            ..Default::default()
        }
    }

    pub fn with_state(mut self, state: impl Into<VmState>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Boot device types in boot priority order.
    pub fn boot_devices(&self) -> impl Iterator<Item = &str> {
        self.boot_order
            .iter()
            .flat_map(|order| order.devices.iter())
            .map(|device| device.device_type.as_str())
    }

    /// Text shown in the last-message tooltip: the exception if there is one,
    /// otherwise the short message.
    pub fn last_message_tooltip(&self) -> Option<&str> {
        let message = self.last_message.as_deref().filter(|m| !m.is_empty())?;
        let exception = self
            .last_message_detail
            .as_ref()
            .and_then(|detail| detail.exception.as_deref())
            .filter(|e| !e.is_empty());
        Some(exception.unwrap_or(message))
    }

    pub fn has_last_message(&self) -> bool {
        self.last_message.as_deref().is_some_and(|m| !m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VmUsage;

    #[test]
    fn test_state_round_trips_known_and_unknown() {
        assert_eq!(VmState::from("shut off"), VmState::ShutOff);
        assert_eq!(VmState::from("migrating"), VmState::Other("migrating".to_string()));
        assert_eq!(VmState::PmSuspended.as_str(), "pmsuspended");
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let vm: Vm = serde_json::from_str(
            r#"{"name": "web", "state": "running", "connectionName": "system",
                "bootOrder": {"devices": [{"type": "network"}, {"type": "disk"}]}}"#,
        )
        .unwrap();

        assert_eq!(vm.name, "web");
        assert_eq!(vm.state, Some(VmState::Running));
        assert_eq!(vm.current_memory, 0);
        assert_eq!(vm.cpu_usage, 0.0);
        assert!(!vm.autostart);
        assert_eq!(vm.boot_devices().collect::<Vec<_>>(), vec!["network", "disk"]);
    }

    #[test]
    fn test_bad_metrics_read_as_zero() {
        let vm: Vm = serde_json::from_str(
            r#"{"name": "a", "vcpus": -1, "cpuUsage": null,
                "currentMemory": "n/a", "rssMemory": -512}"#,
        )
        .unwrap();

        assert_eq!(vm.vcpus, 0);
        assert_eq!(vm.cpu_usage, 0.0);
        assert_eq!(vm.current_memory, 0);
        assert_eq!(vm.rss_memory, 0);
    }

    #[test]
    fn test_numeric_strings_and_floats_are_accepted() {
        let vm: Vm = serde_json::from_str(
            r#"{"name": "a", "vcpus": "4", "cpuUsage": 150.5, "currentMemory": 2048.0}"#,
        )
        .unwrap();

        assert_eq!(vm.vcpus, 4);
        assert_eq!(vm.cpu_usage, 150.5);
        assert_eq!(vm.current_memory, 2048);
        assert_eq!(VmUsage::from_vm(&vm).cpu_usage_percent, 37.6);
    }

    #[test]
    fn test_last_message_tooltip_prefers_exception() {
        let mut vm = Vm::new("db", "system");
        assert_eq!(vm.last_message_tooltip(), None);

        vm.last_message = Some("VM failed to start".to_string());
        assert_eq!(vm.last_message_tooltip(), Some("VM failed to start"));

        vm.last_message_detail = Some(LastMessageDetail {
            exception: Some("internal error: qemu unexpectedly closed".to_string()),
        });
        assert_eq!(
            vm.last_message_tooltip(),
            Some("internal error: qemu unexpectedly closed")
        );
    }
}
