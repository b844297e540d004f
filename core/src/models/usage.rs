use super::Vm;
use crate::format::to_fixed_precision;

/// Usage figures derived from a VM snapshot for the Usage tab.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VmUsage {
    /// KiB
    pub rss_memory: u64,
    /// KiB
    pub memory_total: u64,
    /// KiB, never negative
    pub available_memory: u64,
    pub total_cpus: u32,
    /// Per-vCPU share of `cpu_usage`, rounded to one decimal.
    pub cpu_usage_percent: f64,
    /// `100 - cpu_usage_percent`. Goes negative when the guest reports more
    /// than 100% per vCPU.
    pub cpu_available_percent: f64,
}

impl VmUsage {
    pub fn from_vm(vm: &Vm) -> Self {
        let rss_memory = vm.rss_memory;
        let memory_total = vm.current_memory;
        let available_memory = memory_total.saturating_sub(rss_memory);

        let total_cpus = vm.vcpus;
        let cpu_usage = vm.cpu_usage / f64::from(total_cpus.max(1));
        let cpu_usage = if cpu_usage.is_nan() { 0.0 } else { cpu_usage };
        let cpu_usage_percent = to_fixed_precision(cpu_usage, 1);

        Self {
            rss_memory,
            memory_total,
            available_memory,
            total_cpus,
            cpu_usage_percent,
            cpu_available_percent: 100.0 - cpu_usage_percent,
        }
    }

    pub fn memory_total_bytes(&self) -> u64 {
        self.memory_total.saturating_mul(1024)
    }
}
