use crate::format::{format_bytes, to_fixed_string, to_gigabytes, Unit};
use crate::models::{Vm, VmUsage};
use crate::view::{el, ChartData, ChartSize, DonutChart, Node};

// keep in sync with the .usage-donut-caption stylesheet
pub const CHART_SIZE: ChartSize = ChartSize {
    width: 220,
    height: 170,
};

pub fn memory_chart(usage: &VmUsage) -> DonutChart {
    let used = to_gigabytes(usage.rss_memory, Unit::KiB);
    DonutChart {
        data: ChartData::used_available(used, to_gigabytes(usage.available_memory, Unit::KiB)),
        size: CHART_SIZE,
        width: 8,
        tooltip_text: " ".to_string(),
        primary_title: to_fixed_string(used, 2),
        secondary_title: "GB".to_string(),
        caption: format!("used from {} memory", format_bytes(usage.memory_total_bytes())),
    }
}

pub fn cpu_chart(usage: &VmUsage) -> DonutChart {
    DonutChart {
        data: ChartData::used_available(usage.cpu_usage_percent, usage.cpu_available_percent),
        size: CHART_SIZE,
        width: 8,
        tooltip_text: " ".to_string(),
        primary_title: to_fixed_string(usage.cpu_usage_percent, 1),
        secondary_title: "%".to_string(),
        caption: format!("used from {} vCPUs", usage.total_cpus),
    }
}

pub fn vm_usage_tab(vm: &Vm) -> Node {
    let usage = VmUsage::from_vm(vm);

    log::debug!(
        "vm_usage_tab({}): rss_memory: {} KiB, memory_total: {} KiB, available: {} KiB, total_cpus: {}, cpu_usage: {}",
        vm.name,
        usage.rss_memory,
        usage.memory_total,
        usage.available_memory,
        usage.total_cpus,
        usage.cpu_usage_percent
    );

    el("table")
        .child(
            el("tr")
                .child(el("td").child(memory_chart(&usage).render()))
                .child(el("td").child(cpu_chart(&usage).render())),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::testing::running_vm;

    #[test]
    fn test_memory_chart() {
        let mut vm = running_vm("a");
        vm.current_memory = 2_097_152;
        vm.rss_memory = 1_048_576;

        let chart = memory_chart(&VmUsage::from_vm(&vm));

        assert_eq!(
            chart.data.columns,
            vec![("Used".to_string(), 1.0), ("Available".to_string(), 1.0)]
        );
        assert_eq!(chart.primary_title, "1.00");
        assert_eq!(chart.secondary_title, "GB");
        assert_eq!(chart.caption, "used from 2 GiB memory");
        assert_eq!(chart.size, CHART_SIZE);
    }

    #[test]
    fn test_cpu_chart() {
        let mut vm = running_vm("a");
        vm.vcpus = 4;
        vm.cpu_usage = 200.0;

        let chart = cpu_chart(&VmUsage::from_vm(&vm));

        assert_eq!(chart.primary_title, "50.0");
        assert_eq!(chart.secondary_title, "%");
        assert_eq!(chart.caption, "used from 4 vCPUs");
        assert_eq!(chart.data.columns[1], ("Available".to_string(), 50.0));
    }

    #[test]
    fn test_cpu_chart_over_full_usage_is_reported_as_is() {
        let mut vm = running_vm("a");
        vm.vcpus = 1;
        vm.cpu_usage = 120.0;

        let chart = cpu_chart(&VmUsage::from_vm(&vm));
        assert_eq!(chart.primary_title, "120.0");
        assert_eq!(chart.data.columns[1].1, -20.0);
    }

    #[test]
    fn test_usage_tab_renders_both_charts() {
        let mut vm = running_vm("a");
        vm.current_memory = 4_194_304;
        vm.vcpus = 2;

        let node = vm_usage_tab(&vm);

        assert_eq!(node.find_all_by_class("usage-donut").len(), 2);
        let text = node.text_content();
        assert!(text.contains("used from 4 GiB memory"));
        assert!(text.contains("used from 2 vCPUs"));
    }
}
