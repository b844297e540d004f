use crate::format::{format_bytes, rephrase_ui, vm_id, UiKey};
use crate::models::Vm;
use crate::provider::ConsoleConfig;
use crate::view::{el, Node};

pub const NO_BOOT_DEVICE: &str = "No boot device found";

/// A label/value row of the overview tables.
pub fn overview_record(id: Option<String>, descr: &str, value: impl Into<String>) -> Node {
    el("tr")
        .child(el("td").class("top").child(el("label").class("control-label").text(descr)))
        .child(el("td").maybe_id(id).text(value))
        .into()
}

/// Boot devices joined in boot priority order, e.g. `network,disk,disk`.
pub fn vm_boot_order(vm: &Vm) -> Node {
    let devices: Vec<&str> = vm.boot_devices().collect();
    let boot_order = if devices.is_empty() {
        NO_BOOT_DEVICE.to_string()
    } else {
        devices.join(",")
    };

    overview_record(
        Some(format!("{}-bootorder", vm_id(&vm.name))),
        "Boot Order:",
        boot_order,
    )
}

pub fn vm_last_message(vm: &Vm) -> Node {
    let (Some(message), Some(detail)) = (vm.last_message.as_deref(), vm.last_message_tooltip())
    else {
        // keeps the rendered structure stable
        return el("tr").into();
    };

    el("div")
        .child(el("span").class("pficon-warning-triangle-o"))
        .text("\u{a0}")
        .child(
            el("span")
                .title(detail)
                .attr("data-toggle", "tooltip")
                .id(format!("{}-last-message", vm_id(&vm.name)))
                .text(message),
        )
        .into()
}

fn column(records: Vec<Node>) -> Node {
    el("td")
        .class("machines-listing-detail-top-column")
        .child(el("table").class("form-table-ct").children(records))
        .into()
}

pub fn vm_overview_tab(vm: &Vm, config: &ConsoleConfig) -> Node {
    let id = vm_id(&vm.name);

    let provider_content = config
        .provider
        .vm_overview(vm, &config.provider_state)
        .map(|content| column(vec![content]));

    let row = el("tr")
        .class("machines-listing-ct-body-detail")
        .child(column(vec![
            overview_record(None, "Memory:", format_bytes(vm.current_memory.saturating_mul(1024))),
            overview_record(Some(format!("{}-vcpus", id)), "vCPUs:", vm.vcpus.to_string()),
        ]))
        .child(column(vec![
            overview_record(
                Some(format!("{}-emulatedmachine", id)),
                "Emulated Machine:",
                vm.emulated_machine.clone(),
            ),
            overview_record(Some(format!("{}-cputype", id)), "CPU Type:", vm.cpu_model.clone()),
        ]))
        .child(column(vec![
            vm_boot_order(vm),
            overview_record(
                Some(format!("{}-autostart", id)),
                "Autostart:",
                rephrase_ui(UiKey::Autostart, &vm.autostart.to_string()),
            ),
        ]))
        .child(provider_content);

    el("div")
        .child(el("table").class("machines-width-max").child(row))
        .child(vm_last_message(vm))
        .into()
}
