use crate::format::{format_bytes, vm_id};
use crate::models::{Disk, Vm};
use crate::view::{el, Element, Node};

pub const NO_DISKS: &str = "No disks defined for this VM";

fn cell(id: String, value: String) -> Element {
    el("td").id(id).text(value)
}

fn disk_row(vm: &Vm, disk: &Disk) -> Element {
    let prefix = format!("{}-disks-{}", vm_id(&vm.name), disk.target);
    let optional_bytes = |bytes: Option<u64>| bytes.map(format_bytes).unwrap_or_default();
    let device = if disk.readonly {
        format!("{} (read-only)", disk.device)
    } else {
        disk.device.clone()
    };

    el("tr")
        .child(el("td").text(disk.target.clone()))
        .child(cell(format!("{}-bus", prefix), disk.bus.clone()))
        .child(cell(format!("{}-device", prefix), device))
        .child(cell(
            format!("{}-source", prefix),
            disk.source.clone().unwrap_or_default(),
        ))
        .child(cell(format!("{}-used", prefix), optional_bytes(disk.allocation)))
        .child(cell(format!("{}-capacity", prefix), optional_bytes(disk.capacity)))
}

pub fn vm_disks_tab(vm: &Vm) -> Node {
    if vm.disks.is_empty() {
        return el("div")
            .class("machines-disks-empty")
            .id(format!("{}-disks-none", vm_id(&vm.name)))
            .text(NO_DISKS)
            .into();
    }

    let head = el("thead").child(el("tr").children(
        ["Target", "Bus", "Device", "Source", "Used", "Capacity"]
            .into_iter()
            .map(|title| el("th").text(title)),
    ));

    el("table")
        .class("machines-disks table")
        .child(head)
        .child(el("tbody").children(vm.disks.iter().map(|disk| disk_row(vm, disk))))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::testing::running_vm;

    #[test]
    fn test_no_disks() {
        let node = vm_disks_tab(&running_vm("a"));
        assert_eq!(node.find_by_id("vm-a-disks-none").unwrap().text_content(), NO_DISKS);
    }

    #[test]
    fn test_disk_rows() {
        let mut vm = running_vm("a");
        vm.disks = vec![
            Disk {
                target: "vda".to_string(),
                bus: "virtio".to_string(),
                device: "disk".to_string(),
                source: Some("/var/lib/libvirt/images/a.qcow2".to_string()),
                capacity: Some(21_474_836_480),
                allocation: Some(3_221_225_472),
                readonly: false,
            },
            Disk {
                target: "sda".to_string(),
                bus: "sata".to_string(),
                device: "cdrom".to_string(),
                readonly: true,
                ..Default::default()
            },
        ];

        let node = vm_disks_tab(&vm);

        assert_eq!(node.find_by_id("vm-a-disks-vda-capacity").unwrap().text_content(), "20 GiB");
        assert_eq!(node.find_by_id("vm-a-disks-vda-used").unwrap().text_content(), "3 GiB");
        assert_eq!(node.find_by_id("vm-a-disks-sda-device").unwrap().text_content(), "cdrom (read-only)");
        assert_eq!(node.find_by_id("vm-a-disks-sda-source").unwrap().text_content(), "");
    }
}
