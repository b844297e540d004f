use super::vm_actions::VmCallbacks;
use super::vm_row::vm_row;
use crate::collate::locale_compare;
use crate::dispatch::Dispatcher;
use crate::models::Vm;
use crate::provider::ConsoleConfig;
use crate::view::{el, Listing, ListingState, Node};

pub const NO_VM_MESSAGE: &str = "No VM is running or defined on this host";

pub fn no_vm() -> Node {
    el("div")
        .class("cockpit-log-warning")
        .child(
            el("div").class("blank-slate-pf").child(
                el("div")
                    .class("blank-slate-pf-icon")
                    .child(el("i").class("pficon pficon-virtual-machine"))
                    .child(el("h1").text(NO_VM_MESSAGE)),
            ),
        )
        .into()
}

/// VMs in listing order: ascending by name, stable for equal names.
pub fn sorted_vms(vms: &[Vm]) -> Vec<&Vm> {
    let mut sorted: Vec<&Vm> = vms.iter().collect();
    sorted.sort_by(|a, b| locale_compare(&a.name, &b.name));
    sorted
}

/// All VMs defined on this host.
pub fn host_vms_list(
    vms: &[Vm],
    config: &ConsoleConfig,
    dispatch: &Dispatcher,
    listing_state: &ListingState,
) -> Node {
    let container = el("div").class("container-fluid");

    if vms.is_empty() {
        return container.child(no_vm()).into();
    }

    let rows = sorted_vms(vms)
        .into_iter()
        .map(|vm| vm_row(vm, config, dispatch, &VmCallbacks::bind(vm, dispatch)))
        .collect();

    let listing = Listing {
        title: "Virtual Machines".to_string(),
        column_titles: vec![
            "Name".to_string(),
            "Connection".to_string(),
            "State".to_string(),
        ],
        rows,
    };

    container.child(listing.render(listing_state)).into()
}
