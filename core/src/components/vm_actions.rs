use super::dropdown::{DropdownButton, DropdownButtons};
use crate::actions::{force_reboot_vm, force_vm_off, reboot_vm, shutdown_vm, start_vm, Action};
use crate::dispatch::Dispatcher;
use crate::format::vm_id;
use crate::models::Vm;
use crate::provider::ConsoleConfig;
use crate::view::{el, Callback, Node};

/// The five lifecycle callbacks of one row.
#[derive(Debug, Clone, PartialEq)]
pub struct VmCallbacks {
    pub on_start: Callback,
    pub on_reboot: Callback,
    pub on_force_reboot: Callback,
    pub on_shutdown: Callback,
    pub on_force_off: Callback,
}

impl VmCallbacks {
    /// Binds each callback to dispatch the matching action for `vm`.
    pub fn bind(vm: &Vm, dispatch: &Dispatcher) -> Self {
        let bound = |create: fn(&Vm) -> Action| {
            let vm = vm.clone();
            let dispatch = dispatch.clone();
            Callback::new(move || dispatch.dispatch(create(&vm)))
        };

        Self {
            on_start: bound(start_vm),
            on_reboot: bound(reboot_vm),
            on_force_reboot: bound(force_reboot_vm),
            on_shutdown: bound(shutdown_vm),
            on_force_off: bound(force_vm_off),
        }
    }
}

pub fn vm_actions(
    vm: &Vm,
    config: &ConsoleConfig,
    dispatch: &Dispatcher,
    callbacks: &VmCallbacks,
) -> Node {
    let id = vm_id(&vm.name);
    let provider = &config.provider;
    let state = vm.state.as_ref();

    let reset = provider.can_reset(state).then(|| {
        DropdownButtons::new(
            DropdownButton::new("Restart", callbacks.on_reboot.clone())
                .with_id(format!("{}-reboot", id)),
            [DropdownButton::new("Force Restart", callbacks.on_force_reboot.clone())
                .with_id(format!("{}-forceReboot", id))],
        )
        .render()
    });

    let shutdown = provider.can_shutdown(state).then(|| {
        DropdownButtons::new(
            DropdownButton::new("Shut Down", callbacks.on_shutdown.clone())
                .with_id(format!("{}-off", id)),
            [DropdownButton::new("Force Shut Down", callbacks.on_force_off.clone())
                .with_id(format!("{}-forceOff", id))],
        )
        .render()
    });

    let run = provider.can_run(state).then(|| {
        el("button")
            .class("btn btn-default btn-danger")
            .id(format!("{}-run", id))
            .text("Run")
            .on_click(callbacks.on_start.clone())
    });

    let provider_actions = provider.vm_actions(vm, &config.provider_state, dispatch);

    el("div")
        .child(reset)
        .child(shutdown)
        .child(run)
        .child(provider_actions)
        .into()
}
