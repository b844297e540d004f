use crate::format::{rephrase_ui, UiKey};
use crate::models::VmState;
use crate::provider::{ConsoleConfig, StateIconSpec};
use crate::view::{el, Node};

/// Built-in icon for each state of the common vocabulary.
pub fn default_state_icon(state: &str) -> Option<StateIconSpec> {
    let (class_name, title) = match state {
        "running" => ("pficon pficon-ok icon-1x-vms", "The VM is running."),
        "idle" => ("pficon pficon-running icon-1x-vms", "The VM is idle."),
        "paused" => ("pficon pficon-pause icon-1x-vms", "The VM is paused."),
        "shutdown" => ("glyphicon glyphicon-wrench icon-1x-vms", "The VM is going down."),
        "shut off" => ("fa fa-arrow-circle-o-down icon-1x-vms", "The VM is down."),
        "crashed" => ("pficon pficon-error-circle-o icon-1x-vms", "The VM crashed."),
        "dying" => (
            "pficon pficon-warning-triangle-o icon-1x-vms",
            "The VM is in process of dying (shut down or crash is not completed).",
        ),
        "pmsuspended" => (
            "pficon pficon-ok icon-1x-vms",
            "The VM is suspended by guest power management.",
        ),
        _ => return None,
    };
    Some(StateIconSpec::new(class_name, title))
}

/// Icon for `state`: the provider's override wins, then the built-in table.
pub fn resolve_state_icon(state: &str, config: &ConsoleConfig) -> Option<StateIconSpec> {
    config
        .provider
        .vm_state_map()
        .and_then(|mut overrides| overrides.remove(state))
        .or_else(|| default_state_icon(state))
}

pub fn state_icon(state: Option<&VmState>, config: &ConsoleConfig, value_id: &str) -> Node {
    let Some(state) = state else {
        return el("div").into();
    };
    let state = state.as_str();

    match resolve_state_icon(state, config) {
        Some(icon) => el("span")
            .title(icon.title)
            .attr("data-toggle", "tooltip")
            .attr("data-placement", "left")
            .child(el("span").id(value_id).text(rephrase_ui(UiKey::VmStates, state)))
            .text("\u{a0}")
            .child(el("i").class(icon.class_name))
            .into(),
        None => el("small").text(state).into(),
    }
}
