use super::disks::vm_disks_tab;
use super::overview::vm_overview_tab;
use super::state_icon::state_icon;
use super::usage::vm_usage_tab;
use super::vm_actions::{vm_actions, VmCallbacks};
use crate::dispatch::Dispatcher;
use crate::format::{rephrase_ui, vm_id, UiKey};
use crate::models::Vm;
use crate::provider::ConsoleConfig;
use crate::view::{el, ListingColumn, ListingRow, Node, TabRenderer};

fn row_name(vm: &Vm) -> Node {
    let name = el("span").id(format!("{}-row", vm_id(&vm.name))).text(vm.name.clone());

    if vm.has_last_message() {
        el("div")
            .child(el("span").class("pficon-warning-triangle-o"))
            .text("\u{a0}")
            .child(name)
            .into()
    } else {
        name.into()
    }
}

fn tab_renderers(vm: &Vm, config: &ConsoleConfig, dispatch: &Dispatcher) -> Vec<TabRenderer> {
    let mut tabs = vec![
        {
            let (vm, config) = (vm.clone(), config.clone());
            TabRenderer::new("Overview", move || vm_overview_tab(&vm, &config))
        },
        {
            let vm = vm.clone();
            TabRenderer::new("Usage", move || vm_usage_tab(&vm)).only_active()
        },
        {
            let vm_for_tab = vm.clone();
            TabRenderer::new(
                el("div").id(format!("{}-disks", vm_id(&vm.name))).text("Disks"),
                move || vm_disks_tab(&vm_for_tab),
            )
            .only_active()
        },
    ];

    tabs.extend(config.provider.vm_tabs().into_iter().map(|tab| {
        let vm = vm.clone();
        let provider_state = config.provider_state.clone();
        let dispatch = dispatch.clone();
        let name = tab.name.clone();
        TabRenderer::new(name, move || tab.render(&vm, &provider_state, &dispatch))
    }));

    tabs
}

/// One row of the VM listing.
pub fn vm_row(
    vm: &Vm,
    config: &ConsoleConfig,
    dispatch: &Dispatcher,
    callbacks: &VmCallbacks,
) -> ListingRow {
    let state = state_icon(
        vm.state.as_ref(),
        config,
        &format!("{}-state", vm_id(&vm.name)),
    );

    ListingRow {
        key: vm.name.clone(),
        columns: vec![
            ListingColumn::header(row_name(vm)),
            ListingColumn::cell(rephrase_ui(UiKey::Connections, &vm.connection_name)),
            ListingColumn::cell(state),
        ],
        tabs: tab_renderers(vm, config, dispatch),
        actions: vm_actions(vm, config, dispatch, callbacks),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::testing::{config, running_vm, StubProvider};
    use crate::dispatch;
    use crate::view::Presence;

    #[test]
    fn test_columns() {
        let (dispatch, _rx) = dispatch::channel();
        let config = config(StubProvider::default());
        let vm = running_vm("web");

        let row = vm_row(&vm, &config, &dispatch, &VmCallbacks::bind(&vm, &dispatch));

        assert_eq!(row.key, "web");
        assert_eq!(row.columns.len(), 3);
        assert!(row.columns[0].header);
        assert_eq!(row.columns[0].content.to_html(), "<span id=\"vm-web-row\">web</span>");
        assert_eq!(row.columns[1].content.text_content(), "System");
        assert!(row.columns[2].content.find_by_id("vm-web-state").is_some());
    }

    #[test]
    fn test_warning_glyph_with_last_message() {
        let (dispatch, _rx) = dispatch::channel();
        let config = config(StubProvider::default());
        let mut vm = running_vm("web");
        vm.last_message = Some("failed".to_string());

        let row = vm_row(&vm, &config, &dispatch, &VmCallbacks::bind(&vm, &dispatch));
        let name = &row.columns[0].content;

        assert_eq!(name.find_all_by_class("pficon-warning-triangle-o").len(), 1);
        assert_eq!(name.find_by_id("vm-web-row").unwrap().text_content(), "web");
    }

    #[test]
    fn test_builtin_tabs() {
        let (dispatch, _rx) = dispatch::channel();
        let config = config(StubProvider::default());
        let vm = running_vm("web");

        let row = vm_row(&vm, &config, &dispatch, &VmCallbacks::bind(&vm, &dispatch));
        let names: Vec<String> = row.tabs.iter().map(|t| t.name.text_content()).collect();
        let presence: Vec<Presence> = row.tabs.iter().map(|t| t.presence).collect();

        assert_eq!(names, vec!["Overview", "Usage", "Disks"]);
        assert_eq!(
            presence,
            vec![Presence::Default, Presence::OnlyActive, Presence::OnlyActive]
        );
        assert!(row.tabs[2].name.find_by_id("vm-web-disks").is_some());
        assert!(row.tabs[0].render().find_by_id("vm-web-vcpus").is_some());
    }

    #[test]
    fn test_provider_tabs_appended_in_order() {
        let (dispatch, mut rx) = dispatch::channel();
        let config = config(StubProvider::default().with_tabs(&["Console", "Snapshots"]))
            .with_provider_state(serde_json::json!({"host": "host-1"}));
        let vm = running_vm("web");

        let row = vm_row(&vm, &config, &dispatch, &VmCallbacks::bind(&vm, &dispatch));
        let names: Vec<String> = row.tabs.iter().map(|t| t.name.text_content()).collect();
        assert_eq!(names, vec!["Overview", "Usage", "Disks", "Console", "Snapshots"]);

        let body = row.tabs[4].render();
        assert_eq!(body.text_content(), "Snapshots of web on host-1");
        body.click("vm-web-tab-Snapshots").unwrap();
        assert!(matches!(rx.try_recv().unwrap(), crate::Action::ProviderAction { .. }));
    }
}
