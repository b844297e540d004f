//! The plugin interface a virtualization backend implements to drive the VM list.
//!
//! The three capability predicates are required. Everything else is an optional
//! extension point with a default that contributes nothing.

use crate::dispatch::Dispatcher;
use crate::models::{Vm, VmState};
use crate::view::Node;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Opaque, provider-owned state handed back to provider extensions.
pub type ProviderState = serde_json::Value;

/// Icon class and tooltip used for one VM state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateIconSpec {
    pub class_name: String,
    pub title: String,
}

impl StateIconSpec {
    pub fn new(class_name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            title: title.into(),
        }
    }
}

/// State name to icon overrides a provider can ship.
pub type StateMap = BTreeMap<String, StateIconSpec>;

type TabRenderFn = Arc<dyn Fn(&Vm, &ProviderState, &Dispatcher) -> Node + Send + Sync>;

/// An extra detail tab contributed by a provider.
#[derive(Clone)]
pub struct ProviderTab {
    pub name: String,
    renderer: TabRenderFn,
}

impl ProviderTab {
    pub fn new(
        name: impl Into<String>,
        renderer: impl Fn(&Vm, &ProviderState, &Dispatcher) -> Node + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            renderer: Arc::new(renderer),
        }
    }

    pub fn render(&self, vm: &Vm, provider_state: &ProviderState, dispatch: &Dispatcher) -> Node {
        (self.renderer)(vm, provider_state, dispatch)
    }
}

impl fmt::Debug for ProviderTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderTab")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait Provider: Send + Sync {
    /// Whether the reset controls are offered. `None` when the VM reports no state.
    fn can_reset<'a>(&self, state: Option<&'a VmState>) -> bool;

    fn can_shutdown<'a>(&self, state: Option<&'a VmState>) -> bool;

    fn can_run<'a>(&self, state: Option<&'a VmState>) -> bool;

    /// Icon overrides keyed by state name. Consulted before the built-in table,
    /// so a provider can both restyle known states and add new ones.
    fn vm_state_map(&self) -> Option<StateMap> {
        None
    }

    /// Extra action controls shown next to the built-in ones.
    fn vm_actions(
        &self,
        _vm: &Vm,
        _provider_state: &ProviderState,
        _dispatch: &Dispatcher,
    ) -> Option<Node> {
        None
    }

    /// Extra column for the Overview tab.
    fn vm_overview(&self, _vm: &Vm, _provider_state: &ProviderState) -> Option<Node> {
        None
    }

    /// Tabs appended after the built-in ones, in this order.
    fn vm_tabs(&self) -> Vec<ProviderTab> {
        Vec::new()
    }
}

/// Everything the components need besides the VM itself.
#[derive(Clone)]
pub struct ConsoleConfig {
    pub provider: Arc<dyn Provider>,
    pub provider_state: ProviderState,
}

impl ConsoleConfig {
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self {
            provider,
            provider_state: ProviderState::Null,
        }
    }

    pub fn with_provider_state(mut self, provider_state: ProviderState) -> Self {
        self.provider_state = provider_state;
        self
    }
}

impl fmt::Debug for ConsoleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleConfig")
            .field("provider_state", &self.provider_state)
            .finish_non_exhaustive()
    }
}
