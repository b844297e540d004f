use crate::models::{AppConfig, ProviderKind};
use crate::services::LibvirtProvider;
use machines_core::dispatch::{self, Dispatcher};
use machines_core::{
    host_vms_list, Action, ConsoleConfig, ListingState, Node, Provider, ProviderState, ViewError,
    Vm,
};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;

pub fn provider_for(kind: ProviderKind) -> Arc<dyn Provider> {
    match kind {
        ProviderKind::Libvirt => Arc::new(LibvirtProvider::new()),
    }
}

/// Owns the provider configuration and the dispatch channel the rendered view
/// writes into.
pub struct Console {
    config: ConsoleConfig,
    dispatcher: Dispatcher,
    actions: UnboundedReceiver<Action>,
}

impl Console {
    pub fn new(config: ConsoleConfig) -> Self {
        let (dispatcher, actions) = dispatch::channel();
        Self {
            config,
            dispatcher,
            actions,
        }
    }

    pub fn from_app_config(app_config: &AppConfig, provider_state: ProviderState) -> Self {
        Self::new(
            ConsoleConfig::new(provider_for(app_config.provider))
                .with_provider_state(provider_state),
        )
    }

    pub fn render(&self, vms: &[Vm], listing_state: &ListingState) -> Node {
        host_vms_list(vms, &self.config, &self.dispatcher, listing_state)
    }

    /// Renders the list and clicks the element with `element_id` in it.
    pub fn click(
        &self,
        vms: &[Vm],
        listing_state: &ListingState,
        element_id: &str,
    ) -> Result<(), ViewError> {
        tracing::debug!("Clicking {}", element_id);
        self.render(vms, listing_state).click(element_id)
    }

    /// Actions dispatched since the last call, in dispatch order.
    pub fn drain_actions(&mut self) -> Vec<Action> {
        let mut drained = Vec::new();
        while let Ok(action) = self.actions.try_recv() {
            tracing::info!("Dispatched {:?}", action);
            drained.push(action);
        }
        drained
    }
}
