use machines_core::{Provider, VmState};

/// Capabilities of VMs managed through libvirt.
#[derive(Debug, Clone, Copy, Default)]
pub struct LibvirtProvider;

impl LibvirtProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Provider for LibvirtProvider {
    // A VM that reports no state is offered no controls.
    fn can_reset(&self, state: Option<&VmState>) -> bool {
        matches!(
            state,
            Some(VmState::Running | VmState::Idle | VmState::Paused)
        )
    }

    fn can_shutdown(&self, state: Option<&VmState>) -> bool {
        self.can_reset(state)
    }

    fn can_run(&self, state: Option<&VmState>) -> bool {
        state == Some(&VmState::ShutOff)
    }
}
