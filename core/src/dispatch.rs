//! The single write channel of the view layer.

use crate::actions::Action;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Sink for actions. Dispatching is fire-and-forget: no result comes back.
pub trait Dispatch: Send + Sync {
    fn dispatch(&self, action: Action);
}

pub type Dispatcher = Arc<dyn Dispatch>;

impl Dispatch for UnboundedSender<Action> {
    fn dispatch(&self, action: Action) {
        log::debug!("dispatch: {:?}", action);
        if let Err(e) = self.send(action) {
            log::warn!("Dropping action, receiver is gone: {:?}", e.0);
        }
    }
}

/// Creates a dispatcher backed by an unbounded channel.
pub fn channel() -> (Dispatcher, UnboundedReceiver<Action>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Arc::new(tx), rx)
}
