//! Background request dispatch
//!
//! Each [`Action`] runs on its own tokio task; finished requests are reported
//! back to the UI loop over a bounded channel.

use crate::actions::{Action, Outcome, perform};
use crate::api::VendorApi;
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[derive(Clone)]
pub struct Dispatcher {
    api: Arc<dyn VendorApi>,
    sender: mpsc::Sender<Outcome>,
}

impl Dispatcher {
    /// Creates a dispatcher and the receiver its outcomes arrive on.
    pub fn new(api: Arc<dyn VendorApi>) -> (Self, mpsc::Receiver<Outcome>) {
        let (sender, receiver) = mpsc::channel::<Outcome>(EVENT_QUEUE_SIZE);
        (Self { api, sender }, receiver)
    }

    pub fn api(&self) -> &Arc<dyn VendorApi> {
        &self.api
    }

    pub fn dispatch(&self, action: Action) -> JoinHandle<()> {
        let api = Arc::clone(&self.api);
        let sender = self.sender.clone();
        tokio::spawn(async move {
            log::debug!("dispatching {:?}", action);
            let outcome = perform(api.as_ref(), action).await;
            if sender.send(outcome).await.is_err() {
                log::debug!("outcome dropped, UI loop has exited");
            }
        })
    }
}
