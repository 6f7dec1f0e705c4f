//! Settings store capability and the boot sequence that feeds it into a
//! [`Controller`].

use crate::core::config::{Config, ConfigPatch};
use crate::core::driver::FrameScheduler;
use crate::core::lifecycle::{Controller, InputListeners};
use crate::core::surface::OverlaySurface;
use std::cell::RefCell;
use std::rc::Rc;

/// Persistent key-value settings with change notifications.
///
/// Implementations only move records around; merging and reacting is the
/// controller's job.
#[allow(async_fn_in_trait)]
pub trait ConfigStore {
    /// Fetch the stored record, with `defaults` filling any missing key.
    async fn load(&self, defaults: &Config) -> anyhow::Result<ConfigPatch>;
    /// Write the full record.
    async fn save(&self, config: &Config) -> anyhow::Result<()>;
    /// Deliver every later external change as a partial record.
    fn subscribe(&self, listener: Box<dyn FnMut(ConfigPatch)>);
}

/// Subscribe the controller to changes, then apply the initial record.
///
/// If the load fails (or never completes) the controller simply stays in
/// its inactive default state.
pub async fn boot<St, S, F, L>(store: &St, controller: &Rc<RefCell<Controller<S, F, L>>>)
where
    St: ConfigStore,
    S: OverlaySurface,
    F: FrameScheduler,
    L: InputListeners,
    Controller<S, F, L>: 'static,
{
    let ctl = controller.clone();
    store.subscribe(Box::new(move |patch| {
        log::debug!("[store] change {:?}", patch);
        match ctl.try_borrow_mut() {
            Ok(mut c) => c.apply(&patch),
            Err(_) => log::warn!("[store] controller busy, change dropped"),
        }
    }));

    let current = controller.borrow().config().clone();
    match store.load(&current).await {
        Ok(patch) => controller.borrow_mut().apply(&patch),
        Err(e) => log::warn!("[store] initial load failed: {:#}", e),
    }
}
