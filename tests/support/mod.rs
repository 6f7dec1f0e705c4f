// Test doubles for the host capabilities the controller is built on.

use crate::core::{
    Config, ConfigPatch, ConfigStore, Controller, FrameScheduler, InputListeners, OverlaySurface,
    Rgb, RipplePaint, RipplePainter, SurfaceError,
};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
pub struct FakeSurface {
    pub present: bool,
    pub fail_with: Option<SurfaceError>,
    pub creates: usize,
    pub destroys: usize,
    pub resizes: usize,
    pub opacity: Option<f64>,
    pub clears: usize,
    pub painted: Vec<(RipplePaint, Rgb)>,
}

impl RipplePainter for FakeSurface {
    fn can_paint(&self) -> bool {
        self.present
    }

    fn clear(&mut self) {
        self.clears += 1;
        self.painted.clear();
    }

    fn fill_circle(&mut self, paint: &RipplePaint, color: Rgb) {
        assert!(self.present, "painted onto a detached surface");
        self.painted.push((*paint, color));
    }
}

impl OverlaySurface for FakeSurface {
    fn create(&mut self, opacity: f64) -> Result<(), SurfaceError> {
        if self.present {
            return Ok(());
        }
        if let Some(e) = self.fail_with.clone() {
            return Err(e);
        }
        self.creates += 1;
        self.present = true;
        self.opacity = Some(opacity);
        Ok(())
    }

    fn resize(&mut self) {
        if self.present {
            self.resizes += 1;
        }
    }

    fn destroy(&mut self) {
        if self.present {
            self.present = false;
            self.destroys += 1;
            self.painted.clear();
        }
    }

    fn is_present(&self) -> bool {
        self.present
    }

    fn set_opacity(&mut self, opacity: f64) {
        if self.present {
            self.opacity = Some(opacity);
        }
    }
}

#[derive(Default)]
pub struct FakeScheduler {
    pub next_id: u32,
    pub pending: Option<u32>,
    pub scheduled: usize,
    pub cancelled: Vec<u32>,
    pub refuse: bool,
}

impl FrameScheduler for FakeScheduler {
    type Handle = u32;

    fn schedule(&mut self) -> Option<u32> {
        if self.refuse {
            return None;
        }
        self.next_id += 1;
        self.scheduled += 1;
        self.pending = Some(self.next_id);
        Some(self.next_id)
    }

    fn cancel(&mut self, handle: u32) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
        self.cancelled.push(handle);
    }
}

#[derive(Default)]
pub struct FakeListeners {
    pub installed: bool,
    pub installs: usize,
    pub removals: usize,
}

impl InputListeners for FakeListeners {
    fn install(&mut self) {
        self.installed = true;
        self.installs += 1;
    }

    fn remove(&mut self) {
        if self.installed {
            self.installed = false;
            self.removals += 1;
        }
    }

    fn is_installed(&self) -> bool {
        self.installed
    }
}

pub type TestController = Controller<FakeSurface, FakeScheduler, FakeListeners>;

pub fn controller() -> TestController {
    Controller::new(
        FakeSurface::default(),
        FakeScheduler::default(),
        FakeListeners::default(),
    )
}

/// Controller after the initial load of the default record.
pub fn enabled_controller() -> TestController {
    let mut c = controller();
    c.apply(&ConfigPatch::from(&Config::default()));
    c
}

/// In-memory store. `emit` plays the part of the settings form writing a change.
#[derive(Default)]
pub struct MemoryStore {
    pub stored: RefCell<Option<ConfigPatch>>,
    pub fail_load: bool,
    pub saved: RefCell<Vec<Config>>,
    pub listeners: RefCell<Vec<Box<dyn FnMut(ConfigPatch)>>>,
}

impl MemoryStore {
    pub fn with(patch: ConfigPatch) -> Self {
        Self {
            stored: RefCell::new(Some(patch)),
            ..Self::default()
        }
    }

    pub fn emit(&self, patch: ConfigPatch) {
        for listener in self.listeners.borrow_mut().iter_mut() {
            listener(patch.clone());
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl ConfigStore for MemoryStore {
    async fn load(&self, defaults: &Config) -> anyhow::Result<ConfigPatch> {
        if self.fail_load {
            anyhow::bail!("storage unavailable");
        }
        let mut merged = defaults.clone();
        if let Some(stored) = self.stored.borrow().as_ref() {
            merged.merge(stored);
        }
        Ok(ConfigPatch::from(&merged))
    }

    async fn save(&self, config: &Config) -> anyhow::Result<()> {
        self.saved.borrow_mut().push(config.clone());
        *self.stored.borrow_mut() = Some(ConfigPatch::from(config));
        Ok(())
    }

    fn subscribe(&self, listener: Box<dyn FnMut(ConfigPatch)>) {
        self.listeners.borrow_mut().push(listener);
    }
}

pub fn shared(c: TestController) -> Rc<RefCell<TestController>> {
    Rc::new(RefCell::new(c))
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
