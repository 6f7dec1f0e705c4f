//! `chrome.storage.sync` as a [`ConfigStore`].

use crate::core::{patch_for_namespace, Config, ConfigPatch, ConfigStore, StorageChanges};
use anyhow::anyhow;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["chrome", "storage", "sync"], js_name = "get")]
    fn sync_get(defaults: &JsValue) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["chrome", "storage", "sync"], js_name = "set")]
    fn sync_set(items: &JsValue) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["chrome", "storage", "onChanged"], js_name = "addListener")]
    fn on_changed_add_listener(
        listener: &Closure<dyn FnMut(JsValue, JsValue)>,
    ) -> Result<(), JsValue>;
}

pub struct ChromeSyncStore;

impl ConfigStore for ChromeSyncStore {
    async fn load(&self, defaults: &Config) -> anyhow::Result<ConfigPatch> {
        let defaults = serde_wasm_bindgen::to_value(defaults)
            .map_err(|e| anyhow!("encode defaults: {}", e))?;
        let promise = sync_get(&defaults).map_err(|e| anyhow!("storage.sync.get: {:?}", e))?;
        let items = JsFuture::from(promise)
            .await
            .map_err(|e| anyhow!("storage.sync.get rejected: {:?}", e))?;
        serde_wasm_bindgen::from_value(items).map_err(|e| anyhow!("decode settings: {}", e))
    }

    async fn save(&self, config: &Config) -> anyhow::Result<()> {
        let items =
            serde_wasm_bindgen::to_value(config).map_err(|e| anyhow!("encode settings: {}", e))?;
        let promise = sync_set(&items).map_err(|e| anyhow!("storage.sync.set: {:?}", e))?;
        JsFuture::from(promise)
            .await
            .map_err(|e| anyhow!("storage.sync.set rejected: {:?}", e))?;
        Ok(())
    }

    fn subscribe(&self, mut listener: Box<dyn FnMut(ConfigPatch)>) {
        let closure = Closure::wrap(Box::new(move |changes: JsValue, namespace: JsValue| {
            let namespace = namespace.as_string().unwrap_or_default();
            let changes: StorageChanges = match serde_wasm_bindgen::from_value(changes) {
                Ok(c) => c,
                Err(e) => {
                    log::warn!("[store] ignoring malformed change set: {}", e);
                    return;
                }
            };
            match patch_for_namespace(&namespace, changes) {
                Some(patch) if !patch.is_empty() => listener(patch),
                _ => {}
            }
        }) as Box<dyn FnMut(JsValue, JsValue)>);
        if let Err(e) = on_changed_add_listener(&closure) {
            log::warn!("[store] storage.onChanged unavailable: {:?}", e);
        }
        closure.forget();
    }
}
