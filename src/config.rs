use crate::constants::{CONFIG_ATTR_PREFIX, WHEEL_CONTAINER_SELECTOR};
use crate::text::config_attribute;
use web_sys as web;
use wheel_core::{WidgetConfig, SETTING_KEYS};

/// Defaults overridden by `data-wheel-*` attributes on the wheel container.
/// Bad values are logged and skipped.
pub fn read(document: &web::Document) -> WidgetConfig {
    let mut config = WidgetConfig::default();
    let Some(container) = document.query_selector(WHEEL_CONTAINER_SELECTOR).ok().flatten() else {
        return config;
    };
    for key in SETTING_KEYS {
        let attr = config_attribute(CONFIG_ATTR_PREFIX, key);
        if let Some(value) = container.get_attribute(&attr) {
            match config.apply(key, &value) {
                Ok(()) => log::info!("[config] {}={}", key, value),
                Err(e) => log::warn!("[config] ignoring {}: {}", attr, e),
            }
        }
    }
    config
}
