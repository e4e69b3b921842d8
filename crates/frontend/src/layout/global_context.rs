use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::{BTreeMap, HashMap};
use web_sys::window;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Синхронизация активного таба с `?active=` в адресной строке.
    ///
    /// Если параметра нет, открывается `default_tab` из конфигурации.
    pub fn init_router_integration(&self, default_tab: &str) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();

        let initial = params
            .get("active")
            .cloned()
            .filter(|k| !k.is_empty())
            .unwrap_or_else(|| default_tab.to_string());
        if !initial.is_empty() {
            self.open_tab(&initial, super::tabs::tab_label_for_key(&initial));
        }

        let this = *self;
        Effect::new(move |_| {
            if let Some(active_key) = this.active.get() {
                let new_url = active_query(&search_without_active(), &active_key);

                let current_search = window()
                    .and_then(|w| w.location().search().ok())
                    .unwrap_or_default();

                // Only update URL if it actually changed
                if current_search != new_url {
                    if let Some(w) = window() {
                        if let Ok(history) = w.history() {
                            let _ = history.replace_state_with_url(
                                &wasm_bindgen::JsValue::NULL,
                                "",
                                Some(&new_url),
                            );
                        }
                    }
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        leptos::logging::log!("🔷 open_tab: key='{}', title='{}'", key, title);
        let added = self.opened.try_update(|tabs| push_tab(tabs, key, title));
        if added == Some(true) {
            leptos::logging::log!("✅ Tab added: '{}'", key);
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        leptos::logging::log!("🔴 close_tab: key='{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self.opened.with_untracked(|tabs| next_active_after_close(tabs));
            leptos::logging::log!("➡️ Next active tab: {:?}", next_active);
            self.active.set(next_active);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

/// Добавить таб, если его ещё нет. Возвращает `true`, если таб добавлен.
fn push_tab(tabs: &mut Vec<Tab>, key: &str, title: &str) -> bool {
    if tabs.iter().any(|tab| tab.key == key) {
        return false;
    }
    tabs.push(Tab {
        key: key.to_string(),
        title: title.to_string(),
    });
    true
}

/// После закрытия активного таба активным становится последний открытый
fn next_active_after_close(tabs: &[Tab]) -> Option<String> {
    tabs.last().map(|t| t.key.clone())
}

/// Остальные параметры адресной строки (refresh_ms, tab) без `active`
fn search_without_active() -> HashMap<String, String> {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let mut params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.remove("active");
    params
}

/// Query string с активным табом; ключи в алфавитном порядке
fn active_query(params: &HashMap<String, String>, active_key: &str) -> String {
    let mut map: BTreeMap<&str, &str> = params
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    map.insert("active", active_key);
    let query = serde_qs::to_string(&map).unwrap_or_default();
    format!("?{}", query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_tab_is_idempotent() {
        let mut tabs = Vec::new();
        assert!(push_tab(&mut tabs, "a001_host", "主机"));
        assert!(!push_tab(&mut tabs, "a001_host", "主机"));
        assert!(push_tab(&mut tabs, "a005_alert", "告警"));
        assert_eq!(tabs.len(), 2);
    }

    #[test]
    fn test_next_active_after_close() {
        let mut tabs = Vec::new();
        assert_eq!(next_active_after_close(&tabs), None);
        push_tab(&mut tabs, "d400_overview", "概览");
        push_tab(&mut tabs, "a001_host", "主机");
        assert_eq!(next_active_after_close(&tabs), Some("a001_host".to_string()));
    }

    #[test]
    fn test_active_query_keeps_other_params() {
        let params = HashMap::from([("refresh_ms".to_string(), "5000".to_string())]);
        assert_eq!(
            active_query(&params, "a001_host"),
            "?active=a001_host&refresh_ms=5000"
        );
        assert_eq!(active_query(&HashMap::new(), "d400_overview"), "?active=d400_overview");
    }
}
