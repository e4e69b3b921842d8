//! Конфигурация дашборда.
//!
//! Значения по умолчанию встроены в бинарник (TOML), поверх них
//! применяются переопределения из query string (`?refresh_ms=5000&tab=a001_host`).

use serde::Deserialize;
use web_sys::window;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct DashboardConfig {
    pub refresh: RefreshConfig,
    pub help: HelpConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct RefreshConfig {
    /// Интервал обновления обзора, мс (<= 0 отключает опрос)
    pub overview_ms: i64,
    /// Интервал обновления списка хостов, мс
    pub hosts_ms: i64,
    /// Шаг часов для окна времени в списке алертов, мс
    pub alerts_ms: i64,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct HelpConfig {
    /// Имитация задержки загрузки подсказок
    pub tips_delay_ms: u32,
    pub docs_base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct UiConfig {
    /// Таб, открываемый при старте
    pub default_tab: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[refresh]
overview_ms = 30000
hosts_ms = 15000
alerts_ms = 60000

[help]
tips_delay_ms = 300
docs_base_url = "https://docs.example.com/devops"

[ui]
default_tab = "d400_overview"
"#;

/// Переопределения из адресной строки
#[derive(Debug, Deserialize, Default)]
struct QueryOverrides {
    refresh_ms: Option<String>,
    tab: Option<String>,
}

/// Разобрать встроенную конфигурацию
pub fn load_config() -> anyhow::Result<DashboardConfig> {
    let config: DashboardConfig = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

impl DashboardConfig {
    /// Применить переопределения из query string. Некорректные значения
    /// игнорируются с предупреждением.
    pub fn with_query_overrides(mut self, search: &str) -> Self {
        let overrides: QueryOverrides = match serde_qs::from_str(search.trim_start_matches('?')) {
            Ok(o) => o,
            Err(e) => {
                log::warn!("ignoring query overrides '{}': {}", search, e);
                return self;
            }
        };

        if let Some(raw) = overrides.refresh_ms {
            match raw.parse::<i64>() {
                Ok(ms) => {
                    self.refresh.overview_ms = ms;
                    self.refresh.hosts_ms = ms;
                    self.refresh.alerts_ms = ms;
                }
                Err(_) => log::warn!("ignoring invalid refresh_ms '{}'", raw),
            }
        }

        if let Some(tab) = overrides.tab.filter(|t| !t.is_empty()) {
            self.ui.default_tab = tab;
        }

        self
    }
}

/// Конфигурация для текущей страницы
pub fn current_config() -> DashboardConfig {
    let config = load_config().unwrap_or_else(|e| {
        log::error!("embedded config is invalid: {:#}", e);
        DashboardConfig::default()
    });

    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();

    config.with_query_overrides(&search)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config().unwrap();
        assert_eq!(config.refresh.overview_ms, 30000);
        assert_eq!(config.refresh.hosts_ms, 15000);
        assert_eq!(config.refresh.alerts_ms, 60000);
        assert_eq!(config.help.tips_delay_ms, 300);
        assert_eq!(config.ui.default_tab, "d400_overview");
    }

    #[test]
    fn test_query_overrides() {
        let config = load_config()
            .unwrap()
            .with_query_overrides("?refresh_ms=5000&tab=a001_host&active=x");
        assert_eq!(config.refresh.overview_ms, 5000);
        assert_eq!(config.refresh.hosts_ms, 5000);
        assert_eq!(config.refresh.alerts_ms, 5000);
        assert_eq!(config.ui.default_tab, "a001_host");
    }

    #[test]
    fn test_zero_refresh_disables_polling() {
        let config = load_config().unwrap().with_query_overrides("refresh_ms=0");
        assert_eq!(config.refresh.overview_ms, 0);
    }

    #[test]
    fn test_invalid_override_keeps_defaults() {
        let config = load_config()
            .unwrap()
            .with_query_overrides("?refresh_ms=fast&tab=");
        assert_eq!(config, load_config().unwrap());
    }
}
