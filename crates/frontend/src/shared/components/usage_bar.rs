use crate::shared::components::table::format_percent;
use contracts::domain::a001_host::aggregate::Host;
use leptos::prelude::*;

/// Порог, начиная с которого полоса подсвечивается как опасная
const DANGER_THRESHOLD: f64 = 85.0;
const WARNING_THRESHOLD: f64 = 70.0;

/// CSS-модификатор полосы по значению
pub fn usage_level(value: f64) -> &'static str {
    if value >= DANGER_THRESHOLD {
        "usage-bar__fill usage-bar__fill--danger"
    } else if value >= WARNING_THRESHOLD {
        "usage-bar__fill usage-bar__fill--warning"
    } else {
        "usage-bar__fill"
    }
}

/// Полоса утилизации; ширина обрезается до 0..=100, подпись показывает исходное значение
#[component]
pub fn UsageBar(value: f64) -> impl IntoView {
    let width = Host::display_percent(value);
    view! {
        <div class="usage-bar" title=format_percent(value)>
            <div class=usage_level(value) style:width=format!("{}%", width)></div>
            <span class="usage-bar__label">{format_percent(value)}</span>
        </div>
    }
}
