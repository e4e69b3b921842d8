//! Tab labels - единственный источник правды для заголовков табов.

/// Возвращает читаемый заголовок таба для данного ключа. Fallback: сам ключ.
pub fn tab_label_for_key(key: &str) -> &str {
    match key {
        "d400_overview" => "概览",
        "a001_host" => "主机管理",
        "a002_help_document" => "帮助中心",
        "a003_k8s_resource" => "容器资源",
        "a004_scheduled_job" => "定时任务",
        "a005_alert" => "告警",
        _ => key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_labels() {
        assert_eq!(tab_label_for_key("a001_host"), "主机管理");
        assert_eq!(tab_label_for_key("x999_unknown"), "x999_unknown");
    }
}
