//! Цвета бейджей thaw для статусов записей

use contracts::enums::{AlertSeverity, Difficulty, HostStatus, JobStatus, K8sStatus};
use leptos::prelude::*;
use thaw::*;

/// Цвет бейджа для значения перечисления
pub trait BadgeTone {
    fn badge_color(&self) -> BadgeColor;
    fn badge_label(&self) -> &'static str;
}

impl BadgeTone for HostStatus {
    fn badge_color(&self) -> BadgeColor {
        match self {
            HostStatus::Online => BadgeColor::Success,
            HostStatus::Offline => BadgeColor::Danger,
            HostStatus::Warning => BadgeColor::Warning,
            HostStatus::Maintenance => BadgeColor::Subtle,
        }
    }

    fn badge_label(&self) -> &'static str {
        self.display_name()
    }
}

impl BadgeTone for K8sStatus {
    fn badge_color(&self) -> BadgeColor {
        match self {
            K8sStatus::Running => BadgeColor::Success,
            K8sStatus::Pending => BadgeColor::Warning,
            K8sStatus::Failed => BadgeColor::Danger,
            K8sStatus::Succeeded => BadgeColor::Subtle,
        }
    }

    fn badge_label(&self) -> &'static str {
        self.display_name()
    }
}

impl BadgeTone for JobStatus {
    fn badge_color(&self) -> BadgeColor {
        match self {
            JobStatus::Running => BadgeColor::Brand,
            JobStatus::Success => BadgeColor::Success,
            JobStatus::Failed => BadgeColor::Danger,
            JobStatus::Pending => BadgeColor::Warning,
            JobStatus::Paused => BadgeColor::Subtle,
        }
    }

    fn badge_label(&self) -> &'static str {
        self.display_name()
    }
}

impl BadgeTone for AlertSeverity {
    fn badge_color(&self) -> BadgeColor {
        match self {
            AlertSeverity::Critical => BadgeColor::Danger,
            AlertSeverity::Warning => BadgeColor::Warning,
            AlertSeverity::Info => BadgeColor::Informative,
        }
    }

    fn badge_label(&self) -> &'static str {
        self.display_name()
    }
}

impl BadgeTone for Difficulty {
    fn badge_color(&self) -> BadgeColor {
        match self {
            Difficulty::Beginner => BadgeColor::Success,
            Difficulty::Intermediate => BadgeColor::Warning,
            Difficulty::Advanced => BadgeColor::Danger,
        }
    }

    fn badge_label(&self) -> &'static str {
        self.display_name()
    }
}

/// Бейдж статуса: цвет и подпись берутся из значения
#[component]
pub fn StatusBadge<T>(value: T) -> impl IntoView
where
    T: BadgeTone + 'static,
{
    let color = value.badge_color();
    let label = value.badge_label();
    view! {
        <Badge appearance=BadgeAppearance::Tint color=color>
            {label}
        </Badge>
    }
}
