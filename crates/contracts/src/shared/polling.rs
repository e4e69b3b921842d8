//! Периодическое обновление, зависящее от видимости страницы.
//!
//! Платформенно-независимая часть: решение "вызывать ли callback" и
//! владение регистрациями (таймер + подписка на visibilitychange).
//! Привязка к браузеру находится во frontend (`shared::polling`).
//!
//! Правила:
//! - интервал <= 0: ничего не планируется;
//! - тик таймера вызывает callback только при `Visibility::Visible`,
//!   скрытые тики теряются навсегда (без догоняющих вызовов);
//! - переход в `Visible` вызывает callback сразу, независимо от фазы таймера;
//! - `PollingHandle::dispose` снимает все регистрации, повторный вызов ничего не делает.

use serde::{Deserialize, Serialize};

/// Состояние видимости документа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    /// Разбор `document.visibilityState`; всё кроме "visible" считается скрытым
    pub fn from_state(state: &str) -> Self {
        if state == "visible" {
            Visibility::Visible
        } else {
            Visibility::Hidden
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, Visibility::Visible)
    }
}

/// Интервал опроса в миллисекундах
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollingSchedule {
    interval_ms: i64,
}

impl PollingSchedule {
    pub fn new(interval_ms: i64) -> Self {
        Self { interval_ms }
    }

    /// Интервал для таймера; `None` если опрос отключён
    pub fn interval(&self) -> Option<u32> {
        if self.interval_ms <= 0 {
            return None;
        }
        Some(u32::try_from(self.interval_ms).unwrap_or(u32::MAX))
    }

    pub fn is_enabled(&self) -> bool {
        self.interval().is_some()
    }
}

/// Гейт вызова callback по событиям таймера и видимости
pub struct VisibilityPoller<F: FnMut()> {
    callback: F,
    fired: u64,
    skipped: u64,
}

impl<F: FnMut()> VisibilityPoller<F> {
    pub fn new(callback: F) -> Self {
        Self {
            callback,
            fired: 0,
            skipped: 0,
        }
    }

    /// Тик таймера. Возвращает `true`, если callback был вызван.
    pub fn on_tick(&mut self, visibility: Visibility) -> bool {
        if visibility.is_visible() {
            self.fire();
            true
        } else {
            self.skipped += 1;
            log::debug!("polling tick skipped: document hidden");
            false
        }
    }

    /// Событие visibilitychange. Возвращает `true`, если callback был вызван.
    pub fn on_visibility_change(&mut self, visibility: Visibility) -> bool {
        if visibility.is_visible() {
            self.fire();
            true
        } else {
            false
        }
    }

    /// Сколько раз был вызван callback
    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Сколько тиков пропущено из-за скрытой страницы
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    fn fire(&mut self) {
        self.fired += 1;
        (self.callback)();
    }
}

/// Владелец регистраций опроса.
///
/// Хранит функции снятия таймера и подписки; `dispose` вызывает их все
/// за один проход. При `Drop` освобождается автоматически.
#[derive(Default)]
pub struct PollingHandle {
    teardown: Vec<Box<dyn FnOnce()>>,
    disposed: bool,
}

impl PollingHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Пустой handle для отключённого опроса
    pub fn noop() -> Self {
        Self::default()
    }

    /// Добавить функцию снятия регистрации
    pub fn register(&mut self, teardown: impl FnOnce() + 'static) {
        if self.disposed {
            teardown();
            return;
        }
        self.teardown.push(Box::new(teardown));
    }

    /// Количество активных регистраций
    pub fn registrations(&self) -> usize {
        self.teardown.len()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        for teardown in self.teardown.drain(..) {
            teardown();
        }
    }
}

impl Drop for PollingHandle {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for PollingHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PollingHandle")
            .field("registrations", &self.teardown.len())
            .field("disposed", &self.disposed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Симуляция браузера: таймер с фиксированным интервалом + переключение видимости
    struct Timeline {
        interval: u32,
        next_tick: u32,
        visibility: Visibility,
    }

    impl Timeline {
        fn new(schedule: PollingSchedule, visibility: Visibility) -> Self {
            let interval = schedule.interval().expect("enabled schedule");
            Self {
                interval,
                next_tick: interval,
                visibility,
            }
        }

        fn advance_to<F: FnMut()>(&mut self, t: u32, poller: &mut VisibilityPoller<F>) {
            while self.next_tick <= t {
                poller.on_tick(self.visibility);
                self.next_tick += self.interval;
            }
        }

        fn set_visibility<F: FnMut()>(&mut self, v: Visibility, poller: &mut VisibilityPoller<F>) {
            self.visibility = v;
            poller.on_visibility_change(v);
        }
    }

    #[test]
    fn test_non_positive_interval_disables_polling() {
        assert_eq!(PollingSchedule::new(0).interval(), None);
        assert_eq!(PollingSchedule::new(-100).interval(), None);
        assert!(!PollingSchedule::new(0).is_enabled());
        assert_eq!(PollingSchedule::new(100).interval(), Some(100));
        assert_eq!(
            PollingSchedule::new(i64::MAX).interval(),
            Some(u32::MAX)
        );
    }

    #[test]
    fn test_hidden_document_never_fires() {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let mut poller = VisibilityPoller::new(move || c.set(c.get() + 1));
        let mut timeline = Timeline::new(PollingSchedule::new(100), Visibility::Hidden);

        timeline.advance_to(1_000, &mut poller);

        assert_eq!(count.get(), 0);
        assert_eq!(poller.skipped(), 10);
    }

    #[test]
    fn test_becoming_visible_fires_once_immediately() {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let mut poller = VisibilityPoller::new(move || c.set(c.get() + 1));
        let mut timeline = Timeline::new(PollingSchedule::new(100), Visibility::Hidden);

        // между тиками, фаза таймера произвольная
        timeline.advance_to(1_050, &mut poller);
        assert_eq!(count.get(), 0);

        timeline.set_visibility(Visibility::Visible, &mut poller);
        assert_eq!(count.get(), 1);

        // следующий тик по расписанию, пропущенные не догоняются
        timeline.advance_to(1_099, &mut poller);
        assert_eq!(count.get(), 1);
        timeline.advance_to(1_100, &mut poller);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_visible_ticks_fire_every_interval() {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let mut poller = VisibilityPoller::new(move || c.set(c.get() + 1));
        let mut timeline = Timeline::new(PollingSchedule::new(250), Visibility::Visible);

        timeline.advance_to(1_000, &mut poller);
        assert_eq!(count.get(), 4);

        timeline.set_visibility(Visibility::Hidden, &mut poller);
        timeline.advance_to(2_000, &mut poller);
        assert_eq!(count.get(), 4);
        assert_eq!(poller.fired(), 4);
    }

    #[test]
    fn test_visibility_state_parsing() {
        assert_eq!(Visibility::from_state("visible"), Visibility::Visible);
        assert_eq!(Visibility::from_state("hidden"), Visibility::Hidden);
        assert_eq!(Visibility::from_state("prerender"), Visibility::Hidden);
    }

    #[test]
    fn test_dispose_releases_all_registrations_once() {
        let timer_cleared = Rc::new(Cell::new(0));
        let listener_removed = Rc::new(Cell::new(0));

        let mut handle = PollingHandle::new();
        let t = timer_cleared.clone();
        handle.register(move || t.set(t.get() + 1));
        let l = listener_removed.clone();
        handle.register(move || l.set(l.get() + 1));
        assert_eq!(handle.registrations(), 2);

        handle.dispose();
        handle.dispose();

        assert!(handle.is_disposed());
        assert_eq!(handle.registrations(), 0);
        assert_eq!(timer_cleared.get(), 1);
        assert_eq!(listener_removed.get(), 1);
    }

    #[test]
    fn test_drop_disposes() {
        let cleared = Rc::new(Cell::new(false));
        {
            let mut handle = PollingHandle::new();
            let c = cleared.clone();
            handle.register(move || c.set(true));
        }
        assert!(cleared.get());
    }

    #[test]
    fn test_register_after_dispose_tears_down_immediately() {
        let cleared = Rc::new(Cell::new(false));
        let mut handle = PollingHandle::noop();
        handle.dispose();
        let c = cleared.clone();
        handle.register(move || c.set(true));
        assert!(cleared.get());
        assert_eq!(handle.registrations(), 0);
    }
}
