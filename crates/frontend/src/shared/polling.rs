//! Хук периодического обновления с учётом видимости вкладки.
//!
//! Таймер (`gloo_timers::callback::Interval`) и подписка на
//! `visibilitychange` принадлежат одному `PollingHandle`; при смене
//! зависимостей или размонтировании компонента handle освобождается целиком.

use contracts::shared::polling::{PollingHandle, PollingSchedule, Visibility, VisibilityPoller};
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

const VISIBILITY_EVENT: &str = "visibilitychange";

/// Текущее `document.visibilityState`; без документа считаем вкладку скрытой
pub fn document_visibility() -> Visibility {
    web_sys::window()
        .and_then(|w| w.document())
        .map(|doc| match doc.visibility_state() {
            web_sys::VisibilityState::Visible => Visibility::Visible,
            _ => Visibility::Hidden,
        })
        .unwrap_or(Visibility::Hidden)
}

/// Запустить опрос и вернуть handle, владеющий таймером и подпиской.
///
/// При `interval_ms <= 0` ничего не регистрируется.
pub fn start_visible_polling(callback: Rc<dyn Fn()>, interval_ms: i64) -> PollingHandle {
    let Some(interval) = PollingSchedule::new(interval_ms).interval() else {
        log::debug!("polling disabled: interval {} ms", interval_ms);
        return PollingHandle::noop();
    };

    let poller = Rc::new(RefCell::new(VisibilityPoller::new(move || callback())));
    let mut handle = PollingHandle::new();

    let tick_poller = poller.clone();
    let timer = Interval::new(interval, move || {
        tick_poller.borrow_mut().on_tick(document_visibility());
    });
    handle.register(move || drop(timer));

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        let visibility_poller = poller.clone();
        let listener = Closure::<dyn FnMut()>::new(move || {
            visibility_poller
                .borrow_mut()
                .on_visibility_change(document_visibility());
        });

        match document
            .add_event_listener_with_callback(VISIBILITY_EVENT, listener.as_ref().unchecked_ref())
        {
            Ok(()) => handle.register(move || {
                let _ = document.remove_event_listener_with_callback(
                    VISIBILITY_EVENT,
                    listener.as_ref().unchecked_ref(),
                );
                drop(listener);
            }),
            Err(e) => log::warn!("failed to subscribe to {}: {:?}", VISIBILITY_EVENT, e),
        }
    }

    log::debug!("polling started: every {} ms", interval);
    handle
}

/// Снять handle из слота (если есть) и положить новый.
///
/// `next` вызывается только после того, как регистрации предыдущего
/// handle освобождены, поэтому двух живых таймеров не бывает.
pub fn replace_handle<N>(slot: &mut Option<PollingHandle>, next: N)
where
    N: FnOnce() -> PollingHandle,
{
    release_handle(slot);
    *slot = Some(next());
}

/// Освободить handle из слота; пустой слот ничего не делает
pub fn release_handle(slot: &mut Option<PollingHandle>) {
    if let Some(mut previous) = slot.take() {
        previous.dispose();
    }
}

/// Вызывает `callback` каждые `interval_ms`, пока вкладка видима, и сразу
/// при возврате на вкладку.
pub fn use_visible_polling<F>(callback: F, interval_ms: Signal<i64>)
where
    F: Fn() + 'static,
{
    use_visible_polling_with_deps(callback, interval_ms, || ());
}

/// То же, что [`use_visible_polling`], но с явными зависимостями: всё, что
/// читает `deps`, отслеживается, и при изменении опрос пересоздаётся.
pub fn use_visible_polling_with_deps<F, D>(callback: F, interval_ms: Signal<i64>, deps: D)
where
    F: Fn() + 'static,
    D: Fn() + 'static,
{
    let callback: Rc<dyn Fn()> = Rc::new(callback);
    let active = StoredValue::new_local(None::<PollingHandle>);

    Effect::new(move |_| {
        deps();
        let interval = interval_ms.get();
        let callback = callback.clone();
        active.update_value(|slot| {
            replace_handle(slot, || start_visible_polling(callback, interval));
        });
    });

    on_cleanup(move || {
        active.update_value(release_handle);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counted_handle(counter: &Rc<Cell<u32>>) -> PollingHandle {
        let mut handle = PollingHandle::new();
        let timer = counter.clone();
        handle.register(move || timer.set(timer.get() + 1));
        let listener = counter.clone();
        handle.register(move || listener.set(listener.get() + 1));
        handle
    }

    #[test]
    fn test_replace_disposes_previous_before_starting_next() {
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let mut slot = None;

        replace_handle(&mut slot, || counted_handle(&first));
        assert_eq!(first.get(), 0);

        let first_at_start = Rc::new(Cell::new(u32::MAX));
        let seen = first_at_start.clone();
        let first_for_check = first.clone();
        replace_handle(&mut slot, || {
            seen.set(first_for_check.get());
            counted_handle(&second)
        });

        // таймер и подписка первого handle сняты ровно по разу и до старта второго
        assert_eq!(first_at_start.get(), 2);
        assert_eq!(first.get(), 2);
        assert_eq!(second.get(), 0);
        assert_eq!(slot.as_ref().map(|h| h.registrations()), Some(2));
    }

    #[test]
    fn test_release_is_idempotent() {
        let count = Rc::new(Cell::new(0));
        let mut slot = Some(counted_handle(&count));

        release_handle(&mut slot);
        release_handle(&mut slot);

        assert!(slot.is_none());
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_disabled_interval_registers_nothing() {
        let handle = start_visible_polling(Rc::new(|| {}), 0);
        assert_eq!(handle.registrations(), 0);
    }
}
