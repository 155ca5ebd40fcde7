use std::sync::{Arc, Weak};

use super::EventChannel;

/// Guard подписки на событийный канал.
///
/// Хранит идентификатор записи и слабую ссылку на канал; при `Drop`
/// удаляет свой колбэк из списка. Это scoped-acquisition вариант
/// «подписаться при монтировании, отписаться при размонтировании»:
/// владелец guard'а отвечает за его дроп ровно один раз, когда область
/// жизни заканчивается или когда меняется пара (канал, колбэк) — тогда
/// старый guard дропается и берётся новый.
pub struct Subscription<T> {
    /// Идентификатор записи в канале (0 — отвязанный guard).
    id: u64,
    /// Слабая ссылка на канал; подписка его жизнь не продлевает.
    channel: Weak<EventChannel<T>>,
}

impl<T> Subscription<T> {
    pub(crate) fn new(id: u64, channel: Weak<EventChannel<T>>) -> Self {
        Self { id, channel }
    }

    /// Отвязанный guard: ни к какому каналу не привязан, дроп — no-op.
    ///
    /// Возвращается `subscribe` при отсутствующем канале.
    pub fn detached() -> Self {
        Self {
            id: 0,
            channel: Weak::new(),
        }
    }

    /// Идентификатор записи подписчика (0 у отвязанного guard'а).
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Проверяет, указывает ли guard на живой канал.
    pub fn is_attached(&self) -> bool {
        self.id != 0 && self.channel.strong_count() > 0
    }

    /// Явно отписаться от канала. Аналогично `drop(self)`.
    ///
    /// После вызова колбэк не получит действий ни от одной рассылки,
    /// начатой позже.
    pub fn unsubscribe(self) {
        // При drop запись удаляется сама
    }
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if self.id == 0 {
            return;
        }
        if let Some(channel) = self.channel.upgrade() {
            channel.unsubscribe(self.id);
        }
    }
}

/// Подписка, терпимая к отсутствующему каналу.
///
/// `None` означает, что владелец канал ещё не создал: подписка молча
/// пропускается, возвращается отвязанный guard. `Some` делегирует в
/// [`EventChannel::subscribe`].
///
/// Перезапуск при смене пары (канал, колбэк) — обязанность вызывающего:
/// дропнуть старый guard и вызвать `subscribe` заново.
pub fn subscribe<T, F>(channel: Option<&Arc<EventChannel<T>>>, callback: F) -> Subscription<T>
where
    F: Fn(&T) + Send + Sync + 'static,
{
    match channel {
        Some(channel) => channel.subscribe(callback),
        None => Subscription::detached(),
    }
}
