use std::{
    fmt,
    sync::{
        atomic::{AtomicU64, AtomicUsize, Ordering},
        Arc, Weak,
    },
};

use parking_lot::RwLock;
use tracing::trace;

use super::Subscription;

/// Колбэк подписчика: принимает ссылку на действие, ничего не возвращает.
pub type ActionCallback<T> = Arc<dyn Fn(&T) + Send + Sync + 'static>;

/// Запись подписчика: идентификатор + колбэк.
///
/// Идентификаторы выдаются монотонно начиная с 1, поэтому две подписки
/// одного и того же колбэка дают две независимые записи (и двойную
/// доставку) — дедупликации нет, это дисциплина вызывающего кода.
pub(crate) struct SubscriberEntry<T> {
    pub(crate) id: u64,
    pub(crate) callback: ActionCallback<T>,
}

impl<T> Clone for SubscriberEntry<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            callback: Arc::clone(&self.callback),
        }
    }
}

/// Снимок статистики канала.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelStats {
    /// Текущее количество подписчиков.
    pub subscribers: usize,
    /// Общее количество вызовов `dispatch`.
    pub dispatched: usize,
    /// Общее количество доставок (колбэк × dispatch).
    pub delivered: usize,
}

/// Событийный канал одного дерева компонентов.
///
/// Держит упорядоченный список колбэков подписчиков. Список хранится как
/// `Arc<Vec<...>>` и обновляется заменой всего `Arc` (append и remove строят
/// новый `Vec`), поэтому `dispatch` всегда работает со снимком, взятым в
/// момент вызова.
///
/// Канал передаётся соседним компонентам как `Arc<EventChannel<T>>`; его
/// время жизни привязано к владельцу, а не к подписчикам — подписки держат
/// только `Weak`.
pub struct EventChannel<T> {
    /// Текущий список подписчиков (снимок, заменяется целиком).
    callbacks: RwLock<Arc<Vec<SubscriberEntry<T>>>>,
    /// Слабая ссылка на самих себя — для guard'ов подписки.
    self_ref: Weak<EventChannel<T>>,
    /// Следующий идентификатор подписчика, начиная с 1.
    next_id: AtomicU64,
    /// Общее количество вызовов `dispatch`.
    pub dispatch_count: AtomicUsize,
    /// Общее количество доставок колбэкам.
    pub delivery_count: AtomicUsize,
}

impl<T> EventChannel<T> {
    /// Создаёт новый канал с пустым списком подписчиков.
    pub fn new() -> Arc<Self> {
        Arc::new_cyclic(|weak| Self {
            callbacks: RwLock::new(Arc::new(Vec::new())),
            self_ref: weak.clone(),
            next_id: AtomicU64::new(1),
            dispatch_count: AtomicUsize::new(0),
            delivery_count: AtomicUsize::new(0),
        })
    }

    /// Подписка колбэка на канал.
    ///
    /// Колбэк добавляется в конец списка и остаётся там до дропа
    /// возвращённого guard'а. Повторная подписка того же колбэка не
    /// дедуплицируется: будет две записи и двойная доставка.
    pub fn subscribe<F>(&self, callback: F) -> Subscription<T>
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let entry = SubscriberEntry {
            id,
            callback: Arc::new(callback),
        };
        let total = {
            let mut guard = self.callbacks.write();
            let mut next: Vec<SubscriberEntry<T>> = guard.as_ref().clone();
            next.push(entry);
            let total = next.len();
            *guard = Arc::new(next);
            total
        };
        trace!(subscriber = id, subscribers = total, "channel subscribe");
        Subscription::new(id, self.self_ref.clone())
    }

    /// Удаляет подписчика по идентификатору.
    ///
    /// Неизвестный идентификатор — no-op. Относительный порядок оставшихся
    /// подписчиков сохраняется. Уже начатый `dispatch` работает со своим
    /// снимком и этого удаления не видит.
    pub(crate) fn unsubscribe(&self, id: u64) {
        let total = {
            let mut guard = self.callbacks.write();
            if !guard.iter().any(|entry| entry.id == id) {
                return;
            }
            let next: Vec<SubscriberEntry<T>> = guard
                .iter()
                .filter(|entry| entry.id != id)
                .cloned()
                .collect();
            let total = next.len();
            *guard = Arc::new(next);
            total
        };
        trace!(subscriber = id, subscribers = total, "channel unsubscribe");
    }

    /// Синхронная рассылка действия всем текущим подписчикам.
    ///
    /// Снимок списка берётся в момент вызова; колбэки вызываются по порядку
    /// подписки, каждому передаётся `&action`. Пустой список — no-op.
    /// Паника колбэка не перехватывается: оставшиеся колбэки этого вызова
    /// пропускаются, паника уходит вызывающему.
    pub fn dispatch(&self, action: &T) {
        self.dispatch_count.fetch_add(1, Ordering::Relaxed);
        let snapshot = Arc::clone(&self.callbacks.read());
        if snapshot.is_empty() {
            return;
        }
        self.delivery_count
            .fetch_add(snapshot.len(), Ordering::Relaxed);
        trace!(subscribers = snapshot.len(), "channel dispatch");
        for entry in snapshot.iter() {
            (entry.callback)(action);
        }
    }

    /// Возвращает количество подписчиков на канал.
    pub fn subscriber_count(&self) -> usize {
        self.callbacks.read().len()
    }

    /// Проверяет, есть ли хотя бы один подписчик.
    pub fn has_subscribers(&self) -> bool {
        !self.callbacks.read().is_empty()
    }

    /// Возвращает снимок статистики канала.
    pub fn stats(&self) -> ChannelStats {
        ChannelStats {
            subscribers: self.subscriber_count(),
            dispatched: self.dispatch_count.load(Ordering::Relaxed),
            delivered: self.delivery_count.load(Ordering::Relaxed),
        }
    }
}

impl<T> fmt::Debug for EventChannel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventChannel")
            .field("subscribers", &self.subscriber_count())
            .field("dispatched", &self.dispatch_count.load(Ordering::Relaxed))
            .finish()
    }
}
