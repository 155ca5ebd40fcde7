use std::sync::Arc;

use once_cell::sync::OnceCell;

use super::EventChannel;

/// Ячейка владельца канала.
///
/// Встраивается в компонент-владелец и лениво создаёт канал при первом
/// обращении; каждое следующее обращение возвращает тот же самый `Arc`
/// на всё время жизни ячейки. Это даёт контракт «создан один раз на
/// владельца, стабилен между перерисовками».
///
/// Канал умирает вместе с ячейкой и последним клоном `Arc`; подписки
/// держат только `Weak` и время жизни канала не продлевают.
pub struct ChannelCell<T> {
    cell: OnceCell<Arc<EventChannel<T>>>,
}

impl<T> ChannelCell<T> {
    /// Создаёт пустую ячейку. Канал ещё не аллоцирован.
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Возвращает канал ячейки, создавая его при первом вызове.
    ///
    /// Повторные вызовы возвращают клон одного и того же `Arc`
    /// (`Arc::ptr_eq` истинно для любых двух результатов).
    pub fn channel(&self) -> Arc<EventChannel<T>> {
        Arc::clone(self.cell.get_or_init(EventChannel::new))
    }

    /// Проверяет, был ли канал уже создан.
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T> Default for ChannelCell<T> {
    fn default() -> Self {
        Self::new()
    }
}
