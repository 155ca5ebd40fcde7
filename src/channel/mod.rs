//! Подсистема событийного канала (event channel).
//!
//! Этот модуль реализует лёгкий внутрипроцессный pub/sub для одного дерева
//! компонентов: общий канал с упорядоченным списком колбэков, создание канала
//! со временем жизни владельца и синхронную рассылку действий подписчикам:
//!
//! - `event`: сам канал — список подписчиков, добавление, удаление и
//!   синхронная доставка (`dispatch`).
//! - `owner`: ячейка владельца — ленивое создание канала, одна и та же ссылка
//!   при повторных обращениях.
//! - `subscriber`: guard подписки — отписка при `Drop` и функция `subscribe`,
//!   терпимая к отсутствующему каналу.
//!
//! Публичный API переэкспортирует:
//! - `event::*`
//! - `owner::*`
//! - `subscriber::*`

pub mod event;
pub mod owner;
pub mod subscriber;

// Публичный экспорт всех типов и функций из вложенных модулей,
// чтобы упростить доступ к ним из внешнего кода.
pub use event::*;
pub use owner::*;
pub use subscriber::*;
