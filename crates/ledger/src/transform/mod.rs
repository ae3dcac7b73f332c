//! Преобразование изменений леджера в записи предложений.
//!
//! Конвейер строго последовательный:
//!
//! 1. [`select_snapshot`] — выбор снимка по типу изменения
//! 2. [`extract_offer`] — сужение записи до предложения
//! 3. [`build_output`] — проверка полей и сборка [`OfferOutput`]
//!
//! [`transform_offer`] выполняет все три шага. Все функции чистые и не
//! хранят состояния между вызовами, поэтому их можно вызывать из любого
//! числа потоков одновременно.

mod change;
mod error;
mod offer;

pub use change::select_snapshot;
pub use error::{InvalidField, TransformError};
pub use offer::{OfferOutput, build_output, extract_offer, transform_offer};
