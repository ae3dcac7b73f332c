//! Выбор снимка записи по типу изменения.

use super::TransformError;
use crate::entry::{ChangeType, LedgerEntry, LedgerEntryChange};

/// Возвращает снимок, описывающий актуальное состояние записи.
///
/// Для удаления это `pre`, для создания и обновления — `post`.
/// Другой снимок не рассматривается, даже если он присутствует.
///
/// # Ошибки
///
/// [`TransformError::NilEntry`], если нужный снимок отсутствует.
pub fn select_snapshot(change: &LedgerEntryChange) -> Result<&LedgerEntry, TransformError> {
    let snapshot = match change.change_type {
        ChangeType::Removed => change.pre.as_ref(),
        ChangeType::Created | ChangeType::Updated => change.post.as_ref(),
    };
    snapshot.ok_or(TransformError::NilEntry)
}
