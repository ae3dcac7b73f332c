//! Ошибки ввода/вывода конвейера выгрузки.

use thiserror::Error;

use crate::{transform::TransformError, xdr};

/// Главная ошибка чтения изменений и записи результатов.
///
/// Ошибки проверки отдельных записей ([`TransformError`]) не прерывают
/// чтение сами по себе: вызывающий код решает, пропустить запись или
/// остановить выгрузку, и при необходимости оборачивает её сюда.
#[derive(Debug, Error)]
pub enum LedgerError {
    // === I/O ошибки ===
    /// Ошибка ввода/вывода.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Ошибки входного потока ===
    /// Строка входного потока не декодируется в изменение записи.
    #[error("could not decode change at line {line}: {source}")]
    Decode {
        /// Номер строки (1-based).
        line: usize,
        /// Причина.
        source: xdr::Error,
    },

    // === Ошибки выходного потока ===
    /// Ошибка записи строки CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Ошибка сериализации JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Ошибки преобразования ===
    /// Запись не прошла преобразование.
    #[error("transform error: {0}")]
    Transform(#[from] TransformError),
}

/// Удобный alias для Result с [`LedgerError`].
pub type LedgerResult<T> = Result<T, LedgerError>;
