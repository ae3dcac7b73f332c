//! Потоковый reader для изменений записей леджера.
//!
//! Предоставляет [`ChangeReader`] — итератор, который читает изменения
//! из любого источника, реализующего [`Read`]. Каждая непустая строка
//! источника содержит одно изменение: base64 от его XDR представления.

use std::io::{BufRead, BufReader, Read};

use crate::{
    entry::LedgerEntryChange,
    error::{LedgerError, LedgerResult},
    xdr,
};

/// Потоковый reader для изменений.
///
/// Реализует [`Iterator`]. Пустые строки пропускаются, после первой
/// ошибки итерация прекращается.
///
/// # Пример
///
/// ```
/// use std::io::Cursor;
///
/// use ledger::reader::ChangeReader;
///
/// let mut reader = ChangeReader::new(Cursor::new("\n\n"));
/// assert!(reader.next().is_none());
/// assert_eq!(reader.records_read(), 0);
/// ```
pub struct ChangeReader<R> {
    inner: BufReader<R>,
    /// Буфер текущей строки.
    line: String,
    /// Номер последней прочитанной строки (1-based).
    line_number: usize,
    /// Счётчик прочитанных записей.
    records_read: usize,
    /// Флаг достижения EOF или ошибки.
    finished: bool,
}

impl<R: Read> ChangeReader<R> {
    /// Создаёт новый reader.
    ///
    /// Входной reader оборачивается в [`BufReader`] для построчного чтения.
    pub fn new(reader: R) -> Self {
        Self {
            inner: BufReader::new(reader),
            line: String::new(),
            line_number: 0,
            records_read: 0,
            finished: false,
        }
    }

    /// Возвращает количество успешно прочитанных записей.
    #[must_use]
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    /// Номер последней прочитанной строки источника.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    fn read_change(&mut self) -> LedgerResult<Option<LedgerEntryChange>> {
        loop {
            self.line.clear();
            if self.inner.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            let text = self.line.trim();
            if text.is_empty() {
                continue;
            }
            return xdr::from_base64(text)
                .map(Some)
                .map_err(|source| LedgerError::Decode { line: self.line_number, source });
        }
    }
}

impl<R: Read> Iterator for ChangeReader<R> {
    type Item = LedgerResult<LedgerEntryChange>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.read_change() {
            Ok(Some(change)) => {
                self.records_read += 1;
                Some(Ok(change))
            }
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}
