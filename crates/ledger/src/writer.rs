//! Потоковый writer для записей предложений.
//!
//! Предоставляет [`OfferWriter`] для записи [`OfferOutput`] в любой тип,
//! реализующий [`Write`], и форматы вывода [`JsonLines`] и [`Csv`].

use std::{
    io::{BufWriter, Write},
    marker::PhantomData,
};

use crate::{error::LedgerResult, transform::OfferOutput};

/// CSV header line with all column names, in record order.
pub const CSV_HEADER: &str = "sellerid,offerid,sellingasset,buyingasset,amount,pricen,priced,price,flags,last_modified_ledger";

/// Marker type for newline-delimited JSON output.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLines;

/// Marker type for CSV output with a header row.
#[derive(Debug, Clone, Copy, Default)]
pub struct Csv;

/// Trait for streaming serialization of offer records.
///
/// Implemented by marker types (`JsonLines`, `Csv`).
pub trait OutputFormat {
    /// Writes a single record.
    fn write_one<W: Write>(writer: &mut W, record: &OfferOutput) -> LedgerResult<()>;

    /// Writes a header if the format requires one.
    ///
    /// Default implementation is a no-op.
    fn write_header<W: Write>(_writer: &mut W) -> LedgerResult<()> {
        Ok(())
    }
}

impl OutputFormat for JsonLines {
    fn write_one<W: Write>(writer: &mut W, record: &OfferOutput) -> LedgerResult<()> {
        serde_json::to_writer(&mut *writer, record)?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

impl OutputFormat for Csv {
    fn write_one<W: Write>(writer: &mut W, record: &OfferOutput) -> LedgerResult<()> {
        let mut csv_writer = ::csv::WriterBuilder::new().has_headers(false).from_writer(writer);

        csv_writer.serialize(record)?;
        csv_writer.flush()?;

        Ok(())
    }

    fn write_header<W: Write>(writer: &mut W) -> LedgerResult<()> {
        writeln!(writer, "{CSV_HEADER}")?;
        Ok(())
    }
}

/// Потоковый writer для записей предложений.
///
/// Использует буферизацию; перед завершением нужно вызвать
/// [`flush`][OfferWriter::flush].
///
/// # Type Parameters
///
/// - `W`: целевой поток (реализует [`Write`])
/// - `F`: формат (реализует [`OutputFormat`])
pub struct OfferWriter<W: Write, F: OutputFormat> {
    inner: BufWriter<W>,
    _format: PhantomData<F>,
    /// Счётчик записанных предложений.
    records_written: usize,
    /// Флаг: записан ли заголовок.
    header_written: bool,
}

impl<W: Write, F: OutputFormat> OfferWriter<W, F> {
    /// Создаёт новый writer.
    pub fn new(writer: W) -> Self {
        Self {
            inner: BufWriter::new(writer),
            _format: PhantomData,
            records_written: 0,
            header_written: false,
        }
    }

    /// Записывает заголовок формата (если он есть).
    ///
    /// Может вызываться несколько раз, но заголовок записывается только один раз.
    pub fn write_header(&mut self) -> LedgerResult<()> {
        if !self.header_written {
            F::write_header(&mut self.inner)?;
            self.header_written = true;
        }
        Ok(())
    }

    /// Записывает одно предложение.
    pub fn write(&mut self, record: &OfferOutput) -> LedgerResult<()> {
        F::write_one(&mut self.inner, record)?;
        self.records_written += 1;
        Ok(())
    }

    /// Принудительно сбрасывает буфер.
    pub fn flush(&mut self) -> LedgerResult<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Возвращает количество записанных предложений.
    #[must_use]
    pub fn records_written(&self) -> usize {
        self.records_written
    }
}
