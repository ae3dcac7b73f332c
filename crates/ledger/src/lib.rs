//! Библиотека выгрузки предложений из изменений леджера.
//!
//! Этот крейт превращает изменения записей леджера в плоские проверенные
//! записи предложений ([`transform::OfferOutput`]) для аналитического
//! хранилища:
//!
//! - **entry** — модель записей леджера, аккаунтов и активов
//! - **transform** — выбор снимка, извлечение предложения и проверка полей
//! - **xdr** — кодек, в котором записи приходят и в котором кодируются активы
//! - **strkey** — текстовые адреса аккаунтов (`G...`)
//! - **reader** / **writer** — потоковые вход и выход выгрузки
//!
//! # Быстрый старт
//!
//! ```
//! use ledger::prelude::*;
//!
//! let change = LedgerEntryChange::created(LedgerEntry {
//!     last_modified_ledger_seq: 100,
//!     data: LedgerEntryData::Offer(OfferEntry {
//!         seller_id: AccountId::ed25519([0u8; 32]),
//!         offer_id: 42,
//!         selling: Asset::Native,
//!         buying: Asset::credit("USD", AccountId::ed25519([1u8; 32])),
//!         amount: 1_000_000_000,
//!         price: Price { n: 3, d: 2 },
//!         flags: 0,
//!     }),
//! });
//!
//! let output = transform_offer(&change).unwrap();
//! assert_eq!(output.offer_id(), 42);
//! assert_eq!(output.price(), 1.5);
//! assert_eq!(output.selling_asset(), "AAAAAA==");
//! assert_eq!(output.last_modified_ledger(), 100);
//! ```

pub mod entry;
pub mod error;
pub mod reader;
pub mod strkey;
pub mod transform;
pub mod writer;
pub mod xdr;

pub use error::{LedgerError, LedgerResult};

/// Часто используемые типы.
pub mod prelude {
    pub use crate::{
        entry::{
            AccountId, Asset, ChangeType, LedgerEntry, LedgerEntryChange, LedgerEntryData,
            LedgerEntryType, OfferEntry, Price,
        },
        error::{LedgerError, LedgerResult},
        reader::ChangeReader,
        transform::{InvalidField, OfferOutput, TransformError, transform_offer},
        writer::{Csv, JsonLines, OfferWriter, OutputFormat},
    };
}
