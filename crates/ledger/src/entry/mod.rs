//! Модель данных записей леджера.
//!
//! Этот модуль определяет изменения записей ([`LedgerEntryChange`]),
//! сами записи и их полезную нагрузку, а также аккаунты и активы,
//! на которые ссылаются предложения.

mod account;
mod asset;
mod types;

pub use account::{AccountId, PUBLIC_KEY_TYPE_ED25519};
pub use asset::{Asset, AssetError, encode_asset};
pub use types::{
    AccountEntry, ChangeType, DataEntry, LedgerEntry, LedgerEntryChange, LedgerEntryData,
    LedgerEntryType, OfferEntry, Price, TrustLineEntry,
};
