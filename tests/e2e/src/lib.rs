//! # e2e-tests - End-to-end тесты CLI инструментов
//!
//! Этот крейт содержит e2e тесты для `export_offers` — выгрузки
//! предложений из изменений леджера.
//!
//! ## Входные данные
//!
//! Файлы изменений генерируются в тестах через крейт `ledger`:
//! одна строка base64 XDR на изменение.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use ledger::{
    entry::{
        AccountEntry, AccountId, Asset, LedgerEntry, LedgerEntryChange, LedgerEntryData,
        OfferEntry, Price,
    },
    xdr,
};

/// Корректное предложение с заданным идентификатором.
pub fn offer(offer_id: i64) -> OfferEntry {
    OfferEntry {
        seller_id: AccountId::ed25519([11u8; 32]),
        offer_id,
        selling: Asset::Native,
        buying: Asset::credit("USDC", AccountId::ed25519([12u8; 32])),
        amount: 25_000_000,
        price: Price { n: 3, d: 2 },
        flags: 0,
    }
}

/// Изменение, создающее предложение в указанном леджере.
pub fn offer_created(offer: OfferEntry, ledger: u32) -> LedgerEntryChange {
    LedgerEntryChange::created(LedgerEntry {
        last_modified_ledger_seq: ledger,
        data: LedgerEntryData::Offer(offer),
    })
}

/// Изменение, удаляющее предложение: снимок «до» относится к `ledger`.
pub fn offer_removed(offer: OfferEntry, ledger: u32) -> LedgerEntryChange {
    LedgerEntryChange::removed(LedgerEntry {
        last_modified_ledger_seq: ledger,
        data: LedgerEntryData::Offer(offer),
    })
}

/// Изменение аккаунта (не предложение).
pub fn account_created(ledger: u32) -> LedgerEntryChange {
    LedgerEntryChange::created(LedgerEntry {
        last_modified_ledger_seq: ledger,
        data: LedgerEntryData::Account(AccountEntry {
            account_id: AccountId::ed25519([13u8; 32]),
            balance: 1_000,
            seq_num: 1,
            num_sub_entries: 0,
            flags: 0,
            home_domain: "example.org".to_string(),
        }),
    })
}

/// Записывает изменения в файл: одна строка base64 XDR на изменение.
pub fn write_changes(path: &Path, changes: &[LedgerEntryChange]) -> Result<()> {
    let mut text = String::new();
    for change in changes {
        text.push_str(&xdr::to_base64(change).context("encode change")?);
        text.push('\n');
    }
    fs::write(path, text).with_context(|| format!("write {}", path.display()))
}
