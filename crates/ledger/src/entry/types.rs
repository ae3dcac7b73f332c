//! Записи леджера и изменения, в которых они наблюдаются.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{AccountId, Asset};

/// Тип изменения записи леджера.
///
/// Определяет, какой снимок записи несёт актуальное состояние:
/// - [`Created`][ChangeType::Created] и [`Updated`][ChangeType::Updated] — состояние «после»
/// - [`Removed`][ChangeType::Removed] — состояние «до», так как «после» не существует
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeType {
    /// Запись появилась в леджере.
    Created,
    /// Запись изменена.
    Updated,
    /// Запись удалена из леджера.
    Removed,
}

impl ChangeType {
    /// Возвращает строковое представление типа изменения.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "CREATED",
            Self::Updated => "UPDATED",
            Self::Removed => "REMOVED",
        }
    }
}

/// Тип полезной нагрузки записи леджера (дискриминант [`LedgerEntryData`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LedgerEntryType {
    Account,
    Trustline,
    Offer,
    Data,
}

impl LedgerEntryType {
    /// Возвращает строковое представление типа записи.
    ///
    /// # Пример
    /// ```
    /// use ledger::entry::LedgerEntryType;
    /// assert_eq!(LedgerEntryType::Offer.as_str(), "OFFER");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Account => "ACCOUNT",
            Self::Trustline => "TRUSTLINE",
            Self::Offer => "OFFER",
            Self::Data => "DATA",
        }
    }
}

impl fmt::Display for LedgerEntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Цена как рациональное число `n / d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Price {
    /// Числитель.
    pub n: i32,
    /// Знаменатель.
    pub d: i32,
}

/// Предложение на обмен одного актива на другой.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferEntry {
    /// Аккаунт, разместивший предложение.
    pub seller_id: AccountId,
    /// Идентификатор предложения. По смыслу неотрицателен.
    pub offer_id: i64,
    /// Продаваемый актив.
    pub selling: Asset,
    /// Покупаемый актив.
    pub buying: Asset,
    /// Количество продаваемого актива в наименьших единицах (stroops).
    /// По смыслу неотрицательно.
    pub amount: i64,
    /// Цена одной единицы продаваемого актива в единицах покупаемого.
    pub price: Price,
    /// Битовые флаги предложения в знаковом представлении источника.
    pub flags: i32,
}

/// Аккаунт леджера.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountEntry {
    pub account_id: AccountId,
    pub balance: i64,
    pub seq_num: i64,
    pub num_sub_entries: u32,
    pub flags: u32,
    pub home_domain: String,
}

/// Линия доверия аккаунта к кредитному активу.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustLineEntry {
    pub account_id: AccountId,
    pub asset: Asset,
    pub balance: i64,
    pub limit: i64,
    pub flags: u32,
}

/// Именованное значение, привязанное к аккаунту.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataEntry {
    pub account_id: AccountId,
    pub data_name: String,
    pub data_value: Vec<u8>,
}

/// Полезная нагрузка записи леджера — размеченное объединение.
///
/// Порядок вариантов совпадает с [`LedgerEntryType`] и задаёт дискриминант
/// при XDR кодировании.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerEntryData {
    Account(AccountEntry),
    Trustline(TrustLineEntry),
    Offer(OfferEntry),
    Data(DataEntry),
}

impl LedgerEntryData {
    /// Возвращает активный дискриминант объединения.
    #[must_use]
    pub const fn entry_type(&self) -> LedgerEntryType {
        match self {
            Self::Account(_) => LedgerEntryType::Account,
            Self::Trustline(_) => LedgerEntryType::Trustline,
            Self::Offer(_) => LedgerEntryType::Offer,
            Self::Data(_) => LedgerEntryType::Data,
        }
    }

    /// Возвращает предложение, если запись им является.
    #[must_use]
    pub const fn offer(&self) -> Option<&OfferEntry> {
        match self {
            Self::Offer(offer) => Some(offer),
            _ => None,
        }
    }
}

/// Снимок записи леджера.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Номер леджера, в котором запись последний раз изменялась.
    pub last_modified_ledger_seq: u32,
    /// Полезная нагрузка записи.
    pub data: LedgerEntryData,
}

/// Изменение одной записи леджера.
///
/// Содержит до двух снимков: `pre` (отсутствует при создании) и
/// `post` (отсутствует при удалении).
///
/// # Пример
///
/// ```
/// use ledger::entry::{ChangeType, LedgerEntryChange};
///
/// let change = LedgerEntryChange { change_type: ChangeType::Removed, pre: None, post: None };
/// assert_eq!(change.change_type.as_str(), "REMOVED");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntryChange {
    /// Тип изменения.
    pub change_type: ChangeType,
    /// Состояние до изменения.
    pub pre: Option<LedgerEntry>,
    /// Состояние после изменения.
    pub post: Option<LedgerEntry>,
}

impl LedgerEntryChange {
    /// Изменение, создавшее запись.
    #[must_use]
    pub fn created(entry: LedgerEntry) -> Self {
        Self { change_type: ChangeType::Created, pre: None, post: Some(entry) }
    }

    /// Изменение существующей записи.
    #[must_use]
    pub fn updated(pre: LedgerEntry, post: LedgerEntry) -> Self {
        Self { change_type: ChangeType::Updated, pre: Some(pre), post: Some(post) }
    }

    /// Изменение, удалившее запись.
    #[must_use]
    pub fn removed(entry: LedgerEntry) -> Self {
        Self { change_type: ChangeType::Removed, pre: Some(entry), post: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xdr;

    fn sample_offer() -> OfferEntry {
        OfferEntry {
            seller_id: AccountId::ed25519([2u8; 32]),
            offer_id: 42,
            selling: Asset::Native,
            buying: Asset::credit("USD", AccountId::ed25519([3u8; 32])),
            amount: 1_000_000_000,
            price: Price { n: 3, d: 2 },
            flags: 1,
        }
    }

    #[test]
    fn offer_accessor_narrows_union() {
        let data = LedgerEntryData::Offer(sample_offer());
        assert_eq!(data.entry_type(), LedgerEntryType::Offer);
        assert_eq!(data.offer().map(|o| o.offer_id), Some(42));
    }

    #[test]
    fn offer_accessor_rejects_other_variants() {
        let data = LedgerEntryData::Data(DataEntry {
            account_id: AccountId::ed25519([0u8; 32]),
            data_name: "config".to_string(),
            data_value: vec![1, 2, 3],
        });
        assert_eq!(data.entry_type(), LedgerEntryType::Data);
        assert!(data.offer().is_none());
    }

    #[test]
    fn entry_type_discriminant_matches_variant_order() {
        let account = LedgerEntryData::Account(AccountEntry {
            account_id: AccountId::ed25519([0u8; 32]),
            balance: 100,
            seq_num: 1,
            num_sub_entries: 0,
            flags: 0,
            home_domain: String::new(),
        });
        assert_eq!(&xdr::to_bytes(&account).unwrap()[..4], [0, 0, 0, 0]);
        assert_eq!(&xdr::to_bytes(&LedgerEntryData::Offer(sample_offer())).unwrap()[..4], [
            0, 0, 0, 2
        ]);
    }

    #[test]
    fn change_decodes_from_its_own_encoding() {
        let entry = LedgerEntry {
            last_modified_ledger_seq: 7,
            data: LedgerEntryData::Offer(sample_offer()),
        };
        let change = LedgerEntryChange::updated(entry.clone(), entry);
        let text = xdr::to_base64(&change).unwrap();
        assert_eq!(xdr::from_base64::<LedgerEntryChange>(&text).unwrap(), change);
    }

    #[test]
    fn constructors_fill_expected_snapshots() {
        let entry = LedgerEntry {
            last_modified_ledger_seq: 1,
            data: LedgerEntryData::Offer(sample_offer()),
        };
        let created = LedgerEntryChange::created(entry.clone());
        assert!(created.pre.is_none() && created.post.is_some());
        let removed = LedgerEntryChange::removed(entry);
        assert!(removed.pre.is_some() && removed.post.is_none());
    }
}
