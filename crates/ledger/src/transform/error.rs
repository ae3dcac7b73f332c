//! Ошибки преобразования изменения леджера в запись предложения.

use thiserror::Error;

use crate::{entry::AssetError, entry::LedgerEntryType, strkey::StrKeyError};

/// Итоговая ошибка преобразования одного изменения.
///
/// Ошибки не восстанавливаемы: запись с такой ошибкой не выгружается,
/// а решение пропустить её или остановить выгрузку принимает вызывающий код.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// Нужный снимок записи отсутствует.
    #[error("ledger entry is nil")]
    NilEntry,
    /// Запись существует, но не является предложением.
    #[error("could not extract offer data; actual type is {0}")]
    WrongVariant(LedgerEntryType),
    /// Поле предложения нарушает ограничение своей области значений.
    #[error("invalid field: {0}")]
    InvalidField(#[from] InvalidField),
}

/// Нарушение ограничения конкретного поля предложения.
///
/// Каждый вариант несёт идентификатор предложения или адрес продавца,
/// чтобы запись можно было найти.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidField {
    #[error("seller address could not be resolved for offer {offer_id}")]
    SellerId { offer_id: i64, source: StrKeyError },
    #[error("offer id is negative ({offer_id}) for offer from account: {seller_id}")]
    NegativeOfferId { offer_id: i64, seller_id: String },
    #[error("selling asset is invalid for offer {offer_id}")]
    SellingAsset { offer_id: i64, source: AssetError },
    #[error("buying asset is invalid for offer {offer_id}")]
    BuyingAsset { offer_id: i64, source: AssetError },
    #[error("amount is negative ({amount}) for offer {offer_id}")]
    NegativeAmount { amount: i64, offer_id: i64 },
    #[error("price numerator is negative ({n}) for offer {offer_id}")]
    NegativePriceNumerator { n: i32, offer_id: i64 },
    #[error("price denominator is 0 for offer {offer_id}")]
    ZeroPriceDenominator { offer_id: i64 },
    #[error("price denominator is negative ({d}) for offer {offer_id}")]
    NegativePriceDenominator { d: i32, offer_id: i64 },
    #[error("last modified ledger number is negative ({ledger}) for account: {seller_id}")]
    NegativeLastModifiedLedger { ledger: i64, seller_id: String },
}

impl InvalidField {
    /// Имя поля, нарушившего ограничение.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::SellerId { .. } => "seller_id",
            Self::NegativeOfferId { .. } => "offer_id",
            Self::SellingAsset { .. } => "selling_asset",
            Self::BuyingAsset { .. } => "buying_asset",
            Self::NegativeAmount { .. } => "amount",
            Self::NegativePriceNumerator { .. } => "pricen",
            Self::ZeroPriceDenominator { .. } | Self::NegativePriceDenominator { .. } => "priced",
            Self::NegativeLastModifiedLedger { .. } => "last_modified_ledger",
        }
    }
}
