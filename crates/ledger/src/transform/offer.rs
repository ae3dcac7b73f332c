//! Извлечение предложения из записи и построение выходной записи.

use serde::Serialize;

use super::{InvalidField, TransformError, select_snapshot};
use crate::entry::{LedgerEntry, LedgerEntryChange, OfferEntry, Price, encode_asset};

/// Проверенная плоская запись предложения для аналитического хранилища.
///
/// Строится только через [`transform_offer`] или [`build_output`] и после
/// построения не меняется: поля доступны лишь на чтение.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfferOutput {
    #[serde(rename = "sellerid")]
    seller_id: String,
    #[serde(rename = "offerid")]
    offer_id: i64,
    #[serde(rename = "sellingasset")]
    selling_asset: String,
    #[serde(rename = "buyingasset")]
    buying_asset: String,
    amount: i64,
    #[serde(rename = "pricen")]
    price_n: i32,
    #[serde(rename = "priced")]
    price_d: i32,
    price: f64,
    flags: u32,
    last_modified_ledger: i64,
}

impl OfferOutput {
    /// Адрес продавца (`G...`).
    #[must_use]
    pub fn seller_id(&self) -> &str {
        &self.seller_id
    }

    #[must_use]
    pub const fn offer_id(&self) -> i64 {
        self.offer_id
    }

    /// Продаваемый актив в каноническом виде (base64 XDR).
    #[must_use]
    pub fn selling_asset(&self) -> &str {
        &self.selling_asset
    }

    /// Покупаемый актив в каноническом виде (base64 XDR).
    #[must_use]
    pub fn buying_asset(&self) -> &str {
        &self.buying_asset
    }

    #[must_use]
    pub const fn amount(&self) -> i64 {
        self.amount
    }

    #[must_use]
    pub const fn price_n(&self) -> i32 {
        self.price_n
    }

    #[must_use]
    pub const fn price_d(&self) -> i32 {
        self.price_d
    }

    /// Цена `price_n / price_d`; ровно `0.0` при нулевом числителе.
    #[must_use]
    pub const fn price(&self) -> f64 {
        self.price
    }

    #[must_use]
    pub const fn flags(&self) -> u32 {
        self.flags
    }

    #[must_use]
    pub const fn last_modified_ledger(&self) -> i64 {
        self.last_modified_ledger
    }
}

/// Сужает полезную нагрузку записи до предложения.
///
/// # Ошибки
///
/// [`TransformError::WrongVariant`] с фактическим типом записи.
pub fn extract_offer(entry: &LedgerEntry) -> Result<&OfferEntry, TransformError> {
    entry.data.offer().ok_or(TransformError::WrongVariant(entry.data.entry_type()))
}

/// Проверяет поля предложения и собирает [`OfferOutput`].
///
/// Проверки выполняются по порядку и останавливаются на первой ошибке:
///
/// 1. адрес продавца
/// 2. `offer_id >= 0`
/// 3. кодирование продаваемого и покупаемого активов
/// 4. `amount >= 0`
/// 5. числитель цены `>= 0`
/// 6. знаменатель цены `> 0` (ноль и отрицательное значение дают разные ошибки)
/// 7. `last_modified_ledger >= 0`
///
/// # Пример
///
/// ```
/// use ledger::entry::{AccountId, Asset, OfferEntry, Price};
/// use ledger::transform::build_output;
///
/// let offer = OfferEntry {
///     seller_id: AccountId::ed25519([0u8; 32]),
///     offer_id: 42,
///     selling: Asset::Native,
///     buying: Asset::credit("USD", AccountId::ed25519([1u8; 32])),
///     amount: 1_000_000_000,
///     price: Price { n: 3, d: 2 },
///     flags: 0,
/// };
/// let output = build_output(&offer, 100).unwrap();
/// assert_eq!(output.price(), 1.5);
/// ```
pub fn build_output(
    offer: &OfferEntry,
    last_modified_ledger_seq: u32,
) -> Result<OfferOutput, InvalidField> {
    let offer_id = offer.offer_id;
    let seller_id = offer
        .seller_id
        .address()
        .map_err(|source| InvalidField::SellerId { offer_id, source })?;

    if offer_id < 0 {
        return Err(InvalidField::NegativeOfferId { offer_id, seller_id });
    }

    let selling_asset = encode_asset(&offer.selling)
        .map_err(|source| InvalidField::SellingAsset { offer_id, source })?;
    let buying_asset = encode_asset(&offer.buying)
        .map_err(|source| InvalidField::BuyingAsset { offer_id, source })?;

    let amount = offer.amount;
    if amount < 0 {
        return Err(InvalidField::NegativeAmount { amount, offer_id });
    }

    let Price { n: price_n, d: price_d } = offer.price;
    if price_n < 0 {
        return Err(InvalidField::NegativePriceNumerator { n: price_n, offer_id });
    }
    if price_d == 0 {
        return Err(InvalidField::ZeroPriceDenominator { offer_id });
    }
    if price_d < 0 {
        return Err(InvalidField::NegativePriceDenominator { d: price_d, offer_id });
    }

    let price = if price_n == 0 { 0.0 } else { f64::from(price_n) / f64::from(price_d) };

    // Флаги это битовое поле: отрицательное исходное значение означает
    // установленный старший бит, поэтому биты переносятся как есть.
    let flags = offer.flags as u32;

    let last_modified_ledger = i64::from(last_modified_ledger_seq);
    if last_modified_ledger < 0 {
        return Err(InvalidField::NegativeLastModifiedLedger {
            ledger: last_modified_ledger,
            seller_id,
        });
    }

    Ok(OfferOutput {
        seller_id,
        offer_id,
        selling_asset,
        buying_asset,
        amount,
        price_n,
        price_d,
        price,
        flags,
        last_modified_ledger,
    })
}

/// Преобразует изменение леджера в проверенную запись предложения.
///
/// Выбор снимка → извлечение предложения → проверка полей.
/// Функция чистая: повторный вызов на том же изменении даёт тот же результат.
pub fn transform_offer(change: &LedgerEntryChange) -> Result<OfferOutput, TransformError> {
    let entry = select_snapshot(change)?;
    let offer = extract_offer(entry)?;
    Ok(build_output(offer, entry.last_modified_ledger_seq)?)
}
