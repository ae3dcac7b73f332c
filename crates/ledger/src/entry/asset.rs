//! Описание актива и его каноническое строковое представление.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::AccountId;
use crate::xdr;

/// Ошибка кодирования актива.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    #[error("asset could not be encoded")]
    Encoding(#[from] xdr::Error),
}

/// Актив, которым торгует предложение.
///
/// Нативный актив не имеет кода и эмитента. Кредитные активы несут код,
/// дополненный нулевыми байтами справа, и аккаунт эмитента.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Asset {
    /// Нативный актив леджера.
    Native,
    /// Кредитный актив с кодом длиной 1–4 символа.
    CreditAlphanum4 { asset_code: [u8; 4], issuer: AccountId },
    /// Кредитный актив с кодом длиной 5–12 символов.
    CreditAlphanum12 { asset_code: [u8; 12], issuer: AccountId },
}

impl Asset {
    /// Создаёт кредитный актив, выбирая вариант по длине кода.
    ///
    /// Код длиннее 12 байт обрезается.
    #[must_use]
    pub fn credit(code: &str, issuer: AccountId) -> Self {
        let bytes = code.as_bytes();
        if bytes.len() <= 4 {
            let mut asset_code = [0u8; 4];
            asset_code[..bytes.len()].copy_from_slice(bytes);
            Self::CreditAlphanum4 { asset_code, issuer }
        } else {
            let mut asset_code = [0u8; 12];
            let len = bytes.len().min(12);
            asset_code[..len].copy_from_slice(&bytes[..len]);
            Self::CreditAlphanum12 { asset_code, issuer }
        }
    }
}

/// Кодирует актив в каноническую строку: base64 от его XDR представления.
///
/// Код актива переносится как есть: содержимое кода не проверяется,
/// ошибкой считается только отказ кодировщика.
///
/// # Пример
///
/// ```
/// use ledger::entry::{Asset, encode_asset};
///
/// assert_eq!(encode_asset(&Asset::Native).unwrap(), "AAAAAA==");
/// ```
pub fn encode_asset(asset: &Asset) -> Result<String, AssetError> {
    Ok(xdr::to_base64(asset)?)
}
