//! Идентификатор аккаунта в леджере.

use serde::{Deserialize, Serialize};

use crate::strkey::{self, KEY_LEN, StrKeyError, VersionByte};

/// Тип публичного ключа: единственный известный вариант — ed25519.
pub const PUBLIC_KEY_TYPE_ED25519: u32 = 0;

/// Идентификатор аккаунта (публичный ключ).
///
/// Хранится в том виде, в каком пришёл из леджера: сырой дискриминант типа
/// ключа и 32 байта ключевого материала. Поэтому в адрес может быть
/// преобразован не каждый `AccountId`, см. [`AccountId::address`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId {
    /// Дискриминант типа ключа ([`PUBLIC_KEY_TYPE_ED25519`] для корректных ключей).
    pub key_type: u32,
    /// Ключевой материал.
    pub key: [u8; KEY_LEN],
}

impl AccountId {
    /// Создаёт идентификатор из ed25519 ключа.
    #[must_use]
    pub const fn ed25519(key: [u8; KEY_LEN]) -> Self {
        Self { key_type: PUBLIC_KEY_TYPE_ED25519, key }
    }

    /// Возвращает канонический адрес аккаунта (`G...`).
    ///
    /// # Ошибки
    ///
    /// [`StrKeyError::UnknownKeyType`], если тип ключа не ed25519.
    ///
    /// # Пример
    ///
    /// ```
    /// use ledger::entry::AccountId;
    ///
    /// let id = AccountId::ed25519([0u8; 32]);
    /// assert_eq!(
    ///     id.address().unwrap(),
    ///     "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF"
    /// );
    /// ```
    pub fn address(&self) -> Result<String, StrKeyError> {
        if self.key_type != PUBLIC_KEY_TYPE_ED25519 {
            return Err(StrKeyError::UnknownKeyType(self.key_type));
        }
        strkey::encode(VersionByte::AccountId, &self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_is_account_strkey() {
        let id = AccountId::ed25519([7u8; 32]);
        let address = id.address().unwrap();
        assert!(address.starts_with('G'));
        assert_eq!(address.len(), 56);
        assert_eq!(address, strkey::encode(VersionByte::AccountId, &[7u8; 32]).unwrap());
    }

    #[test]
    fn unknown_key_type_has_no_address() {
        let id = AccountId { key_type: 3, key: [0u8; 32] };
        assert_eq!(id.address(), Err(StrKeyError::UnknownKeyType(3)));
    }
}
