//! User Name Value Object
//!
//! ユーザー名は、ユーザーを識別するための**公開識別子（ハンドル）**。
//! ログイン、画面表示、検索に使用される。
//!
//! ## 不変条件
//! - 長さ: 4文字以上
//! - 先頭: ASCIIアルファベット
//! - 2文字目以降: 英数字または `_`
//!
//! 大文字・小文字は保存時そのまま。一意性判定もケースセンシティブ。

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum length for user name (in characters)
pub const USER_NAME_MIN_LENGTH: usize = 4;

// ============================================================================
// Error Types
// ============================================================================

/// Error returned when user name validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserNameError {
    /// User name is too short (minimum: USER_NAME_MIN_LENGTH)
    TooShort { length: usize, min: usize },

    /// User name starts with a character outside a-z / A-Z
    InvalidStart { char: char },

    /// User name contains an invalid character after the first
    InvalidCharacter { char: char, position: usize },
}

impl fmt::Display for UserNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { length, min } => {
                write!(f, "User name is too short ({length} chars, minimum {min})")
            }
            Self::InvalidStart { char } => {
                write!(f, "User name must start with an ASCII letter, got '{char}'")
            }
            Self::InvalidCharacter { char, position } => {
                write!(
                    f,
                    "Invalid character '{char}' at position {position}. Only letters, digits and _ are allowed"
                )
            }
        }
    }
}

impl std::error::Error for UserNameError {}

// ============================================================================
// UserName Value Object
// ============================================================================

/// Validated user name
///
/// # Invariants
/// - At least USER_NAME_MIN_LENGTH characters
/// - First character is an ASCII letter
/// - Remaining characters are alphanumeric or underscore
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Create a new UserName from raw input
    pub fn new(input: impl Into<String>) -> Result<Self, UserNameError> {
        let input = input.into();
        Self::validate(&input)?;
        Ok(Self(input))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    fn validate(input: &str) -> Result<(), UserNameError> {
        let length = input.chars().count();
        if length < USER_NAME_MIN_LENGTH {
            return Err(UserNameError::TooShort {
                length,
                min: USER_NAME_MIN_LENGTH,
            });
        }

        let mut chars = input.chars().enumerate();

        // Length was checked, so the first character exists.
        // The first character is restricted to ASCII letters; the rest
        // only has to be alphanumeric (Unicode letters and digits pass).
        if let Some((_, first)) = chars.next() {
            if !first.is_ascii_alphabetic() {
                return Err(UserNameError::InvalidStart { char: first });
            }
        }

        for (pos, ch) in chars {
            if !ch.is_alphanumeric() && ch != '_' {
                return Err(UserNameError::InvalidCharacter {
                    char: ch,
                    position: pos,
                });
            }
        }

        Ok(())
    }
}

impl fmt::Debug for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserName").field(&self.0).finish()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for UserName {
    type Error = UserNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserName> for String {
    fn from(name: UserName) -> Self {
        name.0
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod length_validation {
        use super::*;

        #[test]
        fn test_empty_fails() {
            assert!(matches!(
                UserName::new(""),
                Err(UserNameError::TooShort { length: 0, min: 4 })
            ));
        }

        #[test]
        fn test_too_short() {
            assert!(matches!(
                UserName::new("abc"),
                Err(UserNameError::TooShort { length: 3, min: 4 })
            ));
        }

        #[test]
        fn test_minimum_length() {
            let name = UserName::new("abcd");
            assert!(name.is_ok());
            assert_eq!(name.unwrap().as_str(), "abcd");
        }

        #[test]
        fn test_long_name_ok() {
            assert!(UserName::new("a".repeat(100)).is_ok());
        }
    }

    mod character_validation {
        use super::*;

        #[test]
        fn test_valid_alphanumeric() {
            assert!(UserName::new("alice123").is_ok());
        }

        #[test]
        fn test_valid_underscore() {
            assert!(UserName::new("alice_bob").is_ok());
        }

        #[test]
        fn test_case_preserved() {
            let name = UserName::new("Alice").unwrap();
            assert_eq!(name.as_str(), "Alice");
        }

        #[test]
        fn test_digit_start_fails() {
            assert!(matches!(
                UserName::new("1alice"),
                Err(UserNameError::InvalidStart { char: '1' })
            ));
        }

        #[test]
        fn test_underscore_start_fails() {
            assert!(matches!(
                UserName::new("_alice"),
                Err(UserNameError::InvalidStart { char: '_' })
            ));
        }

        #[test]
        fn test_invalid_special_char() {
            assert!(matches!(
                UserName::new("alice@bob"),
                Err(UserNameError::InvalidCharacter { char: '@', .. })
            ));
        }

        #[test]
        fn test_whitespace_fails() {
            assert!(matches!(
                UserName::new("alice bob"),
                Err(UserNameError::InvalidCharacter { char: ' ', .. })
            ));
        }

        #[test]
        fn test_non_ascii_first_char_fails() {
            assert!(matches!(
                UserName::new("日本語太郎"),
                Err(UserNameError::InvalidStart { char: '日' })
            ));
            assert!(matches!(
                UserName::new("éric_01"),
                Err(UserNameError::InvalidStart { char: 'é' })
            ));
        }

        #[test]
        fn test_unicode_letters_after_first_ok() {
            // is_alphanumeric is Unicode-aware, only the first character
            // is pinned to ASCII
            assert!(UserName::new("u日本語").is_ok());
        }

        #[test]
        fn test_emoji_fails() {
            assert!(matches!(
                UserName::new("alice🎉x"),
                Err(UserNameError::InvalidCharacter { .. })
            ));
        }
    }

    mod serialization {
        use super::*;

        #[test]
        fn test_serialize() {
            let name = UserName::new("alice").unwrap();
            let json = serde_json::to_string(&name).unwrap();
            assert_eq!(json, "\"alice\"");
        }

        #[test]
        fn test_deserialize() {
            let name: UserName = serde_json::from_str("\"alice\"").unwrap();
            assert_eq!(name.as_str(), "alice");
        }

        #[test]
        fn test_deserialize_invalid() {
            let result: Result<UserName, _> = serde_json::from_str("\"ab\"");
            assert!(result.is_err());
        }
    }

    mod display_and_debug {
        use super::*;

        #[test]
        fn test_display() {
            let name = UserName::new("alice").unwrap();
            assert_eq!(format!("{}", name), "alice");
        }

        #[test]
        fn test_debug() {
            let name = UserName::new("alice").unwrap();
            let debug = format!("{:?}", name);
            assert!(debug.contains("UserName"));
            assert!(debug.contains("alice"));
        }
    }
}
