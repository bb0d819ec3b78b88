//! нормализация UTF-8 текста: каноническая декомпозиция по таблице из UnicodeData.txt
//! и приведение латинских A-Z к нижнему регистру
//!
//! ```
//! use unicode_decomposing::{DecompositionTable, Normalizer};
//!
//! let table = DecompositionTable::build(
//!     "00C9;LATIN CAPITAL LETTER E WITH ACUTE;Lu;0;L;0045 0301;;;;N;;;;00E9;",
//! )
//! .unwrap();
//!
//! assert_eq!(Normalizer::new(&table).normalize("É".as_bytes()), "e\u{301}".as_bytes());
//! ```

pub use decomposition::DecompositionTable;
pub use decomposition::DecompositionTag;
pub use decomposition::TableStats;
pub use decomposition::CODE_FIELD;
pub use decomposition::DECOMPOSITION_FIELD;
pub use error::DecodeError;
pub use error::EncodeError;
pub use error::TableError;
pub use fold::fold;
pub use normalizer::normalize;
pub use normalizer::normalize_char;
pub use normalizer::DecompositionMode;
pub use normalizer::Normalizer;
pub use normalizer::PassReport;

pub mod utf8;

mod cursor;
mod decomposition;
mod error;
mod fold;
mod normalizer;

/// последний кодпоинт Unicode
pub const LAST_CODE: u32 = 0x10FFFF;

/// результат разбора UTF-8, если кодпоинт прочитать не удалось
pub const INVALID_CODE: u32 = u32::MAX;

/// путь к UnicodeData.txt по умолчанию
pub const DEFAULT_TABLE_PATH: &str = "UnicodeData.txt";
