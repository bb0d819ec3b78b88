use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

/// ошибка разбора UTF-8 последовательности
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError
{
    /// позиция за пределами буфера
    #[error("offset {offset} is out of bounds")]
    OutOfBounds { offset: usize },
    /// первый байт не может начинать последовательность (байт продолжения, 5/6-байтовые шаблоны)
    #[error("invalid leading byte 0x{byte:02X} at offset {offset}")]
    InvalidLeadingByte { offset: usize, byte: u8 },
    /// последовательность обрывается концом буфера
    #[error("truncated sequence at offset {offset}: expected {expected} bytes")]
    Truncated { offset: usize, expected: usize },
    /// байт не соответствует шаблону 10xxxxxx
    #[error("invalid continuation byte 0x{byte:02X} at offset {offset}")]
    InvalidContinuation { offset: usize, byte: u8 },
}

/// кодпоинт не может быть записан в UTF-8
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError
{
    #[error("U+{0:X} is above U+10FFFF and has no UTF-8 encoding")]
    OutOfRange(u32),
}

/// ошибка построения таблицы декомпозиции
#[derive(Debug, thiserror::Error)]
pub enum TableError
{
    /// файл UCD не удалось открыть / прочитать
    #[error("cannot read character database {}: {source}", .path.display())]
    SourceUnavailable
    {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// файл UCD прочитан, но не является UTF-8 текстом
    #[error("character database {} is not valid UTF-8: {source}", .path.display())]
    SourceEncoding
    {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },
    /// код в поле 0 не является шестнадцатеричным числом
    #[error("line {line}: codepoint field {value:?} is not hexadecimal")]
    MalformedCodepoint { line: usize, value: String },
    /// в записи меньше 6 полей
    #[error("line {line}: expected at least 6 fields, found {found}")]
    MissingFields { line: usize, found: usize },
    /// шестнадцатеричный токен декомпозиции не помещается в u32
    #[error("line {line}: decomposition token {token:?} does not fit a codepoint")]
    MalformedDecomposition { line: usize, token: String },
}
