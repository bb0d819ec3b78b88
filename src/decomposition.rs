//! таблица декомпозиции, составленная по UnicodeData.txt из UCD
//!
//! в таблицу попадают только канонические декомпозиции: поле 5 разбирается до первого токена,
//! не являющегося шестнадцатеричным числом. тег декомпозиции совместимости (`<compat>`, `<font>` и т.д.)
//! стоит первым, поэтому такие записи в таблицу не попадают вовсе

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use crate::error::TableError;

/// колонка UnicodeData.txt с кодом символа
pub const CODE_FIELD: usize = 0;
/// колонка UnicodeData.txt с декомпозицией
pub const DECOMPOSITION_FIELD: usize = 5;

/// кодпоинт -> последовательность кодпоинтов его декомпозиции (всегда непустая)
#[derive(Debug, Clone, Default)]
pub struct DecompositionTable
{
    map: HashMap<u32, Vec<u32>>,
    stats: TableStats,
}

/// шаг обхода при полной декомпозиции
enum Expansion
{
    /// разложить кодпоинт
    Enter(u32),
    /// декомпозиция кодпоинта записана, он больше не на пути
    Leave(u32),
}

/// статистика по записям источника
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableStats
{
    /// всего записей
    pub records: usize,
    /// записи, попавшие в таблицу
    pub canonical: usize,
    /// записи с тегом декомпозиции совместимости
    pub compatibility: usize,
    /// записи с пустой колонкой декомпозиции
    pub without_decomposition: usize,
    /// декомпозиция есть, но не начинается ни с кода, ни с известного тега
    pub rejected: usize,
}

impl DecompositionTable
{
    /// разбор текста в формате UnicodeData.txt
    pub fn build(source: &str) -> Result<Self, TableError>
    {
        let mut table = Self::default();

        for (index, line) in source.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            table.parse_record(index + 1, line)?;
        }

        tracing::debug!(
            records = table.stats.records,
            canonical = table.stats.canonical,
            compatibility = table.stats.compatibility,
            without_decomposition = table.stats.without_decomposition,
            rejected = table.stats.rejected,
            "decomposition table built"
        );

        Ok(table)
    }

    /// прочитать и разобрать файл UnicodeData.txt
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TableError>
    {
        let path = path.as_ref();

        let bytes = fs::read(path).map_err(|source| TableError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        let source = String::from_utf8(bytes).map_err(|source| TableError::SourceEncoding {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), bytes = source.len(), "reading character database");

        Self::build(&source)
    }

    /// декомпозиция кодпоинта, None - кодпоинт декомпозируется сам в себя
    #[inline]
    pub fn lookup(&self, code: u32) -> Option<&[u32]>
    {
        self.map.get(&code).map(Vec::as_slice)
    }

    /// полная (рекурсивная) декомпозиция кодпоинта
    pub fn full_decomposition(&self, code: u32) -> Vec<u32>
    {
        let mut result = vec![];
        self.full_decomposition_into(code, &mut result);

        result
    }

    /// дописать полную декомпозицию кодпоинта в буфер
    ///
    /// каждый элемент декомпозиции раскладывается дальше, пока не останутся кодпоинты без декомпозиции.
    /// кодпоинт, который уже раскладывается выше по цепочке, записывается как есть.
    /// обход идёт по явному стеку, глубина цепочки не ограничена размером стека потока
    pub fn full_decomposition_into(&self, code: u32, result: &mut Vec<u32>)
    {
        let mut pending = vec![Expansion::Enter(code)];
        let mut path = HashSet::new();

        while let Some(step) = pending.pop() {
            let code = match step {
                Expansion::Enter(code) => code,
                Expansion::Leave(code) => {
                    path.remove(&code);
                    continue;
                }
            };

            match self.map.get(&code) {
                Some(decomposition) if !path.contains(&code) => {
                    path.insert(code);
                    pending.push(Expansion::Leave(code));
                    pending.extend(decomposition.iter().rev().map(|&code| Expansion::Enter(code)));
                }
                _ => result.push(code),
            }
        }
    }

    /// количество кодпоинтов с декомпозицией
    #[inline]
    pub fn len(&self) -> usize
    {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.map.is_empty()
    }

    #[inline]
    pub fn stats(&self) -> TableStats
    {
        self.stats
    }

    /// разбор одной записи
    fn parse_record(&mut self, line: usize, record: &str) -> Result<(), TableError>
    {
        let fields: Vec<&str> = record.split(';').collect();

        if fields.len() <= DECOMPOSITION_FIELD {
            return Err(TableError::MissingFields { line, found: fields.len() });
        }

        let code = parse_hex(fields[CODE_FIELD]).ok_or_else(|| TableError::MalformedCodepoint {
            line,
            value: fields[CODE_FIELD].to_owned(),
        })?;

        self.stats.records += 1;

        let value = fields[DECOMPOSITION_FIELD];

        if value.is_empty() {
            self.stats.without_decomposition += 1;
            return Ok(());
        }

        let mut tokens = value.split_ascii_whitespace().peekable();

        if let Some(tag) = tokens.peek().and_then(|token| DecompositionTag::from_abbr(token)) {
            tracing::trace!(code = %format!("U+{:04X}", code), %tag, "compatibility decomposition");
            self.stats.compatibility += 1;
            return Ok(());
        }

        let mut decomposition = vec![];

        // накапливаем коды до первого токена, не являющегося шестнадцатеричным числом
        for token in tokens {
            if !is_hex(token) {
                break;
            }

            match parse_hex(token) {
                Some(code) => decomposition.push(code),
                None => {
                    return Err(TableError::MalformedDecomposition { line, token: token.to_owned() })
                }
            }
        }

        if decomposition.is_empty() {
            self.stats.rejected += 1;
            return Ok(());
        }

        if self.map.insert(code, decomposition).is_some() {
            tracing::warn!(
                line,
                code = %format!("U+{:04X}", code),
                "duplicate record replaces earlier one"
            );
        } else {
            self.stats.canonical += 1;
        }

        Ok(())
    }
}

impl TryFrom<&str> for DecompositionTable
{
    type Error = TableError;

    #[inline]
    fn try_from(source: &str) -> Result<Self, Self::Error>
    {
        Self::build(source)
    }
}

/// тег, которым в UnicodeData.txt помечена декомпозиция совместимости
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DecompositionTag
{
    Font,
    NoBreak,
    Initial,
    Medial,
    Final,
    Isolated,
    Circle,
    Super,
    Sub,
    Vertical,
    Wide,
    Narrow,
    Small,
    Square,
    Fraction,
    /// всё, что не попало в остальные группы
    Compat,
}

/// записи тегов в UnicodeData.txt
const TAGS: [(&str, DecompositionTag); 16] = [
    ("<font>", DecompositionTag::Font),
    ("<noBreak>", DecompositionTag::NoBreak),
    ("<initial>", DecompositionTag::Initial),
    ("<medial>", DecompositionTag::Medial),
    ("<final>", DecompositionTag::Final),
    ("<isolated>", DecompositionTag::Isolated),
    ("<circle>", DecompositionTag::Circle),
    ("<super>", DecompositionTag::Super),
    ("<sub>", DecompositionTag::Sub),
    ("<vertical>", DecompositionTag::Vertical),
    ("<wide>", DecompositionTag::Wide),
    ("<narrow>", DecompositionTag::Narrow),
    ("<small>", DecompositionTag::Small),
    ("<square>", DecompositionTag::Square),
    ("<fraction>", DecompositionTag::Fraction),
    ("<compat>", DecompositionTag::Compat),
];

impl DecompositionTag
{
    /// тег по его записи в угловых скобках, None - токен не является известным тегом
    pub fn from_abbr(abbr: &str) -> Option<Self>
    {
        TAGS.iter().find(|(name, _)| *name == abbr).map(|(_, tag)| *tag)
    }

    /// запись тега в угловых скобках
    pub fn abbr(&self) -> &'static str
    {
        TAGS.iter()
            .find(|(_, tag)| tag == self)
            .map_or("<compat>", |(name, _)| name)
    }
}

impl core::fmt::Display for DecompositionTag
{
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        f.write_str(self.abbr())
    }
}

/// токен состоит только из шестнадцатеричных цифр (регистр не важен)
#[inline]
fn is_hex(token: &str) -> bool
{
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_hexdigit())
}

/// код без префикса 0x; None, если это не шестнадцатеричное число или оно не помещается в u32
#[inline]
fn parse_hex(token: &str) -> Option<u32>
{
    match is_hex(token) {
        true => u32::from_str_radix(token, 16).ok(),
        false => None,
    }
}
