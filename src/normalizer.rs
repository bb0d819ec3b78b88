use crate::cursor::ByteCursor;
use crate::decomposition::DecompositionTable;
use crate::fold::fold;
use crate::utf8::encode_into;

/// глубина применения таблицы декомпозиции
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecompositionMode
{
    /// таблица применяется один раз
    #[default]
    Single,
    /// элементы декомпозиции раскладываются дальше, пока это возможно
    Full,
}

/// счётчики одного прохода
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassReport
{
    /// пропущенные байты, с которых не удалось прочитать кодпоинт
    pub invalid_bytes: usize,
    /// кодпоинты выше U+10FFFF, не попавшие в результат
    pub unencodable: usize,
    /// кодпоинты, замененные декомпозицией
    pub decomposed: usize,
}

/// нормализатор: декомпозиция по таблице + приведение A-Z к нижнему регистру
///
/// таблица только читается, так что один экземпляр можно использовать для любого количества проходов
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'a>
{
    table: &'a DecompositionTable,
    mode: DecompositionMode,
}

impl<'a> Normalizer<'a>
{
    /// однократная декомпозиция
    pub fn new(table: &'a DecompositionTable) -> Self
    {
        Self::with_mode(table, DecompositionMode::Single)
    }

    /// полная декомпозиция
    pub fn new_full(table: &'a DecompositionTable) -> Self
    {
        Self::with_mode(table, DecompositionMode::Full)
    }

    pub fn with_mode(table: &'a DecompositionTable, mode: DecompositionMode) -> Self
    {
        Self { table, mode }
    }

    #[inline]
    pub fn mode(&self) -> DecompositionMode
    {
        self.mode
    }

    /// нормализация байтового буфера, исходный буфер не изменяется
    ///
    /// байт, с которого не удалось прочитать кодпоинт, пропускается; кодпоинт, который нельзя
    /// записать в UTF-8, в результат не попадает
    pub fn normalize(&self, input: &[u8]) -> Vec<u8>
    {
        self.normalize_with_report(input).0
    }

    /// нормализация + счётчики пропущенных байт и кодпоинтов
    pub fn normalize_with_report(&self, input: &[u8]) -> (Vec<u8>, PassReport)
    {
        let mut cursor = ByteCursor::new(input);
        let mut result = Vec::with_capacity(input.len());
        let mut buffer = Vec::with_capacity(18);
        let mut report = PassReport::default();

        while !cursor.is_empty() {
            let (code, width) = match cursor.decode() {
                Ok(decoded) => decoded,
                Err(error) => {
                    tracing::trace!(%error, "skipping byte");

                    report.invalid_bytes += 1;
                    cursor.advance(1);

                    continue;
                }
            };

            buffer.clear();

            if self.decompose_into(code, &mut buffer) {
                report.decomposed += 1;
            }

            for &code in buffer.iter() {
                if let Err(error) = encode_into(fold(code), &mut result) {
                    tracing::trace!(offset = cursor.position(), %error, "dropping codepoint");
                    report.unencodable += 1;
                }
            }

            cursor.advance(width);
        }

        if report.unencodable > 0 {
            tracing::warn!(count = report.unencodable, "codepoints above U+10FFFF were dropped");
        }

        tracing::debug!(
            input = input.len(),
            output = result.len(),
            invalid_bytes = report.invalid_bytes,
            unencodable = report.unencodable,
            decomposed = report.decomposed,
            "normalization pass finished"
        );

        (result, report)
    }

    /// декомпозиция и приведение к нижнему регистру одного кодпоинта
    pub fn normalize_char(&self, code: u32) -> Vec<u32>
    {
        let mut buffer = vec![];
        self.decompose_into(code, &mut buffer);

        buffer.iter_mut().for_each(|code| *code = fold(*code));

        buffer
    }

    /// дописать в буфер декомпозицию кодпоинта (или сам кодпоинт), true - если декомпозиция есть
    #[inline]
    fn decompose_into(&self, code: u32, buffer: &mut Vec<u32>) -> bool
    {
        match self.table.lookup(code) {
            Some(decomposition) => {
                match self.mode {
                    DecompositionMode::Single => buffer.extend_from_slice(decomposition),
                    DecompositionMode::Full => self.table.full_decomposition_into(code, buffer),
                }
                true
            }
            None => {
                buffer.push(code);
                false
            }
        }
    }
}

/// однократная декомпозиция и приведение к нижнему регистру байтового буфера
pub fn normalize(input: &[u8], table: &DecompositionTable) -> Vec<u8>
{
    Normalizer::new(table).normalize(input)
}

/// однократная декомпозиция и приведение к нижнему регистру одного кодпоинта
pub fn normalize_char(code: u32, table: &DecompositionTable) -> Vec<u32>
{
    Normalizer::new(table).normalize_char(code)
}
