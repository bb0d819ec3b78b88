#[macro_use]
extern crate lazy_static;

use quickcheck_macros::quickcheck;
use unicode_decomposing::utf8::{decode_at, encode};
use unicode_decomposing::{
    fold, normalize, normalize_char, DecompositionTable, Normalizer, LAST_CODE,
};

lazy_static! {
    static ref TABLE: DecompositionTable =
        DecompositionTable::build(include_str!("./../test_data/UnicodeData.sample.txt")).unwrap();
}

/// любой буфер обрабатывается до конца, каждый байт либо прочитан, либо пропущен
#[quickcheck]
fn terminates_on_arbitrary_bytes(input: Vec<u8>) -> bool
{
    let (_, report) = Normalizer::new(&TABLE).normalize_with_report(&input);

    report.invalid_bytes <= input.len()
}

#[quickcheck]
fn valid_text_skips_nothing(text: String) -> bool
{
    let (_, report) = Normalizer::new(&TABLE).normalize_with_report(text.as_bytes());

    report.invalid_bytes == 0 && report.unencodable == 0
}

/// повторная полная нормализация ничего не меняет
#[quickcheck]
fn full_normalization_is_idempotent(input: Vec<u8>) -> bool
{
    let normalizer = Normalizer::new_full(&TABLE);
    let once = normalizer.normalize(&input);

    normalizer.normalize(&once) == once
}

/// однократная нормализация не меняет уже разложенный текст
#[quickcheck]
fn single_normalization_is_idempotent_on_decomposed_input(input: Vec<u8>) -> bool
{
    let decomposed = Normalizer::new_full(&TABLE).normalize(&input);

    normalize(&decomposed, &TABLE) == decomposed
}

/// то же для корректного UTF-8 текста
#[quickcheck]
fn single_normalization_is_idempotent_on_decomposed_text(text: String) -> bool
{
    let decomposed = Normalizer::new_full(&TABLE).normalize(text.as_bytes());
    let once = normalize(&decomposed, &TABLE);

    normalize(&once, &TABLE) == once && once == decomposed
}

/// для корректного UTF-8 результат совпадает с посимвольной декомпозицией
#[quickcheck]
fn valid_text_matches_per_char_model(text: String) -> bool
{
    let expected: String = text
        .chars()
        .flat_map(|c| TABLE.full_decomposition(c as u32))
        .map(|code| char::from_u32(fold(code)).unwrap())
        .collect();

    Normalizer::new_full(&TABLE).normalize(text.as_bytes()) == expected.as_bytes()
}

#[quickcheck]
fn fold_only_touches_ascii_uppercase(code: u32) -> bool
{
    match code {
        0x41 ..= 0x5A => fold(code) == code + 32,
        _ => fold(code) == code,
    }
}

/// кодпоинт без декомпозиции раскладывается сам в себя
#[quickcheck]
fn absent_codepoint_is_only_folded(code: u32) -> bool
{
    TABLE.lookup(code).is_some() || normalize_char(code, &TABLE) == vec![fold(code)]
}

#[quickcheck]
fn encode_decode_round_trip(code: u32) -> bool
{
    let code = code % (LAST_CODE + 1);
    let bytes = encode(code).unwrap();

    decode_at(&bytes, 0) == Ok((code, bytes.len()))
}
