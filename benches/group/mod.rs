pub const WARM_UP_TIME: u64 = 3;
pub const MEASUREMENT_TIME: u64 = 7;

#[macro_export]
macro_rules! group {
    ($fn: ident, $test: ident, $group: expr, $name: expr, $normalizer: expr) => {
        #[inline(never)]
        fn $test(normalizer: &Normalizer, source: &[u8]) -> Vec<u8>
        {
            normalizer.normalize(source)
        }

        fn $fn(c: &mut Criterion)
        {
            let mut group = c.benchmark_group($group);
            let table = group::table();
            let normalizer = $normalizer(&table);

            group.warm_up_time(core::time::Duration::from_secs(group::WARM_UP_TIME));
            group.measurement_time(core::time::Duration::from_secs(group::MEASUREMENT_TIME));

            for (text_name, text) in group::texts() {
                group.throughput(criterion::Throughput::Bytes(text.len() as u64));
                group.bench_with_input(
                    criterion::BenchmarkId::new($name, &text_name),
                    &(&normalizer, text.as_slice()),
                    |b, data| b.iter(|| $test(data.0, criterion::black_box(data.1))),
                );
            }

            group.finish();
        }
    };
}

/// сколько раз повторяется образец текста
const TIMES: usize = 2000;

/// таблица по выдержке из UnicodeData.txt
pub fn table() -> unicode_decomposing::DecompositionTable
{
    unicode_decomposing::DecompositionTable::build(include_str!(
        "./../../test_data/UnicodeData.sample.txt"
    ))
    .unwrap()
}

/// тексты для замеров: ASCII, латиница с диакритикой, кириллица и поврежденный UTF-8
pub fn texts() -> Vec<(String, Vec<u8>)>
{
    let samples: [(&str, &[u8]); 4] = [
        ("ascii", b"The Quick Brown Fox Jumps Over The Lazy Dog. "),
        ("latin", "Ça déjà ÉTÉ, Ångström: ŠKODA ŽIŽKOV Müller Ñandú. ".as_bytes()),
        ("cyrillic", "Ёлка, Йошкар-Ола, съешь же ещё этих мягких булок. ".as_bytes()),
        ("broken", &[0x41, 0xFF, 0xC3, 0x89, 0xE2, 0x82, 0x80, 0xC3, 0x20]),
    ];

    samples
        .iter()
        .map(|(name, sample)| (name.to_string(), sample.repeat(TIMES)))
        .collect()
}
