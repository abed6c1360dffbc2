use std::collections::HashSet;

use tracing::debug;

use super::{lookup::LookupTable, permutation::Permutation};
use crate::{
    config::TableConfig,
    error::{BuildError, BuildResult, ConfigError},
};

/// Маркер незанятого слота на время заполнения.
const UNASSIGNED: u32 = u32::MAX;

/// Строит lookup-таблицу размера `table_size` для упорядоченного набора
/// бекендов с параметрами по умолчанию.
///
/// Порядок `backends` — авторитет для tie-break'ов: бекенды претендуют
/// на слоты строго по кругу в этом порядке, и одинаковый вход даёт
/// байт-в-байт одинаковую таблицу в любом процессе.
pub fn build_table<S: AsRef<str>>(
    backends: &[S],
    table_size: usize,
) -> BuildResult<LookupTable> {
    build_table_with(&TableConfig::new(table_size), backends)
}

/// Строит lookup-таблицу с явной конфигурацией.
///
/// Вся валидация выполняется до первого хеширования; любые ошибки
/// конфигурации возвращаются синхронно и не ретраятся.
pub fn build_table_with<S: AsRef<str>>(
    config: &TableConfig,
    backends: &[S],
) -> BuildResult<LookupTable> {
    validate(config, backends)?;

    let n = backends.len();
    let m = config.table_size;

    let permutations: Vec<Permutation> = backends
        .iter()
        .map(|b| Permutation::new(b.as_ref(), m))
        .collect();

    debug!(backends = n, table_size = m, "building lookup table");

    // Курсор бекенда — индекс следующей позиции в его перестановке.
    // Живёт только внутри этого вызова.
    let mut cursor = vec![0u64; n];
    let mut slots = vec![UNASSIGNED; m];
    let mut filled = 0usize;

    'fill: loop {
        for i in 0..n {
            // Бекенд i претендует на первый свободный слот в собственном
            // порядке предпочтений. Курсор не может пройти больше M
            // позиций: перестановка покрывает все слоты, и если все они
            // заняты, таблица уже заполнена.
            let candidate = loop {
                if cursor[i] >= m as u64 {
                    return Err(BuildError::PermutationExhausted {
                        backend: backends[i].as_ref().to_string(),
                    });
                }
                let c = permutations[i].slot(cursor[i]);
                cursor[i] += 1;
                if slots[c] == UNASSIGNED {
                    break c;
                }
            };

            slots[candidate] = i as u32;
            filled += 1;

            if filled == m {
                break 'fill;
            }
        }
    }

    debug!(backends = n, table_size = m, "lookup table built");

    let names = backends.iter().map(|b| b.as_ref().to_string()).collect();
    Ok(LookupTable::new(names, slots))
}

fn validate<S: AsRef<str>>(
    config: &TableConfig,
    backends: &[S],
) -> Result<(), ConfigError> {
    let n = backends.len();
    let m = config.table_size;

    if n == 0 {
        return Err(ConfigError::EmptyBackendSet);
    }

    let mut seen = HashSet::with_capacity(n);
    for b in backends {
        if !seen.insert(b.as_ref()) {
            return Err(ConfigError::DuplicateBackend(b.as_ref().to_string()));
        }
    }

    if m < 2 || m <= n || m < n * config.min_slot_ratio {
        return Err(ConfigError::TableTooSmall {
            table_size: m,
            backends: n,
            min_ratio: config.min_slot_ratio,
        });
    }

    if !is_prime(m) {
        return Err(ConfigError::TableSizeNotPrime(m));
    }

    Ok(())
}

/// Проверка простоты перебором делителей — размеры таблиц малы
/// относительно стоимости самого построения.
fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3usize;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}
