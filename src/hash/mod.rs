use std::io::Cursor;

use murmur3::murmur3_x64_128;
use xxhash_rust::xxh64::xxh64;

/// Фиксированный seed для offset-хеша (murmur3).
const OFFSET_SEED: u32 = 0x9747_b28c;
/// Фиксированный seed для skip-хеша (xxh64).
const SKIP_SEED: u64 = 0x27d4_eb2f_1656_67c5;
/// Фиксированный seed для хеширования ключей при lookup.
const KEY_SEED: u64 = 0x9e37_79b9_7f4a_7c15;

/// Хеш, из которого выводится offset перестановки бекенда.
///
/// Чистая функция от имени бекенда: одинаковый вход даёт одинаковый
/// результат в любом процессе и на любой ноде. Это обязательное условие —
/// независимые балансировщики должны строить байт-в-байт одинаковые
/// таблицы без координации.
pub fn offset_hash(id: &str) -> u64 {
    let mut cursor = Cursor::new(id.as_bytes());
    // Cursor по срезу в памяти не возвращает ошибок ввода/вывода.
    let h = murmur3_x64_128(&mut cursor, OFFSET_SEED).unwrap();
    (h >> 64) as u64
}

/// Хеш, из которого выводится skip перестановки бекенда.
///
/// Статистически независим от [`offset_hash`]: другое семейство хешей
/// и другой фиксированный seed.
pub fn skip_hash(id: &str) -> u64 {
    xxh64(id.as_bytes(), SKIP_SEED)
}

/// Хеш ключа для `lookup(key) -> slot`.
pub fn key_hash(key: &[u8]) -> u64 {
    xxh64(key, KEY_SEED)
}
