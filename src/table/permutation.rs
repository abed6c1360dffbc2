use crate::hash::{offset_hash, skip_hash};

/// Перестановка предпочтений одного бекенда.
///
/// Хранится только пара `(offset, skip)` — сама последовательность
/// `slot(j) = (offset + j*skip) mod M` вычисляется лениво, без
/// материализации N×M индексов. Пока M простое, а `skip` лежит в
/// `[1, M-1]`, последовательность — биекция на `{0..M-1}`: каждый слот
/// встречается ровно один раз до индекса M.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permutation {
    offset: u64,
    skip: u64,
    table_size: u64,
}

impl Permutation {
    /// Выводит `(offset, skip)` из имени бекенда.
    ///
    /// Требует `table_size >= 2` (валидируется до вызова билдером).
    pub fn new(
        backend: &str,
        table_size: usize,
    ) -> Self {
        let m = table_size as u64;
        Self {
            offset: offset_hash(backend) % m,
            skip: 1 + skip_hash(backend) % (m - 1),
            table_size: m,
        }
    }

    /// j-я позиция предпочтений: `(offset + j*skip) mod M`.
    pub fn slot(
        &self,
        j: u64,
    ) -> usize {
        let m = self.table_size as u128;
        ((self.offset as u128 + j as u128 * self.skip as u128) % m) as usize
    }

    /// Полная последовательность предпочтений длины M.
    pub fn sequence(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.table_size).map(move |j| self.slot(j))
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn skip(&self) -> u64 {
        self.skip
    }

    pub fn table_size(&self) -> usize {
        self.table_size as usize
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    /// Тест проверяет главное свойство: последовательность предпочтений —
    /// перестановка {0..M-1} для любого простого M.
    #[rstest]
    #[case(2)]
    #[case(3)]
    #[case(5)]
    #[case(7)]
    #[case(97)]
    #[case(113)]
    #[case(1009)]
    fn test_sequence_is_bijection(#[case] m: usize) {
        for backend in ["dip1", "dip2", "some-longer-backend-name"] {
            let perm = Permutation::new(backend, m);
            let mut seen: Vec<usize> = perm.sequence().collect();
            assert_eq!(seen.len(), m);
            seen.sort_unstable();
            let expected: Vec<usize> = (0..m).collect();
            assert_eq!(seen, expected, "not a permutation for {backend} @ {m}");
        }
    }

    /// Тест проверяет диапазоны производных значений:
    /// offset в [0, M), skip в [1, M-1].
    #[rstest]
    #[case(2)]
    #[case(113)]
    #[case(65537)]
    fn test_offset_and_skip_ranges(#[case] m: usize) {
        for i in 0..100 {
            let perm = Permutation::new(&format!("backend_{i}"), m);
            assert!(perm.offset() < m as u64);
            assert!(perm.skip() >= 1);
            assert!(perm.skip() <= (m - 1) as u64);
        }
    }

    /// Тест проверяет детерминизм: одна и та же пара (бекенд, M) даёт
    /// одну и ту же перестановку при каждом вызове.
    #[test]
    fn test_deterministic() {
        let a = Permutation::new("dip3", 113);
        let b = Permutation::new("dip3", 113);
        assert_eq!(a, b);
        assert!(a.sequence().eq(b.sequence()));
    }

    /// Тест проверяет, что перестановка бекенда не зависит от состава
    /// остального набора — основа минимальной пертурбации.
    #[test]
    fn test_independent_of_other_backends() {
        let alone = Permutation::new("dip1", 113);
        let _noise = Permutation::new("dip2", 113);
        let again = Permutation::new("dip1", 113);
        assert_eq!(alone, again);
    }

    /// Курсор может уходить за M (билдер ограничивает его явно);
    /// индексация при этом циклична и не переполняется.
    #[test]
    fn test_slot_wraps_and_does_not_overflow() {
        let perm = Permutation::new("dip1", 113);
        assert_eq!(perm.slot(113), perm.slot(0));
        let _ = perm.slot(u64::MAX);
    }
}
