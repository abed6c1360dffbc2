use crate::hash::key_hash;

/// Готовая lookup-таблица: неизменяемый артефакт построения.
///
/// Каждый из M слотов указывает на индекс бекенда; `lookup` хеширует ключ
/// в слот и возвращает его владельца. Таблица владеет своими данными и
/// безопасно публикуется читателям через `Arc`-swap — любое изменение
/// набора бекендов требует полного перестроения новой таблицы.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTable {
    backends: Vec<String>,
    slots: Vec<u32>,
}

impl LookupTable {
    pub(crate) fn new(
        backends: Vec<String>,
        slots: Vec<u32>,
    ) -> Self {
        Self { backends, slots }
    }

    /// Размер таблицы M.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Таблица никогда не бывает пустой: построение с M < 2 отклоняется.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Упорядоченный набор бекендов, для которого построена таблица.
    pub fn backends(&self) -> &[String] {
        &self.backends
    }

    /// Слот ключа: `key_hash(key) mod M`.
    pub fn slot_of_key(
        &self,
        key: &[u8],
    ) -> usize {
        (key_hash(key) % self.slots.len() as u64) as usize
    }

    /// Бекенд, обслуживающий ключ.
    pub fn lookup(
        &self,
        key: &[u8],
    ) -> &str {
        let slot = self.slot_of_key(key);
        &self.backends[self.slots[slot] as usize]
    }

    /// Строковый вариант [`lookup`](Self::lookup).
    pub fn lookup_str(
        &self,
        key: &str,
    ) -> &str {
        self.lookup(key.as_bytes())
    }

    /// Владелец конкретного слота.
    pub fn backend_for_slot(
        &self,
        slot: usize,
    ) -> Option<&str> {
        let idx = *self.slots.get(slot)?;
        self.backends.get(idx as usize).map(String::as_str)
    }

    /// Итератор по назначениям `(slot, backend)`.
    pub fn assignments(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(|(slot, &idx)| (slot, self.backends[idx as usize].as_str()))
    }

    /// Количество слотов каждого бекенда, в порядке `backends()`.
    pub fn slot_counts(&self) -> Vec<usize> {
        let mut counts = vec![0usize; self.backends.len()];
        for &idx in &self.slots {
            counts[idx as usize] += 1;
        }
        counts
    }
}
