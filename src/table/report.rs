use std::fmt;

use serde::Serialize;

use super::lookup::LookupTable;

/// Нагрузка одного бекенда: сколько слотов таблицы ему принадлежит.
#[derive(Debug, Clone, Serialize)]
pub struct BackendLoad {
    pub backend: String,
    pub slots: usize,
    /// Доля таблицы, 0.0..=1.0.
    pub share: f64,
}

/// Сводка распределения слотов по бекендам.
///
/// Чистая презентация поверх готовой таблицы: ничего не считает заново
/// при повторных обращениях и не влияет на построение.
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentReport {
    pub table_size: usize,
    pub loads: Vec<BackendLoad>,
    pub min_slots: usize,
    pub max_slots: usize,
}

impl AssignmentReport {
    pub fn new(table: &LookupTable) -> Self {
        let counts = table.slot_counts();
        let table_size = table.len();

        let loads = table
            .backends()
            .iter()
            .zip(&counts)
            .map(|(backend, &slots)| BackendLoad {
                backend: backend.clone(),
                slots,
                share: slots as f64 / table_size as f64,
            })
            .collect();

        Self {
            table_size,
            loads,
            min_slots: counts.iter().copied().min().unwrap_or(0),
            max_slots: counts.iter().copied().max().unwrap_or(0),
        }
    }

    /// Разброс нагрузки между самым и наименее загруженным бекендом.
    pub fn spread(&self) -> usize {
        self.max_slots - self.min_slots
    }
}

impl fmt::Display for AssignmentReport {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(
            f,
            "Backend load ({} slots, spread {}):",
            self.table_size,
            self.spread()
        )?;
        for load in &self.loads {
            writeln!(
                f,
                "{} :: {} ({:.1}%)",
                load.backend,
                load.slots,
                load.share * 100.0
            )?;
        }
        Ok(())
    }
}

/// Итог сравнения двух таблиц, построенных для пересекающихся наборов
/// бекендов.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Disruption {
    /// Слоты, принадлежавшие общим для обеих таблиц бекендам.
    pub shared_slots: usize,
    /// Из них — сменившие владельца.
    pub moved_slots: usize,
}

impl Disruption {
    /// Доля переехавших слотов среди слотов общих бекендов.
    pub fn fraction(&self) -> f64 {
        if self.shared_slots == 0 {
            return 0.0;
        }
        self.moved_slots as f64 / self.shared_slots as f64
    }
}

/// Сравнивает назначения двух таблиц одинакового размера.
///
/// Учитываются только слоты, которыми в `before` владел бекенд,
/// присутствующий в обеих таблицах: слоты исчезнувших бекендов обязаны
/// переехать и пертурбацией не считаются.
pub fn disruption(
    before: &LookupTable,
    after: &LookupTable,
) -> Disruption {
    debug_assert_eq!(before.len(), after.len());

    let mut shared_slots = 0usize;
    let mut moved_slots = 0usize;

    for ((_, owner_before), (_, owner_after)) in before.assignments().zip(after.assignments()) {
        if !after.backends().iter().any(|b| b == owner_before) {
            continue;
        }
        shared_slots += 1;
        if owner_before != owner_after {
            moved_slots += 1;
        }
    }

    Disruption {
        shared_slots,
        moved_slots,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::build_table;

    const DIPS: [&str; 5] = ["dip1", "dip2", "dip3", "dip4", "dip5"];

    /// Тест проверяет сводку: сумма слотов равна M, доли в сумме дают 1,
    /// разброс при строгом round-robin не больше 1.
    #[test]
    fn test_report_totals() {
        let table = build_table(&DIPS, 113).unwrap();
        let report = AssignmentReport::new(&table);

        assert_eq!(report.table_size, 113);
        assert_eq!(report.loads.iter().map(|l| l.slots).sum::<usize>(), 113);
        let share_sum: f64 = report.loads.iter().map(|l| l.share).sum();
        assert!((share_sum - 1.0).abs() < 1e-9);
        assert!(report.spread() <= 1);
    }

    #[test]
    fn test_report_display_lists_backends() {
        let table = build_table(&DIPS, 113).unwrap();
        let rendered = AssignmentReport::new(&table).to_string();
        for dip in DIPS {
            assert!(rendered.contains(dip), "missing {dip} in report");
        }
    }

    /// Идентичные таблицы — нулевая пертурбация.
    #[test]
    fn test_disruption_identical_tables() {
        let t1 = build_table(&DIPS, 113).unwrap();
        let t2 = build_table(&DIPS, 113).unwrap();
        let d = disruption(&t1, &t2);
        assert_eq!(d.moved_slots, 0);
        assert_eq!(d.shared_slots, 113);
        assert_eq!(d.fraction(), 0.0);
    }

    /// Тест проверяет границу пертурбации при удалении бекенда: среди
    /// слотов выживших переезжает лишь малая доля.
    #[test]
    fn test_disruption_on_removal_is_small() {
        let smaller = ["dip1", "dip2", "dip3", "dip4"];
        let t1 = build_table(&DIPS, 113).unwrap();
        let t2 = build_table(&smaller, 113).unwrap();

        let d = disruption(&t1, &t2);
        // У dip5 было 22-23 слота, остальные ~90 принадлежат выжившим.
        assert!(d.shared_slots >= 80);
        assert!(
            d.fraction() <= 0.25,
            "disruption too high: {}",
            d.fraction()
        );
    }
}
