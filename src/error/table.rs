use thiserror::Error;

/// Ошибки конфигурации построения таблицы.
///
/// Все варианты — детерминированные ошибки конфигурации, а не
/// transient-сбои: они обнаруживаются до начала какого-либо хеширования
/// и не подлежат повтору.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Размер таблицы не простой — skip не гарантированно взаимно прост
    /// с M, и перестановка не покроет все слоты.
    #[error("table size {0} is not prime")]
    TableSizeNotPrime(usize),

    /// M < 2, M <= N или M меньше настроенного минимального отношения к N.
    #[error(
        "table size {table_size} is too small for {backends} backends (min ratio {min_ratio})"
    )]
    TableTooSmall {
        table_size: usize,
        backends: usize,
        min_ratio: usize,
    },

    /// Повтор идентификатора бекенда — владение слотами неоднозначно,
    /// молча дедуплицировать нельзя.
    #[error("duplicate backend id: {0}")]
    DuplicateBackend(String),

    /// Пустой набор бекендов: валидная таблица невозможна.
    #[error("backend set is empty")]
    EmptyBackendSet,
}

/// Ошибки построения таблицы.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Курсор бекенда прошёл всю перестановку, не найдя свободный слот.
    /// Недостижимо, пока M простое (это проверено валидацией), но цикл
    /// выбора слота ограничен явно, а не полагается на свойство.
    #[error("preference sequence exhausted for backend {backend}")]
    PermutationExhausted { backend: String },
}

/// Удобный алиас результата для API построения таблицы.
pub type BuildResult<T> = std::result::Result<T, BuildError>;
