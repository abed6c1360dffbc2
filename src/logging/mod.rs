use tracing_subscriber::EnvFilter;

/// Инициализация логирования: fmt-подписчик с фильтром из `RUST_LOG`
/// либо с уровнем по умолчанию.
pub fn init_logging(
    default_level: &str
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()?;

    Ok(())
}
