use anyhow::{Context, Result};
use config::Config;

mod config;

fn main() -> Result<()> {
    use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};
    tracing_log::LogTracer::init().ok();
    let env = std::env::var("XICON_LOG").unwrap_or_else(|_| "error".into());
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_span_events(FmtSpan::ACTIVE | FmtSpan::CLOSE)
        .with_env_filter(EnvFilter::new(env))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
    log_panics::init();

    let config = Config::default();
    tracing::debug!("{:?}", config);
    xicon::android::mipmap_ic_launcher(&config.icon, &config.res, |density, path| {
        let size = density.size();
        println!("Created: {} ({}x{})", path.display(), size, size);
    })
    .with_context(|| {
        format!(
            "failed to create launcher icons from {} in {}",
            config.icon.display(),
            config.res.display()
        )
    })?;
    println!("\nAll launcher icons created successfully!");
    Ok(())
}
