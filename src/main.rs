use dpm_poller::utils::{logger, validation::Validate};
use dpm_poller::{HttpStatusSource, Poller, PollerConfig, TracingSink};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    logger::init_logger();

    let config = PollerConfig::default();
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        std::process::exit(e.exit_code());
    }

    tracing::debug!("Poller config: {:?}", config);

    let source = HttpStatusSource::new(config.endpoint.clone());
    let poller = Poller::new(config, source, TracingSink::new());

    match poller.run().await {
        Ok(summary) => {
            tracing::debug!(
                "✅ Completed {} iterations in {}s",
                summary.iterations,
                summary.elapsed().num_seconds()
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("{}", e.report());
            tracing::debug!("💡 {}: {}", e.user_friendly_message(), e.recovery_suggestion());

            // 第一個錯誤即終止，以非零狀態碼結束
            std::process::exit(e.exit_code());
        }
    }
}
