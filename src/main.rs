use clap::Parser;
use contact_manager::core::ConfigProvider;
use contact_manager::utils::logger;
use contact_manager::{
    CliConfig, ContactStore, Coordinator, HintDelays, HttpContactApi, Presenter, StdinEvents,
    StdoutTarget,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting contact-manager");
    tracing::debug!("CLI config: {:?}", cli);

    // 載入並驗證設定
    let settings = match cli.load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    tracing::info!("Using contacts API at {}", settings.contacts_url());

    let api = HttpContactApi::from_config(&settings)?;
    let presenter = Presenter::new(
        Arc::new(StdoutTarget),
        StdinEvents::new(),
        HintDelays::from_config(&settings),
    );

    let mut coordinator = Coordinator::new(ContactStore::new(api), presenter);
    println!("Type `help` for a list of commands.");
    coordinator.run().await;

    Ok(())
}
