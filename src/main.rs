use clap::Parser;
use sailbridge::core::{ConfigProvider, Pipeline};
use sailbridge::utils::error::BridgeError;
use sailbridge::utils::{logger, validation::Validate};
use sailbridge::{BridgeEngine, BridgePipeline, CliConfig, LocalStorage, TomlConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 互動執行用精簡日誌,設定檔(排程)模式輸出 JSON
    if cli.config.is_some() {
        logger::init_batch_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting sailbridge");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match cli.config.clone() {
        Some(config_path) => {
            tracing::info!("📁 Loading configuration from: {}", config_path);

            let config = match TomlConfig::from_file(&config_path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", config_path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            };

            validate_or_exit(&config);
            display_config_summary(&config, &cli);

            let monitor_enabled = cli.monitor || config.monitoring_enabled();
            run(config, monitor_enabled, cli.dry_run)
        }
        None => {
            validate_or_exit(&cli);
            let monitor_enabled = cli.monitor;
            let dry_run = cli.dry_run;
            run(cli, monitor_enabled, dry_run)
        }
    }
}

fn run<C: ConfigProvider>(
    config: C,
    monitor_enabled: bool,
    dry_run: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let source = config.source_path().to_string();
    let destination = config.output_path().to_string();

    let storage = LocalStorage::new();
    let pipeline = BridgePipeline::new(storage, config);

    if dry_run {
        tracing::info!("🔍 DRY RUN MODE - no file will be written");
        match dry_run_analysis(&pipeline) {
            Ok((to_export, skipped)) => {
                println!("🔍 Dry Run Analysis:");
                println!("  Source: {}", source);
                println!("  Output (not written): {}", destination);
                println!("  Competitors to export: {}", to_export);
                println!("  Placeholder slots skipped: {}", skipped);
                println!("✅ Dry run complete. No files were written.");
            }
            Err(e) => exit_with_error(&e),
        }
        return Ok(());
    }

    let engine = BridgeEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run() {
        Ok(report) => {
            tracing::info!("✅ Conversion completed successfully!");
            println!(
                "✓ Successfully converted {} to {}",
                source, report.output_path
            );
            println!("  Exported {} competitors", report.rows_written);
        }
        Err(e) => exit_with_error(&e),
    }

    Ok(())
}

fn dry_run_analysis<P: Pipeline>(pipeline: &P) -> Result<(usize, usize), BridgeError> {
    let records = pipeline.extract()?;
    let result = pipeline.transform(records)?;
    Ok((result.rows.len(), result.skipped))
}

fn validate_or_exit<V: Validate>(config: &V) {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }
}

fn display_config_summary(config: &TomlConfig, cli: &CliConfig) {
    println!("📋 Configuration Summary:");
    println!(
        "  Bridge: {} v{}",
        config.bridge.name, config.bridge.version
    );
    println!("  Source: {}", config.source_path());
    println!("  Output: {}", config.output_path());
    println!("  Monitoring: {}", config.monitoring_enabled());

    if cli.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn exit_with_error(e: &BridgeError) -> ! {
    // 記錄詳細錯誤信息
    tracing::error!(
        "❌ Conversion failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    // 輸出用戶友好的錯誤信息
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        sailbridge::utils::error::ErrorSeverity::Low => 0, // 警告，但成功
        sailbridge::utils::error::ErrorSeverity::Medium => 2, // 來源檔不存在
        sailbridge::utils::error::ErrorSeverity::High => 1, // 匯出內容或設定問題
        sailbridge::utils::error::ErrorSeverity::Critical => 3, // 寫檔或系統錯誤
    };

    std::process::exit(exit_code);
}
