use minidd::domain::ports::ConfigProvider;
use minidd::utils::logger;
use minidd::{copy_files, plan_copy, resolve_params, CliConfig, DdError, LayeredConfig, TomlConfig};

fn main() {
    let config = CliConfig::from_env_args();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::debug!("CLI config: {:?}", config);

    let file_config = match &config.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path);
            match TomlConfig::from_file(path) {
                Ok(file_config) => Some(file_config),
                Err(e) => fail(e),
            }
        }
        None => None,
    };

    let layered = LayeredConfig::new(
        &config,
        file_config.as_ref().map(|c| c as &dyn ConfigProvider),
    );
    let params = match resolve_params(&layered) {
        Ok(params) => params,
        Err(e) => fail(e),
    };
    tracing::debug!("Resolved copy: {}", params);

    if config.dry_run {
        tracing::info!("DRY RUN MODE - no file will be written");
        match plan_copy(&params) {
            Ok(plan) => {
                println!("Copy plan: {}", plan.params);
                println!("Source size: {} bytes", plan.source_len);
                println!("Bytes to copy: {}", plan.bytes_to_copy);
            }
            Err(e) => fail(e),
        }
        return;
    }

    match copy_files(&params) {
        Ok(written) => {
            tracing::info!("Copied {} bytes: {}", written, params);
            println!("Copied bytes: {}", written);
        }
        Err(e) => fail(e),
    }
}

fn fail(e: DdError) -> ! {
    tracing::debug!(
        "Run aborted: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::debug!("Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("{}", e.user_friendly_message());
    std::process::exit(e.severity().exit_code());
}
