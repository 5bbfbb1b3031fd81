use clap::Parser;
use server_settings::utils::error::{ErrorSeverity, SettingsError};
use server_settings::utils::{logger, validation::Validate};
use server_settings::{CliConfig, Port, SettingsDoc};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_logger(cli.verbose);

    tracing::info!("Loading server settings from {}", cli.settings_file);
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let mut doc = match SettingsDoc::from_file(&cli.settings_file) {
        Ok(doc) => doc,
        Err(e) => fail(&e),
    };

    if let Some(port) = cli.port.clone() {
        tracing::debug!("Overriding port from command line: {}", port);
        doc.port = Some(Port::Text(port));
    }

    if let Err(e) = doc.validate() {
        tracing::error!("❌ Settings validation failed: {}", e);
        fail(&e);
    }

    let port = match doc.resolved_port() {
        Ok(port) => port,
        Err(e) => fail(&e),
    };

    tracing::info!("✅ Settings document is valid");
    if doc.port.is_none() {
        tracing::info!("📡 Port: {} (default, none configured)", port);
    } else {
        tracing::info!("📡 Port: {}", port);
    }

    let symbol_count: usize = doc.imports.values().map(Vec::len).sum();
    tracing::info!(
        "📦 Import paths: {} ({} symbols)",
        doc.imports.len(),
        symbol_count
    );
    for (path, symbols) in &doc.imports {
        tracing::info!("  {}: [{}]", path, symbols.join(", "));
    }

    if !doc.extra.is_empty() {
        let mut keys: Vec<&str> = doc.extra.keys().map(String::as_str).collect();
        keys.sort_unstable();
        tracing::info!("🔧 Extra fields: {}", keys.join(", "));
    }

    println!(
        "✅ Settings OK: port {}, {} import paths, {} symbols",
        port,
        doc.imports.len(),
        symbol_count
    );

    Ok(())
}

fn fail(e: &SettingsError) -> ! {
    tracing::error!("❌ {} (Severity: {:?})", e, e.severity());
    eprintln!("❌ {}", e);
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
