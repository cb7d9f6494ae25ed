use clap::Parser;
use tailor_finder::core::render;
use tailor_finder::domain::model::SPECIALTY_OPTIONS;
use tailor_finder::utils::{logger, validation::Validate};
use tailor_finder::{
    CliConfig, FinderEngine, FinderError, FinderPipeline, LocalStorage, PriceTier, SortKey,
};

fn exit_with(e: &FinderError) -> ! {
    tracing::error!(
        "❌ Tailor search failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.severity().exit_code());
}

fn print_options() {
    println!("Price ranges:");
    for tier in PriceTier::ALL {
        println!("  {:<10} {}", tier.as_str(), tier.label());
    }
    println!("Specialties:");
    for specialty in SPECIALTY_OPTIONS {
        println!("  {}", specialty);
    }
    println!("Sort by:");
    for key in SortKey::ALL {
        println!("  {:<10} {}", key.as_str(), key.label());
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    if cli.list_options {
        print_options();
        return Ok(());
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }

    let storage = LocalStorage::new(".".to_string());
    let pipeline = FinderPipeline::new(storage, config);

    // 單筆查詢：對應 /tailors/:id
    if let Some(id) = &cli.id {
        let catalog = match pipeline.load_catalog().await {
            Ok(catalog) => catalog,
            Err(e) => exit_with(&e),
        };
        match catalog.get(id) {
            Ok(record) => print!("{}", render::render_record(record)),
            Err(e) => exit_with(&e),
        }
        return Ok(());
    }

    let engine = FinderEngine::new(pipeline);
    match engine.run().await {
        Ok(summary) => {
            tracing::info!(
                "✅ {} of {} tailors shown",
                summary.matched,
                summary.catalog_size
            );
            if summary.destination != "stdout" {
                println!("✅ {}", summary.summary);
                println!("📁 Output saved to: {}", summary.destination);
            }
        }
        Err(e) => exit_with(&e),
    }

    Ok(())
}
