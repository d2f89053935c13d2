use clap::Parser;
use paint_quote::config::{CliConfig, Command, Settings};
use paint_quote::domain::model::{PriceBreakdown, QuotationRequest};
use paint_quote::domain::ports::ConfigProvider;
use paint_quote::utils::{logger, validation};
use paint_quote::{CalculationStore, LocalStorage, PriceEngine, SavedCalculation};
use rust_decimal_macros::dec;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    let settings = match Settings::resolve(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if cli.verbose {
        tracing::debug!("Resolved settings: {:?}", settings);
    }

    if let Err(e) = run(&cli, &settings).await {
        tracing::error!("Command failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn open_store<C: ConfigProvider>(config: &C) -> CalculationStore<LocalStorage> {
    let storage = LocalStorage::new(config.data_dir().to_string());
    CalculationStore::new(storage, config.collection())
}

async fn run(cli: &CliConfig, settings: &Settings) -> paint_quote::Result<()> {
    let store = open_store(settings);
    let engine = PriceEngine::new(settings.rates.clone());

    match &cli.command {
        Command::Quote(args) => {
            let request = args.to_request()?;
            let breakdown = engine.compute(&request);

            if let Some(title) = &request.title {
                println!("{}", title);
            }
            render_quote(settings, &request, &breakdown);

            if args.save {
                let calc = SavedCalculation::new(request, breakdown);
                let index = store.append(calc).await?;
                println!();
                println!("✅ Saved as calculation {}", index + 1);
            }
        }
        Command::List => {
            let records = store.list().await?;

            if records.is_empty() {
                println!("No saved calculations yet.");
            }

            for (i, calc) in records.iter().enumerate() {
                println!(
                    "{}. {} ({}{:.2})",
                    i + 1,
                    calc.display_title(i),
                    settings.currency,
                    calc.breakdown.total_price
                );
            }
        }
        Command::Show { position } => {
            validation::validate_positive_number("position", *position, 1)?;
            let index = *position - 1;
            let calc = store.get(index).await?;

            println!("{}", calc.display_title(index));
            println!("Saved at: {}", calc.saved_at.format("%Y-%m-%d %H:%M UTC"));
            render_quote(settings, &calc.request, &calc.breakdown);
        }
    }

    Ok(())
}

fn render_quote(settings: &Settings, request: &QuotationRequest, breakdown: &PriceBreakdown) {
    let vat_percent = (settings.rates.vat_rate * dec!(100)).normalize();

    println!(
        "Rooms: {}  Finishing: {}  Ceiling: {}  Shades: {}",
        request.rooms,
        request.finishing_level,
        if request.ceiling { "yes" } else { "no" },
        request.shades
    );

    if !request.custom_items.is_empty() {
        println!("Custom items:");
        for item in &request.custom_items {
            println!("  {}: {}{:.2}", item.title, settings.currency, item.price);
        }
        println!(
            "Custom items total: {}{:.2}",
            settings.currency,
            request.custom_items_total()
        );
    }

    println!(
        "Price without VAT: {}{:.2}",
        settings.currency, breakdown.price_before_vat
    );
    println!(
        "VAT ({}%): {}{:.2}",
        vat_percent, settings.currency, breakdown.vat_amount
    );
    println!(
        "Total price: {}{:.2}",
        settings.currency, breakdown.total_price
    );
}
