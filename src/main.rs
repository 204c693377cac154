use clap::Parser;
use storefront::config::cli::Command;
use storefront::core::Notifier;
use storefront::utils::{logger, validation::Validate};
use storefront::{list_products, CartManager, CartSummary, CliConfig, HttpCatalog, LocalStorage};

/// Prints cart notifications for the terminal user.
struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn error(&self, message: &str) {
        eprintln!("❌ {}", message);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入配置 (預設值 < 設定檔 < 命令列)
    let settings = match cli.settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if settings.json_logs {
        logger::init_json_logger(settings.verbose);
    } else {
        logger::init_cli_logger(settings.verbose);
    }
    tracing::debug!("Settings: {:?}", settings);

    if let Err(e) = settings.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let catalog = HttpCatalog::from_config(&settings)?;
    let storage = LocalStorage::new(&settings.storage_path);
    let mut manager = CartManager::load(catalog, storage, settings.cart_key.as_str())
        .await
        .with_notifier(StderrNotifier);

    let result = match cli.command {
        Command::Products => {
            match list_products(manager.catalog(), manager.cart()).await {
                Ok(products) => {
                    for listed in products {
                        println!(
                            "#{:<4} {:<48} {:>10.2}  in cart: {}",
                            listed.product.id,
                            listed.product.title,
                            listed.product.price,
                            listed.in_cart
                        );
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to load products: {}", e);
                    eprintln!("❌ {}", e.user_friendly_message());
                    eprintln!("💡 {}", e.recovery_suggestion());
                    std::process::exit(2);
                }
            }
            return Ok(());
        }
        Command::Cart => {
            print_summary(&manager.summary());
            return Ok(());
        }
        Command::Add { product_id } => manager.add_product(product_id).await,
        Command::Remove { product_id } => manager.remove_product(product_id).await,
        Command::Update { product_id, amount } => {
            manager.update_product_amount(product_id, amount).await
        }
        Command::Increment { product_id } => manager.increment_product(product_id).await,
        Command::Decrement { product_id } => manager.decrement_product(product_id).await,
    };

    // 失敗訊息已由 notifier 輸出
    if result.is_err() {
        std::process::exit(2);
    }

    print_summary(&manager.summary());
    Ok(())
}

fn print_summary(summary: &CartSummary) {
    if summary.lines.is_empty() {
        println!("🛒 Cart is empty");
        return;
    }

    for line in &summary.lines {
        println!(
            "#{:<4} {:<48} {:>3} x {:>10.2} = {:>10.2}",
            line.id, line.title, line.amount, line.price, line.subtotal
        );
    }
    println!("{} item(s), total {:.2}", summary.total_items, summary.total);
}
