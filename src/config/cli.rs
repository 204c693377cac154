use crate::core::ProductId;
use clap::Subcommand;

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List the catalog with the amount of each product in the cart
    Products,
    /// Show the cart with subtotals and total
    Cart,
    /// Add one unit of a product
    Add { product_id: ProductId },
    /// Remove a product line from the cart
    Remove { product_id: ProductId },
    /// Set the amount of a product already in the cart
    Update {
        product_id: ProductId,
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
    /// Increase the amount of a product by one
    Increment { product_id: ProductId },
    /// Decrease the amount of a product by one (never below one)
    Decrement { product_id: ProductId },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use clap::Parser;

    #[test]
    fn test_parse_update_with_negative_amount() {
        let cli = CliConfig::parse_from(["storefront", "update", "3", "-1"]);
        assert_eq!(
            cli.command,
            Command::Update {
                product_id: 3,
                amount: -1
            }
        );
    }

    #[test]
    fn test_parse_add() {
        let cli = CliConfig::parse_from(["storefront", "--verbose", "add", "7"]);
        assert!(cli.verbose);
        assert_eq!(cli.command, Command::Add { product_id: 7 });
    }
}
