use catalog::{modifiers::ModifierTypeKey, pricing::format_amount};
use catalog_app::{context::AppContext, domain::get_adjusted_price};
use clap::{Args, Subcommand};
use rust_decimal::Decimal;

#[derive(Debug, Args)]
pub(crate) struct PricesCommand {
    #[command(subcommand)]
    command: PricesSubcommand,
}

#[derive(Debug, Subcommand)]
enum PricesSubcommand {
    /// Apply a modifier type to a base amount
    Adjust(AdjustPriceArgs),
}

#[derive(Debug, Args)]
struct AdjustPriceArgs {
    /// Base amount
    #[arg(long)]
    amount: Decimal,

    /// Modifier key to apply
    #[arg(long)]
    modifier: Option<ModifierTypeKey>,

    /// ISO 4217 currency code used for display
    #[arg(long, default_value = "BRL")]
    currency: String,
}

pub(crate) async fn run(context: &AppContext, command: PricesCommand) -> Result<(), String> {
    match command.command {
        PricesSubcommand::Adjust(args) => {
            let adjusted =
                get_adjusted_price(&context.modifier_types, args.amount, args.modifier.as_ref())
                    .await;

            println!("base: {}", format_amount(args.amount, &args.currency));
            println!("adjusted: {}", format_amount(adjusted, &args.currency));

            Ok(())
        }
    }
}
