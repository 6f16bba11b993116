use catalog::currencies::NewCurrency;
use catalog_app::context::AppContext;
use clap::{Args, Subcommand};

use super::{mutate, query, table};

#[derive(Debug, Args)]
pub(crate) struct CurrenciesCommand {
    #[command(subcommand)]
    command: CurrenciesSubcommand,
}

#[derive(Debug, Subcommand)]
enum CurrenciesSubcommand {
    /// List currencies
    List,

    /// Register a currency
    Create(CreateCurrencyArgs),
}

#[derive(Debug, Args)]
struct CreateCurrencyArgs {
    /// ISO 4217 code, e.g. BRL
    #[arg(long)]
    code: String,

    /// Display name
    #[arg(long)]
    name: String,

    /// Symbol, e.g. R$
    #[arg(long)]
    symbol: String,
}

pub(crate) async fn run(context: &AppContext, command: CurrenciesCommand) -> Result<(), String> {
    match command.command {
        CurrenciesSubcommand::List => {
            let currencies = query(&context.notifications, context.currencies.list()).await?;

            table::print(
                ["ID", "Code", "Name", "Symbol"],
                currencies
                    .into_iter()
                    .map(|currency| {
                        [
                            currency.id.to_string(),
                            currency.code,
                            currency.name,
                            currency.symbol,
                        ]
                    })
                    .collect(),
                "no currencies found",
            );

            Ok(())
        }
        CurrenciesSubcommand::Create(args) => {
            let currency = mutate(
                &context.notifications,
                context.currencies.create(NewCurrency {
                    code: args.code,
                    name: args.name,
                    symbol: args.symbol,
                }),
                "Moeda criada",
            )
            .await?;

            println!("currency_id: {}", currency.id);

            Ok(())
        }
    }
}
