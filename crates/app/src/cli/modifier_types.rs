use catalog::modifiers::{AdjustmentKind, ModifierType, ModifierTypeKey};
use catalog_app::context::AppContext;
use clap::{Args, Subcommand};

use super::{mutate, query, table};

#[derive(Debug, Args)]
pub(crate) struct ModifierTypesCommand {
    #[command(subcommand)]
    command: ModifierTypesSubcommand,
}

#[derive(Debug, Subcommand)]
enum ModifierTypesSubcommand {
    /// List modifier types
    List,

    /// Show a modifier type
    Get(ModifierTypeArgs),

    /// Delete a modifier type
    Delete(ModifierTypeArgs),
}

#[derive(Debug, Args)]
struct ModifierTypeArgs {
    /// Modifier key
    key: ModifierTypeKey,
}

pub(crate) async fn run(context: &AppContext, command: ModifierTypesCommand) -> Result<(), String> {
    let notifications = &context.notifications;
    let modifier_types = &context.modifier_types;

    match command.command {
        ModifierTypesSubcommand::List => {
            let modifiers = query(notifications, modifier_types.list()).await?;

            table::print(
                ["Key", "Name", "Adjustment"],
                modifiers
                    .into_iter()
                    .map(|modifier| {
                        let rule = adjustment(&modifier);

                        [modifier.key.into_string(), modifier.display_name, rule]
                    })
                    .collect(),
                "no modifier types found",
            );

            Ok(())
        }
        ModifierTypesSubcommand::Get(args) => {
            let modifier = query(notifications, modifier_types.get(&args.key)).await?;

            println!("key: {}", modifier.key);
            println!("display_name: {}", modifier.display_name);
            println!("description: {}", modifier.description);
            println!("adjustment: {}", adjustment(&modifier));

            if let Some(restrictions) = &modifier.value_restrictions {
                println!("max_values: {}", restrictions.max_values);
            }

            Ok(())
        }
        ModifierTypesSubcommand::Delete(args) => {
            mutate(
                notifications,
                modifier_types.delete(&args.key),
                "Tipo de modificador excluído",
            )
            .await
        }
    }
}

fn adjustment(modifier: &ModifierType) -> String {
    match &modifier.price_adjustment {
        Some(adjustment) => match adjustment.kind {
            AdjustmentKind::Multiplier => format!("x {}", adjustment.value),
            AdjustmentKind::FixedAmount => format!("+ {}", adjustment.value),
            AdjustmentKind::Unknown => format!("? {}", adjustment.value),
        },
        None => "none".to_string(),
    }
}
