use catalog::deliverables::DeliverableId;
use catalog_app::context::AppContext;
use clap::{Args, Subcommand};

use super::{mutate, query, table};

#[derive(Debug, Args)]
pub(crate) struct DeliverablesCommand {
    #[command(subcommand)]
    command: DeliverablesSubcommand,
}

#[derive(Debug, Subcommand)]
enum DeliverablesSubcommand {
    /// List deliverables
    List,

    /// Delete a deliverable
    Delete(DeleteDeliverableArgs),
}

#[derive(Debug, Args)]
struct DeleteDeliverableArgs {
    /// Deliverable ID
    id: DeliverableId,
}

pub(crate) async fn run(context: &AppContext, command: DeliverablesCommand) -> Result<(), String> {
    match command.command {
        DeliverablesSubcommand::List => {
            let deliverables = query(&context.notifications, context.deliverables.list()).await?;

            table::print(
                ["ID", "Name", "Product", "Updated"],
                deliverables
                    .into_iter()
                    .map(|deliverable| {
                        [
                            deliverable.id.to_string(),
                            deliverable.name,
                            deliverable.product_id.to_string(),
                            deliverable.updated_at.to_string(),
                        ]
                    })
                    .collect(),
                "no deliverables found",
            );

            Ok(())
        }
        DeliverablesSubcommand::Delete(args) => {
            mutate(
                &context.notifications,
                context.deliverables.delete(&args.id),
                "Entregável excluído",
            )
            .await
        }
    }
}
