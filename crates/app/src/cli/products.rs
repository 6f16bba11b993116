use catalog::{
    deliverables::DeliverableId,
    guidelines::GuidelineId,
    prices::PriceId,
    products::{Product, ProductId, ProductStatus},
};
use catalog_app::context::AppContext;
use clap::{Args, Subcommand, ValueEnum};

use super::{mutate, query, table};

#[derive(Debug, Args)]
pub(crate) struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    /// List products, optionally filtered
    List(ListProductsArgs),

    /// Show a single product with its prices, deliverables and guidelines
    Get(ProductArgs),

    /// Delete a product
    Delete(ProductArgs),

    /// Detach a deliverable from a product
    RemoveDeliverable(RemoveDeliverableArgs),

    /// Detach a guideline from a product
    RemoveGuideline(RemoveGuidelineArgs),

    /// Remove a price from a product
    RemovePrice(RemovePriceArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
#[value(rename_all = "SCREAMING_SNAKE_CASE")]
enum StatusFilter {
    Active,
    Inactive,
}

impl From<StatusFilter> for ProductStatus {
    fn from(value: StatusFilter) -> Self {
        match value {
            StatusFilter::Active => ProductStatus::Active,
            StatusFilter::Inactive => ProductStatus::Inactive,
        }
    }
}

#[derive(Debug, Args)]
struct ListProductsArgs {
    /// Case-insensitive match against name and description
    #[arg(long)]
    search: Option<String>,

    /// Only show products with this status
    #[arg(long, value_enum)]
    status: Option<StatusFilter>,
}

#[derive(Debug, Args)]
struct ProductArgs {
    /// Product ID
    id: ProductId,
}

#[derive(Debug, Args)]
struct RemoveDeliverableArgs {
    /// Product ID
    id: ProductId,

    /// Deliverable ID
    deliverable: DeliverableId,
}

#[derive(Debug, Args)]
struct RemoveGuidelineArgs {
    /// Product ID
    id: ProductId,

    /// Guideline ID
    guideline: GuidelineId,
}

#[derive(Debug, Args)]
struct RemovePriceArgs {
    /// Product ID
    id: ProductId,

    /// Price ID
    price: PriceId,
}

pub(crate) async fn run(context: &AppContext, command: ProductsCommand) -> Result<(), String> {
    let notifications = &context.notifications;
    let products = &context.products;

    match command.command {
        ProductsSubcommand::List(args) => {
            let all = query(notifications, products.list()).await?;
            let status = args.status.map(ProductStatus::from);
            let search = args.search.unwrap_or_default();

            let rows = filter(all, &search, status)
                .into_iter()
                .map(|product| {
                    [
                        product.id.to_string(),
                        product.name,
                        product.status.as_str().to_string(),
                        product.category_id.to_string(),
                        product.prices.len().to_string(),
                    ]
                })
                .collect();

            table::print(
                ["ID", "Name", "Status", "Category", "Prices"],
                rows,
                "no products found",
            );

            Ok(())
        }
        ProductsSubcommand::Get(args) => {
            let product = query(notifications, products.get(&args.id)).await?;

            print_product(&product);

            Ok(())
        }
        ProductsSubcommand::Delete(args) => {
            mutate(notifications, products.delete(&args.id), "Produto excluído").await
        }
        ProductsSubcommand::RemoveDeliverable(args) => {
            mutate(
                notifications,
                products.delete_deliverable(&args.id, &args.deliverable),
                "Entregável removido",
            )
            .await
        }
        ProductsSubcommand::RemoveGuideline(args) => {
            let product = mutate(
                notifications,
                products.delete_guideline(&args.id, &args.guideline),
                "Diretriz removida",
            )
            .await?;

            print_product(&product);

            Ok(())
        }
        ProductsSubcommand::RemovePrice(args) => {
            let product = mutate(
                notifications,
                products.delete_price(&args.id, &args.price),
                "Preço removido",
            )
            .await?;

            print_product(&product);

            Ok(())
        }
    }
}

fn filter(products: Vec<Product>, search: &str, status: Option<ProductStatus>) -> Vec<Product> {
    products
        .into_iter()
        .filter(|product| product.matches(search))
        .filter(|product| status.is_none_or(|status| product.status == status))
        .collect()
}

fn print_product(product: &Product) {
    println!("id: {}", product.id);
    println!("name: {}", product.name);
    println!("description: {}", product.description);
    println!("status: {}", product.status.as_str());
    println!("category_id: {}", product.category_id);
    println!("single_item_only: {}", product.single_item_only);
    println!("updated_at: {}", product.updated_at);

    table::print(
        ["Price ID", "Amount", "Currency", "Modifier"],
        product
            .prices
            .iter()
            .map(|price| {
                [
                    price
                        .id
                        .as_ref()
                        .map_or_else(String::new, ToString::to_string),
                    price.amount.to_string(),
                    price.currency_id.to_string(),
                    price
                        .modifier_type_id
                        .as_ref()
                        .map_or_else(String::new, ToString::to_string),
                ]
            })
            .collect(),
        "no prices",
    );

    table::print(
        ["Deliverable ID", "Name"],
        product
            .deliverables
            .iter()
            .map(|deliverable| [deliverable.id.to_string(), deliverable.name.clone()])
            .collect(),
        "no deliverables",
    );

    table::print(
        ["Guideline ID", "Name"],
        product
            .guidelines
            .iter()
            .map(|guideline| [guideline.id.to_string(), guideline.name.clone()])
            .collect(),
        "no guidelines",
    );
}

#[cfg(test)]
mod tests {
    use catalog::{categories::CategoryId, products::ProductType};
    use jiff::Timestamp;

    use super::*;

    fn product(id: &str, name: &str, status: ProductStatus) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: "Descrição".to_string(),
            product_type: ProductType::OneTime,
            status,
            single_item_only: false,
            category_id: CategoryId::new("cat-1"),
            prices: Vec::new(),
            deliverables: Vec::new(),
            guidelines: Vec::new(),
            created_by: "system".to_string(),
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn filters_by_search_and_status() {
        let products = vec![
            product("p-1", "Curso de Rust", ProductStatus::Active),
            product("p-2", "Curso de Go", ProductStatus::Inactive),
            product("p-3", "Mentoria", ProductStatus::Active),
        ];

        let ids: Vec<String> = filter(products, "curso", Some(ProductStatus::Active))
            .into_iter()
            .map(|product| product.id.into_string())
            .collect();

        assert_eq!(ids, ["p-1"]);
    }

    #[test]
    fn empty_filters_keep_everything() {
        let products = vec![
            product("p-1", "Curso", ProductStatus::Active),
            product("p-2", "Mentoria", ProductStatus::Inactive),
        ];

        assert_eq!(filter(products, "", None).len(), 2);
    }
}
