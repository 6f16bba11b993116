use catalog::coupons::{CouponId, NewCoupon, UsageType};
use catalog_app::context::AppContext;
use clap::{Args, Subcommand, ValueEnum};
use rust_decimal::Decimal;

use super::{mutate, query, table};

#[derive(Debug, Args)]
pub(crate) struct CouponsCommand {
    #[command(subcommand)]
    command: CouponsSubcommand,
}

#[derive(Debug, Subcommand)]
enum CouponsSubcommand {
    /// List coupons
    List,

    /// Create a percentage discount coupon
    Create(CreateCouponArgs),

    /// Delete a coupon
    Delete(DeleteCouponArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
#[value(rename_all = "SCREAMING_SNAKE_CASE")]
enum UsageTypeArg {
    OneTime,
    Recurring,
}

impl From<UsageTypeArg> for UsageType {
    fn from(value: UsageTypeArg) -> Self {
        match value {
            UsageTypeArg::OneTime => UsageType::OneTime,
            UsageTypeArg::Recurring => UsageType::Recurring,
        }
    }
}

#[derive(Debug, Args)]
struct CreateCouponArgs {
    /// Code customers type at checkout
    #[arg(long)]
    code: String,

    /// Discount percentage
    #[arg(long)]
    discount_value: Decimal,

    /// Minimum order amount for the coupon to apply
    #[arg(long)]
    min_purchase_amount: Option<Decimal>,

    #[arg(long, value_enum, default_value = "ONE_TIME")]
    usage_type: UsageTypeArg,
}

#[derive(Debug, Args)]
struct DeleteCouponArgs {
    /// Coupon ID
    id: CouponId,
}

pub(crate) async fn run(context: &AppContext, command: CouponsCommand) -> Result<(), String> {
    match command.command {
        CouponsSubcommand::List => {
            let coupons = query(&context.notifications, context.coupons.list()).await?;

            table::print(
                ["ID", "Code", "Discount", "Min. purchase", "Used", "Status"],
                coupons
                    .into_iter()
                    .map(|coupon| {
                        [
                            coupon.id.to_string(),
                            coupon.code,
                            format!("{} {}", coupon.discount_value, coupon.discount_type),
                            coupon
                                .min_purchase_amount
                                .map_or_else(String::new, |amount| amount.to_string()),
                            coupon.used_count.to_string(),
                            coupon.status,
                        ]
                    })
                    .collect(),
                "no coupons found",
            );

            Ok(())
        }
        CouponsSubcommand::Create(args) => {
            let coupon = mutate(
                &context.notifications,
                context.coupons.create(NewCoupon {
                    code: args.code,
                    discount_type: None,
                    discount_value: args.discount_value,
                    min_purchase_amount: args.min_purchase_amount,
                    status: "ACTIVE".to_string(),
                    usage_type: args.usage_type.into(),
                }),
                "Cupom criado",
            )
            .await?;

            println!("coupon_id: {}", coupon.id);

            Ok(())
        }
        CouponsSubcommand::Delete(args) => {
            mutate(
                &context.notifications,
                context.coupons.delete(&args.id),
                "Cupom excluído",
            )
            .await
        }
    }
}
