use clap::{Args, Subcommand, ValueEnum};
use skyhook_core::{RegionId, TypeId};
use skyhook_esi::api::market::OrderType;

use crate::cli::common::public_client;

/// The Forge, home of Jita.
const DEFAULT_REGION_ID: i32 = 10000002;

#[derive(Debug, Args)]
pub(crate) struct MarketCommand {
    #[command(subcommand)]
    subcmd: MarketSubcommand,
}

#[derive(Debug, Subcommand)]
enum MarketSubcommand {
    /// Open orders in a region.
    Orders(OrdersCommand),

    /// Daily history for one item type.
    History(HistoryCommand),

    /// Average and adjusted prices for every type.
    Prices(PricesCommand),
}

impl MarketCommand {
    pub(crate) async fn run(&self) -> anyhow::Result<()> {
        match &self.subcmd {
            MarketSubcommand::Orders(cmd) => cmd.run().await,
            MarketSubcommand::History(cmd) => cmd.run().await,
            MarketSubcommand::Prices(cmd) => cmd.run().await,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OrderSide {
    Buy,
    Sell,
    All,
}

impl From<OrderSide> for OrderType {
    fn from(side: OrderSide) -> Self {
        match side {
            OrderSide::Buy => Self::Buy,
            OrderSide::Sell => Self::Sell,
            OrderSide::All => Self::All,
        }
    }
}

#[derive(Debug, Args)]
struct OrdersCommand {
    #[arg(long, default_value_t = DEFAULT_REGION_ID)]
    region_id: i32,

    #[arg(long)]
    type_id: Option<i32>,

    #[arg(long, value_enum, default_value_t = OrderSide::All)]
    side: OrderSide,
}

impl OrdersCommand {
    async fn run(&self) -> anyhow::Result<()> {
        let client = public_client()?;
        let orders = client
            .get_market_orders(
                RegionId(self.region_id),
                self.side.into(),
                self.type_id.map(TypeId),
            )
            .await?;
        log::info!("fetched {} orders in region {}", orders.len(), self.region_id);

        for order in &orders {
            println!(
                "{}\t{}\ttype {}\t{:.2}\t{}/{}\t@ {}",
                order.order_id,
                if order.is_buy_order { "buy" } else { "sell" },
                order.type_id,
                order.price,
                order.volume_remain,
                order.volume_total,
                order.location_id
            );
        }

        Ok(())
    }
}

#[derive(Debug, Args)]
struct HistoryCommand {
    type_id: i32,

    #[arg(long, default_value_t = DEFAULT_REGION_ID)]
    region_id: i32,

    /// Only print the most recent days.
    #[arg(long)]
    days: Option<usize>,
}

impl HistoryCommand {
    async fn run(&self) -> anyhow::Result<()> {
        let client = public_client()?;
        let history = client
            .get_market_history(RegionId(self.region_id), TypeId(self.type_id))
            .await?;

        let skip = self
            .days
            .map(|days| history.len().saturating_sub(days))
            .unwrap_or(0);
        for day in history.iter().skip(skip) {
            println!(
                "{}\tavg {:.2}\tlow {:.2}\thigh {:.2}\tvolume {}\torders {}",
                day.date, day.average, day.lowest, day.highest, day.volume, day.order_count
            );
        }

        Ok(())
    }
}

#[derive(Debug, Args)]
struct PricesCommand {
    /// Limit output to these type ids.
    #[arg(long, value_delimiter = ',')]
    type_id: Vec<i32>,
}

impl PricesCommand {
    async fn run(&self) -> anyhow::Result<()> {
        let client = public_client()?;
        let prices = client.get_market_prices().await?;

        for price in prices
            .iter()
            .filter(|price| self.type_id.is_empty() || self.type_id.contains(&price.type_id.0))
        {
            println!(
                "type {}\taverage {}\tadjusted {}",
                price.type_id,
                format_price(price.average_price),
                format_price(price.adjusted_price)
            );
        }

        Ok(())
    }
}

fn format_price(price: Option<f64>) -> String {
    price
        .map(|value| format!("{value:.2}"))
        .unwrap_or_else(|| "<none>".to_owned())
}
