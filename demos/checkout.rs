use log::{info, Level};
use outcome::prelude::*;
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct Order {
    sku: String,
    quantity: u32,
}

fn parse(line: &str) -> TypedOutcome<Order> {
    let mut parts = line.split_whitespace();

    parts
        .next()
        .to_outcome_or(format!("empty order line {:?}", line))
        .and_then(|sku| {
            parts
                .next()
                .and_then(|q| q.parse().ok())
                .to_outcome_or(format!("missing quantity for {}", sku))
                .map(|quantity| Order {
                    sku: sku.to_string(),
                    quantity,
                })
        })
}

fn price(catalog: &HashMap<&str, u32>, order: &Order) -> TypedOutcome<u32> {
    catalog
        .get(order.sku.as_str())
        .map(|unit| unit * order.quantity)
        .to_outcome_or(format!("{} is not in the catalog", order.sku))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let catalog = HashMap::from([("apple", 30), ("pear", 45)]);
    let observer = LogObserver::new().failure_level(Level::Error);

    let mut total = 0;
    for line in ["apple 2", "pear", "plum 1", "pear 3"] {
        total += parse(line)
            .tap(|order| info!("parsed {:?}", order))
            .and_then(|order| price(&catalog, &order))
            .otherwise(|d| format!("line {:?}: {}", line, d))
            .observe("checkout", &observer)
            .value_or_default();
    }

    (total > 0)
        .to_outcome_or("nothing could be priced")
        .on_success(|| info!("total: {}", total))
        .into_result()
}
