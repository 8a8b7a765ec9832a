//! Order API demo
//!
//! Loads a route table, decorates a couple of order documents and prints the
//! resulting HAL JSON. Run with `RUST_LOG=hal_links=trace` to see every link
//! being added.

use anyhow::Result;
use hal_links::prelude::*;
use tracing_subscriber::EnvFilter;

const ROUTES: &str = r#"
base_url: https://api.example.com
routes:
  - name: list-orders
    path: /orders
    method: GET
  - name: get-order
    path: /orders/{id}
    method: GET
  - name: cancel-order
    path: /orders/{id}/cancel
    method: POST
  - name: get-customer
    path: /customers/{customer_id}
    method: GET
  - name: find-orders
    path: /orders{?status,page}
    templated: true
"#;

#[derive(Debug, Serialize)]
struct Customer {
    id: String,
    name: String,
}

#[derive(Debug, Serialize)]
struct Order {
    id: u32,
    status: String,
    total: f64,
    customer: HalDocument<Customer>,
}

fn load_order(id: u32, status: &str) -> HalDocument<Order> {
    HalDocument::new(Order {
        id,
        status: status.to_string(),
        total: 42.5,
        customer: HalDocument::new(Customer {
            id: format!("c-{}", id * 10),
            name: "Ada Lovelace".to_string(),
        }),
    })
}

/// What a `GET /orders/{id}` handler would do before serializing its response
fn render_order(table: &RouteTable, id: u32, status: &str) -> Result<String> {
    let service = table.for_request("get-order", Some(LinkRequest::new([("id", id)])?))?;
    let mut order = load_order(id, status);

    service
        .add_self(&mut order)?
        .add_link("collection", service.get_link_for("list-orders", None)?)?
        .add_link("search", service.get_link_for("find-orders", None)?)?
        .add_links_per_condition(
            |o| o.status == "open",
            |builder| {
                let cancel = builder
                    .service()
                    .get_link_for("cancel-order", builder.service().args())?;
                builder.add_link("cancel", cancel)?;
                Ok(())
            },
        )?
        .add_links_to_child(|order, service| {
            let args = LinkRequest::new([("customer_id", order.customer.id.clone())])?;
            let link = service.get_link_for("get-customer", Some(&args))?;
            service.prepare(&mut order.customer).add_link(SELF_REL, link)?;
            Ok(())
        })?;

    Ok(serde_json::to_string_pretty(&order)?)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hal_links=debug")),
        )
        .init();

    let table = RouteTable::from_yaml_str(ROUTES)?;
    tracing::info!(routes = table.route_names().count(), "Route table loaded");

    for (id, status) in [(7, "open"), (8, "shipped")] {
        println!("{}", render_order(&table, id, status)?);
    }

    Ok(())
}
