//! Integration tests for loading route tables from YAML

use hal_links::prelude::*;
use std::io::Write;

const ORDERS_YAML: &str = r#"
base_url: https://shop.example.com/api/
routes:
  - name: get-order
    path: /orders/{id}
    method: GET
  - name: order-items
    path: /orders/{id}/items
  - name: search
    path: /orders{?q}
    templated: true
"#;

const BILLING_YAML: &str = r#"
routes:
  - name: get-invoice
    path: /invoices/{invoice_id}
    method: GET
  - name: order-items
    path: /v2/orders/{id}/items
    method: GET
"#;

#[test]
fn test_load_from_yaml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(ORDERS_YAML.as_bytes()).unwrap();

    let table = RouteTable::from_yaml_file(file.path()).unwrap();
    let args = LinkRequest::new([("id", 3)]).unwrap();

    let link = table.resolve("get-order", Some(&args)).unwrap();
    assert_eq!(link.href(), "https://shop.example.com/api/orders/3");
    assert_eq!(link.method(), Some("GET"));

    let search = table.resolve("search", None).unwrap();
    assert_eq!(search.href(), "https://shop.example.com/api/orders{?q}");
    assert_eq!(search.is_templated(), Some(true));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = RouteTable::from_yaml_file(dir.path().join("routes.yaml")).unwrap_err();

    assert!(matches!(err, HypermediaError::Io(_)));
}

#[test]
fn test_merged_configs_resolve_across_modules() {
    let orders = RoutesConfig::from_yaml_str(ORDERS_YAML).unwrap();
    let billing = RoutesConfig::from_yaml_str(BILLING_YAML).unwrap();

    let table = RouteTable::new(RoutesConfig::merge(vec![orders, billing])).unwrap();
    let args = LinkRequest::new([("id", 3)]).unwrap();

    assert_eq!(table.route_names().count(), 4);
    assert_eq!(
        table.resolve("order-items", Some(&args)).unwrap().href(),
        "https://shop.example.com/api/v2/orders/3/items"
    );

    let invoice = LinkRequest::new([("invoice_id", "inv-9")]).unwrap();
    assert_eq!(
        table.resolve("get-invoice", Some(&invoice)).unwrap().href(),
        "https://shop.example.com/api/invoices/inv-9"
    );
}

#[test]
fn test_request_links_with_serializable_args() {
    #[derive(Serialize)]
    struct OrderRoute {
        id: u64,
    }

    let table = RouteTable::from_yaml_str(ORDERS_YAML).unwrap();
    let args = LinkRequest::from_serializable(&OrderRoute { id: 11 }).unwrap();
    let service = table.for_request("get-order", Some(args)).unwrap();

    let mut doc = HalDocument::new(serde_json::json!({ "id": 11 }));
    service
        .add_self(&mut doc)
        .unwrap()
        .add_links_to_child(|doc, service| {
            let items = service.get_link_for("order-items", service.args())?;
            doc.add_link("items", items);
            Ok(())
        })
        .unwrap();

    assert_eq!(doc.links()["self"].href(), "https://shop.example.com/api/orders/11");
    assert_eq!(
        doc.links()["items"].href(),
        "https://shop.example.com/api/orders/11/items"
    );
}
