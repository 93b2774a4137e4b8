//! Database schema and operations

use chrono::{SecondsFormat, Utc};
use rusqlite::{Connection, OptionalExtension, Row};
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::{
    CalculationResults, CalculatorInputs, Category, NewOrder, NewProduct, Order, OrderListing,
    OrderStatus, Product, ProductStatus, Quote,
};
use crate::slug::slugify;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Initialize the database schema
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        -- Saved estimates; inputs and results are JSON snapshots
        CREATE TABLE IF NOT EXISTS quotes (
            id TEXT PRIMARY KEY,
            created_at TEXT NOT NULL,
            owner_id TEXT NOT NULL,
            client_name TEXT,
            piece_name TEXT,
            inputs_data TEXT NOT NULL,
            results_data TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS categories (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            slug TEXT NOT NULL UNIQUE,
            description TEXT,
            created_at TEXT NOT NULL
        );

        -- Storefront catalog; images is a JSON array of URLs
        CREATE TABLE IF NOT EXISTS products (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT,
            price REAL NOT NULL,
            quantity INTEGER NOT NULL DEFAULT 0,
            status TEXT NOT NULL DEFAULT 'active',
            images TEXT NOT NULL DEFAULT '[]',
            category_id TEXT REFERENCES categories(id),
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS orders (
            id TEXT PRIMARY KEY,
            customer_name TEXT NOT NULL,
            customer_phone TEXT NOT NULL,
            product_id TEXT REFERENCES products(id) ON DELETE SET NULL,
            quantity INTEGER NOT NULL,
            total_price REAL NOT NULL,
            status TEXT NOT NULL DEFAULT 'pending',
            notes TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_quotes_owner ON quotes(owner_id, created_at);
        CREATE INDEX IF NOT EXISTS idx_products_status ON products(status);
        "#,
    )?;
    Ok(())
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn expect_changed(changed: usize, kind: &'static str, id: &str) -> Result<()> {
    if changed == 0 {
        return Err(StoreError::NotFound { kind, id: id.to_string() });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Quotes
// ---------------------------------------------------------------------------

struct QuoteRow {
    id: String,
    created_at: String,
    owner_id: String,
    client_name: Option<String>,
    piece_name: Option<String>,
    inputs_data: String,
    results_data: String,
}

const QUOTE_COLUMNS: &str =
    "id, created_at, owner_id, client_name, piece_name, inputs_data, results_data";

fn quote_row(row: &Row<'_>) -> rusqlite::Result<QuoteRow> {
    Ok(QuoteRow {
        id: row.get(0)?,
        created_at: row.get(1)?,
        owner_id: row.get(2)?,
        client_name: row.get(3)?,
        piece_name: row.get(4)?,
        inputs_data: row.get(5)?,
        results_data: row.get(6)?,
    })
}

impl TryFrom<QuoteRow> for Quote {
    type Error = StoreError;

    fn try_from(row: QuoteRow) -> Result<Self> {
        Ok(Quote {
            id: row.id,
            created_at: row.created_at,
            owner_id: row.owner_id,
            client_name: row.client_name,
            piece_name: row.piece_name,
            inputs: serde_json::from_str(&row.inputs_data)?,
            results: serde_json::from_str(&row.results_data)?,
        })
    }
}

/// Persist a new quote and return it with its assigned id and timestamp
pub fn insert_quote(
    conn: &Connection,
    owner_id: &str,
    inputs: &CalculatorInputs,
    results: &CalculationResults,
) -> Result<Quote> {
    let quote = Quote {
        id: new_id(),
        created_at: now(),
        owner_id: owner_id.to_string(),
        client_name: inputs.client_name.clone(),
        piece_name: Some(inputs.piece_name.clone()),
        inputs: inputs.clone(),
        results: results.clone(),
    };

    conn.execute(
        "INSERT INTO quotes (id, created_at, owner_id, client_name, piece_name, inputs_data, results_data)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        (
            &quote.id,
            &quote.created_at,
            &quote.owner_id,
            &quote.client_name,
            &quote.piece_name,
            serde_json::to_string(inputs)?,
            serde_json::to_string(results)?,
        ),
    )?;
    Ok(quote)
}

/// Quotes belonging to an owner, newest first
pub fn list_quotes(conn: &Connection, owner_id: &str) -> Result<Vec<Quote>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {QUOTE_COLUMNS} FROM quotes WHERE owner_id = ?1 ORDER BY created_at DESC, rowid DESC"
    ))?;

    let rows = stmt.query_map([owner_id], quote_row)?;

    let mut results = Vec::new();
    for row in rows {
        results.push(Quote::try_from(row?)?);
    }
    Ok(results)
}

pub fn get_quote(conn: &Connection, id: &str) -> Result<Quote> {
    let row = conn
        .query_row(
            &format!("SELECT {QUOTE_COLUMNS} FROM quotes WHERE id = ?1"),
            [id],
            quote_row,
        )
        .optional()?
        .ok_or_else(|| StoreError::NotFound { kind: "quote", id: id.to_string() })?;
    Quote::try_from(row)
}

/// Replace a quote's inputs and results; owner and timestamp are kept
pub fn update_quote(
    conn: &Connection,
    id: &str,
    inputs: &CalculatorInputs,
    results: &CalculationResults,
) -> Result<()> {
    let changed = conn.execute(
        "UPDATE quotes SET client_name = ?2, piece_name = ?3, inputs_data = ?4, results_data = ?5
         WHERE id = ?1",
        (
            id,
            &inputs.client_name,
            &inputs.piece_name,
            serde_json::to_string(inputs)?,
            serde_json::to_string(results)?,
        ),
    )?;
    expect_changed(changed, "quote", id)
}

pub fn delete_quote(conn: &Connection, id: &str) -> Result<()> {
    let changed = conn.execute("DELETE FROM quotes WHERE id = ?1", [id])?;
    expect_changed(changed, "quote", id)
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

pub fn insert_category(conn: &Connection, name: &str, description: Option<&str>) -> Result<Category> {
    let slug = slugify(name);
    if slug.is_empty() {
        return Err(StoreError::InvalidRecord(format!("category name '{}' has no usable characters", name)));
    }

    let category = Category {
        id: new_id(),
        name: name.to_string(),
        slug,
        description: description.map(str::to_string),
    };
    conn.execute(
        "INSERT INTO categories (id, name, slug, description, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
        (&category.id, &category.name, &category.slug, &category.description, now()),
    )?;
    Ok(category)
}

pub fn list_categories(conn: &Connection) -> Result<Vec<Category>> {
    let mut stmt = conn.prepare("SELECT id, name, slug, description FROM categories ORDER BY name")?;

    let rows = stmt.query_map([], |row| {
        Ok(Category {
            id: row.get(0)?,
            name: row.get(1)?,
            slug: row.get(2)?,
            description: row.get(3)?,
        })
    })?;

    let mut results = Vec::new();
    for row in rows {
        results.push(row?);
    }
    Ok(results)
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

struct ProductRow {
    id: String,
    name: String,
    description: Option<String>,
    price: f64,
    quantity: i64,
    status: String,
    images: String,
    category_id: Option<String>,
}

const PRODUCT_COLUMNS: &str =
    "id, name, description, price, quantity, status, images, category_id";

fn product_row(row: &Row<'_>) -> rusqlite::Result<ProductRow> {
    Ok(ProductRow {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        price: row.get(3)?,
        quantity: row.get(4)?,
        status: row.get(5)?,
        images: row.get(6)?,
        category_id: row.get(7)?,
    })
}

impl TryFrom<ProductRow> for Product {
    type Error = StoreError;

    fn try_from(row: ProductRow) -> Result<Self> {
        Ok(Product {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            quantity: row.quantity,
            status: row.status.parse()?,
            images: serde_json::from_str(&row.images)?,
            category_id: row.category_id,
        })
    }
}

/// Validate a catalog payload before it reaches the table
fn check_product(product: &NewProduct) -> Result<()> {
    if product.name.trim().is_empty() {
        return Err(StoreError::InvalidRecord("product name is empty".to_string()));
    }
    if !product.price.is_finite() || product.price < 0.0 {
        return Err(StoreError::InvalidRecord(format!("invalid product price {}", product.price)));
    }
    if product.quantity < 0 {
        return Err(StoreError::InvalidQuantity(product.quantity));
    }
    Ok(())
}

pub fn insert_product(conn: &Connection, product: &NewProduct) -> Result<Product> {
    check_product(product)?;

    let id = new_id();
    let created_at = now();
    conn.execute(
        "INSERT INTO products (id, name, description, price, quantity, status, images, category_id, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?9)",
        (
            &id,
            &product.name,
            &product.description,
            product.price,
            product.quantity,
            product.status.as_str(),
            serde_json::to_string(&product.images)?,
            &product.category_id,
            &created_at,
        ),
    )?;

    Ok(Product {
        id,
        name: product.name.clone(),
        description: product.description.clone(),
        price: product.price,
        quantity: product.quantity,
        status: product.status,
        images: product.images.clone(),
        category_id: product.category_id.clone(),
    })
}

/// List products, newest first; the storefront passes `active_only`
pub fn list_products(conn: &Connection, active_only: bool) -> Result<Vec<Product>> {
    let filter = if active_only { "WHERE status = 'active'" } else { "" };
    let mut stmt = conn.prepare(&format!(
        "SELECT {PRODUCT_COLUMNS} FROM products {filter} ORDER BY created_at DESC, rowid DESC"
    ))?;

    let rows = stmt.query_map([], product_row)?;

    let mut results = Vec::new();
    for row in rows {
        results.push(Product::try_from(row?)?);
    }
    Ok(results)
}

pub fn get_product(conn: &Connection, id: &str) -> Result<Product> {
    let row = conn
        .query_row(
            &format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?1"),
            [id],
            product_row,
        )
        .optional()?
        .ok_or_else(|| StoreError::NotFound { kind: "product", id: id.to_string() })?;
    Product::try_from(row)
}

pub fn update_product_status(conn: &Connection, id: &str, status: ProductStatus) -> Result<()> {
    let changed = conn.execute(
        "UPDATE products SET status = ?2, updated_at = ?3 WHERE id = ?1",
        (id, status.as_str(), now()),
    )?;
    expect_changed(changed, "product", id)
}

pub fn update_product_quantity(conn: &Connection, id: &str, quantity: i64) -> Result<()> {
    if quantity < 0 {
        return Err(StoreError::InvalidQuantity(quantity));
    }
    let changed = conn.execute(
        "UPDATE products SET quantity = ?2, updated_at = ?3 WHERE id = ?1",
        (id, quantity, now()),
    )?;
    expect_changed(changed, "product", id)
}

pub fn delete_product(conn: &Connection, id: &str) -> Result<()> {
    conn.execute("UPDATE orders SET product_id = NULL WHERE product_id = ?1", [id])?;
    let changed = conn.execute("DELETE FROM products WHERE id = ?1", [id])?;
    expect_changed(changed, "product", id)
}

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

struct OrderRow {
    id: String,
    customer_name: String,
    customer_phone: String,
    product_id: Option<String>,
    quantity: i64,
    total_price: f64,
    status: String,
    notes: Option<String>,
    created_at: String,
}

impl TryFrom<OrderRow> for Order {
    type Error = StoreError;

    fn try_from(row: OrderRow) -> Result<Self> {
        Ok(Order {
            id: row.id,
            customer_name: row.customer_name,
            customer_phone: row.customer_phone,
            product_id: row.product_id,
            quantity: row.quantity,
            total_price: row.total_price,
            status: row.status.parse()?,
            notes: row.notes,
            created_at: row.created_at,
        })
    }
}

pub fn insert_order(conn: &Connection, order: &NewOrder) -> Result<Order> {
    if order.customer_name.trim().is_empty() || order.customer_phone.trim().is_empty() {
        return Err(StoreError::InvalidRecord("order needs a customer name and phone".to_string()));
    }
    if order.quantity <= 0 {
        return Err(StoreError::InvalidQuantity(order.quantity));
    }

    let id = new_id();
    let created_at = now();
    conn.execute(
        "INSERT INTO orders (id, customer_name, customer_phone, product_id, quantity, total_price, status, notes, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?9)",
        (
            &id,
            &order.customer_name,
            &order.customer_phone,
            &order.product_id,
            order.quantity,
            order.total_price,
            OrderStatus::Pending.as_str(),
            &order.notes,
            &created_at,
        ),
    )?;

    Ok(Order {
        id,
        customer_name: order.customer_name.clone(),
        customer_phone: order.customer_phone.clone(),
        product_id: order.product_id.clone(),
        quantity: order.quantity,
        total_price: order.total_price,
        status: OrderStatus::Pending,
        notes: order.notes.clone(),
        created_at,
    })
}

/// All orders with their product's name and current stock, newest first
pub fn list_orders(conn: &Connection) -> Result<Vec<OrderListing>> {
    let mut stmt = conn.prepare(
        "SELECT o.id, o.customer_name, o.customer_phone, o.product_id, o.quantity, o.total_price,
                o.status, o.notes, o.created_at, p.name, p.quantity
         FROM orders o
         LEFT JOIN products p ON p.id = o.product_id
         ORDER BY o.created_at DESC, o.rowid DESC",
    )?;

    let rows = stmt.query_map([], |row| {
        let order = OrderRow {
            id: row.get(0)?,
            customer_name: row.get(1)?,
            customer_phone: row.get(2)?,
            product_id: row.get(3)?,
            quantity: row.get(4)?,
            total_price: row.get(5)?,
            status: row.get(6)?,
            notes: row.get(7)?,
            created_at: row.get(8)?,
        };
        Ok((order, row.get::<_, Option<String>>(9)?, row.get::<_, Option<i64>>(10)?))
    })?;

    let mut results = Vec::new();
    for row in rows {
        let (order, product_name, product_stock) = row?;
        results.push(OrderListing {
            order: Order::try_from(order)?,
            product_name,
            product_stock,
        });
    }
    Ok(results)
}

pub fn update_order_status(conn: &Connection, id: &str, status: OrderStatus) -> Result<()> {
    let changed = conn.execute(
        "UPDATE orders SET status = ?2, updated_at = ?3 WHERE id = ?1",
        (id, status.as_str(), now()),
    )?;
    expect_changed(changed, "order", id)
}

pub fn delete_order(conn: &Connection, id: &str) -> Result<()> {
    let changed = conn.execute("DELETE FROM orders WHERE id = ?1", [id])?;
    expect_changed(changed, "order", id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::{estimate, tests::sample_inputs};

    fn conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        conn
    }

    fn product(name: &str, status: ProductStatus) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            description: Some("Printed in PLA".to_string()),
            price: 37.96,
            quantity: 3,
            status,
            images: vec!["http://localhost/product-images/1-a.png".to_string()],
            category_id: None,
        }
    }

    #[test]
    fn init_schema_is_idempotent() {
        let conn = conn();
        init_schema(&conn).unwrap();
    }

    #[test]
    fn quotes_are_listed_newest_first_per_owner() {
        let conn = conn();
        let inputs = sample_inputs();
        let results = estimate(&inputs).unwrap();

        let first = insert_quote(&conn, "admin-1", &inputs, &results).unwrap();
        let second = insert_quote(&conn, "admin-1", &inputs, &results).unwrap();
        insert_quote(&conn, "admin-2", &inputs, &results).unwrap();

        let quotes = list_quotes(&conn, "admin-1").unwrap();
        let ids: Vec<_> = quotes.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec![second.id.as_str(), first.id.as_str()]);
        assert_eq!(quotes[0].piece_name.as_deref(), Some("Dragon Bust"));
    }

    #[test]
    fn reloaded_inputs_reproduce_stored_results() {
        let conn = conn();
        let inputs = sample_inputs();
        let results = estimate(&inputs).unwrap();
        let saved = insert_quote(&conn, "admin", &inputs, &results).unwrap();

        let (inputs_data, results_data): (String, String) = conn
            .query_row(
                "SELECT inputs_data, results_data FROM quotes WHERE id = ?1",
                [&saved.id],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .unwrap();

        let reloaded: CalculatorInputs = serde_json::from_str(&inputs_data).unwrap();
        let recomputed = serde_json::to_string(&estimate(&reloaded).unwrap()).unwrap();
        assert_eq!(recomputed, results_data);
    }

    #[test]
    fn update_and_delete_quote() {
        let conn = conn();
        let mut inputs = sample_inputs();
        let results = estimate(&inputs).unwrap();
        let saved = insert_quote(&conn, "admin", &inputs, &results).unwrap();

        inputs.quantity = 10;
        inputs.piece_name = "Dragon Bust v2".to_string();
        let updated = estimate(&inputs).unwrap();
        update_quote(&conn, &saved.id, &inputs, &updated).unwrap();

        let loaded = get_quote(&conn, &saved.id).unwrap();
        assert_eq!(loaded.inputs.quantity, 10);
        assert_eq!(loaded.piece_name.as_deref(), Some("Dragon Bust v2"));
        assert_eq!(loaded.results, updated);
        assert_eq!(loaded.created_at, saved.created_at);

        delete_quote(&conn, &saved.id).unwrap();
        assert!(matches!(get_quote(&conn, &saved.id), Err(StoreError::NotFound { .. })));
        assert!(matches!(delete_quote(&conn, &saved.id), Err(StoreError::NotFound { .. })));
    }

    #[test]
    fn storefront_lists_only_active_products() {
        let conn = conn();
        let active = insert_product(&conn, &product("Vase", ProductStatus::Active)).unwrap();
        let hidden = insert_product(&conn, &product("Lamp", ProductStatus::Active)).unwrap();
        update_product_status(&conn, &hidden.id, ProductStatus::Restocking).unwrap();

        let storefront = list_products(&conn, true).unwrap();
        assert_eq!(storefront.len(), 1);
        assert_eq!(storefront[0].id, active.id);
        assert_eq!(storefront[0].images, active.images);

        assert_eq!(list_products(&conn, false).unwrap().len(), 2);
        assert_eq!(get_product(&conn, &hidden.id).unwrap().status, ProductStatus::Restocking);
    }

    #[test]
    fn stock_updates_reject_negative_quantities() {
        let conn = conn();
        let p = insert_product(&conn, &product("Vase", ProductStatus::Active)).unwrap();

        update_product_quantity(&conn, &p.id, 0).unwrap();
        assert_eq!(get_product(&conn, &p.id).unwrap().quantity, 0);

        assert!(matches!(
            update_product_quantity(&conn, &p.id, -1),
            Err(StoreError::InvalidQuantity(-1))
        ));
        assert!(matches!(
            update_product_quantity(&conn, "missing", 2),
            Err(StoreError::NotFound { kind: "product", .. })
        ));
    }

    #[test]
    fn malformed_status_row_is_rejected() {
        let conn = conn();
        let p = insert_product(&conn, &product("Vase", ProductStatus::Active)).unwrap();
        conn.execute("UPDATE products SET status = 'discontinued' WHERE id = ?1", [&p.id])
            .unwrap();

        assert!(matches!(get_product(&conn, &p.id), Err(StoreError::InvalidRecord(_))));
    }

    #[test]
    fn invalid_product_payloads_are_rejected() {
        let conn = conn();
        let mut bad = product("  ", ProductStatus::Active);
        assert!(matches!(insert_product(&conn, &bad), Err(StoreError::InvalidRecord(_))));

        bad.name = "Vase".to_string();
        bad.price = f64::NAN;
        assert!(matches!(insert_product(&conn, &bad), Err(StoreError::InvalidRecord(_))));
    }

    #[test]
    fn categories_get_slugs() {
        let conn = conn();
        insert_category(&conn, "Decoração de Casa", None).unwrap();
        let cat = insert_category(&conn, "Action Figures", Some("Painted minis")).unwrap();
        assert_eq!(cat.slug, "action-figures");

        let names: Vec<_> = list_categories(&conn).unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Action Figures", "Decoração de Casa"]);

        assert!(insert_category(&conn, "Action  Figures", None).is_err());
    }

    #[test]
    fn order_lifecycle() {
        let conn = conn();
        let p = insert_product(&conn, &product("Vase", ProductStatus::Active)).unwrap();
        let order = insert_order(
            &conn,
            &NewOrder {
                customer_name: "João".to_string(),
                customer_phone: "+55 62 90000-0000".to_string(),
                product_id: Some(p.id.clone()),
                quantity: 2,
                total_price: 75.92,
                notes: None,
            },
        )
        .unwrap();
        assert_eq!(order.status, OrderStatus::Pending);

        update_order_status(&conn, &order.id, OrderStatus::Confirmed).unwrap();
        let orders = list_orders(&conn).unwrap();
        assert_eq!(orders[0].order.status, OrderStatus::Confirmed);

        delete_product(&conn, &p.id).unwrap();
        let orders = list_orders(&conn).unwrap();
        assert_eq!(orders[0].order.product_id, None);
        assert_eq!(orders[0].product_label(), "Produto removido");

        delete_order(&conn, &order.id).unwrap();
        assert!(list_orders(&conn).unwrap().is_empty());
    }

    #[test]
    fn order_list_joins_product_name_and_stock() {
        let conn = conn();
        let p = insert_product(&conn, &product("Vase", ProductStatus::Active)).unwrap();
        let order = insert_order(
            &conn,
            &NewOrder {
                customer_name: "Ana".to_string(),
                customer_phone: "62 98888-7777".to_string(),
                product_id: Some(p.id.clone()),
                quantity: 1,
                total_price: 37.96,
                notes: Some("Gift wrap".to_string()),
            },
        )
        .unwrap();
        update_product_quantity(&conn, &p.id, 7).unwrap();

        let orders = list_orders(&conn).unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].order.id, order.id);
        assert_eq!(orders[0].product_label(), "Vase");
        assert_eq!(orders[0].product_stock, Some(7));
        assert_eq!(orders[0].order.notes.as_deref(), Some("Gift wrap"));

        // A reference to a product that is gone still lists
        conn.execute("UPDATE orders SET product_id = 'gone' WHERE id = ?1", [&order.id])
            .unwrap();
        let orders = list_orders(&conn).unwrap();
        assert_eq!(orders[0].product_stock, None);
        assert_eq!(orders[0].product_label(), "Produto removido (gone)");
    }

    #[test]
    fn orders_need_positive_quantity() {
        let conn = conn();
        let err = insert_order(
            &conn,
            &NewOrder {
                customer_name: "João".to_string(),
                customer_phone: "123".to_string(),
                product_id: None,
                quantity: 0,
                total_price: 0.0,
                notes: None,
            },
        )
        .unwrap_err();
        assert!(matches!(err, StoreError::InvalidQuantity(0)));
    }
}
