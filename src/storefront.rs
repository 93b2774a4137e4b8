//! Catalog publishing and customer order messages

use anyhow::{bail, Result};
use url::Url;

use crate::models::{NewOrder, NewProduct, Product, ProductStatus, Quote};

/// Build the catalog payload for a quote; images must already be stored
pub fn product_from_quote(
    quote: &Quote,
    description: &str,
    stock: i64,
    images: Vec<String>,
    category_id: Option<String>,
) -> Result<NewProduct> {
    if quote.inputs.piece_name.trim().is_empty() || description.trim().is_empty() || images.is_empty() {
        bail!("piece name, description and at least one image are required to publish");
    }

    Ok(NewProduct {
        name: quote.inputs.piece_name.clone(),
        description: Some(description.to_string()),
        price: quote.results.final_price_per_unit,
        quantity: stock,
        status: ProductStatus::Active,
        images,
        category_id,
    })
}

/// Pre-filled message a customer sends to place an order
pub fn order_message(product: &Product) -> String {
    format!(
        "Olá! Gostaria de pedir o produto: {}\nPreço: R$ {:.2}\nTem disponível: {}",
        product.name, product.price, product.quantity
    )
}

/// `https://wa.me/<number>?text=<message>`
pub fn order_link(whatsapp_number: &str, product: &Product) -> Result<Url> {
    let base = format!("https://wa.me/{}", whatsapp_number);
    Ok(Url::parse_with_params(&base, &[("text", order_message(product))])?)
}

/// Order record for `quantity` units of a product at its current price
pub fn order_for(
    product: &Product,
    customer_name: &str,
    customer_phone: &str,
    quantity: i64,
    notes: Option<String>,
) -> NewOrder {
    NewOrder {
        customer_name: customer_name.to_string(),
        customer_phone: customer_phone.to_string(),
        product_id: Some(product.id.clone()),
        quantity,
        total_price: product.price * quantity as f64,
        notes,
    }
}
