use anyhow::Result;
use colored::Colorize;
use storefront_core::products::load_catalog;
use storefront_core::{Availability, Catalog, ProductCard};

use crate::context::AppContext;

pub async fn run(ctx: &AppContext) -> Result<()> {
    match load_catalog(&ctx.api, ctx.config.locale).await {
        Catalog::Empty => {
            println!("{}", "No products found".yellow());
        }
        Catalog::Cards(cards) => {
            println!("{}", format!("{} products", cards.len()).bold());
            println!();
            for card in &cards {
                print_card(card);
            }
        }
    }

    Ok(())
}

fn print_card(card: &ProductCard) {
    let availability = match card.availability {
        Availability::InStock(_) => card.availability.label().green(),
        Availability::Unavailable => card.availability.label().red(),
    };

    println!(
        "  {:<32} {:>14}  {}",
        card.name.bold(),
        card.price_label,
        availability
    );
    if !card.description.is_empty() {
        println!("  {}", card.description.dimmed());
    }
}
