//! Catalog browsing commands.

use tracing::debug;

use shopco_core::Category;
use shopco_storefront::{ProductCardView, ProductFilter, StorefrontState, results_label};

/// Print the products matching `query` and `category`.
///
/// An empty query matches everything; an empty category selects all
/// categories.
pub fn products(state: &StorefrontState, query: &str, category: &str) {
    let filter = ProductFilter::new(query, category);
    let matches = state.catalog().search(&filter);
    debug!(query, category, matches = matches.len(), "Catalog search");

    let cards: Vec<ProductCardView> = matches.into_iter().map(ProductCardView::from).collect();
    print_cards(&results_label(cards.len()), &cards);
}

/// Print every category with its product count.
pub fn categories(state: &StorefrontState) {
    let rows: Vec<(Category, usize)> = Category::ALL
        .into_iter()
        .map(|category| {
            let count = state
                .catalog()
                .products()
                .iter()
                .filter(|p| p.category == category)
                .count();
            (category, count)
        })
        .collect();
    print_categories(&rows);
}

fn stars(card: &ProductCardView) -> String {
    (0..ProductCardView::MAX_STARS)
        .map(|i| if card.star_filled(i) { '★' } else { '☆' })
        .collect()
}

#[allow(clippy::print_stdout)]
fn print_cards(label: &str, cards: &[ProductCardView]) {
    println!("{label}");
    for card in cards {
        println!(
            "{:>4}  {} {:<28} {:>10}  {} {}  {}",
            card.id,
            card.category_icon,
            card.name,
            card.price,
            stars(card),
            card.rating,
            card.badge.unwrap_or_default(),
        );
    }
}

#[allow(clippy::print_stdout)]
fn print_categories(rows: &[(Category, usize)]) {
    for (category, count) in rows {
        println!("{} {:<16} {count}", category.icon(), category.as_str());
    }
}
