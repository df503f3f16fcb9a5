//! End-to-end visitor session.
//!
//! Shows the splash screen for the configured delay, submits the
//! registration form, applies the requested cart actions and prints the
//! resulting cart.

use thiserror::Error;
use tokio::sync::oneshot;
use tracing::{info, warn};

use shopco_core::ProductId;
use shopco_storefront::{
    CartAction, CartBadge, CartChange, CartView, RegistrationForm, Session, SessionError,
    StorefrontState,
};

/// Errors that end a session command early.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("splash screen interrupted")]
    SplashInterrupted,

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Registration details supplied on the command line.
#[derive(Debug)]
pub struct Visitor {
    pub name: String,
    pub surname: String,
    pub phone: String,
}

/// Cart actions, applied in order: adds, then quantity changes, then removals.
#[derive(Debug, Default)]
pub struct Actions {
    pub add: Vec<ProductId>,
    pub set: Vec<(ProductId, i64)>,
    pub remove: Vec<ProductId>,
}

impl Actions {
    /// Quantity changes and removals as cart actions. Adds go through
    /// [`Session::add_to_cart`] so unknown IDs are reported.
    fn cart_actions(&self) -> Vec<CartAction> {
        let updates = self
            .set
            .iter()
            .map(|&(product_id, quantity)| CartAction::UpdateQuantity {
                product_id,
                quantity,
            });
        let removals = self.remove.iter().copied().map(CartAction::Remove);
        updates.chain(removals).collect()
    }
}

/// Parse an `ID=QTY` argument.
///
/// # Errors
///
/// Returns a message if either side is missing or not an integer.
pub fn parse_set(arg: &str) -> Result<(ProductId, i64), String> {
    let (id, quantity) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected ID=QTY, got `{arg}`"))?;
    let id = id
        .parse::<ProductId>()
        .map_err(|e| format!("invalid product ID `{id}`: {e}"))?;
    let quantity = quantity
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("invalid quantity `{quantity}`: {e}"))?;
    Ok((id, quantity))
}

/// Run one session from splash to checkout summary.
///
/// # Errors
///
/// Returns an error if the splash is interrupted, registration fails, or an
/// action names an unknown product.
pub async fn run(
    state: &StorefrontState,
    visitor: Visitor,
    actions: Actions,
) -> Result<(), CommandError> {
    let mut session = state.new_session();

    show_splash(state).await?;
    session.finish_splash();

    let form = RegistrationForm::new(visitor.name, visitor.surname, visitor.phone);
    if let Err(e) = session.register(&form) {
        if let SessionError::Registration(errors) = &e {
            print_messages(&errors.messages());
        }
        return Err(e.into());
    }

    for &product_id in &actions.add {
        report(session.add_to_cart(product_id)?);
    }
    for action in actions.cart_actions() {
        report(session.dispatch(&action)?);
    }

    print_summary(&session)?;
    Ok(())
}

/// Wait for the splash timer. Ctrl-C cancels it.
async fn show_splash(state: &StorefrontState) -> Result<(), CommandError> {
    let (done_tx, done_rx) = oneshot::channel();
    let timer = state.start_splash(move || {
        let _ = done_tx.send(());
    });
    info!(brand = %state.config().brand_name, "Showing splash screen");

    tokio::select! {
        done = done_rx => done.map_err(|_| CommandError::SplashInterrupted),
        _ = tokio::signal::ctrl_c() => {
            timer.cancel();
            Err(CommandError::SplashInterrupted)
        }
    }
}

fn report(change: CartChange) {
    match change {
        CartChange::Rejected { product_id, reason } => {
            warn!(%product_id, ?reason, "Cart refused product");
        }
        CartChange::Unchanged => info!("Cart unchanged"),
        change => info!(?change, "Cart updated"),
    }
}

#[allow(clippy::print_stdout)]
fn print_messages(messages: &[String]) {
    for message in messages {
        println!("  ✗ {message}");
    }
}

#[allow(clippy::print_stdout)]
fn print_summary(session: &Session) -> Result<(), SessionError> {
    let cart = session.cart()?;
    let view = CartView::from(cart);

    if let Some(customer) = session.customer() {
        println!("Welcome, {}", customer.full_name());
    }
    match CartBadge::for_cart(cart) {
        Some(badge) => println!("Cart ({})", badge.count),
        None => println!("Your cart is empty"),
    }
    for item in &view.items {
        println!(
            "{:>4}  {:<28} {:>3} x {:>10} = {:>10}",
            item.id, item.name, item.quantity, item.price, item.line_price
        );
    }
    if !view.is_empty() {
        println!(
            "{} items, {} units, total {}",
            view.item_count, view.total_quantity, view.subtotal
        );
    }
    Ok(())
}
