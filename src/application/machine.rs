use crate::currency;
use crate::domain::coin::Denomination;
use crate::domain::coin_stack::CoinStack;
use crate::domain::inventory::Inventory;
use crate::domain::ports::{Notifier, Severity};
use crate::error::{Result, VendError};
use crate::infrastructure::console::ConsoleNotifier;

/// Outcome of a purchase attempt: what was dispensed and which coins
/// came back. Business failures still produce a `Dispense` (with
/// `product: None`); only invariant violations and machine-level faults
/// surface as `Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispense {
    pub product: Option<String>,
    pub change: Vec<Denomination>,
}

impl Dispense {
    fn refused(change: Vec<Denomination>) -> Self {
        Self {
            product: None,
            change,
        }
    }

    /// Total value of the returned coins, in pence.
    pub fn change_value(&self) -> u32 {
        self.change.iter().map(|d| d.pence()).sum()
    }
}

/// The purchase state machine.
///
/// Owns the tendered-value accumulator for one machine instance and
/// orchestrates every mutation of the coin float and the product
/// inventory; neither is touched from outside during a transaction.
/// A session is Idle at zero tender, Funding while coins accumulate, and
/// returns to Idle after every dispense, refund, or ejection.
pub struct VendingMachine<N: Notifier = ConsoleNotifier> {
    inventory: Inventory,
    coin_stack: CoinStack,
    tendered: u32,
    notifier: N,
}

impl VendingMachine {
    pub fn new(inventory: Inventory, coin_stack: CoinStack) -> Self {
        Self::with_notifier(inventory, coin_stack, ConsoleNotifier::new())
    }
}

impl<N: Notifier> VendingMachine<N> {
    pub fn with_notifier(inventory: Inventory, coin_stack: CoinStack, notifier: N) -> Self {
        Self {
            inventory,
            coin_stack,
            tendered: 0,
            notifier,
        }
    }

    /// Accepts one coin into the float and the current tender.
    ///
    /// Unknown denominations are rejected before any state changes.
    /// Returns the new tendered value.
    pub fn insert_coin(&mut self, value: u32) -> Result<u32> {
        let denomination = Denomination::new(value)?;
        self.coin_stack.increase_count(denomination, 1);
        self.tendered += value;
        Ok(self.tendered)
    }

    /// Returns the full tender as coins and resets the session.
    ///
    /// The withdrawal is committed to the float. If the float cannot
    /// assemble the exact tendered value the error propagates — there is
    /// no state to fall back to, callers must treat it as a machine
    /// fault.
    pub fn eject_coins(&mut self) -> Result<Vec<Denomination>> {
        let coins = self.coin_stack.compute_change(self.tendered)?;
        self.coin_stack.apply_withdrawals(&coins)?;
        tracing::debug!(value = self.tendered, coins = coins.len(), "tender ejected");
        self.tendered = 0;
        Ok(coins)
    }

    /// Runs one purchase transaction against the current tender.
    ///
    /// Business failures are resolved here and reported through the
    /// notifier: unknown product, empty shelf, and unassemblable change
    /// refund the full tender; insufficient payment keeps the tender in
    /// place so the caller can top up and retry. Invariant violations
    /// (`UnknownDenomination`, `NegativeCount`) and a failed refund
    /// ejection propagate unchanged.
    pub fn purchase(&mut self, product_name: &str) -> Result<Dispense> {
        match self.vend(product_name) {
            Ok(dispense) => Ok(dispense),
            Err(err @ VendError::InsufficientFunds { .. }) => {
                self.notifier.notify(&err.to_string(), Severity::Error);
                Ok(Dispense::refused(Vec::new()))
            }
            Err(
                err @ (VendError::ProductNotFound(_)
                | VendError::OutOfStock(_)
                | VendError::ExactChangeUnavailable),
            ) => {
                let change = self.eject_coins()?;
                self.notifier.notify(&err.to_string(), Severity::Error);
                self.notifier.notify("Change has been returned", Severity::Info);
                tracing::debug!(%err, refunded = change.len(), "purchase refused");
                Ok(Dispense::refused(change))
            }
            Err(err) => Err(err),
        }
    }

    // The happy path plus every precondition, as one fallible sequence;
    // `purchase` maps the error kind to its recovery path.
    fn vend(&mut self, product_name: &str) -> Result<Dispense> {
        let product = self.inventory.find(product_name)?;
        let (name, price, count) = (product.name.clone(), product.price, product.count);
        if count == 0 {
            return Err(VendError::OutOfStock(name));
        }
        if self.tendered < price {
            return Err(VendError::InsufficientFunds {
                shortfall: price - self.tendered,
            });
        }

        let change = self.coin_stack.compute_change(self.tendered - price)?;
        self.coin_stack.apply_withdrawals(&change)?;
        self.inventory.decrease_count(&name, 1)?;
        self.tendered = 0;

        let dispense = Dispense {
            product: Some(name.clone()),
            change,
        };
        self.notifier.notify(
            &format!(
                "You have bought {} for {}. Your change is {}.",
                name,
                currency::pounds(price),
                currency::pounds(dispense.change_value())
            ),
            Severity::Info,
        );
        tracing::debug!(product = %name, change = dispense.change_value(), "dispensed");
        Ok(dispense)
    }

    /// Operator restock. Returns the new shelf count.
    pub fn reload_product(&mut self, product_name: &str, increase_by: u32) -> Result<u32> {
        self.inventory.increase_count(product_name, increase_by)
    }

    /// Operator float top-up. Does not touch the tendered value.
    /// Returns the new coin count.
    pub fn reload_coin(&mut self, value: u32, increase_by: u32) -> Result<u32> {
        let denomination = Denomination::new(value)?;
        Ok(self.coin_stack.increase_count(denomination, increase_by))
    }

    /// Total value held in the float, in pence.
    pub fn balance(&self) -> u64 {
        self.coin_stack.total_value()
    }

    /// Value of the current, unresolved tender.
    pub fn tendered(&self) -> u32 {
        self.tendered
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn coin_stack(&self) -> &CoinStack {
        &self.coin_stack
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::Product;
    use crate::infrastructure::memory::MemoryNotifier;

    fn denomination(value: u32) -> Denomination {
        Denomination::new(value).unwrap()
    }

    fn full_stack() -> CoinStack {
        CoinStack::seeded([
            (denomination(1), 1000),
            (denomination(2), 867),
            (denomination(5), 400),
            (denomination(10), 566),
            (denomination(20), 1000),
            (denomination(50), 500),
            (denomination(100), 1220),
            (denomination(200), 160),
        ])
    }

    fn inventory() -> Inventory {
        Inventory::new([
            Product::new("Orange juice", 150, 100),
            Product::new("Water", 100, 20),
            Product::new("Cola", 200, 50),
            Product::new("Apple Juice", 150, 0),
        ])
    }

    fn machine() -> (VendingMachine<MemoryNotifier>, MemoryNotifier) {
        let notifier = MemoryNotifier::new();
        let machine = VendingMachine::with_notifier(inventory(), full_stack(), notifier.clone());
        (machine, notifier)
    }

    #[test]
    fn test_insert_coin_grows_float_and_tender() {
        let (mut machine, _) = machine();
        assert_eq!(machine.insert_coin(1).unwrap(), 1);
        assert_eq!(machine.insert_coin(1).unwrap(), 2);
        assert_eq!(machine.coin_stack().find(denomination(1)).count, 1002);
        assert_eq!(machine.tendered(), 2);
    }

    #[test]
    fn test_insert_unknown_coin_changes_nothing() {
        let (mut machine, _) = machine();
        let balance = machine.balance();
        assert!(matches!(
            machine.insert_coin(3),
            Err(VendError::UnknownDenomination(3))
        ));
        assert_eq!(machine.tendered(), 0);
        assert_eq!(machine.balance(), balance);
    }

    #[test]
    fn test_eject_coins_returns_tender_and_resets() {
        let (mut machine, _) = machine();
        let balance = machine.balance();
        machine.insert_coin(1).unwrap();
        machine.insert_coin(1).unwrap();
        let ejected = machine.eject_coins().unwrap();
        let sum: u32 = ejected.iter().map(|d| d.pence()).sum();
        assert_eq!(sum, 2);
        assert_eq!(machine.tendered(), 0);
        assert_eq!(machine.balance(), balance);
    }

    #[test]
    fn test_eject_with_no_tender_is_empty() {
        let (mut machine, _) = machine();
        assert_eq!(machine.eject_coins().unwrap(), vec![]);
    }

    #[test]
    fn test_purchase_exact_price_returns_no_change() {
        let (mut machine, notifier) = machine();
        machine.insert_coin(100).unwrap();
        machine.insert_coin(50).unwrap();

        let dispense = machine.purchase("Orange juice").unwrap();

        assert_eq!(dispense.product.as_deref(), Some("Orange juice"));
        assert!(dispense.change.is_empty());
        assert_eq!(machine.tendered(), 0);
        assert_eq!(machine.inventory().find("Orange juice").unwrap().count, 99);
        assert_eq!(
            notifier.messages(),
            vec![(
                Severity::Info,
                "You have bought Orange juice for £1.50. Your change is £0.00.".to_owned()
            )]
        );
    }

    #[test]
    fn test_purchase_returns_change_from_float() {
        let (mut machine, notifier) = machine();
        machine.insert_coin(200).unwrap();

        let dispense = machine.purchase("Water").unwrap();

        assert_eq!(dispense.product.as_deref(), Some("Water"));
        assert_eq!(dispense.change, vec![denomination(100)]);
        assert_eq!(machine.tendered(), 0);
        assert_eq!(machine.inventory().find("Water").unwrap().count, 19);
        assert_eq!(machine.coin_stack().find(denomination(100)).count, 1219);
        assert_eq!(
            notifier.messages(),
            vec![(
                Severity::Info,
                "You have bought Water for £1.00. Your change is £1.00.".to_owned()
            )]
        );
    }

    #[test]
    fn test_purchase_with_insufficient_funds_keeps_tender_for_retry() {
        let (mut machine, notifier) = machine();
        machine.insert_coin(100).unwrap();

        let dispense = machine.purchase("Cola").unwrap();

        assert_eq!(dispense.product, None);
        assert!(dispense.change.is_empty());
        assert_eq!(machine.tendered(), 100);
        assert_eq!(machine.inventory().find("Cola").unwrap().count, 50);
        assert_eq!(
            notifier.messages(),
            vec![(
                Severity::Error,
                "Insufficient payment, please provide an additional £1.00".to_owned()
            )]
        );

        machine.insert_coin(100).unwrap();
        let dispense = machine.purchase("Cola").unwrap();
        assert_eq!(dispense.product.as_deref(), Some("Cola"));
        assert!(dispense.change.is_empty());
        assert_eq!(machine.tendered(), 0);
        assert_eq!(machine.inventory().find("Cola").unwrap().count, 49);
    }

    #[test]
    fn test_purchase_unknown_product_refunds_tender() {
        let (mut machine, notifier) = machine();
        machine.insert_coin(100).unwrap();

        let dispense = machine.purchase("Lemonade").unwrap();

        assert_eq!(dispense.product, None);
        assert_eq!(dispense.change, vec![denomination(100)]);
        assert_eq!(machine.tendered(), 0);
        assert_eq!(
            notifier.messages(),
            vec![
                (Severity::Error, "no such product: Lemonade".to_owned()),
                (Severity::Info, "Change has been returned".to_owned()),
            ]
        );
    }

    #[test]
    fn test_purchase_out_of_stock_refunds_tender() {
        let (mut machine, notifier) = machine();
        machine.insert_coin(200).unwrap();

        let dispense = machine.purchase("Apple Juice").unwrap();

        assert_eq!(dispense.product, None);
        assert_eq!(dispense.change_value(), 200);
        assert_eq!(machine.tendered(), 0);
        assert_eq!(
            notifier.messages()[0],
            (Severity::Error, "product out of stock: Apple Juice".to_owned())
        );
    }

    #[test]
    fn test_purchase_refunds_tender_when_exact_change_unavailable() {
        // Float cannot break the 20p difference (one 2p short), but can
        // return the inserted 100p + 50p whole.
        let notifier = MemoryNotifier::new();
        let inventory = Inventory::new([Product::new("Crisps", 130, 5)]);
        let coin_stack = CoinStack::seeded([(denomination(2), 1)]);
        let mut machine = VendingMachine::with_notifier(inventory, coin_stack, notifier.clone());
        machine.insert_coin(100).unwrap();
        machine.insert_coin(50).unwrap();

        let dispense = machine.purchase("Crisps").unwrap();

        assert_eq!(dispense.product, None);
        assert_eq!(dispense.change, vec![denomination(100), denomination(50)]);
        assert_eq!(machine.tendered(), 0);
        assert_eq!(machine.inventory().find("Crisps").unwrap().count, 5);
        assert_eq!(
            notifier.messages(),
            vec![
                (Severity::Error, "exact change not available".to_owned()),
                (Severity::Info, "Change has been returned".to_owned()),
            ]
        );
    }

    #[test]
    fn test_reload_product() {
        let (mut machine, _) = machine();
        assert_eq!(machine.reload_product("Orange juice", 1).unwrap(), 101);
    }

    #[test]
    fn test_reload_coin() {
        let (mut machine, _) = machine();
        assert_eq!(machine.reload_coin(1, 100).unwrap(), 1100);
        assert_eq!(machine.tendered(), 0);
    }

    #[test]
    fn test_balance_tracks_float_total() {
        let notifier = MemoryNotifier::new();
        let coin_stack = CoinStack::seeded([(denomination(100), 2)]);
        let mut machine =
            VendingMachine::with_notifier(Inventory::default(), coin_stack, notifier);
        assert_eq!(machine.balance(), 200);
        machine.insert_coin(50).unwrap();
        assert_eq!(machine.balance(), 250);
    }
}
