use crate::domain::coin::{Coin, DENOMINATIONS, Denomination};
use crate::error::{Result, VendError};

/// The machine's coin float: exactly one [`Coin`] per denomination, held
/// in descending face-value order so the change scan walks largest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinStack {
    coins: Vec<Coin>,
}

impl Default for CoinStack {
    fn default() -> Self {
        Self::new()
    }
}

impl CoinStack {
    /// An empty float: every denomination present with count zero.
    pub fn new() -> Self {
        let mut coins: Vec<Coin> = DENOMINATIONS
            .iter()
            .map(|&value| Coin::new(Denomination::new(value).expect("fixed set"), 0))
            .collect();
        coins.sort_by(|a, b| b.denomination.cmp(&a.denomination));
        Self { coins }
    }

    /// A float seeded with the given counts; denominations not listed
    /// stay at zero. Later entries for the same denomination win.
    pub fn seeded(seed: impl IntoIterator<Item = (Denomination, u32)>) -> Self {
        let mut stack = Self::new();
        for (denomination, count) in seed {
            stack.find_mut(denomination).count = count;
        }
        stack
    }

    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    pub fn find(&self, denomination: Denomination) -> &Coin {
        self.coins
            .iter()
            .find(|c| c.denomination == denomination)
            .expect("one coin per denomination")
    }

    fn find_mut(&mut self, denomination: Denomination) -> &mut Coin {
        self.coins
            .iter_mut()
            .find(|c| c.denomination == denomination)
            .expect("one coin per denomination")
    }

    pub fn increase_count(&mut self, denomination: Denomination, increase_by: u32) -> u32 {
        self.find_mut(denomination).increase_count(increase_by)
    }

    pub fn decrease_count(&mut self, denomination: Denomination, decrease_by: u32) -> Result<u32> {
        self.find_mut(denomination).decrease_count(decrease_by)
    }

    /// Sum of face value times count over the whole float, in pence.
    pub fn total_value(&self) -> u64 {
        self.coins
            .iter()
            .map(|c| u64::from(c.denomination.pence()) * u64::from(c.count))
            .sum()
    }

    /// Commits a previously computed change set: one coin leaves the
    /// float per list entry.
    ///
    /// A set obtained from [`compute_change`] on the same float is always
    /// committable; `NegativeCount` here means the caller withdrew coins
    /// it never had.
    ///
    /// [`compute_change`]: CoinStack::compute_change
    pub fn apply_withdrawals(&mut self, coin_list: &[Denomination]) -> Result<()> {
        for &denomination in coin_list {
            self.decrease_count(denomination, 1)?;
        }
        Ok(())
    }

    /// Computes a change set summing exactly to `target`, largest
    /// denomination first, bounded by what the float holds. This is a dry
    /// run against local counts: the float itself is untouched until the
    /// caller commits the set with [`apply_withdrawals`].
    ///
    /// Greedy descent is knowingly incomplete when the float runs low: a
    /// large coin can overshoot a target that smaller coins could still
    /// assemble (target 6 from {5: 1, 2: 3} picks the 5 and strands the
    /// remainder). In that case the whole computation fails with
    /// [`VendError::ExactChangeUnavailable`] — partial change is never
    /// offered.
    ///
    /// [`apply_withdrawals`]: CoinStack::apply_withdrawals
    pub fn compute_change(&self, target: u32) -> Result<Vec<Denomination>> {
        let mut coin_list = Vec::new();
        let mut remaining = target;

        for coin in &self.coins {
            let value = coin.denomination.pence();
            let mut available = coin.count;
            while available > 0 && value <= remaining {
                coin_list.push(coin.denomination);
                remaining -= value;
                available -= 1;
            }
        }

        if remaining != 0 {
            tracing::debug!(wanted = target, remaining, "exact change unavailable");
            return Err(VendError::ExactChangeUnavailable);
        }
        Ok(coin_list)
    }
}
