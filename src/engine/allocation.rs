use crate::error::ValidationError;
use crate::models::Share;
use crate::money::Money;
use tracing::debug;
use uuid::Uuid;

/// Interactive allocation state for an expense being composed: which
/// member gets which share, and which shares the user has pinned.
///
/// A plain value type passed by the caller, so the redistribution rule is
/// unit-testable without any UI harness. Every transition keeps the
/// floor/last-absorbs-remainder rule, so a finished allocation always
/// sums exactly to the total in minor units.
#[derive(Clone, Debug)]
pub struct Allocation {
    total: Money,
    member_ids: Vec<Uuid>,
    shares: Vec<Option<Money>>,
    locked: Vec<bool>,
}

impl Allocation {
    /// Empty allocation: no shares assigned yet, nothing locked.
    pub fn new(total: Money, member_ids: Vec<Uuid>) -> Self {
        let n = member_ids.len();
        Allocation {
            total,
            member_ids,
            shares: vec![None; n],
            locked: vec![false; n],
        }
    }

    /// Splits `total` evenly: the first n-1 members get `floor(total/n)`,
    /// the last absorbs the rounding remainder.
    pub fn equal_split(total: Money, member_ids: Vec<Uuid>) -> Result<Self, ValidationError> {
        let mut alloc = Allocation::new(total, member_ids);
        alloc.split_equally()?;
        Ok(alloc)
    }

    /// Re-runs the even split on existing state. Clears all locks.
    pub fn split_equally(&mut self) -> Result<(), ValidationError> {
        let n = self.member_ids.len();
        if n == 0 || !self.total.is_positive() {
            return Err(ValidationError::InvalidAmount);
        }
        let base = self.total.div_floor(n as i64);
        let mut assigned = Money::ZERO;
        for i in 0..n - 1 {
            self.shares[i] = Some(base);
            assigned += base;
        }
        self.shares[n - 1] = Some(self.total - assigned);
        self.locked = vec![false; n];
        debug!(total = %self.total, members = n, "equal split applied");
        Ok(())
    }

    /// Stores `value` at `index` and, when any share is locked,
    /// redistributes the rest of the total across the remaining free
    /// indices.
    ///
    /// With no locks the engine is in free-entry mode and the edit is
    /// stored verbatim. With locks, the edited index is pinned at `value`
    /// for this pass; the leftover `total - locked - value` is spread over
    /// the free indices in ascending order, last one absorbing the
    /// remainder. An incomplete composition (non-positive total) also
    /// stores the edit verbatim.
    pub fn edit_share(&mut self, index: usize, value: Money) -> Result<(), ValidationError> {
        if index >= self.member_ids.len() {
            return Err(ValidationError::ShareIndexOutOfRange(index));
        }
        self.shares[index] = Some(value);

        if !self.locked.contains(&true) || !self.total.is_positive() {
            return Ok(());
        }

        let assigned: Money = value
            + (0..self.member_ids.len())
                .filter(|&i| i != index && self.locked[i])
                .map(|i| self.shares[i].unwrap_or(Money::ZERO))
                .sum::<Money>();

        let free: Vec<usize> = (0..self.member_ids.len())
            .filter(|&i| i != index && !self.locked[i])
            .collect();
        if free.is_empty() {
            return Ok(());
        }

        let remaining = self.total - assigned;
        let base = remaining.div_floor(free.len() as i64);
        let mut distributed = Money::ZERO;
        for &i in &free[..free.len() - 1] {
            self.shares[i] = Some(base);
            distributed += base;
        }
        self.shares[free[free.len() - 1]] = Some(remaining - distributed);
        debug!(%value, index, %remaining, free = free.len(), "share edited, remainder redistributed");
        Ok(())
    }

    /// Flips the lock on one share. Redistribution happens on the next
    /// edit or explicit equal split, not here.
    pub fn toggle_lock(&mut self, index: usize) -> Result<(), ValidationError> {
        if index >= self.member_ids.len() {
            return Err(ValidationError::ShareIndexOutOfRange(index));
        }
        self.locked[index] = !self.locked[index];
        Ok(())
    }

    pub fn is_locked(&self, index: usize) -> bool {
        self.locked.get(index).copied().unwrap_or(false)
    }

    pub fn share(&self, index: usize) -> Option<Money> {
        self.shares.get(index).copied().flatten()
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn member_ids(&self) -> &[Uuid] {
        &self.member_ids
    }

    /// Checks the exact-sum invariant and hands back the persist-ready
    /// share list. Unset shares count as zero. A negative share (typed
    /// directly, or produced by redistributing around over-locked pins)
    /// is malformed and sends the user back to re-edit.
    pub fn finalize(&self) -> Result<Vec<Share>, ValidationError> {
        if self
            .shares
            .iter()
            .any(|s| s.unwrap_or(Money::ZERO).is_negative())
        {
            return Err(ValidationError::InvalidAmount);
        }
        let actual: Money = self
            .shares
            .iter()
            .map(|s| s.unwrap_or(Money::ZERO))
            .sum();
        if actual != self.total {
            return Err(ValidationError::ShareSumMismatch {
                expected: self.total,
                actual,
            });
        }
        Ok(self
            .member_ids
            .iter()
            .zip(&self.shares)
            .map(|(&member_id, share)| Share {
                member_id,
                amount: share.unwrap_or(Money::ZERO),
            })
            .collect())
    }
}
