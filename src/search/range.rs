//! HASH160 address ranges and branchless membership testing.

/// A 20-byte HASH160 digest.
pub type Hash160 = [u8; 20];

/// Errors constructing a [`RangeTable`].
#[derive(Debug, PartialEq, Eq)]
pub enum RangeError {
    /// The range table has no entries.
    Empty,
    /// `ranges[index].0 > ranges[index].1`.
    Inverted { index: usize },
}

/// A flat list of inclusive `[low, high]` HASH160 ranges.
pub struct RangeTable {
    ranges: Vec<(Hash160, Hash160)>,
}

impl RangeTable {
    pub fn new(ranges: &[(Hash160, Hash160)]) -> Result<Self, RangeError> {
        if ranges.is_empty() {
            return Err(RangeError::Empty);
        }

        for (index, (low, high)) in ranges.iter().enumerate() {
            if hash160_gt(low, high) {
                return Err(RangeError::Inverted { index });
            }
        }

        Ok(RangeTable {
            ranges: ranges.to_vec(),
        })
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Returns the index of the first range containing `hash`, or
    /// `None`. Every range is tested; once a containing range is found
    /// the result is latched rather than returned early, matching the
    /// "at most one match, first containing range" rule under a
    /// divergence-free scan.
    pub fn first_containing(&self, hash: &Hash160) -> Option<usize> {
        let mut found_mask: u64 = 0;
        let mut found_index: usize = 0;

        for (i, (low, high)) in self.ranges.iter().enumerate() {
            let contains = hash160_gte(hash, low) & hash160_lte(hash, high);
            let accept_mask = (contains as u64).wrapping_neg() & !found_mask;

            found_index = (found_index as u64 & !accept_mask | (i as u64 & accept_mask)) as usize;
            found_mask |= (contains as u64).wrapping_neg();
        }

        if found_mask != 0 {
            Some(found_index)
        } else {
            None
        }
    }
}

/// Branchless big-endian byte comparison: `a >= b`.
///
/// Walks all 20 bytes maintaining an `equal_so_far` flag and a `gt`
/// flag; the first unequal byte latches the order, later bytes cannot
/// change it.
fn hash160_gte(a: &Hash160, b: &Hash160) -> bool {
    let mut equal_so_far = true;
    let mut gt = false;

    for i in 0..20 {
        let this_gt = a[i] > b[i];
        let this_eq = a[i] == b[i];

        gt |= equal_so_far & this_gt;
        equal_so_far &= this_eq;
    }

    gt | equal_so_far
}

/// Branchless big-endian byte comparison: `a <= b`.
fn hash160_lte(a: &Hash160, b: &Hash160) -> bool {
    hash160_gte(b, a)
}

fn hash160_gt(a: &Hash160, b: &Hash160) -> bool {
    hash160_gte(a, b) & !hash160_gte(b, a)
}
