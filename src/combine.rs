use std::cmp;
use std::collections::HashMap;

use crate::search::Mask;

/// Best combined release for two actors that may not open the same valve:
/// the maximum `v1 + v2` over recorded entries whose masks are disjoint.
///
/// Only masks some sequence actually reached appear in the table, so the
/// pairwise scan is over far fewer entries than the full 2^k subsets. The
/// empty mask pairs with anything, which also makes it the zero baseline.
pub fn max_disjoint_sum(best: &HashMap<Mask, u64>) -> u64 {
    let mut max = 0;
    for (&m1, &v1) in best {
        for (&m2, &v2) in best {
            if m1 & m2 == 0 {
                max = cmp::max(max, v1 + v2);
            }
        }
    }
    max
}
