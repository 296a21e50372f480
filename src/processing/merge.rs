//! Sibling merge pass: equal-length neighbours fold into their supernet.
//!
//! 192.168.0.0/24, 192.168.1.0/24 -> 192.168.0.0/23
//! 192.168.0.0/23, 192.168.2.0/23 -> 192.168.0.0/22
//!
//! Two networks merge only when their masks are exactly equal and their
//! closest supernets (mask - 1) are the same network; 10.0.0.0/24 and
//! 10.0.2.0/24 stay apart because their /23 parents differ.

use crate::models::Ipv4;

/// One merge pass over a sorted, absorption-free list.
///
/// Walks the list holding a single pending network that has not been emitted
/// yet. When the pending network and the next one are true siblings their
/// supernet is emitted and both are consumed; the pending slot refills from
/// the element after them, so an emitted supernet never takes part in the
/// same pass again. The slot makes the no-duplicate-emit invariant
/// structural: a network is emitted exactly once, either itself or as half
/// of a supernet.
fn merge_pass(nets: &[Ipv4]) -> Vec<Ipv4> {
    let mut merged: Vec<Ipv4> = Vec::with_capacity(nets.len());
    let mut iter = nets.iter().copied();
    let mut pending = iter.next();

    while let Some(net1) = pending {
        let Some(net2) = iter.next() else {
            merged.push(net1);
            break;
        };

        match (net1.supernet(), net2.supernet()) {
            (Some(s1), Some(s2)) if net1.mask == net2.mask && s1 == s2 => {
                merged.push(s1);
                pending = iter.next();
            }
            _ => {
                merged.push(net1);
                pending = Some(net2);
            }
        }
    }

    merged
}

/// Merge sibling networks until a fixpoint is reached.
///
/// Each pass folds pairs one level up, so consecutive runs of small siblings
/// climb toward their common supernet one mask bit per pass; at most 32
/// passes happen for IPv4. Iteration stops when a pass changes nothing or a
/// single network remains.
pub fn merge_to_fixpoint(mut nets: Vec<Ipv4>) -> Vec<Ipv4> {
    if nets.len() < 2 {
        return nets;
    }

    let mut passes = 0;
    loop {
        let merged = merge_pass(&nets);
        passes += 1;
        if merged.len() == nets.len() || merged.len() == 1 {
            log::debug!(
                "merge: fixpoint after {} pass(es), {} network(s) remain",
                passes,
                merged.len()
            );
            return merged;
        }
        nets = merged;
    }
}
