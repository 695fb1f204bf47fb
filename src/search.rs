//! Cheapest-route frontier shared by the Dijkstra and A* solvers.
//!
//! Classic best-first search over `(node, cost)` successors. Parent and cost
//! bookkeeping lives in an insertion-indexed map so path reconstruction can
//! follow bare indices, and the binary-heap frontier uses lazy deletion: a
//! node improved after being queued is simply pushed again and the stale
//! entry skipped on pop.

use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::debug;
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Frontier entry: realized cost plus an explicit per-node order key that
/// breaks cost ties deterministically (ascending key pops first).
struct FrontierEntry<C, K> {
    cost: C,
    order: K,
    index: usize,
}

impl<C: PartialEq, K: PartialEq> Eq for FrontierEntry<C, K> {}

impl<C: PartialEq, K: PartialEq> PartialEq for FrontierEntry<C, K> {
    fn eq(&self, other: &Self) -> bool {
        self.cost.eq(&other.cost) && self.order.eq(&other.order)
    }
}

impl<C: Ord, K: Ord> PartialOrd for FrontierEntry<C, K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Ord, K: Ord> Ord for FrontierEntry<C, K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both fields: BinaryHeap is a max-heap and the smallest
        // (cost, order) pair must pop first.
        match other.cost.cmp(&self.cost) {
            Ordering::Equal => other.order.cmp(&self.order),
            ordering => ordering,
        }
    }
}

/// Finds the cheapest route from `source` to `destination` and returns its
/// interior in walk-back order: index 0 is the node preceding the
/// destination, the last element is the node following the source. Both
/// endpoints are excluded. Empty when the destination is unreachable or
/// coincides with the source.
pub(crate) fn cheapest_route<N, C, K, FN, IN, FK>(
    source: &N,
    destination: &N,
    mut successors: FN,
    mut order_key: FK,
) -> Vec<N>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    K: Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FK: FnMut(&N) -> K,
{
    let mut frontier = BinaryHeap::new();
    frontier.push(FrontierEntry {
        cost: C::zero(),
        order: order_key(source),
        index: 0,
    });
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    parents.insert(source.clone(), (usize::MAX, C::zero()));
    while let Some(FrontierEntry { cost, index, .. }) = frontier.pop() {
        let successors = {
            let (node, &(_, best)) = parents
                .get_index(index)
                .expect("frontier indices always point into the parent map");
            if node == destination {
                return walk_back(&parents, index);
            }
            // Stale frontier entry: the node has since been reached cheaper.
            if cost > best {
                continue;
            }
            successors(node)
        };
        for (successor, step_cost) in successors {
            let reached = cost + step_cost;
            let order;
            let successor_index;
            match parents.entry(successor) {
                Vacant(entry) => {
                    order = order_key(entry.key());
                    successor_index = entry.index();
                    entry.insert((index, reached));
                }
                Occupied(mut entry) => {
                    if entry.get().1 > reached {
                        order = order_key(entry.key());
                        successor_index = entry.index();
                        entry.insert((index, reached));
                    } else {
                        continue;
                    }
                }
            }
            frontier.push(FrontierEntry {
                cost: reached,
                order,
                index: successor_index,
            });
        }
    }
    debug!("frontier exhausted before reaching the destination");
    Vec::new()
}

/// Walks parent indices from the destination's predecessor until the source
/// (recognized by its sentinel parent) and collects the nodes in that order,
/// unreversed.
fn walk_back<N, C>(parents: &FxIndexMap<N, (usize, C)>, destination_index: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let &(first, _) = &parents[destination_index];
    itertools::unfold(first, |index| {
        parents.get_index(*index).and_then(|(node, &(parent, _))| {
            if parent == usize::MAX {
                None
            } else {
                *index = parent;
                Some(node.clone())
            }
        })
    })
    .collect()
}
