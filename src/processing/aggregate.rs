//! The aggregation pipeline: sort, absorb, merge to fixpoint.

use crate::models::Ipv4;
use crate::processing::{absorb_subnets, merge_to_fixpoint};

/// Aggregate networks into the smallest equivalent set.
///
/// Sorts by address then mask, absorbs contained subnets in one pass, and
/// merges sibling pairs until no pass shrinks the list. Lists shorter than
/// two, or lists absorption reduces to one network, return as-is. Pure and
/// synchronous; the result covers exactly the same addresses as the input.
pub fn aggregate_networks(mut nets: Vec<Ipv4>) -> Vec<Ipv4> {
    if nets.len() < 2 {
        return nets;
    }

    // it is very important to keep the network list sorted, then absorbing
    // works properly
    nets.sort();

    let absorbed = absorb_subnets(&nets);
    if absorbed.len() == 1 {
        return absorbed;
    }

    merge_to_fixpoint(absorbed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nets(cidrs: &[&str]) -> Vec<Ipv4> {
        cidrs.iter().map(|c| Ipv4::new(c).unwrap()).collect()
    }

    #[test]
    fn test_pure_absorption() {
        let input = nets(&["192.168.0.0/22", "192.168.0.0/24", "192.168.2.0/24"]);
        assert_eq!(aggregate_networks(input), nets(&["192.168.0.0/22"]));
    }

    #[test]
    fn test_absorption_then_merge() {
        // /25s vanish into the /24s, which then fold into one /23
        let input = nets(&[
            "10.0.0.0/24",
            "10.0.0.128/25",
            "10.0.1.0/24",
            "10.0.1.0/25",
        ]);
        assert_eq!(aggregate_networks(input), nets(&["10.0.0.0/23"]));
    }

    #[test]
    fn test_unsorted_input() {
        let input = nets(&["10.0.3.0/24", "10.0.0.0/24", "10.0.2.0/24", "10.0.1.0/24"]);
        assert_eq!(aggregate_networks(input), nets(&["10.0.0.0/22"]));
    }

    #[test]
    fn test_untouched_networks_keep_order() {
        let input = nets(&["192.168.0.0/24", "10.0.0.0/24"]);
        assert_eq!(
            aggregate_networks(input),
            nets(&["10.0.0.0/24", "192.168.0.0/24"])
        );
    }

    #[test]
    fn test_merge_enabled_by_absorption() {
        // absorption clears the nested /25 between the two /24s; the pair
        // left behind are adjacent siblings and merge
        let input = nets(&["10.0.0.0/24", "10.0.0.128/25", "10.0.1.0/24"]);
        assert_eq!(aggregate_networks(input), nets(&["10.0.0.0/23"]));
    }

    #[test]
    fn test_trivial_inputs() {
        assert!(aggregate_networks(vec![]).is_empty());
        let one = nets(&["10.0.0.0/24"]);
        assert_eq!(aggregate_networks(one.clone()), one);
    }

    #[test]
    fn test_host_routes_merge() {
        let input = nets(&["10.0.0.0/32", "10.0.0.1/32"]);
        assert_eq!(aggregate_networks(input), nets(&["10.0.0.0/31"]));
    }
}
