//! Absorption pass: large networks absorb their subnets.
//!
//! 192.168.0.0/22, 192.168.0.0/24, 192.168.2.0/24 -> 192.168.0.0/22
//!
//! Note. The input must be sorted (address then mask ascending), otherwise
//! absorption can not work properly: the sort puts a larger block ahead of
//! every block nested inside it.

use crate::models::Ipv4;

/// Single left-to-right pass removing networks contained in an earlier one.
///
/// The first network seeds the result and becomes the candidate supernet;
/// each later network the candidate contains is dropped, anything else is
/// appended and becomes the new candidate. Equal networks are absorbed too,
/// since a network contains itself.
///
/// Postcondition: no element of the result is contained in another.
pub fn absorb_subnets(nets: &[Ipv4]) -> Vec<Ipv4> {
    debug_assert!(nets.windows(2).all(|w| w[0] <= w[1]), "input must be sorted");

    let mut absorbed: Vec<Ipv4> = Vec::with_capacity(nets.len());
    let Some((&first, rest)) = nets.split_first() else {
        return absorbed;
    };

    absorbed.push(first);
    let mut super_net = first;
    for &net in rest {
        if !super_net.contains(&net) {
            absorbed.push(net);
            super_net = net;
        }
    }

    log::debug!("absorb: {} networks in, {} out", nets.len(), absorbed.len());
    absorbed
}
