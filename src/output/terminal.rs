//! Terminal output for aggregated networks.

use std::io::Write;

use crate::models::Ipv4;

/// Render each network as `<addr>/<mask>` on its own line.
///
/// The list is printed in the order the pipeline produced it, which is
/// address ascending.
pub fn write_networks<W: Write>(out: &mut W, nets: &[Ipv4]) -> std::io::Result<()> {
    for net in nets {
        writeln!(out, "{net}")?;
    }
    Ok(())
}

/// Print aggregated networks to stdout.
pub fn print_networks(nets: &[Ipv4]) -> std::io::Result<()> {
    let stdout = std::io::stdout();
    write_networks(&mut stdout.lock(), nets)
}
