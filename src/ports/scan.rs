use std::net::{Ipv4Addr, SocketAddrV4, TcpListener};
use std::ops::RangeInclusive;

use anyhow::{Result, bail};

/// Preferred scan range, tried first.
pub const PRIMARY_RANGE: RangeInclusive<u16> = 9090..=9999;
/// Fallback range, scanned only when the primary range is exhausted.
pub const FALLBACK_RANGE: RangeInclusive<u16> = 8081..=8999;

/// Bind-and-release availability check on loopback.
///
/// A port can still be taken between this probe and the container actually
/// binding it; that race is accepted, not handled.
pub fn is_free(port: u16) -> bool {
    let addr = SocketAddrV4::new(Ipv4Addr::LOCALHOST, port);
    TcpListener::bind(addr).is_ok()
}

/// Return the smallest free port, scanning 9090–9999 then 8081–8999.
pub fn find_free_port() -> Result<u16> {
    find_free_port_in(PRIMARY_RANGE, FALLBACK_RANGE)
}

/// Scan the primary range first; the fallback is consulted only once the
/// primary range is exhausted. Both exhausted is an error.
fn find_free_port_in(
    primary: RangeInclusive<u16>,
    fallback: RangeInclusive<u16>,
) -> Result<u16> {
    if let Some(port) = find_in(primary.clone()) {
        return Ok(port);
    }
    if let Some(port) = find_in(fallback.clone()) {
        return Ok(port);
    }
    bail!(
        "no free port found in {}-{} or {}-{}",
        primary.start(),
        primary.end(),
        fallback.start(),
        fallback.end()
    );
}

fn find_in(range: RangeInclusive<u16>) -> Option<u16> {
    range.into_iter().find(|&p| is_free(p))
}

/// Validate a manually entered port string: all ASCII digits, in 1-65535.
pub fn parse_port(input: &str) -> Result<u16> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        bail!("port must be a number: {input:?}");
    }
    match trimmed.parse::<u32>() {
        Ok(p @ 1..=65535) => Ok(p as u16),
        _ => bail!("port must be between 1 and 65535: {trimmed}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_port_reports_taken() {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).unwrap();
        let port = listener.local_addr().unwrap().port();
        assert!(!is_free(port));
        drop(listener);
    }

    #[test]
    fn released_port_reports_free() {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        assert!(is_free(port));
    }

    #[test]
    fn find_in_skips_taken_ports() {
        let held = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).unwrap();
        let port = held.local_addr().unwrap().port();
        assert_eq!(find_in(port..=port), None);
    }

    /// First port of a pair where both ports are currently free.
    fn two_consecutive_free() -> u16 {
        (49152..65000)
            .find(|&p| is_free(p) && is_free(p + 1))
            .expect("no two consecutive free ports on loopback")
    }

    #[test]
    fn find_in_returns_smallest_free() {
        let p = two_consecutive_free();
        assert_eq!(find_in(p..=p + 1), Some(p));
    }

    #[test]
    fn find_in_moves_past_a_taken_port_to_the_next() {
        let p = two_consecutive_free();
        let _held = TcpListener::bind((Ipv4Addr::LOCALHOST, p)).unwrap();
        assert_eq!(find_in(p..=p + 1), Some(p + 1));
    }

    #[test]
    fn primary_range_wins_when_it_has_a_free_port() {
        let p = two_consecutive_free();
        let _held = TcpListener::bind((Ipv4Addr::LOCALHOST, p)).unwrap();
        // Fallback is fully taken; the free primary port is still returned.
        let port = find_free_port_in((p + 1)..=(p + 1), p..=p).unwrap();
        assert_eq!(port, p + 1);
    }

    #[test]
    fn fallback_is_used_once_primary_is_exhausted() {
        let p = two_consecutive_free();
        let _held = TcpListener::bind((Ipv4Addr::LOCALHOST, p)).unwrap();
        let port = find_free_port_in(p..=p, (p + 1)..=(p + 1)).unwrap();
        assert_eq!(port, p + 1);
    }

    #[test]
    fn both_ranges_exhausted_is_an_error() {
        let held = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).unwrap();
        let p = held.local_addr().unwrap().port();
        assert!(find_free_port_in(p..=p, p..=p).is_err());
    }

    #[test]
    fn parse_port_accepts_digits() {
        assert_eq!(parse_port("9090").unwrap(), 9090);
        assert_eq!(parse_port(" 8081 ").unwrap(), 8081);
    }

    #[test]
    fn parse_port_rejects_non_digits() {
        assert!(parse_port("90a0").is_err());
        assert!(parse_port("-1").is_err());
        assert!(parse_port("9090 extra").is_err());
        assert!(parse_port("").is_err());
    }

    #[test]
    fn parse_port_rejects_out_of_range() {
        assert!(parse_port("0").is_err());
        assert!(parse_port("65536").is_err());
        assert!(parse_port("999999").is_err());
    }
}
