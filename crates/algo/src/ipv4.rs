//! Dotted-quad IPv4 validation

/// Validates dotted-quad notation: exactly four octets, each all
/// digits with no leading zero, parsing into 1..=255.
///
/// # Example
/// ```
/// assert!(algo::is_valid_ipv4("192.168.1.1"));
/// assert!(!algo::is_valid_ipv4("192..1.1"));
/// ```
pub fn is_valid_ipv4(addr: &str) -> bool {
    let mut octets = 0usize;
    for octet in addr.split('.') {
        octets += 1;
        if octets > 4 || !valid_octet(octet) {
            return false;
        }
    }
    octets == 4
}

fn valid_octet(octet: &str) -> bool {
    if octet.is_empty() || octet.len() > 3 {
        return false;
    }
    if octet.len() > 1 && octet.starts_with('0') {
        return false;
    }
    if !octet.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    matches!(octet.parse::<u16>(), Ok(1..=255))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses() {
        assert!(is_valid_ipv4("192.168.1.1"));
        assert!(is_valid_ipv4("1.1.1.1"));
        assert!(is_valid_ipv4("255.255.255.255"));
    }

    #[test]
    fn test_wrong_octet_count() {
        assert!(!is_valid_ipv4("1.2.3"));
        assert!(!is_valid_ipv4("1.2.3.4.5"));
        assert!(!is_valid_ipv4(""));
    }

    #[test]
    fn test_empty_octets() {
        assert!(!is_valid_ipv4("192..1.1"));
        assert!(!is_valid_ipv4(".1.2.3"));
        assert!(!is_valid_ipv4("1.2.3."));
    }

    #[test]
    fn test_out_of_range_octets() {
        assert!(!is_valid_ipv4("256.1.1.1"));
        assert!(!is_valid_ipv4("999.1.1.1"));
        // Zero octets are outside the accepted 1..=255 range.
        assert!(!is_valid_ipv4("0.1.2.3"));
        assert!(!is_valid_ipv4("10.0.0.1"));
    }

    #[test]
    fn test_leading_zeros() {
        assert!(!is_valid_ipv4("01.1.1.1"));
        assert!(!is_valid_ipv4("192.168.001.1"));
    }

    #[test]
    fn test_non_digit_octets() {
        assert!(!is_valid_ipv4("1.2.3.a"));
        assert!(!is_valid_ipv4("1e2.1.1.1"));
        assert!(!is_valid_ipv4("+1.2.3.4"));
        assert!(!is_valid_ipv4(" 1.2.3.4"));
    }
}
