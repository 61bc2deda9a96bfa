//! Request inspection helpers for finding the address a request came from.

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};

/// Header appended to by proxies, rightmost entry is the nearest hop
pub const FORWARDED_FOR_HEADER: &str = "X-Forwarded-For";

/// Header set by proxies that report a single client address
pub const REAL_IP_HEADER: &str = "X-Real-Ip";

/// Check if a string is a valid IP address (IPv4 or IPv6)
pub fn is_valid_ip(ip: &str) -> bool {
    ip.trim().parse::<IpAddr>().is_ok()
}

/// Determine the real client address of a request.
///
/// Resolution order:
/// 1. The last entry of `X-Forwarded-For`, if the header is present and
///    that entry is an IP address
/// 2. Otherwise `X-Real-Ip`, if it is an IP address
/// 3. Otherwise the host part of `remote_addr` (`ip:port`, `[v6]:port` or a bare IP)
///
/// Header names are matched case-insensitively; when several spellings of
/// one header are present the exact canonical spelling wins. A present but unparseable
/// `X-Forwarded-For` does not fall through to `X-Real-Ip`.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
/// use trafficutils::utils::ip_utils::client_addr;
///
/// let mut headers = HashMap::new();
/// headers.insert("X-Forwarded-For".to_string(), "203.0.113.7, 10.0.0.2".to_string());
///
/// let addr = client_addr("10.0.0.1:5123", &headers).unwrap();
/// assert_eq!(addr.to_string(), "10.0.0.2");
/// ```
pub fn client_addr(remote_addr: &str, headers: &HashMap<String, String>) -> Option<IpAddr> {
    let remote = parse_remote_addr(remote_addr);

    if let Some(forwarded) = header_value(headers, FORWARDED_FOR_HEADER) {
        let forwarded = forwarded.trim().trim_matches(',');
        if !forwarded.is_empty() {
            let last_hop = forwarded.rsplit(',').next().unwrap_or_default().trim();
            return last_hop.parse::<IpAddr>().ok().or(remote);
        }
    }

    if let Some(real_ip) = header_value(headers, REAL_IP_HEADER) {
        if let Ok(ip) = real_ip.trim().parse::<IpAddr>() {
            return Some(ip);
        }
    }

    remote
}

/// Host part of a `host:port` peer address
fn parse_remote_addr(remote_addr: &str) -> Option<IpAddr> {
    let remote_addr = remote_addr.trim();
    remote_addr
        .parse::<SocketAddr>()
        .map(|socket| socket.ip())
        .or_else(|_| remote_addr.parse::<IpAddr>())
        .ok()
}

/// Exact-case key first, then the case-insensitive match whose key sorts
/// lowest, so the result never depends on map iteration order.
fn header_value<'a>(headers: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    if let Some(value) = headers.get(name) {
        return Some(value.as_str());
    }

    headers
        .iter()
        .filter(|(key, _)| key.eq_ignore_ascii_case(name))
        .min_by(|(a, _), (b, _)| a.cmp(b))
        .map(|(_, value)| value.as_str())
}
