//! Command-line address validation.
//!
//! # Responsibilities
//! - Resolve the IP-vs-port ambiguity of the first token
//! - Canonicalize IPv4/IPv6 literals (IPv6 gets brackets for host:port use)
//! - Validate every port as an unsigned 16-bit integer
//!
//! Validation is a pure function: tokens → `Result<BindSpec, ValidationError>`.
//! It runs before any socket is opened; hostnames are never resolved.

use std::net::IpAddr;

use thiserror::Error;

/// Errors produced while validating command-line tokens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// No tokens given, or an IP with no ports after it.
    #[error("expected at least one port to listen on")]
    InsufficientArguments,

    /// First token is neither an IP literal nor a port number.
    #[error("ip address {0:?} is invalid")]
    InvalidAddress(String),

    /// A port token is not an unsigned 16-bit integer.
    #[error("port number {0:?} is invalid")]
    InvalidPort(String),
}

/// A validated bind address: one IP and at least one port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindSpec {
    /// Dotted-decimal IPv4, bracketed IPv6 literal, or "0.0.0.0".
    pub ip: String,
    /// Validated port strings, as typed (whitespace trimmed), never empty.
    pub ports: Vec<String>,
}

impl BindSpec {
    /// Compose a `host:port` listen address for one of the validated ports.
    pub fn host_port(&self, port: &str) -> String {
        format!("{}:{}", self.ip, port)
    }
}

/// Validate raw command-line tokens into a bind IP and port list.
///
/// The first token is tried as an IP literal first; only if that fails is it
/// tried as a port, in which case the whole token list is the port list and
/// the server binds all interfaces. A token that is neither (`"123.456.789"`)
/// is an invalid address, never silently reinterpreted as ports.
pub fn validate(tokens: &[String]) -> Result<BindSpec, ValidationError> {
    let Some((first, rest)) = tokens.split_first() else {
        return Err(ValidationError::InsufficientArguments);
    };

    let (ip, candidates) = match first.parse::<IpAddr>() {
        Ok(IpAddr::V4(v4)) => (v4.to_string(), rest),
        Ok(IpAddr::V6(v6)) => (format!("[{v6}]"), rest),
        Err(_) => {
            // Not an IP literal; if it is itself a port, listen on all
            // interfaces and treat every token as a port.
            if parse_port(first).is_none() {
                return Err(ValidationError::InvalidAddress(first.clone()));
            }
            ("0.0.0.0".to_string(), tokens)
        }
    };

    let mut ports = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        match parse_port(candidate) {
            Some(port) => ports.push(port),
            None => return Err(ValidationError::InvalidPort(candidate.clone())),
        }
    }

    if ports.is_empty() {
        return Err(ValidationError::InsufficientArguments);
    }

    Ok(BindSpec { ip, ports })
}

/// Parse one port token (whitespace trimmed) as u16, keeping the string form.
fn parse_port(token: &str) -> Option<String> {
    let trimmed = token.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<u16>().ok().map(|_| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn ipv4_with_ports_passes_through() {
        assert_eq!(
            validate(&tokens(&["127.0.0.1", "8080", "8081"])),
            Ok(BindSpec {
                ip: "127.0.0.1".into(),
                ports: vec!["8080".into(), "8081".into()],
            })
        );
    }

    #[test]
    fn ipv6_is_bracketed() {
        assert_eq!(
            validate(&tokens(&["::1", "8080"])),
            Ok(BindSpec {
                ip: "[::1]".into(),
                ports: vec!["8080".into()],
            })
        );
        assert_eq!(
            validate(&tokens(&["2001:db8::1", "8080"])),
            Ok(BindSpec {
                ip: "[2001:db8::1]".into(),
                ports: vec!["8080".into()],
            })
        );
    }

    #[test]
    fn bare_ports_bind_all_interfaces() {
        assert_eq!(
            validate(&tokens(&["8080", "8081", "8082"])),
            Ok(BindSpec {
                ip: "0.0.0.0".into(),
                ports: vec!["8080".into(), "8081".into(), "8082".into()],
            })
        );
    }

    #[test]
    fn empty_input_is_insufficient() {
        assert_eq!(validate(&[]), Err(ValidationError::InsufficientArguments));
    }

    #[test]
    fn ip_without_ports_is_insufficient() {
        assert_eq!(
            validate(&tokens(&["127.0.0.1"])),
            Err(ValidationError::InsufficientArguments)
        );
    }

    #[test]
    fn malformed_ipv4_is_invalid_address_not_ports() {
        assert_eq!(
            validate(&tokens(&["123.456.789"])),
            Err(ValidationError::InvalidAddress("123.456.789".into()))
        );
    }

    #[test]
    fn hostnames_are_never_resolved() {
        assert_eq!(
            validate(&tokens(&["example.com", "8080"])),
            Err(ValidationError::InvalidAddress("example.com".into()))
        );
    }

    #[test]
    fn port_out_of_range_is_invalid() {
        assert_eq!(
            validate(&tokens(&["127.0.0.1", "99999"])),
            Err(ValidationError::InvalidPort("99999".into()))
        );
    }

    #[test]
    fn non_numeric_port_is_invalid() {
        assert_eq!(
            validate(&tokens(&["127.0.0.1", "http"])),
            Err(ValidationError::InvalidPort("http".into()))
        );
    }

    #[test]
    fn port_whitespace_is_trimmed() {
        assert_eq!(
            validate(&tokens(&["127.0.0.1", " 8080 "])),
            Ok(BindSpec {
                ip: "127.0.0.1".into(),
                ports: vec!["8080".into()],
            })
        );
    }

    #[test]
    fn host_port_composes_listen_addresses() {
        let spec = validate(&tokens(&["::1", "8080"])).unwrap();
        assert_eq!(spec.host_port(&spec.ports[0]), "[::1]:8080");
    }
}
