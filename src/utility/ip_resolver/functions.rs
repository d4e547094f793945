// Current module imports
use super::errors::IpResolverError;

/// Extracts the `ip` value from a trace response body.
///
/// The body is newline-delimited `key=value` pairs with a trailing blank
/// line; each line is split on the first `=`. The value is returned
/// verbatim, without dotted-quad validation: the provider API is the final
/// arbiter of what counts as a valid address.
pub fn parse_trace_ip(body: &str) -> Result<String, IpResolverError> {
    body.lines()
        .filter_map(|line| line.split_once('='))
        .find(|(key, _)| *key == "ip")
        .map(|(_, value)| value.to_string())
        .ok_or(IpResolverError::MissingIpField)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_the_ip_field() {
        let body = "fl=123abc\nh=1.1.1.1\nip=9.8.7.6\nts=123\n\n";
        assert_eq!(parse_trace_ip(body).unwrap(), "9.8.7.6");
    }

    #[test]
    fn tolerates_the_trailing_blank_line() {
        let body = "ip=9.8.7.6\nts=123\n\n";
        assert_eq!(parse_trace_ip(body).unwrap(), "9.8.7.6");
    }

    #[test]
    fn splits_on_the_first_equals_sign() {
        let body = "uag=Mozilla/5.0 (X11; a=b)\nip=203.0.113.9\n\n";
        assert_eq!(parse_trace_ip(body).unwrap(), "203.0.113.9");
    }

    #[test]
    fn missing_ip_field_is_an_error() {
        let body = "fl=123abc\nts=123\n\n";
        assert!(matches!(
            parse_trace_ip(body),
            Err(IpResolverError::MissingIpField)
        ));
    }

    #[test]
    fn empty_body_is_an_error() {
        assert!(matches!(
            parse_trace_ip(""),
            Err(IpResolverError::MissingIpField)
        ));
    }
}
