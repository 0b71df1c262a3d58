//! Dashboard tokens.
//!
//! Tokens are plain text with no integrity protection. Login emits
//! `<email>#<expiry_ms>`, while the dashboard reads the second space-separated
//! piece of `Authorization` and splits it on `.`. The two separators differ, so
//! a token returned by login does not normally pass the dashboard check.

/// Lifetime of an issued token.
pub const TOKEN_TTL_MS: i64 = 3_600_000;

/// Separator placed between email and expiry by [`issue`].
pub const ISSUE_SEPARATOR: char = '#';

/// Separator the dashboard splits the token on.
pub const CLAIM_SEPARATOR: char = '.';

/// Build the login token for `email`, expiring [`TOKEN_TTL_MS`] after `now_ms`.
pub fn issue(email: &str, now_ms: i64) -> String {
    format!("{email}{ISSUE_SEPARATOR}{}", now_ms + TOKEN_TTL_MS)
}

/// What the dashboard reads out of an `Authorization` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardClaim<'a> {
    pub email: &'a str,
    /// `None` when the expiry piece is missing or has no leading digits.
    pub exp: Option<i128>,
}

impl<'a> DashboardClaim<'a> {
    /// Returns `None` when the header has no second space-separated piece.
    pub fn from_header(header: &'a str) -> Option<Self> {
        let token = header.split(' ').nth(1)?;
        let mut parts = token.split(CLAIM_SEPARATOR);
        let email = parts.next().unwrap_or_default();
        let exp = parts.next().and_then(parse_int_prefix);
        Some(Self { email, exp })
    }

    /// Strictly before expiry; an unparseable expiry is never valid.
    pub fn is_valid_at(&self, now_ms: i64) -> bool {
        self.exp.is_some_and(|exp| i128::from(now_ms) < exp)
    }
}

/// Lenient base-10 integer parse: skips leading whitespace, accepts one sign,
/// reads digits until the first non-digit. Saturates instead of overflowing.
pub fn parse_int_prefix(s: &str) -> Option<i128> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i128 = 0;
    let mut seen_digit = false;
    for b in rest.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        value = value
            .saturating_mul(10)
            .saturating_add(i128::from(b - b'0'));
    }

    seen_digit.then_some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_appends_one_hour_expiry() {
        assert_eq!(issue("a@b.com", 1_000), "a@b.com#3601000");
    }

    #[test]
    fn claim_splits_on_space_then_dot() {
        let claim = DashboardClaim::from_header("Bearer alice.1700000000000").unwrap();
        assert_eq!(claim.email, "alice");
        assert_eq!(claim.exp, Some(1_700_000_000_000));
    }

    #[test]
    fn header_without_second_piece_is_malformed() {
        assert_eq!(DashboardClaim::from_header("Bearer"), None);
        assert_eq!(DashboardClaim::from_header(""), None);
    }

    #[test]
    fn issued_token_does_not_yield_an_expiry() {
        let header = format!("Bearer {}", issue("user@example.com", 0));
        let claim = DashboardClaim::from_header(&header).unwrap();
        assert_eq!(claim.email, "user@example");
        assert_eq!(claim.exp, None);
        assert!(!claim.is_valid_at(0));
    }

    #[test]
    fn missing_expiry_piece_is_never_valid() {
        let claim = DashboardClaim::from_header("Bearer alice").unwrap();
        assert_eq!(claim.exp, None);
        assert!(!claim.is_valid_at(i64::MIN));
    }

    #[test]
    fn validity_is_strictly_before_expiry() {
        let claim = DashboardClaim::from_header("Bearer bob.500").unwrap();
        assert!(claim.is_valid_at(499));
        assert!(!claim.is_valid_at(500));
        assert!(!claim.is_valid_at(501));
    }

    #[test]
    fn int_prefix_parsing_is_lenient() {
        assert_eq!(parse_int_prefix("42"), Some(42));
        assert_eq!(parse_int_prefix("  42abc"), Some(42));
        assert_eq!(parse_int_prefix("-7"), Some(-7));
        assert_eq!(parse_int_prefix("+7"), Some(7));
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("-"), None);
        assert_eq!(parse_int_prefix("9".repeat(60).as_str()), Some(i128::MAX));
    }
}
