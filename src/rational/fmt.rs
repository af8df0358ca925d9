use std::fmt;
use std::str::FromStr;

use super::*;

impl fmt::Display for RationalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl fmt::Debug for RationalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RationalNumber({}, {})", self.numerator, self.denominator)
    }
}

fn parse_error(s: &str) -> NumError {
    NumError::Parse {
        kind: "RationalNumber",
        text: s.to_string(),
    }
}

fn parse_int(s: &str, whole: &str) -> Result<i64, NumError> {
    s.trim().parse::<i64>().map_err(|_| parse_error(whole))
}

impl FromStr for RationalNumber {
    type Err = NumError;

    /// Parses `N/D`, `RationalNumber(N, D)` or a bare integer `N`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();

        if let Some(inner) = text
            .strip_prefix("RationalNumber(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let (n, d) = inner.split_once(',').ok_or_else(|| parse_error(s))?;
            return RationalNumber::new(parse_int(n, s)?, parse_int(d, s)?);
        }

        match text.split_once('/') {
            Some((n, d)) => RationalNumber::new(parse_int(n, s)?, parse_int(d, s)?),
            None => RationalNumber::new(parse_int(text, s)?, 1),
        }
    }
}
