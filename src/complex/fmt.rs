use std::fmt;
use std::str::FromStr;

use super::*;

impl fmt::Display for ComplexNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) + ({})i", self.real, self.imaginary)
    }
}

impl fmt::Debug for ComplexNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComplexNumber({:?}, {:?})", self.real, self.imaginary)
    }
}

fn parse_error(s: &str) -> NumError {
    NumError::Parse {
        kind: "ComplexNumber",
        text: s.to_string(),
    }
}

// Parses one part, turning a rational parse error
// into an error about the whole text.
fn parse_part(part: &str, whole: &str) -> Result<RationalNumber, NumError> {
    part.parse::<RationalNumber>().map_err(|e| match e {
        NumError::Parse { .. } => parse_error(whole),
        e => e,
    })
}

impl FromStr for ComplexNumber {
    type Err = NumError;

    /// Parses `(N1/D1) + (N2/D2)i` or
    /// `ComplexNumber(RationalNumber(N1, D1), RationalNumber(N2, D2))`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();

        if let Some(inner) = text
            .strip_prefix("ComplexNumber(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            // the real part ends at the first closing paren
            let end = inner.find(')').ok_or_else(|| parse_error(s))?;
            let (real, rest) = inner.split_at(end + 1);
            let imaginary = rest.trim_start().strip_prefix(',').ok_or_else(|| parse_error(s))?;
            return Ok(Self::from_parts(parse_part(real, s)?, parse_part(imaginary, s)?));
        }

        let inner = text
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(")i"))
            .ok_or_else(|| parse_error(s))?;
        let (real, imaginary) = inner.split_once(") + (").ok_or_else(|| parse_error(s))?;
        Ok(Self::from_parts(parse_part(real, s)?, parse_part(imaginary, s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: i64, d: i64) -> RationalNumber {
        RationalNumber::new(n, d).unwrap()
    }

    #[test]
    fn display_test() {
        assert_eq!(ComplexNumber::new(1, 2).unwrap().to_string(), "(1/1) + (2/1)i");
        assert_eq!(
            ComplexNumber::from_parts(q(-1, 2), q(3, 4)).to_string(),
            "(-1/2) + (3/4)i"
        );
    }

    #[test]
    fn debug_test() {
        assert_eq!(
            format!("{:?}", ComplexNumber::from_parts(q(-1, 2), q(3, 4))),
            "ComplexNumber(RationalNumber(-1, 2), RationalNumber(3, 4))"
        );
    }

    #[test]
    fn parse_test() {
        let expected = ComplexNumber::from_parts(q(-1, 2), q(3, 4));
        let samples = vec![
            "(-1/2) + (3/4)i",
            "  (-2/4) + (6/8)i ",
            "ComplexNumber(RationalNumber(-1, 2), RationalNumber(3, 4))",
            "ComplexNumber(RationalNumber(-1,2),RationalNumber(3,4))",
        ];

        for s in samples.into_iter() {
            assert_eq!(s.parse::<ComplexNumber>().unwrap(), expected, "parsing {:?}", s);
        }
    }

    #[test]
    fn parse_failures() {
        assert_eq!("(1/0) + (1/1)i".parse::<ComplexNumber>(), Err(NumError::ZeroDenominator));
        for s in [
            "",
            "1 + 2i",
            "(1/2) - (3/4)i",
            "(1/2) + (3/4)",
            "ComplexNumber(RationalNumber(1, 2))",
            "ComplexNumber(RationalNumber(1, 2), x)",
        ] {
            assert!(
                matches!(s.parse::<ComplexNumber>(), Err(NumError::Parse { .. })),
                "parsing {:?} should fail",
                s
            );
        }
    }
}
