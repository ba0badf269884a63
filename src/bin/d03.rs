use lib::cli::{error_context, Bencher, Mode, Opts};
use lib::prelude::*;
use thiserror::Error;

#[derive(Debug, Error)]
enum ScanError {
    #[error("product of {0} and {1} overflows")]
    Product(u64, u64),
    #[error("sum overflows adding {0}")]
    Sum(u64),
}

fn main() -> Result<()> {
    let opts = Opts::parse()?;
    let (input, path) = lib::input!("d03.txt");

    match opts.mode {
        Mode::Default => {
            let (total, enabled) = scan(input).map_err(|e| error_context(path, input, e))?;
            log::debug!("sum over all multiplications: {total}");
            println!("{enabled}");
        }
        Mode::Bench => {
            Bencher::new().iter(&opts, Some((161, 8)), || scan(input))?;
        }
    }

    Ok(())
}

/// Scan a corrupted instruction stream for `mul(A,B)` instructions, gated by
/// `do()` / `don't()` toggles.
///
/// Returns `(total, enabled)` where `total` sums every well-formed
/// multiplication and `enabled` only sums those matched while multiplications
/// are enabled. The toggle starts out enabled and persists across the whole
/// stream.
///
/// A `mul(` prefix whose operands don't validate is abandoned where the match
/// failed; scanning resumes at the next unconsumed character and the toggle
/// is left alone. Matching is exact, so interior whitespace invalidates an
/// instruction.
///
/// Arithmetic is checked `u64`: operands of up to 20 digits parse, anything
/// past `u64::MAX` is reported as an input error, and an overflowing product
/// or running sum is the only way the scan itself can fail.
fn scan(mut input: Input) -> Result<(u64, u64)> {
    let mut total = 0u64;
    let mut enabled = 0u64;

    let mut on = true;

    while !input.is_empty() {
        if input.eat(b"do()") {
            on = true;
            continue;
        }

        if input.eat(b"don't()") {
            on = false;
            continue;
        }

        if input.eat(b"mul(") {
            let Some(a) = input.try_next::<u64>()? else {
                continue;
            };

            if !input.eat(b",") {
                continue;
            }

            let Some(b) = input.try_next::<u64>()? else {
                continue;
            };

            if !input.eat(b")") {
                continue;
            }

            let product = a.checked_mul(b).ok_or(ScanError::Product(a, b))?;
            total = total.checked_add(product).ok_or(ScanError::Sum(product))?;

            if on {
                // Bounded by the checked total.
                enabled += product;
            }

            continue;
        }

        input.advance(1);
    }

    Ok((total, enabled))
}

#[cfg(test)]
mod tests {
    use lib::Input;

    use super::scan;

    fn sums(text: &'static str) -> (u64, u64) {
        scan(Input::new(text.as_bytes())).unwrap()
    }

    #[test]
    fn test_empty() {
        assert_eq!(sums(""), (0, 0));
    }

    #[test]
    fn test_noise_only() {
        assert_eq!(sums("xyz[12,34]+what()*&do(n't"), (0, 0));
    }

    #[test]
    fn test_single() {
        assert_eq!(sums("mul(2,4)"), (8, 8));
    }

    #[test]
    fn test_disable() {
        assert_eq!(sums("mul(2,4)don't()mul(3,3)"), (17, 8));
    }

    #[test]
    fn test_reenable() {
        assert_eq!(sums("mul(2,4)don't()mul(3,3)do()mul(5,5)"), (42, 33));
    }

    #[test]
    fn test_toggles_only() {
        assert_eq!(sums("do()do()do()"), (0, 0));
        assert_eq!(sums("don't()do()don't()"), (0, 0));
    }

    #[test]
    fn test_malformed() {
        assert_eq!(sums("mul(4*"), (0, 0));
        assert_eq!(sums("mul(6,9!"), (0, 0));
        assert_eq!(sums("mul ( 2 , 4 )"), (0, 0));
        assert_eq!(sums("mul(,4)"), (0, 0));
        assert_eq!(sums("mul(4,)"), (0, 0));
        assert_eq!(sums("mul[3,7]"), (0, 0));
        assert_eq!(sums("mul("), (0, 0));
        assert_eq!(sums("mul(2,4"), (0, 0));
    }

    #[test]
    fn test_resume_after_consumed() {
        // The abandoned prefix is not rescanned, but the instruction right
        // after it is.
        assert_eq!(sums("mul(mul(2,3)"), (6, 6));
        assert_eq!(sums("mul(2,mul(3,4))"), (12, 12));
        assert_eq!(sums("mulmul(3,3)"), (9, 9));
    }

    #[test]
    fn test_malformed_leaves_toggle() {
        assert_eq!(sums("don't()mul(3,x)do()mul(2,2)"), (4, 4));
        assert_eq!(sums("mul(2,#don't()mul(3,3)"), (9, 0));
    }

    #[test]
    fn test_toggle_spans_lines() {
        assert_eq!(sums("don't()\nmul(2,2)"), (4, 0));
    }

    #[test]
    fn test_composite() {
        let text = "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";
        assert_eq!(sums(text), (161, 8));

        let text = "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)do()?mul(8,5))";
        assert_eq!(sums(text), (161, 48));
    }

    #[test]
    fn test_idempotent() {
        let input = Input::new(b"mul(2,4)don't()mul(3,3)");
        assert_eq!(scan(input).unwrap(), scan(input).unwrap());
    }

    #[test]
    fn test_overflow() {
        // The largest product that still fits.
        assert_eq!(
            sums("mul(4294967295,4294967295)"),
            (18446744065119617025, 18446744065119617025)
        );

        // Operand past u64::MAX.
        assert!(scan(Input::new(b"mul(111111111111111111111,1)")).is_err());

        // Product overflow.
        assert!(scan(Input::new(b"mul(18446744073709551615,2)")).is_err());

        // Sum overflow.
        assert!(scan(Input::new(
            b"mul(18446744073709551615,1)mul(18446744073709551615,1)"
        ))
        .is_err());
    }
}
