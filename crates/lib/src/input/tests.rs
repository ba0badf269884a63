use super::{ErrorKind, Input};

#[test]
fn test_eat_literal() {
    let mut p = Input::new(b"mul(2,4)");

    assert!(p.eat(b"mul("));
    assert_eq!(p.index(), 4);
    assert_eq!(p.as_data(), b"2,4)");

    // Mismatch leaves the cursor untouched.
    assert!(!p.eat(b"mul("));
    assert_eq!(p.index(), 4);
}

#[test]
fn test_eat_case_sensitive() {
    let mut p = Input::new(b"Mul(2,4)");
    assert!(!p.eat(b"mul("));
    assert_eq!(p.index(), 0);
}

#[test]
fn test_advance_saturates() {
    let mut p = Input::new(b"ab");
    p.advance(10);
    assert!(p.is_empty());
    assert_eq!(p.index(), 2);
}

#[test]
fn test_integer_digit_run() {
    let mut p = Input::new(b"123abc");
    assert_eq!(p.try_next::<u32>().unwrap(), Some(123));
    assert_eq!(p.index(), 3);
    assert_eq!(p.try_next::<u32>().unwrap(), None);
}

#[test]
fn test_integer_no_whitespace_skip() {
    let mut p = Input::new(b" 1");
    assert_eq!(p.try_next::<u32>().unwrap(), None);
    assert_eq!(p.index(), 0);
}

#[test]
fn test_signed_integer() {
    let mut p = Input::new(b"-42");
    assert_eq!(p.try_next::<i32>().unwrap(), Some(-42));

    // Unsigned types do not accept a sign.
    let mut p = Input::new(b"-42");
    assert_eq!(p.try_next::<u32>().unwrap(), None);
    assert_eq!(p.index(), 0);

    // A lone sign is not a number.
    let mut p = Input::new(b"-x");
    assert_eq!(p.try_next::<i32>().unwrap(), None);
    assert_eq!(p.index(), 0);
}

#[test]
fn test_integer_overflow() {
    let mut p = Input::new(b"18446744073709551615");
    assert_eq!(p.try_next::<u64>().unwrap(), Some(u64::MAX));

    let mut p = Input::new(b"111111111111111111111");
    let e = p.try_next::<u64>().unwrap_err();
    assert!(matches!(e.kind(), ErrorKind::NotInteger(..)));
}
