use rentiolib::{money, observer::Noop};
use rust_decimal::Decimal;

#[test]
fn parse_brazilian_currency() {
    assert_eq!(
        money::parse_brl("R$1.234,56", &Noop),
        Decimal::from_str_exact("1234.56").unwrap()
    );
    assert_eq!(
        money::parse_brl("R$35,00", &Noop),
        Decimal::from_str_exact("35.00").unwrap()
    );
    assert_eq!(money::parse_brl("R$0,00", &Noop), Decimal::ZERO);
}

#[test]
fn malformed_currency_defaults_to_zero() {
    assert_eq!(money::parse_brl("", &Noop), Decimal::ZERO);
    assert_eq!(money::parse_brl("R$", &Noop), Decimal::ZERO);
    assert_eq!(money::parse_brl("abc", &Noop), Decimal::ZERO);
    assert_eq!(money::parse_brl("R$12,34,56", &Noop), Decimal::ZERO);
}

#[test]
fn format_brazilian_currency() {
    let v = |s| Decimal::from_str_exact(s).unwrap();
    assert_eq!(money::format_brl(v("1234.56")), "R$1.234,56");
    assert_eq!(money::format_brl(v("1234567.5")), "R$1.234.567,50");
    assert_eq!(money::format_brl(v("7")), "R$7,00");
    assert_eq!(money::format_brl(Decimal::ZERO), "R$0,00");
    assert_eq!(money::format_brl(v("-42.1")), "R$-42,10");
}
