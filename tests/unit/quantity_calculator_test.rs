// Tests for the unit/crate quantity calculator
//
// Properties tested:
// 1. Stepping never exceeds stock and never drops below one increment
// 2. Rejected steps leave the selection unchanged
// 3. Mode switches reset to the mode's seed
// 4. Text entry accepts `,` as decimal separator, reads the leading number
//    and never panics on oversized input

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::TestDataFactory;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use taptaze::cart::models::{StepDirection, TextInput};
use taptaze::cart::{PurchaseMode, QuantityCalculator};

#[test]
fn test_weight_product_steps_until_stock() {
    let calc = QuantityCalculator::default();
    let mut sel = calc.select(TestDataFactory::weight_product("p1", dec!(24.90), dec!(5)));
    assert_eq!(sel.quantity(), dec!(0.5));

    for _ in 0..3 {
        calc.step(&mut sel, StepDirection::Increase).unwrap();
    }
    assert_eq!(sel.quantity(), dec!(2.0));

    // 2.5 is still within stock
    assert_eq!(calc.step(&mut sel, StepDirection::Increase), Ok(dec!(2.5)));

    // Continue until the next step would exceed 5
    while calc.step(&mut sel, StepDirection::Increase).is_ok() {}
    assert_eq!(sel.quantity(), dec!(5));
    assert_eq!(sel.raw_text(), "5");

    let err = calc.step(&mut sel, StepDirection::Increase).unwrap_err();
    assert!(err.is_soft());
    assert_eq!(sel.quantity(), dec!(5));
}

#[test]
fn test_switch_to_crate_mode_resets_to_one_crate() {
    let calc = QuantityCalculator::new(20);
    let mut sel = calc.select(TestDataFactory::weight_product("p1", dec!(12.50), dec!(100)));
    calc.step(&mut sel, StepDirection::Increase).unwrap();
    calc.step(&mut sel, StepDirection::Increase).unwrap();

    calc.switch_mode(&mut sel, PurchaseMode::Crate);
    assert_eq!(sel.mode(), PurchaseMode::Crate);
    assert_eq!(sel.quantity(), Decimal::ONE);
    assert_eq!(sel.raw_text(), "1");
    assert_eq!(calc.total_price(&sel), Some(dec!(12.50) * dec!(20)));

    calc.switch_mode(&mut sel, PurchaseMode::Unit);
    assert_eq!(sel.quantity(), dec!(0.5));
    assert_eq!(calc.total_price(&sel), Some(dec!(6.25)));
}

#[test]
fn test_set_from_text_accepts_comma_decimal() {
    let calc = QuantityCalculator::default();
    let mut sel = calc.select(TestDataFactory::weight_product("p1", dec!(10), dec!(5)));

    assert_eq!(calc.set_from_text(&mut sel, "3,5"), TextInput::Accepted(dec!(3.5)));
    assert_eq!(sel.quantity(), dec!(3.5));
    assert_eq!(sel.raw_text(), "3,5");

    assert_eq!(calc.set_from_text(&mut sel, "abc"), TextInput::Pending);
    assert_eq!(sel.quantity(), dec!(3.5));
    assert_eq!(sel.raw_text(), "abc");

    // Over stock: silently ignored, text still shown
    assert_eq!(calc.set_from_text(&mut sel, "5,5"), TextInput::OverStock(dec!(5.5)));
    assert_eq!(sel.quantity(), dec!(3.5));
    assert_eq!(sel.raw_text(), "5,5");
}

#[test]
fn test_set_from_text_reads_leading_number() {
    let calc = QuantityCalculator::default();
    let mut sel = calc.select(TestDataFactory::weight_product("p1", dec!(10), dec!(5)));

    assert_eq!(calc.set_from_text(&mut sel, "2kg"), TextInput::Accepted(dec!(2)));
    assert_eq!(sel.quantity(), dec!(2));
    assert_eq!(sel.raw_text(), "2kg");

    // Mid-typing a second decimal point keeps the number entered so far
    assert_eq!(calc.set_from_text(&mut sel, "1.5."), TextInput::Accepted(dec!(1.5)));
    assert_eq!(sel.quantity(), dec!(1.5));
}

#[test]
fn test_huge_crate_count_is_over_stock() {
    let calc = QuantityCalculator::new(20);
    let mut sel = calc.select(TestDataFactory::weight_product("p1", dec!(12.50), dec!(50)));
    calc.switch_mode(&mut sel, PurchaseMode::Crate);

    let input = calc.set_from_text(&mut sel, "79228162514264337593543950335");
    assert_eq!(input, TextInput::OverStock(Decimal::MAX));
    assert_eq!(sel.quantity(), Decimal::ONE);
    assert_eq!(sel.raw_text(), "79228162514264337593543950335");
    assert!(calc.resolve_for_cart(&sel).is_ok());
}

#[test]
fn test_crate_text_entry_checks_base_units() {
    let calc = QuantityCalculator::new(20);
    let mut sel = calc.select(TestDataFactory::piece_product("p1", dec!(3), dec!(50)));
    calc.switch_mode(&mut sel, PurchaseMode::Crate);

    assert_eq!(calc.set_from_text(&mut sel, "2"), TextInput::Accepted(dec!(2)));
    assert_eq!(calc.set_from_text(&mut sel, "3"), TextInput::OverStock(dec!(3)));
    assert_eq!(sel.quantity(), dec!(2));
}

#[test]
fn test_resolve_for_cart_in_crate_mode() {
    let calc = QuantityCalculator::new(20);
    let mut sel = calc.select(TestDataFactory::weight_product("p1", dec!(12.50), dec!(45)));
    calc.switch_mode(&mut sel, PurchaseMode::Crate);
    calc.step(&mut sel, StepDirection::Increase).unwrap();

    let line = calc.resolve_for_cart(&sel).unwrap();
    assert_eq!(line.crates, Some(dec!(2)));
    assert_eq!(line.quantity, dec!(40));
    assert_eq!(line.total_price, dec!(500));
    assert_eq!(
        line.summary(taptaze::core::Currency::TRY),
        "2 crates of Ürün p1: 40 KG added (₺500.00)"
    );
}

#[test]
fn test_resolve_for_cart_rejects_out_of_stock_hard() {
    let calc = QuantityCalculator::default();

    let mut sel = calc.select(TestDataFactory::piece_product("p1", dec!(3), dec!(4)));
    assert_eq!(calc.set_from_text(&mut sel, "4"), TextInput::Accepted(dec!(4)));
    assert!(calc.resolve_for_cart(&sel).is_ok());

    // Seeded quantity of a sold-out product cannot reach the cart
    let empty = calc.select(TestDataFactory::piece_product("p2", dec!(3), dec!(0)));
    let err = calc.resolve_for_cart(&empty).unwrap_err();
    assert!(!err.is_soft());
    assert_eq!(
        err.to_string(),
        "Insufficient stock: requested 1 ADET, remaining stock 0 ADET"
    );
}

proptest! {
    /// Property: any sequence of steps stays within [increment, max(stock, seed)]
    #[test]
    fn test_steps_stay_within_bounds(
        weight in any::<bool>(),
        crate_mode in any::<bool>(),
        stock_halves in 0u32..400,
        presses in prop::collection::vec(any::<bool>(), 0..60)
    ) {
        let calc = QuantityCalculator::new(20);
        let stock = Decimal::new(stock_halves as i64 * 5, 1);
        let product = if weight {
            TestDataFactory::weight_product("p1", dec!(7.5), stock)
        } else {
            TestDataFactory::piece_product("p1", dec!(7.5), stock)
        };

        let mut sel = calc.select(product);
        if crate_mode {
            calc.switch_mode(&mut sel, PurchaseMode::Crate);
        }
        let increment = calc.increment(&sel);
        let seed = sel.quantity();

        for up in presses {
            let before = sel.quantity();
            let direction = if up { StepDirection::Increase } else { StepDirection::Decrease };

            match calc.step(&mut sel, direction) {
                Ok(q) => {
                    prop_assert_eq!(q, sel.quantity());
                    if up {
                        prop_assert!(calc.base_quantity(&sel, q).is_some_and(|base| base <= stock));
                    }
                }
                Err(e) => {
                    prop_assert!(up, "decreases are never rejected");
                    prop_assert!(e.is_soft());
                    prop_assert_eq!(sel.quantity(), before);
                }
            }

            prop_assert!(sel.quantity() >= increment);
            let ceiling = stock.max(calc.base_quantity(&sel, seed).unwrap_or(stock));
            prop_assert!(calc.base_quantity(&sel, sel.quantity()).is_some_and(|base| base <= ceiling));
        }
    }

    /// Property: the resolved base quantity is quantity × crate size in crate mode
    #[test]
    fn test_resolved_quantity_and_price(
        crates in 1u32..5,
        price_cents in 1i64..100_000
    ) {
        let calc = QuantityCalculator::new(20);
        let price = Decimal::new(price_cents, 2);
        let mut sel = calc.select(TestDataFactory::piece_product("p1", price, dec!(100)));
        calc.switch_mode(&mut sel, PurchaseMode::Crate);
        prop_assert_eq!(calc.set_from_text(&mut sel, &crates.to_string()), TextInput::Accepted(Decimal::from(crates)));

        let line = calc.resolve_for_cart(&sel).unwrap();
        prop_assert_eq!(line.quantity, Decimal::from(crates * 20));
        prop_assert_eq!(line.total_price, price * Decimal::from(20) * Decimal::from(crates));
    }
}
