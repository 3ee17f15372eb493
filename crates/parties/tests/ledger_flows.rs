use rust_decimal_macros::dec;
use walletbook_core::{Amount, Currency, ErrorKind, LedgerError};
use walletbook_observability::{LogFormat, TracingConfig};
use walletbook_parties::Person;
use walletbook_products::{PriceList, Product, ProductType};
use walletbook_wallets::Wallet;

fn init_logs() {
    // Pretty, debug-level output so `cargo test -- --nocapture` shows every
    // balance mutation.
    walletbook_observability::init_with(&TracingConfig {
        filter: "debug".to_string(),
        format: LogFormat::Pretty,
        with_target: true,
    });
}

fn funded(name: &str, code: &str, balance: Amount) -> Person {
    let mut person = Person::from_code(name, code).expect("valid currency code");
    person
        .wallet_mut()
        .set_balance(balance)
        .expect("non-negative balance");
    person
}

fn catalogue_item(name: &str, prices: &[(&str, Amount)], type_name: &str) -> Product {
    let prices = PriceList::try_from(prices).expect("valid price list");
    Product::from_codes(name, prices, type_name).expect("valid product type")
}

#[test]
fn billing_layer_charges_net_price_and_computes_tax_separately() {
    init_logs();
    let mut buyer = funded("buyer", "EUR", dec!(50));
    let wine = catalogue_item("Bordeaux", &[("USD", dec!(25)), ("EUR", dec!(20))], "alcohol");

    buyer.buy_product(&wine).unwrap();
    let tax_due = wine.price(buyer.wallet().currency()).unwrap() * wine.tva();

    assert_eq!(buyer.wallet().balance(), dec!(30));
    assert_eq!(tax_due, dec!(4));
    assert_eq!(wine.list_currencies(), vec![Currency::Usd, Currency::Eur]);
}

#[test]
fn shared_product_can_be_bought_by_several_people() {
    init_logs();
    let bread = catalogue_item("Bread", &[("USD", dec!(2.5))], "food");
    let mut alice = funded("alice", "USD", dec!(5));
    let mut bob = funded("bob", "USD", dec!(2.5));
    let mut carol = funded("carol", "EUR", dec!(100));

    alice.buy_product(&bread).unwrap();
    bob.buy_product(&bread).unwrap();
    let err = carol.buy_product(&bread).unwrap_err();

    assert_eq!(alice.wallet().balance(), dec!(2.5));
    assert_eq!(bob.wallet().balance(), Amount::ZERO);
    assert_eq!(err.kind(), ErrorKind::CurrencyMismatch);
    assert_eq!(carol.wallet().balance(), dec!(100));
}

#[test]
fn transfer_then_divide_conserves_money() {
    init_logs();
    let mut payer = funded("payer", "USD", dec!(12));
    let mut pool = funded("pool", "USD", Amount::ZERO);
    let mut first = funded("first", "USD", dec!(1));
    let mut second = funded("second", "USD", dec!(1));
    let mut third = funded("third", "USD", dec!(1));

    payer.transfer_fund(dec!(9), &mut pool).unwrap();
    pool.divide_wallet(&mut [&mut first, &mut second, &mut third])
        .unwrap();

    assert_eq!(payer.wallet().balance(), dec!(3));
    assert!(!pool.has_fund());
    for person in [&first, &second, &third] {
        assert_eq!(person.wallet().balance(), dec!(4));
    }
}

#[test]
fn replacing_a_wallet_switches_currency_for_later_operations() {
    init_logs();
    let mut person = funded("switcher", "USD", dec!(10));
    let mut friend = funded("friend", "EUR", Amount::ZERO);

    assert_eq!(
        person.transfer_fund(dec!(5), &mut friend).unwrap_err().kind(),
        ErrorKind::CurrencyMismatch
    );

    let mut euros = Wallet::new(Currency::Eur);
    euros.add_fund(dec!(7)).unwrap();
    person.set_wallet(euros);
    person.transfer_fund(dec!(5), &mut friend).unwrap();

    assert_eq!(person.wallet().balance(), dec!(2));
    assert_eq!(friend.wallet().balance(), dec!(5));
}

#[test]
fn invalid_inputs_are_rejected_at_the_boundary() {
    init_logs();
    assert_eq!(
        Person::from_code("x", "JPY").unwrap_err(),
        LedgerError::InvalidCurrency("JPY".to_string())
    );
    assert_eq!(
        Wallet::from_code("NOT_A_CURRENCY").unwrap_err().kind(),
        ErrorKind::InvalidCurrency
    );

    let prices = PriceList::try_from([(Currency::Usd, dec!(1))]).unwrap();
    assert_eq!(
        Product::from_codes("gadget", prices, "invalid").unwrap_err().kind(),
        ErrorKind::InvalidProductType
    );

    let prices: &[(&str, Amount)] = &[("USD", dec!(-5))];
    assert_eq!(
        PriceList::try_from(prices).unwrap_err().kind(),
        ErrorKind::InvalidAmount
    );
}

#[test]
fn tax_rate_follows_category_changes() {
    init_logs();
    let prices = PriceList::try_from([(Currency::Usd, dec!(100))]).unwrap();
    let mut laptop = Product::new("laptop", prices, ProductType::Tech);
    assert_eq!(laptop.tva(), dec!(0.10));

    laptop.set_type(ProductType::Alcohol);
    assert_eq!(laptop.tva(), dec!(0.20));
    assert_eq!(laptop.gross_price(Currency::Usd), Ok(dec!(120)));
}
