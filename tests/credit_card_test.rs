use rust_decimal_macros::dec;

use bank_cards::card::{BankCard, Card, CardCommand, CardError, CardEvent, CardKind};
use bank_cards::portfolio::total_balance;
use bank_cards::StoreEvent;

#[test]
fn credit_card_aggregate_test() {
    let credit_card = Card::credit("123456", dec!(5000.0), dec!(2000.0)).unwrap();
    assert_eq!(credit_card.kind(), CardKind::Credit { limit: dec!(2000) });

    // Cannot withdraw negative amount
    let result = credit_card.withdraw(dec!(-10));
    assert_eq!(result.err().unwrap().to_string(), CardError::NonPositiveAmount.to_string());

    // Cannot deposit negative amount
    let result = credit_card.deposit(dec!(-10));
    assert_eq!(result.err().unwrap().to_string(), CardError::NonPositiveAmount.to_string());

    // Withdrawal of 6500: balance goes below zero, within the credit line
    assert_eq!(credit_card.withdraw(dec!(6500)), Ok(dec!(-1500.0)));

    // Only 500 left on the credit line
    let result = credit_card.withdraw(dec!(500.01));
    assert_eq!(result.err().unwrap().to_string(), "Credit limit exceeded!");
    assert_eq!(credit_card.balance(), dec!(-1500));

    assert_eq!(credit_card.withdraw(dec!(500)), Ok(dec!(-2000)));

    // Deposit brings the balance back up
    let store_events: Vec<StoreEvent<CardEvent>> = credit_card
        .handle_command(CardCommand::Deposit { amount: dec!(2500) })
        .unwrap();
    assert_eq!(
        store_events[0].payload(),
        &CardEvent::Deposited {
            amount: dec!(2500),
            balance: dec!(500)
        }
    );
    assert_eq!(store_events[0].sequence_number(), &3);
    assert_eq!(credit_card.balance(), dec!(500));
}

#[test]
fn debit_card_aggregate_test() {
    let debit_card = Card::debit("9876543", dec!(3000.0));

    assert_eq!(debit_card.deposit(dec!(500)), Ok(dec!(3500)));

    let result = debit_card.withdraw(dec!(3500.5));
    assert_eq!(result.err().unwrap().to_string(), "Insufficient balance!");

    assert_eq!(debit_card.withdraw(dec!(3500)), Ok(dec!(0)));
    assert_eq!(debit_card.balance(), dec!(0));
}

#[test]
fn total_balance_across_cards_test() {
    let credit_card = Card::credit("123456", dec!(5000.0), dec!(2000.0)).unwrap();
    let debit_card = Card::debit("9876543", dec!(3000.0));

    credit_card.withdraw(dec!(100)).unwrap();
    credit_card.withdraw(dec!(200)).unwrap();

    let cards: Vec<&dyn BankCard> = vec![&credit_card, &debit_card];
    let expected = credit_card.balance() + debit_card.balance();

    assert_eq!(total_balance(cards), expected);
    assert_eq!(expected, dec!(7700));
}
