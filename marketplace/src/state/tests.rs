use crate::errors::MarketplaceError;
use crate::state::{AccountAddress, ContractAddress, Listing, MarketplaceState, StateStore, TokenId};

fn seller() -> AccountAddress {
    AccountAddress::new("seller")
}

fn contract() -> ContractAddress {
    ContractAddress::new("basic_nft")
}

#[test]
fn default_listing_is_the_zero_value() {
    let listing = Listing::default();
    assert_eq!(listing.price, 0);
    assert!(!listing.is_listed());
}

#[test]
fn price_validation() {
    assert_eq!(
        Listing::validate_price(0),
        Err(MarketplaceError::PriceMustBeAboveZero)
    );
    assert!(Listing::validate_price(1).is_ok());
}

#[test]
fn stored_listing_reads_back() {
    let mut state = MarketplaceState::default();
    state.insert_listing(&contract(), TokenId(7), Listing::new(seller(), 42));

    assert_eq!(
        state.listing(&contract(), TokenId(7)),
        Some(&Listing::new(seller(), 42))
    );
    assert_eq!(state.listing(&contract(), TokenId(8)), None);
}

#[test]
fn remove_listing_returns_the_entry() {
    let mut state = MarketplaceState::default();
    state.insert_listing(&contract(), TokenId(7), Listing::new(seller(), 42));

    assert_eq!(
        state.remove_listing(&contract(), TokenId(7)),
        Some(Listing::new(seller(), 42))
    );
    assert_eq!(state.remove_listing(&contract(), TokenId(7)), None);
}

#[test]
fn proceeds_default_to_zero() {
    let state = MarketplaceState::default();
    assert_eq!(state.proceeds_of(&seller()), 0);
}

#[test]
fn commit_keeps_writes() {
    let store = StateStore::new();
    let txn = store.begin();
    store.write(|state| {
        state.proceeds.insert(seller(), 10);
    });
    store.commit(txn);

    assert_eq!(store.read(|state| state.proceeds_of(&seller())), 10);
}

#[test]
fn rollback_restores_the_snapshot() {
    let store = StateStore::new();
    store.write(|state| {
        state.proceeds.insert(seller(), 10);
    });

    let txn = store.begin();
    store.write(|state| {
        state.proceeds.insert(seller(), 99);
        state.insert_listing(&contract(), TokenId(0), Listing::new(seller(), 5));
    });
    store.rollback(txn);

    assert_eq!(store.read(|state| state.proceeds_of(&seller())), 10);
    assert_eq!(store.read(|state| state.listing(&contract(), TokenId(0)).cloned()), None);
}

#[test]
fn stores_do_not_share_state() {
    let a = StateStore::new();
    let b = StateStore::new();
    a.write(|state| {
        state.proceeds.insert(seller(), 10);
    });

    assert_eq!(b.read(|state| state.proceeds_of(&seller())), 0);
}
