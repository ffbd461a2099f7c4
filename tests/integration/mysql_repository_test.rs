// MySQL transaction repository against a real database
//
// Runs only when TEST_DATABASE_URL or DATABASE_URL points at a MySQL server.

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;
use payee::core::{AppError, Currency, PaymentPeriod, PeriodUnit};
use payee::processors::{ItemKind, MySqlTransactionRepository, ProcessorKind, TransactionRepository};
use rust_decimal_macros::dec;

fn quarterly_plan() -> SeedItem {
    SeedItem {
        product: "team-plan",
        price: dec!(49.5),
        currency: Currency::EUR,
        kind: ItemKind::Subscription,
        due_payment_date: date(2026, 3, 31),
        period_unit: PeriodUnit::Month,
        period_count: 3,
    }
}

#[tokio::test]
async fn test_find_by_id_decodes_joined_row() {
    let Some(pool) = create_test_pool().await else {
        return;
    };
    let (transaction_id, item_id) =
        seed_transaction(&pool, ProcessorKind::PayPal, quarterly_plan()).await;
    let repository = MySqlTransactionRepository::new(pool);

    let transaction = repository.find_by_id(transaction_id).await.unwrap().unwrap();

    assert_eq!(transaction.id, transaction_id);
    assert_eq!(transaction.processor, ProcessorKind::PayPal);
    assert_eq!(transaction.item.id, item_id);
    assert_eq!(transaction.item.product, "team-plan");
    assert_eq!(transaction.item.price, dec!(49.5));
    assert_eq!(transaction.item.currency, Currency::EUR);
    assert_eq!(transaction.item.kind, ItemKind::Subscription);
    assert_eq!(transaction.item.due_payment_date, date(2026, 3, 31));
    assert_eq!(
        transaction.item.payment_period,
        PaymentPeriod::new(PeriodUnit::Month, 3)
    );
    assert_eq!(transaction.item.subscription_reference, None);
}

#[tokio::test]
async fn test_find_by_id_unknown_transaction() {
    let Some(pool) = create_test_pool().await else {
        return;
    };
    let repository = MySqlTransactionRepository::new(pool);

    assert!(repository.find_by_id(-1).await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_item_persists_billing_state() {
    let Some(pool) = create_test_pool().await else {
        return;
    };
    let (transaction_id, _) =
        seed_transaction(&pool, ProcessorKind::Recurly, quarterly_plan()).await;
    let repository = MySqlTransactionRepository::new(pool);

    let mut item = repository
        .find_by_id(transaction_id)
        .await
        .unwrap()
        .unwrap()
        .item;
    item.due_payment_date = date(2026, 4, 1);
    item.subscription_reference = Some("sub-8812".to_string());
    repository.update_item(&item).await.unwrap();

    let stored = repository.find_by_id(transaction_id).await.unwrap().unwrap();
    assert_eq!(stored.item.due_payment_date, date(2026, 4, 1));
    assert_eq!(stored.item.subscription_reference.as_deref(), Some("sub-8812"));

    // Saving the same state again is not an error
    repository.update_item(&stored.item).await.unwrap();
}

#[tokio::test]
async fn test_update_unknown_item_is_not_found() {
    let Some(pool) = create_test_pool().await else {
        return;
    };
    let repository = MySqlTransactionRepository::new(pool);
    let mut item = TestDataFactory::transaction(
        1,
        ProcessorKind::DalPay,
        ItemKind::Purchase,
        date(2026, 3, 15),
    )
    .item;
    item.id = -1;

    let result = repository.update_item(&item).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}
