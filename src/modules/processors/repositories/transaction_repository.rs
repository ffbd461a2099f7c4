use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::MySqlPool;
use tokio::sync::RwLock;

use crate::core::{AppError, Currency, PaymentPeriod, PeriodUnit, Result};
use crate::modules::processors::models::{Item, ItemKind, ProcessorKind, Transaction};

/// Storage of transactions and the items they bill
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// Find a transaction, with its item, by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Transaction>>;

    /// Persist the billing state of an item
    async fn update_item(&self, item: &Item) -> Result<()>;
}

#[derive(Debug, sqlx::FromRow)]
struct TransactionRow {
    id: i64,
    processor: i32,
    created_at: DateTime<Utc>,
    item_id: i64,
    product: String,
    price: Decimal,
    currency: Currency,
    kind: ItemKind,
    due_payment_date: NaiveDate,
    period_unit: PeriodUnit,
    period_count: u16,
    subscription_reference: Option<String>,
}

impl TryFrom<TransactionRow> for Transaction {
    type Error = AppError;

    fn try_from(row: TransactionRow) -> Result<Self> {
        let processor = ProcessorKind::try_from(row.processor).map_err(AppError::Internal)?;

        Ok(Transaction {
            id: row.id,
            processor,
            created_at: row.created_at,
            item: Item {
                id: row.item_id,
                product: row.product,
                price: row.price,
                currency: row.currency,
                kind: row.kind,
                due_payment_date: row.due_payment_date,
                payment_period: PaymentPeriod::new(row.period_unit, row.period_count),
                subscription_reference: row.subscription_reference,
            },
        })
    }
}

/// MySQL-backed repository
pub struct MySqlTransactionRepository {
    pool: MySqlPool,
}

impl MySqlTransactionRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransactionRepository for MySqlTransactionRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Transaction>> {
        let row = sqlx::query_as::<_, TransactionRow>(
            r#"
            SELECT
                t.id, t.processor, t.created_at,
                i.id AS item_id, i.product, i.price, i.currency, i.kind,
                i.due_payment_date, i.period_unit, i.period_count,
                i.subscription_reference
            FROM transactions t
            INNER JOIN items i ON i.id = t.item_id
            WHERE t.id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Transaction::try_from).transpose()
    }

    async fn update_item(&self, item: &Item) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE items
            SET due_payment_date = ?, subscription_reference = ?, updated_at = NOW()
            WHERE id = ?
            "#,
        )
        .bind(item.due_payment_date)
        .bind(&item.subscription_reference)
        .bind(item.id)
        .execute(&self.pool)
        .await?;

        // MySQL reports matched-but-unchanged rows as unaffected
        if result.rows_affected() == 0 {
            let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM items WHERE id = ?")
                .bind(item.id)
                .fetch_optional(&self.pool)
                .await?;
            if exists.is_none() {
                return Err(AppError::not_found(format!("Item {}", item.id)));
            }
        }

        Ok(())
    }
}

/// Process-local repository, used when no database is configured and in tests
#[derive(Default)]
pub struct InMemoryTransactionRepository {
    transactions: RwLock<HashMap<i64, Transaction>>,
}

impl InMemoryTransactionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, transaction: Transaction) {
        self.transactions
            .write()
            .await
            .insert(transaction.id, transaction);
    }
}

#[async_trait]
impl TransactionRepository for InMemoryTransactionRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Transaction>> {
        Ok(self.transactions.read().await.get(&id).cloned())
    }

    async fn update_item(&self, item: &Item) -> Result<()> {
        let mut transactions = self.transactions.write().await;
        let mut found = false;

        for transaction in transactions.values_mut().filter(|t| t.item.id == item.id) {
            transaction.item = item.clone();
            found = true;
        }

        if !found {
            return Err(AppError::not_found(format!("Item {}", item.id)));
        }

        Ok(())
    }
}
