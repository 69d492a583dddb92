use std::collections::HashMap;

use async_trait::async_trait;
use common::OrderId;
use domain::Order;
use sqlx::{PgPool, Postgres, Transaction};

use crate::error::{OrderStoreError, Result};
use crate::repository::OrderRepository;
use crate::row::{OrderItemRow, OrderRow, order_from_rows, order_to_rows};

/// PostgreSQL-backed order repository.
#[derive(Clone)]
pub struct PostgresOrderRepository {
    pool: PgPool,
}

impl PostgresOrderRepository {
    /// Creates a new PostgreSQL order repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        Ok(())
    }

    async fn insert_item_row(
        tx: &mut Transaction<'_, Postgres>,
        row: &OrderItemRow,
    ) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO order_items (id, name, price, quantity, product_id, order_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&row.id)
        .bind(&row.name)
        .bind(row.price)
        .bind(row.quantity)
        .bind(&row.product_id)
        .bind(&row.order_id)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    #[tracing::instrument(skip(self, order), fields(order_id = %order.id()))]
    async fn create(&self, order: &Order) -> Result<()> {
        let (order_row, item_rows) = order_to_rows(order)?;

        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO orders (id, customer_id, total) VALUES ($1, $2, $3)")
            .bind(&order_row.id)
            .bind(&order_row.customer_id)
            .bind(order_row.total)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(ref db_err) = e
                    && db_err.is_unique_violation()
                {
                    return OrderStoreError::OrderAlreadyExists(order.id().clone());
                }
                OrderStoreError::Database(e)
            })?;

        for row in &item_rows {
            Self::insert_item_row(&mut tx, row).await?;
        }

        tx.commit().await?;
        Ok(())
    }

    #[tracing::instrument(skip(self, order), fields(order_id = %order.id()))]
    async fn update(&self, order: &Order) -> Result<()> {
        let (order_row, item_rows) = order_to_rows(order)?;

        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query("UPDATE orders SET total = $2 WHERE id = $1")
            .bind(&order_row.id)
            .bind(order_row.total)
            .execute(&mut *tx)
            .await?;
        if updated.rows_affected() == 0 {
            return Err(OrderStoreError::OrderNotFound(order.id().clone()));
        }

        // Wholesale replace: drop every child row for the order, reinsert
        // the current item set. Item identity across the update is
        // irrelevant to the row lifecycle.
        sqlx::query("DELETE FROM order_items WHERE order_id = $1")
            .bind(&order_row.id)
            .execute(&mut *tx)
            .await?;

        for row in &item_rows {
            Self::insert_item_row(&mut tx, row).await?;
        }

        tx.commit().await?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn find(&self, id: &OrderId) -> Result<Order> {
        let order_row = sqlx::query_as::<_, OrderRow>(
            "SELECT id, customer_id, total FROM orders WHERE id = $1",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| OrderStoreError::OrderNotFound(id.clone()))?;

        let item_rows = sqlx::query_as::<_, OrderItemRow>(
            r#"
            SELECT id, name, price, quantity, product_id, order_id
            FROM order_items
            WHERE order_id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_all(&self.pool)
        .await?;

        order_from_rows(order_row, item_rows)
    }

    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Order>> {
        let order_rows =
            sqlx::query_as::<_, OrderRow>("SELECT id, customer_id, total FROM orders")
                .fetch_all(&self.pool)
                .await?;

        let item_rows = sqlx::query_as::<_, OrderItemRow>(
            "SELECT id, name, price, quantity, product_id, order_id FROM order_items",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut items_by_order: HashMap<String, Vec<OrderItemRow>> = HashMap::new();
        for row in item_rows {
            items_by_order.entry(row.order_id.clone()).or_default().push(row);
        }

        order_rows
            .into_iter()
            .map(|order_row| {
                let items = items_by_order.remove(&order_row.id).unwrap_or_default();
                order_from_rows(order_row, items)
            })
            .collect()
    }
}
