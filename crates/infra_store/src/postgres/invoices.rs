//! Invoice operations on the PostgreSQL adapter
//!
//! Listing pulls the joined party identification numbers and applies the
//! domain filter in process, so the diacritic-insensitive product search
//! behaves identically on every adapter.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{Datelike, Utc};
use rust_decimal::Decimal;

use core_kernel::{InvoiceId, PersonId, PortError};
use domain_invoice::{
    credit_note_for, Invoice, InvoiceFields, InvoiceFilter, InvoiceStore,
};
use domain_statistics::{CompanyFigures, GlobalSummary};

use crate::error::map_sqlx;

use super::{InvoiceRow, PgStore, INVOICE_COLUMNS};

#[derive(sqlx::FromRow)]
struct ListedRow {
    #[sqlx(flatten)]
    invoice: InvoiceRow,
    seller_identification: String,
    buyer_identification: String,
}

#[async_trait]
impl InvoiceStore for PgStore {
    async fn list_invoices(&self, filter: &InvoiceFilter) -> Result<Vec<Invoice>, PortError> {
        let rows = sqlx::query_as::<_, ListedRow>(
            "SELECT i.id, i.invoice_number, i.seller_id, i.buyer_id, i.issued, i.due_date, \
                    i.product, i.price, i.vat, i.note, i.archived, \
                    s.identification_number AS seller_identification, \
                    b.identification_number AS buyer_identification \
             FROM invoices i \
             JOIN persons s ON s.id = i.seller_id \
             JOIN persons b ON b.id = i.buyer_id \
             WHERE NOT i.archived \
             ORDER BY i.id",
        )
        .fetch_all(self.pool())
        .await
        .map_err(map_sqlx)?;

        let matching: Vec<Invoice> = rows
            .into_iter()
            .filter_map(|row| {
                let invoice = Invoice::from(row.invoice);
                filter
                    .matches(
                        &invoice,
                        &row.seller_identification,
                        &row.buyer_identification,
                    )
                    .then_some(invoice)
            })
            .collect();

        Ok(filter.clamp(matching))
    }

    async fn list_archived(&self) -> Result<Vec<Invoice>, PortError> {
        let rows = sqlx::query_as::<_, InvoiceRow>(&format!(
            "SELECT {INVOICE_COLUMNS} FROM invoices WHERE archived ORDER BY id"
        ))
        .fetch_all(self.pool())
        .await
        .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Invoice::from).collect())
    }

    async fn get_invoice(&self, id: InvoiceId) -> Result<Invoice, PortError> {
        let row = sqlx::query_as::<_, InvoiceRow>(&format!(
            "SELECT {INVOICE_COLUMNS} FROM invoices WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| PortError::not_found("invoice", id))?;

        Ok(row.into())
    }

    async fn create_invoice(&self, fields: InvoiceFields) -> Result<Invoice, PortError> {
        let mut tx = self.pool().begin().await.map_err(map_sqlx)?;

        check_parties(&mut tx, &fields).await?;

        let taken: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM invoices WHERE NOT archived AND invoice_number = $1)",
        )
        .bind(&fields.invoice_number)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;
        if taken {
            return Err(PortError::conflict(format!(
                "invoice number '{}' already exists in the active set",
                fields.invoice_number
            )));
        }

        let row = insert_invoice(&mut tx, &fields).await?;
        tx.commit().await.map_err(map_sqlx)?;
        Ok(row.into())
    }

    async fn update_invoice(
        &self,
        id: InvoiceId,
        fields: InvoiceFields,
    ) -> Result<Invoice, PortError> {
        let mut tx = self.pool().begin().await.map_err(map_sqlx)?;

        let credit_pending: bool =
            sqlx::query_scalar("SELECT credit_pending FROM invoices WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(map_sqlx)?
                .ok_or_else(|| PortError::not_found("invoice", id))?;
        check_parties(&mut tx, &fields).await?;
        if !credit_pending {
            return Err(PortError::conflict(format!(
                "invoice {id} is posted; issue a credit note before editing"
            )));
        }

        // The invoice number is immutable; the replacement fields do not
        // carry it into the row.
        let row = sqlx::query_as::<_, InvoiceRow>(&format!(
            "UPDATE invoices SET \
             seller_id = $2, buyer_id = $3, issued = $4, due_date = $5, product = $6, \
             price = $7, vat = $8, note = $9, credit_pending = FALSE \
             WHERE id = $1 \
             RETURNING {INVOICE_COLUMNS}"
        ))
        .bind(id)
        .bind(fields.seller)
        .bind(fields.buyer)
        .bind(fields.issued)
        .bind(fields.due_date)
        .bind(&fields.product)
        .bind(fields.price)
        .bind(fields.vat)
        .bind(&fields.note)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;
        Ok(row.into())
    }

    async fn archive_invoice(&self, id: InvoiceId) -> Result<(), PortError> {
        let archived = sqlx::query("UPDATE invoices SET archived = TRUE WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await
            .map_err(map_sqlx)?
            .rows_affected();

        if archived == 0 {
            return Err(PortError::not_found("invoice", id));
        }
        Ok(())
    }

    async fn restore_invoice(&self, id: InvoiceId) -> Result<Invoice, PortError> {
        let row = sqlx::query_as::<_, InvoiceRow>(&format!(
            "UPDATE invoices SET archived = FALSE WHERE id = $1 AND archived \
             RETURNING {INVOICE_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| PortError::not_found("archived invoice", id))?;

        Ok(row.into())
    }

    async fn issue_credit_note(&self, id: InvoiceId) -> Result<Invoice, PortError> {
        let mut tx = self.pool().begin().await.map_err(map_sqlx)?;

        let source: Invoice = sqlx::query_as::<_, InvoiceRow>(&format!(
            "SELECT {INVOICE_COLUMNS} FROM invoices WHERE id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| PortError::not_found("invoice", id))?
        .into();

        let fields = credit_note_for(&source, Utc::now().date_naive());

        // Re-issuing only re-unlocks the source
        let existing = sqlx::query_as::<_, InvoiceRow>(&format!(
            "SELECT {INVOICE_COLUMNS} FROM invoices WHERE NOT archived AND invoice_number = $1"
        ))
        .bind(&fields.invoice_number)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        let note_row = match existing {
            Some(row) => row,
            None => insert_invoice(&mut tx, &fields).await?,
        };

        sqlx::query("UPDATE invoices SET credit_pending = TRUE WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;
        Ok(note_row.into())
    }

    async fn product_names(&self) -> Result<Vec<String>, PortError> {
        sqlx::query_scalar(
            "SELECT DISTINCT product FROM invoices WHERE NOT archived ORDER BY product",
        )
        .fetch_all(self.pool())
        .await
        .map_err(map_sqlx)
    }

    async fn sales_by_identification(
        &self,
        identification: &str,
    ) -> Result<Vec<Invoice>, PortError> {
        invoices_by_identification(self, identification, "seller_id").await
    }

    async fn purchases_by_identification(
        &self,
        identification: &str,
    ) -> Result<Vec<Invoice>, PortError> {
        invoices_by_identification(self, identification, "buyer_id").await
    }

    async fn global_summary(&self, include_archived: bool) -> Result<GlobalSummary, PortError> {
        let current_year = Utc::now().date_naive().year();

        let (count, all_time_sum, current_year_sum): (i64, Decimal, Decimal) =
            sqlx::query_as(
                "SELECT COUNT(*), \
                        COALESCE(SUM(price), 0), \
                        COALESCE(SUM(price) FILTER (WHERE EXTRACT(YEAR FROM issued)::INT4 = $1), 0) \
                 FROM invoices WHERE $2 OR NOT archived",
            )
            .bind(current_year)
            .bind(include_archived)
            .fetch_one(self.pool())
            .await
            .map_err(map_sqlx)?;

        Ok(GlobalSummary {
            invoices_count: count as u64,
            current_year_sum,
            all_time_sum,
        })
    }

    async fn company_figures(&self) -> Result<Vec<CompanyFigures>, PortError> {
        let persons: Vec<(i64, String)> =
            sqlx::query_as("SELECT id, name FROM persons ORDER BY id")
                .fetch_all(self.pool())
                .await
                .map_err(map_sqlx)?;

        let revenue = yearly_sums(self, "seller_id").await?;
        let expenses = yearly_sums(self, "buyer_id").await?;

        Ok(persons
            .into_iter()
            .map(|(id, name)| {
                let revenue_per_year = revenue.get(&id).cloned().unwrap_or_default();
                CompanyFigures {
                    person_id: PersonId::new(id),
                    person_name: name,
                    revenue: revenue_per_year.values().copied().sum(),
                    revenue_per_year,
                    expenses_per_year: expenses.get(&id).cloned().unwrap_or_default(),
                }
            })
            .collect())
    }
}

async fn check_parties(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    fields: &InvoiceFields,
) -> Result<(), PortError> {
    for (role, person) in [("seller", fields.seller), ("buyer", fields.buyer)] {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM persons WHERE id = $1)")
            .bind(person)
            .fetch_one(&mut **tx)
            .await
            .map_err(map_sqlx)?;
        if !exists {
            return Err(PortError::validation(format!(
                "{role} {person} does not resolve to a person"
            )));
        }
    }
    Ok(())
}

async fn insert_invoice(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    fields: &InvoiceFields,
) -> Result<InvoiceRow, PortError> {
    sqlx::query_as::<_, InvoiceRow>(&format!(
        "INSERT INTO invoices \
         (invoice_number, seller_id, buyer_id, issued, due_date, product, price, vat, note) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
         RETURNING {INVOICE_COLUMNS}"
    ))
    .bind(&fields.invoice_number)
    .bind(fields.seller)
    .bind(fields.buyer)
    .bind(fields.issued)
    .bind(fields.due_date)
    .bind(&fields.product)
    .bind(fields.price)
    .bind(fields.vat)
    .bind(&fields.note)
    .fetch_one(&mut **tx)
    .await
    .map_err(map_sqlx)
}

async fn invoices_by_identification(
    store: &PgStore,
    identification: &str,
    role_column: &str,
) -> Result<Vec<Invoice>, PortError> {
    let known: bool = sqlx::query_scalar(
        "SELECT EXISTS (SELECT 1 FROM persons WHERE identification_number = $1)",
    )
    .bind(identification)
    .fetch_one(store.pool())
    .await
    .map_err(map_sqlx)?;
    if !known {
        return Err(PortError::not_found("person", identification));
    }

    let rows = sqlx::query_as::<_, InvoiceRow>(&format!(
        "SELECT {INVOICE_COLUMNS} FROM invoices \
         WHERE NOT archived AND {role_column} IN \
               (SELECT id FROM persons WHERE identification_number = $1) \
         ORDER BY id"
    ))
    .bind(identification)
    .fetch_all(store.pool())
    .await
    .map_err(map_sqlx)?;

    Ok(rows.into_iter().map(Invoice::from).collect())
}

async fn yearly_sums(
    store: &PgStore,
    role_column: &str,
) -> Result<BTreeMap<i64, BTreeMap<i32, Decimal>>, PortError> {
    let rows: Vec<(i64, i32, Decimal)> = sqlx::query_as(&format!(
        "SELECT {role_column}, EXTRACT(YEAR FROM issued)::INT4, SUM(price) \
         FROM invoices WHERE NOT archived \
         GROUP BY {role_column}, EXTRACT(YEAR FROM issued)"
    ))
    .fetch_all(store.pool())
    .await
    .map_err(map_sqlx)?;

    let mut sums: BTreeMap<i64, BTreeMap<i32, Decimal>> = BTreeMap::new();
    for (person_id, year, total) in rows {
        sums.entry(person_id).or_default().insert(year, total);
    }
    Ok(sums)
}
