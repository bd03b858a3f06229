//! Person operations on the PostgreSQL adapter

use async_trait::async_trait;

use core_kernel::{PersonId, PortError};
use domain_party::{PartyStore, Person, PersonDraft};

use crate::error::map_sqlx;

use super::{PersonRow, PgStore, PERSON_COLUMNS};

#[async_trait]
impl PartyStore for PgStore {
    async fn list_persons(&self) -> Result<Vec<Person>, PortError> {
        let rows = sqlx::query_as::<_, PersonRow>(&format!(
            "SELECT {PERSON_COLUMNS} FROM persons ORDER BY id"
        ))
        .fetch_all(self.pool())
        .await
        .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Person::from).collect())
    }

    async fn get_person(&self, id: PersonId) -> Result<Person, PortError> {
        let row = sqlx::query_as::<_, PersonRow>(&format!(
            "SELECT {PERSON_COLUMNS} FROM persons WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| PortError::not_found("person", id))?;

        Ok(row.into())
    }

    async fn create_person(&self, draft: PersonDraft) -> Result<Person, PortError> {
        let row = sqlx::query_as::<_, PersonRow>(&format!(
            "INSERT INTO persons \
             (name, identification_number, tax_number, account_number, bank_code, iban, \
              telephone, mail, street, zip, city, country, note) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) \
             RETURNING {PERSON_COLUMNS}"
        ))
        .bind(&draft.name)
        .bind(&draft.identification_number)
        .bind(&draft.tax_number)
        .bind(&draft.account_number)
        .bind(&draft.bank_code)
        .bind(&draft.iban)
        .bind(&draft.telephone)
        .bind(&draft.mail)
        .bind(&draft.address.street)
        .bind(&draft.address.zip)
        .bind(&draft.address.city)
        .bind(draft.address.country.code())
        .bind(&draft.note)
        .fetch_one(self.pool())
        .await
        .map_err(map_sqlx)?;

        Ok(row.into())
    }

    async fn update_person(&self, id: PersonId, draft: PersonDraft) -> Result<Person, PortError> {
        let row = sqlx::query_as::<_, PersonRow>(&format!(
            "UPDATE persons SET \
             name = $2, identification_number = $3, tax_number = $4, account_number = $5, \
             bank_code = $6, iban = $7, telephone = $8, mail = $9, street = $10, zip = $11, \
             city = $12, country = $13, note = $14 \
             WHERE id = $1 \
             RETURNING {PERSON_COLUMNS}"
        ))
        .bind(id)
        .bind(&draft.name)
        .bind(&draft.identification_number)
        .bind(&draft.tax_number)
        .bind(&draft.account_number)
        .bind(&draft.bank_code)
        .bind(&draft.iban)
        .bind(&draft.telephone)
        .bind(&draft.mail)
        .bind(&draft.address.street)
        .bind(&draft.address.zip)
        .bind(&draft.address.city)
        .bind(draft.address.country.code())
        .bind(&draft.note)
        .fetch_optional(self.pool())
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| PortError::not_found("person", id))?;

        Ok(row.into())
    }

    async fn delete_person(&self, id: PersonId) -> Result<(), PortError> {
        let mut tx = self.pool().begin().await.map_err(map_sqlx)?;

        // Linkage check and deletion share the transaction so the guard is
        // atomic: either both checks pass and the row goes, or nothing
        // changes.
        let linked: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM invoices \
             WHERE NOT archived AND (seller_id = $1 OR buyer_id = $1)",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        if linked > 0 {
            return Err(PortError::conflict(format!(
                "person {id} has {linked} linked invoice(s) and cannot be deleted"
            )));
        }

        let deleted = sqlx::query("DELETE FROM persons WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .rows_affected();

        if deleted == 0 {
            return Err(PortError::not_found("person", id));
        }

        tx.commit().await.map_err(map_sqlx)?;
        Ok(())
    }
}
