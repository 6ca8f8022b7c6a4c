use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use networth_core::certificates::{
    CategoryNotes, CertificateDetail, CertificateMetadata, CertificateRepositoryTrait,
    CertificateSummary, NetWorthData, NewCertificate, PreparerDetails,
};
use networth_core::document::RenderedDocument;
use networth_core::Result;

use super::model::*;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::certificates;

/// Inserts one category list into its child table, keeping list order in `position`.
macro_rules! insert_children {
    ($conn:expr, $table:ident, $row:ty, $records:expr, $certificate_id:expr) => {{
        let rows = $records
            .iter()
            .enumerate()
            .map(|(index, record)| <$row>::from_record($certificate_id, position(index)?, record))
            .collect::<std::result::Result<Vec<$row>, StorageError>>()?;
        if !rows.is_empty() {
            diesel::insert_into(crate::schema::$table::table)
                .values(&rows)
                .execute($conn)
                .map_err(StorageError::from)?;
        }
    }};
}

/// Loads one category list back in `position` order.
macro_rules! load_children {
    ($conn:expr, $table:ident, $row:ty, $certificate_id:expr) => {
        crate::schema::$table::table
            .filter(crate::schema::$table::certificate_id.eq($certificate_id))
            .order(crate::schema::$table::position.asc())
            .select(<$row>::as_select())
            .load::<$row>($conn)
            .map_err(StorageError::from)?
            .into_iter()
            .map(<$row>::into_record)
            .collect::<std::result::Result<Vec<_>, StorageError>>()?
    };
}

fn position(index: usize) -> std::result::Result<i32, StorageError> {
    i32::try_from(index)
        .map_err(|_| StorageError::InvalidRow(format!("list position {} out of range", index)))
}

pub struct CertificateRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl CertificateRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        CertificateRepository { pool, writer }
    }

    fn insert_all_children(
        conn: &mut SqliteConnection,
        certificate_id: &str,
        data: &NetWorthData,
    ) -> std::result::Result<(), StorageError> {
        let id = certificate_id;
        insert_children!(conn, certificate_individuals, IndividualDB, data.individuals, id);
        insert_children!(conn, bank_accounts, BankAccountDB, data.bank_accounts, id);
        insert_children!(conn, insurance_policies, InsurancePolicyDB, data.insurance_policies, id);
        insert_children!(conn, pf_accounts, PfAccountDB, data.pf_accounts, id);
        insert_children!(conn, deposits, DepositDB, data.deposits, id);
        insert_children!(conn, nps_accounts, NpsAccountDB, data.nps_accounts, id);
        insert_children!(conn, mutual_funds, MutualFundDB, data.mutual_funds, id);
        insert_children!(conn, shares, ShareLotDB, data.shares, id);
        insert_children!(conn, vehicles, VehicleDB, data.vehicles, id);
        insert_children!(
            conn,
            post_office_schemes,
            PostOfficeSchemeDB,
            data.post_office_schemes,
            id
        );
        insert_children!(conn, partnership_firms, PartnershipFirmDB, data.partnership_firms, id);
        insert_children!(conn, gold_holdings, GoldHoldingDB, data.gold_holdings, id);
        insert_children!(conn, properties, PropertyDB, data.properties, id);
        insert_children!(conn, liabilities, LiabilityDB, data.liabilities, id);
        Ok(())
    }

    /// Rebuilds the aggregate from the parent row and its child tables.
    fn load_data(
        conn: &mut SqliteConnection,
        row: &CertificateDB,
    ) -> std::result::Result<NetWorthData, StorageError> {
        let id = row.id.as_str();
        let notes: CategoryNotes = serde_json::from_str(&row.category_notes)?;

        Ok(NetWorthData {
            certificate_date: row.certificate_date,
            engagement_date: row.engagement_date,
            embassy_name: row.embassy_name.clone(),
            embassy_address: row.embassy_address.clone(),
            foreign_currency: parse_currency(&row.foreign_currency)?,
            exchange_rate: row.exchange_rate,
            individuals: load_children!(conn, certificate_individuals, IndividualDB, id),
            bank_accounts: load_children!(conn, bank_accounts, BankAccountDB, id),
            insurance_policies: load_children!(conn, insurance_policies, InsurancePolicyDB, id),
            pf_accounts: load_children!(conn, pf_accounts, PfAccountDB, id),
            deposits: load_children!(conn, deposits, DepositDB, id),
            nps_accounts: load_children!(conn, nps_accounts, NpsAccountDB, id),
            mutual_funds: load_children!(conn, mutual_funds, MutualFundDB, id),
            shares: load_children!(conn, shares, ShareLotDB, id),
            vehicles: load_children!(conn, vehicles, VehicleDB, id),
            post_office_schemes: load_children!(conn, post_office_schemes, PostOfficeSchemeDB, id),
            partnership_firms: load_children!(conn, partnership_firms, PartnershipFirmDB, id),
            gold_holdings: load_children!(conn, gold_holdings, GoldHoldingDB, id),
            properties: load_children!(conn, properties, PropertyDB, id),
            liabilities: load_children!(conn, liabilities, LiabilityDB, id),
            notes,
            preparer: PreparerDetails {
                firm_name: row.firm_name.clone(),
                firm_registration_no: row.firm_registration_no.clone(),
                signer_name: row.signer_name.clone(),
                membership_no: row.membership_no.clone(),
                designation: row.designation.clone(),
                place: row.place.clone(),
            },
        })
    }

    fn load_detail(
        conn: &mut SqliteConnection,
        certificate_id: &str,
    ) -> std::result::Result<Option<CertificateDetail>, StorageError> {
        let row = certificates::table
            .find(certificate_id)
            .select(CertificateDB::as_select())
            .first::<CertificateDB>(conn)
            .optional()?;

        let Some(row) = row else {
            return Ok(None);
        };

        let data = Self::load_data(conn, &row)?;
        let metadata: CertificateMetadata = serde_json::from_str(&row.metadata_json)?;
        Ok(Some(CertificateDetail {
            summary: CertificateSummary::try_from(&row)?,
            metadata,
            data,
        }))
    }

    fn build_row(
        id: String,
        new_certificate: NewCertificate,
    ) -> Result<(NewCertificateDB, NetWorthData)> {
        let NewCertificate {
            person_id,
            data,
            document,
            metadata,
        } = new_certificate;
        let summary = data.summary()?;
        let now = Utc::now().naive_utc();

        let (document_file_name, document_mime_type, document_file_size, document_bytes) =
            match document {
                Some(doc) => {
                    let size = i32::try_from(doc.bytes.len()).map_err(|_| {
                        StorageError::InvalidRow(format!(
                            "document {} is too large to store",
                            doc.file_name
                        ))
                    })?;
                    (Some(doc.file_name), Some(doc.mime_type), Some(size), Some(doc.bytes))
                }
                None => (None, None, None, None),
            };

        let row = NewCertificateDB {
            id,
            person_id,
            display_name: data.display_name(),
            certificate_date: data.certificate_date,
            engagement_date: data.engagement_date,
            embassy_name: data.embassy_name.clone(),
            embassy_address: data.embassy_address.clone(),
            foreign_currency: data.foreign_currency.code().to_string(),
            exchange_rate: data.exchange_rate,
            category_notes: serde_json::to_string(&data.notes).into_core()?,
            firm_name: data.preparer.firm_name.clone(),
            firm_registration_no: data.preparer.firm_registration_no.clone(),
            signer_name: data.preparer.signer_name.clone(),
            membership_no: data.preparer.membership_no.clone(),
            designation: data.preparer.designation.clone(),
            place: data.preparer.place.clone(),
            total_movable_assets_inr: summary.total_movable_assets_inr,
            total_immovable_assets_inr: summary.total_immovable_assets_inr,
            total_liabilities_inr: summary.total_liabilities_inr,
            net_worth_inr: summary.net_worth_inr,
            net_worth_foreign: summary.net_worth_foreign,
            data_snapshot: serde_json::to_string(&data).into_core()?,
            metadata_json: serde_json::to_string(&metadata).into_core()?,
            document_file_name,
            document_mime_type,
            document_file_size,
            document_bytes,
            created_at: now,
            updated_at: now,
        };
        Ok((row, data))
    }
}

#[async_trait]
impl CertificateRepositoryTrait for CertificateRepository {
    async fn create(&self, new_certificate: NewCertificate) -> Result<CertificateSummary> {
        let (row, data) = Self::build_row(Uuid::new_v4().to_string(), new_certificate)?;

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<CertificateSummary> {
                diesel::insert_into(certificates::table)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Self::insert_all_children(conn, &row.id, &data)?;

                let saved = certificates::table
                    .find(&row.id)
                    .select(CertificateDB::as_select())
                    .first::<CertificateDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(CertificateSummary::try_from(&saved)?)
            })
            .await
    }

    fn get(&self, certificate_id: &str) -> Result<Option<CertificateDetail>> {
        let mut conn = get_connection(&self.pool)?;
        // One read transaction, so a concurrent delete cannot drop child rows
        // between the parent and the category loads.
        conn.transaction::<_, StorageError, _>(|conn| Self::load_detail(conn, certificate_id))
            .map_err(Into::into)
    }

    fn get_snapshot(&self, certificate_id: &str) -> Result<Option<String>> {
        let mut conn = get_connection(&self.pool)?;
        certificates::table
            .find(certificate_id)
            .select(certificates::data_snapshot)
            .first::<String>(&mut conn)
            .optional()
            .into_core()
    }

    fn get_document(&self, certificate_id: &str) -> Result<Option<RenderedDocument>> {
        let mut conn = get_connection(&self.pool)?;
        let row = certificates::table
            .find(certificate_id)
            .select(DocumentDB::as_select())
            .first::<DocumentDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        Ok(row.and_then(|doc| match doc {
            DocumentDB {
                document_file_name: Some(file_name),
                document_mime_type: Some(mime_type),
                document_bytes: Some(bytes),
            } => Some(RenderedDocument {
                bytes,
                file_name,
                mime_type,
            }),
            _ => None,
        }))
    }

    fn list(
        &self,
        person_id: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<CertificateSummary>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = certificates::table
            .select(CertificateDB::as_select())
            .order((certificates::created_at.desc(), certificates::id.desc()))
            .limit(limit)
            .offset(offset)
            .into_boxed();
        if let Some(person_id) = person_id {
            query = query.filter(certificates::person_id.eq(person_id));
        }

        let rows = query
            .load::<CertificateDB>(&mut conn)
            .map_err(StorageError::from)?;
        rows.iter()
            .map(|row| CertificateSummary::try_from(row).map_err(Into::into))
            .collect()
    }

    async fn delete(&self, certificate_id: String) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let deleted = diesel::delete(certificates::table.find(certificate_id))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(deleted)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, init, run_migrations, spawn_writer};
    use chrono::NaiveDate;
    use networth_core::certificates::{BankAccount, Liability, Property};

    fn sample() -> NetWorthData {
        let mut data =
            NetWorthData::new_for_date(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
        data.add_record(BankAccount {
            holder_name: "Asha Rao".to_string(),
            account_number: "001".to_string(),
            bank_name: "State Bank".to_string(),
            balance_inr: 100_000.0,
            statement_date: None,
        });
        data.add_record(Property {
            owner_name: "Asha Rao".to_string(),
            property_type: "Flat".to_string(),
            address: "Baner, Pune".to_string(),
            valuation_inr: 500_000.0,
            valuation_date: None,
            valuer_name: None,
        });
        data.add_record(Liability {
            description: "Car loan".to_string(),
            amount_inr: 50_000.0,
            details: None,
        });
        data
    }

    #[tokio::test]
    async fn test_load_sees_one_snapshot_despite_concurrent_delete() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("networth.db");
        let db_path = init(path.to_str().unwrap()).unwrap();
        let pool = create_pool(&db_path).unwrap();
        run_migrations(&pool).unwrap();
        let writer = spawn_writer((*pool).clone());
        let repository = CertificateRepository::new(pool.clone(), writer);

        let data = sample();
        let saved = repository
            .create(NewCertificate {
                person_id: None,
                data: data.clone(),
                document: None,
                metadata: CertificateMetadata {
                    schema_version: "1.0".to_string(),
                    source: "tests".to_string(),
                },
            })
            .await
            .unwrap();

        let mut reader = get_connection(&pool).unwrap();
        let mut other = get_connection(&pool).unwrap();
        let loaded = reader
            .transaction::<_, StorageError, _>(|conn| {
                let row = certificates::table
                    .find(&saved.id)
                    .select(CertificateDB::as_select())
                    .first::<CertificateDB>(conn)?;
                // Lands between the parent read and the child reads.
                let deleted = diesel::delete(certificates::table.find(&saved.id))
                    .execute(&mut other)?;
                assert_eq!(deleted, 1);
                CertificateRepository::load_data(conn, &row)
            })
            .unwrap();

        assert_eq!(loaded, data);
        assert!(repository.get(&saved.id).unwrap().is_none());
    }
}
