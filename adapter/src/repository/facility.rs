use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    facility::{
        event::{CreateFacility, DeleteFacility, UpdateFacility},
        Facility, FacilityType,
    },
    id::FacilityId,
};
use kernel::repository::facility::FacilityRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::facility::FacilityRow, ConnectionPool};

const FACILITY_COLUMNS: &str = r#"
    facility_id, facility_type, facility_name, facility_code, capacity,
    location, facilities, additional_equipment, status, booking_restrictions,
    notes, image_url, created_at, updated_at
"#;

#[derive(new)]
pub struct FacilityRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl FacilityRepository for FacilityRepositoryImpl {
    async fn create(&self, event: CreateFacility) -> AppResult<FacilityId> {
        let facility_id = FacilityId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO facilities
                (facility_id, facility_type, facility_name, facility_code, capacity,
                 location, facilities, additional_equipment, status,
                 booking_restrictions, notes, image_url)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(facility_id)
        .bind(event.facility_type.to_string())
        .bind(&event.facility_name)
        .bind(&event.facility_code)
        .bind(event.capacity)
        .bind(&event.location)
        .bind(&event.facilities)
        .bind(&event.additional_equipment)
        .bind(&event.status)
        .bind(&event.booking_restrictions)
        .bind(&event.notes)
        .bind(&event.image_url)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No facility record has been created".into(),
            ));
        }

        Ok(facility_id)
    }

    async fn find_all(&self) -> AppResult<Vec<Facility>> {
        let rows: Vec<FacilityRow> = sqlx::query_as(&format!(
            r#"
                SELECT {FACILITY_COLUMNS}
                FROM facilities
                ORDER BY facility_type, created_at DESC
            "#
        ))
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Facility::try_from).collect()
    }

    async fn find_by_type(&self, facility_type: FacilityType) -> AppResult<Vec<Facility>> {
        let rows: Vec<FacilityRow> = sqlx::query_as(&format!(
            r#"
                SELECT {FACILITY_COLUMNS}
                FROM facilities
                WHERE facility_type = $1
                ORDER BY created_at DESC
            "#
        ))
        .bind(facility_type.to_string())
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Facility::try_from).collect()
    }

    async fn find_by_id(
        &self,
        facility_type: FacilityType,
        facility_id: FacilityId,
    ) -> AppResult<Option<Facility>> {
        let row: Option<FacilityRow> = sqlx::query_as(&format!(
            r#"
                SELECT {FACILITY_COLUMNS}
                FROM facilities
                WHERE facility_type = $1 AND facility_id = $2
            "#
        ))
        .bind(facility_type.to_string())
        .bind(facility_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Facility::try_from).transpose()
    }

    async fn update(&self, event: UpdateFacility) -> AppResult<Facility> {
        let row: Option<FacilityRow> = sqlx::query_as(&format!(
            r#"
                UPDATE facilities
                SET facility_name = $3,
                    facility_code = $4,
                    capacity = $5,
                    location = $6,
                    facilities = $7,
                    additional_equipment = $8,
                    status = $9,
                    booking_restrictions = $10,
                    notes = $11,
                    image_url = $12,
                    updated_at = now()
                WHERE facility_type = $1 AND facility_id = $2
                RETURNING {FACILITY_COLUMNS}
            "#
        ))
        .bind(event.facility_type.to_string())
        .bind(event.facility_id)
        .bind(&event.facility_name)
        .bind(&event.facility_code)
        .bind(event.capacity)
        .bind(&event.location)
        .bind(&event.facilities)
        .bind(&event.additional_equipment)
        .bind(&event.status)
        .bind(&event.booking_restrictions)
        .bind(&event.notes)
        .bind(&event.image_url)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        match row {
            Some(row) => Facility::try_from(row),
            None => Err(AppError::EntityNotFound("Facility not found".into())),
        }
    }

    async fn delete(&self, event: DeleteFacility) -> AppResult<()> {
        let res = sqlx::query(
            "DELETE FROM facilities WHERE facility_type = $1 AND facility_id = $2",
        )
        .bind(event.facility_type.to_string())
        .bind(event.facility_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("Facility not found".into()));
        }

        Ok(())
    }
}
