// Patient repository trait and Postgres implementation
use crate::error::{DatabaseError, DatabaseResult};
use crate::models::Patient;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use tracing::info;

/// Read-only view of the patient directory.
///
/// The backing store is opaque to callers: all the prescription core ever
/// does is look records up by identifier or list them.
#[async_trait]
pub trait PatientRepository: Send + Sync {
    /// Return all patient records. Order is unspecified but stable within a
    /// process lifetime if the backing store is stable.
    async fn list_all(&self) -> DatabaseResult<Vec<Patient>>;

    /// Look up one patient by exact id.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::PatientNotFound`] when no record matches.
    async fn find_by_id(&self, id: &str) -> DatabaseResult<Patient>;
}

/// Postgres-backed patient repository.
#[derive(Clone)]
pub struct PostgresPatientRepository {
    pool: PgPool,
}

impl PostgresPatientRepository {
    /// Create a repository from a connection string.
    pub async fn connect(connection_string: &str) -> DatabaseResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(20)
            .acquire_timeout(Duration::from_secs(30))
            .connect(connection_string)
            .await
            .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

        info!("Patient directory connection pool created successfully");

        Ok(Self { pool })
    }

    /// Wrap an existing pool. Useful for tests and the import tool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get the underlying pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Check if the pool is healthy.
    pub async fn is_healthy(&self) -> bool {
        match sqlx::query("SELECT 1").fetch_one(&self.pool).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!("Patient directory health check failed: {}", e);
                false
            }
        }
    }

    /// Create the patients table when it does not exist yet.
    ///
    /// Called by the import tool, which owns the schema; the prescription
    /// core never issues DDL.
    pub async fn ensure_schema(&self) -> DatabaseResult<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS patients (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                age INT NOT NULL,
                diagnosis TEXT NOT NULL,
                history TEXT[] NOT NULL DEFAULT '{}'
            )",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
        Ok(())
    }

    /// Replace the entire directory contents with the given records.
    ///
    /// Runs in a single transaction so readers never observe a half-imported
    /// directory. Import-tool only.
    pub async fn replace_all(&self, patients: &[Patient]) -> DatabaseResult<u64> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        sqlx::query("DELETE FROM patients")
            .execute(&mut *tx)
            .await
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        for patient in patients {
            sqlx::query(
                "INSERT INTO patients (id, name, age, diagnosis, history)
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(&patient.id)
            .bind(&patient.name)
            .bind(patient.age)
            .bind(&patient.diagnosis)
            .bind(&patient.history)
            .execute(&mut *tx)
            .await
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        info!(count = patients.len(), "Patient directory replaced");
        Ok(patients.len() as u64)
    }
}

#[async_trait]
impl PatientRepository for PostgresPatientRepository {
    async fn list_all(&self) -> DatabaseResult<Vec<Patient>> {
        let patients = sqlx::query_as::<_, Patient>(
            "SELECT id, name, age, diagnosis, history FROM patients ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
        Ok(patients)
    }

    async fn find_by_id(&self, id: &str) -> DatabaseResult<Patient> {
        let patient = sqlx::query_as::<_, Patient>(
            "SELECT id, name, age, diagnosis, history FROM patients WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        patient.ok_or_else(|| DatabaseError::PatientNotFound(id.to_string()))
    }
}
