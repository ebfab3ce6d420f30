//! Imovel CRUD against MySQL. Each call acquires its own connection and releases it on every path.

use crate::error::AppError;
use crate::model::{Imovel, ImovelInput};
use crate::sql;
use crate::store::ConnectionProvider;
use async_trait::async_trait;
use sqlx::mysql::MySqlConnection;
use sqlx::Connection;

/// Data access for the imoveis table. Handlers only see this trait.
#[async_trait]
pub trait ImovelRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Imovel>, AppError>;

    /// Exact match on `cidade`; case sensitivity follows the store collation.
    async fn list_by_cidade(&self, cidade: &str) -> Result<Vec<Imovel>, AppError>;

    async fn find(&self, id: i64) -> Result<Option<Imovel>, AppError>;

    /// Insert and commit. Returns the server-assigned id.
    async fn create(&self, input: &ImovelInput) -> Result<i64, AppError>;

    /// Full replace of every field. Returns false when no row has this id.
    async fn update(&self, id: i64, input: &ImovelInput) -> Result<bool, AppError>;

    /// Returns false when no row has this id.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Liveness probe used by /ready.
    async fn ping(&self) -> Result<(), AppError>;
}

pub struct MySqlImovelRepository {
    provider: ConnectionProvider,
}

impl MySqlImovelRepository {
    pub fn new(provider: ConnectionProvider) -> Self {
        MySqlImovelRepository { provider }
    }
}

#[async_trait]
impl ImovelRepository for MySqlImovelRepository {
    async fn list(&self) -> Result<Vec<Imovel>, AppError> {
        let mut conn = self.provider.acquire().await?;
        let result = self.provider.bounded(select_all(&mut conn)).await;
        self.provider.release(conn).await;
        result
    }

    async fn list_by_cidade(&self, cidade: &str) -> Result<Vec<Imovel>, AppError> {
        let mut conn = self.provider.acquire().await?;
        let result = self.provider.bounded(select_by_cidade(&mut conn, cidade)).await;
        self.provider.release(conn).await;
        result
    }

    async fn find(&self, id: i64) -> Result<Option<Imovel>, AppError> {
        let mut conn = self.provider.acquire().await?;
        let result = self.provider.bounded(select_by_id(&mut conn, id)).await;
        self.provider.release(conn).await;
        result
    }

    async fn create(&self, input: &ImovelInput) -> Result<i64, AppError> {
        let mut conn = self.provider.acquire().await?;
        let result = self.provider.bounded(insert(&mut conn, input)).await;
        self.provider.release(conn).await;
        result
    }

    async fn update(&self, id: i64, input: &ImovelInput) -> Result<bool, AppError> {
        let mut conn = self.provider.acquire().await?;
        let result = self.provider.bounded(update(&mut conn, id, input)).await;
        self.provider.release(conn).await;
        result
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut conn = self.provider.acquire().await?;
        let result = self.provider.bounded(delete(&mut conn, id)).await;
        self.provider.release(conn).await;
        result
    }

    async fn ping(&self) -> Result<(), AppError> {
        let conn = self.provider.acquire().await?;
        self.provider.release(conn).await;
        Ok(())
    }
}

async fn select_all(conn: &mut MySqlConnection) -> Result<Vec<Imovel>, AppError> {
    let q = sql::select_all();
    tracing::debug!(sql = %q, "query");
    let rows = sqlx::query_as::<_, Imovel>(&q).fetch_all(&mut *conn).await?;
    Ok(rows)
}

async fn select_by_cidade(conn: &mut MySqlConnection, cidade: &str) -> Result<Vec<Imovel>, AppError> {
    let q = sql::select_by_cidade();
    tracing::debug!(sql = %q, cidade = %cidade, "query");
    let rows = sqlx::query_as::<_, Imovel>(&q)
        .bind(cidade)
        .fetch_all(&mut *conn)
        .await?;
    Ok(rows)
}

async fn select_by_id(conn: &mut MySqlConnection, id: i64) -> Result<Option<Imovel>, AppError> {
    let q = sql::select_by_id();
    tracing::debug!(sql = %q, id, "query");
    let row = sqlx::query_as::<_, Imovel>(&q)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row)
}

async fn insert(conn: &mut MySqlConnection, input: &ImovelInput) -> Result<i64, AppError> {
    let q = sql::insert();
    tracing::debug!(sql = %q, params = ?input, "query");
    let mut tx = conn.begin().await?;
    let done = sqlx::query(&q)
        .bind(&input.logradouro)
        .bind(&input.tipo_logradouro)
        .bind(&input.bairro)
        .bind(&input.cidade)
        .bind(&input.cep)
        .bind(&input.tipo)
        .bind(&input.valor)
        .bind(input.data_aquisicao)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(done.last_insert_id() as i64)
}

async fn update(conn: &mut MySqlConnection, id: i64, input: &ImovelInput) -> Result<bool, AppError> {
    let q = sql::update();
    tracing::debug!(sql = %q, id, params = ?input, "query");
    let mut tx = conn.begin().await?;
    let done = sqlx::query(&q)
        .bind(&input.logradouro)
        .bind(&input.tipo_logradouro)
        .bind(&input.bairro)
        .bind(&input.cidade)
        .bind(&input.cep)
        .bind(&input.tipo)
        .bind(&input.valor)
        .bind(input.data_aquisicao)
        .bind(id)
        .execute(&mut *tx)
        .await?;
    // MySQL counts changed rows, so re-applying identical values reports zero.
    let found = if done.rows_affected() > 0 {
        true
    } else {
        let exists = sql::exists_by_id();
        sqlx::query(&exists)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .is_some()
    };
    tx.commit().await?;
    Ok(found)
}

async fn delete(conn: &mut MySqlConnection, id: i64) -> Result<bool, AppError> {
    let q = sql::delete();
    tracing::debug!(sql = %q, id, "query");
    let mut tx = conn.begin().await?;
    let done = sqlx::query(&q).bind(id).execute(&mut *tx).await?;
    tx.commit().await?;
    Ok(done.rows_affected() > 0)
}
