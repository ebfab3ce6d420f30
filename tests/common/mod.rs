//! Repository doubles for driving the router without a MySQL server.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use imoveis_api::{app, AppError, AppState, Imovel, ImovelInput, ImovelRepository};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::time::Duration;
use tower::ServiceExt;

#[derive(Default)]
pub struct InMemoryRepository {
    rows: Mutex<BTreeMap<i64, Imovel>>,
    next_id: Mutex<i64>,
}

impl InMemoryRepository {
    pub fn with_rows(rows: Vec<Imovel>) -> Self {
        let next = rows.iter().map(|r| r.id).max().unwrap_or(0);
        InMemoryRepository {
            rows: Mutex::new(rows.into_iter().map(|r| (r.id, r)).collect()),
            next_id: Mutex::new(next),
        }
    }
}

#[async_trait]
impl ImovelRepository for InMemoryRepository {
    async fn list(&self) -> Result<Vec<Imovel>, AppError> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn list_by_cidade(&self, cidade: &str) -> Result<Vec<Imovel>, AppError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.cidade == cidade)
            .cloned()
            .collect())
    }

    async fn find(&self, id: i64) -> Result<Option<Imovel>, AppError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn create(&self, input: &ImovelInput) -> Result<i64, AppError> {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        let id = *next;
        self.rows.lock().unwrap().insert(id, input.clone().into_imovel(id));
        Ok(id)
    }

    async fn update(&self, id: i64, input: &ImovelInput) -> Result<bool, AppError> {
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(&id) {
            Some(row) => {
                *row = input.clone().into_imovel(id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.rows.lock().unwrap().remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Every call fails the way an unreachable store does.
pub struct UnreachableRepository;

#[async_trait]
impl ImovelRepository for UnreachableRepository {
    async fn list(&self) -> Result<Vec<Imovel>, AppError> {
        Err(unreachable())
    }

    async fn list_by_cidade(&self, _cidade: &str) -> Result<Vec<Imovel>, AppError> {
        Err(unreachable())
    }

    async fn find(&self, _id: i64) -> Result<Option<Imovel>, AppError> {
        Err(unreachable())
    }

    async fn create(&self, _input: &ImovelInput) -> Result<i64, AppError> {
        Err(unreachable())
    }

    async fn update(&self, _id: i64, _input: &ImovelInput) -> Result<bool, AppError> {
        Err(unreachable())
    }

    async fn delete(&self, _id: i64) -> Result<bool, AppError> {
        Err(unreachable())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(unreachable())
    }
}

/// Waits `delay`, then fails the way an expired statement deadline does.
pub struct SlowRepository {
    pub delay: Duration,
}

impl SlowRepository {
    async fn expire(&self) -> AppError {
        tokio::time::sleep(self.delay).await;
        AppError::Timeout("statement")
    }
}

#[async_trait]
impl ImovelRepository for SlowRepository {
    async fn list(&self) -> Result<Vec<Imovel>, AppError> {
        Err(self.expire().await)
    }

    async fn list_by_cidade(&self, _cidade: &str) -> Result<Vec<Imovel>, AppError> {
        Err(self.expire().await)
    }

    async fn find(&self, _id: i64) -> Result<Option<Imovel>, AppError> {
        Err(self.expire().await)
    }

    async fn create(&self, _input: &ImovelInput) -> Result<i64, AppError> {
        Err(self.expire().await)
    }

    async fn update(&self, _id: i64, _input: &ImovelInput) -> Result<bool, AppError> {
        Err(self.expire().await)
    }

    async fn delete(&self, _id: i64) -> Result<bool, AppError> {
        Err(self.expire().await)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(self.expire().await)
    }
}

fn unreachable() -> AppError {
    AppError::Connection("Can't connect to MySQL server on '127.0.0.1:3306'".into())
}

pub fn router<R: ImovelRepository + 'static>(repo: R) -> Router {
    router_with_timeout(repo, Duration::from_secs(30))
}

pub fn router_with_timeout<R: ImovelRepository + 'static>(repo: R, request_timeout: Duration) -> Router {
    app(AppState::new(repo), request_timeout)
}

pub fn seeded_rows() -> Vec<Imovel> {
    vec![
        Imovel {
            id: 1,
            logradouro: "Mariana Gomes".into(),
            tipo_logradouro: "Rua".into(),
            bairro: "Itaim Bibi".into(),
            cidade: "São Paulo".into(),
            cep: "04550004".into(),
            tipo: "apartamento".into(),
            valor: "123425".into(),
            data_aquisicao: chrono::NaiveDate::from_ymd_opt(2017, 7, 29).unwrap(),
        },
        Imovel {
            id: 2,
            logradouro: "Lorenzo Flosi".into(),
            tipo_logradouro: "Avenida".into(),
            bairro: "Vila Olimpia".into(),
            cidade: "São Paulo".into(),
            cep: "04545004".into(),
            tipo: "apartamento".into(),
            valor: "458609".into(),
            data_aquisicao: chrono::NaiveDate::from_ymd_opt(2024, 4, 10).unwrap(),
        },
        Imovel {
            id: 3,
            logradouro: "Atlantica".into(),
            tipo_logradouro: "Avenida".into(),
            bairro: "Copacabana".into(),
            cidade: "Rio de Janeiro".into(),
            cep: "22021001".into(),
            tipo: "casa".into(),
            valor: "990000.00".into(),
            data_aquisicao: chrono::NaiveDate::from_ymd_opt(2019, 3, 15).unwrap(),
        },
    ]
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}
