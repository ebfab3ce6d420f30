//! Request body validation: every record field present, non-null and a string.

use crate::error::AppError;
use crate::model::ImovelInput;
use chrono::NaiveDate;
use serde_json::{Map, Value};

pub struct RequestValidator;

impl RequestValidator {
    /// Check the body before any store interaction. The first offending field, in table order, is reported.
    pub fn validate(body: &Value) -> Result<ImovelInput, AppError> {
        let map = body
            .as_object()
            .ok_or_else(|| AppError::Validation("corpo da requisicao deve ser um objeto JSON".into()))?;
        for field in ImovelInput::FIELDS {
            required_str(map, field)?;
        }
        let data = required_str(map, "data_aquisicao")?;
        let data_aquisicao = NaiveDate::parse_from_str(data, "%Y-%m-%d").map_err(|_| {
            AppError::Validation("data_aquisicao deve estar no formato AAAA-MM-DD".into())
        })?;
        Ok(ImovelInput {
            logradouro: required_str(map, "logradouro")?.to_string(),
            tipo_logradouro: required_str(map, "tipo_logradouro")?.to_string(),
            bairro: required_str(map, "bairro")?.to_string(),
            cidade: required_str(map, "cidade")?.to_string(),
            cep: required_str(map, "cep")?.to_string(),
            tipo: required_str(map, "tipo")?.to_string(),
            valor: required_str(map, "valor")?.to_string(),
            data_aquisicao,
        })
    }
}

fn required_str<'a>(map: &'a Map<String, Value>, field: &str) -> Result<&'a str, AppError> {
    match map.get(field) {
        None | Some(Value::Null) => Err(AppError::Validation(format!("campo obrigatorio ausente: {}", field))),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(AppError::Validation(format!("campo {} deve ser texto", field))),
    }
}
