//! The property record ("imovel") as stored and as accepted from clients.

use chrono::NaiveDate;
use serde::Serialize;

/// One row of the imoveis table. Field order matches the table and the JSON output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Imovel {
    pub id: i64,
    pub logradouro: String,
    pub tipo_logradouro: String,
    pub bairro: String,
    pub cidade: String,
    pub cep: String,
    pub tipo: String,
    /// Monetary value kept as text to avoid float rounding.
    pub valor: String,
    #[serde(serialize_with = "iso_date")]
    pub data_aquisicao: NaiveDate,
}

/// Request body for create and full-replace update. `id` is never accepted from clients.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImovelInput {
    pub logradouro: String,
    pub tipo_logradouro: String,
    pub bairro: String,
    pub cidade: String,
    pub cep: String,
    pub tipo: String,
    pub valor: String,
    pub data_aquisicao: NaiveDate,
}

impl ImovelInput {
    /// Field names in table order, as expected in request bodies.
    pub const FIELDS: [&'static str; 8] = [
        "logradouro",
        "tipo_logradouro",
        "bairro",
        "cidade",
        "cep",
        "tipo",
        "valor",
        "data_aquisicao",
    ];

    pub fn into_imovel(self, id: i64) -> Imovel {
        Imovel {
            id,
            logradouro: self.logradouro,
            tipo_logradouro: self.tipo_logradouro,
            bairro: self.bairro,
            cidade: self.cidade,
            cep: self.cep,
            tipo: self.tipo,
            valor: self.valor,
            data_aquisicao: self.data_aquisicao,
        }
    }
}

fn iso_date<S: serde::Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&date.format("%Y-%m-%d"))
}
