//! Address records.

use serde::{Deserialize, Serialize};

use newsdesk_core::error::AppError;
use newsdesk_core::result::AppResult;

/// A normalized address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Formatted postal code, e.g. `01001-000`.
    pub cep: String,
    /// Street name.
    pub street: String,
    /// Address complement.
    pub complement: String,
    /// Neighbourhood.
    pub district: String,
    /// City.
    pub city: String,
    /// State abbreviation.
    pub state: String,
    /// IBGE municipality code.
    pub ibge: String,
    /// GIA code.
    pub gia: String,
    /// Telephone area code.
    pub area_code: String,
    /// SIAFI code.
    pub siafi: String,
}

/// Body returned by the ViaCEP API.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ViaCepResponse {
    cep: String,
    logradouro: String,
    complemento: String,
    bairro: String,
    localidade: String,
    uf: String,
    ibge: String,
    gia: String,
    ddd: String,
    siafi: String,
    erro: Option<serde_json::Value>,
}

impl ViaCepResponse {
    /// Convert to an [`Address`]; an `erro` marker means the CEP is unknown.
    pub(crate) fn into_address(self, cep: &str) -> AppResult<Address> {
        let unknown = match &self.erro {
            None | Some(serde_json::Value::Bool(false)) => false,
            Some(_) => true,
        };
        if unknown {
            return Err(AppError::not_found(format!("Postal code {cep} not found")));
        }

        Ok(Address {
            cep: self.cep,
            street: self.logradouro,
            complement: self.complemento,
            district: self.bairro,
            city: self.localidade,
            state: self.uf,
            ibge: self.ibge,
            gia: self.gia,
            area_code: self.ddd,
            siafi: self.siafi,
        })
    }
}
