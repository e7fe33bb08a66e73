//! Company registry record.
//!
//! The HTTP layer never inspects these fields; it only serializes whatever
//! the store returns. Field names follow the public registry dataset so the
//! JSON payload matches what importers write into the store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A company as served by the lookup API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Company {
    /// Canonical (unmasked) CNPJ.
    pub cnpj: String,

    /// 1 = headquarters, 2 = branch.
    pub identificador_matriz_filial: Option<u8>,
    pub descricao_matriz_filial: Option<String>,

    pub razao_social: Option<String>,
    pub nome_fantasia: Option<String>,

    pub situacao_cadastral: Option<u8>,
    pub descricao_situacao_cadastral: Option<String>,
    pub data_situacao_cadastral: Option<NaiveDate>,
    pub motivo_situacao_cadastral: Option<u16>,

    pub nome_cidade_exterior: Option<String>,
    pub codigo_natureza_juridica: Option<u16>,
    pub data_inicio_atividade: Option<NaiveDate>,

    pub cnae_fiscal: Option<u32>,
    pub cnae_fiscal_descricao: Option<String>,

    pub descricao_tipo_logradouro: Option<String>,
    pub logradouro: Option<String>,
    pub numero: Option<String>,
    pub complemento: Option<String>,
    pub bairro: Option<String>,
    pub cep: Option<String>,
    pub uf: Option<String>,
    pub codigo_municipio: Option<u32>,
    pub municipio: Option<String>,

    pub ddd_telefone_1: Option<String>,
    pub ddd_telefone_2: Option<String>,
    pub ddd_fax: Option<String>,

    pub qualificacao_do_responsavel: Option<u16>,
    pub capital_social: Option<f64>,
    pub porte: Option<String>,

    pub opcao_pelo_simples: Option<bool>,
    pub data_opcao_pelo_simples: Option<NaiveDate>,
    pub data_exclusao_do_simples: Option<NaiveDate>,
    pub opcao_pelo_mei: Option<bool>,

    pub situacao_especial: Option<String>,
    pub data_situacao_especial: Option<NaiveDate>,
}
