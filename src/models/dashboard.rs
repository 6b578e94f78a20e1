// src/models/dashboard.rs

use rust_decimal::Decimal;
use std::str::FromStr;

use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::common::error::AppError;

// Agrupamento escolhido no select do dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    #[default]
    Daily,
    Monthly,
    Yearly,
}

impl std::str::FromStr for GroupBy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(GroupBy::Daily),
            "monthly" => Ok(GroupBy::Monthly),
            "yearly" => Ok(GroupBy::Yearly),
            other => Err(AppError::InvalidFieldValue {
                field: "groupBy".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

// O banco às vezes devolve o ano como número, às vezes como texto
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

// O total vem como texto ("120.50") ou como número, conforme a consulta
fn decimal_from_string_or_number<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        None | Some(Value::Null) => return Ok(Decimal::ZERO),
        Some(other) => {
            return Err(D::Error::custom(format!("total_net inválido: {}", other)));
        }
    };

    let trimmed = raw.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|e| D::Error::custom(format!("total_net inválido '{}': {}", raw, e)))
}

// Uma linha da agregação de vendas
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SalesEntry {
    #[serde(default, deserialize_with = "string_or_number")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub month: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "decimal_from_string_or_number")]
    pub total_net: Decimal,
}

impl SalesEntry {
    pub fn label(&self, group_by: GroupBy) -> Option<String> {
        match group_by {
            GroupBy::Yearly => self.year.clone(),
            GroupBy::Monthly => self.month.clone(),
            GroupBy::Daily => self
                .date
                .as_deref()
                .and_then(|d| d.split('T').next())
                .map(str::to_string),
        }
    }
}

// `{ data: [ [ ...entries ] ] }`: só o primeiro bloco interessa
#[derive(Debug, Deserialize)]
pub struct SalesResponse {
    #[serde(default)]
    pub data: Vec<Option<Vec<SalesEntry>>>,
}

impl SalesResponse {
    pub fn into_entries(self) -> Vec<SalesEntry> {
        self.data.into_iter().next().flatten().unwrap_or_default()
    }
}

// O que a tela do dashboard mostra
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesDashboard {
    pub group_by: GroupBy,
    pub labels: Vec<Option<String>>,
    pub series: Vec<Decimal>,
    pub total_sales: Decimal,
    pub entry_count: usize,
    pub entries: Vec<SalesEntry>,
}

impl SalesDashboard {
    pub fn from_entries(group_by: GroupBy, entries: Vec<SalesEntry>) -> Self {
        let labels = entries.iter().map(|e| e.label(group_by)).collect();
        let series: Vec<Decimal> = entries.iter().map(|e| e.total_net).collect();
        let total_sales = series.iter().copied().sum();

        Self {
            group_by,
            labels,
            series,
            total_sales,
            entry_count: entries.len(),
            entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
