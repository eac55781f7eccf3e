// src/dtos/surfactant.rs
use serde::Deserialize;
use crate::error::AppError;
use crate::models::surfactant::NewSurfactant;

/// Raw text of the Add form, exactly as submitted.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct SurfactantForm {
    pub product_name: String,
    pub cmc: String,
    pub cloud_point: String,
    pub hlb: String,
    pub eo_content: String,
    pub surface_tension: String,
    pub foam_height: String,
    pub pour_point: String,
    pub form: String,
    pub features: String,
    pub applications: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DeleteByIdForm {
    pub id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DeleteAtForm {
    pub index: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScreenQuery {
    pub screen: Option<String>,
}

fn numeric(label: &str, raw: &str) -> Result<Option<f64>, AppError> {
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(AppError::validation(format!("{label} must be a number, got '{raw}'"))),
    }
}

fn text(raw: String) -> Option<String> {
    if raw.is_empty() { None } else { Some(raw) }
}

impl TryFrom<SurfactantForm> for NewSurfactant {
    type Error = AppError;

    fn try_from(form: SurfactantForm) -> Result<Self, Self::Error> {
        if form.product_name.is_empty() {
            return Err(AppError::validation("Product Name is required!"));
        }

        Ok(NewSurfactant {
            cmc: numeric("CMC", &form.cmc)?,
            cloud_point: numeric("Cloud Point", &form.cloud_point)?,
            hlb: numeric("HLB", &form.hlb)?,
            eo_content: numeric("EO Content", &form.eo_content)?,
            surface_tension: numeric("Surface Tension", &form.surface_tension)?,
            pour_point: numeric("Pour Point", &form.pour_point)?,
            foam_height: text(form.foam_height),
            form: text(form.form),
            features: text(form.features),
            applications: text(form.applications),
            product_name: form.product_name,
        })
    }
}

impl DeleteByIdForm {
    /// Identifiers start at 1; anything else is rejected before touching the store.
    pub fn parse_id(&self) -> Result<i64, AppError> {
        match self.id.trim().parse::<i64>() {
            Ok(id) if id >= 1 => Ok(id),
            _ => Err(AppError::validation("Surfactant ID must be a positive integer")),
        }
    }
}

impl DeleteAtForm {
    pub fn parse_index(&self) -> Result<usize, AppError> {
        self.index
            .trim()
            .parse::<usize>()
            .map_err(|_| AppError::validation("Row index must be a non-negative integer"))
    }
}
