use sqlx::FromRow;

/// A persisted surfactant row.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Surfactant {
    pub id: i64,
    pub product_name: String,
    pub cmc: Option<f64>,
    pub cloud_point: Option<f64>,
    pub hlb: Option<f64>,
    pub eo_content: Option<f64>,
    pub surface_tension: Option<f64>,
    pub foam_height: Option<String>,
    pub pour_point: Option<f64>,
    pub form: Option<String>,
    pub features: Option<String>,
    pub applications: Option<String>,
}

/// A record that has passed form coercion but has no id yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewSurfactant {
    pub product_name: String,
    pub cmc: Option<f64>,
    pub cloud_point: Option<f64>,
    pub hlb: Option<f64>,
    pub eo_content: Option<f64>,
    pub surface_tension: Option<f64>,
    pub foam_height: Option<String>,
    pub pour_point: Option<f64>,
    pub form: Option<String>,
    pub features: Option<String>,
    pub applications: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Required,
    Numeric,
    Text,
    LongText,
}

/// Display and file metadata for one record attribute.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub key: &'static str,
    pub label: &'static str,
    pub header: &'static str,
    pub help: &'static str,
    pub kind: FieldKind,
}

pub const FIELDS: [Field; 11] = [
    Field {
        key: "product_name",
        label: "Product Name",
        header: "Product Name",
        help: "The name of the surfactant (e.g., TRITON X-100).",
        kind: FieldKind::Required,
    },
    Field {
        key: "cmc",
        label: "CMC (Critical Micelle Concentration)",
        header: "CMC",
        help: "Critical Micelle Concentration (ppm).",
        kind: FieldKind::Numeric,
    },
    Field {
        key: "cloud_point",
        label: "Cloud Point",
        header: "Cloud Point",
        help: "The temperature at which the surfactant becomes insoluble.",
        kind: FieldKind::Numeric,
    },
    Field {
        key: "hlb",
        label: "HLB (Hydrophilic-Lipophilic Balance)",
        header: "HLB",
        help: "Hydrophilic-Lipophilic Balance.",
        kind: FieldKind::Numeric,
    },
    Field {
        key: "eo_content",
        label: "EO Content",
        header: "EO Content",
        help: "Ethylene Oxide Content.",
        kind: FieldKind::Numeric,
    },
    Field {
        key: "surface_tension",
        label: "Surface Tension",
        header: "Surface Tension",
        help: "Surface tension reduction capability (mN/m).",
        kind: FieldKind::Numeric,
    },
    Field {
        key: "foam_height",
        label: "Foam Height",
        header: "Foam Height",
        help: "Foam height, e.g., '50/40' (initial/5 min).",
        kind: FieldKind::Text,
    },
    Field {
        key: "pour_point",
        label: "Pour Point",
        header: "Pour Point",
        help: "Temperature at which the surfactant flows.",
        kind: FieldKind::Numeric,
    },
    Field {
        key: "form",
        label: "Form",
        header: "Form",
        help: "Physical state (e.g., Liquid, Solid).",
        kind: FieldKind::Text,
    },
    Field {
        key: "features",
        label: "Features",
        header: "Features",
        help: "Key features of the surfactant (e.g., detergency, stability).",
        kind: FieldKind::LongText,
    },
    Field {
        key: "applications",
        label: "Applications",
        header: "Applications",
        help: "Applications for the surfactant (e.g., coatings, detergents).",
        kind: FieldKind::LongText,
    },
];

/// Column headers of the tabular file, in canonical order.
pub fn csv_headers() -> Vec<String> {
    FIELDS.iter().map(|f| f.header.to_string()).collect()
}

fn cell_number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn cell_text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

impl NewSurfactant {
    /// Values in `FIELDS` order, absent values as `None`, for display.
    pub fn display_values(&self) -> [Option<String>; 11] {
        [
            Some(self.product_name.clone()),
            self.cmc.map(|v| v.to_string()),
            self.cloud_point.map(|v| v.to_string()),
            self.hlb.map(|v| v.to_string()),
            self.eo_content.map(|v| v.to_string()),
            self.surface_tension.map(|v| v.to_string()),
            self.foam_height.clone(),
            self.pour_point.map(|v| v.to_string()),
            self.form.clone(),
            self.features.clone(),
            self.applications.clone(),
        ]
    }

    /// `(header, cell)` pairs for the tabular file; absent values become empty cells.
    pub fn to_cells(&self) -> Vec<(String, String)> {
        let cells = [
            self.product_name.clone(),
            cell_number(self.cmc),
            cell_number(self.cloud_point),
            cell_number(self.hlb),
            cell_number(self.eo_content),
            cell_number(self.surface_tension),
            cell_text(&self.foam_height),
            cell_number(self.pour_point),
            cell_text(&self.form),
            cell_text(&self.features),
            cell_text(&self.applications),
        ];
        FIELDS
            .iter()
            .zip(cells)
            .map(|(field, cell)| (field.header.to_string(), cell))
            .collect()
    }
}

impl From<Surfactant> for NewSurfactant {
    fn from(s: Surfactant) -> Self {
        Self {
            product_name: s.product_name,
            cmc: s.cmc,
            cloud_point: s.cloud_point,
            hlb: s.hlb,
            eo_content: s.eo_content,
            surface_tension: s.surface_tension,
            foam_height: s.foam_height,
            pour_point: s.pour_point,
            form: s.form,
            features: s.features,
            applications: s.applications,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_follow_header_order_and_blank_absent_values() {
        let record = NewSurfactant {
            product_name: "Foamex 10".into(),
            cmc: Some(120.0),
            hlb: Some(13.5),
            form: Some("Liquid".into()),
            ..Default::default()
        };
        let cells = record.to_cells();
        let headers: Vec<String> = cells.iter().map(|(h, _)| h.clone()).collect();
        assert_eq!(headers, csv_headers());
        assert_eq!(cells[0].1, "Foamex 10");
        assert_eq!(cells[1].1, "120");
        assert_eq!(cells[2].1, "");
        assert_eq!(cells[3].1, "13.5");
        assert_eq!(cells[8].1, "Liquid");
    }

    #[test]
    fn display_values_keep_absent_markers() {
        let record = NewSurfactant { product_name: "X".into(), ..Default::default() };
        let values = record.display_values();
        assert_eq!(values[0].as_deref(), Some("X"));
        assert!(values[1..].iter().all(Option::is_none));
    }
}
