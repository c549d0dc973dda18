use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::types::LeadAttributes;

/// Top-level shape of a lead batch file.
#[derive(Debug, Deserialize, Serialize)]
pub struct LeadFile {
    pub leads: Vec<LeadAttributes>,
}

/// Load a batch of leads from a YAML or JSON file.
///
/// Files ending in `.json` parse as JSON (the format the upstream CRM
/// exports); anything else parses as YAML.
pub fn load_leads(path: &Path) -> Result<Vec<LeadAttributes>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read lead file at {}", path.display()))?;

    let file: LeadFile = if path.extension().is_some_and(|ext| ext == "json") {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse leads: invalid JSON in {}", path.display()))?
    } else {
        serde_saphyr::from_str(&content)
            .with_context(|| format!("Failed to parse leads: invalid YAML in {}", path.display()))?
    };

    Ok(file.leads)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leads::types::{CustomerType, LeadId};

    #[test]
    fn test_parse_yaml_lead_file() {
        let yaml = r#"
leads:
  - id: 1
    budget_potential: 120000
    urgency: 4
    raw_intent: 3
    interest_level: 2
    customer_type: new
  - id: walk-in-2
    name: "Niran P."
    budget_potential: 8000
    urgency: 1
    raw_intent: 1
    interest_level: 1
    customer_type: returning
"#;
        let file: LeadFile = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(file.leads.len(), 2);
        assert_eq!(file.leads[0].id, LeadId::Numeric(1));
        assert_eq!(file.leads[1].customer_type, CustomerType::Returning);
    }

    #[test]
    fn test_parse_json_lead_file() {
        let json = r#"{
          "leads": [
            {
              "id": 1042,
              "budget_potential": 250000,
              "urgency": 5,
              "raw_intent": 5,
              "interest_level": 5,
              "customer_type": "returning"
            }
          ]
        }"#;
        let file: LeadFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.leads.len(), 1);
        assert_eq!(file.leads[0].urgency, 5);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = load_leads(Path::new("/nonexistent/leads.yaml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to read"));
    }
}
