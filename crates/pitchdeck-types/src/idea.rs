//! Startup idea input.
//!
//! `IdeaFields` is the raw submission as it arrives over the wire (every
//! field optional). `IdeaFields::validate` turns it into an [`Idea`], which
//! guarantees the five required fields are present and non-empty.

use serde::{Deserialize, Serialize};

use crate::error::IdeaError;

/// Text substituted for an idea's competitors when none were given.
pub const NOT_AVAILABLE: &str = "N/A";

/// Raw idea submission from the form or the JSON API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaFields {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub oneliner: Option<String>,
    #[serde(default)]
    pub problem: Option<String>,
    #[serde(default)]
    pub features: Option<String>,
    #[serde(default)]
    pub business_model: Option<String>,
    #[serde(default)]
    pub competitors: Option<String>,
}

/// A validated startup idea.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub name: String,
    pub oneliner: String,
    pub problem: String,
    pub features: String,
    pub business_model: String,
    pub competitors: Option<String>,
}

/// Keep a field only when it carries text.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn required(value: Option<String>, field: &'static str) -> Result<String, IdeaError> {
    present(value).ok_or(IdeaError::MissingField(field))
}

impl IdeaFields {
    /// Check that every required field is present and non-empty.
    ///
    /// Fields are checked in form order; the first missing one is reported.
    /// An empty `competitors` is treated the same as an absent one.
    pub fn validate(self) -> Result<Idea, IdeaError> {
        Ok(Idea {
            name: required(self.name, "name")?,
            oneliner: required(self.oneliner, "oneliner")?,
            problem: required(self.problem, "problem")?,
            features: required(self.features, "features")?,
            business_model: required(self.business_model, "businessModel")?,
            competitors: present(self.competitors),
        })
    }
}

impl Idea {
    /// Competitors text, or `N/A` when none were given.
    pub fn competitors_or_na(&self) -> &str {
        self.competitors.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// The labelled, newline-separated idea description fed into both prompts.
    pub fn summary(&self) -> String {
        format!(
            "{}: {}\nProblem: {}\nFeatures: {}\nBusiness Model: {}\nCompetitors: {}",
            self.name,
            self.oneliner,
            self.problem,
            self.features,
            self.business_model,
            self.competitors_or_na(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_fields() -> IdeaFields {
        IdeaFields {
            name: Some("Acme".into()),
            oneliner: Some("Rockets for everyone".into()),
            problem: Some("Rockets are expensive".into()),
            features: Some("Reusable boosters".into()),
            business_model: Some("Subscription".into()),
            competitors: Some("SpaceCo".into()),
        }
    }

    #[test]
    fn validate_accepts_complete_fields() {
        let idea = full_fields().validate().unwrap();
        assert_eq!(idea.name, "Acme");
        assert_eq!(idea.competitors.as_deref(), Some("SpaceCo"));
    }

    #[test]
    fn validate_reports_each_missing_required_field() {
        let cases: [(&str, fn(&mut IdeaFields)); 5] = [
            ("name", |f| f.name = None),
            ("oneliner", |f| f.oneliner = None),
            ("problem", |f| f.problem = None),
            ("features", |f| f.features = None),
            ("businessModel", |f| f.business_model = None),
        ];
        for (field, clear) in cases {
            let mut fields = full_fields();
            clear(&mut fields);
            assert_eq!(
                fields.validate().unwrap_err(),
                IdeaError::MissingField(field),
                "expected {field} to be reported"
            );
        }
    }

    #[test]
    fn validate_treats_empty_string_as_missing() {
        let mut fields = full_fields();
        fields.problem = Some(String::new());
        assert_eq!(
            fields.validate().unwrap_err(),
            IdeaError::MissingField("problem")
        );
    }

    #[test]
    fn validate_reports_first_missing_field_in_form_order() {
        let fields = IdeaFields::default();
        assert_eq!(fields.validate().unwrap_err(), IdeaError::MissingField("name"));
    }

    #[test]
    fn competitors_are_optional() {
        let mut fields = full_fields();
        fields.competitors = None;
        let idea = fields.validate().unwrap();
        assert_eq!(idea.competitors, None);
        assert_eq!(idea.competitors_or_na(), "N/A");

        let mut fields = full_fields();
        fields.competitors = Some(String::new());
        assert_eq!(fields.validate().unwrap().competitors, None);
    }

    #[test]
    fn summary_uses_fixed_labels() {
        let idea = full_fields().validate().unwrap();
        assert_eq!(
            idea.summary(),
            "Acme: Rockets for everyone\nProblem: Rockets are expensive\nFeatures: Reusable boosters\nBusiness Model: Subscription\nCompetitors: SpaceCo"
        );
    }

    #[test]
    fn summary_without_competitors_says_na() {
        let mut fields = full_fields();
        fields.competitors = None;
        let summary = fields.validate().unwrap().summary();
        assert!(summary.ends_with("\nCompetitors: N/A"));
    }

    #[test]
    fn fields_deserialize_from_camel_case_json() {
        let json = r#"{"name":"A","oneliner":"B","problem":"C","features":"D","businessModel":"E"}"#;
        let fields: IdeaFields = serde_json::from_str(json).unwrap();
        assert_eq!(fields.business_model.as_deref(), Some("E"));
        assert!(fields.competitors.is_none());
    }

    #[test]
    fn fields_accept_explicit_null() {
        let json = r#"{"name":null,"oneliner":"B"}"#;
        let fields: IdeaFields = serde_json::from_str(json).unwrap();
        assert!(fields.name.is_none());
    }
}
