use serde::{Deserialize, Serialize};

/// One answer to one question in a completed session.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ResponseRecord {
    #[serde(alias = "questionId")]
    pub question_id: String,
    pub value: ResponseValue,
}

impl ResponseRecord {
    pub fn new(question_id: impl Into<String>, value: impl Into<ResponseValue>) -> Self {
        Self {
            question_id: question_id.into(),
            value: value.into(),
        }
    }
}

/// Answer payload. Untagged on the wire: a number, a string, an array of
/// strings or a boolean.
///
/// Any other shape (`null`, an object, a numeric array) is a parse error,
/// which fails the whole session file rather than skipping the response.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum ResponseValue {
    /// Rating-scale answer
    Rating(f64),
    /// Yes/no answer
    Flag(bool),
    /// Single multiple-choice selection
    Choice(String),
    /// Multiselect answer
    MultiChoice(Vec<String>),
}

impl From<f64> for ResponseValue {
    fn from(v: f64) -> Self {
        ResponseValue::Rating(v)
    }
}

impl From<bool> for ResponseValue {
    fn from(v: bool) -> Self {
        ResponseValue::Flag(v)
    }
}

impl From<&str> for ResponseValue {
    fn from(v: &str) -> Self {
        ResponseValue::Choice(v.to_string())
    }
}

impl From<String> for ResponseValue {
    fn from(v: String) -> Self {
        ResponseValue::Choice(v)
    }
}

impl From<Vec<String>> for ResponseValue {
    fn from(v: Vec<String>) -> Self {
        ResponseValue::MultiChoice(v)
    }
}

impl From<Vec<&str>> for ResponseValue {
    fn from(v: Vec<&str>) -> Self {
        ResponseValue::MultiChoice(v.into_iter().map(String::from).collect())
    }
}

/// Question bank entry, reduced to what scoring needs.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Question {
    pub id: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl Question {
    pub fn new(id: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            weight: None,
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Weight used when scoring. Missing, zero and NaN weights count as 1.0.
    pub fn effective_weight(&self) -> f64 {
        match self.weight {
            Some(w) if w != 0.0 && !w.is_nan() => w,
            _ => 1.0,
        }
    }
}
