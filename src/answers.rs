//! Respondent answers and defensive accessors.
//!
//! The survey front-end hands over a loosely-typed JSON object. Everything in
//! the engine reads it through the accessors below, which never fail: a value
//! of the wrong shape is indistinguishable from a skipped question.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Question id carrying the respondent's status.
pub const ROLE_QUESTION: &str = "profil_statut";

/// `profil_statut` values that route a respondent through the clergy branch.
const CLERGY_STATUSES: &[&str] = &["clerge", "religieux"];

/// One answer, tagged by the shape of question that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// Single-choice question (a category token such as `"souvent"`).
    Choice(String),
    /// Multi-select question.
    Multi(Vec<String>),
    /// Numeric slider or Likert value.
    Scale(f64),
    /// Matrix question: row id -> numeric rating.
    Matrix(BTreeMap<String, f64>),
    /// Free text. Never produced by JSON decoding (strings decode as `Choice`).
    Text(String),
}

impl AnswerValue {
    /// Lenient conversion from a raw JSON value. Returns `None` for shapes
    /// no survey question produces.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::Choice(s.clone())),
            Value::Number(n) => n.as_f64().filter(|v| v.is_finite()).map(Self::Scale),
            Value::Array(items) => {
                let tokens: Vec<String> = items
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect();
                if tokens.len() != items.len() {
                    return None;
                }
                Some(Self::Multi(tokens))
            }
            Value::Object(rows) => {
                let matrix: BTreeMap<String, f64> = rows
                    .iter()
                    .filter_map(|(row, v)| {
                        v.as_f64()
                            .filter(|x| x.is_finite())
                            .map(|x| (row.clone(), x))
                    })
                    .collect();
                if matrix.is_empty() {
                    None
                } else {
                    Some(Self::Matrix(matrix))
                }
            }
            Value::Null | Value::Bool(_) => None,
        }
    }
}

/// Immutable snapshot of one respondent's answers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Answers {
    values: HashMap<String, AnswerValue>,
}

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly for tests and synthetic respondents.
    pub fn with(mut self, key: impl Into<String>, value: AnswerValue) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: AnswerValue) {
        self.values.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&AnswerValue> {
        self.values.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Build from a decoded JSON object, dropping values of unusable shape.
    pub fn from_json_object(object: &serde_json::Map<String, Value>) -> Self {
        let mut values = HashMap::with_capacity(object.len());
        for (key, raw) in object {
            match AnswerValue::from_json(raw) {
                Some(value) => {
                    values.insert(key.clone(), value);
                }
                None => {
                    tracing::debug!(question = %key, "dropping answer with unusable shape");
                }
            }
        }
        Self { values }
    }

    /// Build from any JSON value; a non-object yields an empty answer set.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Object(object) => Self::from_json_object(object),
            _ => {
                tracing::debug!("answers payload is not a JSON object; treating as empty");
                Self::default()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Answers {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(Self::from_json(&raw))
    }
}

impl FromIterator<(String, AnswerValue)> for Answers {
    fn from_iter<I: IntoIterator<Item = (String, AnswerValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------
//  Accessors
// ---------------------------------------------------------------------

/// String answer for `key`, or `""` when absent or not a string.
pub fn get_string_answer<'a>(answers: &'a Answers, key: &str) -> &'a str {
    match answers.get(key) {
        Some(AnswerValue::Choice(s)) | Some(AnswerValue::Text(s)) => s.as_str(),
        _ => "",
    }
}

/// Numeric answer for `key`, or `0.0` on a miss. Numeric strings are parsed.
pub fn get_number_answer(answers: &Answers, key: &str) -> f64 {
    number_answer(answers, key).unwrap_or(0.0)
}

/// Numeric answer for `key` if one is present and finite.
pub fn number_answer(answers: &Answers, key: &str) -> Option<f64> {
    match answers.get(key) {
        Some(AnswerValue::Scale(v)) if v.is_finite() => Some(*v),
        Some(AnswerValue::Choice(s)) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

/// Multi-select answer for `key`, or an empty slice.
pub fn get_array_answer<'a>(answers: &'a Answers, key: &str) -> &'a [String] {
    match answers.get(key) {
        Some(AnswerValue::Multi(items)) => items.as_slice(),
        _ => &[],
    }
}

/// Matrix answer for `key`, if present.
pub fn get_matrix_answer<'a>(answers: &'a Answers, key: &str) -> Option<&'a BTreeMap<String, f64>> {
    match answers.get(key) {
        Some(AnswerValue::Matrix(rows)) => Some(rows),
        _ => None,
    }
}

pub fn is_clergy(answers: &Answers) -> bool {
    CLERGY_STATUSES.contains(&get_string_answer(answers, ROLE_QUESTION))
}

pub fn is_layperson(answers: &Answers) -> bool {
    !is_clergy(answers)
}

/// Which branch of the survey the respondent went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RespondentRole {
    Clergy,
    Layperson,
}

impl RespondentRole {
    /// Resolve once per scoring call; a missing status counts as lay.
    pub fn from_answers(answers: &Answers) -> Self {
        if is_clergy(answers) {
            Self::Clergy
        } else {
            Self::Layperson
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clergy => "clergy",
            Self::Layperson => "layperson",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accessors_default_on_missing_and_wrong_shape() {
        let answers = Answers::new()
            .with("a", AnswerValue::Scale(4.0))
            .with("b", AnswerValue::Choice("souvent".into()));

        assert_eq!(get_string_answer(&answers, "a"), "");
        assert_eq!(get_string_answer(&answers, "missing"), "");
        assert_eq!(get_string_answer(&answers, "b"), "souvent");
        assert_eq!(get_number_answer(&answers, "b"), 0.0);
        assert_eq!(get_number_answer(&answers, "a"), 4.0);
        assert!(get_array_answer(&answers, "a").is_empty());
        assert!(get_matrix_answer(&answers, "b").is_none());
    }

    #[test]
    fn numeric_strings_are_parsed() {
        let answers = Answers::new().with("n", AnswerValue::Choice(" 3.5 ".into()));
        assert_eq!(get_number_answer(&answers, "n"), 3.5);

        let answers = Answers::new().with("n", AnswerValue::Choice("NaN".into()));
        assert_eq!(get_number_answer(&answers, "n"), 0.0);
    }

    #[test]
    fn lenient_json_decoding_drops_bad_values() {
        let raw = json!({
            "choice": "souvent",
            "scale": 4,
            "multi": ["a", "b"],
            "mixed": ["a", 1],
            "matrix": {"x": 2, "y": "oops"},
            "flag": true,
            "nothing": null,
            "empty_matrix": {"x": "no"}
        });
        let answers: Answers = serde_json::from_value(raw).unwrap();

        assert_eq!(answers.len(), 4);
        assert_eq!(get_string_answer(&answers, "choice"), "souvent");
        assert_eq!(get_number_answer(&answers, "scale"), 4.0);
        assert_eq!(get_array_answer(&answers, "multi").len(), 2);
        assert!(!answers.contains("mixed"));
        let matrix = get_matrix_answer(&answers, "matrix").unwrap();
        assert_eq!(matrix.len(), 1);
        assert!(!answers.contains("flag"));
        assert!(!answers.contains("empty_matrix"));
    }

    #[test]
    fn non_object_payload_is_empty() {
        let answers: Answers = serde_json::from_value(json!([1, 2, 3])).unwrap();
        assert!(answers.is_empty());
    }

    #[test]
    fn role_classification() {
        for status in ["clerge", "religieux"] {
            let answers = Answers::new().with(ROLE_QUESTION, AnswerValue::Choice(status.into()));
            assert!(is_clergy(&answers));
            assert!(!is_layperson(&answers));
            assert_eq!(RespondentRole::from_answers(&answers), RespondentRole::Clergy);
        }

        let lay = Answers::new().with(ROLE_QUESTION, AnswerValue::Choice("laic".into()));
        assert!(is_layperson(&lay));
        assert_eq!(RespondentRole::from_answers(&Answers::new()), RespondentRole::Layperson);

        let wrong_shape = Answers::new().with(ROLE_QUESTION, AnswerValue::Scale(1.0));
        assert_eq!(
            RespondentRole::from_answers(&wrong_shape),
            RespondentRole::Layperson
        );
    }
}
