use serde::{Deserialize, Serialize};

// Models for submissions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    /// the source text to feed through the external compiler; absent and
    /// `null` deserialize to `None`
    #[serde(default)]
    pub(crate) code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_null_code_both_deserialize_to_none() {
        let absent: Submission = serde_json::from_str("{}").unwrap();
        assert!(absent.code.is_none());

        let null: Submission = serde_json::from_str(r#"{"code": null}"#).unwrap();
        assert!(null.code.is_none());
    }

    #[test]
    fn code_text_is_preserved_exactly() {
        let submission: Submission =
            serde_json::from_str(r#"{"code": "x = 2 + 3 * (4 - 1);\n"}"#).unwrap();
        assert_eq!(submission.code.as_deref(), Some("x = 2 + 3 * (4 - 1);\n"));
    }
}
