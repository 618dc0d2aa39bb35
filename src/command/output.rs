use serde::Serialize;

use crate::command::query::Query;
use crate::error::Result;

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Plain,
    Json,
}

#[derive(Serialize)]
struct QueryResult<'a> {
    query: String,
    count: usize,
    words: &'a [String],
}

impl Output {
    pub fn format(&self, query: &Query, words: &[String]) -> Result<String> {
        match self {
            Output::Plain => {
                let quoted = words.iter()
                    .map(|w| format!("'{}'", w))
                    .collect::<Vec<_>>();
                Ok(format!("[{}]", quoted.join(", ")))
            }
            Output::Json => {
                let result = QueryResult { query: query.to_string(), count: words.len(), words };
                Ok(serde_json::to_string(&result)?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::command::output::Output;
    use crate::command::query::Query;

    #[test]
    fn plain_output_is_a_list() {
        let query = Query::Complete("ca".to_string());
        let words = vec!["car".to_string(), "cat".to_string()];
        assert_eq!(Output::Plain.format(&query, &words).unwrap(), "['car', 'cat']");
        assert_eq!(Output::Plain.format(&query, &[]).unwrap(), "[]");
    }

    #[test]
    fn plain_output_keeps_spaces() {
        let query = Query::Complete("ice".to_string());
        let words = vec!["ice".to_string(), "ice cream".to_string()];
        assert_eq!(Output::Plain.format(&query, &words).unwrap(), "['ice', 'ice cream']");
    }

    #[test]
    fn json_output_carries_query_and_count() {
        let query = Query::search("atc", 3).unwrap();
        let words = vec!["cat".to_string()];
        let formatted = Output::Json.format(&query, &words).unwrap();
        let value: serde_json::Value = serde_json::from_str(&formatted).unwrap();
        assert_eq!(value, json!({"query": "search atc 3", "count": 1, "words": ["cat"]}));
    }
}
