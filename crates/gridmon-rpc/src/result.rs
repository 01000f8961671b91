use gridmon_model::{FieldFilter, RESULT_FIELDS, RESULT_TOP_TAG, Record};
use serde::{Deserialize, Serialize};

use crate::{extract, format};

/// One task result row, restricted to the canonical monitoring fields.
///
/// A thin wrapper over [`Record`]: parsing delegates to [`extract::records`]
/// with the [`RESULT_FIELDS`] filter and copies each record over. Missing
/// fields stay missing, there is no schema validation on top.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultRecord(Record);

impl ResultRecord {
    /// Parses every `result` element of `document` into a [`ResultRecord`].
    pub fn parse(document: &str) -> Vec<ResultRecord> {
        Self::parse_with_tag(RESULT_TOP_TAG, document)
    }

    /// Same as [`ResultRecord::parse`] with a caller-chosen top tag.
    pub fn parse_with_tag(top_tag: &str, document: &str) -> Vec<ResultRecord> {
        let filter = FieldFilter::from_iter(RESULT_FIELDS);
        extract::records(top_tag, document, &filter)
            .into_iter()
            .map(ResultRecord::from)
            .collect()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter()
    }

    pub fn as_record(&self) -> &Record {
        &self.0
    }

    /// Display string for `field`, empty when the field is absent.
    ///
    /// # Examples
    /// ```rust
    /// use gridmon_rpc::result::ResultRecord;
    ///
    /// let reply = "<reply><result><fraction_done>0.5</fraction_done></result></reply>";
    /// let results = ResultRecord::parse(reply);
    ///
    /// assert_eq!(results[0].formatted("fraction_done"), "50%");
    /// assert_eq!(results[0].formatted("exit_status"), "");
    /// ```
    pub fn formatted(&self, field: &str) -> String {
        format::format_record_field(&self.0, field)
    }
}

impl From<Record> for ResultRecord {
    fn from(record: Record) -> Self {
        ResultRecord(record)
    }
}
