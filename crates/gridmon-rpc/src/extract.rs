use gridmon_model::{FieldFilter, Record};
use roxmltree::Document;
use tracing::warn;

use crate::error::RpcResult;

/// Extracts one [`Record`] per `top_tag` element found in a control-channel
/// reply document.
///
/// A malformed document is logged and yields an empty vector, so callers can
/// treat "no records" and "garbled reply" the same way. Use [`try_records`]
/// when the parse error itself matters.
///
/// # Examples
/// ```rust
/// use gridmon_model::FieldFilter;
/// use gridmon_rpc::extract::records;
///
/// let reply = "<reply><msg><body>hello</body></msg></reply>";
/// let records = records("msg", reply, &FieldFilter::none());
///
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].get("body"), Some("hello"));
/// ```
pub fn records(top_tag: &str, document: &str, filter: &FieldFilter) -> Vec<Record> {
    match try_records(top_tag, document, filter) {
        Ok(records) => records,
        Err(err) => {
            warn!("discarding unparsable {top_tag} reply: {err}");
            Vec::new()
        }
    }
}

/// Fallible variant of [`records`].
///
/// Every element named `top_tag`, wherever it sits in the document, starts a
/// record. All elements beneath it are flattened into that record in document
/// order, keyed by tag name, subject to `filter`. The value of an element is
/// its first child: verbatim text when the child is a text node, the child's
/// tag name when it is an element, and the empty string when the element has
/// no children at all. Duplicate tags keep the position of the first
/// occurrence and the value of the last.
pub fn try_records(top_tag: &str, document: &str, filter: &FieldFilter) -> RpcResult<Vec<Record>> {
    let doc = Document::parse(document)?;

    let mut out = Vec::new();
    for top in doc
        .descendants()
        .filter(|node| node.is_element() && node.tag_name().name() == top_tag)
    {
        let mut record = Record::new();

        // skip(1) drops the top element itself from its own descendant walk.
        for node in top.descendants().skip(1).filter(|node| node.is_element()) {
            let name = node.tag_name().name();
            if !filter.allows(name) {
                continue;
            }

            let value = match node.first_child() {
                Some(child) if child.is_text() => child.text().unwrap_or(""),
                Some(child) => child.tag_name().name(),
                None => "",
            };
            record.insert(name, value);
        }

        out.push(record);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use gridmon_model::{FieldFilter, Record};

    use super::{records, try_records};

    const REPLY: &str = "<reply>\
        <result><name>wu_1</name><fraction_done>0.25</fraction_done></result>\
        <result><name>wu_2</name><fraction_done>0.75</fraction_done></result>\
        </reply>";

    #[test]
    fn one_record_per_top_tag_in_document_order() {
        let records = records("result", REPLY, &FieldFilter::none());

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("name"), Some("wu_1"));
        assert_eq!(records[0].get("fraction_done"), Some("0.25"));
        assert_eq!(records[1].get("name"), Some("wu_2"));
        assert_eq!(records[1].get("fraction_done"), Some("0.75"));
    }

    #[test]
    fn empty_filter_keeps_every_field() {
        let records = records("result", REPLY, &FieldFilter::none());
        assert_eq!(records[0].len(), 2);
    }

    #[test]
    fn filter_restricts_fields() {
        let filter = FieldFilter::from_iter(["name"]);
        let records = records("result", REPLY, &filter);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].len(), 1);
        assert_eq!(records[0].get("name"), Some("wu_1"));
        assert_eq!(records[0].get("fraction_done"), None);
    }

    #[test]
    fn empty_top_element_still_yields_a_record() {
        let reply = "<reply><result/><result><name>wu_2</name></result></reply>";
        let records = records("result", reply, &FieldFilter::none());

        assert_eq!(records.len(), 2);
        assert!(records[0].is_empty());
        assert_eq!(records[1].get("name"), Some("wu_2"));
    }

    #[test]
    fn nested_top_tags_are_records_and_fields_at_once() {
        let reply = "<reply><result><name>outer</name>\
            <result><name>inner</name></result></result></reply>";
        let records = records("result", reply, &FieldFilter::none());

        // The nested element starts its own record and still shows up in the
        // walk of the outer one. Tag matching is subtree-wide on purpose.
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("result"), Some("name"));
        assert_eq!(records[0].get("name"), Some("inner"));
        assert_eq!(records[1].get("name"), Some("inner"));
    }

    #[test]
    fn nested_elements_are_flattened_into_one_record() {
        let reply = "<reply><result>\
            <name>wu_1</name>\
            <active_task><active_task_state>1</active_task_state></active_task>\
            </result></reply>";
        let records = records("result", reply, &FieldFilter::none());

        assert_eq!(records.len(), 1);
        let expected: Record = [
            ("name", "wu_1"),
            ("active_task", "active_task_state"),
            ("active_task_state", "1"),
        ]
        .into_iter()
        .collect();
        assert_eq!(records[0], expected);
    }

    #[test]
    fn element_first_child_yields_child_tag_name() {
        let reply = "<reply><result><outer><inner>v</inner></outer></result></reply>";
        let records = records("result", reply, &FieldFilter::none());

        assert_eq!(records[0].get("outer"), Some("inner"));
        assert_eq!(records[0].get("inner"), Some("v"));
    }

    #[test]
    fn childless_element_yields_empty_string() {
        let reply = "<reply><result><name>wu_1</name><suspended/></result></reply>";
        let records = records("result", reply, &FieldFilter::none());

        assert_eq!(records[0].get("suspended"), Some(""));
    }

    #[test]
    fn pretty_printed_wrappers_capture_leading_whitespace() {
        let reply = "<reply><result>\n  <active_task>\n    \
            <active_task_state>1</active_task_state>\n  </active_task>\n</result></reply>";
        let records = records("result", reply, &FieldFilter::none());

        // The wrapper's first child is the indentation text node, so the
        // verbatim-text rule wins over the tag-name rule.
        assert_eq!(records[0].get("active_task"), Some("\n    "));
        assert_eq!(records[0].get("active_task_state"), Some("1"));
    }

    #[test]
    fn duplicate_tag_keeps_first_position_and_last_value() {
        let reply = "<reply><result>\
            <name>outer</name>\
            <task><name>inner</name></task>\
            </result></reply>";
        let records = records("result", reply, &FieldFilter::none());

        assert_eq!(records[0].get("name"), Some("inner"));
        let keys: Vec<&str> = records[0].iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["name", "task"]);
    }

    #[test]
    fn missing_top_tag_yields_no_records() {
        let records = records("workunit", REPLY, &FieldFilter::none());
        assert!(records.is_empty());
    }

    #[test]
    fn malformed_document_yields_empty_vec() {
        let truncated = records("result", "<reply><result><name>wu", &FieldFilter::none());
        assert!(truncated.is_empty());

        let garbage = records("result", "not xml at all", &FieldFilter::none());
        assert!(garbage.is_empty());
    }

    #[test]
    fn try_records_surfaces_the_parse_error() {
        let err = try_records("result", "<reply>", &FieldFilter::none());
        assert!(err.is_err());

        let ok = try_records("result", REPLY, &FieldFilter::none());
        assert_eq!(ok.unwrap().len(), 2);
    }

    #[test]
    fn values_are_verbatim_text() {
        let reply = "<reply><result><name>  spaced  </name><note>a&amp;b</note></result></reply>";
        let records = records("result", reply, &FieldFilter::none());

        assert_eq!(records[0].get("name"), Some("  spaced  "));
        assert_eq!(records[0].get("note"), Some("a&b"));
    }
}
