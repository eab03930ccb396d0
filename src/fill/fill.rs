// src/fill/fill.rs
//
// The field filler: one pass over the page's candidates, dictionary lookup,
// raw-value write, then the input→change→blur notice sequence a framework
// expects from genuine typing. Per-field problems become counters, never
// aborts.

use crate::dom::{Document, Notice};
use crate::mapping::Mapping;
use crate::params::{CANDIDATE_ATTR, CONTAINER_TAG, INPUT_PLACEHOLDER};
use crate::report::ReportSink;

/// Where the fillable fields live on a page: which attribute names a column,
/// which ancestor kind holds the field, which placeholder marks the input.
#[derive(Clone, Copy, Debug)]
pub struct PageSpec {
    pub candidate_attr: &'static str,
    pub container_tag: &'static str,
    pub input_placeholder: &'static str,
}

impl Default for PageSpec {
    fn default() -> Self {
        Self {
            candidate_attr: CANDIDATE_ATTR,
            container_tag: CONTAINER_TAG,
            input_placeholder: INPUT_PLACEHOLDER,
        }
    }
}

/// Per-candidate outcome, reported to the sink as it happens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Description written and notified. `overwrote` when a non-empty value
    /// was already present.
    Updated { overwrote: bool },
    /// Column not in the mapping. No side effect.
    Skipped,
    /// Structural mismatch or rejected write.
    Failed(String),
}

/// Counts for one run. Always satisfies
/// `updated + skipped + failed == total`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunResult {
    pub updated: u32,
    pub skipped: u32,
    pub failed: u32,
    pub total: u32,
}

/// Fill every candidate field on `doc` from `mapping`.
///
/// Each candidate is visited exactly once; a failure on one field never
/// affects the rest. The run itself cannot fail — setup problems (no
/// document at all) are the caller's to rule out before this point.
pub fn fill<D: Document>(
    mapping: &Mapping,
    doc: &mut D,
    spec: &PageSpec,
    mut sink: Option<&mut (dyn ReportSink + '_)>,
) -> RunResult {
    let candidates = doc.candidates(spec.candidate_attr);
    let mut result = RunResult {
        total: candidates.len() as u32,
        ..RunResult::default()
    };

    if let Some(s) = sink.as_deref_mut() {
        s.begin(candidates.len());
    }

    for id in candidates {
        let name = doc
            .attr(id, spec.candidate_attr)
            .unwrap_or_default()
            .to_string();

        let Some(text) = mapping.get(&name) else {
            result.skipped += 1;
            if let Some(s) = sink.as_deref_mut() {
                s.field_done(&name, &Outcome::Skipped);
            }
            continue;
        };

        let outcome = match fill_one(doc, id, spec, text) {
            Ok(overwrote) => {
                result.updated += 1;
                Outcome::Updated { overwrote }
            }
            Err(msg) => {
                result.failed += 1;
                Outcome::Failed(msg)
            }
        };
        if let Some(s) = sink.as_deref_mut() {
            s.field_done(&name, &outcome);
        }
    }

    result
}

fn fill_one<D: Document>(
    doc: &mut D,
    candidate: crate::dom::NodeId,
    spec: &PageSpec,
    text: &str,
) -> Result<bool, String> {
    let container = doc
        .closest(candidate, spec.container_tag)
        .ok_or_else(|| format!("could not find <{}> ancestor", spec.container_tag))?;
    let input = doc
        .find_input(container, spec.input_placeholder)
        .ok_or_else(|| s!("could not find description input"))?;

    let overwrote = !doc.value(input).trim().is_empty();

    // Raw write first, then the notices that make a framework pick it up.
    doc.set_value_raw(input, text).map_err(|e| e.to_string())?;
    doc.notify(input, Notice::Input).map_err(|e| e.to_string())?;
    doc.notify(input, Notice::Change).map_err(|e| e.to_string())?;
    doc.notify(input, Notice::Blur).map_err(|e| e.to_string())?;

    Ok(overwrote)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::PageDoc;
    use crate::mapping::Mapping;

    fn one_field_doc(title: &str) -> (PageDoc, crate::dom::NodeId) {
        let mut doc = PageDoc::new();
        let th = doc.add("th", &[], None);
        doc.add("span", &[("title", title)], Some(th));
        let input = doc.add(
            "input",
            &[("placeholder", "Please enter a description")],
            Some(th),
        );
        (doc, input)
    }

    #[test]
    fn matched_candidate_is_written_and_counted() {
        let (mut doc, input) = one_field_doc("AVG");
        let mapping = Mapping::from_table(&[("AVG", "Batting average (H / AB)")]);
        let r = fill(&mapping, &mut doc, &PageSpec::default(), None);
        assert_eq!(r, RunResult { updated: 1, skipped: 0, failed: 0, total: 1 });
        assert_eq!(crate::dom::Document::value(&doc, input), "Batting average (H / AB)");
    }

    #[test]
    fn container_without_input_counts_failed() {
        let mut doc = PageDoc::new();
        let th = doc.add("th", &[], None);
        doc.add("span", &[("title", "AVG")], Some(th));
        let mapping = Mapping::from_table(&[("AVG", "x")]);
        let r = fill(&mapping, &mut doc, &PageSpec::default(), None);
        assert_eq!(r, RunResult { updated: 0, skipped: 0, failed: 1, total: 1 });
    }

    #[test]
    fn candidate_without_container_counts_failed() {
        let mut doc = PageDoc::new();
        doc.add("span", &[("title", "AVG")], None);
        let mapping = Mapping::from_table(&[("AVG", "x")]);
        let r = fill(&mapping, &mut doc, &PageSpec::default(), None);
        assert_eq!(r.failed, 1);
        assert_eq!(r.total, 1);
    }
}
