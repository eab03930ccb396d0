// tests/notifications.rs
//
// The write path must look like real typing to a framework listening above
// the input: exactly input, change, blur, in that order, each bubbling.

use descfill::dom::{parse_snapshot, Document, Notice, PageDoc};
use descfill::fill::{fill, PageSpec};
use descfill::mapping::Mapping;

const PLACEHOLDER: &str = "Please enter a description";

fn filled_page() -> (PageDoc, descfill::dom::NodeId, descfill::dom::NodeId) {
    let html = format!(
        r#"<table><tr><th>
             <span title="AVG">AVG</span>
             <div><input placeholder="{PLACEHOLDER}"></div>
           </th></tr></table>"#
    );
    let mut doc = parse_snapshot(&html).unwrap();
    let mapping = Mapping::from_table(&[("AVG", "Batting average (H / AB)")]);
    let r = fill(&mapping, &mut doc, &PageSpec::default(), None);
    assert_eq!(r.updated, 1);

    let span = doc.candidates("title")[0];
    let th = doc.closest(span, "th").unwrap();
    let input = doc.find_input(th, PLACEHOLDER).unwrap();
    (doc, th, input)
}

#[test]
fn exactly_three_notices_in_typing_order() {
    let (doc, _, input) = filled_page();
    let notices: Vec<Notice> = doc
        .dispatches_for(input)
        .iter()
        .map(|d| d.notice)
        .collect();
    assert_eq!(notices, vec![Notice::Input, Notice::Change, Notice::Blur]);
    assert_eq!(doc.dispatches().len(), 3);
}

#[test]
fn every_notice_bubbles_through_the_container() {
    let (doc, th, input) = filled_page();
    for d in doc.dispatches() {
        assert_eq!(d.path.first(), Some(&input), "target is the input itself");
        assert!(d.path.contains(&th), "ancestor listener must observe it");
        // path runs target → root, strictly upward
        let table = doc.closest(th, "table").unwrap();
        assert!(d.path.contains(&table));
    }
}

#[test]
fn notice_names_match_the_wire_events() {
    assert_eq!(Notice::Input.name(), "input");
    assert_eq!(Notice::Change.name(), "change");
    assert_eq!(Notice::Blur.name(), "blur");
}

#[test]
fn two_fields_notify_their_own_inputs_only() {
    let html = format!(
        r#"<tr>
             <th><span title="AVG">AVG</span><input placeholder="{PLACEHOLDER}"></th>
             <th><span title="OBP">OBP</span><input placeholder="{PLACEHOLDER}"></th>
           </tr>"#
    );
    let mut doc = parse_snapshot(&html).unwrap();
    let mapping = Mapping::from_table(&[("AVG", "a"), ("OBP", "b")]);
    fill(&mapping, &mut doc, &PageSpec::default(), None);

    assert_eq!(doc.dispatches().len(), 6);
    for span in doc.candidates("title") {
        let th = doc.closest(span, "th").unwrap();
        let input = doc.find_input(th, PLACEHOLDER).unwrap();
        assert_eq!(doc.dispatches_for(input).len(), 3);
    }
}
