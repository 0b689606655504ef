#[path = "../common/mod.rs"]
mod common;

use isdr_access::protocol::{CardResponse, ResponseReassembler};

#[test]
fn three_step_continuation() {
    let bb = "BB".repeat(128);
    let mut fragments = vec![
        CardResponse::parse(Some("AA6100")),
        CardResponse::parse(Some(&format!("{}9000", bb))),
    ]
    .into_iter();
    let mut requested = Vec::new();

    let out = ResponseReassembler::default()
        .reassemble(CardResponse::parse(Some("6103")), |le| {
            requested.push(le);
            Ok(fragments.next().unwrap_or_else(CardResponse::internal_error))
        })
        .unwrap();

    assert_eq!(requested, vec![3, 256]);
    assert_eq!(out, format!("AA{}9000", bb));
}

#[test]
fn first_response_data_is_kept() {
    let out = ResponseReassembler::default()
        .reassemble(CardResponse::parse(Some("01026101")), |_| {
            Ok(CardResponse::parse(Some("039000")))
        })
        .unwrap();
    assert_eq!(out, "0102039000");
}
