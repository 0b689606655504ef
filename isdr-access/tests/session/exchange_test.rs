#[path = "../common/mod.rs"]
mod common;

use isdr_access::prelude::*;
use isdr_access::transport::MockTransport;

#[test]
fn mid_chain_failure_aborts_and_closes_once() -> anyhow::Result<()> {
    common::init_logging();
    let mut mock = common::mock_with_responses(&[common::fixtures::ok(), common::fixtures::wrong_data()]);

    let plan = CommandChainer::default().plan(&common::fixtures::payload_600_hex())?;
    assert_eq!(plan.len(), 3);

    let outcome = {
        let mut session = ChannelSession::open(&mut mock, PhysicalSlot::new(1), &Aid::isd_r())?;
        session.exchange(&plan, &ResponseReassembler::default())?
    };

    assert_eq!(outcome.into_hex(), "6A80");
    // block 2 was never sent
    assert_eq!(mock.sent.len(), 2);
    assert_eq!(mock.closes.len(), 1);
    Ok(())
}

#[test]
fn full_exchange_returns_last_block_answer() -> anyhow::Result<()> {
    common::init_logging();
    let answer = common::fixtures::fragment(0x01, 6, "9000");
    let mut mock = common::mock_with_responses(&["9000", "9000", answer.as_str()]);

    let plan = CommandChainer::default().plan(&common::fixtures::payload_600_hex())?;
    let outcome = {
        let mut session = ChannelSession::open(&mut mock, PhysicalSlot::new(1), &Aid::isd_r())?;
        let outcome = session.exchange(&plan, &ResponseReassembler::default())?;
        session.close();
        outcome
    };

    assert_eq!(outcome, ExchangeOutcome::Completed(answer));
    // a success status never asks for GET RESPONSE
    assert_eq!(mock.commands().len(), 3);
    assert!(mock
        .sent
        .iter()
        .all(|(slot, ch, _)| *slot == PhysicalSlot::new(1) && *ch == ChannelHandle::new(1)));
    assert_eq!(mock.closes.len(), 1);
    Ok(())
}

#[test]
fn missing_host_response_aborts_with_sentinel() -> anyhow::Result<()> {
    let mut mock = MockTransport::new();
    mock.push_missing_response();
    mock.push_response("9000");
    mock.push_response("9000");

    let plan = CommandChainer::default().plan(&common::fixtures::payload_600_hex())?;
    let outcome = {
        let mut session = ChannelSession::open(&mut mock, PhysicalSlot::new(1), &Aid::isd_r())?;
        session.exchange(&plan, &ResponseReassembler::default())?
    };

    assert_eq!(
        outcome,
        ExchangeOutcome::ChainAborted {
            sequence: 0,
            response: CardResponse::internal_error(),
        }
    );
    assert_eq!(outcome.into_hex(), "6F00");
    assert_eq!(mock.sent.len(), 1);
    assert_eq!(mock.closes.len(), 1);
    Ok(())
}

#[test]
fn blocks_sent_in_sequence_order() -> anyhow::Result<()> {
    let mut mock = common::mock_with_responses(&["9000", "9000", "9000"]);
    let payload = common::fixtures::payload_600_hex();
    let plan = CommandChainer::default().plan(&payload)?;
    {
        let mut session = ChannelSession::open(&mut mock, PhysicalSlot::new(1), &Aid::isd_r())?;
        session.exchange(&plan, &ResponseReassembler::default())?;
    }

    let sent: String = mock.commands().iter().map(|c| c.data()).collect();
    assert_eq!(sent, payload);
    let p2: Vec<u8> = mock.commands().iter().map(|c| c.p2()).collect();
    assert_eq!(p2, vec![0, 1, 2]);
    Ok(())
}

#[test]
fn open_failure_leaves_nothing_to_close() {
    let mut mock = MockTransport::with_channel(ChannelHandle::INVALID);
    let r = ChannelSession::open(&mut mock, PhysicalSlot::new(1), &Aid::isd_r());
    assert!(matches!(r, Err(Error::ChannelUnavailable { .. })));
    drop(r);
    assert!(mock.closes.is_empty());
}

#[test]
fn panic_during_exchange_still_closes() {
    use std::panic::{AssertUnwindSafe, catch_unwind};

    let mut mock = MockTransport::new();
    let res = catch_unwind(AssertUnwindSafe(|| {
        let _session = ChannelSession::open(&mut mock, PhysicalSlot::new(1), &Aid::isd_r()).unwrap();
        panic!("host callback blew up");
    }));
    assert!(res.is_err());
    assert_eq!(mock.closes.len(), 1);
}
