#[path = "../common/mod.rs"]
mod common;

use std::sync::Arc;
use std::thread;

use isdr_access::prelude::*;
use isdr_access::transport::MockTransport;

#[test]
fn query_returns_reassembled_hex() -> anyhow::Result<()> {
    common::init_logging();
    let svc = common::mock_service(&["BF20039000"])?;
    assert_eq!(svc.query(common::fixtures::get_euicc_info_request())?, "BF20039000");
    Ok(())
}

#[test]
fn query_mid_chain_failure_is_data() -> anyhow::Result<()> {
    let svc = common::mock_service(&["9000", "6A80"])?;
    let out = svc.query(&common::fixtures::payload_600_hex())?;
    assert_eq!(out, "6A80");

    let mock = svc.into_transport();
    assert_eq!(mock.sent.len(), 2);
    assert_eq!(mock.closes.len(), 1);
    Ok(())
}

#[test]
fn query_channel_unavailable_is_sentinel() -> anyhow::Result<()> {
    let svc = SessionBuilder::new()
        .with_transport(MockTransport::with_channel(ChannelHandle::INVALID))
        .build()?;
    assert_eq!(svc.query("00")?, "6F00");
    assert!(svc.into_transport().closes.is_empty());
    Ok(())
}

#[test]
fn query_malformed_card_response_is_sentinel() -> anyhow::Result<()> {
    let svc = common::mock_service(&["90"])?;
    assert_eq!(svc.query("00")?, "6F00");
    Ok(())
}

#[test]
fn query_rejects_bad_input() {
    let svc = common::mock_service(&[]).unwrap();
    match svc.query("12G4") {
        Err(Error::InvalidInput(_)) => {}
        other => panic!("expected InvalidInput, got {:?}", other),
    }
    assert!(svc.into_transport().opens.is_empty());
}

#[test]
fn custom_slot_and_aid_reach_transport() -> anyhow::Result<()> {
    let svc = SessionBuilder::new()
        .with_transport(common::mock_with_responses(&["9000"]))
        .slot(PhysicalSlot::new(0))
        .aid(Aid::try_from("A000000151000000")?)
        .build()?;
    svc.query("00")?;

    let mock = svc.into_transport();
    assert_eq!(mock.opens, vec![(PhysicalSlot::new(0), "A000000151000000".to_string())]);
    assert_eq!(mock.closes, vec![(PhysicalSlot::new(0), ChannelHandle::new(1))]);
    Ok(())
}

#[test]
fn concurrent_queries_never_overlap_channels() -> anyhow::Result<()> {
    let responses: Vec<String> = (0..8).map(|_| "9000".to_string()).collect();
    let refs: Vec<&str> = responses.iter().map(String::as_str).collect();
    let svc = Arc::new(common::mock_service(&refs)?);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let svc = Arc::clone(&svc);
            thread::spawn(move || svc.query("00"))
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().expect("query thread")?, "9000");
    }

    let mock = Arc::try_unwrap(svc)
        .map_err(|_| anyhow::anyhow!("service still shared"))?
        .into_transport();
    assert_eq!(mock.opens.len(), 8);
    assert_eq!(mock.closes.len(), 8);
    Ok(())
}
