#[path = "../common/mod.rs"]
mod common;

use isdr_access::protocol::{Command, CommandChainer};

#[test]
fn six_hundred_bytes_make_three_blocks() {
    let payload = common::fixtures::payload_600_hex();
    let plan = CommandChainer::default().plan(&payload).unwrap();

    let lens: Vec<u8> = plan.iter().map(|b| b.len).collect();
    assert_eq!(lens, vec![255, 255, 90]);
    let last: Vec<bool> = plan.iter().map(|b| b.is_last).collect();
    assert_eq!(last, vec![false, false, true]);
    let seq: Vec<u8> = plan.iter().map(|b| b.sequence).collect();
    assert_eq!(seq, vec![0, 1, 2]);

    let joined: String = plan.iter().map(|b| b.data.as_str()).collect();
    assert_eq!(joined, payload);
}

#[test]
fn blocks_become_store_data_commands() {
    let payload = common::fixtures::payload_600_hex();
    let plan = CommandChainer::default().plan(&payload).unwrap();
    let cmds: Vec<Command> = plan.iter().map(Command::store_data).collect();

    let headers: Vec<(u8, u8, u8, u8, u16)> = cmds
        .iter()
        .map(|c| (c.cla(), c.ins(), c.p1(), c.p2(), c.p3()))
        .collect();
    assert_eq!(
        headers,
        vec![
            (0x80, 0xE2, 0x11, 0, 255),
            (0x80, 0xE2, 0x11, 1, 255),
            (0x80, 0xE2, 0x91, 2, 90),
        ]
    );
}

#[test]
fn single_short_payload() {
    let plan = CommandChainer::default()
        .plan(common::fixtures::get_euicc_info_request())
        .unwrap();
    assert_eq!(plan.len(), 1);
    assert!(plan[0].is_last);
    assert_eq!(plan[0].len, 3);
}
