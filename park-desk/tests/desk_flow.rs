// park-desk/tests/desk_flow.rs
// 集成测试 - 前台完整交互流程

use std::io::Cursor;

use park_desk::slots::{DEMO_BOOKED_PLATE, DEMO_ENTRY, FixedLayout, RandomLayout, SlotGenerator};
use park_desk::views::StatusFilter;
use park_desk::{Config, DeskCommand, DeskState, ErrorCode, Modal, Outcome, SlotStore, Tab, console};
use shared::models::{Booking, PaymentRecord, PaymentStatus, Slot, SlotStatus};

fn payments(n: u32) -> Vec<PaymentRecord> {
    (1..=n)
        .map(|id| PaymentRecord {
            id,
            slot: format!("C{:02}", id % 12 + 1),
            plate: format!("51F-{:03}.{:02}", id, id % 7),
            time: format!("2024-06-{:02} {:02}:15", id % 4 + 1, id % 24),
            amount: 5_000 * id as i64,
            status: if id % 3 == 0 {
                PaymentStatus::Paid
            } else {
                PaymentStatus::Unpaid
            },
        })
        .collect()
}

fn c05_desk(payment_count: u32) -> DeskState {
    let store = SlotStore::generate(&mut FixedLayout::new().with(Slot::booked(
        "C05",
        Booking::new(DEMO_BOOKED_PLATE, DEMO_ENTRY),
    )));
    DeskState::with_parts(store, payments(payment_count))
}

fn assert_invariants(desk: &DeskState) {
    let slots = desk.store().slots();
    assert_eq!(slots.len(), 48);
    for slot in slots {
        assert_eq!(slot.occupied(), slot.status() != SlotStatus::Available, "{}", slot.id);
        assert_eq!(slot.booking().is_some(), slot.occupied(), "{}", slot.id);
    }
    let ids: Vec<&str> = slots.iter().map(|s| s.id.as_str()).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
}

#[test]
fn test_c05_booked_slot_becomes_busy() {
    let mut desk = c05_desk(5);
    desk.apply(DeskCommand::SwitchTab(Tab::Allotment)).unwrap();

    desk.apply(DeskCommand::Click("C05".into())).unwrap();
    assert_eq!(desk.modal(), &Modal::InfoPrompt("C05".into()));

    desk.apply(DeskCommand::Confirm).unwrap();
    assert_eq!(desk.modal(), &Modal::Closed);

    let c05 = desk.store().get("C05").unwrap();
    assert_eq!(c05.status(), SlotStatus::Busy);
    assert!(c05.occupied());
    assert_eq!(c05.booking().unwrap().plate, "59A-123.45");
    assert_eq!(c05.booking().unwrap().entry, "2024-06-01 09:00");
    assert_invariants(&desk);
}

#[test]
fn test_invariants_hold_through_mixed_operations() {
    let mut desk = DeskState::with_generator(&mut RandomLayout::seeded(2024));
    assert_invariants(&desk);

    let ids: Vec<String> = desk.store().slots().iter().map(|s| s.id.clone()).collect();
    for (i, id) in ids.iter().enumerate() {
        let command = match i % 4 {
            0 => DeskCommand::Free(id.clone()),
            1 => DeskCommand::Assign {
                slot: id.clone(),
                plate: format!("PL-{i}"),
                entry: "2024-06-03 12:00".into(),
            },
            2 => DeskCommand::Click(id.clone()),
            _ => DeskCommand::Confirm,
        };
        desk.apply(command).unwrap();
        assert_invariants(&desk);
    }
}

#[test]
fn test_busy_slot_returned_through_modal() {
    let mut desk = c05_desk(5);
    desk.apply(DeskCommand::Assign {
        slot: "D01".into(),
        plate: "29A-555.55".into(),
        entry: "2024-06-01 08:00".into(),
    })
    .unwrap();

    desk.apply(DeskCommand::Click("D01".into())).unwrap();
    let outcome = desk.apply(DeskCommand::Confirm).unwrap();
    assert_eq!(outcome, Outcome::SlotUpdated(Slot::available("D01")));
}

#[test]
fn test_modal_exclusivity() {
    let mut desk = c05_desk(5);
    desk.apply(DeskCommand::Click("A01".into())).unwrap();
    desk.apply(DeskCommand::Click("C05".into())).unwrap();
    desk.apply(DeskCommand::Cancel).unwrap();

    let before = desk.store().slots().to_vec();
    assert_eq!(desk.apply(DeskCommand::Confirm).unwrap(), Outcome::Unchanged);
    assert_eq!(desk.store().slots(), before.as_slice());
}

#[test]
fn test_payments_pagination_and_reset() {
    let mut desk = c05_desk(25);
    desk.apply(DeskCommand::SwitchTab(Tab::Payments)).unwrap();
    assert_eq!(desk.payments().total_pages(), 3);

    for expected in [2, 3, 3] {
        let outcome = desk.apply(DeskCommand::NextPage).unwrap();
        assert_eq!(
            outcome,
            Outcome::PageChanged {
                page: expected,
                total_pages: 3
            }
        );
    }
    assert_eq!(desk.payments_page().data.len(), 5);

    desk.apply(DeskCommand::SetStatus(StatusFilter::Only(PaymentStatus::Paid)))
        .unwrap();
    assert_eq!(desk.payments().page(), 1);
    // ids 3, 6, .., 24
    assert_eq!(desk.payments().filtered().len(), 8);

    desk.apply(DeskCommand::SetStatus(StatusFilter::All)).unwrap();
    desk.apply(DeskCommand::NextPage).unwrap();
    desk.apply(DeskCommand::Search("51F".into())).unwrap();
    assert_eq!(desk.payments().page(), 1);

    desk.apply(DeskCommand::NextPage).unwrap();
    desk.apply(DeskCommand::SetFrom(Some("2024-06-02".into()))).unwrap();
    assert_eq!(desk.payments().page(), 1);
    assert!(
        desk.payments()
            .filtered()
            .iter()
            .all(|p| p.date() >= "2024-06-02")
    );
}

#[test]
fn test_seeded_layouts_are_reproducible() {
    let a = DeskState::new(&Config::default().with_seed(99));
    let b = DeskState::new(&Config::default().with_seed(99));
    assert_eq!(a.store().slots(), b.store().slots());

    let generated = RandomLayout::seeded(99).generate();
    assert_eq!(a.store().slots(), generated.as_slice());
}

#[test]
fn test_report_requires_fields() {
    let mut desk = c05_desk(5);
    desk.apply(DeskCommand::SwitchTab(Tab::WriteReport)).unwrap();

    let err = desk.apply(DeskCommand::Submit).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationFailed);
    assert_eq!(err.detail("field").unwrap(), "subject");

    desk.apply(DeskCommand::SetSubject("Thiếu biên lai".into())).unwrap();
    desk.apply(DeskCommand::SetMessage("Máy in ở cổng A hết giấy".into())).unwrap();
    assert!(matches!(
        desk.apply(DeskCommand::Submit).unwrap(),
        Outcome::ReportSent(_)
    ));
    assert!(desk.report().is_sent());
}

#[test]
fn test_console_script() {
    let mut desk = c05_desk(25);
    let script = "\
/tab allotment
/search c0
/click c05
/confirm
/tab payments
/next
/next
/next
/status paid
/tab dashboard
/search x
/quit
";
    let mut out = Vec::new();
    console::run(&mut desk, Cursor::new(script), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("9 slot(s) match \"c0\""));
    assert!(out.contains("Info C05"));
    assert!(out.contains("Updated C05 busy"));
    assert!(out.contains("Page 3/3"));
    assert!(out.contains("8 payment(s), page 1/1"));
    assert!(out.contains(&format!("error [{}]", ErrorCode::InvalidRequest.code())));
    assert_eq!(desk.store().get("C05").unwrap().status(), SlotStatus::Busy);
}
