//! Plain-text rendering of outcomes and tab contents

use shared::error::AppError;
use shared::models::{RevenuePeriod, Slot, SlotStatus};
use std::fmt::Write;

use super::command::COMMANDS;
use crate::core::{DeskState, Outcome, Tab};
use crate::dashboard::SeriesShape;
use crate::modal::Modal;
use crate::report::ReportForm;

pub fn help() -> String {
    let width = COMMANDS.iter().map(|(u, _)| u.chars().count()).max().unwrap_or(0);
    let mut out = String::from("Available commands:\n");
    for (usage, description) in COMMANDS {
        let pad = width - usage.chars().count();
        let _ = writeln!(out, "  {}{} - {}", usage, " ".repeat(pad), description);
    }
    out
}

pub fn error(err: &AppError) -> String {
    let category = err.code.category().name();
    match err.detail("usage").and_then(|u| u.as_str()) {
        Some(usage) if !err.message.starts_with("Usage") => format!(
            "{} error [{}]: {} (usage: {})",
            category,
            err.code.code(),
            err.message,
            usage
        ),
        _ => format!("{} error [{}]: {}", category, err.code.code(), err.message),
    }
}

fn slot_line(slot: &Slot) -> String {
    match slot.booking() {
        Some(b) => format!(
            "{} {:<9} {} since {}",
            slot.id,
            slot.status().as_str(),
            b.plate,
            b.entry
        ),
        None => format!("{} {}", slot.id, slot.status()),
    }
}

pub fn outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::TabChanged(tab) => format!("Tab: {}", tab),
        Outcome::SlotsFiltered { query, matches } if query.is_empty() => {
            format!("Showing all {} slots", matches)
        }
        Outcome::SlotsFiltered { query, matches } => {
            format!("{} slot(s) match \"{}\"", matches, query)
        }
        Outcome::PaymentsFiltered {
            matches,
            total_pages,
        } => format!("{} payment(s), page 1/{}", matches, total_pages),
        Outcome::PageChanged { page, total_pages } => format!("Page {}/{}", page, total_pages),
        Outcome::ModalOpened { modal, action } => {
            let kind = match modal {
                Modal::AssignPrompt(_) => "Assign",
                Modal::InfoPrompt(_) => "Info",
                Modal::Closed => "Closed",
            };
            let id = modal.slot_id().unwrap_or("-");
            match action {
                Some(action) => format!("{} {}: /confirm = {}, /cancel = close", kind, id, action.label()),
                None => format!("{} {}", kind, id),
            }
        }
        Outcome::ModalClosed => "Closed".to_string(),
        Outcome::SlotUpdated(slot) => format!("Updated {}", slot_line(slot)),
        Outcome::ChartChanged { period, kind } => format!("{:?} chart: {}", period, kind),
        Outcome::ReportUpdated => "Report draft updated".to_string(),
        Outcome::ReportSent(sent) => format!(
            "Report \"{}\" ({}) sent at {}",
            sent.draft.subject, sent.draft.category, sent.sent_at
        ),
        Outcome::Unchanged => "Nothing to do".to_string(),
    }
}

/// Contents of the active tab
pub fn tab(desk: &DeskState) -> String {
    match desk.tab() {
        Tab::Dashboard => dashboard(desk),
        Tab::Allotment => allotment(desk),
        Tab::Payments => payments(desk),
        Tab::WriteReport => report(desk.report()),
    }
}

fn dashboard(desk: &DeskState) -> String {
    let lot = desk.lot();
    let summary = desk.summary();
    let donut = summary.donut();
    let mut out = String::new();

    let _ = writeln!(out, "{} ({:.1}★) - {}", lot.name, lot.rating, lot.address);
    let _ = writeln!(out, "₫{}/h, admin {} <{}>", lot.price_per_hour, lot.admin_name, lot.admin_email);
    let _ = writeln!(
        out,
        "Slots: {} total, {} available, {} busy, {} booked ({}% free)",
        summary.total,
        summary.available,
        summary.busy,
        summary.booked,
        donut.available_percent()
    );

    for period in [RevenuePeriod::Week, RevenuePeriod::Month] {
        let chart = desk.chart(period);
        let series = chart.series();
        let _ = writeln!(
            out,
            "{:?} revenue ({}): ₫{} now vs ₫{} before",
            period,
            chart.kind(),
            series.current_total(),
            series.previous_total()
        );
        let points = match chart.current_shape() {
            SeriesShape::Bar { rects } => rects.len(),
            SeriesShape::Area { line, .. } => line.len(),
        };
        let ticks: Vec<String> = chart.scale().ticks().into_iter().map(|t| t.label).collect();
        let _ = writeln!(out, "  {} points, axis {}", points, ticks.join(" "));
    }
    out
}

fn allotment(desk: &DeskState) -> String {
    let slots = desk.visible_slots();
    let mut out = String::new();
    let mut area = None;
    for slot in &slots {
        if area != slot.area() {
            if area.is_some() {
                out.push('\n');
            }
            area = slot.area();
            let _ = write!(out, "{}:", area.unwrap_or('?'));
        }
        let mark = match slot.status() {
            SlotStatus::Available => '.',
            SlotStatus::Busy => '#',
            SlotStatus::Booked => 'o',
        };
        let _ = write!(out, " {}{}", slot.id, mark);
    }
    if slots.is_empty() {
        out.push_str("No slots match");
    }
    out.push_str("\n(. available, # busy, o booked)");
    if let Some(id) = desk.modal().slot_id()
        && let Some(slot) = desk.store().get(id)
    {
        let _ = write!(out, "\nSelected: {}", slot_line(slot));
    }
    out
}

fn payments(desk: &DeskState) -> String {
    let view = desk.payments();
    let page = desk.payments_page();
    let filter = view.filter();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Filter: \"{}\" status={} from={} to={}",
        filter.query,
        filter.status,
        filter.from.as_deref().unwrap_or("-"),
        filter.to.as_deref().unwrap_or("-")
    );
    for p in &page.data {
        let _ = writeln!(
            out,
            "#{:<3} {} {:<11} {} ₫{:>7} {}",
            p.id,
            p.slot,
            p.plate,
            p.time,
            p.amount,
            p.status.label()
        );
    }
    if page.data.is_empty() {
        let _ = writeln!(out, "No payments match");
    }
    let _ = write!(out, "Page {}/{} ({} total)", page.page, page.total_pages, page.total);
    match (page.has_prev(), page.has_next()) {
        (true, true) => out.push_str("  /prev /next"),
        (true, false) => out.push_str("  /prev"),
        (false, true) => out.push_str("  /next"),
        (false, false) => {}
    }
    out
}

fn report(form: &ReportForm) -> String {
    let draft = form.draft();
    let mut out = String::new();
    if let ReportForm::Sent(sent) = form {
        let _ = writeln!(out, "Sent at {} (/reset for a new report)", sent.sent_at);
    }
    let _ = writeln!(out, "Subject:  {}", draft.subject);
    let _ = writeln!(out, "Category: {}", draft.category);
    let _ = writeln!(out, "Message:  {}", draft.message);
    match &draft.attachment {
        Some(a) => {
            let _ = write!(out, "Attached: {} ({} bytes)", a.name, a.size_bytes);
        }
        None => out.push_str("Attached: -"),
    }
    out
}
