//! Desk state - the owned application root
//!
//! `DeskState` is the single writer of the slot store. Every interaction
//! event goes through [`DeskState::apply`], which returns an [`Outcome`]
//! describing what changed; derived views are recomputed on read.

use serde::Serialize;
use shared::error::{AppError, AppResult};
use shared::models::{
    LotProfile, PaymentRecord, ReportCategory, RevenuePeriod, SentReport, Slot, sample_payments,
};
use shared::pagination::PaginatedResponse;
use std::fmt;
use std::str::FromStr;

use super::config::Config;
use crate::dashboard::{ChartKind, OccupancySummary, RevenueChart};
use crate::modal::{Interaction, Modal, ModalAction};
use crate::report::ReportForm;
use crate::slots::{RandomLayout, SlotGenerator, SlotStore};
use crate::utils::validation::{MAX_PLATE_LEN, validate_required_text};
use crate::views::{PaymentsView, StatusFilter, filter_slots};

/// Sidebar tabs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Tab {
    #[default]
    Dashboard,
    Allotment,
    Payments,
    WriteReport,
}

impl Tab {
    pub const ALL: [Tab; 4] = [
        Self::Dashboard,
        Self::Allotment,
        Self::Payments,
        Self::WriteReport,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Allotment => "Allotment",
            Self::Payments => "Payments",
            Self::WriteReport => "Write Report",
        }
    }

    /// Only the slot grid and the payment table have a search box
    pub fn has_search(&self) -> bool {
        matches!(self, Self::Allotment | Self::Payments)
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "dashboard" => Ok(Self::Dashboard),
            "allotment" | "slots" => Ok(Self::Allotment),
            "payments" => Ok(Self::Payments),
            "writereport" | "report" => Ok(Self::WriteReport),
            _ => Err(format!("unknown tab: {}", s.trim())),
        }
    }
}

/// One discrete interaction event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeskCommand {
    SwitchTab(Tab),
    /// Search box input on the active tab
    Search(String),
    SetStatus(StatusFilter),
    /// Validated `YYYY-MM-DD`, `None` clears the bound
    SetFrom(Option<String>),
    SetTo(Option<String>),
    NextPage,
    PrevPage,
    Click(String),
    Confirm,
    Cancel,
    Assign {
        slot: String,
        plate: String,
        entry: String,
    },
    Free(String),
    SetChart {
        period: RevenuePeriod,
        kind: ChartKind,
    },
    SetSubject(String),
    SetCategory(ReportCategory),
    SetMessage(String),
    Attach {
        name: String,
        size_bytes: u64,
    },
    Detach,
    Submit,
    ResetReport,
}

/// What one applied command changed
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    TabChanged(Tab),
    SlotsFiltered { query: String, matches: usize },
    PaymentsFiltered { matches: usize, total_pages: usize },
    PageChanged { page: usize, total_pages: usize },
    ModalOpened {
        modal: Modal,
        action: Option<ModalAction>,
    },
    ModalClosed,
    SlotUpdated(Slot),
    ChartChanged {
        period: RevenuePeriod,
        kind: ChartKind,
    },
    ReportUpdated,
    ReportSent(SentReport),
    /// Nothing to do (e.g. confirm with no open prompt)
    Unchanged,
}

#[derive(Debug, Clone)]
pub struct DeskState {
    store: SlotStore,
    interaction: Interaction,
    payments: PaymentsView,
    tab: Tab,
    slot_query: String,
    week_chart: RevenueChart,
    month_chart: RevenueChart,
    report: ReportForm,
    lot: LotProfile,
}

impl DeskState {
    /// Cold start: seeded layout when configured, random otherwise
    pub fn new(config: &Config) -> Self {
        match config.seed {
            Some(seed) => Self::with_generator(&mut RandomLayout::seeded(seed)),
            None => Self::with_generator(&mut RandomLayout::from_entropy()),
        }
    }

    pub fn with_generator(generator: &mut impl SlotGenerator) -> Self {
        Self::with_parts(SlotStore::generate(generator), sample_payments())
    }

    pub fn with_parts(store: SlotStore, payments: Vec<PaymentRecord>) -> Self {
        Self {
            store,
            interaction: Interaction::new(),
            payments: PaymentsView::new(payments),
            tab: Tab::default(),
            slot_query: String::new(),
            week_chart: RevenueChart::weekly(),
            month_chart: RevenueChart::monthly(),
            report: ReportForm::new(),
            lot: LotProfile::demo(),
        }
    }

    // ========== Read access ==========

    pub fn store(&self) -> &SlotStore {
        &self.store
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn modal(&self) -> &Modal {
        self.interaction.modal()
    }

    pub fn offered_action(&self) -> Option<ModalAction> {
        self.interaction.offered_action(&self.store)
    }

    pub fn slot_query(&self) -> &str {
        &self.slot_query
    }

    /// Slot grid after the search box
    pub fn visible_slots(&self) -> Vec<&Slot> {
        filter_slots(self.store.slots(), &self.slot_query)
    }

    pub fn payments(&self) -> &PaymentsView {
        &self.payments
    }

    pub fn payments_page(&self) -> PaginatedResponse<PaymentRecord> {
        self.payments.current_page()
    }

    pub fn summary(&self) -> OccupancySummary {
        self.store.counts()
    }

    pub fn chart(&self, period: RevenuePeriod) -> &RevenueChart {
        match period {
            RevenuePeriod::Week => &self.week_chart,
            RevenuePeriod::Month => &self.month_chart,
        }
    }

    pub fn report(&self) -> &ReportForm {
        &self.report
    }

    pub fn lot(&self) -> &LotProfile {
        &self.lot
    }

    // ========== Dispatch ==========

    /// Apply one interaction event
    ///
    /// A failing command leaves the state as it was, except that a failing
    /// modal confirm still closes the modal.
    pub fn apply(&mut self, command: DeskCommand) -> AppResult<Outcome> {
        tracing::debug!(?command, tab = %self.tab, "Applying desk command");
        let outcome = match command {
            DeskCommand::SwitchTab(tab) => {
                self.tab = tab;
                Outcome::TabChanged(tab)
            }
            DeskCommand::Search(query) => self.search(query)?,
            DeskCommand::SetStatus(status) => {
                self.payments.set_status(status);
                self.payments_filtered()
            }
            DeskCommand::SetFrom(from) => {
                self.payments.set_from(from);
                self.payments_filtered()
            }
            DeskCommand::SetTo(to) => {
                self.payments.set_to(to);
                self.payments_filtered()
            }
            DeskCommand::NextPage => {
                self.payments.next_page();
                self.page_changed()
            }
            DeskCommand::PrevPage => {
                self.payments.prev_page();
                self.page_changed()
            }
            DeskCommand::Click(id) => {
                let modal = self.interaction.click(&self.store, &id)?.clone();
                Outcome::ModalOpened {
                    modal,
                    action: self.offered_action(),
                }
            }
            DeskCommand::Confirm => match self.interaction.confirm(&mut self.store)? {
                Some(slot) => Outcome::SlotUpdated(slot),
                None => Outcome::Unchanged,
            },
            DeskCommand::Cancel => {
                if !self.interaction.modal().is_open() {
                    return Ok(Outcome::Unchanged);
                }
                self.interaction.cancel();
                Outcome::ModalClosed
            }
            DeskCommand::Assign { slot, plate, entry } => {
                validate_required_text(&plate, "plate", MAX_PLATE_LEN)?;
                Outcome::SlotUpdated(self.store.assign(&slot, plate, entry)?.clone())
            }
            DeskCommand::Free(slot) => Outcome::SlotUpdated(self.store.free(&slot)?.clone()),
            DeskCommand::SetChart { period, kind } => {
                match period {
                    RevenuePeriod::Week => self.week_chart.set_kind(kind),
                    RevenuePeriod::Month => self.month_chart.set_kind(kind),
                }
                Outcome::ChartChanged { period, kind }
            }
            DeskCommand::SetSubject(subject) => {
                self.report.set_subject(subject)?;
                Outcome::ReportUpdated
            }
            DeskCommand::SetCategory(category) => {
                self.report.set_category(category)?;
                Outcome::ReportUpdated
            }
            DeskCommand::SetMessage(message) => {
                self.report.set_message(message)?;
                Outcome::ReportUpdated
            }
            DeskCommand::Attach { name, size_bytes } => {
                self.report.attach(name, size_bytes)?;
                Outcome::ReportUpdated
            }
            DeskCommand::Detach => {
                self.report.detach()?;
                Outcome::ReportUpdated
            }
            DeskCommand::Submit => Outcome::ReportSent(self.report.submit()?.clone()),
            DeskCommand::ResetReport => {
                self.report.reset();
                Outcome::ReportUpdated
            }
        };
        Ok(outcome)
    }

    fn search(&mut self, query: String) -> AppResult<Outcome> {
        match self.tab {
            Tab::Allotment => {
                self.slot_query = query;
                Ok(Outcome::SlotsFiltered {
                    matches: self.visible_slots().len(),
                    query: self.slot_query.clone(),
                })
            }
            Tab::Payments => {
                self.payments.set_query(query);
                Ok(self.payments_filtered())
            }
            tab => Err(AppError::invalid_request(format!("{} has no search box", tab))
                .with_detail("tab", tab.label())),
        }
    }

    fn payments_filtered(&self) -> Outcome {
        Outcome::PaymentsFiltered {
            matches: self.payments.filtered().len(),
            total_pages: self.payments.total_pages(),
        }
    }

    fn page_changed(&self) -> Outcome {
        Outcome::PageChanged {
            page: self.payments.page(),
            total_pages: self.payments.total_pages(),
        }
    }
}
