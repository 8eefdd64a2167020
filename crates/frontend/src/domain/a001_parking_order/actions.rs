//! Row actions of the admin orders table
//!
//! Requests are issued one at a time, in the order the ids are given. A
//! failed request is logged and recorded; the loop carries on with the next
//! id. Every action returns an [`ActionOutcome`] and the caller decides what
//! to refresh and what to deselect.

use contracts::enums::OrderStatus;
use std::collections::HashSet;

use super::api;
use crate::shared::browser;
use crate::shared::config::BulkSelectionPolicy;

pub const CONFIRM_DELETE_ONE: &str = "Are you sure you want to delete this order?";
pub const CONFIRM_DELETE_SELECTED: &str = "Are you sure you want to delete all selected orders?";
pub const NOTICE_STATUS_UPDATED: &str = "Order updated successfully";

/// Order mutations the dispatcher needs from the backend
#[allow(async_fn_in_trait)]
pub trait OrdersBackend {
    async fn delete_order(&self, id: &str) -> Result<(), String>;
    async fn update_order_status(&self, id: &str, status: OrderStatus) -> Result<(), String>;
}

/// Interactive confirmation and notices
pub trait UserPrompt {
    fn confirm(&self, message: &str) -> bool;
    fn notify(&self, message: &str);
}

/// `/api/order` over HTTP
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpOrdersBackend;

impl OrdersBackend for HttpOrdersBackend {
    async fn delete_order(&self, id: &str) -> Result<(), String> {
        api::delete_order(id).await
    }

    async fn update_order_status(&self, id: &str, status: OrderStatus) -> Result<(), String> {
        api::update_order_status(id, status).await
    }
}

/// `window.confirm` / `window.alert`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPrompt;

impl UserPrompt for BrowserPrompt {
    fn confirm(&self, message: &str) -> bool {
        browser::confirm(message)
    }

    fn notify(&self, message: &str) {
        browser::alert(message)
    }
}

/// Per-item result of a (possibly single-item) mutation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BulkOutcome {
    pub succeeded: Vec<String>,
    /// `(id, error message)`
    pub failed: Vec<(String, String)>,
}

impl BulkOutcome {
    pub fn attempted(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn failed_ids(&self) -> HashSet<String> {
        self.failed.iter().map(|(id, _)| id.clone()).collect()
    }

    /// Remove ids from the selection according to `policy`
    pub fn apply_to_selection(&self, selection: &mut HashSet<String>, policy: BulkSelectionPolicy) {
        match policy {
            BulkSelectionPolicy::ClearAll => selection.clear(),
            BulkSelectionPolicy::KeepFailed => self.deselect_succeeded(selection),
        }
    }

    /// Drop only the ids that went through; used for single-row actions
    pub fn deselect_succeeded(&self, selection: &mut HashSet<String>) {
        for id in &self.succeeded {
            selection.remove(id);
        }
    }

    fn record(&mut self, id: &str, result: Result<(), String>) {
        match result {
            Ok(()) => self.succeeded.push(id.to_string()),
            Err(e) => self.failed.push((id.to_string(), e)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The user declined the confirmation; nothing was sent
    Cancelled,
    Completed(BulkOutcome),
}

impl ActionOutcome {
    /// Whether the backend may have changed and the list should be re-fetched
    pub fn needs_refresh(&self) -> bool {
        match self {
            ActionOutcome::Cancelled => false,
            ActionOutcome::Completed(outcome) => !outcome.succeeded.is_empty(),
        }
    }

    pub fn bulk(&self) -> Option<&BulkOutcome> {
        match self {
            ActionOutcome::Cancelled => None,
            ActionOutcome::Completed(outcome) => Some(outcome),
        }
    }
}

/// Allows one mutating action at a time so bulk loops never interleave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionGate {
    busy: bool,
}

impl ActionGate {
    /// `false` when another action is still running
    pub fn try_begin(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    pub fn finish(&mut self) {
        self.busy = false;
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }
}

pub async fn delete_one<B, P>(backend: &B, prompt: &P, id: &str) -> ActionOutcome
where
    B: OrdersBackend,
    P: UserPrompt,
{
    if !prompt.confirm(CONFIRM_DELETE_ONE) {
        log::debug!("Delete of order {} cancelled", id);
        return ActionOutcome::Cancelled;
    }

    let mut outcome = BulkOutcome::default();
    let result = backend.delete_order(id).await;
    if let Err(e) = &result {
        log::error!("Failed to delete order {}: {}", id, e);
    }
    outcome.record(id, result);
    ActionOutcome::Completed(outcome)
}

pub async fn delete_selected<B, P>(backend: &B, prompt: &P, ids: &[String]) -> ActionOutcome
where
    B: OrdersBackend,
    P: UserPrompt,
{
    if ids.is_empty() {
        return ActionOutcome::Completed(BulkOutcome::default());
    }
    if !prompt.confirm(CONFIRM_DELETE_SELECTED) {
        log::debug!("Bulk delete of {} orders cancelled", ids.len());
        return ActionOutcome::Cancelled;
    }

    let mut outcome = BulkOutcome::default();
    for id in ids {
        let result = backend.delete_order(id).await;
        if let Err(e) = &result {
            log::error!("Failed to delete order {}: {}", id, e);
        }
        outcome.record(id, result);
    }
    log::info!(
        "Bulk delete finished: {} deleted, {} failed",
        outcome.succeeded.len(),
        outcome.failed.len()
    );
    ActionOutcome::Completed(outcome)
}

pub async fn set_status_for_selected<B, P>(
    backend: &B,
    prompt: &P,
    ids: &[String],
    status: OrderStatus,
    policy: BulkSelectionPolicy,
) -> ActionOutcome
where
    B: OrdersBackend,
    P: UserPrompt,
{
    if ids.is_empty() {
        return ActionOutcome::Completed(BulkOutcome::default());
    }

    let mut outcome = BulkOutcome::default();
    for id in ids {
        let result = backend.update_order_status(id, status).await;
        if let Err(e) = &result {
            log::error!("Failed to update status of order {}: {}", id, e);
        }
        outcome.record(id, result);
    }
    prompt.notify(&status_update_notice(&outcome, policy));
    ActionOutcome::Completed(outcome)
}

/// Notice shown after a bulk status update.
///
/// `ClearAll` keeps the historical unconditional success message.
pub fn status_update_notice(outcome: &BulkOutcome, policy: BulkSelectionPolicy) -> String {
    if outcome.all_succeeded() || policy == BulkSelectionPolicy::ClearAll {
        return NOTICE_STATUS_UPDATED.to_string();
    }
    format!(
        "{} of {} orders updated, {} failed",
        outcome.succeeded.len(),
        outcome.attempted(),
        outcome.failed.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct FakeBackend {
        calls: RefCell<Vec<String>>,
        failing: HashSet<String>,
    }

    impl FakeBackend {
        fn failing_on(ids: &[&str]) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                failing: ids.iter().map(|s| s.to_string()).collect(),
            }
        }

        fn result_for(&self, id: &str) -> Result<(), String> {
            if self.failing.contains(id) {
                Err("Failed to send request: network down".to_string())
            } else {
                Ok(())
            }
        }
    }

    impl OrdersBackend for FakeBackend {
        async fn delete_order(&self, id: &str) -> Result<(), String> {
            self.calls.borrow_mut().push(format!("DELETE {}", id));
            self.result_for(id)
        }

        async fn update_order_status(&self, id: &str, status: OrderStatus) -> Result<(), String> {
            self.calls.borrow_mut().push(format!("PUT {} {}", id, status));
            self.result_for(id)
        }
    }

    struct FakePrompt {
        answer: bool,
        confirms: Cell<usize>,
        notices: RefCell<Vec<String>>,
    }

    impl FakePrompt {
        fn answering(answer: bool) -> Self {
            Self {
                answer,
                confirms: Cell::new(0),
                notices: RefCell::new(Vec::new()),
            }
        }
    }

    impl UserPrompt for FakePrompt {
        fn confirm(&self, _message: &str) -> bool {
            self.confirms.set(self.confirms.get() + 1);
            self.answer
        }

        fn notify(&self, message: &str) {
            self.notices.borrow_mut().push(message.to_string());
        }
    }

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_delete_one_declined_sends_nothing() {
        let backend = FakeBackend::default();
        let prompt = FakePrompt::answering(false);
        let outcome = block_on(delete_one(&backend, &prompt, "o-1"));
        assert_eq!(outcome, ActionOutcome::Cancelled);
        assert!(!outcome.needs_refresh());
        assert!(backend.calls.borrow().is_empty());
        assert_eq!(prompt.confirms.get(), 1);
    }

    #[test]
    fn test_delete_one_confirmed() {
        let backend = FakeBackend::default();
        let prompt = FakePrompt::answering(true);
        let outcome = block_on(delete_one(&backend, &prompt, "o-1"));
        assert_eq!(*backend.calls.borrow(), vec!["DELETE o-1"]);
        assert!(outcome.needs_refresh());
    }

    #[test]
    fn test_delete_one_failure_does_not_request_refresh() {
        let backend = FakeBackend::failing_on(&["o-1"]);
        let prompt = FakePrompt::answering(true);
        let outcome = block_on(delete_one(&backend, &prompt, "o-1"));
        assert!(!outcome.needs_refresh());
        assert_eq!(outcome.bulk().unwrap().failed_ids(), ["o-1".to_string()].into_iter().collect());
    }

    #[test]
    fn test_delete_selected_continues_after_failure() {
        let backend = FakeBackend::failing_on(&["b"]);
        let prompt = FakePrompt::answering(true);
        let outcome = block_on(delete_selected(&backend, &prompt, &ids(&["a", "b", "c"])));

        assert_eq!(*backend.calls.borrow(), vec!["DELETE a", "DELETE b", "DELETE c"]);
        let bulk = outcome.bulk().unwrap();
        assert_eq!(bulk.succeeded, ids(&["a", "c"]));
        assert_eq!(bulk.failed.len(), 1);
        assert!(outcome.needs_refresh());
    }

    #[test]
    fn test_delete_selected_declined() {
        let backend = FakeBackend::default();
        let prompt = FakePrompt::answering(false);
        let outcome = block_on(delete_selected(&backend, &prompt, &ids(&["a", "b"])));
        assert_eq!(outcome, ActionOutcome::Cancelled);
        assert!(backend.calls.borrow().is_empty());
    }

    #[test]
    fn test_bulk_status_update_legacy_policy_clears_everything() {
        let backend = FakeBackend::failing_on(&["b"]);
        let prompt = FakePrompt::answering(true);
        let selected = ids(&["a", "b", "c"]);
        let mut selection: HashSet<String> = selected.iter().cloned().collect();

        let outcome = block_on(set_status_for_selected(
            &backend,
            &prompt,
            &selected,
            OrderStatus::Used,
            BulkSelectionPolicy::ClearAll,
        ));
        outcome.bulk().unwrap().apply_to_selection(&mut selection, BulkSelectionPolicy::ClearAll);

        assert_eq!(*backend.calls.borrow(), vec!["PUT a used", "PUT b used", "PUT c used"]);
        assert!(selection.is_empty());
        assert_eq!(*prompt.notices.borrow(), vec![NOTICE_STATUS_UPDATED]);
        assert_eq!(prompt.confirms.get(), 0);
    }

    #[test]
    fn test_bulk_status_update_keeps_failed_selected() {
        let backend = FakeBackend::failing_on(&["b"]);
        let prompt = FakePrompt::answering(true);
        let selected = ids(&["a", "b", "c"]);
        let mut selection: HashSet<String> = selected.iter().cloned().collect();

        let outcome = block_on(set_status_for_selected(
            &backend,
            &prompt,
            &selected,
            OrderStatus::Expired,
            BulkSelectionPolicy::KeepFailed,
        ));
        outcome.bulk().unwrap().apply_to_selection(&mut selection, BulkSelectionPolicy::KeepFailed);

        assert_eq!(backend.calls.borrow().len(), 3);
        assert_eq!(selection, ["b".to_string()].into_iter().collect());
        assert_eq!(*prompt.notices.borrow(), vec!["2 of 3 orders updated, 1 failed"]);
    }

    #[test]
    fn test_single_delete_keeps_other_selected_rows() {
        let backend = FakeBackend::default();
        let prompt = FakePrompt::answering(true);
        let mut selection: HashSet<String> = ids(&["a", "b", "x"]).into_iter().collect();

        let outcome = block_on(delete_one(&backend, &prompt, "x"));
        outcome.bulk().unwrap().deselect_succeeded(&mut selection);

        assert_eq!(selection, ids(&["a", "b"]).into_iter().collect());
    }

    #[test]
    fn test_failed_single_delete_leaves_selection_alone() {
        let backend = FakeBackend::failing_on(&["x"]);
        let prompt = FakePrompt::answering(true);
        let mut selection: HashSet<String> = ids(&["a", "x"]).into_iter().collect();

        let outcome = block_on(delete_one(&backend, &prompt, "x"));
        outcome.bulk().unwrap().deselect_succeeded(&mut selection);

        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_action_gate_rejects_overlapping_actions() {
        let mut gate = ActionGate::default();
        assert!(gate.try_begin());
        assert!(gate.is_busy());
        assert!(!gate.try_begin());
        gate.finish();
        assert!(!gate.is_busy());
        assert!(gate.try_begin());
    }

    #[test]
    fn test_empty_selection_is_a_no_op() {
        let backend = FakeBackend::default();
        let prompt = FakePrompt::answering(true);
        let outcome = block_on(set_status_for_selected(
            &backend,
            &prompt,
            &[],
            OrderStatus::Booked,
            BulkSelectionPolicy::KeepFailed,
        ));
        assert!(!outcome.needs_refresh());
        assert!(prompt.notices.borrow().is_empty());
        assert_eq!(prompt.confirms.get(), 0);
    }
}
