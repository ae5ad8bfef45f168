//! # Transaction Controller
//!
//! Runs every user action against the backend and reports the outcome as state
//! events. The controller holds no screen state itself: callers pass in the
//! dispatchers that apply [`ListEvent`]s and [`FormEvent`]s to their snapshots,
//! and the page to reload afterwards.
//!
//! Failures are caught here, logged, and shown once through [`Dialogs::alert`].

use std::cell::Cell;
use std::rc::Rc;

use crate::api::{TransactionApi, Transport};
use crate::error::ClientError;
use crate::form::{FormEvent, TransactionForm};
use crate::model::TransactionId;
use crate::pagination::{Generation, ListEvent, PageRequest};

pub const LOAD_FAILED: &str = "无法加载交易数据";
pub const SUBMIT_FAILED: &str = "操作失败，请重试";
pub const DELETE_FAILED: &str = "删除失败";
pub const DELETE_CONFIRM: &str = "确定要删除此交易吗？";

/// Blocking user prompts
pub trait Dialogs {
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
}

/// Per-row buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit(TransactionId),
    Delete(TransactionId),
}

pub struct TransactionController<T, D> {
    api: Rc<TransactionApi<T>>,
    dialogs: Rc<D>,
    generation: Rc<Cell<Generation>>,
}

impl<T, D> Clone for TransactionController<T, D> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            dialogs: Rc::clone(&self.dialogs),
            generation: Rc::clone(&self.generation),
        }
    }
}

impl<T: Transport, D: Dialogs> TransactionController<T, D> {
    pub fn new(api: TransactionApi<T>, dialogs: D) -> Self {
        Self {
            api: Rc::new(api),
            dialogs: Rc::new(dialogs),
            generation: Rc::new(Cell::new(0)),
        }
    }

    pub fn api(&self) -> &TransactionApi<T> {
        &self.api
    }

    pub fn dialogs(&self) -> &D {
        &self.dialogs
    }

    fn next_generation(&self) -> Generation {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        next
    }

    /// Fetch a page. Emits `LoadStarted`, then exactly one of `LoadSucceeded` / `LoadFailed`.
    pub async fn load(&self, request: PageRequest, dispatch: &dyn Fn(ListEvent)) -> bool {
        let generation = self.next_generation();
        dispatch(ListEvent::LoadStarted { generation });

        match self.api.list(request).await {
            Ok(page) => {
                log::info!(
                    "loaded page {}/{} ({} rows, {} total)",
                    request.page,
                    page.total_pages,
                    page.content.len(),
                    page.total_elements
                );
                dispatch(ListEvent::LoadSucceeded {
                    generation,
                    request,
                    page,
                });
                true
            }
            Err(err) => {
                self.report(&err, &format!("{}: {}", LOAD_FAILED, err));
                dispatch(ListEvent::LoadFailed { generation });
                false
            }
        }
    }

    /// Fetch the record behind a row and open the form on it. On failure the form stays closed.
    pub async fn open_edit(&self, id: TransactionId, form_dispatch: &dyn Fn(FormEvent)) -> bool {
        match self.api.get(id).await {
            Ok(transaction) => {
                form_dispatch(FormEvent::OpenEdit(transaction));
                true
            }
            Err(err) => {
                self.report(&err, LOAD_FAILED);
                false
            }
        }
    }

    /// Create or update from the form, then close it and reload the list
    pub async fn submit(
        &self,
        form: &TransactionForm,
        reload: PageRequest,
        dispatch: &dyn Fn(ListEvent),
        form_dispatch: &dyn Fn(FormEvent),
    ) -> bool {
        let saved = match form.to_transaction() {
            Ok(transaction) => self.api.save(&transaction).await,
            Err(err) => Err(err),
        };

        if let Err(err) = saved {
            self.report(&err, SUBMIT_FAILED);
            return false;
        }

        form_dispatch(FormEvent::Close);
        self.load(reload, dispatch).await;
        true
    }

    /// Delete after confirmation, then reload the same page.
    ///
    /// The page number is not adjusted, so removing the last row of the last page
    /// leaves an empty page on screen until the user navigates back.
    pub async fn delete(
        &self,
        id: TransactionId,
        reload: PageRequest,
        dispatch: &dyn Fn(ListEvent),
    ) -> bool {
        if !self.dialogs.confirm(DELETE_CONFIRM) {
            log::debug!("delete of {} cancelled", id);
            return false;
        }

        if let Err(err) = self.api.delete(id).await {
            self.report(&err, DELETE_FAILED);
            return false;
        }

        log::info!("deleted transaction {}", id);
        self.load(reload, dispatch).await;
        true
    }

    pub async fn handle_row_action(
        &self,
        action: RowAction,
        reload: PageRequest,
        dispatch: &dyn Fn(ListEvent),
        form_dispatch: &dyn Fn(FormEvent),
    ) {
        match action {
            RowAction::Edit(id) => {
                self.open_edit(id, form_dispatch).await;
            }
            RowAction::Delete(id) => {
                self.delete(id, reload, dispatch).await;
            }
        }
    }

    fn report(&self, err: &ClientError, message: &str) {
        match err {
            ClientError::Http { body, .. } if !body.is_empty() => {
                log::error!("[{}] {}: {}", err.code(), err, body)
            }
            _ => log::error!("[{}] {}", err.code(), err),
        }
        self.dialogs.alert(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiRequest, ApiResponse, Method};
    use crate::error::{ClientResult, Operation};
    use crate::form::{FormField, FormState};
    use crate::pagination::ListState;
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    #[derive(Default)]
    struct RecordingTransport {
        requests: RefCell<Vec<ApiRequest>>,
        responses: RefCell<VecDeque<ClientResult<ApiResponse>>>,
    }

    impl RecordingTransport {
        fn respond(&self, status: u16, body: &str) {
            self.responses.borrow_mut().push_back(Ok(ApiResponse {
                status,
                body: body.to_string(),
            }));
        }

        fn fail(&self, operation: Operation) {
            self.responses
                .borrow_mut()
                .push_back(Err(ClientError::network(operation, "connection refused")));
        }

        fn calls(&self) -> Vec<(Method, String)> {
            self.requests
                .borrow()
                .iter()
                .map(|r| (r.method, r.path.clone()))
                .collect()
        }
    }

    #[async_trait(?Send)]
    impl Transport for RecordingTransport {
        async fn send(&self, request: ApiRequest) -> ClientResult<ApiResponse> {
            self.requests.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop_front()
                .expect("unexpected request")
        }
    }

    #[derive(Default)]
    struct ScriptedDialogs {
        answer: bool,
        confirms: RefCell<Vec<String>>,
        alerts: RefCell<Vec<String>>,
    }

    impl Dialogs for ScriptedDialogs {
        fn confirm(&self, message: &str) -> bool {
            self.confirms.borrow_mut().push(message.to_string());
            self.answer
        }

        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }
    }

    type TestController = TransactionController<RecordingTransport, ScriptedDialogs>;

    fn controller(confirm: bool) -> TestController {
        let dialogs = ScriptedDialogs {
            answer: confirm,
            ..ScriptedDialogs::default()
        };
        TransactionController::new(
            TransactionApi::new(RecordingTransport::default(), "/api/transactions"),
            dialogs,
        )
    }

    const PAGE_ONE: &str = r#"{
        "content": [
            {"id": 1, "type": "DEPOSIT", "amount": 100, "status": "PENDING"},
            {"id": 2, "type": "WITHDRAWAL", "amount": 20.5, "status": "COMPLETED"}
        ],
        "totalElements": 12,
        "totalPages": 2
    }"#;

    const FIRST: PageRequest = PageRequest { page: 1, size: 10 };

    /// Applies events to a `ListState` like the frontend reducer does
    struct ListHarness {
        state: RefCell<ListState>,
        events: RefCell<Vec<ListEvent>>,
    }

    impl ListHarness {
        fn new() -> Self {
            Self {
                state: RefCell::new(ListState::new(10)),
                events: RefCell::new(Vec::new()),
            }
        }

        fn dispatch(&self, event: ListEvent) {
            let next = self.state.borrow().apply(event.clone());
            *self.state.borrow_mut() = next;
            self.events.borrow_mut().push(event);
        }
    }

    struct FormHarness {
        state: RefCell<FormState>,
    }

    impl FormHarness {
        fn new(state: FormState) -> Self {
            Self {
                state: RefCell::new(state),
            }
        }

        fn dispatch(&self, event: FormEvent) {
            let next = self.state.borrow().apply(event);
            *self.state.borrow_mut() = next;
        }
    }

    #[tokio::test]
    async fn test_load_renders_page() {
        let controller = controller(true);
        controller.api().transport().respond(200, PAGE_ONE);
        let list = ListHarness::new();

        assert!(controller.load(FIRST, &|e| list.dispatch(e)).await);

        let state = list.state.borrow();
        assert_eq!(state.transactions.len(), 2);
        assert_eq!(state.total_elements, 12);
        assert_eq!(state.total_pages, 2);
        assert_eq!(
            controller.api().transport().calls(),
            vec![(Method::Get, "/api/transactions?page=1&size=10".to_string())]
        );
        assert!(controller.dialogs().alerts.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_missing_content_alerts_and_keeps_table() {
        let controller = controller(true);
        controller.api().transport().respond(200, PAGE_ONE);
        controller
            .api()
            .transport()
            .respond(200, r#"{"totalElements": 3, "totalPages": 1}"#);
        let list = ListHarness::new();

        controller.load(FIRST, &|e| list.dispatch(e)).await;
        let before = list.state.borrow().transactions.clone();

        assert!(!controller.load(FIRST, &|e| list.dispatch(e)).await);

        assert_eq!(list.state.borrow().transactions, before);
        assert_eq!(list.state.borrow().total_elements, 12);
        assert_eq!(
            controller.dialogs().alerts.borrow().as_slice(),
            &["无法加载交易数据: Invalid data format".to_string()]
        );
    }

    #[tokio::test]
    async fn test_http_error_on_load_alerts_without_retry() {
        let controller = controller(true);
        controller.api().transport().respond(500, "boom");
        let list = ListHarness::new();

        assert!(!controller.load(FIRST, &|e| list.dispatch(e)).await);
        assert_eq!(controller.api().transport().calls().len(), 1);
        assert_eq!(controller.dialogs().alerts.borrow().len(), 1);
        assert!(controller.dialogs().alerts.borrow()[0].starts_with(LOAD_FAILED));
        assert!(!list.state.borrow().loading);
    }

    #[tokio::test]
    async fn test_each_load_takes_a_new_generation() {
        let controller = controller(true);
        controller.api().transport().respond(200, PAGE_ONE);
        controller.api().transport().respond(200, PAGE_ONE);
        let list = ListHarness::new();

        controller.load(FIRST, &|e| list.dispatch(e)).await;
        controller.load(FIRST, &|e| list.dispatch(e)).await;

        let started: Vec<Generation> = list
            .events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                ListEvent::LoadStarted { generation } => Some(*generation),
                _ => None,
            })
            .collect();
        assert_eq!(started, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_submit_new_transaction_posts() {
        let controller = controller(true);
        controller.api().transport().respond(201, r#"{"id": 13}"#);
        controller.api().transport().respond(200, PAGE_ONE);
        let list = ListHarness::new();
        let form = FormHarness::new(
            FormState::Closed
                .apply(FormEvent::OpenCreate)
                .apply(FormEvent::FieldChanged(FormField::Type, "DEPOSIT".into()))
                .apply(FormEvent::FieldChanged(FormField::Amount, "50".into())),
        );
        let fields = form.state.borrow().fields().cloned().unwrap();

        let ok = controller
            .submit(&fields, FIRST, &|e| list.dispatch(e), &|e| form.dispatch(e))
            .await;

        assert!(ok);
        assert_eq!(*form.state.borrow(), FormState::Closed);
        let calls = controller.api().transport().calls();
        assert_eq!(calls[0], (Method::Post, "/api/transactions".to_string()));
        assert_eq!(calls[1].0, Method::Get);
        let body = controller.api().transport().requests.borrow()[0].body.clone().unwrap();
        assert_eq!(body["type"], "DEPOSIT");
        assert!(body.get("id").is_none());
    }

    #[tokio::test]
    async fn test_submit_existing_transaction_puts() {
        let controller = controller(true);
        controller.api().transport().respond(200, r#"{"id": 5}"#);
        controller.api().transport().respond(200, PAGE_ONE);
        let list = ListHarness::new();
        let form = FormHarness::new(FormState::Closed);

        let mut fields = TransactionForm::default();
        fields.id = "5".into();
        fields.amount = "9.99".into();

        controller
            .submit(&fields, FIRST, &|e| list.dispatch(e), &|e| form.dispatch(e))
            .await;

        assert_eq!(
            controller.api().transport().calls()[0],
            (Method::Put, "/api/transactions/5".to_string())
        );
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_form_open() {
        let controller = controller(true);
        controller.api().transport().respond(400, "Transaction amount must be greater than 0");
        let list = ListHarness::new();
        let open = FormState::Closed
            .apply(FormEvent::OpenCreate)
            .apply(FormEvent::FieldChanged(FormField::Amount, "-1".into()));
        let form = FormHarness::new(open.clone());
        let fields = open.fields().cloned().unwrap();

        let ok = controller
            .submit(&fields, FIRST, &|e| list.dispatch(e), &|e| form.dispatch(e))
            .await;

        assert!(!ok);
        assert_eq!(*form.state.borrow(), open);
        assert_eq!(controller.api().transport().calls().len(), 1);
        assert_eq!(
            controller.dialogs().alerts.borrow().as_slice(),
            &[SUBMIT_FAILED.to_string()]
        );
    }

    #[tokio::test]
    async fn test_unparseable_amount_sends_nothing() {
        let controller = controller(true);
        let list = ListHarness::new();
        let form = FormHarness::new(FormState::Closed.apply(FormEvent::OpenCreate));
        let mut fields = TransactionForm::default();
        fields.amount = "lots".into();

        assert!(
            !controller
                .submit(&fields, FIRST, &|e| list.dispatch(e), &|e| form.dispatch(e))
                .await
        );
        assert!(controller.api().transport().calls().is_empty());
        assert_eq!(controller.dialogs().alerts.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_without_confirmation_sends_nothing() {
        let controller = controller(false);
        let list = ListHarness::new();

        assert!(!controller.delete(7, FIRST, &|e| list.dispatch(e)).await);

        assert!(controller.api().transport().calls().is_empty());
        assert_eq!(
            controller.dialogs().confirms.borrow().as_slice(),
            &[DELETE_CONFIRM.to_string()]
        );
    }

    #[tokio::test]
    async fn test_confirmed_delete_then_reloads() {
        let controller = controller(true);
        controller.api().transport().respond(204, "");
        controller.api().transport().respond(200, PAGE_ONE);
        let list = ListHarness::new();
        let reload = PageRequest { page: 2, size: 10 };

        assert!(controller.delete(7, reload, &|e| list.dispatch(e)).await);

        assert_eq!(
            controller.api().transport().calls(),
            vec![
                (Method::Delete, "/api/transactions/7".to_string()),
                (Method::Get, "/api/transactions?page=2&size=10".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_delete_alerts_and_skips_reload() {
        let controller = controller(true);
        controller.api().transport().respond(404, "");
        let list = ListHarness::new();

        assert!(!controller.delete(7, FIRST, &|e| list.dispatch(e)).await);
        assert_eq!(controller.api().transport().calls().len(), 1);
        assert_eq!(
            controller.dialogs().alerts.borrow().as_slice(),
            &[DELETE_FAILED.to_string()]
        );
        assert!(list.events.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_edit_action_opens_populated_form() {
        let controller = controller(true);
        controller.api().transport().respond(
            200,
            r#"{"id": 4, "type": "REFUND", "amount": 3.5, "status": "CANCELLED", "originalTransactionId": 1}"#,
        );
        let list = ListHarness::new();
        let form = FormHarness::new(FormState::Closed);

        controller
            .handle_row_action(RowAction::Edit(4), FIRST, &|e| list.dispatch(e), &|e| form.dispatch(e))
            .await;

        let state = form.state.borrow();
        assert_eq!(state.title(), "编辑交易");
        let fields = state.fields().unwrap();
        assert_eq!(fields.id, "4");
        assert_eq!(fields.transaction_type, "REFUND");
        assert_eq!(fields.original_transaction_id, "1");
        assert_eq!(
            controller.api().transport().calls(),
            vec![(Method::Get, "/api/transactions/4".to_string())]
        );
    }

    #[tokio::test]
    async fn test_edit_fetch_failure_leaves_form_closed() {
        let controller = controller(true);
        controller.api().transport().fail(Operation::Fetch);
        let list = ListHarness::new();
        let form = FormHarness::new(FormState::Closed);

        controller
            .handle_row_action(RowAction::Edit(4), FIRST, &|e| list.dispatch(e), &|e| form.dispatch(e))
            .await;

        assert_eq!(*form.state.borrow(), FormState::Closed);
        assert_eq!(
            controller.dialogs().alerts.borrow().as_slice(),
            &[LOAD_FAILED.to_string()]
        );
    }

    #[tokio::test]
    async fn test_delete_row_action_routes_to_delete() {
        let controller = controller(false);
        let list = ListHarness::new();
        let form = FormHarness::new(FormState::Closed);

        controller
            .handle_row_action(RowAction::Delete(7), FIRST, &|e| list.dispatch(e), &|e| form.dispatch(e))
            .await;

        assert_eq!(controller.dialogs().confirms.borrow().len(), 1);
        assert!(controller.api().transport().calls().is_empty());
    }
}
