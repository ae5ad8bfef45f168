use std::rc::Rc;

use shared::{
    ClientConfig, FormEvent, FormField, FormState, ListEvent, ListState, Navigation, PageRequest,
    RowAction, TransactionApi, TransactionController,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::GlooTransport;
use crate::services::dialogs::BrowserDialogs;
use crate::services::logging::Logger;

pub type AppController = TransactionController<GlooTransport, BrowserDialogs>;

const COMPONENT: &str = "transactions-hook";

/// Yew store around the list snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct ListStore(pub ListState);

impl Reducible for ListStore {
    type Action = ListEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(ListStore(self.0.apply(action)))
    }
}

/// Yew store around the modal form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormStore(pub FormState);

impl Reducible for FormStore {
    type Action = FormEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(FormStore(self.0.apply(action)))
    }
}

pub struct UseTransactionsResult {
    pub list: ListState,
    pub form: FormState,
    pub actions: UseTransactionsActions,
}

#[derive(Clone, PartialEq)]
pub struct UseTransactionsActions {
    pub navigate: Callback<Navigation>,
    pub open_create: Callback<()>,
    pub close_form: Callback<()>,
    pub on_field_change: Callback<(FormField, String)>,
    pub submit: Callback<()>,
    pub row_action: Callback<RowAction>,
}

#[hook]
pub fn use_transactions(config: &ClientConfig) -> UseTransactionsResult {
    let page_size = config.page_size;
    let list = use_reducer(move || ListStore(ListState::new(page_size)));
    let form = use_reducer(FormStore::default);

    let controller = use_memo(config.clone(), |config| {
        AppController::new(
            TransactionApi::new(GlooTransport::new(), config.api_base.clone()),
            BrowserDialogs,
        )
    });

    // Fetch a page; stale completions are discarded by the list reducer
    let load_page = {
        let controller = controller.clone();
        let list_dispatcher = list.dispatcher();

        use_callback((), move |request: PageRequest, _| {
            let controller = controller.clone();
            let list_dispatcher = list_dispatcher.clone();

            spawn_local(async move {
                controller
                    .load(request, &move |event| list_dispatcher.dispatch(event))
                    .await;
            });
        })
    };

    // Initial load of page 1
    {
        let load_page = load_page.clone();
        let first = list.0.current_request();
        use_effect_with((), move |_| {
            load_page.emit(first);
            || ()
        });
    }

    let navigate = {
        let list = list.clone();
        let load_page = load_page.clone();
        Callback::from(move |navigation: Navigation| match list.0.request(navigation) {
            Some(request) => {
                Logger::debug_with_component(COMPONENT, &format!("navigate to page {}", request.page));
                load_page.emit(request);
            }
            None => Logger::debug_with_component(COMPONENT, "navigation ignored at boundary"),
        })
    };

    let open_create = {
        let form_dispatcher = form.dispatcher();
        Callback::from(move |_: ()| form_dispatcher.dispatch(FormEvent::OpenCreate))
    };

    let close_form = {
        let form_dispatcher = form.dispatcher();
        Callback::from(move |_: ()| form_dispatcher.dispatch(FormEvent::Close))
    };

    let on_field_change = {
        let form_dispatcher = form.dispatcher();
        Callback::from(move |(field, value): (FormField, String)| {
            form_dispatcher.dispatch(FormEvent::FieldChanged(field, value))
        })
    };

    let submit = {
        let controller = controller.clone();
        let list = list.clone();
        let form = form.clone();

        Callback::from(move |_: ()| {
            let Some(fields) = form.0.fields().cloned() else {
                Logger::warn_with_component(COMPONENT, "submit while the form is closed");
                return;
            };
            let reload = list.0.current_request();
            let controller = controller.clone();
            let list_dispatcher = list.dispatcher();
            let form_dispatcher = form.dispatcher();

            spawn_local(async move {
                controller
                    .submit(
                        &fields,
                        reload,
                        &move |event| list_dispatcher.dispatch(event),
                        &move |event| form_dispatcher.dispatch(event),
                    )
                    .await;
            });
        })
    };

    let row_action = {
        let controller = controller.clone();
        let list = list.clone();
        let form = form.clone();

        Callback::from(move |action: RowAction| {
            Logger::info_with_component(COMPONENT, &format!("row action {:?}", action));
            let reload = list.0.current_request();
            let controller = controller.clone();
            let list_dispatcher = list.dispatcher();
            let form_dispatcher = form.dispatcher();

            spawn_local(async move {
                controller
                    .handle_row_action(
                        action,
                        reload,
                        &move |event| list_dispatcher.dispatch(event),
                        &move |event| form_dispatcher.dispatch(event),
                    )
                    .await;
            });
        })
    };

    UseTransactionsResult {
        list: list.0.clone(),
        form: form.0.clone(),
        actions: UseTransactionsActions {
            navigate,
            open_create,
            close_form,
            on_field_change,
            submit,
            row_action,
        },
    }
}
