use shared::{DetailField, FormField, FormState, TransactionForm, TransactionStatus, TransactionType};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::services::logging::Logger;

const COMPONENT: &str = "transaction-form";
const MODAL_OPEN_CLASS: &str = "modal-open";

#[derive(Properties, PartialEq)]
pub struct TransactionFormModalProps {
    pub state: FormState,
    pub on_field_change: Callback<(FormField, String)>,
    pub on_submit: Callback<()>,
    pub on_close: Callback<()>,
}

fn input_handler(field: FormField, on_change: &Callback<(FormField, String)>) -> Callback<InputEvent> {
    on_change.reform(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        (field, input.value())
    })
}

fn select_handler(field: FormField, on_change: &Callback<(FormField, String)>) -> Callback<Event> {
    on_change.reform(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        (field, select.value())
    })
}

/// Options for a select; a value the list does not know is kept as an extra option
fn options(known: Vec<(String, String)>, selected: &str) -> Html {
    let has_selected = known.iter().any(|(value, _)| value == selected);
    html! {
        <>
            {for known.into_iter().map(|(value, label)| {
                let is_selected = value == selected;
                html! { <option value={value} selected={is_selected}>{label}</option> }
            })}
            {if !has_selected && !selected.is_empty() {
                html! { <option value={selected.to_string()} selected=true>{selected}</option> }
            } else {
                html! {}
            }}
        </>
    }
}

#[function_component(TransactionFormModal)]
pub fn transaction_form_modal(props: &TransactionFormModalProps) -> Html {
    let is_open = props.state.is_open();

    use_effect_with(is_open, |is_open| {
        lock_page_scroll(*is_open);
        || ()
    });

    let on_overlay_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_cancel = props.on_close.reform(|_: MouseEvent| ());

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let Some(fields) = props.state.fields() else {
        return html! {};
    };

    let type_options = options(
        TransactionType::ALL
            .iter()
            .map(|t| (t.as_str().to_string(), t.label().to_string()))
            .collect(),
        &fields.transaction_type,
    );
    let status_options = options(
        TransactionStatus::ALL
            .iter()
            .map(|s| (s.as_str().to_string(), s.label().to_string()))
            .collect(),
        &fields.status,
    );

    html! {
        <>
            <div id="overlay" class="overlay" onclick={on_overlay_click}></div>
            <div class="transaction-form">
                <h2 id="formTitle">{props.state.title()}</h2>
                <form id="transactionForm" onsubmit={on_submit}>
                    <input type="hidden" id="transactionId" value={fields.id.clone()} />

                    <div class="form-group">
                        <label for="type">{"交易类型"}</label>
                        <select id="type" required=true onchange={select_handler(FormField::Type, &props.on_field_change)}>
                            {type_options}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="amount">{"金额"}</label>
                        <input
                            id="amount"
                            type="number"
                            step="0.01"
                            min="0.01"
                            required=true
                            value={fields.amount.clone()}
                            oninput={input_handler(FormField::Amount, &props.on_field_change)}
                        />
                    </div>

                    <div class="form-group">
                        <label for="status">{"状态"}</label>
                        <select id="status" required=true onchange={select_handler(FormField::Status, &props.on_field_change)}>
                            {status_options}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="description">{"描述"}</label>
                        <input
                            id="description"
                            type="text"
                            value={fields.description.clone()}
                            oninput={input_handler(FormField::Description, &props.on_field_change)}
                        />
                    </div>

                    {detail_input(fields, &props.on_field_change)}

                    <div class="form-buttons">
                        <button type="submit" class="btn btn-primary">{"保存"}</button>
                        <button type="button" id="cancelBtn" class="btn btn-secondary" onclick={on_cancel}>
                            {"取消"}
                        </button>
                    </div>
                </form>
            </div>
        </>
    }
}

/// Toggle the body class that stops the page behind the modal from scrolling
fn lock_page_scroll(locked: bool) {
    let Some(body) = gloo::utils::document().body() else {
        Logger::warn_with_component(COMPONENT, "no <body> to lock scrolling on");
        return;
    };
    if let Err(e) = body.class_list().toggle_with_force(MODAL_OPEN_CLASS, locked) {
        Logger::warn_with_component(COMPONENT, &format!("failed to toggle {}: {:?}", MODAL_OPEN_CLASS, e));
    }
}

/// The one extra input the selected type needs, if any
fn detail_input(fields: &TransactionForm, on_change: &Callback<(FormField, String)>) -> Html {
    let (id, label, input_type, field, value) = match fields.selected_type().detail_field() {
        Some(DetailField::TargetAccount) => (
            "targetAccount",
            "目标账户",
            "text",
            FormField::TargetAccount,
            &fields.target_account,
        ),
        Some(DetailField::OriginalTransactionId) => (
            "originalTransactionId",
            "原始交易ID",
            "number",
            FormField::OriginalTransactionId,
            &fields.original_transaction_id,
        ),
        Some(DetailField::InitiatedBy) => (
            "initiatedBy",
            "发起方",
            "text",
            FormField::InitiatedBy,
            &fields.initiated_by,
        ),
        None => return html! {},
    };

    html! {
        <div class="form-group">
            <label for={id}>{label}</label>
            <input
                id={id}
                type={input_type}
                value={value.clone()}
                oninput={input_handler(field, on_change)}
            />
        </div>
    }
}
