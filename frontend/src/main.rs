use shared::ClientConfig;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::header::Header;
use components::transaction_form_modal::TransactionFormModal;
use components::transactions::{Pagination, TransactionTable};
use hooks::use_transactions::use_transactions;
use services::config::load_config;
use services::logging::Logger;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: ClientConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let transactions = use_transactions(&props.config);
    let list = &transactions.list;
    let actions = &transactions.actions;

    html! {
        <div class="app">
            <Header
                total_transactions={list.total_elements}
                on_add={actions.open_create.clone()}
            />

            <main class="main">
                <section class="transaction-list">
                    <TransactionTable
                        transactions={list.transactions.clone()}
                        loading={list.loading}
                        on_action={actions.row_action.clone()}
                    />
                    <Pagination
                        view={list.pagination()}
                        on_navigate={actions.navigate.clone()}
                    />
                </section>
            </main>

            <TransactionFormModal
                state={transactions.form.clone()}
                on_field_change={actions.on_field_change.clone()}
                on_submit={actions.submit.clone()}
                on_close={actions.close_form.clone()}
            />
        </div>
    }
}

fn main() {
    let (config, rejected) = load_config();

    if let Err(e) = Logger::init(config.log_level) {
        gloo::console::error!(format!("Failed to install logger: {}", e));
    }
    for value in rejected {
        log::warn!("ignoring invalid {} from host page", value);
    }
    log::info!("transaction manager starting against {}", config.api_base);

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
