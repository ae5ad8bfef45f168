use shared::{RowAction, RowView, TableView, Transaction};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TransactionTableProps {
    pub transactions: Vec<Transaction>,
    pub loading: bool,
    /// Receives the row's edit and delete clicks
    pub on_action: Callback<RowAction>,
}

#[function_component(TransactionTable)]
pub fn transaction_table(props: &TransactionTableProps) -> Html {
    let body = match TableView::build(&props.transactions) {
        TableView::Placeholder { message, colspan } => html! {
            <tr>
                <td colspan={colspan.to_string()} class="empty-message">{message}</td>
            </tr>
        },
        TableView::Rows(rows) => html! {
            <>
                {for rows.into_iter().map(|row| render_row(row, &props.on_action))}
            </>
        },
    };

    html! {
        <div class="table-container">
            <table id="transactionTable" class={classes!("transactions-table", props.loading.then_some("loading"))}>
                <thead>
                    <tr>
                        <th>{"ID"}</th>
                        <th>{"类型"}</th>
                        <th>{"金额"}</th>
                        <th>{"状态"}</th>
                        <th>{"操作"}</th>
                    </tr>
                </thead>
                <tbody>
                    {body}
                </tbody>
            </table>
        </div>
    }
}

fn render_row(row: RowView, on_action: &Callback<RowAction>) -> Html {
    let actions = match row.id {
        Some(id) => {
            let on_edit = on_action.reform(move |_: MouseEvent| RowAction::Edit(id));
            let on_delete = on_action.reform(move |_: MouseEvent| RowAction::Delete(id));
            html! {
                <>
                    <button type="button" class="btn btn-edit" onclick={on_edit}>{"编辑"}</button>
                    <button type="button" class="btn btn-delete" onclick={on_delete}>{"删除"}</button>
                </>
            }
        }
        None => html! {},
    };

    html! {
        <tr>
            <td>{row.id_text}</td>
            <td>{row.type_label}</td>
            <td class="amount">{row.amount}</td>
            <td>{row.status_label}</td>
            <td class="action-buttons">{actions}</td>
        </tr>
    }
}
