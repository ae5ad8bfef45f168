use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub total_transactions: u64,
    pub on_add: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_add = props.on_add.reform(|_: MouseEvent| ());

    html! {
        <header class="header">
            <div class="container">
                <h1>{"交易管理"}</h1>
                <div class="header-right">
                    <span class="total-count">{format!("共 {} 条交易", props.total_transactions)}</span>
                    <button id="addTransactionBtn" type="button" class="btn btn-primary" onclick={on_add}>
                        {"添加交易"}
                    </button>
                </div>
            </div>
        </header>
    }
}
