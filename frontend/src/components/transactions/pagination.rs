use shared::{Navigation, PaginationView};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub view: PaginationView,
    pub on_navigate: Callback<Navigation>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let on_prev = props.on_navigate.reform(|_: MouseEvent| Navigation::Previous);
    let on_next = props.on_navigate.reform(|_: MouseEvent| Navigation::Next);

    html! {
        <div class="pagination">
            <button id="prevPage" type="button" disabled={props.view.prev_disabled} onclick={on_prev}>
                {"上一页"}
            </button>
            <span id="pageInfo">{&props.view.label}</span>
            <button id="nextPage" type="button" disabled={props.view.next_disabled} onclick={on_next}>
                {"下一页"}
            </button>
        </div>
    }
}
