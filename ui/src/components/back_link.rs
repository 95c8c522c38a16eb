use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn BackLink() -> Html {
    html! {
        <Link<Route>
            to={Route::Home}
            classes="text-blue-500 hover:underline text-sm"
        >
            {"← Kembali"}
        </Link<Route>>
    }
}
