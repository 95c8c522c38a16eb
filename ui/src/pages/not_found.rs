use yew::prelude::*;

use crate::components::BackLink;
use crate::hooks::use_title;

#[function_component]
pub fn NotFoundPage() -> Html {
    use_title("404");
    html! {
        <div class="text-center space-y-4">
            <h1 class="text-4xl font-bold">{"404"}</h1>
            <p class="text-neutral-600 dark:text-neutral-300">{"Halaman tidak ditemukan"}</p>
            <BackLink />
        </div>
    }
}
