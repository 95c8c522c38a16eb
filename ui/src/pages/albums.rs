use payloads::Album;
use yew::prelude::*;

use crate::components::BackLink;
use crate::hooks::{use_fetch, use_title};

#[function_component]
pub fn AlbumsPage() -> Html {
    use_title("Daftar Albums");
    let albums = use_fetch::<Vec<Album>>("/albums");

    html! {
        <div>
            <BackLink />
            <h1 class="text-2xl font-bold mt-4 mb-6">{"Daftar Albums"}</h1>

            {albums.render(|albums, _| html! {
                <div class="grid gap-3 md:grid-cols-2">
                    {albums.iter().map(|album| html! {
                        <div key={album.id.0} class="border border-neutral-200 dark:border-neutral-700 p-4 rounded-lg shadow">
                            <p class="text-sm text-neutral-400">{format!("Album #{}", album.id)}</p>
                            <p class="font-semibold capitalize">{&album.title}</p>
                            <p class="text-xs text-neutral-400 mt-1">{format!("User ID: {}", album.user_id)}</p>
                        </div>
                    }).collect::<Html>()}
                </div>
            })}
        </div>
    }
}
