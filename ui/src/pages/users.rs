use payloads::User;
use yew::prelude::*;

use crate::components::BackLink;
use crate::hooks::{use_fetch, use_title};

#[function_component]
pub fn UsersPage() -> Html {
    use_title("Daftar Users");
    let users = use_fetch::<Vec<User>>("/users");

    html! {
        <div>
            <BackLink />
            <h1 class="text-2xl font-bold mt-4 mb-6">{"Daftar Users"}</h1>

            {users.render(|users, _| html! {
                <div class="grid gap-4 md:grid-cols-2">
                    {users.iter().map(|user| html! {
                        <div key={user.id.0} class="border border-neutral-200 dark:border-neutral-700 p-4 rounded-lg shadow">
                            <p class="font-bold text-lg">{&user.name}</p>
                            <p class="text-sm text-neutral-500">{&user.email}</p>
                            <p class="text-sm text-neutral-500">{&user.phone}</p>
                            <p class="text-sm text-neutral-500">{&user.website}</p>
                            <p class="text-sm text-neutral-500">{format!("🏙 {}", user.address.city)}</p>
                            <p class="text-sm text-neutral-500 mt-2">{format!("🏢 {}", user.company.name)}</p>
                        </div>
                    }).collect::<Html>()}
                </div>
            })}
        </div>
    }
}
