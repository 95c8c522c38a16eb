use payloads::{Post, search::filter_posts};
use yew::prelude::*;

use crate::components::{BackLink, PostCard};
use crate::hooks::{use_fetch, use_title};

#[function_component]
pub fn SearchPage() -> Html {
    use_title("Search Posts");
    let posts = use_fetch::<Vec<Post>>("/posts");
    let keyword = use_state(String::new);

    let on_keyword_input = {
        let keyword = keyword.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            keyword.set(input.value());
        })
    };

    html! {
        <div>
            <BackLink />
            <h1 class="text-2xl font-bold mt-4 mb-6">{"Search Posts"}</h1>

            <input
                type="text"
                placeholder="Cari judul post..."
                value={(*keyword).clone()}
                oninput={on_keyword_input}
                class="w-full border border-neutral-300 dark:border-neutral-600 bg-white dark:bg-neutral-800
                       p-3 rounded-lg mb-6 outline-none focus:ring-2 focus:ring-blue-400"
            />

            {posts.render(|posts, _| {
                let found = filter_posts(posts, &keyword);
                html! {
                    <>
                        <p class="text-sm text-neutral-400 mb-4">
                            {format!("Menampilkan {} post", found.len())}
                        </p>
                        <div class="grid gap-4">
                            {found.into_iter().map(|post| html! {
                                <PostCard key={post.id.0} post={post.clone()} />
                            }).collect::<Html>()}
                        </div>
                    </>
                }
            })}
        </div>
    }
}
