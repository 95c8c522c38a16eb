use payloads::{Post, requests::NewPost};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::BackLink;
use crate::hooks::use_title;
use crate::use_api_client;

#[function_component]
pub fn CreatePostPage() -> Html {
    use_title("Buat Post Baru");
    let client = use_api_client();

    let title_ref = use_node_ref();
    let body_ref = use_node_ref();
    let error_message = use_state(|| None::<String>);
    let is_loading = use_state(|| false);
    let created = use_state(|| None::<Post>);

    let on_submit = {
        let title_ref = title_ref.clone();
        let body_ref = body_ref.clone();
        let error_message = error_message.clone();
        let is_loading = is_loading.clone();
        let created = created.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(title), Some(body)) = (
                title_ref.cast::<HtmlInputElement>(),
                body_ref.cast::<HtmlTextAreaElement>(),
            ) else {
                return;
            };
            let details = NewPost::new(title.value(), body.value());
            if let Err(invalid) = details.validate() {
                error_message.set(Some(invalid.to_string()));
                return;
            }

            let client = client.clone();
            let error_message = error_message.clone();
            let is_loading = is_loading.clone();
            let created = created.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error_message.set(None);

                match client.create_post(&details).await {
                    Ok(post) => {
                        tracing::info!(id = %post.id, "created post");
                        created.set(Some(post));
                    }
                    Err(e) => {
                        tracing::warn!("failed to create post: {e}");
                        error_message.set(Some(e.to_string()));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    html! {
        <div class="max-w-xl mx-auto">
            <BackLink />
            <h1 class="text-2xl font-bold mt-4 mb-6">{"Buat Post Baru"}</h1>

            <form onsubmit={on_submit} class="grid gap-4">
                if let Some(error) = &*error_message {
                    <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                        <p class="text-sm text-red-700 dark:text-red-400">{error}</p>
                    </div>
                }

                <div>
                    <label for="post-title" class="text-sm text-neutral-500 block mb-1">{"Title"}</label>
                    <input
                        ref={title_ref}
                        type="text"
                        id="post-title"
                        placeholder="Judul post..."
                        class="w-full border border-neutral-300 dark:border-neutral-600 bg-white dark:bg-neutral-800
                               p-3 rounded-lg outline-none focus:ring-2 focus:ring-blue-400"
                    />
                </div>

                <div>
                    <label for="post-body" class="text-sm text-neutral-500 block mb-1">{"Body"}</label>
                    <textarea
                        ref={body_ref}
                        id="post-body"
                        rows="4"
                        placeholder="Isi post..."
                        class="w-full border border-neutral-300 dark:border-neutral-600 bg-white dark:bg-neutral-800
                               p-3 rounded-lg outline-none focus:ring-2 focus:ring-blue-400"
                    />
                </div>

                <button
                    type="submit"
                    disabled={*is_loading}
                    class="bg-blue-500 text-white p-3 rounded-lg hover:bg-blue-600 transition-colors
                           disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    {if *is_loading { "Mengirim..." } else { "Kirim Post" }}
                </button>
            </form>

            if let Some(post) = &*created {
                <div class="mt-8 border border-green-200 dark:border-green-800 p-4 rounded-lg bg-green-50 dark:bg-green-900/20">
                    <p class="text-green-600 font-semibold mb-2">{"✓ Post berhasil dibuat!"}</p>
                    <p class="text-sm text-neutral-500">
                        {"ID yang diterima: "}<span class="font-bold">{post.id.to_string()}</span>
                    </p>
                    <p class="text-sm text-neutral-500">{format!("Title: {}", post.title)}</p>
                    <p class="text-sm text-neutral-500">{format!("Body: {}", post.body)}</p>
                </div>
            }
        </div>
    }
}
