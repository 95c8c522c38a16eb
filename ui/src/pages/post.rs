use payloads::Post;
use yew::prelude::*;

use crate::components::BackLink;
use crate::hooks::{use_fetch, use_title};

#[derive(Properties, PartialEq)]
pub struct PostPageProps {
    pub id: i64,
}

#[function_component]
pub fn PostPage(props: &PostPageProps) -> Html {
    use_title(&format!("Post #{}", props.id));
    // a new id starts a new cycle; a response for the previous id is dropped
    let post = use_fetch::<Post>(&format!("/posts/{}", props.id));

    html! {
        <div class="max-w-3xl mx-auto">
            <BackLink />
            {post.render(|post, is_loading| html! {
                <article class={classes!("mt-4", is_loading.then_some("opacity-60"))}>
                    <p class="text-sm text-neutral-400">
                        {format!("Post #{} · User ID: {}", post.id, post.user_id)}
                    </p>
                    <h1 class="text-2xl font-bold capitalize mt-1 mb-4">{&post.title}</h1>
                    <p class="text-neutral-700 dark:text-neutral-300 leading-relaxed">{&post.body}</p>
                </article>
            })}
        </div>
    }
}
