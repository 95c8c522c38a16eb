use payloads::Post;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct PostCardProps {
    pub post: Post,
}

/// A post summary linking to the post page.
#[function_component]
pub fn PostCard(props: &PostCardProps) -> Html {
    let post = &props.post;
    html! {
        <Link<Route> to={Route::Post { id: post.id.0 }}>
            <div class="border border-neutral-200 dark:border-neutral-700 p-4 rounded-lg shadow
                        hover:bg-neutral-50 dark:hover:bg-neutral-800 transition-colors cursor-pointer">
                <p class="text-sm text-neutral-400">{format!("Post #{}", post.id)}</p>
                <h2 class="text-lg font-semibold capitalize">{&post.title}</h2>
                <p class="text-neutral-600 dark:text-neutral-400 mt-1 text-sm line-clamp-2">
                    {&post.body}
                </p>
            </div>
        </Link<Route>>
    }
}
