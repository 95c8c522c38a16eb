use payloads::Post;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::PostCard;
use crate::hooks::{use_fetch, use_title};

const NAV_LINK: &str = "text-white text-sm bg-blue-500 hover:bg-blue-600 px-3 py-2 rounded-lg transition-colors";

#[function_component]
pub fn HomePage() -> Html {
    use_title("Daftar Post");
    let posts = use_fetch::<Vec<Post>>("/posts");

    html! {
        <div>
            <h1 class="text-3xl font-bold mb-6">{"Daftar Post"}</h1>

            <nav class="flex flex-wrap gap-3 mb-6">
                <Link<Route> to={Route::Search} classes={NAV_LINK}>{"Cari Post"}</Link<Route>>
                <Link<Route> to={Route::Create} classes={NAV_LINK}>{"Buat Post"}</Link<Route>>
                <Link<Route> to={Route::Users} classes={NAV_LINK}>{"Daftar Users"}</Link<Route>>
                <Link<Route> to={Route::Albums} classes={NAV_LINK}>{"Daftar Albums"}</Link<Route>>
            </nav>

            {posts.render(|posts, _| html! {
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {posts.iter().map(|post| html! {
                        <PostCard key={post.id.0} post={post.clone()} />
                    }).collect::<Html>()}
                </div>
            })}
        </div>
    }
}
