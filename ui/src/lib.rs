pub mod components;
pub mod hooks;
pub mod logs;
pub mod pages;

use std::rc::Rc;

use payloads::APIClient;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{
    AlbumsPage, CreatePostPage, HomePage, NotFoundPage, PostPage, SearchPage,
    UsersPage,
};

/// The api client, provided to every page through context.
///
/// Built once in `main` from the build-time configuration.
#[derive(Clone)]
pub struct ApiContext(pub Rc<APIClient>);

impl PartialEq for ApiContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// The api client installed by [`App`].
///
/// # Panics
///
/// Panics when called from a component rendered outside of [`App`], which
/// is the only place the [`ApiContext`] is provided.
#[hook]
pub fn use_api_client() -> Rc<APIClient> {
    use_context::<ApiContext>()
        .expect("ApiContext is provided by App")
        .0
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub client: ApiContext,
}

#[function_component]
pub fn App(props: &AppProps) -> Html {
    html! {
        <ContextProvider<ApiContext> context={props.client.clone()}>
            <BrowserRouter>
                <div class="min-h-screen bg-neutral-50 dark:bg-neutral-900 text-neutral-900 dark:text-neutral-100 transition-colors">
                    <main class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                        <Switch<Route> render={switch} />
                    </main>
                </div>
            </BrowserRouter>
        </ContextProvider<ApiContext>>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/post/:id")]
    Post { id: i64 },
    #[at("/search")]
    Search,
    #[at("/create")]
    Create,
    #[at("/users")]
    Users,
    #[at("/albums")]
    Albums,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Post { id } => html! { <PostPage {id} /> },
        Route::Search => html! { <SearchPage /> },
        Route::Create => html! { <CreatePostPage /> },
        Route::Users => html! { <UsersPage /> },
        Route::Albums => html! { <AlbumsPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
