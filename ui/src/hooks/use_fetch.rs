use std::future::Future;
use std::rc::Rc;

use payloads::{ClientError, FetchState, Settlement, fetch};
use serde::de::DeserializeOwned;
use yew::prelude::*;

use crate::components::{ErrorMessage, LoadingSpinner};
use crate::use_api_client;

/// Generic fetch hook return type
pub struct FetchHookReturn<T> {
    /// Data from the last successful request. Kept while a refetch is in
    /// flight and when a refetch fails.
    pub data: Option<T>,
    pub is_loading: bool,
    /// Rendered failure of the last request, if it failed.
    pub error: Option<String>,
    pub refetch: Callback<()>,
}

impl<T> FetchHookReturn<T> {
    /// Render based on fetch state.
    ///
    /// - No data + loading: placeholder cards
    /// - No data + error: error message with a retry button
    /// - Has data: `render_fn(data, is_loading)`, preceded by the error
    ///   message if the latest refetch failed
    pub fn render<F>(&self, render_fn: F) -> Html
    where
        F: Fn(&T, bool) -> Html,
    {
        let error = self.error.as_ref().map(|message| {
            html! {
                <ErrorMessage
                    message={message.clone()}
                    on_retry={self.refetch.clone()}
                />
            }
        });

        match (&self.data, error) {
            (None, Some(error)) => error,
            (None, None) => html! { <LoadingSpinner /> },
            (Some(data), error) => html! {
                <>
                    {error.unwrap_or_default()}
                    {render_fn(data, self.is_loading)}
                </>
            },
        }
    }
}

/// Fetch `endpoint` from the api on mount and whenever it changes.
///
/// # Example
///
/// ```ignore
/// let albums = use_fetch::<Vec<Album>>("/albums");
/// albums.render(|albums, _| html! { <AlbumList albums={albums.clone()} /> })
/// ```
#[hook]
pub fn use_fetch<T>(endpoint: &str) -> FetchHookReturn<T>
where
    T: DeserializeOwned + Clone + 'static,
{
    let client = use_api_client();
    use_fetch_with(endpoint.to_string(), move |endpoint: String| {
        let client = client.clone();
        async move { client.get::<T>(&endpoint).await }
    })
}

/// Generic fetch hook composer.
///
/// Starts a request cycle on mount and whenever `deps` change, and provides
/// refetch capability. `fetch_fn` receives the current deps. Each cycle gets
/// a new request token; when cycles overlap only the newest one's outcome is
/// shown. Outcomes arriving after the component unmounts are dropped.
#[hook]
pub fn use_fetch_with<T, D, F, Fut>(deps: D, fetch_fn: F) -> FetchHookReturn<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    F: Fn(D) -> Fut + 'static,
    Fut: Future<Output = Result<T, ClientError>> + 'static,
{
    let state = use_mut_ref(FetchState::<T>::new);
    let update = use_force_update();

    let refetch = {
        let state = state.clone();
        let update = update.clone();
        let fetch_fn = Rc::new(fetch_fn);

        use_callback(deps.clone(), move |_: (), deps| {
            let token = state.borrow_mut().begin();
            update.force_update();

            let request = fetch_fn(deps.clone());
            let state = state.clone();
            let update = update.clone();
            yew::platform::spawn_local(async move {
                // superseded outcomes are logged by `settle`
                let settlement = fetch::drive(&*state, token, request).await;
                if settlement == Settlement::Applied {
                    update.force_update();
                }
            });
        })
    };

    // Auto-fetch on mount and when deps change
    {
        let refetch = refetch.clone();
        use_effect_with(deps, move |_| {
            refetch.emit(());
        });
    }

    // Stop accepting outcomes once unmounted
    {
        let state = state.clone();
        use_effect_with((), move |_| move || state.borrow_mut().detach());
    }

    let current = state.borrow();
    FetchHookReturn {
        data: current.data().cloned(),
        is_loading: current.is_loading(),
        error: current.error_message(),
        refetch,
    }
}
