use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    /// Number of placeholder cards (default: 5)
    #[prop_or(5)]
    pub count: usize,
}

/// Pulsing placeholder cards shown while a list loads.
#[function_component]
pub fn LoadingSpinner(props: &LoadingSpinnerProps) -> Html {
    html! {
        <div class="grid gap-4" aria-busy="true">
            {(0..props.count).map(|i| html! {
                <div key={i} class="border border-neutral-200 dark:border-neutral-700 p-4 rounded-lg shadow animate-pulse">
                    <div class="h-4 bg-neutral-200 dark:bg-neutral-700 rounded w-1/3 mb-2" />
                    <div class="h-3 bg-neutral-100 dark:bg-neutral-800 rounded w-2/3 mb-1" />
                    <div class="h-3 bg-neutral-100 dark:bg-neutral-800 rounded w-1/2" />
                </div>
            }).collect::<Html>()}
        </div>
    }
}
