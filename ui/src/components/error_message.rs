use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorMessageProps {
    pub message: String,
    /// Shows a retry button when set
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

#[function_component]
pub fn ErrorMessage(props: &ErrorMessageProps) -> Html {
    html! {
        <div class="text-center py-12">
            <p class="text-4xl mb-4">{"⚠️"}</p>
            <p class="text-red-600 dark:text-red-400 font-semibold text-lg mb-2">
                {"Terjadi Error"}
            </p>
            <p class="text-neutral-500 dark:text-neutral-400 text-sm mb-6">
                {&props.message}
            </p>
            if let Some(on_retry) = props.on_retry.clone() {
                <button
                    onclick={Callback::from(move |_: MouseEvent| on_retry.emit(()))}
                    class="bg-blue-500 text-white px-6 py-2 rounded-lg hover:bg-blue-600 transition-colors"
                >
                    {"Coba Lagi"}
                </button>
            }
        </div>
    }
}
