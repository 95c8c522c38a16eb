use yew::prelude::*;

const APP_NAME: &str = "Placeholder Board";

/// Sets the document title to `"{page} · Placeholder Board"`.
///
/// No cleanup on unmount since each page sets its own title.
#[hook]
pub fn use_title(page: &str) {
    let title = format!("{page} · {APP_NAME}");
    use_effect_with(title, |title| {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            doc.set_title(title);
        }
    });
}
