use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

#[component]
pub fn ErrorView(
    #[prop(optional, into)] title: Option<String>,
    message: Option<String>,
) -> impl IntoView {
    view! {
        <div class="error-container">
            <MessageBar intent=MessageBarIntent::Error>
                <strong class="error-title">
                    {title.unwrap_or_else(|| "Something went wrong".to_string())}
                </strong>
                <span class="error-message">
                    {message.unwrap_or_else(|| "An error occurred. Please try again.".to_string())}
                </span>
            </MessageBar>
        </div>
    }
}
