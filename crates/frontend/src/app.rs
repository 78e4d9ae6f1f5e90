use crate::analyzer::ui::SentimentAnalyzer;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div style="display: flex; align-items: center; justify-content: center; min-height: 100vh; padding: 8px;">
            <SentimentAnalyzer />
        </div>
    }
}
