use leptos::prelude::*;

use crate::registration::ui::RegistrationPage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <RegistrationPage />
    }
}
