use contracts::registration::Registration;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::registration::api::{self, RegisterError};

fn format_datetime(dt: &chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

#[component]
pub fn RegistrationPage() -> impl IntoView {
    let (wallet_address, set_wallet_address) = signal(String::new());
    let (event_name, set_event_name) = signal(String::new());
    let (registrations, set_registrations) = signal(Vec::<Registration>::new());
    let (loading, set_loading) = signal(false);
    let (message, set_message) = signal(None::<String>);

    let load_registrations = move || {
        spawn_local(async move {
            match api::fetch_registrations().await {
                Ok(items) => set_registrations.set(items),
                Err(e) => set_message.set(Some(e)),
            }
        });
    };

    // Load the list on mount
    Effect::new(move |_| {
        load_registrations();
    });

    let on_register = move |_| {
        let wallet = wallet_address.get();
        let event = event_name.get();

        set_loading.set(true);
        set_message.set(None);

        spawn_local(async move {
            match api::register(&wallet, &event).await {
                Ok(_) => {
                    set_message.set(Some("Registration successful!".to_string()));
                    set_event_name.set(String::new());
                    load_registrations();
                }
                Err(RegisterError::AlreadyRegistered) => {
                    set_message.set(Some(
                        "You are already registered for this event.".to_string(),
                    ));
                }
                Err(RegisterError::Failed(e)) => {
                    set_message.set(Some(format!("Registration failed: {}", e)));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="page">
            <header class="page-header">
                <h1>"EventPass"</h1>
                <p>"Event registration"</p>
            </header>

            <section class="register-form">
                <h2>"Register for Event"</h2>
                <div class="form-field">
                    <label>"Wallet address"</label>
                    <input
                        type="text"
                        placeholder="0x..."
                        prop:value=wallet_address
                        on:input=move |ev| set_wallet_address.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-field">
                    <label>"Event name"</label>
                    <input
                        type="text"
                        placeholder="Web3 Conference 2024"
                        prop:value=event_name
                        on:input=move |ev| set_event_name.set(event_target_value(&ev))
                    />
                </div>
                <button
                    on:click=on_register
                    disabled=move || {
                        loading.get()
                            || wallet_address.get().trim().is_empty()
                            || event_name.get().trim().is_empty()
                    }
                >
                    {move || if loading.get() { "Registering..." } else { "Register for Event" }}
                </button>
            </section>

            {move || {
                message
                    .get()
                    .map(|m| view! { <div class="message">{m}</div> })
            }}

            <section class="registrations">
                <h2>"All Registrations"</h2>
                <Show
                    when=move || !registrations.get().is_empty()
                    fallback=|| view! { <p>"No registrations yet."</p> }
                >
                    <table>
                        <thead>
                            <tr>
                                <th>"Event Name"</th>
                                <th>"Wallet Address"</th>
                                <th>"Registration Date"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                registrations
                                    .get()
                                    .into_iter()
                                    .map(|reg| {
                                        view! {
                                            <tr>
                                                <td>{reg.event_name.clone()}</td>
                                                <td class="mono">{reg.wallet_address.clone()}</td>
                                                <td>{format_datetime(&reg.created_at)}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </Show>
            </section>
        </div>
    }
}
