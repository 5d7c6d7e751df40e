//! Auth Form Component
//!
//! Login and registration share one form; only the submit differs.

use catalog_core::api::Credentials;
use catalog_core::browser;
use catalog_core::{CatalogApi, Notification, Notifier};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::{use_app_context, Page};
use crate::storage::LocalStorageSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Register => "Create account",
        }
    }

    fn subtitle(self) -> &'static str {
        match self {
            AuthMode::Login => "Sign in to see your catalogs and export PDFs.",
            AuthMode::Register => "Register to start building catalogs.",
        }
    }

    fn submit_label(self, busy: bool) -> &'static str {
        match (self, busy) {
            (AuthMode::Login, false) => "Sign in",
            (AuthMode::Login, true) => "Signing in...",
            (AuthMode::Register, false) => "Register",
            (AuthMode::Register, true) => "Registering...",
        }
    }
}

#[component]
pub fn AuthForm(mode: AuthMode) -> impl IntoView {
    let ctx = use_app_context();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (auth_error, set_auth_error) = signal::<Option<String>>(None);
    let (busy, set_busy) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = Credentials { email: email.get_untracked().trim().to_string(), password: password.get_untracked() };
        set_busy.set(true);
        set_auth_error.set(None);

        spawn_local(async move {
            let result = match commands::api() {
                Ok(api) => match mode {
                    AuthMode::Login => browser::sign_in(&api, &LocalStorageSession, &credentials).await,
                    AuthMode::Register => api.register(&credentials).await,
                },
                Err(err) => Err(err),
            };
            set_busy.set(false);
            match (result, mode) {
                (Ok(()), AuthMode::Login) => {
                    ctx.reload_catalogs();
                    ctx.navigate(Page::Catalogs);
                }
                (Ok(()), AuthMode::Register) => {
                    ctx.toasts.notify(Notification::success("Account created", "You can sign in now."));
                    ctx.navigate(Page::Login);
                }
                (Err(err), _) => set_auth_error.set(Some(err.to_string())),
            }
        });
    };

    let (switch_label, switch_page) = match mode {
        AuthMode::Login => ("No account? Register", Page::Register),
        AuthMode::Register => ("Already registered? Sign in", Page::Login),
    };

    view! {
        <div class="auth-page">
            <div class="page-bar">
                <button class="icon-btn" title="Back to catalogs" on:click=move |_| ctx.navigate(Page::Catalogs)>
                    "⌂"
                </button>
            </div>
            <form class="auth-card" on:submit=submit>
                <h1>{mode.title()}</h1>
                <p class="muted">{mode.subtitle()}</p>
                <input
                    type="email"
                    placeholder="Email"
                    autocomplete="email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <div class="password-row">
                    <input
                        type=move || if show_password.get() { "text" } else { "password" }
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    <button
                        type="button"
                        class="icon-btn"
                        title=move || if show_password.get() { "Hide password" } else { "Show password" }
                        on:click=move |_| set_show_password.update(|v| *v = !*v)
                    >
                        {move || if show_password.get() { "🙈" } else { "👁" }}
                    </button>
                </div>
                {move || auth_error.get().map(|message| view! { <p class="form-error">{message}</p> })}
                <button type="submit" class="primary-btn" disabled=move || busy.get()>
                    {move || mode.submit_label(busy.get())}
                </button>
                <button type="button" class="link-btn" on:click=move |_| ctx.navigate(switch_page.clone())>
                    {switch_label}
                </button>
            </form>
        </div>
    }
}
