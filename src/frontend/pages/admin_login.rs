use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::frontend::components::{Button, ButtonVariant, ErrorAlert};
use crate::services::auth::use_auth;
use crate::services::customers;

/// Back-office login. Uses a fixed denial message rather than echoing the
/// server body.
#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (loading, set_loading) = signal(false);

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let navigate = navigate.clone();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match customers::login_admin(&email.get_untracked(), &password.get_untracked()).await {
                Ok(response) => {
                    auth.login(&response.access_token);
                    navigate("/admin/dashboard", Default::default());
                }
                Err(_) => {
                    set_error.set(Some("Acesso negado. Verifique suas credenciais.".to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    let dark_input = "block w-full px-4 py-3 bg-slate-800 border border-slate-700 rounded-lg
        focus:ring-2 focus:ring-blue-500 focus:border-transparent text-white
        placeholder-slate-500 outline-none transition-all";

    view! {
        <div class="min-h-screen flex items-center justify-center px-6 py-12 bg-slate-900">
            <div class="w-full max-w-sm">
                <div class="text-center mb-8">
                    <a href="/" class="inline-block text-2xl font-bold font-futuristic text-white mb-4">
                        "FrotaNext"
                    </a>
                    <h1 class="text-2xl font-bold text-white font-futuristic tracking-wider">
                        "Portal Administrativo"
                    </h1>
                    <p class="text-slate-500 mt-2 text-sm uppercase tracking-widest">"Acesso Restrito"</p>
                </div>

                {move || error.get().map(|msg| view! { <ErrorAlert message=msg /> })}

                <form on:submit=handle_submit class="space-y-6">
                    <div>
                        <label class="block text-xs font-bold text-slate-400 mb-1 uppercase">
                            "E-mail Corporativo"
                        </label>
                        <input
                            type="email"
                            required=true
                            placeholder="admin@frotanext.com"
                            class=dark_input
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-xs font-bold text-slate-400 mb-1 uppercase">"Senha"</label>
                        <input
                            type="password"
                            required=true
                            placeholder="••••••••"
                            class=dark_input
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>
                    <Button
                        variant=ButtonVariant::Primary
                        loading=loading
                        loading_text="Autenticando..."
                    >
                        "ACESSAR SISTEMA"
                    </Button>
                </form>

                <a href="/login" class="block text-center text-xs text-slate-500 hover:text-white mt-8 transition-colors">
                    "Voltar para Login de Cliente"
                </a>
            </div>
        </div>
    }
}
