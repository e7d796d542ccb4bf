use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::frontend::components::{Button, ButtonVariant, EmailInput, ErrorAlert, PasswordInput};
use crate::services::auth::use_auth;
use crate::services::customers;

/// Customer login: form-encoded credentials against the auth API, token into
/// the session store, then off to the dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
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
            match customers::login(&email.get_untracked(), &password.get_untracked()).await {
                Ok(response) => {
                    auth.login(&response.access_token);
                    navigate("/dashboard", Default::default());
                }
                Err(err) => set_error.set(Some(err.user_message())),
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center px-6 py-12 bg-gray-50">
            <div class="w-full max-w-md">
                <div class="bg-white border border-gray-200 rounded-2xl p-8 shadow-xl">
                    <div class="text-center mb-8">
                        <a href="/" class="inline-block text-2xl font-bold font-futuristic text-[#003366] mb-4">
                            "FrotaNext"
                        </a>
                        <h1 class="text-3xl font-bold text-[#003366] font-futuristic">"Bem-vindo!"</h1>
                        <p class="text-gray-500 mt-2">"Acesse sua conta para reservar"</p>
                    </div>

                    {move || error.get().map(|msg| view! { <ErrorAlert message=msg /> })}

                    <form on:submit=handle_submit class="space-y-6">
                        <EmailInput label="E-mail" value=email set_value=set_email />
                        <PasswordInput label="Senha" value=password set_value=set_password />
                        <Button
                            variant=ButtonVariant::Primary
                            loading=loading
                            loading_text="Entrando..."
                        >
                            "ENTRAR"
                        </Button>
                    </form>

                    <p class="text-center text-gray-500 mt-6 text-sm">
                        "Não tem uma conta? "
                        <a href="/cadastro" class="font-bold text-blue-600 hover:text-blue-800 hover:underline">
                            "Cadastre-se"
                        </a>
                    </p>
                </div>

                <a href="/admin/login" class="block text-center text-gray-400 hover:text-gray-600 mt-6 text-xs transition-colors">
                    "Acesso administrativo"
                </a>
            </div>
        </div>
    }
}
