use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::services::auth::use_auth;

/// Public navbar shown on the marketing pages.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();

    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 backdrop-blur-md bg-white/90 border-b border-gray-200 shadow-sm">
            <div class="max-w-7xl mx-auto px-6 py-4 flex items-center justify-between">
                <a href="/" class="flex items-center gap-2">
                    <span class="text-xl font-bold font-futuristic text-[#003366]">"FrotaNext"</span>
                </a>
                <div class="flex items-center gap-6">
                    <a href="/frota" class="text-gray-600 hover:text-blue-600 font-medium transition-colors">"Frota"</a>
                    <Show
                        when=move || auth.is_authenticated()
                        fallback=|| view! {
                            <a href="/login" class="text-gray-600 hover:text-blue-600 font-medium transition-colors">"Entrar"</a>
                            <a href="/cadastro" class="btn-primary text-sm px-4 py-2">"Cadastre-se"</a>
                        }
                    >
                        <a href="/dashboard" class="btn-primary text-sm px-4 py-2">"Minha Conta"</a>
                    </Show>
                </div>
            </div>
        </nav>
    }
}

/// Navbar for the logged-in customer area.
#[component]
pub fn NavbarInternal() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let handle_logout = move |_| {
        auth.logout();
        navigate("/", Default::default());
    };

    view! {
        <nav class="bg-slate-900 text-white shadow-lg">
            <div class="max-w-7xl mx-auto px-6 py-4 flex items-center justify-between">
                <a href="/dashboard" class="text-xl font-bold font-futuristic">"FrotaNext"</a>
                <div class="flex items-center gap-6 text-sm">
                    <a href="/reservas/nova" class="text-slate-300 hover:text-white transition-colors">"Nova Reserva"</a>
                    <a href="/reservas/minhas" class="text-slate-300 hover:text-white transition-colors">"Minhas Reservas"</a>
                    <Show when=move || auth.is_company()>
                        <a href="/empresa/motoristas" class="text-slate-300 hover:text-white transition-colors">"Motoristas"</a>
                    </Show>
                    <a href="/perfil" class="text-slate-300 hover:text-white transition-colors">"Perfil"</a>
                    <button
                        on:click=handle_logout
                        class="border border-slate-700 px-4 py-2 rounded-lg text-slate-300 hover:text-white hover:border-slate-500 transition-colors"
                    >
                        "Sair"
                    </button>
                </div>
            </div>
        </nav>
    }
}
