use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::services::auth::use_auth;

/// Back-office shell: dark top bar with section links plus a page header.
#[component]
pub fn AdminLayout(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: String,
    children: Children,
) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let handle_logout = move |_| {
        auth.logout();
        navigate("/admin/login", Default::default());
    };

    let has_subtitle = !subtitle.is_empty();

    view! {
        <div class="min-h-screen bg-gray-50 flex flex-col">
            <nav class="bg-slate-900 text-white shadow-lg">
                <div class="max-w-7xl mx-auto px-6 py-4 flex items-center justify-between">
                    <a href="/admin/dashboard" class="text-lg font-bold font-futuristic tracking-wider">
                        "FrotaNext " <span class="text-blue-400">"Admin"</span>
                    </a>
                    <div class="flex items-center gap-6 text-sm">
                        <a href="/admin/dashboard" class="text-slate-300 hover:text-white transition-colors">"Visão Geral"</a>
                        <a href="/admin/veiculos" class="text-slate-300 hover:text-white transition-colors">"Frota"</a>
                        <a href="/admin/reservas" class="text-slate-300 hover:text-white transition-colors">"Reservas"</a>
                        <a href="/admin/clientes" class="text-slate-300 hover:text-white transition-colors">"Clientes"</a>
                        <button
                            on:click=handle_logout
                            class="border border-slate-700 px-4 py-2 rounded-lg text-slate-300 hover:text-white hover:border-slate-500 transition-colors"
                        >
                            "Sair"
                        </button>
                    </div>
                </div>
            </nav>

            <div class="max-w-7xl mx-auto px-6 py-10 w-full flex-grow">
                <header class="mb-8">
                    <h1 class="text-3xl font-bold text-slate-900 font-futuristic">{title}</h1>
                    {has_subtitle.then(|| view! { <p class="text-gray-500 mt-1">{subtitle.clone()}</p> })}
                </header>
                {children()}
            </div>
        </div>
    }
}
