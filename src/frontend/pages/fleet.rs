use leptos::logging;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;

use crate::frontend::components::{Footer, Navbar, VehicleCard, VehicleDetailsModal};
use crate::models::{Vehicle, VehicleCategory};
use crate::services::auth::use_auth;
use crate::services::vehicles;

/// Public fleet browser. The initial category filter comes from the `?tipo=`
/// query parameter so the home-page category cards deep-link into it.
#[component]
pub fn FleetPage() -> impl IntoView {
    let auth = use_auth();
    let query = use_query_map();

    let initial_filter = query.with_untracked(|q| {
        q.get("tipo")
            .and_then(|tipo| tipo.parse::<VehicleCategory>().ok())
    });

    let (filtro, set_filtro) = signal(initial_filter);
    let (veiculos, set_veiculos) = signal(Vec::<Vehicle>::new());
    let (loading, set_loading) = signal(true);

    let details_open = RwSignal::new(false);
    let (selecionado, set_selecionado) = signal(Option::<Vehicle>::None);

    // Reload whenever the category filter changes.
    Effect::new(move |_| {
        let categoria = filtro.get();
        set_loading.set(true);
        spawn_local(async move {
            match vehicles::list(categoria).await {
                Ok(dados) => set_veiculos.set(dados),
                Err(err) => logging::error!("erro ao buscar veículos: {err}"),
            }
            set_loading.set(false);
        });
    });

    let open_details = Callback::new(move |veiculo: Vehicle| {
        set_selecionado.set(Some(veiculo));
        details_open.set(true);
    });

    let filter_chip = move |value: Option<VehicleCategory>, label: &'static str| {
        view! {
            <button
                on:click=move |_| set_filtro.set(value)
                class=move || {
                    if filtro.get() == value {
                        "px-4 py-2 rounded-full text-sm font-bold border bg-blue-600 text-white border-blue-600"
                    } else {
                        "px-4 py-2 rounded-full text-sm font-bold border bg-white text-gray-600 border-gray-200"
                    }
                }
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="min-h-screen bg-gray-50 flex flex-col">
            <Navbar/>

            <VehicleDetailsModal open=details_open vehicle=selecionado />

            <div class="max-w-7xl mx-auto px-4 pt-32 pb-16 w-full flex-grow">
                <div class="flex flex-col md:flex-row md:items-end justify-between gap-4 mb-8">
                    <div>
                        <h1 class="text-3xl font-bold font-futuristic text-slate-900">"Nossa Frota"</h1>
                        <p class="text-gray-500 mt-1">"Escolha a categoria e conheça os veículos disponíveis."</p>
                    </div>
                    <Show
                        when=move || auth.is_authenticated()
                        fallback=|| view! {
                            <a href="/login" class="btn-ghost text-sm">"Faça login para reservar"</a>
                        }
                    >
                        <a href="/reservas/nova" class="btn-primary text-sm">"Nova Reserva"</a>
                    </Show>
                </div>

                <div class="flex flex-wrap gap-2 mb-8">
                    {filter_chip(None, "Todos")}
                    {filter_chip(Some(VehicleCategory::Passeio), "Passeio")}
                    {filter_chip(Some(VehicleCategory::Motocicleta), "Motos")}
                    {filter_chip(Some(VehicleCategory::Utilitario), "Utilitários")}
                </div>

                <Show
                    when=move || !loading.get()
                    fallback=|| view! {
                        <div class="flex justify-center py-20">
                            <span class="w-12 h-12 border-4 border-blue-200 border-t-blue-600 rounded-full animate-spin"></span>
                        </div>
                    }
                >
                    <Show
                        when=move || veiculos.with(|v| !v.is_empty())
                        fallback=|| view! {
                            <p class="text-center text-gray-500 py-20">
                                "Nenhum veículo disponível nesta categoria."
                            </p>
                        }
                    >
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                            <For
                                each=move || veiculos.get()
                                key=|veiculo| veiculo.id_veiculo
                                let:veiculo
                            >
                                <VehicleCard
                                    vehicle=veiculo
                                    action_label="Ver Detalhes"
                                    on_action=open_details
                                />
                            </For>
                        </div>
                    </Show>
                </Show>
            </div>

            <Footer/>
        </div>
    }
}
