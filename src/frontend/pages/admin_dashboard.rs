use chrono::Utc;
use leptos::logging;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::frontend::components::AdminLayout;
use crate::models::DashboardStats;
use crate::services::{reservations, vehicles};

#[component]
fn KpiCard(
    #[prop(into)] title: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] caption: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="bg-white p-6 rounded-2xl shadow-sm border border-gray-200 hover:shadow-md transition-all">
            <h3 class="font-bold text-slate-700 text-lg mb-4">{title}</h3>
            <div class="flex items-baseline gap-2 mb-6">
                <span class="text-5xl font-bold text-slate-900 font-futuristic">
                    {move || value.get()}
                </span>
                <span class="text-sm text-gray-500 font-medium">{caption}</span>
            </div>
            {children()}
        </div>
    }
}

/// Operation overview: the fleet and reservation listings are fetched
/// concurrently, joined, then aggregated into KPIs client-side.
#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let (stats, set_stats) = signal(DashboardStats::default());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        spawn_local(async move {
            let (frota, todas) = futures::future::join(
                vehicles::list_all_admin(),
                reservations::list_all(None),
            )
            .await;

            match (frota, todas) {
                (Ok(frota), Ok(todas)) => {
                    let hoje = Utc::now().date_naive();
                    set_stats.set(DashboardStats::compute(&frota, &todas, hoje));
                }
                (Err(err), _) | (_, Err(err)) => {
                    logging::error!("erro ao carregar dashboard: {err}");
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <AdminLayout
            title="Visão Geral da Operação"
            subtitle="Acompanhe os indicadores em tempo real."
        >
            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="flex h-96 items-center justify-center">
                        <span class="w-12 h-12 border-4 border-blue-200 border-t-blue-600 rounded-full animate-spin"></span>
                    </div>
                }
            >
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-10 animate-fade-in">
                    <KpiCard
                        title="Status da Frota"
                        value=Signal::derive(move || stats.get().fleet_total.to_string())
                        caption="Total"
                    >
                        <div class="space-y-3 text-sm">
                            <div class="flex items-center gap-2 text-green-700 bg-green-50 px-3 py-2 rounded-lg">
                                <span class="font-bold">
                                    {move || stats.get().fleet_available} " Disponíveis agora"
                                </span>
                            </div>
                            <div class="flex items-center gap-2 text-orange-700 bg-orange-50 px-3 py-2 rounded-lg">
                                <span class="font-bold">
                                    {move || stats.get().fleet_occupied} " Ocupados/Manutenção"
                                </span>
                            </div>
                        </div>
                    </KpiCard>

                    <KpiCard
                        title="Reservas Ativas"
                        value=Signal::derive(move || stats.get().reservations_in_progress.to_string())
                        caption="Em andamento"
                    >
                        <div class="pt-4 border-t border-gray-100">
                            <p class="text-[10px] uppercase font-bold text-gray-400">
                                "Faturamento Estimado"
                            </p>
                            <p class="font-bold text-lg text-slate-800">
                                {move || format!("R$ {:.2}", stats.get().revenue_in_progress)}
                            </p>
                        </div>
                    </KpiCard>

                    <KpiCard
                        title="Agenda de Hoje"
                        value=Signal::derive(move || stats.get().actions_today().to_string())
                        caption="Ações Previstas"
                    >
                        <div class="space-y-2 text-sm">
                            <div class="flex items-center justify-between p-2 rounded hover:bg-gray-50 transition-colors">
                                <span class="text-gray-600">"Retiradas"</span>
                                <span class="font-bold bg-blue-100 text-blue-700 px-2 py-0.5 rounded">
                                    {move || stats.get().pickups_today}
                                </span>
                            </div>
                            <div class="flex items-center justify-between p-2 rounded hover:bg-gray-50 transition-colors">
                                <span class="text-gray-600">"Devoluções"</span>
                                <span class="font-bold bg-green-100 text-green-700 px-2 py-0.5 rounded">
                                    {move || stats.get().returns_today}
                                </span>
                            </div>
                        </div>
                    </KpiCard>
                </div>

                <h3 class="text-xl font-bold text-slate-700 mb-6 font-futuristic">"Atalhos Rápidos"</h3>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <a
                        href="/admin/veiculos"
                        class="bg-blue-600 hover:bg-blue-700 text-white p-6 rounded-xl shadow-lg flex items-center justify-center gap-3 transition-all transform hover:-translate-y-1"
                    >
                        <span class="font-bold text-lg">"Gerenciar Frota"</span>
                    </a>
                    <a
                        href="/admin/reservas"
                        class="bg-white hover:bg-gray-50 text-slate-700 border-2 border-gray-200 p-6 rounded-xl shadow-sm flex items-center justify-center gap-3 transition-all transform hover:-translate-y-1"
                    >
                        <span class="font-bold text-lg">"Ver Todas as Reservas"</span>
                    </a>
                </div>
            </Show>
        </AdminLayout>
    }
}
