use leptos::logging;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::common::dates;
use crate::frontend::components::{
    ConfirmModal, Footer, ModifyReservationModal, NavbarInternal, ReservationDetailsModal,
    StatusMessage, StatusModal,
};
use crate::models::{next_reservation, Reservation, UpdateReservationRequest};
use crate::services::auth::use_auth;
use crate::services::reservations;

#[component]
fn ActionCard(
    #[prop(into)] href: String,
    #[prop(into)] title: String,
) -> impl IntoView {
    view! {
        <a
            href=href
            class="bg-white p-8 rounded-2xl shadow-lg hover:shadow-xl transition-all flex flex-col
                   items-center gap-4 border border-gray-100 transform hover:-translate-y-1 text-center"
        >
            <span class="font-bold text-xl font-futuristic text-gray-800">{title}</span>
        </a>
    }
}

/// Customer home: quick actions, category links and the next upcoming trip.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();

    let (proxima, set_proxima) = signal(Option::<Reservation>::None);
    let (loading, set_loading) = signal(true);
    let (loading_action, set_loading_action) = signal(false);

    let details_open = RwSignal::new(false);
    let cancel_open = RwSignal::new(false);
    let modify_open = RwSignal::new(false);
    let status_modal = RwSignal::new(Option::<StatusMessage>::None);

    let carregar = move || {
        spawn_local(async move {
            match reservations::list_mine().await {
                Ok(todas) => set_proxima.set(next_reservation(&todas).cloned()),
                Err(err) => logging::error!("erro ao carregar dashboard: {err}"),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| carregar());

    let handle_cancel = Callback::new(move |()| {
        let Some(reserva) = proxima.get_untracked() else {
            return;
        };
        set_loading_action.set(true);
        spawn_local(async move {
            match reservations::cancel(reserva.id_reserva).await {
                Ok(()) => {
                    cancel_open.set(false);
                    carregar();
                }
                Err(err) => {
                    status_modal.set(Some(StatusMessage::error(
                        "Erro ao Cancelar",
                        err.user_message(),
                    )));
                }
            }
            set_loading_action.set(false);
        });
    });

    let handle_modify = Callback::new(move |(id, data): (i64, UpdateReservationRequest)| {
        set_loading_action.set(true);
        spawn_local(async move {
            match reservations::update(id, &data).await {
                Ok(()) => {
                    modify_open.set(false);
                    status_modal.set(Some(StatusMessage::success(
                        "Reserva Atualizada",
                        "As novas informações foram salvas com sucesso.",
                    )));
                    carregar();
                }
                Err(err) => {
                    status_modal.set(Some(StatusMessage::error(
                        "Erro ao Modificar",
                        err.user_message(),
                    )));
                }
            }
            set_loading_action.set(false);
        });
    });

    view! {
        <div class="min-h-screen bg-gray-50 flex flex-col">
            <NavbarInternal/>

            <ReservationDetailsModal open=details_open reservation=proxima />
            <ConfirmModal
                open=cancel_open
                title="Cancelar Próxima Viagem?"
                description="Tem certeza? O veículo ficará disponível para outros clientes."
                loading=loading_action
                on_confirm=handle_cancel
                danger=true
            />
            <ModifyReservationModal
                open=modify_open
                reservation=proxima
                loading=loading_action
                on_confirm=handle_modify
            />
            <StatusModal state=status_modal />

            <div class="max-w-7xl mx-auto px-4 py-12 w-full flex-grow">
                // ações rápidas
                <div class=move || {
                    if auth.is_company() {
                        "grid grid-cols-1 md:grid-cols-4 gap-6 mb-16"
                    } else {
                        "grid grid-cols-1 md:grid-cols-3 gap-6 mb-16"
                    }
                }>
                    <ActionCard href="/reservas/nova" title="Nova Reserva" />
                    <ActionCard href="/reservas/minhas" title="Histórico de Reservas" />
                    <Show when=move || auth.is_company()>
                        <ActionCard href="/empresa/motoristas" title="Gestão de Motoristas" />
                    </Show>
                    <ActionCard href="/perfil" title="Meu Perfil" />
                </div>

                // categorias
                <div class="mb-16">
                    <h2 class="text-2xl font-bold mb-8 text-gray-800 font-futuristic uppercase tracking-wide">
                        "Explore Nossas Categorias"
                    </h2>
                    <div class="flex flex-wrap justify-center gap-8">
                        <a href="/frota?tipo=passeio" class="btn-ghost font-futuristic">"Carros de Passeio"</a>
                        <a href="/frota?tipo=motocicleta" class="btn-ghost font-futuristic">"Motocicletas"</a>
                        <a href="/frota?tipo=utilitario" class="btn-ghost font-futuristic">"Utilitários"</a>
                    </div>
                </div>

                // próxima viagem
                <div class="mb-16 animate-fade-in">
                    <h2 class="text-2xl font-bold mb-6 text-gray-900 font-futuristic">"Sua Próxima Viagem"</h2>

                    <Show
                        when=move || !loading.get()
                        fallback=|| view! {
                            <div class="flex justify-center py-12">
                                <span class="w-10 h-10 border-4 border-blue-200 border-t-blue-600 rounded-full animate-spin"></span>
                            </div>
                        }
                    >
                        {move || match proxima.get() {
                            Some(reserva) => view! {
                                <div class="bg-white rounded-3xl shadow-xl border border-gray-100 p-8 flex flex-col md:flex-row items-center gap-8">
                                    <div class="md:w-1/2 flex flex-col gap-3 w-full">
                                        <h3 class="text-3xl font-bold text-slate-900 font-futuristic">
                                            {reserva.veiculo.modelo.clone()}
                                        </h3>
                                        <span class="inline-block w-fit bg-green-500 text-white text-[10px] font-bold px-2 py-1 rounded shadow uppercase">
                                            {reserva.status.label()}
                                        </span>
                                        <div class="text-gray-600 text-sm space-y-2 bg-gray-50 p-4 rounded-xl border border-gray-100">
                                            <p>
                                                <strong>"Retirada: "</strong>
                                                {dates::format_br(&reserva.data_retirada)}
                                            </p>
                                            <p>
                                                <strong>"Devolução: "</strong>
                                                {dates::format_br(&reserva.data_devolucao)}
                                            </p>
                                            <p class="text-gray-400 text-xs">"Agência Central"</p>
                                        </div>
                                    </div>
                                    <div class="md:w-1/2 flex flex-col items-center gap-4 w-full">
                                        <button
                                            on:click=move |_| details_open.set(true)
                                            class="w-full btn-primary py-4 text-lg font-futuristic"
                                        >
                                            "Ver Detalhes da Reserva"
                                        </button>
                                        <div class="flex gap-6">
                                            <button
                                                on:click=move |_| modify_open.set(true)
                                                class="text-gray-500 hover:text-blue-600 text-sm font-medium hover:underline"
                                            >
                                                "Modificar"
                                            </button>
                                            <button
                                                on:click=move |_| cancel_open.set(true)
                                                class="text-red-400 hover:text-red-600 text-sm font-medium hover:underline"
                                            >
                                                "Cancelar"
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            }.into_any(),
                            None => view! {
                                <div class="bg-white rounded-3xl shadow-md border border-gray-200 p-12 text-center flex flex-col items-center">
                                    <h3 class="text-xl font-bold text-gray-700 mb-2">
                                        "Você não tem viagens agendadas"
                                    </h3>
                                    <p class="text-gray-500 mb-6 max-w-md">
                                        "Que tal planejar sua próxima aventura ou viagem de negócios agora mesmo?"
                                    </p>
                                    <a href="/reservas/nova" class="btn-primary">
                                        "Fazer uma Reserva Agora"
                                    </a>
                                </div>
                            }.into_any(),
                        }}
                    </Show>
                </div>
            </div>

            <Footer/>
        </div>
    }
}
