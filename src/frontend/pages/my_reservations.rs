use leptos::logging;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::common::dates;
use crate::frontend::components::{
    ConfirmModal, Footer, ModifyReservationModal, NavbarInternal, ReservationDetailsModal,
    StatusMessage, StatusModal,
};
use crate::models::{HistoryFilter, Reservation, ReservationStatus, UpdateReservationRequest};
use crate::services::reservations;

fn status_badge_classes(status: ReservationStatus) -> &'static str {
    match status {
        ReservationStatus::Confirmada => "bg-green-100 text-green-700 border-green-200",
        ReservationStatus::EmAndamento => "bg-blue-100 text-blue-700 border-blue-200",
        ReservationStatus::Finalizada => "bg-gray-200 text-gray-600 border-gray-300",
        ReservationStatus::Cancelada => "bg-red-100 text-red-700 border-red-200",
        ReservationStatus::Pendente => "bg-yellow-100 text-yellow-700 border-yellow-200",
    }
}

/// Reservation history with status filter chips and per-card actions.
#[component]
pub fn MyReservationsPage() -> impl IntoView {
    let (reservas, set_reservas) = signal(Vec::<Reservation>::new());
    let (loading, set_loading) = signal(true);
    let (filtro, set_filtro) = signal(HistoryFilter::default());
    let (loading_action, set_loading_action) = signal(false);

    let (selecionada, set_selecionada) = signal(Option::<Reservation>::None);
    let details_open = RwSignal::new(false);
    let cancel_open = RwSignal::new(false);
    let modify_open = RwSignal::new(false);
    let status_modal = RwSignal::new(Option::<StatusMessage>::None);

    let carregar = move || {
        spawn_local(async move {
            match reservations::list_mine().await {
                Ok(dados) => set_reservas.set(dados),
                Err(err) => logging::error!("erro ao buscar reservas: {err}"),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| carregar());

    let filtradas = move || {
        reservas.with(|todas| {
            let filtro = filtro.get();
            todas
                .iter()
                .filter(|r| filtro.accepts(r.status))
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    let handle_cancel = Callback::new(move |()| {
        let Some(reserva) = selecionada.get_untracked() else {
            return;
        };
        set_loading_action.set(true);
        spawn_local(async move {
            match reservations::cancel(reserva.id_reserva).await {
                Ok(()) => {
                    cancel_open.set(false);
                    set_selecionada.set(None);
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
                    set_selecionada.set(None);
                    status_modal.set(Some(StatusMessage::success(
                        "Reserva Atualizada",
                        "As novas informações foram salvas com sucesso.",
                    )));
                    carregar();
                }
                Err(err) => {
                    status_modal.set(Some(StatusMessage::error(
                        "Erro ao Modificar",
                        "Não foi possível modificar a reserva. Verifique se as datas são válidas.",
                    )));
                    logging::error!("erro ao modificar reserva: {err}");
                }
            }
            set_loading_action.set(false);
        });
    });

    let filter_chip = move |value: HistoryFilter| {
        view! {
            <button
                on:click=move |_| set_filtro.set(value)
                class=move || {
                    if filtro.get() == value {
                        "px-4 py-2 rounded-full text-sm font-bold border bg-slate-900 text-white border-slate-900"
                    } else {
                        "px-4 py-2 rounded-full text-sm font-bold border bg-white text-gray-600 border-gray-200"
                    }
                }
            >
                {value.label()}
            </button>
        }
    };

    view! {
        <div class="min-h-screen bg-gray-50 flex flex-col">
            <NavbarInternal/>

            <ReservationDetailsModal open=details_open reservation=selecionada />
            <ConfirmModal
                open=cancel_open
                title="Cancelar Reserva?"
                description="Tem certeza? O veículo ficará disponível para outros clientes."
                loading=loading_action
                on_confirm=handle_cancel
                danger=true
            />
            <ModifyReservationModal
                open=modify_open
                reservation=selecionada
                loading=loading_action
                on_confirm=handle_modify
            />
            <StatusModal state=status_modal />

            <div class="max-w-5xl mx-auto px-4 py-10 w-full flex-grow">
                <h1 class="text-3xl font-bold font-futuristic text-slate-900 mb-8">"Minhas Reservas"</h1>

                <div class="flex flex-wrap gap-2 mb-8">
                    {filter_chip(HistoryFilter::Todas)}
                    {filter_chip(HistoryFilter::Ativas)}
                    {filter_chip(HistoryFilter::Finalizadas)}
                    {filter_chip(HistoryFilter::Canceladas)}
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
                        when=move || !filtradas().is_empty()
                        fallback=|| view! {
                            <div class="bg-white rounded-2xl border border-gray-200 p-12 text-center">
                                <p class="text-gray-500 mb-6">"Nenhuma reserva encontrada para este filtro."</p>
                                <a href="/reservas/nova" class="btn-primary">"Fazer uma Reserva"</a>
                            </div>
                        }
                    >
                        <div class="space-y-4">
                            <For
                                each=filtradas
                                key=|reserva| (reserva.id_reserva, reserva.status)
                                let:reserva
                            >
                                {
                                    let pode_cancelar = reserva.status.can_cancel();
                                    let pode_modificar = reserva.status.can_modify();
                                    let para_detalhes = reserva.clone();
                                    let abrir_detalhes = move |_| {
                                        set_selecionada.set(Some(para_detalhes.clone()));
                                        details_open.set(true);
                                    };
                                    let para_modificar = reserva.clone();
                                    let abrir_modificar = move |_| {
                                        set_selecionada.set(Some(para_modificar.clone()));
                                        modify_open.set(true);
                                    };
                                    let para_cancelar = reserva.clone();
                                    let abrir_cancelar = move |_| {
                                        set_selecionada.set(Some(para_cancelar.clone()));
                                        cancel_open.set(true);
                                    };
                                    view! {
                                        <div class="bg-white rounded-2xl shadow-sm border border-gray-200 p-6 flex flex-col md:flex-row md:items-center gap-6">
                                            <div class="flex-1">
                                                <div class="flex items-center gap-3 mb-2">
                                                    <h3 class="text-xl font-bold text-slate-900">
                                                        {reserva.veiculo.modelo.clone()}
                                                    </h3>
                                                    <span class=format!(
                                                        "text-[10px] font-bold uppercase px-2 py-1 rounded border {}",
                                                        status_badge_classes(reserva.status)
                                                    )>
                                                        {reserva.status.label()}
                                                    </span>
                                                </div>
                                                <p class="text-sm text-gray-500">
                                                    {dates::format_br(&reserva.data_retirada)}
                                                    " até "
                                                    {dates::format_br(&reserva.data_devolucao)}
                                                </p>
                                                <p class="text-sm text-blue-700 font-bold mt-1">
                                                    {format!("R$ {:.2}", reserva.valor_total_estimado)}
                                                </p>
                                            </div>
                                            <div class="flex gap-4 items-center">
                                                <button
                                                    on:click=abrir_detalhes
                                                    class="text-gray-500 hover:text-blue-600 text-sm font-medium hover:underline"
                                                >
                                                    "Detalhes"
                                                </button>
                                                <Show when=move || pode_modificar>
                                                    <button
                                                        on:click=abrir_modificar.clone()
                                                        class="text-gray-500 hover:text-blue-600 text-sm font-medium hover:underline"
                                                    >
                                                        "Modificar"
                                                    </button>
                                                </Show>
                                                <Show when=move || pode_cancelar>
                                                    <button
                                                        on:click=abrir_cancelar.clone()
                                                        class="text-red-400 hover:text-red-600 text-sm font-medium hover:underline"
                                                    >
                                                        "Cancelar"
                                                    </button>
                                                </Show>
                                            </div>
                                        </div>
                                    }
                                }
                            </For>
                        </div>
                    </Show>
                </Show>
            </div>

            <Footer/>
        </div>
    }
}
