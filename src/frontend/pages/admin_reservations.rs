use leptos::logging;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::common::dates;
use crate::frontend::components::{
    AdminLayout, ConfirmModal, ModifyReservationModal, ReservationDetailsModal, StatusMessage,
    StatusModal,
};
use crate::models::{Reservation, ReservationStatus, UpdateReservationRequest};
use crate::services::reservations;

/// Back-office reservation table. Row actions follow the lifecycle:
/// confirm while pending, pick up once confirmed, finalize while running,
/// cancel while pending/confirmed.
#[component]
pub fn AdminReservationsPage() -> impl IntoView {
    let (reservas, set_reservas) = signal(Vec::<Reservation>::new());
    let (loading, set_loading) = signal(true);
    let (busca, set_busca) = signal(String::new());
    let (filtro_status, set_filtro_status) = signal(Option::<ReservationStatus>::None);
    let (loading_action, set_loading_action) = signal(false);

    let (selecionada, set_selecionada) = signal(Option::<Reservation>::None);
    let details_open = RwSignal::new(false);
    let modify_open = RwSignal::new(false);
    let cancel_open = RwSignal::new(false);
    let finalize_open = RwSignal::new(false);
    let status_modal = RwSignal::new(Option::<StatusMessage>::None);

    let carregar = move || {
        spawn_local(async move {
            match reservations::list_all(None).await {
                Ok(dados) => set_reservas.set(dados),
                Err(err) => logging::error!("erro ao carregar reservas: {err}"),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| carregar());

    let filtradas = move || {
        reservas.with(|todas| {
            let termo = busca.get();
            let filtro = filtro_status.get();
            todas
                .iter()
                .filter(|r| r.matches_search(&termo))
                .filter(|r| filtro.is_none_or(|status| r.status == status))
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    let handle_confirm = move |id: i64| {
        set_loading_action.set(true);
        spawn_local(async move {
            match reservations::confirm(id).await {
                Ok(()) => {
                    status_modal.set(Some(StatusMessage::success(
                        "Reserva Confirmada",
                        "O cliente já pode retirar o veículo na data marcada.",
                    )));
                    carregar();
                }
                Err(err) => {
                    status_modal.set(Some(StatusMessage::error("Erro", err.user_message())));
                }
            }
            set_loading_action.set(false);
        });
    };

    let handle_pick_up = move |id: i64| {
        set_loading_action.set(true);
        spawn_local(async move {
            match reservations::pick_up(id).await {
                Ok(()) => {
                    status_modal.set(Some(StatusMessage::success(
                        "Retirada Registrada",
                        "A reserva entrou em andamento.",
                    )));
                    carregar();
                }
                Err(err) => {
                    status_modal.set(Some(StatusMessage::error("Erro", err.user_message())));
                }
            }
            set_loading_action.set(false);
        });
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
                    status_modal.set(Some(StatusMessage::success(
                        "Reserva Cancelada",
                        "O veículo voltou a ficar disponível.",
                    )));
                    carregar();
                }
                Err(err) => {
                    cancel_open.set(false);
                    status_modal.set(Some(StatusMessage::error("Erro", err.user_message())));
                }
            }
            set_loading_action.set(false);
        });
    });

    let handle_finalize = Callback::new(move |()| {
        let Some(reserva) = selecionada.get_untracked() else {
            return;
        };
        set_loading_action.set(true);
        spawn_local(async move {
            match reservations::finish(reserva.id_reserva).await {
                Ok(()) => {
                    finalize_open.set(false);
                    status_modal.set(Some(StatusMessage::success(
                        "Reserva Finalizada",
                        "O veículo foi devolvido e está disponível novamente.",
                    )));
                    carregar();
                }
                Err(err) => {
                    finalize_open.set(false);
                    status_modal.set(Some(StatusMessage::error("Erro", err.user_message())));
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
                        "As novas informações foram salvas.",
                    )));
                    carregar();
                }
                Err(err) => {
                    status_modal.set(Some(StatusMessage::error("Erro", err.user_message())));
                }
            }
            set_loading_action.set(false);
        });
    });

    let status_option = move |value: &'static str, label: &'static str| {
        view! { <option value=value>{label}</option> }
    };

    view! {
        <AdminLayout title="Reservas" subtitle="Acompanhe e conduza o ciclo de vida das reservas.">
            <ReservationDetailsModal open=details_open reservation=selecionada />
            <ModifyReservationModal
                open=modify_open
                reservation=selecionada
                loading=loading_action
                on_confirm=handle_modify
            />
            <ConfirmModal
                open=cancel_open
                title="Cancelar Reserva?"
                description="O cliente será notificado e o veículo liberado."
                loading=loading_action
                on_confirm=handle_cancel
                danger=true
            />
            <ConfirmModal
                open=finalize_open
                title="Finalizar Reserva?"
                description="Confirma a devolução do veículo pelo cliente."
                loading=loading_action
                on_confirm=handle_finalize
            />
            <StatusModal state=status_modal />

            <div class="flex flex-col md:flex-row gap-4 mb-6">
                <input
                    type="text"
                    placeholder="Buscar por nº, modelo ou placa..."
                    class="w-full md:w-80 px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 outline-none transition-all"
                    prop:value=move || busca.get()
                    on:input=move |ev| set_busca.set(event_target_value(&ev))
                />
                <select
                    class="px-4 py-3 border border-gray-300 rounded-lg bg-white focus:ring-2 focus:ring-blue-500 outline-none"
                    on:change=move |ev| {
                        set_filtro_status.set(event_target_value(&ev).parse().ok());
                    }
                >
                    {status_option("todas", "Todos os status")}
                    {status_option("pendente", "Pendentes")}
                    {status_option("confirmada", "Confirmadas")}
                    {status_option("em_andamento", "Em andamento")}
                    {status_option("finalizada", "Finalizadas")}
                    {status_option("cancelada", "Canceladas")}
                </select>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="flex justify-center py-20">
                        <span class="w-12 h-12 border-4 border-blue-200 border-t-blue-600 rounded-full animate-spin"></span>
                    </div>
                }
            >
                <div class="bg-white rounded-2xl shadow-sm border border-gray-200 overflow-x-auto">
                    <table class="w-full text-sm text-left">
                        <thead class="bg-gray-50 text-gray-500 uppercase text-xs">
                            <tr>
                                <th class="px-6 py-4">"Reserva"</th>
                                <th class="px-6 py-4">"Período"</th>
                                <th class="px-6 py-4">"Total"</th>
                                <th class="px-6 py-4">"Status"</th>
                                <th class="px-6 py-4 text-right">"Ações"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-100">
                            <For
                                each=filtradas
                                key=|reserva| (reserva.id_reserva, reserva.status)
                                let:reserva
                            >
                                {
                                    let id = reserva.id_reserva;
                                    let status = reserva.status;
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
                                    let para_finalizar = reserva.clone();
                                    let abrir_finalizar = move |_| {
                                        set_selecionada.set(Some(para_finalizar.clone()));
                                        finalize_open.set(true);
                                    };
                                    let confirmar = move |_| handle_confirm(id);
                                    let retirar = move |_| handle_pick_up(id);
                                    view! {
                                        <tr class="hover:bg-gray-50 transition-colors">
                                            <td class="px-6 py-4">
                                                <p class="font-bold text-slate-900">"#" {id}</p>
                                                <p class="text-xs text-gray-500">
                                                    {reserva.veiculo.modelo.clone()}
                                                    " • "
                                                    {reserva.veiculo.placa.clone()}
                                                </p>
                                            </td>
                                            <td class="px-6 py-4 text-gray-600">
                                                {dates::format_br(&reserva.data_retirada)}
                                                <br/>
                                                {dates::format_br(&reserva.data_devolucao)}
                                            </td>
                                            <td class="px-6 py-4 font-bold text-blue-700">
                                                {format!("R$ {:.2}", reserva.valor_total_estimado)}
                                            </td>
                                            <td class="px-6 py-4">
                                                <span class="text-[10px] font-bold uppercase px-2 py-1 rounded border bg-gray-100 text-gray-700 border-gray-200">
                                                    {status.label()}
                                                </span>
                                            </td>
                                            <td class="px-6 py-4">
                                                <div class="flex gap-3 justify-end text-sm font-medium flex-wrap">
                                                    <button
                                                        on:click=abrir_detalhes
                                                        class="text-gray-500 hover:text-blue-600 hover:underline"
                                                    >
                                                        "Detalhes"
                                                    </button>
                                                    <Show when=move || status == ReservationStatus::Pendente>
                                                        <button
                                                            on:click=confirmar
                                                            class="text-green-600 hover:text-green-800 hover:underline"
                                                        >
                                                            "Confirmar"
                                                        </button>
                                                    </Show>
                                                    <Show when=move || status == ReservationStatus::Confirmada>
                                                        <button
                                                            on:click=retirar
                                                            class="text-blue-600 hover:text-blue-800 hover:underline"
                                                        >
                                                            "Registrar Retirada"
                                                        </button>
                                                    </Show>
                                                    <Show when=move || status == ReservationStatus::EmAndamento>
                                                        <button
                                                            on:click=abrir_finalizar.clone()
                                                            class="text-slate-700 hover:text-slate-900 hover:underline"
                                                        >
                                                            "Finalizar"
                                                        </button>
                                                    </Show>
                                                    <Show when=move || status.can_modify()>
                                                        <button
                                                            on:click=abrir_modificar.clone()
                                                            class="text-gray-500 hover:text-blue-600 hover:underline"
                                                        >
                                                            "Modificar"
                                                        </button>
                                                    </Show>
                                                    <Show when=move || status.can_cancel()>
                                                        <button
                                                            on:click=abrir_cancelar.clone()
                                                            class="text-red-400 hover:text-red-600 hover:underline"
                                                        >
                                                            "Cancelar"
                                                        </button>
                                                    </Show>
                                                </div>
                                            </td>
                                        </tr>
                                    }
                                }
                            </For>
                        </tbody>
                    </table>
                    <Show when=move || filtradas().is_empty()>
                        <p class="text-center text-gray-500 py-12">"Nenhuma reserva encontrada."</p>
                    </Show>
                </div>
            </Show>
        </AdminLayout>
    }
}
