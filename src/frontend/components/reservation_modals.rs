use leptos::prelude::*;

use crate::common::dates;
use crate::models::{Reservation, UpdateReservationRequest};

/// Read-only summary of a reservation.
#[component]
pub fn ReservationDetailsModal(
    open: RwSignal<bool>,
    #[prop(into)] reservation: Signal<Option<Reservation>>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get() && reservation.with(|r| r.is_some())>
            {move || reservation.get().map(|reserva| view! {
                <div class="fixed inset-0 z-[60] flex items-center justify-center bg-black/60 backdrop-blur-sm p-4 animate-fade-in">
                    <div class="bg-white rounded-2xl shadow-2xl w-full max-w-lg overflow-hidden">
                        <div class="bg-slate-900 p-6 flex items-center justify-between">
                            <h3 class="text-lg font-bold text-white font-futuristic">"Detalhes da Reserva"</h3>
                            <button
                                on:click=move |_| open.set(false)
                                class="text-slate-400 hover:text-white transition-colors font-bold"
                            >
                                "✕"
                            </button>
                        </div>
                        <div class="p-6 space-y-3 text-sm text-gray-700">
                            <div class="flex justify-between">
                                <span class="text-gray-500">"Reserva"</span>
                                <span class="font-bold">"#" {reserva.id_reserva}</span>
                            </div>
                            <div class="flex justify-between">
                                <span class="text-gray-500">"Veículo"</span>
                                <span class="font-bold">{reserva.veiculo.modelo.clone()} " • " {reserva.veiculo.placa.clone()}</span>
                            </div>
                            <div class="flex justify-between">
                                <span class="text-gray-500">"Retirada"</span>
                                <span class="font-bold">{dates::format_br(&reserva.data_retirada)}</span>
                            </div>
                            <div class="flex justify-between">
                                <span class="text-gray-500">"Devolução"</span>
                                <span class="font-bold">{dates::format_br(&reserva.data_devolucao)}</span>
                            </div>
                            <div class="flex justify-between">
                                <span class="text-gray-500">"Status"</span>
                                <span class="font-bold">{reserva.status.label()}</span>
                            </div>
                            <div class="flex justify-between">
                                <span class="text-gray-500">"Seguro pessoal"</span>
                                <span class="font-bold">{if reserva.seguro_pessoal { "Sim" } else { "Não" }}</span>
                            </div>
                            <div class="flex justify-between">
                                <span class="text-gray-500">"Seguro contra terceiros"</span>
                                <span class="font-bold">{if reserva.seguro_terceiros { "Sim" } else { "Não" }}</span>
                            </div>
                            {reserva.motorista.as_ref().map(|motorista| view! {
                                <div class="flex justify-between">
                                    <span class="text-gray-500">"Motorista"</span>
                                    <span class="font-bold">{motorista.nome_completo.clone()}</span>
                                </div>
                            })}
                            <div class="flex justify-between text-lg text-blue-700 font-bold pt-3 border-t border-gray-100">
                                <span>"Total estimado"</span>
                                <span>{format!("R$ {:.2}", reserva.valor_total_estimado)}</span>
                            </div>
                        </div>
                    </div>
                </div>
            })}
        </Show>
    }
}

/// Edits the dates and insurance options of an existing reservation.
#[component]
pub fn ModifyReservationModal(
    open: RwSignal<bool>,
    #[prop(into)] reservation: Signal<Option<Reservation>>,
    #[prop(optional, into)] loading: Signal<bool>,
    #[prop(into)] on_confirm: Callback<(i64, UpdateReservationRequest)>,
) -> impl IntoView {
    let (data_retirada, set_data_retirada) = signal(String::new());
    let (data_devolucao, set_data_devolucao) = signal(String::new());
    let (seguro_pessoal, set_seguro_pessoal) = signal(false);
    let (seguro_terceiros, set_seguro_terceiros) = signal(false);

    // Re-seed the form whenever another reservation is picked.
    Effect::new(move |_| {
        if let Some(reserva) = reservation.get() {
            set_data_retirada.set(dates::to_input_value(&reserva.data_retirada).to_string());
            set_data_devolucao.set(dates::to_input_value(&reserva.data_devolucao).to_string());
            set_seguro_pessoal.set(reserva.seguro_pessoal);
            set_seguro_terceiros.set(reserva.seguro_terceiros);
        }
    });

    let handle_submit = move |_| {
        let Some(reserva) = reservation.get_untracked() else {
            return;
        };
        let data = UpdateReservationRequest {
            data_retirada: Some(data_retirada.get_untracked()),
            data_devolucao: Some(data_devolucao.get_untracked()),
            seguro_pessoal: Some(seguro_pessoal.get_untracked()),
            seguro_terceiros: Some(seguro_terceiros.get_untracked()),
        };
        on_confirm.run((reserva.id_reserva, data));
    };

    view! {
        <Show when=move || open.get() && reservation.with(|r| r.is_some())>
            <div class="fixed inset-0 z-[60] flex items-center justify-center bg-black/60 backdrop-blur-sm p-4 animate-fade-in">
                <div class="bg-white rounded-2xl shadow-2xl w-full max-w-lg overflow-hidden">
                    <div class="bg-blue-50 p-6 border-b border-blue-100 flex items-center justify-between">
                        <div>
                            <h3 class="text-lg font-bold text-blue-900 font-futuristic">"Modificar Reserva"</h3>
                            <p class="text-xs text-blue-700 mt-1">
                                "Veículo: "
                                {move || reservation.with(|r| r.as_ref().map(|r| r.veiculo.modelo.clone()).unwrap_or_default())}
                            </p>
                        </div>
                        <button
                            on:click=move |_| open.set(false)
                            class="text-blue-400 hover:text-blue-700 transition-colors font-bold"
                        >
                            "✕"
                        </button>
                    </div>

                    <div class="p-6 space-y-6">
                        <div>
                            <h4 class="font-bold text-gray-700 mb-3 text-sm uppercase tracking-wider">"Novas Datas"</h4>
                            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                                <div>
                                    <label class="block text-xs font-bold text-gray-500 mb-1">"Retirada"</label>
                                    <input
                                        type="datetime-local"
                                        class="w-full border border-gray-300 rounded-lg p-3 text-sm focus:ring-2 focus:ring-blue-500 outline-none"
                                        prop:value=move || data_retirada.get()
                                        on:input=move |ev| set_data_retirada.set(event_target_value(&ev))
                                    />
                                </div>
                                <div>
                                    <label class="block text-xs font-bold text-gray-500 mb-1">"Devolução"</label>
                                    <input
                                        type="datetime-local"
                                        class="w-full border border-gray-300 rounded-lg p-3 text-sm focus:ring-2 focus:ring-blue-500 outline-none"
                                        prop:value=move || data_devolucao.get()
                                        on:input=move |ev| set_data_devolucao.set(event_target_value(&ev))
                                    />
                                </div>
                            </div>
                        </div>

                        <div>
                            <h4 class="font-bold text-gray-700 mb-3 text-sm uppercase tracking-wider">"Seguros"</h4>
                            <div class="space-y-3">
                                <label class="flex items-center p-3 border border-gray-200 rounded-xl cursor-pointer hover:bg-blue-50 transition-colors">
                                    <input
                                        type="checkbox"
                                        class="w-5 h-5 text-blue-600"
                                        prop:checked=move || seguro_pessoal.get()
                                        on:change=move |ev| set_seguro_pessoal.set(event_target_checked(&ev))
                                    />
                                    <span class="ml-3 font-bold text-sm text-gray-800">"Seguro Pessoal (+R$ 25,00/dia)"</span>
                                </label>
                                <label class="flex items-center p-3 border border-gray-200 rounded-xl cursor-pointer hover:bg-blue-50 transition-colors">
                                    <input
                                        type="checkbox"
                                        class="w-5 h-5 text-blue-600"
                                        prop:checked=move || seguro_terceiros.get()
                                        on:change=move |ev| set_seguro_terceiros.set(event_target_checked(&ev))
                                    />
                                    <span class="ml-3 font-bold text-sm text-gray-800">"Seguro contra Terceiros (+R$ 35,00/dia)"</span>
                                </label>
                            </div>
                        </div>

                        <div class="flex gap-3 justify-end pt-2">
                            <button
                                on:click=move |_| open.set(false)
                                disabled=move || loading.get()
                                class="px-4 py-2 rounded-lg text-sm font-bold text-gray-600 hover:bg-gray-100 border border-gray-200 transition-colors"
                            >
                                "Cancelar"
                            </button>
                            <button
                                on:click=handle_submit
                                disabled=move || loading.get()
                                class="px-6 py-2 rounded-lg text-sm font-bold text-white bg-blue-600 hover:bg-blue-700 shadow-lg transition-all disabled:opacity-50"
                            >
                                {move || if loading.get() { "Salvando..." } else { "Salvar Alterações" }}
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
