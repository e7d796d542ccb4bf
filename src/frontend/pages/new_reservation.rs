use leptos::logging;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::common::dates;
use crate::frontend::components::{Footer, NavbarInternal, VehicleCard};
use crate::models::{
    simulation_gate, CreateReservationRequest, DriverSummary, SimulationRequest,
    SimulationResponse, Vehicle, VehicleCategory,
};
use crate::services::auth::use_auth;
use crate::services::{customers, reservations, vehicles};

/// The wizard's strictly linear flow. Backward transitions are always
/// allowed and discard the simulated price.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum WizardStep {
    #[default]
    SelectVehicle,
    EnterDetails,
    ReviewAndConfirm,
}

impl WizardStep {
    pub fn index(self) -> u8 {
        match self {
            Self::SelectVehicle => 1,
            Self::EnterDetails => 2,
            Self::ReviewAndConfirm => 3,
        }
    }

    pub fn progress_percent(self) -> &'static str {
        match self {
            Self::SelectVehicle => "33%",
            Self::EnterDetails => "66%",
            Self::ReviewAndConfirm => "100%",
        }
    }
}

/// Three-step reservation wizard: pick a vehicle, enter dates/insurance
/// (and the driver, for company accounts), then review the server-simulated
/// price and confirm.
#[component]
pub fn NewReservationPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = StoredValue::new(use_navigate());

    let (step, set_step) = signal(WizardStep::default());
    let (loading, set_loading) = signal(false);

    let (veiculos, set_veiculos) = signal(Vec::<Vehicle>::new());
    let (filtro, set_filtro) = signal(Option::<VehicleCategory>::None);
    let (selecionado, set_selecionado) = signal(Option::<Vehicle>::None);

    let (data_retirada, set_data_retirada) = signal(String::new());
    let (data_devolucao, set_data_devolucao) = signal(String::new());
    let (seguro_pessoal, set_seguro_pessoal) = signal(false);
    let (seguro_terceiros, set_seguro_terceiros) = signal(false);
    let (simulacao, set_simulacao) = signal(Option::<SimulationResponse>::None);
    let (erro_simulacao, set_erro_simulacao) = signal(String::new());

    let (motoristas, set_motoristas) = signal(Vec::<DriverSummary>::new());
    let (motorista_id, set_motorista_id) = signal(Option::<i64>::None);

    // Step 1 reloads the grid whenever the category filter changes.
    Effect::new(move |_| {
        if step.get() != WizardStep::SelectVehicle {
            return;
        }
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

    // Company accounts need their linked drivers on step 2.
    Effect::new(move |_| {
        if step.get() != WizardStep::EnterDetails || !auth.is_company() {
            return;
        }
        spawn_local(async move {
            match customers::my_profile(crate::models::UserRole::ClientePj).await {
                Ok(perfil) => set_motoristas.set(perfil.drivers().to_vec()),
                Err(err) => logging::error!("erro ao carregar motoristas: {err}"),
            }
        });
    });

    let select_vehicle = Callback::new(move |veiculo: Vehicle| {
        set_selecionado.set(Some(veiculo));
        set_step.set(WizardStep::EnterDetails);
    });

    // Only a successful simulation advances to the review step.
    let handle_simulate = move |_| {
        let vehicle_id = selecionado.with_untracked(|v| v.as_ref().map(|v| v.id_veiculo));
        let gate = simulation_gate(
            auth.is_company(),
            motorista_id.get_untracked(),
            vehicle_id,
            &data_retirada.get_untracked(),
            &data_devolucao.get_untracked(),
        );
        if let Err(message) = gate {
            set_erro_simulacao.set(message.to_string());
            return;
        }

        set_loading.set(true);
        set_erro_simulacao.set(String::new());
        spawn_local(async move {
            let payload = SimulationRequest {
                veiculo_id: vehicle_id.unwrap_or_default(),
                data_retirada: data_retirada.get_untracked(),
                data_devolucao: data_devolucao.get_untracked(),
                seguro_pessoal: seguro_pessoal.get_untracked(),
                seguro_terceiros: seguro_terceiros.get_untracked(),
            };
            match reservations::simulate(&payload).await {
                Ok(resultado) => {
                    set_simulacao.set(Some(resultado));
                    set_step.set(WizardStep::ReviewAndConfirm);
                }
                Err(err) => set_erro_simulacao.set(err.user_message()),
            }
            set_loading.set(false);
        });
    };

    let handle_confirm = move |_| {
        let Some(veiculo_id) = selecionado.with_untracked(|v| v.as_ref().map(|v| v.id_veiculo))
        else {
            return;
        };
        if simulacao.with_untracked(|s| s.is_none()) {
            return;
        }
        let navigate = navigate.get_value();
        set_loading.set(true);
        spawn_local(async move {
            let payload = CreateReservationRequest {
                veiculo_id,
                data_retirada: dates::normalize_datetime_local(&data_retirada.get_untracked()),
                data_devolucao: dates::normalize_datetime_local(&data_devolucao.get_untracked()),
                seguro_pessoal: seguro_pessoal.get_untracked(),
                seguro_terceiros: seguro_terceiros.get_untracked(),
                motorista_id: motorista_id.get_untracked().filter(|_| auth.is_company()),
            };
            match reservations::create(&payload).await {
                Ok(()) => navigate("/reservas/minhas", Default::default()),
                Err(err) => {
                    let _ = window()
                        .alert_with_message(&format!("Erro: {}", err.user_message()));
                }
            }
            set_loading.set(false);
        });
    };

    // Going back discards the simulated price.
    let back_to_details = move |_| {
        set_simulacao.set(None);
        set_step.set(WizardStep::EnterDetails);
    };
    let back_to_vehicles = move |_| {
        set_simulacao.set(None);
        set_step.set(WizardStep::SelectVehicle);
    };

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

    let step_label = move |target: WizardStep, label: &'static str| {
        view! {
            <span class=move || {
                if step.get().index() >= target.index() {
                    "text-blue-700 transition-colors duration-300"
                } else {
                    "text-gray-400 transition-colors duration-300"
                }
            }>
                {label}
            </span>
        }
    };

    view! {
        <div class="min-h-screen bg-gray-50 flex flex-col">
            <NavbarInternal/>

            <div class="max-w-7xl mx-auto px-4 py-10 w-full flex-grow">
                // barra de progresso
                <div class="w-full max-w-3xl mx-auto mb-12">
                    <div class="relative w-full h-3 bg-gray-200 rounded-full overflow-hidden mb-3">
                        <div
                            class="absolute top-0 left-0 h-full bg-blue-600 transition-all duration-700 ease-in-out"
                            style:width=move || step.get().progress_percent()
                        ></div>
                    </div>
                    <div class="flex justify-between text-xs font-bold uppercase tracking-widest px-1">
                        {step_label(WizardStep::SelectVehicle, "1. Veículo")}
                        {step_label(WizardStep::EnterDetails, "2. Dados")}
                        {step_label(WizardStep::ReviewAndConfirm, "3. Confirmar")}
                    </div>
                </div>

                // passo 1: escolha do veículo
                <Show when=move || step.get() == WizardStep::SelectVehicle>
                    <div class="animate-fade-in">
                        <h2 class="text-3xl font-bold font-futuristic text-slate-800 mb-8">
                            "Escolha seu Veículo"
                        </h2>
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
                            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                                <For
                                    each=move || veiculos.get()
                                    key=|veiculo| veiculo.id_veiculo
                                    let:veiculo
                                >
                                    <VehicleCard
                                        vehicle=veiculo
                                        action_label="Escolher"
                                        on_action=select_vehicle
                                    />
                                </For>
                            </div>
                        </Show>
                    </div>
                </Show>

                // passo 2: datas, seguros e motorista (PJ)
                <Show when=move || step.get() == WizardStep::EnterDetails>
                    <div class="max-w-3xl mx-auto animate-fade-in">
                        <div class="bg-white rounded-3xl shadow-lg border border-gray-100 overflow-hidden">
                            <div class="bg-slate-50 p-6 border-b border-gray-100">
                                {move || selecionado.get().map(|veiculo| view! {
                                    <h3 class="font-bold text-xl">{veiculo.modelo.clone()}</h3>
                                    <p class="text-sm text-gray-500">
                                        "Diária: "
                                        <span class="text-blue-600 font-bold">
                                            {format!("R$ {:.2}", veiculo.valor_diaria)}
                                        </span>
                                    </p>
                                })}
                            </div>

                            <div class="p-8 space-y-8">
                                <Show when=move || auth.is_company()>
                                    <div class="p-4 bg-blue-50 rounded-xl border border-blue-100">
                                        <h4 class="font-bold text-blue-900 mb-3">
                                            "Quem irá retirar o veículo?"
                                        </h4>
                                        <select
                                            class="w-full p-3 border border-blue-200 rounded-lg bg-white focus:ring-2 focus:ring-blue-500 outline-none"
                                            on:change=move |ev| {
                                                set_motorista_id.set(event_target_value(&ev).parse().ok());
                                            }
                                        >
                                            <option value="" disabled=true selected=true>
                                                "Selecione um motorista da lista..."
                                            </option>
                                            <For
                                                each=move || motoristas.get()
                                                key=|motorista| motorista.id_pessoa
                                                let:motorista
                                            >
                                                <option value=motorista.id_pessoa.to_string()>
                                                    {format!("{} (CPF: {})", motorista.nome_completo, motorista.cpf)}
                                                </option>
                                            </For>
                                        </select>
                                        <Show when=move || motoristas.with(|m| m.is_empty())>
                                            <p class="text-xs text-red-500 mt-2">
                                                "Você não tem motoristas cadastrados. Vá em \"Gestão de Motoristas\" primeiro."
                                            </p>
                                        </Show>
                                    </div>
                                </Show>

                                <div>
                                    <h4 class="font-bold text-gray-700 mb-4">"Período da Reserva"</h4>
                                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
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
                                    <h4 class="font-bold text-gray-700 mb-4">"Proteção e Seguros"</h4>
                                    <div class="space-y-3">
                                        <label class="flex items-center p-4 border border-gray-200 rounded-xl cursor-pointer hover:bg-blue-50 transition-colors">
                                            <input
                                                type="checkbox"
                                                class="w-5 h-5 text-blue-600"
                                                prop:checked=move || seguro_pessoal.get()
                                                on:change=move |ev| set_seguro_pessoal.set(event_target_checked(&ev))
                                            />
                                            <span class="ml-3 font-bold text-sm text-gray-800">
                                                "Seguro Pessoal (+R$ 25,00/dia)"
                                            </span>
                                        </label>
                                        <label class="flex items-center p-4 border border-gray-200 rounded-xl cursor-pointer hover:bg-blue-50 transition-colors">
                                            <input
                                                type="checkbox"
                                                class="w-5 h-5 text-blue-600"
                                                prop:checked=move || seguro_terceiros.get()
                                                on:change=move |ev| set_seguro_terceiros.set(event_target_checked(&ev))
                                            />
                                            <span class="ml-3 font-bold text-sm text-gray-800">
                                                "Seguro contra Terceiros (+R$ 35,00/dia)"
                                            </span>
                                        </label>
                                    </div>
                                </div>

                                <Show when=move || erro_simulacao.with(|e| !e.is_empty())>
                                    <div class="text-red-500 text-sm bg-red-50 p-3 rounded-lg text-center font-bold">
                                        {move || erro_simulacao.get()}
                                    </div>
                                </Show>

                                <div class="flex gap-4 pt-4">
                                    <button
                                        on:click=back_to_vehicles
                                        class="px-6 py-3 rounded-xl text-gray-600 font-bold hover:bg-gray-100 transition-colors"
                                    >
                                        "Voltar"
                                    </button>
                                    <button
                                        on:click=handle_simulate
                                        disabled=move || loading.get()
                                        class="flex-1 bg-blue-600 hover:bg-blue-700 text-white font-bold py-3 rounded-xl transition-all shadow-lg disabled:opacity-50"
                                    >
                                        {move || if loading.get() { "Simulando..." } else { "Simular e Continuar" }}
                                    </button>
                                </div>
                            </div>
                        </div>
                    </div>
                </Show>

                // passo 3: confirmação
                <Show when=move || step.get() == WizardStep::ReviewAndConfirm>
                    <div class="max-w-2xl mx-auto animate-fade-in">
                        <div class="bg-white rounded-3xl shadow-xl border border-blue-100 overflow-hidden">
                            <div class="bg-slate-900 p-6 text-center">
                                <h2 class="text-2xl font-bold text-white font-futuristic">"Resumo da Reserva"</h2>
                            </div>
                            <div class="p-8">
                                {move || simulacao.get().map(|resultado| view! {
                                    <div class="space-y-3 text-sm text-gray-700 mb-8">
                                        <div class="flex justify-between">
                                            <span>"Veículo"</span>
                                            <span class="font-bold">
                                                {selecionado.with(|v| v.as_ref().map(|v| v.modelo.clone()).unwrap_or_default())}
                                            </span>
                                        </div>
                                        <div class="flex justify-between">
                                            <span>"Período"</span>
                                            <span class="font-bold">
                                                {dates::format_br_date(&data_retirada.get())}
                                                " até "
                                                {dates::format_br_date(&data_devolucao.get())}
                                            </span>
                                        </div>
                                        <div class="flex justify-between">
                                            <span>"Diárias (" {resultado.quantidade_diarias} ")"</span>
                                            <span class="font-bold">{format!("R$ {:.2}", resultado.valor_diarias)}</span>
                                        </div>
                                        <div class="flex justify-between">
                                            <span>"Seguros"</span>
                                            <span class="font-bold">{format!("R$ {:.2}", resultado.valor_seguros)}</span>
                                        </div>
                                        <div class="flex justify-between text-xl font-bold text-blue-700 pt-4 border-t border-gray-100 mt-2">
                                            <span>"Total Estimado"</span>
                                            <span>{format!("R$ {:.2}", resultado.valor_total_estimado)}</span>
                                        </div>
                                    </div>
                                })}
                                <div class="flex gap-4">
                                    <button
                                        on:click=back_to_details
                                        class="px-6 py-3 rounded-xl text-gray-600 font-bold hover:bg-gray-100 transition-colors"
                                    >
                                        "Corrigir"
                                    </button>
                                    <button
                                        on:click=handle_confirm
                                        disabled=move || loading.get()
                                        class="flex-1 bg-green-600 hover:bg-green-700 text-white font-bold py-3 rounded-xl transition-all shadow-lg disabled:opacity-50"
                                    >
                                        {move || if loading.get() { "Confirmando..." } else { "CONFIRMAR RESERVA" }}
                                    </button>
                                </div>
                            </div>
                        </div>
                    </div>
                </Show>
            </div>

            <Footer/>
        </div>
    }
}
