use leptos::logging;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::frontend::components::{
    AddVehicleModal, AdminLayout, ConfirmModal, StatusMessage, StatusModal, VehicleDetailsModal,
    VehicleEditModal,
};
use crate::models::{
    CreateVehicleRequest, UpdateVehicleRequest, Vehicle, VehicleCategory, VehicleStatus,
};
use crate::services::vehicles;

fn status_badge_classes(status: VehicleStatus) -> &'static str {
    match status {
        VehicleStatus::Disponivel => "bg-green-100 text-green-700 border-green-200",
        VehicleStatus::Alugado => "bg-blue-100 text-blue-700 border-blue-200",
        VehicleStatus::EmManutencao => "bg-yellow-100 text-yellow-700 border-yellow-200",
        VehicleStatus::Reservado => "bg-purple-100 text-purple-700 border-purple-200",
        VehicleStatus::Indisponivel => "bg-red-100 text-red-700 border-red-200",
    }
}

/// Fleet management table: substring search over model/plate plus the
/// add/edit/delete modal flow.
#[component]
pub fn AdminFleetPage() -> impl IntoView {
    let (veiculos, set_veiculos) = signal(Vec::<Vehicle>::new());
    let (loading, set_loading) = signal(true);
    let (busca, set_busca) = signal(String::new());
    let (loading_action, set_loading_action) = signal(false);

    let (selecionado, set_selecionado) = signal(Option::<Vehicle>::None);
    let add_open = RwSignal::new(false);
    let edit_open = RwSignal::new(false);
    let delete_open = RwSignal::new(false);
    let details_open = RwSignal::new(false);
    let status_modal = RwSignal::new(Option::<StatusMessage>::None);

    let carregar = move || {
        set_loading.set(true);
        spawn_local(async move {
            match vehicles::list_all_admin().await {
                Ok(dados) => set_veiculos.set(dados),
                Err(err) => logging::error!("erro ao carregar frota: {err}"),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| carregar());

    let filtrados = move || {
        veiculos.with(|todos| {
            let termo = busca.get();
            todos
                .iter()
                .filter(|v| v.matches_search(&termo))
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    let handle_add = Callback::new(move |(cat, data): (VehicleCategory, CreateVehicleRequest)| {
        set_loading_action.set(true);
        spawn_local(async move {
            match vehicles::create(cat, &data).await {
                Ok(()) => {
                    add_open.set(false);
                    status_modal.set(Some(StatusMessage::success(
                        "Veículo Cadastrado",
                        "Novo veículo adicionado à frota.",
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

    let handle_edit = Callback::new(
        move |(id, cat, data): (i64, VehicleCategory, UpdateVehicleRequest)| {
            set_loading_action.set(true);
            spawn_local(async move {
                match vehicles::update(id, cat, &data).await {
                    Ok(()) => {
                        edit_open.set(false);
                        status_modal.set(Some(StatusMessage::success(
                            "Veículo Atualizado",
                            "As informações foram salvas com sucesso.",
                        )));
                        carregar();
                    }
                    Err(err) => {
                        status_modal.set(Some(StatusMessage::error(
                            "Erro",
                            "Não foi possível atualizar o veículo.",
                        )));
                        logging::error!("erro ao atualizar veículo: {err}");
                    }
                }
                set_loading_action.set(false);
            });
        },
    );

    let handle_delete = Callback::new(move |()| {
        let Some(veiculo) = selecionado.get_untracked() else {
            return;
        };
        set_loading_action.set(true);
        spawn_local(async move {
            match vehicles::delete(veiculo.id_veiculo).await {
                Ok(()) => {
                    delete_open.set(false);
                    status_modal.set(Some(StatusMessage::success(
                        "Veículo Excluído",
                        "O veículo foi removido com sucesso.",
                    )));
                    carregar();
                }
                Err(err) => {
                    delete_open.set(false);
                    status_modal.set(Some(StatusMessage::error(
                        "Erro ao Excluir",
                        "Não foi possível remover. Verifique se não há reservas associadas.",
                    )));
                    logging::error!("erro ao excluir veículo: {err}");
                }
            }
            set_loading_action.set(false);
        });
    });

    view! {
        <AdminLayout title="Gestão da Frota" subtitle="Cadastre, edite e acompanhe os veículos.">
            <AddVehicleModal open=add_open loading=loading_action on_confirm=handle_add />
            <VehicleEditModal
                open=edit_open
                vehicle=selecionado
                loading=loading_action
                on_save=handle_edit
            />
            <VehicleDetailsModal open=details_open vehicle=selecionado />
            <ConfirmModal
                open=delete_open
                title="Excluir Veículo?"
                description="Essa ação não pode ser desfeita."
                loading=loading_action
                on_confirm=handle_delete
                danger=true
            />
            <StatusModal state=status_modal />

            <div class="flex flex-col md:flex-row gap-4 justify-between mb-6">
                <input
                    type="text"
                    placeholder="Buscar por modelo ou placa..."
                    class="w-full md:w-80 px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 outline-none transition-all"
                    prop:value=move || busca.get()
                    on:input=move |ev| set_busca.set(event_target_value(&ev))
                />
                <button on:click=move |_| add_open.set(true) class="btn-primary whitespace-nowrap">
                    "+ Adicionar Veículo"
                </button>
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
                                <th class="px-6 py-4">"Veículo"</th>
                                <th class="px-6 py-4">"Placa"</th>
                                <th class="px-6 py-4">"Categoria"</th>
                                <th class="px-6 py-4">"Diária"</th>
                                <th class="px-6 py-4">"Status"</th>
                                <th class="px-6 py-4 text-right">"Ações"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-100">
                            <For
                                each=filtrados
                                key=|veiculo| (veiculo.id_veiculo, veiculo.status)
                                let:veiculo
                            >
                                {
                                    let para_detalhes = veiculo.clone();
                                    let abrir_detalhes = move |_| {
                                        set_selecionado.set(Some(para_detalhes.clone()));
                                        details_open.set(true);
                                    };
                                    let para_editar = veiculo.clone();
                                    let abrir_edicao = move |_| {
                                        set_selecionado.set(Some(para_editar.clone()));
                                        edit_open.set(true);
                                    };
                                    let para_excluir = veiculo.clone();
                                    let abrir_exclusao = move |_| {
                                        set_selecionado.set(Some(para_excluir.clone()));
                                        delete_open.set(true);
                                    };
                                    view! {
                                        <tr class="hover:bg-gray-50 transition-colors">
                                            <td class="px-6 py-4">
                                                <p class="font-bold text-slate-900">{veiculo.modelo.clone()}</p>
                                                <p class="text-xs text-gray-500">
                                                    {veiculo.marca.clone()} " • " {veiculo.ano_modelo}
                                                </p>
                                            </td>
                                            <td class="px-6 py-4 font-mono">{veiculo.placa.clone()}</td>
                                            <td class="px-6 py-4">{veiculo.tipo_veiculo.label()}</td>
                                            <td class="px-6 py-4 font-bold text-blue-700">
                                                {format!("R$ {:.2}", veiculo.valor_diaria)}
                                            </td>
                                            <td class="px-6 py-4">
                                                <span class=format!(
                                                    "text-[10px] font-bold uppercase px-2 py-1 rounded border {}",
                                                    status_badge_classes(veiculo.status)
                                                )>
                                                    {veiculo.status.as_str()}
                                                </span>
                                            </td>
                                            <td class="px-6 py-4">
                                                <div class="flex gap-3 justify-end text-sm font-medium">
                                                    <button
                                                        on:click=abrir_detalhes
                                                        class="text-gray-500 hover:text-blue-600 hover:underline"
                                                    >
                                                        "Detalhes"
                                                    </button>
                                                    <button
                                                        on:click=abrir_edicao
                                                        class="text-gray-500 hover:text-blue-600 hover:underline"
                                                    >
                                                        "Editar"
                                                    </button>
                                                    <button
                                                        on:click=abrir_exclusao
                                                        class="text-red-400 hover:text-red-600 hover:underline"
                                                    >
                                                        "Excluir"
                                                    </button>
                                                </div>
                                            </td>
                                        </tr>
                                    }
                                }
                            </For>
                        </tbody>
                    </table>
                    <Show when=move || filtrados().is_empty()>
                        <p class="text-center text-gray-500 py-12">"Nenhum veículo encontrado."</p>
                    </Show>
                </div>
            </Show>
        </AdminLayout>
    }
}
