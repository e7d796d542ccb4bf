use leptos::logging;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::frontend::components::{
    AdminLayout, ConfirmModal, CustomerDetailsModal, StatusMessage, StatusModal,
};
use crate::models::{AccountStatus, CustomerKind, CustomerProfile};
use crate::services::customers;

/// Merged PF+PJ customer table with search, type filter, block/unblock and
/// removal.
#[component]
pub fn AdminCustomersPage() -> impl IntoView {
    let (clientes, set_clientes) = signal(Vec::<CustomerProfile>::new());
    let (loading, set_loading) = signal(true);
    let (busca, set_busca) = signal(String::new());
    let (filtro_tipo, set_filtro_tipo) = signal(Option::<CustomerKind>::None);
    let (loading_action, set_loading_action) = signal(false);

    let (selecionado, set_selecionado) = signal(Option::<CustomerProfile>::None);
    let details_open = RwSignal::new(false);
    let block_open = RwSignal::new(false);
    let delete_open = RwSignal::new(false);
    let status_modal = RwSignal::new(Option::<StatusMessage>::None);

    let carregar = move || {
        spawn_local(async move {
            match customers::list_all().await {
                Ok(dados) => set_clientes.set(dados),
                Err(err) => logging::error!("erro ao carregar clientes: {err}"),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| carregar());

    let filtrados = move || {
        clientes.with(|todos| {
            let termo = busca.get();
            let filtro = filtro_tipo.get();
            todos
                .iter()
                .filter(|c| c.matches_search(&termo))
                .filter(|c| filtro.is_none_or(|tipo| c.tipo_cliente == tipo))
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    let handle_toggle_block = Callback::new(move |()| {
        let Some(cliente) = selecionado.get_untracked() else {
            return;
        };
        let novo_status = if cliente.e_ativo {
            AccountStatus::Bloqueado
        } else {
            AccountStatus::Ativo
        };
        set_loading_action.set(true);
        spawn_local(async move {
            match customers::set_status(cliente.id_pessoa, cliente.tipo_cliente, novo_status).await
            {
                Ok(()) => {
                    block_open.set(false);
                    let (title, message) = if cliente.e_ativo {
                        ("Cliente Bloqueado", "O cliente não poderá fazer novas reservas.")
                    } else {
                        ("Cliente Reativado", "O cliente voltou a ter acesso às reservas.")
                    };
                    status_modal.set(Some(StatusMessage::success(title, message)));
                    carregar();
                }
                Err(err) => {
                    block_open.set(false);
                    status_modal.set(Some(StatusMessage::error("Erro", err.user_message())));
                }
            }
            set_loading_action.set(false);
        });
    });

    let handle_delete = Callback::new(move |()| {
        let Some(cliente) = selecionado.get_untracked() else {
            return;
        };
        set_loading_action.set(true);
        spawn_local(async move {
            match customers::delete(cliente.id_pessoa, cliente.tipo_cliente).await {
                Ok(()) => {
                    delete_open.set(false);
                    status_modal.set(Some(StatusMessage::success(
                        "Cliente Removido",
                        "O cadastro foi excluído com sucesso.",
                    )));
                    carregar();
                }
                Err(err) => {
                    delete_open.set(false);
                    status_modal.set(Some(StatusMessage::error(
                        "Erro ao Excluir",
                        "Não foi possível remover. Verifique se não há reservas associadas.",
                    )));
                    logging::error!("erro ao excluir cliente: {err}");
                }
            }
            set_loading_action.set(false);
        });
    });

    let tipo_chip = move |value: Option<CustomerKind>, label: &'static str| {
        view! {
            <button
                on:click=move |_| set_filtro_tipo.set(value)
                class=move || {
                    if filtro_tipo.get() == value {
                        "px-4 py-2 rounded-full text-sm font-bold border bg-slate-900 text-white border-slate-900"
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
        <AdminLayout title="Clientes" subtitle="Gerencie contas pessoa física e jurídica.">
            <CustomerDetailsModal open=details_open customer=selecionado />
            <ConfirmModal
                open=block_open
                title="Alterar Situação do Cliente?"
                description="Clientes bloqueados não podem fazer novas reservas."
                loading=loading_action
                on_confirm=handle_toggle_block
            />
            <ConfirmModal
                open=delete_open
                title="Excluir Cliente?"
                description="Essa ação não pode ser desfeita."
                loading=loading_action
                on_confirm=handle_delete
                danger=true
            />
            <StatusModal state=status_modal />

            <div class="flex flex-col md:flex-row gap-4 mb-6 md:items-center">
                <input
                    type="text"
                    placeholder="Buscar por nome, documento ou e-mail..."
                    class="w-full md:w-80 px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 outline-none transition-all"
                    prop:value=move || busca.get()
                    on:input=move |ev| set_busca.set(event_target_value(&ev))
                />
                <div class="flex gap-2">
                    {tipo_chip(None, "Todos")}
                    {tipo_chip(Some(CustomerKind::Pf), "Pessoa Física")}
                    {tipo_chip(Some(CustomerKind::Pj), "Pessoa Jurídica")}
                </div>
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
                                <th class="px-6 py-4">"Cliente"</th>
                                <th class="px-6 py-4">"Documento"</th>
                                <th class="px-6 py-4">"Tipo"</th>
                                <th class="px-6 py-4">"Situação"</th>
                                <th class="px-6 py-4 text-right">"Ações"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-100">
                            <For
                                each=filtrados
                                key=|cliente| (cliente.id_pessoa, cliente.tipo_cliente, cliente.e_ativo)
                                let:cliente
                            >
                                {
                                    let ativo = cliente.e_ativo;
                                    let para_detalhes = cliente.clone();
                                    let abrir_detalhes = move |_| {
                                        set_selecionado.set(Some(para_detalhes.clone()));
                                        details_open.set(true);
                                    };
                                    let para_bloqueio = cliente.clone();
                                    let abrir_bloqueio = move |_| {
                                        set_selecionado.set(Some(para_bloqueio.clone()));
                                        block_open.set(true);
                                    };
                                    let para_exclusao = cliente.clone();
                                    let abrir_exclusao = move |_| {
                                        set_selecionado.set(Some(para_exclusao.clone()));
                                        delete_open.set(true);
                                    };
                                    view! {
                                        <tr class="hover:bg-gray-50 transition-colors">
                                            <td class="px-6 py-4">
                                                <p class="font-bold text-slate-900">
                                                    {cliente.display_name().to_string()}
                                                </p>
                                                <p class="text-xs text-gray-500">{cliente.email.clone()}</p>
                                            </td>
                                            <td class="px-6 py-4 font-mono">
                                                {cliente.document().unwrap_or("-").to_string()}
                                            </td>
                                            <td class="px-6 py-4">{cliente.tipo_cliente.label()}</td>
                                            <td class="px-6 py-4">
                                                <span class=if ativo {
                                                    "text-[10px] font-bold uppercase px-2 py-1 rounded border bg-green-100 text-green-700 border-green-200"
                                                } else {
                                                    "text-[10px] font-bold uppercase px-2 py-1 rounded border bg-red-100 text-red-700 border-red-200"
                                                }>
                                                    {if ativo { "Ativo" } else { "Bloqueado" }}
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
                                                        on:click=abrir_bloqueio
                                                        class="text-yellow-600 hover:text-yellow-800 hover:underline"
                                                    >
                                                        {if ativo { "Bloquear" } else { "Reativar" }}
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
                        <p class="text-center text-gray-500 py-12">"Nenhum cliente encontrado."</p>
                    </Show>
                </div>
            </Show>
        </AdminLayout>
    }
}
