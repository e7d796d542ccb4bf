use leptos::logging;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::frontend::components::{
    ConfirmModal, Footer, NavbarInternal, StatusMessage, StatusModal,
};
use crate::models::{DriverSummary, UserRole};
use crate::services::auth::use_auth;
use crate::services::{company, customers};

/// Company driver management: the linked-driver list lives on the PJ
/// profile; add by CPF, remove with confirmation.
#[component]
pub fn DriversPage() -> impl IntoView {
    let auth = use_auth();

    let (motoristas, set_motoristas) = signal(Vec::<DriverSummary>::new());
    let (loading, set_loading) = signal(true);
    let (novo_cpf, set_novo_cpf) = signal(String::new());
    let (adicionando, set_adicionando) = signal(false);
    let (removendo, set_removendo) = signal(false);

    let confirm_open = RwSignal::new(false);
    let (para_remover, set_para_remover) = signal(Option::<DriverSummary>::None);
    let status_modal = RwSignal::new(Option::<StatusMessage>::None);

    let carregar = move || {
        spawn_local(async move {
            match customers::my_profile(UserRole::ClientePj).await {
                Ok(perfil) => set_motoristas.set(perfil.drivers().to_vec()),
                Err(err) => logging::error!("erro ao carregar motoristas: {err}"),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| carregar());

    let handle_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let cpf = novo_cpf.get_untracked();
        if cpf.is_empty() {
            return;
        }
        set_adicionando.set(true);
        spawn_local(async move {
            match company::add_driver(&cpf).await {
                Ok(()) => {
                    set_novo_cpf.set(String::new());
                    status_modal.set(Some(StatusMessage::success(
                        "Motorista Vinculado",
                        "O motorista agora pode retirar veículos pela sua empresa.",
                    )));
                    carregar();
                }
                Err(err) => {
                    status_modal.set(Some(StatusMessage::error(
                        "Erro ao Vincular",
                        err.user_message(),
                    )));
                }
            }
            set_adicionando.set(false);
        });
    };

    let handle_remove = Callback::new(move |()| {
        let Some(motorista) = para_remover.get_untracked() else {
            return;
        };
        set_removendo.set(true);
        spawn_local(async move {
            match company::remove_driver(motorista.id_pessoa).await {
                Ok(()) => {
                    confirm_open.set(false);
                    set_para_remover.set(None);
                    status_modal.set(Some(StatusMessage::success(
                        "Motorista Removido",
                        "O vínculo com a empresa foi desfeito.",
                    )));
                    carregar();
                }
                Err(err) => {
                    confirm_open.set(false);
                    status_modal.set(Some(StatusMessage::error(
                        "Erro ao Remover",
                        err.user_message(),
                    )));
                }
            }
            set_removendo.set(false);
        });
    });

    view! {
        <div class="min-h-screen bg-gray-50 flex flex-col">
            <NavbarInternal/>

            <ConfirmModal
                open=confirm_open
                title="Remover Motorista?"
                description="Ele perderá o acesso às reservas da empresa."
                loading=removendo
                on_confirm=handle_remove
                danger=true
            />
            <StatusModal state=status_modal />

            <div class="max-w-4xl mx-auto px-4 py-10 w-full flex-grow">
                <Show when=move || !auth.is_company()>
                    <p class="text-sm text-yellow-700 bg-yellow-50 border border-yellow-200 p-3 rounded-lg mb-6">
                        "A gestão de motoristas está disponível apenas para contas empresariais."
                    </p>
                </Show>

                <h1 class="text-3xl font-bold font-futuristic text-slate-900 mb-2">"Gestão de Motoristas"</h1>
                <p class="text-gray-500 mb-8">
                    "Vincule por CPF os motoristas autorizados a retirar veículos pela empresa."
                </p>

                <form
                    on:submit=handle_add
                    class="bg-white rounded-2xl shadow-sm border border-gray-200 p-6 mb-8 flex flex-col md:flex-row gap-4 items-end"
                >
                    <div class="flex-1 w-full">
                        <label class="block text-sm font-bold text-gray-700 mb-1">"CPF do motorista"</label>
                        <input
                            type="text"
                            required=true
                            placeholder="000.000.000-00"
                            class="block w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 outline-none transition-all"
                            prop:value=move || novo_cpf.get()
                            on:input=move |ev| set_novo_cpf.set(event_target_value(&ev))
                        />
                        <p class="mt-1 text-xs text-gray-500">
                            "O motorista precisa ter uma conta pessoa física cadastrada."
                        </p>
                    </div>
                    <button
                        type="submit"
                        disabled=move || adicionando.get()
                        class="btn-primary whitespace-nowrap"
                    >
                        {move || if adicionando.get() { "Vinculando..." } else { "Adicionar Motorista" }}
                    </button>
                </form>

                <Show
                    when=move || !loading.get()
                    fallback=|| view! {
                        <div class="flex justify-center py-12">
                            <span class="w-10 h-10 border-4 border-blue-200 border-t-blue-600 rounded-full animate-spin"></span>
                        </div>
                    }
                >
                    <Show
                        when=move || motoristas.with(|m| !m.is_empty())
                        fallback=|| view! {
                            <div class="bg-white rounded-2xl border border-gray-200 p-12 text-center text-gray-500">
                                "Nenhum motorista vinculado ainda."
                            </div>
                        }
                    >
                        <div class="bg-white rounded-2xl shadow-sm border border-gray-200 divide-y divide-gray-100">
                            <For
                                each=move || motoristas.get()
                                key=|motorista| motorista.id_pessoa
                                let:motorista
                            >
                                {
                                    let para_modal = motorista.clone();
                                    let abrir_remocao = move |_| {
                                        set_para_remover.set(Some(para_modal.clone()));
                                        confirm_open.set(true);
                                    };
                                    view! {
                                        <div class="p-5 flex items-center justify-between gap-4">
                                            <div>
                                                <p class="font-bold text-slate-900">{motorista.nome_completo.clone()}</p>
                                                <p class="text-sm text-gray-500">
                                                    "CPF: " {motorista.cpf.clone()} " • " {motorista.email.clone()}
                                                </p>
                                            </div>
                                            <button
                                                on:click=abrir_remocao
                                                class="text-red-400 hover:text-red-600 text-sm font-bold hover:underline"
                                            >
                                                "Remover"
                                            </button>
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
