use leptos::logging;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::frontend::components::{
    ConfirmModal, Footer, NavbarInternal, StatusMessage, StatusModal, TextInput,
};
use crate::models::{Address, CustomerProfile, UpdateProfileRequest, UserRole};
use crate::services::auth::use_auth;
use crate::services::customers;

/// Self-profile page: contact and address fields are editable, identity
/// fields are not.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();

    let (perfil, set_perfil) = signal(Option::<CustomerProfile>::None);
    let (loading, set_loading) = signal(true);
    let (saving, set_saving) = signal(false);

    let confirm_open = RwSignal::new(false);
    let status_modal = RwSignal::new(Option::<StatusMessage>::None);

    let (email, set_email) = signal(String::new());
    let (telefone, set_telefone) = signal(String::new());
    let (cep, set_cep) = signal(String::new());
    let (rua, set_rua) = signal(String::new());
    let (numero, set_numero) = signal(String::new());
    let (complemento, set_complemento) = signal(String::new());
    let (bairro, set_bairro) = signal(String::new());
    let (cidade, set_cidade) = signal(String::new());
    let (estado, set_estado) = signal(String::new());

    let role = move || auth.role().unwrap_or(UserRole::ClientePf);

    let carregar = move || {
        spawn_local(async move {
            match customers::my_profile(role()).await {
                Ok(dados) => {
                    set_email.set(dados.email.clone());
                    set_telefone.set(dados.telefone.clone());
                    set_cep.set(dados.endereco.cep.clone());
                    set_rua.set(dados.endereco.rua.clone());
                    set_numero.set(dados.endereco.numero.clone());
                    set_complemento.set(dados.endereco.complemento.clone().unwrap_or_default());
                    set_bairro.set(dados.endereco.bairro.clone());
                    set_cidade.set(dados.endereco.cidade.clone());
                    set_estado.set(dados.endereco.estado.clone());
                    set_perfil.set(Some(dados));
                }
                Err(err) => logging::error!("erro ao carregar perfil: {err}"),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| carregar());

    let handle_save = Callback::new(move |()| {
        set_saving.set(true);
        spawn_local(async move {
            let data = UpdateProfileRequest {
                email: email.get_untracked(),
                telefone: telefone.get_untracked(),
                endereco: Address {
                    cep: cep.get_untracked(),
                    rua: rua.get_untracked(),
                    numero: numero.get_untracked(),
                    complemento: Some(complemento.get_untracked()),
                    bairro: bairro.get_untracked(),
                    cidade: cidade.get_untracked(),
                    estado: estado.get_untracked(),
                },
            };
            match customers::update_my_profile(role(), &data).await {
                Ok(()) => {
                    confirm_open.set(false);
                    status_modal.set(Some(StatusMessage::success(
                        "Perfil Atualizado",
                        "Seus dados foram salvos com sucesso.",
                    )));
                    carregar();
                }
                Err(err) => {
                    confirm_open.set(false);
                    status_modal.set(Some(StatusMessage::error("Erro ao Salvar", err.user_message())));
                }
            }
            set_saving.set(false);
        });
    });

    view! {
        <div class="min-h-screen bg-gray-50 flex flex-col">
            <NavbarInternal/>

            <ConfirmModal
                open=confirm_open
                title="Salvar Alterações?"
                description="As novas informações substituirão as antigas."
                loading=saving
                on_confirm=handle_save
            />
            <StatusModal state=status_modal />

            <div class="max-w-3xl mx-auto px-4 py-10 w-full flex-grow">
                <h1 class="text-3xl font-bold font-futuristic text-slate-900 mb-8">"Meu Perfil"</h1>

                <Show
                    when=move || !loading.get()
                    fallback=|| view! {
                        <div class="flex justify-center py-20">
                            <span class="w-12 h-12 border-4 border-blue-200 border-t-blue-600 rounded-full animate-spin"></span>
                        </div>
                    }
                >
                    <div class="bg-white rounded-3xl shadow-lg border border-gray-100 p-8">
                        {move || perfil.get().map(|dados| view! {
                            <div class="mb-8 pb-6 border-b border-gray-100">
                                <h2 class="text-2xl font-bold text-slate-900">
                                    {dados.display_name().to_string()}
                                </h2>
                                <p class="text-sm text-gray-500 mt-1">
                                    {dados.tipo_cliente.label()}
                                    {dados.document().map(|doc| format!(" • {doc}")).unwrap_or_default()}
                                </p>
                            </div>
                        })}

                        <form
                            on:submit=move |ev: leptos::ev::SubmitEvent| {
                                ev.prevent_default();
                                confirm_open.set(true);
                            }
                            class="space-y-5"
                        >
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-5">
                                <TextInput label="E-mail" name="email" input_type="email" required=true value=email set_value=set_email />
                                <TextInput label="Telefone" name="telefone" required=true value=telefone set_value=set_telefone />
                            </div>

                            <h3 class="font-bold text-gray-700 pt-4 text-sm uppercase tracking-wider">"Endereço"</h3>
                            <div class="grid grid-cols-1 md:grid-cols-3 gap-5">
                                <TextInput label="CEP" name="cep" required=true value=cep set_value=set_cep />
                                <div class="md:col-span-2">
                                    <TextInput label="Rua" name="rua" required=true value=rua set_value=set_rua />
                                </div>
                                <TextInput label="Número" name="numero" required=true value=numero set_value=set_numero />
                                <TextInput label="Complemento" name="complemento" value=complemento set_value=set_complemento />
                                <TextInput label="Bairro" name="bairro" required=true value=bairro set_value=set_bairro />
                                <TextInput label="Cidade" name="cidade" required=true value=cidade set_value=set_cidade />
                                <TextInput label="Estado" name="estado" placeholder="UF" required=true value=estado set_value=set_estado />
                            </div>

                            <div class="pt-4 flex justify-end">
                                <button type="submit" class="btn-primary">
                                    "Salvar Alterações"
                                </button>
                            </div>
                        </form>
                    </div>
                </Show>
            </div>

            <Footer/>
        </div>
    }
}
