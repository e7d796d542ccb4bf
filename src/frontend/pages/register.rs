use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::frontend::components::{Button, ButtonVariant, ErrorAlert, TextInput};
use crate::models::{Address, CustomerKind, RegisterPessoaFisica, RegisterPessoaJuridica};
use crate::services::customers;

/// Account creation with a PF/PJ tab switch. Successful registration lands
/// on the login page.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();

    let (kind, set_kind) = signal(CustomerKind::Pf);

    let (nome, set_nome) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (documento, set_documento) = signal(String::new());
    let (cnh, set_cnh) = signal(String::new());
    let (telefone, set_telefone) = signal(String::new());
    let (senha, set_senha) = signal(String::new());

    let (cep, set_cep) = signal(String::new());
    let (rua, set_rua) = signal(String::new());
    let (numero, set_numero) = signal(String::new());
    let (complemento, set_complemento) = signal(String::new());
    let (bairro, set_bairro) = signal(String::new());
    let (cidade, set_cidade) = signal(String::new());
    let (estado, set_estado) = signal(String::new());

    let (error, set_error) = signal(Option::<String>::None);
    let (loading, set_loading) = signal(false);

    let endereco = move || Address {
        cep: cep.get_untracked(),
        rua: rua.get_untracked(),
        numero: numero.get_untracked(),
        complemento: Some(complemento.get_untracked()),
        bairro: bairro.get_untracked(),
        cidade: cidade.get_untracked(),
        estado: estado.get_untracked(),
    };

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let navigate = navigate.clone();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = match kind.get_untracked() {
                CustomerKind::Pf => {
                    let cnh = cnh.get_untracked();
                    let data = RegisterPessoaFisica {
                        nome_completo: nome.get_untracked(),
                        email: email.get_untracked(),
                        cpf: documento.get_untracked(),
                        cnh: if cnh.is_empty() { "N/A".to_string() } else { cnh },
                        telefone: telefone.get_untracked(),
                        senha_texto_puro: senha.get_untracked(),
                        endereco: endereco(),
                    };
                    customers::register_pf(&data).await
                }
                CustomerKind::Pj => {
                    let data = RegisterPessoaJuridica {
                        razao_social: nome.get_untracked(),
                        nome_fantasia: nome.get_untracked(),
                        email: email.get_untracked(),
                        cnpj: documento.get_untracked(),
                        telefone: telefone.get_untracked(),
                        senha_texto_puro: senha.get_untracked(),
                        endereco: endereco(),
                    };
                    customers::register_pj(&data).await
                }
            };

            match result {
                Ok(()) => navigate("/login", Default::default()),
                Err(err) => set_error.set(Some(err.user_message())),
            }
            set_loading.set(false);
        });
    };

    let kind_tab = move |tab: CustomerKind, label: &'static str| {
        view! {
            <button
                type="button"
                on:click=move |_| set_kind.set(tab)
                class=move || {
                    if kind.get() == tab {
                        "flex-1 py-3 rounded-lg text-sm font-bold bg-blue-600 text-white shadow-md transition-all"
                    } else {
                        "flex-1 py-3 rounded-lg text-sm font-bold bg-gray-100 text-gray-500 hover:bg-gray-200 transition-all"
                    }
                }
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="min-h-screen flex items-center justify-center px-6 py-12 bg-gray-50">
            <div class="w-full max-w-2xl">
                <div class="bg-white border border-gray-200 rounded-2xl p-8 shadow-xl">
                    <div class="text-center mb-8">
                        <a href="/" class="inline-block text-2xl font-bold font-futuristic text-[#003366] mb-4">
                            "FrotaNext"
                        </a>
                        <h1 class="text-2xl font-bold text-slate-900 font-futuristic">"Criar Conta"</h1>
                        <p class="text-gray-500 mt-2">"Escolha o tipo de conta e preencha seus dados"</p>
                    </div>

                    <div class="flex gap-3 mb-8">
                        {kind_tab(CustomerKind::Pf, "Pessoa Física")}
                        {kind_tab(CustomerKind::Pj, "Pessoa Jurídica")}
                    </div>

                    {move || error.get().map(|msg| view! { <ErrorAlert message=msg /> })}

                    <form on:submit=handle_submit class="space-y-5">
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-5">
                            {move || if kind.get() == CustomerKind::Pf {
                                view! {
                                    <TextInput label="Nome completo" name="nome" required=true value=nome set_value=set_nome />
                                    <TextInput label="CPF" name="documento" placeholder="000.000.000-00" required=true value=documento set_value=set_documento />
                                    <TextInput label="CNH" name="cnh" hint="Opcional - necessária para retirar o veículo" value=cnh set_value=set_cnh />
                                }.into_any()
                            } else {
                                view! {
                                    <TextInput label="Razão social" name="nome" required=true value=nome set_value=set_nome />
                                    <TextInput label="CNPJ" name="documento" placeholder="00.000.000/0000-00" required=true value=documento set_value=set_documento />
                                }.into_any()
                            }}
                            <TextInput label="E-mail" name="email" input_type="email" required=true value=email set_value=set_email />
                            <TextInput label="Telefone" name="telefone" placeholder="(00) 00000-0000" required=true value=telefone set_value=set_telefone />
                            <TextInput label="Senha" name="senha" input_type="password" required=true value=senha set_value=set_senha />
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

                        <div class="pt-4">
                            <Button
                                variant=ButtonVariant::Primary
                                loading=loading
                                loading_text="Criando conta..."
                            >
                                "Criar Conta"
                            </Button>
                        </div>
                    </form>

                    <p class="text-center text-gray-500 mt-6 text-sm">
                        "Já tem uma conta? "
                        <a href="/login" class="font-bold text-blue-600 hover:text-blue-800 hover:underline">
                            "Entrar"
                        </a>
                    </p>
                </div>
            </div>
        </div>
    }
}
