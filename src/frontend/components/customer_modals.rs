use leptos::prelude::*;

use crate::common::dates;
use crate::models::CustomerProfile;

fn row(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="flex justify-between gap-6">
            <span class="text-gray-500">{label}</span>
            <span class="font-bold text-right">{value}</span>
        </div>
    }
}

/// Read-only customer sheet used by the admin customers table.
#[component]
pub fn CustomerDetailsModal(
    open: RwSignal<bool>,
    #[prop(into)] customer: Signal<Option<CustomerProfile>>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get() && customer.with(|c| c.is_some())>
            {move || customer.get().map(|cliente| {
                let endereco = format!(
                    "{}, {} - {} - {}/{}",
                    cliente.endereco.rua,
                    cliente.endereco.numero,
                    cliente.endereco.bairro,
                    cliente.endereco.cidade,
                    cliente.endereco.estado,
                );
                let documento = cliente.document().unwrap_or("-").to_string();
                let situacao = if cliente.e_ativo { "Ativo" } else { "Bloqueado" }.to_string();
                let drivers = cliente.drivers().to_vec();

                view! {
                    <div class="fixed inset-0 z-[60] flex items-center justify-center bg-black/60 backdrop-blur-sm p-4 animate-fade-in">
                        <div class="bg-white rounded-2xl shadow-2xl w-full max-w-lg overflow-hidden max-h-[90vh] flex flex-col">
                            <div class="bg-slate-900 p-6 flex items-center justify-between shrink-0">
                                <div>
                                    <h3 class="text-lg font-bold text-white font-futuristic">
                                        {cliente.display_name().to_string()}
                                    </h3>
                                    <p class="text-xs text-gray-400 uppercase">{cliente.tipo_cliente.label()}</p>
                                </div>
                                <button
                                    on:click=move |_| open.set(false)
                                    class="text-slate-400 hover:text-white transition-colors font-bold"
                                >
                                    "✕"
                                </button>
                            </div>
                            <div class="p-6 space-y-3 text-sm text-gray-700 overflow-y-auto">
                                {row("Documento", documento)}
                                {row("E-mail", cliente.email.clone())}
                                {row("Telefone", cliente.telefone.clone())}
                                {row("Endereço", endereco)}
                                {row("CEP", cliente.endereco.cep.clone())}
                                {cliente.cnh.clone().map(|cnh| row("CNH", cnh))}
                                {row("Cliente desde", dates::format_br_date(&cliente.data_criacao))}
                                {row("Situação", situacao)}

                                <Show when={
                                    let has_drivers = !drivers.is_empty();
                                    move || has_drivers
                                }>
                                    <div class="pt-3 border-t border-gray-100">
                                        <p class="text-gray-500 font-bold mb-2">"Motoristas vinculados"</p>
                                        <ul class="space-y-1">
                                            {drivers.iter().map(|motorista| view! {
                                                <li class="flex justify-between">
                                                    <span>{motorista.nome_completo.clone()}</span>
                                                    <span class="text-gray-400">{motorista.cpf.clone()}</span>
                                                </li>
                                            }).collect::<Vec<_>>()}
                                        </ul>
                                    </div>
                                </Show>
                            </div>
                        </div>
                    </div>
                }
            })}
        </Show>
    }
}
