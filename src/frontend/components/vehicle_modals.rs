use leptos::prelude::*;

use crate::models::{CreateVehicleRequest, UpdateVehicleRequest, Vehicle, VehicleCategory, VehicleStatus};

fn detail_row(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="flex justify-between">
            <span class="text-gray-500">{label}</span>
            <span class="font-bold">{value}</span>
        </div>
    }
}

/// Read-only vehicle sheet, including the category-specific attributes.
#[component]
pub fn VehicleDetailsModal(
    open: RwSignal<bool>,
    #[prop(into)] vehicle: Signal<Option<Vehicle>>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get() && vehicle.with(|v| v.is_some())>
            {move || vehicle.get().map(|veiculo| {
                let specifics = match veiculo.tipo_veiculo {
                    VehicleCategory::Passeio => view! {
                        {veiculo.tipo_carroceria.clone().map(|v| detail_row("Carroceria", v))}
                        {veiculo.qtde_portas.map(|v| detail_row("Portas", v.to_string()))}
                        {veiculo.qtde_passageiros.map(|v| detail_row("Passageiros", v.to_string()))}
                        {veiculo.cambio_automatico.map(|v| detail_row("Câmbio automático", se_sim(v)))}
                        {veiculo.ar_condicionado.map(|v| detail_row("Ar-condicionado", se_sim(v)))}
                    }.into_any(),
                    VehicleCategory::Motocicleta => view! {
                        {veiculo.cilindrada.map(|v| detail_row("Cilindrada", format!("{v} cc")))}
                        {veiculo.tipo_tracao.clone().map(|v| detail_row("Tração", v))}
                        {veiculo.abs.map(|v| detail_row("ABS", se_sim(v)))}
                        {veiculo.partida_eletrica.map(|v| detail_row("Partida elétrica", se_sim(v)))}
                        {veiculo.modos_pilotagem.clone().map(|v| detail_row("Modos de pilotagem", v))}
                    }.into_any(),
                    VehicleCategory::Utilitario => view! {
                        {veiculo.tipo_utilitario.clone().map(|v| detail_row("Tipo", v))}
                        {veiculo.capacidade_carga_kg.map(|v| detail_row("Carga (kg)", format!("{v:.0}")))}
                        {veiculo.capacidade_carga_m3.map(|v| detail_row("Carga (m³)", format!("{v:.1}")))}
                        {veiculo.qtde_eixos.map(|v| detail_row("Eixos", v.to_string()))}
                        {veiculo.max_passageiros.map(|v| detail_row("Passageiros", v.to_string()))}
                    }.into_any(),
                };

                view! {
                    <div class="fixed inset-0 z-[60] flex items-center justify-center bg-black/60 backdrop-blur-sm p-4 animate-fade-in">
                        <div class="bg-white rounded-2xl shadow-2xl w-full max-w-lg overflow-hidden max-h-[90vh] flex flex-col">
                            <div class="bg-slate-900 p-6 flex items-center justify-between shrink-0">
                                <div>
                                    <h3 class="text-lg font-bold text-white font-futuristic">{veiculo.modelo.clone()}</h3>
                                    <p class="text-xs text-gray-400 uppercase">
                                        {veiculo.marca.clone()} " • " {veiculo.tipo_veiculo.label()}
                                    </p>
                                </div>
                                <button
                                    on:click=move |_| open.set(false)
                                    class="text-slate-400 hover:text-white transition-colors font-bold"
                                >
                                    "✕"
                                </button>
                            </div>
                            <div class="p-6 space-y-3 text-sm text-gray-700 overflow-y-auto">
                                {detail_row("Placa", veiculo.placa.clone())}
                                {detail_row("Ano", format!("{}/{}", veiculo.ano_fabricacao, veiculo.ano_modelo))}
                                {detail_row("Cor", veiculo.cor.clone())}
                                {detail_row("Chassi", veiculo.chassi.clone())}
                                {detail_row("Tanque", format!("{:.0} L", veiculo.capacidade_tanque))}
                                {detail_row("Status", veiculo.status.as_str().to_string())}
                                {veiculo.motor.clone().map(|v| detail_row("Motor", v))}
                                {specifics}
                                <div class="flex justify-between text-lg text-blue-700 font-bold pt-3 border-t border-gray-100">
                                    <span>"Diária"</span>
                                    <span>{format!("R$ {:.2}", veiculo.valor_diaria)}</span>
                                </div>
                            </div>
                        </div>
                    </div>
                }
            })}
        </Show>
    }
}

fn se_sim(value: bool) -> String {
    if value { "Sim" } else { "Não" }.to_string()
}

/// Edits the basic fields of an existing vehicle. The status select is
/// hidden while the vehicle is reserved or rented - those states belong to
/// the reservation lifecycle.
#[component]
pub fn VehicleEditModal(
    open: RwSignal<bool>,
    #[prop(into)] vehicle: Signal<Option<Vehicle>>,
    #[prop(optional, into)] loading: Signal<bool>,
    #[prop(into)] on_save: Callback<(i64, VehicleCategory, UpdateVehicleRequest)>,
) -> impl IntoView {
    let (placa, set_placa) = signal(String::new());
    let (marca, set_marca) = signal(String::new());
    let (modelo, set_modelo) = signal(String::new());
    let (cor, set_cor) = signal(String::new());
    let (valor_diaria, set_valor_diaria) = signal(String::new());
    let (ano_modelo, set_ano_modelo) = signal(String::new());
    let (status, set_status) = signal(String::new());

    Effect::new(move |_| {
        if let Some(veiculo) = vehicle.get() {
            set_placa.set(veiculo.placa.clone());
            set_marca.set(veiculo.marca.clone());
            set_modelo.set(veiculo.modelo.clone());
            set_cor.set(veiculo.cor.clone());
            set_valor_diaria.set(format!("{:.2}", veiculo.valor_diaria));
            set_ano_modelo.set(veiculo.ano_modelo.to_string());
            set_status.set(veiculo.status.as_str().to_string());
        }
    });

    let status_locked =
        move || vehicle.with(|v| v.as_ref().is_some_and(|v| v.status.blocks_status_edit()));

    let handle_submit = move |_| {
        let Some(veiculo) = vehicle.get_untracked() else {
            return;
        };
        let new_status = if veiculo.status.blocks_status_edit() {
            None
        } else {
            status.get_untracked().parse::<VehicleStatus>().ok()
        };
        let data = UpdateVehicleRequest {
            placa: Some(placa.get_untracked()),
            marca: Some(marca.get_untracked()),
            modelo: Some(modelo.get_untracked()),
            cor: Some(cor.get_untracked()),
            valor_diaria: valor_diaria.get_untracked().parse().ok(),
            ano_modelo: ano_modelo.get_untracked().parse().ok(),
            status: new_status,
        };
        on_save.run((veiculo.id_veiculo, veiculo.tipo_veiculo, data));
    };

    let text_field = move |label: &'static str,
                           value: ReadSignal<String>,
                           set_value: WriteSignal<String>| {
        view! {
            <div>
                <label class="block text-xs font-bold text-gray-500 mb-1 uppercase">{label}</label>
                <input
                    type="text"
                    class="w-full border border-gray-300 rounded-lg p-3 text-sm focus:ring-2 focus:ring-blue-500 outline-none"
                    prop:value=move || value.get()
                    on:input=move |ev| set_value.set(event_target_value(&ev))
                />
            </div>
        }
    };

    view! {
        <Show when=move || open.get() && vehicle.with(|v| v.is_some())>
            <div class="fixed inset-0 z-[60] flex items-center justify-center bg-black/60 backdrop-blur-sm p-4 animate-fade-in">
                <div class="bg-white rounded-2xl shadow-2xl w-full max-w-2xl overflow-hidden max-h-[90vh] flex flex-col">
                    <div class="bg-slate-900 p-6 flex items-center justify-between shrink-0">
                        <div>
                            <h3 class="text-lg font-bold text-white font-futuristic">"Editar Veículo"</h3>
                            <p class="text-xs text-gray-400 uppercase">
                                {move || vehicle.with(|v| v.as_ref()
                                    .map(|v| format!("{} - {}", v.modelo, v.placa))
                                    .unwrap_or_default())}
                            </p>
                        </div>
                        <button
                            on:click=move |_| open.set(false)
                            class="text-gray-400 hover:text-white transition-colors font-bold"
                        >
                            "✕"
                        </button>
                    </div>

                    <div class="p-8 overflow-y-auto">
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                            <div class="md:col-span-2">
                                <Show
                                    when=move || !status_locked()
                                    fallback=|| view! {
                                        <p class="text-sm text-yellow-700 bg-yellow-50 border border-yellow-200 p-3 rounded-lg">
                                            "O status não pode ser alterado enquanto o veículo estiver reservado ou alugado."
                                        </p>
                                    }
                                >
                                    <label class="block text-xs font-bold text-gray-500 mb-1 uppercase">"Status Operacional"</label>
                                    <select
                                        class="w-full border border-gray-300 rounded-lg p-3 text-sm bg-white focus:ring-2 focus:ring-blue-500 outline-none"
                                        prop:value=move || status.get()
                                        on:change=move |ev| set_status.set(event_target_value(&ev))
                                    >
                                        <option value="disponível">"Disponível"</option>
                                        <option value="em manutenção">"Em manutenção"</option>
                                        <option value="indisponível">"Indisponível"</option>
                                    </select>
                                </Show>
                            </div>
                            {text_field("Placa", placa, set_placa)}
                            {text_field("Marca", marca, set_marca)}
                            {text_field("Modelo", modelo, set_modelo)}
                            {text_field("Cor", cor, set_cor)}
                            {text_field("Diária (R$)", valor_diaria, set_valor_diaria)}
                            {text_field("Ano do modelo", ano_modelo, set_ano_modelo)}
                        </div>

                        <div class="flex gap-3 justify-end mt-8">
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

/// Full creation form with a category switch revealing the matching
/// category-specific section.
#[component]
pub fn AddVehicleModal(
    open: RwSignal<bool>,
    #[prop(optional, into)] loading: Signal<bool>,
    #[prop(into)] on_confirm: Callback<(VehicleCategory, CreateVehicleRequest)>,
) -> impl IntoView {
    let (categoria, set_categoria) = signal(VehicleCategory::Passeio);

    let (marca, set_marca) = signal(String::new());
    let (modelo, set_modelo) = signal(String::new());
    let (ano_fabricacao, set_ano_fabricacao) = signal(String::new());
    let (ano_modelo, set_ano_modelo) = signal(String::new());
    let (cor, set_cor) = signal(String::new());
    let (placa, set_placa) = signal(String::new());
    let (valor_diaria, set_valor_diaria) = signal(String::new());
    let (chassi, set_chassi) = signal(String::new());
    let (capacidade_tanque, set_capacidade_tanque) = signal(String::new());
    let (imagem_url, set_imagem_url) = signal(String::new());

    // passeio
    let (tipo_carroceria, set_tipo_carroceria) = signal(String::new());
    let (qtde_portas, set_qtde_portas) = signal(String::new());
    let (qtde_passageiros, set_qtde_passageiros) = signal(String::new());
    let (cambio_automatico, set_cambio_automatico) = signal(false);
    let (ar_condicionado, set_ar_condicionado) = signal(false);

    // motocicleta
    let (cilindrada, set_cilindrada) = signal(String::new());
    let (tipo_tracao, set_tipo_tracao) = signal(String::new());
    let (abs, set_abs) = signal(false);
    let (partida_eletrica, set_partida_eletrica) = signal(false);

    // utilitário
    let (tipo_utilitario, set_tipo_utilitario) = signal(String::new());
    let (capacidade_carga_kg, set_capacidade_carga_kg) = signal(String::new());
    let (qtde_eixos, set_qtde_eixos) = signal(String::new());
    let (max_passageiros, set_max_passageiros) = signal(String::new());

    let handle_submit = move |_| {
        let cat = categoria.get_untracked();

        let opt_text = |value: String| if value.is_empty() { None } else { Some(value) };

        let mut data = CreateVehicleRequest {
            marca: marca.get_untracked(),
            modelo: modelo.get_untracked(),
            ano_fabricacao: ano_fabricacao.get_untracked().parse().unwrap_or_default(),
            ano_modelo: ano_modelo.get_untracked().parse().unwrap_or_default(),
            cor: cor.get_untracked(),
            placa: placa.get_untracked(),
            valor_diaria: valor_diaria.get_untracked().parse().unwrap_or_default(),
            chassi: chassi.get_untracked(),
            capacidade_tanque: capacidade_tanque.get_untracked().parse().unwrap_or_default(),
            imagem_url: opt_text(imagem_url.get_untracked()),
            ..Default::default()
        };

        match cat {
            VehicleCategory::Passeio => {
                data.tipo_carroceria = opt_text(tipo_carroceria.get_untracked());
                data.qtde_portas = qtde_portas.get_untracked().parse().ok();
                data.qtde_passageiros = qtde_passageiros.get_untracked().parse().ok();
                data.cambio_automatico = Some(cambio_automatico.get_untracked());
                data.ar_condicionado = Some(ar_condicionado.get_untracked());
            }
            VehicleCategory::Motocicleta => {
                data.cilindrada = cilindrada.get_untracked().parse().ok();
                data.tipo_tracao = opt_text(tipo_tracao.get_untracked());
                data.abs = Some(abs.get_untracked());
                data.partida_eletrica = Some(partida_eletrica.get_untracked());
            }
            VehicleCategory::Utilitario => {
                data.tipo_utilitario = opt_text(tipo_utilitario.get_untracked());
                data.capacidade_carga_kg = capacidade_carga_kg.get_untracked().parse().ok();
                data.qtde_eixos = qtde_eixos.get_untracked().parse().ok();
                data.max_passageiros = max_passageiros.get_untracked().parse().ok();
            }
        }

        on_confirm.run((cat, data));
    };

    let text_field = move |label: &'static str,
                           value: ReadSignal<String>,
                           set_value: WriteSignal<String>| {
        view! {
            <div>
                <label class="block text-xs font-bold text-gray-500 mb-1 uppercase">{label}</label>
                <input
                    type="text"
                    class="w-full border border-gray-300 rounded-lg p-3 text-sm focus:ring-2 focus:ring-blue-500 outline-none"
                    prop:value=move || value.get()
                    on:input=move |ev| set_value.set(event_target_value(&ev))
                />
            </div>
        }
    };

    let check_field = move |label: &'static str,
                            value: ReadSignal<bool>,
                            set_value: WriteSignal<bool>| {
        view! {
            <label class="flex items-center gap-2 p-3 border border-gray-200 rounded-lg cursor-pointer hover:bg-blue-50 transition-colors">
                <input
                    type="checkbox"
                    class="w-4 h-4 text-blue-600"
                    prop:checked=move || value.get()
                    on:change=move |ev| set_value.set(event_target_checked(&ev))
                />
                <span class="text-sm font-bold text-gray-700">{label}</span>
            </label>
        }
    };

    let category_tab = move |cat: VehicleCategory| {
        view! {
            <button
                type="button"
                on:click=move |_| set_categoria.set(cat)
                class=move || {
                    if categoria.get() == cat {
                        "px-4 py-2 rounded-full text-sm font-bold border bg-blue-600 text-white border-blue-600"
                    } else {
                        "px-4 py-2 rounded-full text-sm font-bold border bg-white text-gray-600 border-gray-200"
                    }
                }
            >
                {cat.label()}
            </button>
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 z-[60] flex items-center justify-center bg-black/60 backdrop-blur-sm p-4 animate-fade-in">
                <div class="bg-white rounded-2xl shadow-2xl w-full max-w-3xl overflow-hidden max-h-[90vh] flex flex-col">
                    <div class="bg-blue-600 p-6 flex items-center justify-between shrink-0">
                        <h3 class="text-xl font-bold text-white font-futuristic">"Adicionar Novo Veículo"</h3>
                        <button
                            on:click=move |_| open.set(false)
                            class="text-blue-100 hover:text-white bg-white/10 p-2 rounded-full hover:bg-white/20 transition-colors font-bold"
                        >
                            "✕"
                        </button>
                    </div>

                    <div class="p-8 overflow-y-auto">
                        <div class="flex gap-2 mb-8">
                            {category_tab(VehicleCategory::Passeio)}
                            {category_tab(VehicleCategory::Motocicleta)}
                            {category_tab(VehicleCategory::Utilitario)}
                        </div>

                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                            {text_field("Marca", marca, set_marca)}
                            {text_field("Modelo", modelo, set_modelo)}
                            {text_field("Ano de fabricação", ano_fabricacao, set_ano_fabricacao)}
                            {text_field("Ano do modelo", ano_modelo, set_ano_modelo)}
                            {text_field("Cor", cor, set_cor)}
                            {text_field("Placa", placa, set_placa)}
                            {text_field("Diária (R$)", valor_diaria, set_valor_diaria)}
                            {text_field("Chassi", chassi, set_chassi)}
                            {text_field("Capacidade do tanque (L)", capacidade_tanque, set_capacidade_tanque)}
                            {text_field("URL da imagem", imagem_url, set_imagem_url)}
                        </div>

                        <h4 class="font-bold text-gray-700 mt-8 mb-4 text-sm uppercase tracking-wider">
                            "Detalhes Específicos (" {move || categoria.get().label()} ")"
                        </h4>

                        <Show when=move || categoria.get() == VehicleCategory::Passeio>
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                                {text_field("Tipo de carroceria", tipo_carroceria, set_tipo_carroceria)}
                                {text_field("Quantidade de portas", qtde_portas, set_qtde_portas)}
                                {text_field("Quantidade de passageiros", qtde_passageiros, set_qtde_passageiros)}
                                <div class="flex flex-col gap-2">
                                    {check_field("Câmbio automático", cambio_automatico, set_cambio_automatico)}
                                    {check_field("Ar-condicionado", ar_condicionado, set_ar_condicionado)}
                                </div>
                            </div>
                        </Show>

                        <Show when=move || categoria.get() == VehicleCategory::Motocicleta>
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                                {text_field("Cilindrada (cc)", cilindrada, set_cilindrada)}
                                {text_field("Tipo de tração", tipo_tracao, set_tipo_tracao)}
                                <div class="flex flex-col gap-2">
                                    {check_field("Freios ABS", abs, set_abs)}
                                    {check_field("Partida elétrica", partida_eletrica, set_partida_eletrica)}
                                </div>
                            </div>
                        </Show>

                        <Show when=move || categoria.get() == VehicleCategory::Utilitario>
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                                {text_field("Tipo de utilitário", tipo_utilitario, set_tipo_utilitario)}
                                {text_field("Capacidade de carga (kg)", capacidade_carga_kg, set_capacidade_carga_kg)}
                                {text_field("Quantidade de eixos", qtde_eixos, set_qtde_eixos)}
                                {text_field("Máximo de passageiros", max_passageiros, set_max_passageiros)}
                            </div>
                        </Show>

                        <div class="flex gap-3 justify-end mt-8">
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
                                {move || if loading.get() { "Cadastrando..." } else { "Cadastrar Veículo" }}
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
