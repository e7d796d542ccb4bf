use leptos::prelude::*;

use crate::models::Vehicle;

/// Card shown in the public fleet grid and in the wizard's vehicle step.
#[component]
pub fn VehicleCard(
    vehicle: Vehicle,
    #[prop(into)] action_label: String,
    #[prop(into)] on_action: Callback<Vehicle>,
) -> impl IntoView {
    let action_vehicle = vehicle.clone();

    view! {
        <div class="bg-white rounded-2xl shadow-sm border border-gray-200 overflow-hidden hover:shadow-xl transition-all group">
            <div class="h-48 bg-gray-100 relative">
                {vehicle.imagem_url.clone().map(|url| view! {
                    <img
                        src=url
                        alt=vehicle.modelo.clone()
                        class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-500"
                    />
                })}
                <div class="absolute top-3 right-3 bg-white/90 backdrop-blur px-2 py-1 rounded text-[10px] font-bold uppercase tracking-wider text-slate-700">
                    {vehicle.tipo_veiculo.label()}
                </div>
            </div>
            <div class="p-6">
                <h3 class="text-lg font-bold text-slate-900">{vehicle.modelo.clone()}</h3>
                <p class="text-xs text-gray-500 mb-4">
                    {vehicle.marca.clone()} " • " {vehicle.ano_modelo}
                </p>
                <div class="flex justify-between items-end">
                    <div>
                        <p class="text-xs text-gray-400">"Diária"</p>
                        <p class="text-xl font-bold text-blue-600">
                            {format!("R$ {:.2}", vehicle.valor_diaria)}
                        </p>
                    </div>
                    <button
                        on:click=move |_| on_action.run(action_vehicle.clone())
                        class="bg-slate-900 hover:bg-blue-600 text-white text-sm font-bold py-2 px-4 rounded-lg transition-colors"
                    >
                        {action_label.clone()}
                    </button>
                </div>
            </div>
        </div>
    }
}
