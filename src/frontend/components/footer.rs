use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-gray-200 bg-slate-900 text-white mt-auto">
            <div class="max-w-7xl mx-auto px-6 py-12 text-center">
                <p class="text-2xl font-bold font-futuristic mb-2">"FrotaNext"</p>
                <p class="text-slate-400 mb-6">"Mobilidade sob demanda para você e sua empresa."</p>
                <p class="text-xs text-slate-600">"© 2025 FrotaNext. Todos os direitos reservados."</p>
            </div>
        </footer>
    }
}
