use leptos::prelude::*;

use crate::frontend::components::{Footer, Navbar};

#[component]
fn CategoryCard(
    #[prop(into)] href: String,
    #[prop(into)] title: String,
    #[prop(into)] desc: String,
) -> impl IntoView {
    view! {
        <a
            href=href
            class="group p-8 rounded-2xl bg-white border border-gray-200 shadow-sm
                   hover:shadow-xl hover:-translate-y-1 transition-all text-center"
        >
            <h3 class="text-xl font-bold font-futuristic text-slate-900 mb-2 group-hover:text-blue-600 transition-colors">
                {title}
            </h3>
            <p class="text-gray-500 text-sm leading-relaxed">{desc}</p>
        </a>
    }
}

/// Public marketing page.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50 flex flex-col">
            <Navbar/>

            <section class="pt-40 pb-20 px-6 text-center bg-gradient-to-b from-white to-gray-50">
                <h1 class="text-5xl md:text-6xl font-bold font-futuristic text-slate-900 mb-6 leading-tight">
                    "Sua próxima viagem"<br/>
                    <span class="text-blue-600">"começa aqui"</span>
                </h1>
                <p class="text-xl text-gray-500 max-w-2xl mx-auto mb-10">
                    "Carros de passeio, motocicletas e utilitários com reserva online, "
                    "seguro incluso e retirada na agência central."
                </p>
                <div class="flex flex-wrap gap-4 justify-center">
                    <a href="/frota" class="btn-primary text-lg px-8 py-4">"Conhecer a Frota"</a>
                    <a href="/cadastro" class="btn-ghost text-lg px-8 py-4">"Criar Conta"</a>
                </div>
            </section>

            <section class="py-20 px-6">
                <div class="max-w-5xl mx-auto">
                    <h2 class="text-3xl font-bold font-futuristic text-center text-slate-900 mb-12 uppercase tracking-wide">
                        "Explore Nossas Categorias"
                    </h2>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                        <CategoryCard
                            href="/frota?tipo=passeio"
                            title="Carros de Passeio"
                            desc="Conforto e economia para o dia a dia ou para viajar em família."
                        />
                        <CategoryCard
                            href="/frota?tipo=motocicleta"
                            title="Motocicletas"
                            desc="Agilidade urbana com equipamentos de segurança inclusos."
                        />
                        <CategoryCard
                            href="/frota?tipo=utilitario"
                            title="Utilitários"
                            desc="Capacidade de carga para mudanças e operações da sua empresa."
                        />
                    </div>
                </div>
            </section>

            <section class="py-20 px-6 bg-slate-900 text-white">
                <div class="max-w-5xl mx-auto text-center">
                    <h2 class="text-3xl font-bold font-futuristic mb-4">"Para sua empresa"</h2>
                    <p class="text-slate-400 max-w-2xl mx-auto mb-8">
                        "Contas corporativas gerenciam motoristas autorizados e reservam "
                        "veículos em nome deles, tudo em um só painel."
                    </p>
                    <a href="/cadastro" class="btn-primary text-lg px-8 py-4">"Cadastrar Empresa"</a>
                </div>
            </section>

            <Footer/>
        </div>
    }
}
