//! Application shell: router, route guards and the 404 fallback.

pub mod components;
pub mod pages;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::services::auth::{provide_auth, use_auth};
use pages::{
    AdminCustomersPage, AdminDashboardPage, AdminFleetPage, AdminLoginPage,
    AdminReservationsPage, DashboardPage, DriversPage, FleetPage, HomePage, LoginPage,
    MyReservationsPage, NewReservationPage, ProfilePage, RegisterPage,
};

/// Main application component with routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_auth();

    view! {
        <Title text="FrotaNext - Aluguel de Veículos"/>
        <Meta name="description" content="Locação de carros, motos e utilitários para você e sua empresa"/>

        <Router>
            <main>
                <Routes fallback=|| view! { <NotFound/> }>
                    // público
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/cadastro") view=RegisterPage/>
                    <Route path=path!("/frota") view=FleetPage/>
                    <Route path=path!("/admin/login") view=AdminLoginPage/>

                    // cliente autenticado
                    <Route path=path!("/dashboard") view=|| view! {
                        <RequireAuth><DashboardPage/></RequireAuth>
                    }/>
                    <Route path=path!("/reservas/nova") view=|| view! {
                        <RequireAuth><NewReservationPage/></RequireAuth>
                    }/>
                    <Route path=path!("/reservas/minhas") view=|| view! {
                        <RequireAuth><MyReservationsPage/></RequireAuth>
                    }/>
                    <Route path=path!("/perfil") view=|| view! {
                        <RequireAuth><ProfilePage/></RequireAuth>
                    }/>
                    <Route path=path!("/empresa/motoristas") view=|| view! {
                        <RequireAuth><DriversPage/></RequireAuth>
                    }/>

                    // back-office
                    <Route path=path!("/admin/dashboard") view=|| view! {
                        <RequireAdmin><AdminDashboardPage/></RequireAdmin>
                    }/>
                    <Route path=path!("/admin/veiculos") view=|| view! {
                        <RequireAdmin><AdminFleetPage/></RequireAdmin>
                    }/>
                    <Route path=path!("/admin/reservas") view=|| view! {
                        <RequireAdmin><AdminReservationsPage/></RequireAdmin>
                    }/>
                    <Route path=path!("/admin/clientes") view=|| view! {
                        <RequireAdmin><AdminCustomersPage/></RequireAdmin>
                    }/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="flex h-screen items-center justify-center text-gray-500">
            "Carregando..."
        </div>
    }
}

/// Renders its children for any authenticated user, otherwise redirects to
/// the customer login. Shows a placeholder while the session resolves.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let guarded = move || {
        if auth.is_authenticated() {
            children().into_any()
        } else {
            view! { <Redirect path="/login"/> }.into_any()
        }
    };
    view! {
        <Show when=move || !auth.loading() fallback=LoadingScreen>
            {guarded.clone()}
        </Show>
    }
}

/// Admin-only variant; anyone else lands on the back-office login.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let guarded = move || {
        if auth.is_admin() {
            children().into_any()
        } else {
            view! { <Redirect path="/admin/login"/> }.into_any()
        }
    };
    view! {
        <Show when=move || !auth.loading() fallback=LoadingScreen>
            {guarded.clone()}
        </Show>
    }
}

/// 404 fallback page.
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50">
            <div class="text-center">
                <h1 class="text-7xl font-bold text-slate-900 font-futuristic mb-4">"404"</h1>
                <p class="text-gray-500 mb-8">"A página que você procura não existe ou foi movida."</p>
                <a href="/" class="btn-primary">"Voltar para o início"</a>
            </div>
        </div>
    }
}
