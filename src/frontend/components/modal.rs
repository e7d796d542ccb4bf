use leptos::prelude::*;

/// Outcome shown by [`StatusModal`] after a mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub success: bool,
    pub title: String,
    pub message: String,
}

impl StatusMessage {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: true,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Result modal: success or error, dismissed with a single button.
#[component]
pub fn StatusModal(state: RwSignal<Option<StatusMessage>>) -> impl IntoView {
    view! {
        <Show when=move || state.with(|s| s.is_some())>
            {move || state.get().map(|status| {
                let (badge, title_color, button) = if status.success {
                    ("bg-green-100 text-green-600", "text-green-800", "bg-green-600 hover:bg-green-700")
                } else {
                    ("bg-red-100 text-red-600", "text-red-800", "bg-red-600 hover:bg-red-700")
                };
                let icon = if status.success { "✓" } else { "!" };
                view! {
                    <div class="fixed inset-0 z-[70] flex items-center justify-center bg-black/40 backdrop-blur-sm p-4 animate-fade-in">
                        <div class="bg-white rounded-2xl shadow-2xl w-full max-w-sm overflow-hidden text-center p-6">
                            <div class=format!("mx-auto w-16 h-16 rounded-full flex items-center justify-center mb-4 text-3xl font-bold {}", badge)>
                                {icon}
                            </div>
                            <h3 class=format!("text-xl font-bold mb-2 font-futuristic {}", title_color)>
                                {status.title.clone()}
                            </h3>
                            <p class="text-gray-600 mb-6 text-sm">{status.message.clone()}</p>
                            <button
                                on:click=move |_| state.set(None)
                                class=format!("w-full py-3 rounded-xl font-bold text-white transition-all shadow-lg {}", button)
                            >
                                "OK, Entendi"
                            </button>
                        </div>
                    </div>
                }
            })}
        </Show>
    }
}

/// Confirmation dialog guarding a destructive or irreversible action.
#[component]
pub fn ConfirmModal(
    open: RwSignal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    #[prop(optional, into)] loading: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(optional)] danger: bool,
) -> impl IntoView {
    let confirm_classes = if danger {
        "bg-red-600 hover:bg-red-700"
    } else {
        "bg-blue-600 hover:bg-blue-700"
    };

    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 z-[60] flex items-center justify-center bg-black/60 backdrop-blur-sm p-4 animate-fade-in">
                <div class="bg-white rounded-2xl shadow-2xl w-full max-w-md overflow-hidden">
                    <div class="bg-blue-50 p-6 border-b border-blue-100 flex items-start justify-between gap-4">
                        <div>
                            <h3 class="text-lg font-bold text-blue-900 font-futuristic">{title.clone()}</h3>
                            <p class="text-sm text-blue-700 mt-1">{description.clone()}</p>
                        </div>
                        <button
                            on:click=move |_| open.set(false)
                            class="text-blue-400 hover:text-blue-700 transition-colors font-bold"
                        >
                            "✕"
                        </button>
                    </div>
                    <div class="p-6 flex gap-3 justify-end">
                        <button
                            on:click=move |_| open.set(false)
                            disabled=move || loading.get()
                            class="px-4 py-2 rounded-lg text-sm font-bold text-gray-600 hover:bg-gray-100 border border-gray-200 transition-colors"
                        >
                            "Cancelar"
                        </button>
                        <button
                            on:click=move |_| on_confirm.run(())
                            disabled=move || loading.get()
                            class=format!("px-6 py-2 rounded-lg text-sm font-bold text-white shadow-lg transition-all disabled:opacity-50 {}", confirm_classes)
                        >
                            {move || if loading.get() { "Aguarde..." } else { "Confirmar" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
