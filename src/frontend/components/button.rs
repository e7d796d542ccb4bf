use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
    Danger,
}

/// Submit/action button with a built-in loading spinner.
#[component]
pub fn Button(
    children: Children,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional, into)] loading: Signal<bool>,
    #[prop(optional, into)] loading_text: String,
    #[prop(optional, into)] button_type: String,
) -> impl IntoView {
    let base_classes = "inline-flex items-center justify-center gap-2 px-6 py-3 font-bold rounded-lg transition-all disabled:opacity-50 disabled:cursor-not-allowed";

    let variant_classes = match variant {
        ButtonVariant::Primary => "bg-blue-600 text-white hover:bg-blue-700 shadow-md",
        ButtonVariant::Ghost => "border border-gray-300 text-gray-600 hover:bg-gray-100",
        ButtonVariant::Danger => "bg-red-600 text-white hover:bg-red-700 shadow-md",
    };

    let classes = format!("{} {}", base_classes, variant_classes);

    let loading_text_display = if loading_text.is_empty() {
        "Aguarde...".to_string()
    } else {
        loading_text
    };

    let button_type_val = if button_type.is_empty() {
        "submit".to_string()
    } else {
        button_type
    };

    view! {
        <button
            type=button_type_val
            class=classes
            disabled=move || disabled.get() || loading.get()
        >
            <span
                class="flex items-center justify-center gap-2"
                class:hidden=move || !loading.get()
            >
                <span class="w-4 h-4 border-2 border-white/30 border-t-white rounded-full animate-spin"></span>
                {loading_text_display}
            </span>
            <span class:hidden=move || loading.get()>{children()}</span>
        </button>
    }
}
